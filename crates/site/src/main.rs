//! Binary entrypoint for the browser-hosted content renderer.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    site::mount();
}

#[cfg(not(all(target_arch = "wasm32", feature = "csr")))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `site_app` for wasm32 with the `csr` feature and load it on a page that has a `#root` element."
    );
}
