use std::rc::Rc;

use leptos::{logging, request_animation_frame, spawn_local};
use site_host::{NavigationHub, NavigationTrigger, RootContainer};
use site_host_web::{current_path, install_navigation_bridge, WebContentSource, WebRoot};

use crate::{config::SiteConfig, dispatch::Dispatcher};

/// Wires the renderer into the current page.
///
/// Returns `None`, leaving the page inert, when the configuration is invalid or the root
/// element is missing. Otherwise every navigation trigger schedules a dispatch on the next
/// animation frame, and one is scheduled immediately.
pub fn mount_with(config: SiteConfig) -> Option<Rc<Dispatcher<WebRoot>>> {
    if let Err(err) = config.validate() {
        logging::error!("{err}");
        return None;
    }
    let root = WebRoot::attach(&config.root_id)?;
    let dispatcher = Rc::new(Dispatcher::from_config(
        &config,
        Rc::new(WebContentSource),
        root,
    ));

    let hub = NavigationHub::default();
    let scheduled = Rc::clone(&dispatcher);
    hub.subscribe(move |trigger| schedule_dispatch(Rc::clone(&scheduled), trigger));
    if let Err(err) = install_navigation_bridge(&hub) {
        logging::warn!("navigation hooks unavailable, rendering on load only: {err}");
    }
    hub.emit(NavigationTrigger::Initial);

    Some(dispatcher)
}

fn schedule_dispatch<R: RootContainer + 'static>(
    dispatcher: Rc<Dispatcher<R>>,
    trigger: NavigationTrigger,
) {
    request_animation_frame(move || {
        // Read at frame time so rapid successive navigations render the latest path.
        let path = current_path().unwrap_or_default();
        spawn_local(async move {
            let outcome = dispatcher.dispatch(&path).await;
            logging::debug_warn!(
                "{} dispatch for `{}`: {:?}",
                trigger.as_str(),
                path,
                outcome
            );
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn missing_root_leaves_the_page_inert() {
        assert!(mount_with(SiteConfig::default()).is_none());
    }

    #[test]
    fn invalid_config_leaves_the_page_inert() {
        let config = SiteConfig {
            root_id: String::new(),
            ..SiteConfig::default()
        };
        assert!(mount_with(config).is_none());
    }
}
