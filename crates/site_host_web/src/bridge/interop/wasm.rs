use js_sys::{Function, Reflect};
use site_host::NavigationTrigger;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::*;

pub type RootHandle = web_sys::Element;

fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

pub async fn fetch_text(url: &str) -> Result<ContentResponse, ContentError> {
    let window = web_sys::window().ok_or(ContentError::Unsupported)?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|err| ContentError::Network(js_error_to_string(err)))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|err| ContentError::Network(js_error_to_string(err)))?;
    let status = response.status();
    let body = response
        .text()
        .map_err(|err| ContentError::Malformed(js_error_to_string(err)))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|err| ContentError::Malformed(js_error_to_string(err)))?;
    Ok(ContentResponse {
        status,
        body: body.as_string().unwrap_or_default(),
    })
}

pub fn find_root(id: &str) -> Option<RootHandle> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

pub fn clear_root(root: &RootHandle) {
    root.set_inner_html("");
}

pub fn append_node(root: &RootHandle, node: &Node) -> Result<(), String> {
    let document = root
        .owner_document()
        .ok_or_else(|| "root element has no owner document".to_string())?;
    let element = materialize(&document, node).map_err(js_error_to_string)?;
    root.append_child(&element)
        .map(|_| ())
        .map_err(js_error_to_string)
}

// Text goes through `textContent`, never `innerHTML`.
fn materialize(document: &web_sys::Document, node: &Node) -> Result<web_sys::Element, JsValue> {
    let element = document.create_element(&node.tag)?;
    if let Some(text) = &node.text {
        element.set_text_content(Some(text));
    }
    if let Some(class_name) = &node.class_name {
        element.set_class_name(class_name);
    }
    for child in &node.children {
        element.append_child(&materialize(document, child)?)?;
    }
    Ok(element)
}

pub fn root_child_count(root: &RootHandle) -> usize {
    root.child_nodes().length() as usize
}

pub fn element_text(id: &str) -> Option<String> {
    find_root(id)?.text_content()
}

pub fn current_path() -> Option<String> {
    web_sys::window()?.location().pathname().ok()
}

pub fn install_navigation_hooks(hub: &NavigationHub) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
    let history = window.history().map_err(js_error_to_string)?;
    wrap_history_method(&history, "pushState", NavigationTrigger::PushState, hub)?;
    wrap_history_method(&history, "replaceState", NavigationTrigger::ReplaceState, hub)?;
    listen(&window, "popstate", NavigationTrigger::PopState, hub)?;
    listen(&window, "DOMContentLoaded", NavigationTrigger::DocumentReady, hub)?;
    Ok(())
}

/// Replaces `history[method]` with a pass-through wrapper that notifies `hub` after the
/// original returns. Exceptions from the original propagate and skip the notification.
fn wrap_history_method(
    history: &web_sys::History,
    method: &str,
    trigger: NavigationTrigger,
    hub: &NavigationHub,
) -> Result<(), String> {
    let key = JsValue::from_str(method);
    let original: Function = Reflect::get(history, &key)
        .map_err(js_error_to_string)?
        .dyn_into()
        .map_err(|_| format!("history.{method} is not a function"))?;
    let target: JsValue = history.clone().into();
    let hub = hub.clone();
    let wrapper = Closure::<dyn Fn(JsValue, JsValue, JsValue) -> Result<JsValue, JsValue>>::new(
        move |state: JsValue, unused: JsValue, url: JsValue| {
            hub.wrap_fallible(trigger, || original.call3(&target, &state, &unused, &url))
        },
    );
    Reflect::set(history, &key, wrapper.as_ref()).map_err(js_error_to_string)?;
    // The wrapper lives as long as the page.
    wrapper.forget();
    Ok(())
}

fn listen(
    window: &web_sys::Window,
    event: &str,
    trigger: NavigationTrigger,
    hub: &NavigationHub,
) -> Result<(), String> {
    let hub = hub.clone();
    let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_| {
        hub.emit(trigger);
    }));
    window
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .map_err(js_error_to_string)?;
    callback.forget();
    Ok(())
}
