//! DOM Helpers
//!
//! Thin wrappers over web-sys used by the widget bindings.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::{Result, UiError};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| UiError::missing("window"))
}

pub fn document_of(root: &Element) -> Result<Document> {
    root.owner_document().ok_or_else(|| UiError::missing("document"))
}

/// `<html>` element, for page-wide queries
pub fn page_root(document: &Document) -> Result<Element> {
    document.document_element().ok_or_else(|| UiError::missing("document element"))
}

/// All elements under `root` matching `selector`, in document order
pub fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>> {
    let nodes = root.query_selector_all(selector)?;
    Ok(js_sys::Array::from(&nodes)
        .iter()
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn query(root: &Element, selector: &str) -> Result<Option<Element>> {
    Ok(root.query_selector(selector)?)
}

pub fn text_of(element: &Element) -> String {
    element.text_content().unwrap_or_default().trim().to_string()
}

/// `value` of an input or select
pub fn control_value(element: &Element) -> String {
    js_sys::Reflect::get(element, &JsValue::from_str("value"))
        .ok()
        .and_then(|value| value.as_string())
        .unwrap_or_default()
}

pub fn set_class(element: &Element, class: &str, on: bool) -> Result<()> {
    element.class_list().toggle_with_force(class, on)?;
    Ok(())
}

/// Inline `display` style: cleared when visible, `none` otherwise
pub fn set_displayed(element: &Element, visible: bool) -> Result<()> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        html.style().set_property("display", if visible { "" } else { "none" })?;
    }
    Ok(())
}

/// Element the event was dispatched to, if it is an element
pub fn event_element(event: &Event) -> Option<Element> {
    event.target().and_then(|target| target.dyn_into::<Element>().ok())
}

/// Whether the event started on or inside a link
pub fn from_link(event: &Event) -> bool {
    event_element(event)
        .and_then(|element| element.closest("a").ok().flatten())
        .is_some()
}

pub fn current_hash() -> Result<String> {
    Ok(window()?.location().hash()?)
}

/// Rewrite the URL fragment without scrolling or adding a history entry
pub fn replace_hash(fragment: &str) -> Result<()> {
    let url = format!("#{}", fragment);
    window()?.history()?.replace_state_with_url(&JsValue::NULL, "", Some(&url))?;
    Ok(())
}

/// Register a listener for the page's lifetime
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}
