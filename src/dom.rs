//! Thin DOM helpers shared by the binders.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, Window};

pub(crate) fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("window is unavailable"))
}

pub(crate) fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("document is unavailable"))
}

/// Runs `f` for every element matching `selector`.
pub(crate) fn for_each_element(
    document: &Document,
    selector: &str,
    mut f: impl FnMut(Element) -> Result<(), JsValue>,
) -> Result<(), JsValue> {
    let nodes = document.query_selector_all(selector)?;
    for index in 0..nodes.length() {
        if let Some(element) = nodes.get(index).and_then(|node| node.dyn_into::<Element>().ok()) {
            f(element)?;
        }
    }
    Ok(())
}

/// Attaches a click listener and leaks the closure; binder listeners live
/// for the whole page lifetime.
pub(crate) fn on_click(
    target: &EventTarget,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
