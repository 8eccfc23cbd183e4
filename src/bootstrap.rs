//! Bindings to the Bootstrap widgets the server-rendered pages load globally.
//!
//! Only the two widgets the binders drive programmatically are bound; all
//! other Bootstrap behavior (dropdown toggling, manual alert dismissal)
//! stays declarative in the templates.

use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    /// `bootstrap.Modal` — drives the shared content dialog.
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Modal;

    #[wasm_bindgen(constructor, js_namespace = bootstrap)]
    pub fn new(element: &Element) -> Modal;

    #[wasm_bindgen(method)]
    pub fn show(this: &Modal);

    /// `bootstrap.Alert` — dismisses a banner with the toolkit's own fade-out.
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Alert;

    #[wasm_bindgen(constructor, js_namespace = bootstrap)]
    pub fn new(element: &Element) -> Alert;

    #[wasm_bindgen(method)]
    pub fn close(this: &Alert);
}
