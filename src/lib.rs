//! Client-side interactivity for the RUMI learning platform.
//!
//! RUMI pages are rendered on the server; this crate compiles to WebAssembly
//! and is loaded on every page to wire up the handful of behaviors the
//! templates rely on: password peeking, the shared content modal with
//! progress reporting, the dependent `alur`/`tipe` dropdown, auto-dismissing
//! alerts, the inline PDF viewer and the notification badge.
//!
//! Each binder scans the document for its own target elements and is a no-op
//! when they are absent, so the same bundle runs unchanged on every page.

pub mod alerts;
pub mod api;
pub mod bootstrap;
pub mod content_modal;
pub mod content_types;
mod dom;
pub mod notifications;
pub mod password_toggle;

pub use content_types::LearningFlow;
pub use password_toggle::PasswordVisibility;

use std::sync::atomic::{AtomicBool, Ordering};

use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

// Guard to prevent double-registration of listeners (relevant during hot reload).
static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Module entry point, invoked by the loader once the document is ready.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    console_error_panic_hook::set_once();

    bind_all();
    Ok(())
}

/// Registers every page binder. Binders are isolated: a failure in one is
/// logged and the remaining ones still run, so a malformed page never loses
/// all of its interactivity at once.
fn bind_all() {
    let binders: [(&str, fn() -> Result<(), JsValue>); 6] = [
        ("password-toggle", password_toggle::bind),
        ("content-modal", content_modal::bind),
        ("content-types", content_types::bind),
        ("alerts", alerts::bind),
        ("read-now", content_modal::bind_read_now),
        ("notifications", notifications::bind),
    ];
    for (name, bind) in binders {
        if let Err(error) = bind() {
            web_sys::console::error_2(
                &JsValue::from_str(&format!("failed to register {name} binder:")),
                &error,
            );
        }
    }
}
