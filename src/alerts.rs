//! Auto-dismissing alert banners.
//!
//! Every dismissible alert rendered with the page closes itself after a
//! fixed delay through Bootstrap's own dismiss mechanism, which handles the
//! fade-out and removal. The timer is never cancelled; if the learner has
//! already dismissed the banner the late fire must do nothing.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;

use crate::{bootstrap, dom};

/// How long a dismissible alert stays on screen.
const DISMISS_DELAY_MS: u32 = 3_000;

pub fn bind() -> Result<(), JsValue> {
    let document = dom::document()?;
    dom::for_each_element(&document, ".alert.alert-dismissible", |alert| {
        Timeout::new(DISMISS_DELAY_MS, move || {
            // Manually dismissed banners are detached by Bootstrap; closing
            // one again would throw inside the toolkit.
            if alert.is_connected() {
                bootstrap::Alert::new(&alert).close();
            }
        })
        .forget();
        Ok(())
    })
}
