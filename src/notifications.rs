//! The notification dropdown's unread badge.
//!
//! Opening the dropdown while a badge is visible reports the notifications
//! as read; the badge is only removed once the server confirms, never
//! optimistically. Without a badge no request is made at all.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;

use crate::{api, dom};

const DROPDOWN_ID: &str = "notificationDropdown";
const BADGE_SELECTOR: &str = ".badge";

pub fn bind() -> Result<(), JsValue> {
    let document = dom::document()?;
    let Some(dropdown) = document.get_element_by_id(DROPDOWN_ID) else {
        return Ok(());
    };

    let dropdown_for_handler = dropdown.clone();
    dom::on_click(dropdown.as_ref(), move |_event| {
        let Ok(Some(badge)) = dropdown_for_handler.query_selector(BADGE_SELECTOR) else {
            return;
        };
        spawn_local(async move {
            match api::mark_notifications_read().await {
                Ok(response) if response.is_ok() => badge.remove(),
                // Unconfirmed or failed: the badge stays until a reload.
                Ok(_) | Err(_) => {}
            }
        });
    })
}
