//! The shared content modal.
//!
//! Two ways in: "view content" buttons report progress to the backend and
//! only open the modal once the server confirms, while "read now" links
//! embed their target directly with no network call. Either way, closing
//! the modal blanks the inline frame so embedded content stops running.
//!
//! "View content" buttons are added and removed by other page logic after
//! load, so they are handled through one delegated listener on `body`
//! rather than per-element bindings.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{AddEventListenerOptions, Document, Element, Event, HtmlIFrameElement};

use crate::{api, bootstrap, dom};

const MODAL_ID: &str = "contentModal";
const TITLE_SELECTOR: &str = ".modal-title";
const FRAME_SELECTOR: &str = "#contentFrame";
const HIDDEN_EVENT: &str = "hidden.bs.modal";
const BLANK_PAGE: &str = "about:blank";

pub fn bind() -> Result<(), JsValue> {
    let document = dom::document()?;
    let Some(modal) = document.get_element_by_id(MODAL_ID) else {
        return Ok(());
    };

    bind_view_content(&document, &modal)?;
    bind_frame_reset(&modal)?;
    Ok(())
}

/// Wires `.read-now-btn` links to the modal. The link target is trusted to
/// be directly embeddable (PDFs served by the same origin).
pub fn bind_read_now() -> Result<(), JsValue> {
    let document = dom::document()?;
    let Some(modal) = document.get_element_by_id(MODAL_ID) else {
        return Ok(());
    };

    dom::for_each_element(&document, ".read-now-btn", move |button| {
        let modal = modal.clone();
        let button_for_handler = button.clone();
        dom::on_click(button.as_ref(), move |event| {
            event.prevent_default();
            let Some(href) = button_for_handler.get_attribute("href") else {
                return;
            };
            let title = button_for_handler.get_attribute("data-title").unwrap_or_default();
            match set_modal_content(&modal, &title, &href) {
                Ok(()) => bootstrap::Modal::new(&modal).show(),
                Err(error) => web_sys::console::error_1(&error),
            }
        })
    })
}

fn bind_view_content(document: &Document, modal: &Element) -> Result<(), JsValue> {
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document body is unavailable"))?;

    let modal = modal.clone();
    dom::on_click(body.as_ref(), move |event| {
        let Some(button) = delegated_target(&event, ".view-content-btn") else {
            return;
        };
        event.prevent_default();

        let (Some(url), Some(title), Some(konten_id)) = (
            button.get_attribute("data-url"),
            button.get_attribute("data-title"),
            button.get_attribute("data-konten-id"),
        ) else {
            return;
        };

        let modal = modal.clone();
        spawn_local(async move {
            match api::mark_content_complete(&konten_id).await {
                Ok(response) if response.is_ok() => {
                    if let Err(error) = open_with_reload(&modal, &title, &url) {
                        web_sys::console::error_1(&error);
                    }
                }
                // Not confirmed: no progress recorded, modal stays closed.
                Ok(_) => {}
                Err(error) => {
                    web_sys::console::error_1(&JsValue::from_str(&format!(
                        "content completion request failed: {error}"
                    )));
                }
            }
        });
    })
}

/// Resolves the element a delegated click was aimed at, walking up from the
/// event target like `Element.closest`.
fn delegated_target(event: &Event, selector: &str) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()?.closest(selector).ok()?
}

fn open_with_reload(modal: &Element, title: &str, url: &str) -> Result<(), JsValue> {
    set_modal_content(modal, title, url)?;
    bootstrap::Modal::new(modal).show();

    // One shot: when the learner closes the modal the page reloads so the
    // freshly recorded progress shows up in the rendered lists.
    let reload = Closure::<dyn FnMut()>::new(|| {
        if let Some(window) = web_sys::window() {
            if let Err(error) = window.location().reload() {
                web_sys::console::error_1(&error);
            }
        }
    });
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    modal.add_event_listener_with_callback_and_add_event_listener_options(
        HIDDEN_EVENT,
        reload.as_ref().unchecked_ref(),
        &options,
    )?;
    reload.forget();
    Ok(())
}

/// Blanks the inline frame on every close, however the modal was opened.
fn bind_frame_reset(modal: &Element) -> Result<(), JsValue> {
    let modal_for_handler = modal.clone();
    let reset = Closure::<dyn FnMut()>::new(move || {
        if let Ok(frame) = content_frame(&modal_for_handler) {
            frame.set_src(BLANK_PAGE);
        }
    });
    modal.add_event_listener_with_callback(HIDDEN_EVENT, reset.as_ref().unchecked_ref())?;
    reset.forget();
    Ok(())
}

fn set_modal_content(modal: &Element, title: &str, url: &str) -> Result<(), JsValue> {
    if let Some(title_element) = modal.query_selector(TITLE_SELECTOR)? {
        title_element.set_text_content(Some(title));
    }
    content_frame(modal)?.set_src(url);
    Ok(())
}

fn content_frame(modal: &Element) -> Result<HtmlIFrameElement, JsValue> {
    modal
        .query_selector(FRAME_SELECTOR)?
        .ok_or_else(|| JsValue::from_str("contentFrame is missing from the modal"))?
        .dyn_into::<HtmlIFrameElement>()
        .map_err(|_| JsValue::from_str("contentFrame is not an <iframe>"))
}
