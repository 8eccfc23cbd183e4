//! The dependent `alur` → `tipe` dropdown and its static option table.
//!
//! The server pre-selects a flow when it renders the page; the rebuild runs
//! once at bind time so the `tipe` options always agree with that selection,
//! and again on every `change` of the `alur` selector.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlOptionElement, HtmlSelectElement};

use crate::dom;

/// Top-level learning-flow category driving which content types are offered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LearningFlow {
    Memahami,
    Mengaplikasi,
    Merefleksi,
}

impl LearningFlow {
    /// Parses an `#alur` selector value. Unknown values map to `None`.
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "memahami" => Some(Self::Memahami),
            "mengaplikasi" => Some(Self::Mengaplikasi),
            "merefleksi" => Some(Self::Merefleksi),
            _ => None,
        }
    }

    /// Ordered content-type labels offered for this flow.
    pub fn type_options(self) -> &'static [&'static str] {
        match self {
            Self::Memahami => {
                &["Bacaan (PDF/Slide)", "Video", "Audio", "Peta Konsep", "Infografis"]
            }
            Self::Mengaplikasi => &["Kuis", "Simulasi Virtual", "Studi Kasus", "Proyek Kolaboratif"],
            Self::Merefleksi => &["Jurnal Refleksi", "Diskusi Terpandu"],
        }
    }
}

/// Content-type labels for a raw flow value; empty for unknown keys.
pub fn options_for(alur_value: &str) -> &'static [&'static str] {
    LearningFlow::from_value(alur_value).map_or(&[], LearningFlow::type_options)
}

/// The value the `tipe` selector keeps after a rebuild: the current one when
/// it survives, otherwise `None` and the selector falls back to its first
/// option.
pub fn retained_selection<'a>(options: &[&'a str], current: &str) -> Option<&'a str> {
    options.iter().copied().find(|option| *option == current)
}

pub fn bind() -> Result<(), JsValue> {
    let document = dom::document()?;
    let Some(alur) = select_element(&document, "alur") else {
        return Ok(());
    };
    let Some(tipe) = select_element(&document, "tipe") else {
        return Ok(());
    };

    rebuild_tipe_options(&document, &alur, &tipe)?;

    let closure = {
        let document = document.clone();
        let alur = alur.clone();
        let tipe = tipe.clone();
        Closure::<dyn FnMut()>::new(move || {
            if let Err(error) = rebuild_tipe_options(&document, &alur, &tipe) {
                web_sys::console::error_1(&error);
            }
        })
    };
    alur.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn select_element(document: &Document, id: &str) -> Option<HtmlSelectElement> {
    document.get_element_by_id(id)?.dyn_into::<HtmlSelectElement>().ok()
}

fn rebuild_tipe_options(
    document: &Document,
    alur: &HtmlSelectElement,
    tipe: &HtmlSelectElement,
) -> Result<(), JsValue> {
    let current = tipe.value();
    tipe.set_inner_html("");

    let options = options_for(&alur.value());
    for label in options {
        let option = document
            .create_element("option")?
            .dyn_into::<HtmlOptionElement>()
            .map_err(|_| JsValue::from_str("created element is not an <option>"))?;
        option.set_value(label);
        option.set_text_content(Some(label));
        tipe.append_child(&option)?;
    }

    if let Some(retained) = retained_selection(options, &current) {
        tipe.set_value(retained);
    }
    Ok(())
}
