//! Password peeking for `.password-toggle-icon` controls.
//!
//! Each icon names its input through `data-target`; a click flips the input
//! between hidden and plain text and swaps the icon class to match.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement};

use crate::dom;

/// Whether a password input currently shows its characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordVisibility {
    Hidden,
    Plain,
}

impl PasswordVisibility {
    pub fn from_input_type(input_type: &str) -> Self {
        if input_type == "password" { Self::Hidden } else { Self::Plain }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Hidden => Self::Plain,
            Self::Plain => Self::Hidden,
        }
    }

    /// The `type` attribute the bound input carries in this state.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Hidden => "password",
            Self::Plain => "text",
        }
    }

    /// The icon class shown on the toggle control in this state.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Hidden => "fa-eye",
            Self::Plain => "fa-eye-slash",
        }
    }
}

pub fn bind() -> Result<(), JsValue> {
    let document = dom::document()?;
    let document_for_handlers = document.clone();
    dom::for_each_element(&document, ".password-toggle-icon", move |icon| {
        let document = document_for_handlers.clone();
        let icon_for_handler = icon.clone();
        dom::on_click(icon.as_ref(), move |_event| {
            if let Err(error) = toggle(&document, &icon_for_handler) {
                web_sys::console::error_1(&error);
            }
        })
    })
}

fn toggle(document: &Document, icon: &Element) -> Result<(), JsValue> {
    let Some(target_id) = icon.get_attribute("data-target") else {
        return Ok(());
    };
    let Some(input) = document
        .get_element_by_id(&target_id)
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
    else {
        return Ok(());
    };

    let visibility = PasswordVisibility::from_input_type(&input.type_());
    let next = visibility.toggled();

    input.set_type(next.input_type());
    icon.class_list().remove_1(visibility.icon_class())?;
    icon.class_list().add_1(next.icon_class())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_toggles_round_trip() {
        let start = PasswordVisibility::Hidden;
        assert_eq!(start.toggled().toggled(), start);
    }

    #[test]
    fn test_hidden_state_attributes() {
        let hidden = PasswordVisibility::from_input_type("password");
        assert_eq!(hidden, PasswordVisibility::Hidden);
        assert_eq!(hidden.input_type(), "password");
        assert_eq!(hidden.icon_class(), "fa-eye");
    }

    #[test]
    fn test_plain_state_attributes() {
        let plain = PasswordVisibility::Hidden.toggled();
        assert_eq!(plain.input_type(), "text");
        assert_eq!(plain.icon_class(), "fa-eye-slash");
    }
}
