//! Setup errors for the DOM layer.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures during chrome construction or event wiring. Once the widget is
/// running, the interaction path absorbs its own failures and never raises.
#[derive(Debug, Error)]
pub enum DeskError {
    #[error("no global window object")]
    NoWindow,

    #[error("no document on window")]
    NoDocument,

    #[error("element is not an HtmlElement")]
    ElementCast,

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl From<JsValue> for DeskError {
    fn from(value: JsValue) -> Self {
        DeskError::Dom(format!("{value:?}"))
    }
}
