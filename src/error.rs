//! UI Errors
//!
//! Errors raised while wiring widgets to the page. Converted to a JS `Error`
//! at the wasm boundary.

use legalaction_widgets::WidgetError;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Error)]
pub enum UiError {
    #[error("missing element: {0}")]
    MissingElement(String),

    #[error("javascript error: {0}")]
    Js(String),

    #[error("invalid widget options: {0}")]
    Options(#[from] serde_wasm_bindgen::Error),

    #[error(transparent)]
    Widget(#[from] WidgetError),
}

impl UiError {
    pub fn missing(what: impl Into<String>) -> Self {
        UiError::MissingElement(what.into())
    }
}

/// Best-effort message of a thrown JS value
fn js_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => format!("{:?}", value),
    }
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        UiError::Js(js_message(&value))
    }
}

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

pub type Result<T> = std::result::Result<T, UiError>;
