use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while wiring the game into the page.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("canvas 2d context unavailable")]
    NoContext,
    #[error("element #{0} is not a canvas")]
    NotACanvas(String),
    #[error("DOM call failed: {0}")]
    Dom(String),
    #[cfg(feature = "serde_json")]
    #[error("bad config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for HostError {
    fn from(v: JsValue) -> Self {
        HostError::Dom(v.as_string().unwrap_or_else(|| format!("{v:?}")))
    }
}

impl From<HostError> for JsValue {
    fn from(e: HostError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
