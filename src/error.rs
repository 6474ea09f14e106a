//! Error types surfaced by the network layer and the workflow store.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// A remote call that did not produce a usable response.
///
/// Operations hand this back as a value instead of throwing; state is left
/// exactly as it was before the call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status code.
    #[error("API request failed: {status} {status_text}")]
    Http { status: u16, status_text: String },

    /// The request never completed (connection refused, CORS, aborted fetch).
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Fold a raw `JsValue` rejection from the fetch pipeline into `Network`.
    pub(crate) fn from_js(err: JsValue) -> Self {
        ApiError::Network(format!("{:?}", err))
    }
}
