//! Navigator error type.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::state::page::PageId;

#[derive(Debug, thiserror::Error)]
pub enum NavError {
    #[error("page section \"{0}\" not found")]
    SectionMissing(PageId),
    #[error("unknown page id \"{0}\"")]
    UnknownPage(String),
    #[error("invalid navigator config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("dom: {0}")]
    Dom(String),
}

#[cfg(feature = "csr")]
impl From<wasm_bindgen::JsValue> for NavError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        NavError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
