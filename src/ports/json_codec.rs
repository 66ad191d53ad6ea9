//! JSON Codec Port - Text encoding interface for documents.
//!
//! Documents turn themselves into a `serde_json::Value` tree; the codec
//! turns that tree into text and back. Adapters (like `SerdeJsonCodec`)
//! decide the textual layout.

use serde_json::Value;
use thiserror::Error;

/// Port for encoding and decoding JSON text.
///
/// # Contract
///
/// Implementations must:
/// - Be immutable once constructed, so one instance can be shared by every
///   document in the process
/// - Produce text that their own `decode` accepts
/// - Report failures as `CodecError`, never panic
///
/// # Usage
///
/// ```rust,ignore
/// let codec: &dyn JsonCodec = search_document::shared_codec();
///
/// let text = codec.encode(&json!({"name": "Alice"}))?;
/// let tree = codec.decode(&text)?;
/// ```
pub trait JsonCodec: Send + Sync {
    /// Encode a JSON tree as text.
    fn encode(&self, value: &Value) -> Result<String, CodecError>;

    /// Decode text into a JSON tree.
    fn decode(&self, json: &str) -> Result<Value, CodecError>;
}

/// Errors that can occur while encoding or decoding JSON.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("JSON encoding failed: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("JSON decoding failed: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Unsupported value: {0}")]
    Unsupported(String),
}

impl CodecError {
    /// Returns true if the failure happened while producing text.
    pub fn is_encode(&self) -> bool {
        !matches!(self, CodecError::Decode(_))
    }
}
