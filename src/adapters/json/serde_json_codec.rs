//! serde_json Codec - Implementation of JsonCodec.
//!
//! Also owns the process-wide codec instance that documents render through
//! when no codec is passed explicitly.

use once_cell::sync::OnceCell;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use crate::config::{CodecConfig, ConfigError};
use crate::ports::{CodecError, JsonCodec};

/// `serde_json`-backed codec.
///
/// # Thread Safety
///
/// Holds only its immutable layout settings, so it is `Send + Sync` and a
/// single instance can serve every document in the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerdeJsonCodec {
    // `None` selects compact output
    indent: Option<String>,
}

impl Default for SerdeJsonCodec {
    fn default() -> Self {
        Self::new(&CodecConfig::default())
    }
}

impl SerdeJsonCodec {
    /// Create a codec with the layout described by `config`.
    pub fn new(config: &CodecConfig) -> Self {
        let indent = config.pretty.then(|| " ".repeat(config.indent));
        Self { indent }
    }

    /// Returns true if output is indented.
    pub fn is_pretty(&self) -> bool {
        self.indent.is_some()
    }

    fn encode_pretty(value: &Value, indent: &str) -> Result<String, CodecError> {
        let mut buf = Vec::with_capacity(128);
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value
            .serialize(&mut serializer)
            .map_err(CodecError::Encode)?;

        String::from_utf8(buf).map_err(|e| CodecError::Unsupported(e.to_string()))
    }
}

impl JsonCodec for SerdeJsonCodec {
    fn encode(&self, value: &Value) -> Result<String, CodecError> {
        match &self.indent {
            Some(indent) => Self::encode_pretty(value, indent),
            None => serde_json::to_string(value).map_err(CodecError::Encode),
        }
    }

    fn decode(&self, json: &str) -> Result<Value, CodecError> {
        serde_json::from_str(json).map_err(CodecError::Decode)
    }
}

/// Process-wide codec, set at most once.
static SHARED_CODEC: OnceCell<SerdeJsonCodec> = OnceCell::new();

/// Returns the process-wide codec, creating a compact one on first use.
pub fn shared_codec() -> &'static SerdeJsonCodec {
    SHARED_CODEC.get_or_init(|| {
        tracing::debug!("initializing default shared JSON codec");
        SerdeJsonCodec::default()
    })
}

/// Installs the process-wide codec from configuration.
///
/// Must run before the first document renders; once the shared codec
/// exists it cannot be replaced.
///
/// # Errors
///
/// - `ConfigError::ValidationFailed` if `config` is invalid
/// - `ConfigError::CodecAlreadyInstalled` if the shared codec is already set
pub fn install_shared_codec(config: &CodecConfig) -> Result<&'static SerdeJsonCodec, ConfigError> {
    config.validate()?;

    let codec = SerdeJsonCodec::new(config);
    if SHARED_CODEC.set(codec).is_err() {
        tracing::warn!("shared JSON codec already initialized, keeping existing instance");
        return Err(ConfigError::CodecAlreadyInstalled);
    }

    tracing::debug!(pretty = config.pretty, indent = config.indent, "installed shared JSON codec");
    Ok(shared_codec())
}
