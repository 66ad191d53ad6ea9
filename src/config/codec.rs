//! JSON codec configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Widest indent accepted for pretty output.
pub const MAX_INDENT: usize = 8;

/// Output layout of the shared JSON codec
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CodecConfig {
    /// Emit indented, multi-line JSON instead of compact JSON
    #[serde(default)]
    pub pretty: bool,

    /// Spaces per nesting level when `pretty` is set
    #[serde(default = "default_indent")]
    pub indent: usize,
}

impl CodecConfig {
    /// Compact output, the default.
    pub fn compact() -> Self {
        Self::default()
    }

    /// Pretty output with the given indent width.
    pub fn pretty(indent: usize) -> Self {
        Self {
            pretty: true,
            indent,
        }
    }

    /// Validate codec configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.indent > MAX_INDENT {
            return Err(ValidationError::IndentTooLarge { max: MAX_INDENT });
        }
        Ok(())
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: default_indent(),
        }
    }
}

fn default_indent() -> usize {
    2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_config_defaults() {
        let config = CodecConfig::default();
        assert!(!config.pretty);
        assert_eq!(config.indent, 2);
        assert_eq!(config, CodecConfig::compact());
    }

    #[test]
    fn test_codec_config_deserialization() {
        let json = r#"{ "pretty": true, "indent": 4 }"#;

        let config: CodecConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config, CodecConfig::pretty(4));
    }

    #[test]
    fn test_missing_indent_uses_default() {
        let config: CodecConfig = serde_json::from_str(r#"{ "pretty": true }"#).unwrap();
        assert_eq!(config.indent, 2);
    }

    #[test]
    fn test_indent_too_large_fails_validation() {
        let config = CodecConfig::pretty(MAX_INDENT + 1);
        assert!(matches!(
            config.validate(),
            Err(ValidationError::IndentTooLarge { max: MAX_INDENT })
        ));
        assert!(CodecConfig::pretty(MAX_INDENT).validate().is_ok());
    }
}
