//! MapDocument - Ordered key/value document with optional id and version.
//!
//! The document wraps an insertion-ordered JSON map and carries two pieces
//! of metadata set by the search engine: the document id and its version.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::adapters::shared_codec;
use crate::domain::foundation::{json_type_name, DocumentError};
use crate::ports::{CodecError, Document, DocumentContent, JsonCodec};

use super::content_hash::content_hash;

/// A `Document` backed by an insertion-ordered `serde_json::Map`.
///
/// # Equality
///
/// Two documents are equal when their content maps are equal. The `id` and
/// `version` fields do NOT take part in equality or hashing: a document
/// fetched with id "1" at version 3 equals an unsaved document with the
/// same entries. Content comparison ignores insertion order.
///
/// # Rendering
///
/// `to_json()` renders the whole document, metadata included:
///
/// ```text
/// {"content":{"name":"Alice"},"id":"42","version":null}
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapDocument {
    content: Map<String, Value>,

    #[serde(default)]
    id: Option<String>,

    #[serde(default)]
    version: Option<i64>,
}

impl MapDocument {
    // ════════════════════════════════════════════════════════════════════════════════
    // Construction
    // ════════════════════════════════════════════════════════════════════════════════

    /// Creates an empty document without id or version.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a document holding a copy of `content`.
    ///
    /// Later changes to `content` do not affect the document.
    pub fn from_map(content: &Map<String, Value>) -> Self {
        Self::from(content.clone())
    }

    /// Parses a bare JSON object into a document without id or version.
    pub fn parse(json: &str) -> Result<Self, DocumentError> {
        Self::parse_with(shared_codec(), json)
    }

    /// Like [`MapDocument::parse`], decoding through `codec`.
    pub fn parse_with(codec: &dyn JsonCodec, json: &str) -> Result<Self, DocumentError> {
        let tree = codec.decode(json).map_err(DocumentError::Malformed)?;
        tracing::trace!(bytes = json.len(), "parsed document source");

        match tree {
            Value::Object(content) => Ok(Self::from(content)),
            other => Err(DocumentError::NotAnObject {
                found: json_type_name(&other),
            }),
        }
    }

    /// Restores a document from the output of [`Document::to_json`].
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Self::from_json_with(shared_codec(), json)
    }

    /// Like [`MapDocument::from_json`], decoding through `codec`.
    pub fn from_json_with(codec: &dyn JsonCodec, json: &str) -> Result<Self, DocumentError> {
        let tree = codec.decode(json).map_err(DocumentError::Malformed)?;
        if !tree.is_object() {
            return Err(DocumentError::NotAnObject {
                found: json_type_name(&tree),
            });
        }

        serde_json::from_value(tree).map_err(|e| DocumentError::Malformed(CodecError::Decode(e)))
    }

    // ════════════════════════════════════════════════════════════════════════════════
    // Rendering
    // ════════════════════════════════════════════════════════════════════════════════

    /// Renders the document through `codec` instead of the shared codec.
    pub fn to_json_with(&self, codec: &dyn JsonCodec) -> Result<String, DocumentError> {
        tracing::trace!(id = self.id.as_deref(), entries = self.content.len(), "rendering document");

        let tree = serde_json::to_value(self)
            .map_err(|e| DocumentError::Rendering(CodecError::Encode(e)))?;

        codec.encode(&tree).map_err(|e| {
            tracing::warn!(id = self.id.as_deref(), error = %e, "document rendering failed");
            DocumentError::Rendering(e)
        })
    }

    /// Consumes the document, returning its content map.
    pub fn into_content(self) -> Map<String, Value> {
        self.content
    }
}

impl DocumentContent for MapDocument {
    fn content(&self) -> &Map<String, Value> {
        &self.content
    }

    fn content_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.content
    }
}

impl Document for MapDocument {
    fn has_id(&self) -> bool {
        self.id.is_some()
    }

    fn id(&self) -> Result<&str, DocumentError> {
        self.id.as_deref().ok_or(DocumentError::MissingId)
    }

    fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    fn has_version(&self) -> bool {
        self.version.is_some()
    }

    fn version(&self) -> Result<i64, DocumentError> {
        self.version.ok_or(DocumentError::MissingVersion)
    }

    fn set_version(&mut self, version: i64) {
        self.version = Some(version);
    }

    fn to_json(&self) -> Result<String, DocumentError> {
        self.to_json_with(shared_codec())
    }
}

// Content only. Do not add id or version here: documents are compared by
// what they hold, not by where they were stored.
impl PartialEq for MapDocument {
    fn eq(&self, other: &Self) -> bool {
        self.content == other.content
    }
}

impl Eq for MapDocument {}

impl Hash for MapDocument {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(content_hash(&self.content));
    }
}

impl fmt::Display for MapDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.id.as_deref().unwrap_or("?");
        let version = self
            .version
            .map_or_else(|| "?".to_string(), |v| v.to_string());

        write!(f, "MapDocument@{}#{} ", id, version)?;
        match self.to_json() {
            Ok(json) => f.write_str(&json),
            Err(e) => write!(f, "<unrenderable: {}>", e),
        }
    }
}

impl From<Map<String, Value>> for MapDocument {
    fn from(content: Map<String, Value>) -> Self {
        Self {
            content,
            id: None,
            version: None,
        }
    }
}

impl FromIterator<(String, Value)> for MapDocument {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Map<String, Value>>())
    }
}

impl Extend<(String, Value)> for MapDocument {
    fn extend<I: IntoIterator<Item = (String, Value)>>(&mut self, iter: I) {
        self.content.extend(iter);
    }
}

impl<'a> IntoIterator for &'a MapDocument {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.iter()
    }
}
