//! Search Document - Ordered key/value documents for search engine mapping
//!
//! This crate provides `MapDocument`, the value exchanged between an
//! object-document mapping layer and a search engine client: an
//! insertion-ordered JSON map with an optional id and version that renders
//! itself to JSON through a process-wide codec.
//!
//! ```
//! use search_document::{Document, DocumentContent, MapDocument};
//!
//! let mut doc = MapDocument::new().append("name", "Alice");
//! doc.set_id("42");
//!
//! assert_eq!(doc.get_str("name").unwrap(), Some("Alice"));
//! assert_eq!(
//!     doc.to_json().unwrap(),
//!     r#"{"content":{"name":"Alice"},"id":"42","version":null}"#
//! );
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;

pub use adapters::{install_shared_codec, shared_codec, SerdeJsonCodec};
pub use config::DocumentConfig;
pub use domain::document::MapDocument;
pub use domain::foundation::{DocumentError, ErrorCode};
pub use ports::{CodecError, Document, DocumentContent, JsonCodec};
