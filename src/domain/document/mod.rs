//! Document module - The ordered key/value document exchanged with the
//! search engine.
//!
//! `MapDocument` implements the `Document` and `DocumentContent` ports.
//! Content hashing lives beside it so equality and hashing stay in step.

mod content_hash;
mod map_document;

pub use map_document::MapDocument;
