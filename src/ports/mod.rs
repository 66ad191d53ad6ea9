//! Ports - Interfaces between the document and its collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Document Ports
//!
//! - `DocumentContent` - Ordered key/value access
//! - `Document` - Identity, version and JSON rendering
//!
//! ## Codec Ports
//!
//! - `JsonCodec` - Encoding and decoding of JSON text

mod document;
mod json_codec;

pub use document::{Document, DocumentContent};
pub use json_codec::{CodecError, JsonCodec};
