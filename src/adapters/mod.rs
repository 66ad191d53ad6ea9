//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external libraries:
//! - `json` - JSON codec backed by `serde_json`

pub mod json;

pub use json::{install_shared_codec, shared_codec, SerdeJsonCodec};
