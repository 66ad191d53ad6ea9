//! JSON Adapters - Codec implementations.
//!
//! Contains the `serde_json` implementation of the `JsonCodec` port and the
//! process-wide instance documents render through by default.

mod serde_json_codec;

pub use serde_json_codec::{install_shared_codec, shared_codec, SerdeJsonCodec};
