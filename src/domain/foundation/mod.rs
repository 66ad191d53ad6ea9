//! Foundation module - Shared domain primitives.
//!
//! Contains the error vocabulary shared by the document type, its
//! capability traits and the codec adapters.

mod errors;

pub use errors::{DocumentError, ErrorCode};

pub(crate) use errors::json_type_name;
