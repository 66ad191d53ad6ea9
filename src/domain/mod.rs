//! Domain layer containing the document type and its error vocabulary.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (errors, error codes)
//! - `document` - The ordered key/value document with id and version

pub mod document;
pub mod foundation;
