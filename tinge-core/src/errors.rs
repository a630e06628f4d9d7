//! errors.rs - Custom error types for the tinge-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.

use thiserror::Error;

/// This enum represents all possible error types in the `tinge-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TingeError {
    /// A rule token did not contain exactly one delimiter occurrence.
    #[error("cannot parse rule '{token}': expected exactly one '{delimiter}' between pattern and style")]
    MalformedRule { token: String, delimiter: String },

    /// A rule referenced a style name the palette does not know.
    #[error("style '{0}' does not exist")]
    UnknownStyle(String),
}
