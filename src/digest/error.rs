//! Digest error types

use thiserror::Error;

/// Errors surfaced by the digest API.
///
/// Digest computation itself is total: every input below the documented
/// length limit produces a digest. The only fallible operation is looking a
/// variant up by name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Algorithm name not recognized
    #[error("unknown digest algorithm: {name:?}")]
    UnknownAlgorithm {
        /// The unrecognized name
        name: String,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
