//! SHA-2 digest pipelines and variant dispatch
//!
//! Two parallel pipelines share the same structural shape: a 32-bit pipeline
//! (64-byte blocks, 64 rounds) serving SHA-256 and SHA-224, and a 64-bit
//! pipeline (128-byte blocks, 80 rounds) serving SHA-512, SHA-384,
//! SHA-512/224, and SHA-512/256. Variants differ only in word size, round
//! constants, initial chaining value, and the truncation length of the final
//! hex string.

mod consts;
mod error;
mod hex;
mod sha256;
mod sha512;

pub use error::{Error, Result};

use std::fmt;
use std::str::FromStr;

use tracing::trace;

/// A SHA-2 family digest variant.
///
/// A variant is a plain value: it knows its canonical name and output
/// length, and selects which of the two pipelines to run and from which
/// initial chaining value. Truncating variants (SHA-224, SHA-384,
/// SHA-512/224, SHA-512/256) run the parent pipeline with their own IV and
/// keep the leftmost prefix of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// SHA-256: 32-bit pipeline, 64-character digest
    Sha256,
    /// SHA-224: 32-bit pipeline with its own IV, truncated to 56 characters
    Sha224,
    /// SHA-512: 64-bit pipeline, 128-character digest
    Sha512,
    /// SHA-384: 64-bit pipeline with its own IV, truncated to 96 characters
    Sha384,
    /// SHA-512/224: 64-bit pipeline with its own IV, truncated to 56 characters
    Sha512_224,
    /// SHA-512/256: 64-bit pipeline with its own IV, truncated to 64 characters
    Sha512_256,
}

impl Algorithm {
    /// All supported variants, in FIPS 180-4 publication order.
    pub const ALL: [Self; 6] = [
        Self::Sha256,
        Self::Sha224,
        Self::Sha512,
        Self::Sha384,
        Self::Sha512_224,
        Self::Sha512_256,
    ];

    /// Canonical FIPS 180-4 name, e.g. `"SHA-512/256"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha256 => "SHA-256",
            Self::Sha224 => "SHA-224",
            Self::Sha512 => "SHA-512",
            Self::Sha384 => "SHA-384",
            Self::Sha512_224 => "SHA-512/224",
            Self::Sha512_256 => "SHA-512/256",
        }
    }

    /// Digest length in hex characters.
    #[must_use]
    pub const fn hex_len(self) -> usize {
        match self {
            Self::Sha224 | Self::Sha512_224 => 56,
            Self::Sha256 | Self::Sha512_256 => 64,
            Self::Sha384 => 96,
            Self::Sha512 => 128,
        }
    }

    /// Bytes consumed per compression-function invocation.
    #[must_use]
    pub const fn block_size(self) -> usize {
        match self {
            Self::Sha256 | Self::Sha224 => sha256::BLOCK_SIZE,
            Self::Sha512 | Self::Sha384 | Self::Sha512_224 | Self::Sha512_256 => {
                sha512::BLOCK_SIZE
            }
        }
    }

    /// Compute the digest of `data` as a lowercase hex string of exactly
    /// [`hex_len`](Self::hex_len) characters.
    ///
    /// Identical inputs yield identical outputs; there are no error
    /// conditions for inputs below 2^61 bytes.
    #[must_use]
    pub fn digest(self, data: &[u8]) -> String {
        trace!(algorithm = self.name(), input_len = data.len(), "computing digest");

        let mut digest = match self {
            Self::Sha256 => hex::encode(&sha256::compute(consts::SHA256_IV, data)),
            Self::Sha224 => hex::encode(&sha256::compute(consts::SHA224_IV, data)),
            Self::Sha512 => hex::encode(&sha512::compute(consts::SHA512_IV, data)),
            Self::Sha384 => hex::encode(&sha512::compute(consts::SHA384_IV, data)),
            Self::Sha512_224 => hex::encode(&sha512::compute(consts::SHA512_224_IV, data)),
            Self::Sha512_256 => hex::encode(&sha512::compute(consts::SHA512_256_IV, data)),
        };

        // Truncating the hex string keeps the leftmost bytes of the raw digest.
        digest.truncate(self.hex_len());
        digest
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Parse a variant from its name. Case, dashes, slashes, and
    /// underscores are ignored, so `"SHA-512/224"`, `"sha512_224"`, and
    /// `"sha512224"` all name the same variant.
    fn from_str(value: &str) -> Result<Self> {
        let normalized: String = value
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "sha256" => Ok(Self::Sha256),
            "sha224" => Ok(Self::Sha224),
            "sha512" => Ok(Self::Sha512),
            "sha384" => Ok(Self::Sha384),
            "sha512224" => Ok(Self::Sha512_224),
            "sha512256" => Ok(Self::Sha512_256),
            _ => Err(Error::UnknownAlgorithm {
                name: value.to_string(),
            }),
        }
    }
}

/// Compute the SHA-256 digest of `data` as a 64-character hex string.
#[must_use]
pub fn sha256(data: &[u8]) -> String {
    Algorithm::Sha256.digest(data)
}

/// Compute the SHA-224 digest of `data` as a 56-character hex string.
#[must_use]
pub fn sha224(data: &[u8]) -> String {
    Algorithm::Sha224.digest(data)
}

/// Compute the SHA-512 digest of `data` as a 128-character hex string.
#[must_use]
pub fn sha512(data: &[u8]) -> String {
    Algorithm::Sha512.digest(data)
}

/// Compute the SHA-384 digest of `data` as a 96-character hex string.
#[must_use]
pub fn sha384(data: &[u8]) -> String {
    Algorithm::Sha384.digest(data)
}

/// Compute the SHA-512/224 digest of `data` as a 56-character hex string.
#[must_use]
pub fn sha512_224(data: &[u8]) -> String {
    Algorithm::Sha512_224.digest(data)
}

/// Compute the SHA-512/256 digest of `data` as a 64-character hex string.
#[must_use]
pub fn sha512_256(data: &[u8]) -> String {
    Algorithm::Sha512_256.digest(data)
}
