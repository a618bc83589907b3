//! SHA-2 digest computation as specified by FIPS 180-4.
//!
//! This library computes the six SHA-2 digest variants over in-memory byte
//! inputs: SHA-256, SHA-224, SHA-512, SHA-384, SHA-512/224, and SHA-512/256.
//! Every operation takes one contiguous byte slice and returns the digest as
//! a lowercase hexadecimal string of fixed length.
//!
//! # Quick Start
//!
//! ```rust
//! let digest = sha2kit::sha256(b"abc");
//! assert_eq!(
//!     digest,
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//!
//! // Variants can also be selected at runtime by name.
//! let algorithm: sha2kit::Algorithm = "SHA-512/256".parse()?;
//! assert_eq!(algorithm.digest(b"abc").len(), algorithm.hex_len());
//! # Ok::<(), sha2kit::Error>(())
//! ```
//!
//! # Features
//!
//! - **Byte-exact** - reproduces the NIST known-answer vectors for all six
//!   variants
//! - **Pure functions** - no shared state, no I/O; calls are independent and
//!   safe to run from any number of threads
//! - **Runtime dispatch** - [`Algorithm`] models a variant as a plain value
//!   for harnesses that pick the variant by name
//!
//! Inputs are limited to 2^61 - 1 bytes (the bit length must fit in 64 bits).
//! Streaming input is out of scope; each call hashes one complete slice.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod digest;

pub use digest::{
    sha224, sha256, sha384, sha512, sha512_224, sha512_256, Algorithm, Error, Result,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
