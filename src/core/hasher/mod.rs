//! # Hasher Module
//!
//! Computes cryptographic digests of candidate words.
//!
//! ## Supported Algorithms
//! - **MD5** - 32 hex characters
//! - **SHA-1** - 40 hex characters
//! - **SHA-256** - 64 hex characters
//!
//! The algorithm set is a closed enum. Adding an algorithm means adding a
//! variant, its digest length and its entry in the dispatch `match`; the
//! compiler then points at every place that needs updating.
//!
//! ## Example
//! ```rust,ignore
//! use hash_cracker::core::hasher::HashAlgorithmKind;
//!
//! let kind = HashAlgorithmKind::from_digest_len(32).unwrap();
//! assert_eq!(kind.digest_hex("cat"), "d077f244def8a70e5ea758bd8352fcd8");
//! ```

mod digest;
mod kind;

pub use digest::hex_digest;
pub use kind::HashAlgorithmKind;
