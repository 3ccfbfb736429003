//! The closed set of supported hash algorithms.

use super::digest::hex_digest;
use serde::{Deserialize, Serialize};

/// Available hash algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithmKind {
    /// MD5 - 128-bit digest
    Md5,
    /// SHA-1 - 160-bit digest
    Sha1,
    /// SHA-256 - 256-bit digest
    Sha256,
}

impl HashAlgorithmKind {
    /// Every supported algorithm, in reporting order
    pub const ALL: [HashAlgorithmKind; 3] = [
        HashAlgorithmKind::Md5,
        HashAlgorithmKind::Sha1,
        HashAlgorithmKind::Sha256,
    ];

    /// Length of this algorithm's digest in hex characters
    pub fn digest_len(&self) -> usize {
        match self {
            HashAlgorithmKind::Md5 => 32,
            HashAlgorithmKind::Sha1 => 40,
            HashAlgorithmKind::Sha256 => 64,
        }
    }

    /// Identify the algorithm from the length of a hex digest.
    ///
    /// Returns `None` for lengths no supported algorithm produces.
    pub fn from_digest_len(len: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.digest_len() == len)
    }

    /// Lowercase name, as used in config and reports
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithmKind::Md5 => "md5",
            HashAlgorithmKind::Sha1 => "sha1",
            HashAlgorithmKind::Sha256 => "sha256",
        }
    }

    /// Hash a candidate word (UTF-8 bytes) and render it as lowercase hex
    pub fn digest_hex(&self, word: &str) -> String {
        hex_digest(*self, word.as_bytes())
    }
}

impl std::fmt::Display for HashAlgorithmKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
