//! # Cracker Module
//!
//! One worker per algorithm bucket. A worker streams the wordlist from the
//! start with its own file handle, hashes every word under its algorithm
//! and removes matching digests from its bucket. It stops reading as soon
//! as the bucket is empty.
//!
//! Workers share nothing mutable: the bucket is moved into the worker and
//! the unsolved remainder comes back as its return value. Matches are also
//! streamed as events the moment they are found.

mod worker;

pub use worker::{CrackWorker, DEFAULT_PROGRESS_INTERVAL};

use crate::core::hasher::HashAlgorithmKind;
use crate::error::WorkerError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Number of leading hash characters shown in a match line
pub const DISPLAY_HASH_CHARS: usize = 15;

/// A cracked hash
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Algorithm of the bucket that owned the hash
    pub algorithm: HashAlgorithmKind,
    /// The full target hash
    pub hash: String,
    /// The wordlist entry that produced it
    pub word: String,
    /// Seconds since the session started, rounded to 2 decimals
    pub elapsed_secs: f64,
}

impl MatchResult {
    /// Create a match, rounding `elapsed` to hundredths of a second
    pub fn new(
        algorithm: HashAlgorithmKind,
        hash: String,
        word: String,
        elapsed: Duration,
    ) -> Self {
        Self {
            algorithm,
            hash,
            word,
            elapsed_secs: (elapsed.as_secs_f64() * 100.0).round() / 100.0,
        }
    }

    /// The hash truncated for display, e.g. `d077f244def8a70...`
    pub fn short_hash(&self) -> String {
        let prefix = self.hash.get(..DISPLAY_HASH_CHARS).unwrap_or(&self.hash);
        format!("{prefix}...")
    }
}

/// What a worker hands back when it stops normally
#[derive(Debug, Clone)]
pub struct CrackOutcome {
    pub algorithm: HashAlgorithmKind,
    /// Matches in wordlist order
    pub matches: Vec<MatchResult>,
    /// Hashes no word produced, in input order
    pub unsolved: Vec<String>,
    /// Words hashed before stopping
    pub words_tried: u64,
}

/// A worker that stopped because of an error.
///
/// Carries whatever the worker had established before failing, so matches
/// found so far are not lost and the rest is still reported as unsolved.
#[derive(Debug)]
pub struct WorkerFailure {
    pub error: WorkerError,
    pub matches: Vec<MatchResult>,
    pub unresolved: Vec<String>,
    pub words_tried: u64,
}

impl WorkerFailure {
    pub fn algorithm(&self) -> HashAlgorithmKind {
        self.error.algorithm()
    }
}
