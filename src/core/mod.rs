//! # Core Module
//!
//! The front-end-agnostic cracking engine.
//!
//! ## Modules
//! - `config` - Resolves and verifies the wordlist/hashlist paths
//! - `classifier` - Sorts target hashes into per-algorithm buckets
//! - `hasher` - Digest algorithms
//! - `wordlist` - Lazy, lenient wordlist reading
//! - `cracker` - The per-algorithm worker
//! - `pipeline` - Orchestrates the full session
//! - `reporter` - Renders results for the console

pub mod classifier;
pub mod config;
pub mod cracker;
pub mod hasher;
pub mod pipeline;
pub mod reporter;
pub mod wordlist;

// Re-export commonly used types
pub use classifier::{classify, Classification, HashBucket};
pub use config::CrackPaths;
pub use cracker::{CrackOutcome, CrackWorker, MatchResult};
pub use hasher::HashAlgorithmKind;
pub use pipeline::{CrackSession, RunReport};
