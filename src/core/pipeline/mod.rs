//! # Pipeline Module
//!
//! Orchestrates a full cracking session.
//!
//! ## Pipeline Stages
//! 1. **Load** - Verify paths, read the hashlist, classify by digest length
//! 2. **Crack** - One worker thread per populated algorithm bucket
//! 3. **Join** - Collect every worker's matches and unsolved remainder
//!
//! ## Parallelism
//! Workers are plain OS threads, at most one per algorithm. Each reads the
//! wordlist through its own handle and owns its bucket outright, so nothing
//! is locked. Results come back as thread return values.

mod executor;

pub use executor::{CrackSession, CrackSessionBuilder, RunReport};
