//! # Hash Cracker
//!
//! Dictionary attack against lists of unsalted MD5, SHA-1 and SHA-256
//! digests.
//!
//! ## How It Works
//! 1. Target hashes are bucketed by digest length
//! 2. One worker per non-empty bucket streams the wordlist independently
//! 3. Each worker stops as soon as its bucket is fully cracked
//!
//! ## Architecture
//! - `core` - The cracking engine
//! - `events` - Match and progress events for front ends
//! - `error` - Error types

pub mod core;
pub mod error;
pub mod events;

// Re-export commonly used types at the crate root
pub use error::{CrackerError, Result};

/// Initialize tracing for the library.
///
/// Logs go to stderr so stdout carries only the cracking results.
/// `RUST_LOG` takes precedence; otherwise `verbose` selects `debug` over `warn`.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    // A subscriber may already be installed when embedded in another program
    let _ = tracing::subscriber::set_global_default(subscriber);
}
