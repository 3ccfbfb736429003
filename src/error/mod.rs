//! # Error Module
//!
//! Error types for the hash cracker.
//!
//! ## Design Principles
//! - **Never panic** on user data - return errors instead
//! - **Include context** - which file, which path, which algorithm
//! - **One line** - every message fits on a single `ERROR:` line

use crate::core::hasher::HashAlgorithmKind;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum CrackerError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

/// Errors that occur while locating the wordlist and hashlist paths
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found at path '{path}'")]
    NotFound { path: PathBuf },

    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config file {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("config file {path} has no '{key}' entry")]
    MissingKey { key: &'static str, path: PathBuf },
}

/// Which of the two input lists a load error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Wordlist,
    Hashlist,
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListKind::Wordlist => write!(f, "wordlist"),
            ListKind::Hashlist => write!(f, "hashlist"),
        }
    }
}

/// Errors that occur before any worker starts
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("{kind} not found at path '{path}'")]
    FileNotFound { kind: ListKind, path: PathBuf },

    #[error("failed to read {kind} {path}: {source}")]
    Read {
        kind: ListKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised inside a single cracking worker.
///
/// These never abort the run; the orchestrator records them per algorithm.
#[derive(Error, Debug)]
pub enum WorkerError {
    #[error("{algorithm} worker failed reading {path}: {source}")]
    Io {
        algorithm: HashAlgorithmKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to start {algorithm} worker: {source}")]
    Spawn {
        algorithm: HashAlgorithmKind,
        #[source]
        source: std::io::Error,
    },

    #[error("{algorithm} worker panicked: {message}")]
    Panicked {
        algorithm: HashAlgorithmKind,
        message: String,
    },
}

impl WorkerError {
    /// The algorithm whose worker failed
    pub fn algorithm(&self) -> HashAlgorithmKind {
        match self {
            WorkerError::Io { algorithm, .. }
            | WorkerError::Spawn { algorithm, .. }
            | WorkerError::Panicked { algorithm, .. } => *algorithm,
        }
    }
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, CrackerError>;
