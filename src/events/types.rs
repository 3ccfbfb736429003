//! Event type definitions for progress reporting.

use crate::core::cracker::MatchResult;
use crate::core::hasher::HashAlgorithmKind;
use serde::{Deserialize, Serialize};

/// All events emitted by a cracking session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    /// Hashlist loading events
    Load(LoadEvent),
    /// Per-algorithm worker events
    Crack(CrackEvent),
    /// Session-level events
    Run(RunEvent),
}

/// Events while reading and classifying the hashlist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LoadEvent {
    /// Every hash has been assigned to a bucket or the unknown list
    HashesSorted {
        /// Distinct hashes placed in algorithm buckets
        bucketed: usize,
        /// Hashes of no known length
        unknown: usize,
        /// Repeats collapsed into an existing bucket entry
        duplicates: usize,
    },
    /// The hashlist is fully read and classified
    HashesLoaded { total: usize },
}

/// Events from a single algorithm's worker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CrackEvent {
    /// A worker started scanning the wordlist
    Started {
        algorithm: HashAlgorithmKind,
        targets: usize,
    },
    /// Periodic progress update
    Progress(CrackProgress),
    /// A target hash was cracked
    Matched(MatchResult),
    /// The worker stopped: bucket empty or wordlist exhausted
    Finished {
        algorithm: HashAlgorithmKind,
        words_tried: u64,
        unsolved: usize,
    },
    /// The worker failed; its remaining hashes stay unsolved
    Failed {
        algorithm: HashAlgorithmKind,
        message: String,
    },
}

/// Progress information for one worker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrackProgress {
    /// Algorithm this worker is cracking
    pub algorithm: HashAlgorithmKind,
    /// Candidate words hashed so far
    pub words_tried: u64,
    /// Target hashes still unsolved
    pub remaining: usize,
}

/// Session-level events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RunEvent {
    /// Session has started
    Started,
    /// Workers are about to launch
    WorkersLaunched { algorithms: Vec<HashAlgorithmKind> },
    /// Every worker has been joined
    Completed { summary: RunSummary },
}

/// Summary of a finished session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Lines in the hashlist
    pub total_hashes: usize,
    /// Hashes cracked
    pub solved: usize,
    /// Hashes left uncracked
    pub unsolved: usize,
    /// Hashes of no known type
    pub unknown: usize,
    /// Workers that failed
    pub failed_workers: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_serializable() {
        let event = Event::Crack(CrackEvent::Progress(CrackProgress {
            algorithm: HashAlgorithmKind::Sha256,
            words_tried: 10_000,
            remaining: 3,
        }));

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: Event = serde_json::from_str(&json).unwrap();

        match deserialized {
            Event::Crack(CrackEvent::Progress(p)) => {
                assert_eq!(p.algorithm, HashAlgorithmKind::Sha256);
                assert_eq!(p.words_tried, 10_000);
            }
            _ => panic!("Wrong event type"),
        }
    }

    #[test]
    fn run_summary_is_serializable() {
        let summary = RunSummary {
            total_hashes: 12,
            solved: 9,
            unsolved: 2,
            unknown: 1,
            failed_workers: 0,
            duration_ms: 5000,
        };

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"solved\":9"));
    }
}
