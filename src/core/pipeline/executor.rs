//! Session execution implementation.

use crate::core::classifier::{classify, Classification, HashBucket};
use crate::core::config::CrackPaths;
use crate::core::cracker::{
    CrackOutcome, CrackWorker, MatchResult, WorkerFailure, DEFAULT_PROGRESS_INTERVAL,
};
use crate::core::hasher::HashAlgorithmKind;
use crate::core::wordlist::split_lines;
use crate::error::{CrackerError, ListKind, LoadError, WorkerError};
use crate::events::{null_sender, Event, EventSender, LoadEvent, RunEvent, RunSummary};
use chrono::{DateTime, Utc};
use std::any::Any;
use std::collections::BTreeMap;
use std::fs;
use std::thread;
use std::time::Instant;

/// Result of a finished session
#[derive(Debug)]
pub struct RunReport {
    /// Wall-clock time the session was created
    pub started_at: DateTime<Utc>,
    /// Every cracked hash, grouped by algorithm, wordlist order within each
    pub matches: Vec<MatchResult>,
    /// Hashes left uncracked, grouped by algorithm, input order within each
    pub unsolved: Vec<String>,
    /// Hashes of no known length, in input order
    pub unknown: Vec<String>,
    /// Repeated hashes collapsed into an earlier entry
    pub duplicates: Vec<String>,
    /// Workers that stopped on an error
    pub failures: Vec<WorkerError>,
    /// Words hashed per algorithm
    pub words_tried: BTreeMap<HashAlgorithmKind, u64>,
    /// Lines in the hashlist
    pub total_hashes: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl RunReport {
    pub fn solved(&self) -> usize {
        self.matches.len()
    }

    fn summary(&self) -> RunSummary {
        RunSummary {
            total_hashes: self.total_hashes,
            solved: self.solved(),
            unsolved: self.unsolved.len(),
            unknown: self.unknown.len(),
            failed_workers: self.failures.len(),
            duration_ms: self.duration_ms,
        }
    }

    fn record_outcome(&mut self, outcome: CrackOutcome) {
        self.words_tried.insert(outcome.algorithm, outcome.words_tried);
        self.matches.extend(outcome.matches);
        self.unsolved.extend(outcome.unsolved);
    }

    fn record_failure(&mut self, failure: WorkerFailure) {
        self.words_tried.insert(failure.algorithm(), failure.words_tried);
        self.matches.extend(failure.matches);
        self.unsolved.extend(failure.unresolved);
        self.failures.push(failure.error);
    }
}

/// Builder for session configuration
pub struct CrackSessionBuilder {
    paths: CrackPaths,
    started: Option<Instant>,
    progress_interval: u64,
}

impl CrackSessionBuilder {
    /// Create a builder for the given input files
    pub fn new(paths: CrackPaths) -> Self {
        Self {
            paths,
            started: None,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    /// Measure match times from `started` instead of from `build()`
    pub fn started(mut self, started: Instant) -> Self {
        self.started = Some(started);
        self
    }

    /// Words between progress events (0 disables them)
    pub fn progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Build the session
    pub fn build(self) -> CrackSession {
        CrackSession {
            paths: self.paths,
            started: self.started.unwrap_or_else(Instant::now),
            started_at: Utc::now(),
            progress_interval: self.progress_interval,
        }
    }
}

/// A dictionary attack over one wordlist and one hashlist
pub struct CrackSession {
    paths: CrackPaths,
    started: Instant,
    started_at: DateTime<Utc>,
    progress_interval: u64,
}

impl CrackSession {
    /// Create a new session builder
    pub fn builder(paths: CrackPaths) -> CrackSessionBuilder {
        CrackSessionBuilder::new(paths)
    }

    pub fn paths(&self) -> &CrackPaths {
        &self.paths
    }

    /// Run the session without events
    pub fn run(&self) -> Result<RunReport, CrackerError> {
        self.run_with_events(&null_sender())
    }

    /// Verify the inputs, then read and classify the hashlist
    pub fn load(&self, events: &EventSender) -> Result<Classification, CrackerError> {
        self.paths.verify()?;

        let raw = fs::read(&self.paths.hashlist).map_err(|source| LoadError::Read {
            kind: ListKind::Hashlist,
            path: self.paths.hashlist.clone(),
            source,
        })?;
        let classification = classify(split_lines(&String::from_utf8_lossy(&raw)));

        events.send(Event::Load(LoadEvent::HashesSorted {
            bucketed: classification.bucketed(),
            unknown: classification.unknown.len(),
            duplicates: classification.duplicates.len(),
        }));

        for duplicate in &classification.duplicates {
            tracing::warn!(hash = %duplicate, "duplicate hash collapsed into earlier entry");
        }

        let total = classification.total();
        tracing::info!(
            total,
            bucketed = classification.bucketed(),
            unknown = classification.unknown.len(),
            "hashlist loaded"
        );
        events.send(Event::Load(LoadEvent::HashesLoaded { total }));

        Ok(classification)
    }

    /// Run the session with event reporting
    pub fn run_with_events(&self, events: &EventSender) -> Result<RunReport, CrackerError> {
        events.send(Event::Run(RunEvent::Started));

        let classification = self.load(events)?;
        let worker = CrackWorker::new(&self.paths.wordlist, self.started)
            .progress_interval(self.progress_interval);

        Ok(self.crack_all(classification, events, |bucket, events| {
            worker.crack(bucket, events)
        }))
    }

    /// Run `crack` on one thread per populated bucket, join them all and
    /// merge what they return into a report.
    fn crack_all<F>(
        &self,
        classification: Classification,
        events: &EventSender,
        crack: F,
    ) -> RunReport
    where
        F: Fn(HashBucket, &EventSender) -> Result<CrackOutcome, WorkerFailure> + Sync,
    {
        let total_hashes = classification.total();

        let Classification {
            buckets,
            unknown,
            duplicates,
        } = classification;

        let mut report = RunReport {
            started_at: self.started_at,
            matches: Vec::new(),
            unsolved: Vec::new(),
            unknown,
            duplicates,
            failures: Vec::new(),
            words_tried: BTreeMap::new(),
            total_hashes,
            duration_ms: 0,
        };

        let populated: Vec<_> = buckets.into_values().filter(|b| !b.is_empty()).collect();

        if !populated.is_empty() {
            events.send(Event::Run(RunEvent::WorkersLaunched {
                algorithms: populated.iter().map(|b| b.algorithm()).collect(),
            }));
        }

        let results = thread::scope(|scope| {
            let handles: Vec<_> = populated
                .into_iter()
                .map(|bucket| {
                    let algorithm = bucket.algorithm();
                    // Kept so a panicking worker's hashes are still reported
                    let snapshot = bucket.clone().into_unsolved();
                    let crack = &crack;
                    let events = events.clone();
                    let handle = thread::Builder::new()
                        .name(format!("crack-{algorithm}"))
                        .spawn_scoped(scope, move || crack(bucket, &events));
                    (algorithm, snapshot, handle)
                })
                .collect();

            handles
                .into_iter()
                .map(|(algorithm, snapshot, handle)| match handle {
                    Ok(handle) => handle.join().unwrap_or_else(|panic| {
                        Err(WorkerFailure {
                            error: WorkerError::Panicked {
                                algorithm,
                                message: panic_message(&*panic),
                            },
                            matches: Vec::new(),
                            unresolved: snapshot,
                            words_tried: 0,
                        })
                    }),
                    Err(source) => Err(WorkerFailure {
                        error: WorkerError::Spawn { algorithm, source },
                        matches: Vec::new(),
                        unresolved: snapshot,
                        words_tried: 0,
                    }),
                })
                .collect::<Vec<_>>()
        });

        for result in results {
            match result {
                Ok(outcome) => report.record_outcome(outcome),
                Err(failure) => {
                    tracing::error!(algorithm = %failure.algorithm(), "{}", failure.error);
                    report.record_failure(failure);
                }
            }
        }

        report.duration_ms = self.started.elapsed().as_millis() as u64;

        events.send(Event::Run(RunEvent::Completed {
            summary: report.summary(),
        }));

        report
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
