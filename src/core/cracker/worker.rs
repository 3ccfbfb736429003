//! The per-algorithm cracking loop.

use super::{CrackOutcome, MatchResult, WorkerFailure};
use crate::core::classifier::HashBucket;
use crate::core::hasher::HashAlgorithmKind;
use crate::core::wordlist::WordlistReader;
use crate::error::WorkerError;
use crate::events::{CrackEvent, CrackProgress, Event, EventSender};
use std::path::PathBuf;
use std::time::Instant;

/// Words between progress events
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 10_000;

/// Cracks one bucket at a time against a wordlist.
///
/// A worker holds no per-bucket state, so a single instance can be shared
/// by every thread of a session.
#[derive(Debug, Clone)]
pub struct CrackWorker {
    wordlist: PathBuf,
    started: Instant,
    progress_interval: u64,
}

impl CrackWorker {
    /// Create a worker for `wordlist`; match times are measured from `started`
    pub fn new(wordlist: impl Into<PathBuf>, started: Instant) -> Self {
        Self {
            wordlist: wordlist.into(),
            started,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    /// Emit a progress event every `interval` words (0 disables them)
    pub fn progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Scan the wordlist until `bucket` is empty or the words run out.
    pub fn crack(
        &self,
        mut bucket: HashBucket,
        events: &EventSender,
    ) -> Result<CrackOutcome, WorkerFailure> {
        let algorithm = bucket.algorithm();
        let mut matches = Vec::new();
        let mut words_tried = 0;

        events.send(Event::Crack(CrackEvent::Started {
            algorithm,
            targets: bucket.len(),
        }));
        tracing::debug!(%algorithm, targets = bucket.len(), "worker started");

        let scanned = self.scan(&mut bucket, &mut matches, &mut words_tried, events);

        if let Err(error) = scanned {
            tracing::error!(%algorithm, words_tried, "{error}");
            events.send(Event::Crack(CrackEvent::Failed {
                algorithm,
                message: error.to_string(),
            }));
            return Err(WorkerFailure {
                error,
                matches,
                unresolved: bucket.into_unsolved(),
                words_tried,
            });
        }

        let unsolved = bucket.into_unsolved();
        events.send(Event::Crack(CrackEvent::Finished {
            algorithm,
            words_tried,
            unsolved: unsolved.len(),
        }));
        tracing::debug!(%algorithm, words_tried, unsolved = unsolved.len(), "worker finished");

        Ok(CrackOutcome {
            algorithm,
            matches,
            unsolved,
            words_tried,
        })
    }

    fn scan(
        &self,
        bucket: &mut HashBucket,
        matches: &mut Vec<MatchResult>,
        words_tried: &mut u64,
        events: &EventSender,
    ) -> Result<(), WorkerError> {
        let algorithm = bucket.algorithm();
        if bucket.is_empty() {
            return Ok(());
        }

        let words = WordlistReader::open(&self.wordlist).map_err(|e| self.io_error(algorithm, e))?;

        for word in words {
            let word = word.map_err(|e| self.io_error(algorithm, e))?;
            *words_tried += 1;

            let digest = algorithm.digest_hex(&word);
            if bucket.take(&digest) {
                let found = MatchResult::new(algorithm, digest, word, self.started.elapsed());
                events.send(Event::Crack(CrackEvent::Matched(found.clone())));
                matches.push(found);

                if bucket.is_empty() {
                    break;
                }
            }

            if self.progress_interval > 0 && *words_tried % self.progress_interval == 0 {
                events.send(Event::Crack(CrackEvent::Progress(CrackProgress {
                    algorithm,
                    words_tried: *words_tried,
                    remaining: bucket.len(),
                })));
            }
        }

        Ok(())
    }

    fn io_error(&self, algorithm: HashAlgorithmKind, source: std::io::Error) -> WorkerError {
        WorkerError::Io {
            algorithm,
            path: self.wordlist.clone(),
            source,
        }
    }
}
