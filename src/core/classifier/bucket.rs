//! Per-algorithm set of target hashes.

use crate::core::hasher::HashAlgorithmKind;
use std::collections::HashSet;

/// The target hashes believed to use one algorithm.
///
/// Lookup has set semantics. The input order of distinct entries is kept
/// so unsolved hashes are reported in the order they were read.
#[derive(Debug, Clone)]
pub struct HashBucket {
    algorithm: HashAlgorithmKind,
    order: Vec<String>,
    remaining: HashSet<String>,
}

impl HashBucket {
    /// Create an empty bucket
    pub fn new(algorithm: HashAlgorithmKind) -> Self {
        Self {
            algorithm,
            order: Vec::new(),
            remaining: HashSet::new(),
        }
    }

    /// The algorithm every entry is assumed to use
    pub fn algorithm(&self) -> HashAlgorithmKind {
        self.algorithm
    }

    /// Add a target hash.
    ///
    /// Returns `false` if the hash was already present.
    pub fn insert(&mut self, hash: String) -> bool {
        if self.remaining.contains(&hash) {
            return false;
        }
        self.order.push(hash.clone());
        self.remaining.insert(hash);
        true
    }

    /// Remove `digest` if it is still unsolved; `true` means it was a match
    pub fn take(&mut self, digest: &str) -> bool {
        self.remaining.remove(digest)
    }

    pub fn contains(&self, digest: &str) -> bool {
        self.remaining.contains(digest)
    }

    /// Number of unsolved entries
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    /// `true` once every entry has been solved
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Consume the bucket, yielding its unsolved entries in input order
    pub fn into_unsolved(self) -> Vec<String> {
        let HashBucket {
            order, remaining, ..
        } = self;
        order
            .into_iter()
            .filter(|hash| remaining.contains(hash))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_rejects_duplicates() {
        let mut bucket = HashBucket::new(HashAlgorithmKind::Md5);
        assert!(bucket.insert("a".repeat(32)));
        assert!(!bucket.insert("a".repeat(32)));
        assert_eq!(bucket.len(), 1);
    }

    #[test]
    fn take_removes_only_once() {
        let mut bucket = HashBucket::new(HashAlgorithmKind::Md5);
        bucket.insert("abc".to_string());
        assert!(bucket.take("abc"));
        assert!(!bucket.take("abc"));
        assert!(bucket.is_empty());
    }

    #[test]
    fn unsolved_keeps_input_order() {
        let mut bucket = HashBucket::new(HashAlgorithmKind::Sha1);
        for hash in ["c", "a", "b", "d"] {
            bucket.insert(hash.to_string());
        }
        bucket.take("a");

        assert_eq!(bucket.into_unsolved(), vec!["c", "b", "d"]);
    }
}
