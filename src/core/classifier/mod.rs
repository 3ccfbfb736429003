//! # Classifier Module
//!
//! Sorts raw hash strings into per-algorithm buckets by digest length.
//!
//! There is no algorithm tagging in a hashlist, so length is the only
//! signal: 32 hex characters is MD5, 40 is SHA-1, 64 is SHA-256. Anything
//! else is an unknown hash type. Length counts characters, not bytes, so a
//! line of multibyte text never passes for a digest. Strings of the right length are not checked
//! for being hexadecimal; a malformed one simply never matches.

mod bucket;

pub use bucket::HashBucket;

use crate::core::hasher::HashAlgorithmKind;
use std::collections::BTreeMap;

/// Result of classifying a hashlist
#[derive(Debug, Clone, Default)]
pub struct Classification {
    /// One bucket per algorithm that received at least one hash
    pub buckets: BTreeMap<HashAlgorithmKind, HashBucket>,
    /// Hashes of no known length, in input order
    pub unknown: Vec<String>,
    /// Repeats of a hash already present in its bucket, in input order
    pub duplicates: Vec<String>,
}

impl Classification {
    /// Number of input lines this classification accounts for
    pub fn total(&self) -> usize {
        self.bucketed() + self.unknown.len() + self.duplicates.len()
    }

    /// Number of distinct hashes across all buckets
    pub fn bucketed(&self) -> usize {
        self.buckets.values().map(HashBucket::len).sum()
    }

    /// Buckets with at least one hash left to crack
    pub fn populated(&self) -> impl Iterator<Item = &HashBucket> {
        self.buckets.values().filter(|bucket| !bucket.is_empty())
    }
}

/// Classify raw hashlist lines.
///
/// Each line is trimmed of surrounding whitespace before its length is
/// inspected. Every line ends up in exactly one bucket, the unknown list, or
/// the duplicates list.
pub fn classify<I, S>(raw_lines: I) -> Classification
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut classification = Classification::default();

    for line in raw_lines {
        let hash = line.as_ref().trim();

        match HashAlgorithmKind::from_digest_len(hash.chars().count()) {
            Some(algorithm) => {
                let bucket = classification
                    .buckets
                    .entry(algorithm)
                    .or_insert_with(|| HashBucket::new(algorithm));
                if !bucket.insert(hash.to_string()) {
                    classification.duplicates.push(hash.to_string());
                }
            }
            None => classification.unknown.push(hash.to_string()),
        }
    }

    classification
}

#[cfg(test)]
mod tests {
    use super::*;

    const MD5_CAT: &str = "d077f244def8a70e5ea758bd8352fcd8";
    const SHA1_DOG: &str = "e49512524f47b4138d850c9d9d85972927281da0";
    const SHA256_FISH: &str = "b474a99a2705e23cf905a484ec6d14ef58b56bbe62e9292783466ec363b5072d";

    #[test]
    fn routes_by_length() {
        let result = classify([MD5_CAT, SHA1_DOG, SHA256_FISH]);

        assert!(result.buckets[&HashAlgorithmKind::Md5].contains(MD5_CAT));
        assert!(result.buckets[&HashAlgorithmKind::Sha1].contains(SHA1_DOG));
        assert!(result.buckets[&HashAlgorithmKind::Sha256].contains(SHA256_FISH));
        assert!(result.unknown.is_empty());
    }

    #[test]
    fn unknown_lengths_keep_input_order() {
        let result = classify(["xyz123", MD5_CAT, "", "abc"]);

        assert_eq!(result.unknown, vec!["xyz123", "", "abc"]);
        assert_eq!(result.bucketed(), 1);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let result = classify([format!("  {MD5_CAT}\r\n")]);

        assert!(result.buckets[&HashAlgorithmKind::Md5].contains(MD5_CAT));
    }

    #[test]
    fn right_length_non_hex_is_accepted() {
        let bogus = "z".repeat(40);
        let result = classify([bogus.as_str()]);

        assert!(result.buckets[&HashAlgorithmKind::Sha1].contains(&bogus));
    }

    #[test]
    fn length_is_measured_in_characters() {
        // 16 characters, 32 bytes
        let accented = "é".repeat(16);
        let result = classify([accented.as_str()]);

        assert!(result.buckets.is_empty());
        assert_eq!(result.unknown, vec![accented]);
    }

    #[test]
    fn multibyte_line_of_digest_length_is_bucketed() {
        let accented = "é".repeat(32);
        let result = classify([accented.as_str()]);

        assert!(result.buckets[&HashAlgorithmKind::Md5].contains(&accented));
    }

    #[test]
    fn duplicates_collapse_but_are_counted() {
        let result = classify([MD5_CAT, MD5_CAT, "short"]);

        assert_eq!(result.bucketed(), 1);
        assert_eq!(result.duplicates, vec![MD5_CAT]);
        assert_eq!(result.total(), 3);
    }

    #[test]
    fn every_line_is_accounted_for() {
        let lines = [MD5_CAT, SHA1_DOG, "x", SHA1_DOG, "", SHA256_FISH, "0123"];
        assert_eq!(classify(lines).total(), lines.len());
    }

    #[test]
    fn empty_input_populates_nothing() {
        let result = classify(Vec::<String>::new());

        assert!(result.buckets.is_empty());
        assert_eq!(result.populated().count(), 0);
        assert_eq!(result.total(), 0);
    }
}
