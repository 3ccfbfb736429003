//! # Config Module
//!
//! Resolves the wordlist and hashlist paths and checks they exist.
//!
//! Paths given directly always win. Anything not given directly is read
//! from a JSON config file:
//!
//! ```json
//! { "wordlistpath": "rockyou.txt", "hashlistpath": "hashes.txt" }
//! ```
//!
//! When both paths are given directly the config file is never opened.

use crate::error::{ConfigError, ListKind, LoadError};
use serde::Deserialize;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Key holding the wordlist path
pub const WORDLIST_KEY: &str = "wordlistpath";

/// Key holding the hashlist path
pub const HASHLIST_KEY: &str = "hashlistpath";

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    wordlistpath: Option<PathBuf>,
    hashlistpath: Option<PathBuf>,
}

/// The two input files of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrackPaths {
    pub wordlist: PathBuf,
    pub hashlist: PathBuf,
}

impl CrackPaths {
    pub fn new(wordlist: impl Into<PathBuf>, hashlist: impl Into<PathBuf>) -> Self {
        Self {
            wordlist: wordlist.into(),
            hashlist: hashlist.into(),
        }
    }

    /// Read both paths from a config file
    pub fn from_config_file(path: &Path) -> Result<Self, ConfigError> {
        Self::resolve(None, None, Some(path))
    }

    /// Combine directly given paths with a config file.
    ///
    /// `config` defaults to [`default_config_path`] and is only read when a
    /// path is missing.
    pub fn resolve(
        wordlist: Option<PathBuf>,
        hashlist: Option<PathBuf>,
        config: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        if let (Some(wordlist), Some(hashlist)) = (&wordlist, &hashlist) {
            return Ok(Self::new(wordlist, hashlist));
        }

        let config_path = config.map(Path::to_path_buf).unwrap_or_else(default_config_path);
        let file = load_config_file(&config_path)?;

        let wordlist = wordlist
            .or(file.wordlistpath)
            .ok_or_else(|| ConfigError::MissingKey {
                key: WORDLIST_KEY,
                path: config_path.clone(),
            })?;
        let hashlist = hashlist
            .or(file.hashlistpath)
            .ok_or_else(|| ConfigError::MissingKey {
                key: HASHLIST_KEY,
                path: config_path.clone(),
            })?;

        tracing::debug!(config = %config_path.display(), "paths resolved from config");
        Ok(Self { wordlist, hashlist })
    }

    /// Confirm both files can be opened before any work starts.
    ///
    /// The wordlist is checked first, matching the order errors are reported in.
    pub fn verify(&self) -> Result<(), LoadError> {
        verify_file(ListKind::Wordlist, &self.wordlist)?;
        verify_file(ListKind::Hashlist, &self.hashlist)
    }
}

/// The config file used when none is named.
///
/// `./config.json` if present, otherwise `config.json` under the user config
/// directory (`~/.config/hash-crack/` on Linux) if present, otherwise
/// `./config.json` so the error names the conventional location.
pub fn default_config_path() -> PathBuf {
    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
    if local.exists() {
        return local;
    }

    dirs::config_dir()
        .map(|dir| dir.join("hash-crack").join(DEFAULT_CONFIG_FILE))
        .filter(|path| path.exists())
        .unwrap_or(local)
}

fn load_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ConfigError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ConfigError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn verify_file(kind: ListKind, path: &Path) -> Result<(), LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound {
            kind,
            path: path.to_path_buf(),
        });
    }

    let read_error = |source| LoadError::Read {
        kind,
        path: path.to_path_buf(),
        source,
    };

    if path.is_dir() {
        return Err(read_error(io::Error::other("is a directory")));
    }
    File::open(path).map(drop).map_err(read_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("config.json");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn explicit_paths_skip_config() {
        let paths = CrackPaths::resolve(
            Some(PathBuf::from("words.txt")),
            Some(PathBuf::from("hashes.txt")),
            Some(Path::new("/nonexistent/config.json")),
        )
        .unwrap();

        assert_eq!(paths, CrackPaths::new("words.txt", "hashes.txt"));
    }

    #[test]
    fn reads_both_keys_from_config() {
        let dir = TempDir::new().unwrap();
        let config = write_config(
            &dir,
            r#"{"wordlistpath": "rockyou.txt", "hashlistpath": "targets.txt"}"#,
        );

        let paths = CrackPaths::from_config_file(&config).unwrap();

        assert_eq!(paths, CrackPaths::new("rockyou.txt", "targets.txt"));
    }

    #[test]
    fn explicit_path_overrides_config_entry() {
        let dir = TempDir::new().unwrap();
        let config = write_config(
            &dir,
            r#"{"wordlistpath": "rockyou.txt", "hashlistpath": "targets.txt"}"#,
        );

        let paths =
            CrackPaths::resolve(Some(PathBuf::from("mine.txt")), None, Some(&config)).unwrap();

        assert_eq!(paths, CrackPaths::new("mine.txt", "targets.txt"));
    }

    #[test]
    fn missing_key_is_reported() {
        let dir = TempDir::new().unwrap();
        let config = write_config(&dir, r#"{"wordlistpath": "rockyou.txt"}"#);

        let error = CrackPaths::from_config_file(&config).unwrap_err();

        assert!(matches!(error, ConfigError::MissingKey { key: HASHLIST_KEY, .. }));
    }

    #[test]
    fn missing_config_file_is_reported() {
        let error =
            CrackPaths::from_config_file(Path::new("/nonexistent/config.json")).unwrap_err();
        assert!(matches!(error, ConfigError::NotFound { .. }));
    }

    #[test]
    fn malformed_config_is_reported() {
        let dir = TempDir::new().unwrap();
        let config = write_config(&dir, "wordlistpath = rockyou.txt");

        let error = CrackPaths::from_config_file(&config).unwrap_err();
        assert!(matches!(error, ConfigError::Parse { .. }));
    }

    #[test]
    fn verify_names_missing_wordlist_first() {
        let paths = CrackPaths::new("/nonexistent/words.txt", "/nonexistent/hashes.txt");

        let error = paths.verify().unwrap_err();

        assert!(matches!(
            error,
            LoadError::FileNotFound { kind: ListKind::Wordlist, .. }
        ));
    }

    #[test]
    fn verify_names_missing_hashlist() {
        let dir = TempDir::new().unwrap();
        let words = dir.path().join("words.txt");
        fs::write(&words, "cat\n").unwrap();
        let paths = CrackPaths::new(&words, dir.path().join("hashes.txt"));

        let error = paths.verify().unwrap_err();

        assert!(matches!(
            error,
            LoadError::FileNotFound { kind: ListKind::Hashlist, .. }
        ));
    }

    #[test]
    fn verify_rejects_directories() {
        let dir = TempDir::new().unwrap();
        let paths = CrackPaths::new(dir.path(), dir.path());

        assert!(matches!(paths.verify(), Err(LoadError::Read { .. })));
    }

    #[test]
    fn verify_accepts_existing_files() {
        let dir = TempDir::new().unwrap();
        let words = dir.path().join("words.txt");
        let hashes = dir.path().join("hashes.txt");
        fs::write(&words, "").unwrap();
        fs::write(&hashes, "").unwrap();

        assert!(CrackPaths::new(words, hashes).verify().is_ok());
    }
}
