//! # hash-crack CLI
//!
//! Command-line interface for the hash cracker.
//!
//! ## Usage
//! ```bash
//! hash-crack                       # paths from ./config.json
//! hash-crack -w rockyou.txt -H hashes.txt
//! hash-crack -c audit.json --output json
//! ```

mod cli;

use std::process::ExitCode;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {e}");
            ExitCode::FAILURE
        }
    }
}
