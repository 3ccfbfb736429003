//! # Wordlist Module
//!
//! Streams candidate words from a line-oriented wordlist.
//!
//! Words are produced lazily, one per line, so a worker that stops early
//! never touches the rest of the file. Decoding is lenient: byte sequences
//! that are not valid UTF-8 are dropped from the word instead of failing
//! the scan. Trailing whitespace is stripped, leading whitespace is kept.
//!
//! Lines end at `\n`, `\r\n` or a lone `\r`, so wordlists saved with any
//! platform's line endings split the same way.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Read buffer size for wordlist files
const READ_BUFFER_SIZE: usize = 1024 * 1024;

/// Lazy iterator over the words of a wordlist
pub struct WordlistReader<R> {
    reader: R,
    line: Vec<u8>,
    /// The previous line ended on `\r`; a `\n` right after it belongs to it
    after_cr: bool,
}

impl WordlistReader<BufReader<File>> {
    /// Open a wordlist file for streaming
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::with_capacity(READ_BUFFER_SIZE, file)))
    }
}

impl<R: BufRead> WordlistReader<R> {
    /// Wrap any buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::with_capacity(256),
            after_cr: false,
        }
    }

    /// Read the next line into `self.line`, without its terminator.
    ///
    /// Returns `false` at end of input.
    fn read_line(&mut self) -> io::Result<bool> {
        self.line.clear();

        if self.after_cr {
            self.after_cr = false;
            if fill(&mut self.reader)?.first() == Some(&b'\n') {
                self.reader.consume(1);
            }
        }

        let mut read_any = false;
        loop {
            let buf = fill(&mut self.reader)?;
            if buf.is_empty() {
                return Ok(read_any);
            }
            read_any = true;

            match buf.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    self.after_cr = buf[end] == b'\r';
                    self.line.extend_from_slice(&buf[..end]);
                    self.reader.consume(end + 1);
                    return Ok(true);
                }
                None => {
                    let len = buf.len();
                    self.line.extend_from_slice(buf);
                    self.reader.consume(len);
                }
            }
        }
    }
}

/// `fill_buf`, retried on `Interrupted`
fn fill<R: BufRead>(reader: &mut R) -> io::Result<&[u8]> {
    loop {
        match reader.fill_buf() {
            Ok(_) => break,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    reader.fill_buf()
}

impl<R: BufRead> Iterator for WordlistReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_line() {
            Ok(true) => Some(Ok(decode_word(&self.line))),
            Ok(false) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

/// Split decoded text into lines the same way [`WordlistReader`] does.
///
/// Like [`str::lines`], a final terminator does not produce an empty line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> + '_ {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(end) = rest.find(['\r', '\n']) else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..end];
        let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator..];
        Some(line)
    })
}

/// Decode a raw line into a candidate word.
///
/// Invalid UTF-8 is skipped, then trailing whitespace is removed.
pub fn decode_word(raw: &[u8]) -> String {
    let mut word = String::with_capacity(raw.len());
    for chunk in raw.utf8_chunks() {
        word.push_str(chunk.valid());
    }
    let trimmed_len = word.trim_end().len();
    word.truncate(trimmed_len);
    word
}
