//! # CLI Module
//!
//! Command-line interface for the hash cracker.
//!
//! ## Usage
//! ```bash
//! # Paths from ./config.json
//! hash-crack
//!
//! # Explicit paths, config never read
//! hash-crack --wordlist rockyou.txt --hashlist hashes.txt
//!
//! # Live per-algorithm spinners on stderr
//! hash-crack --progress
//!
//! # Machine-readable report
//! hash-crack --output json
//! ```

use clap::{Parser, ValueEnum};
use console::{style, Term};
use hash_cracker::core::config::CrackPaths;
use hash_cracker::core::hasher::HashAlgorithmKind;
use hash_cracker::core::pipeline::{CrackSession, RunReport};
use hash_cracker::core::reporter::{format_match, to_json, write_failures, write_summary};
use hash_cracker::error::Result;
use hash_cracker::events::{CrackEvent, Event, EventChannel, EventReceiver, LoadEvent};
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::collections::HashMap;
use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

/// Hash Cracker - dictionary attack on md5/sha1/sha256 hash lists
#[derive(Parser, Debug)]
#[command(name = "hash-crack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Wordlist, one candidate per line
    #[arg(short, long)]
    wordlist: Option<PathBuf>,

    /// Hashlist, one hex digest per line
    #[arg(short = 'H', long)]
    hashlist: Option<PathBuf>,

    /// Config file supplying `wordlistpath` / `hashlistpath`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "pretty")]
    output: OutputFormat,

    /// Show per-algorithm progress on stderr
    #[arg(long)]
    progress: bool,

    /// Verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Stream matches as they are found, then list what is left
    Pretty,
    /// One JSON document once every worker has finished
    Json,
}

/// Run the CLI
pub fn run() -> Result<()> {
    let started = Instant::now();
    let cli = Cli::parse();

    hash_cracker::init_tracing(cli.verbose);

    let paths = CrackPaths::resolve(cli.wordlist, cli.hashlist, cli.config.as_deref())?;
    let session = CrackSession::builder(paths).started(started).build();

    let (sender, receiver) = EventChannel::new();
    let output = cli.output;
    let show_progress = cli.progress;

    // Handle events in a separate thread so matches print as they happen
    let event_thread = thread::spawn(move || handle_events(receiver, output, show_progress));

    let result = session.run_with_events(&sender);

    // Drop sender to signal event thread to finish
    drop(sender);
    join_printer(event_thread);

    let report = result?;

    write_failures(&mut io::stderr().lock(), &report)?;
    match output {
        OutputFormat::Pretty => print_pretty_results(&report)?,
        OutputFormat::Json => print_json_results(&report)?,
    }

    Ok(())
}

/// Spinners for each running worker
struct ProgressView {
    multi: MultiProgress,
    bars: HashMap<HashAlgorithmKind, ProgressBar>,
}

impl ProgressView {
    fn new(visible: bool) -> Self {
        let target = if visible {
            ProgressDrawTarget::stderr()
        } else {
            ProgressDrawTarget::hidden()
        };
        Self {
            multi: MultiProgress::with_draw_target(target),
            bars: HashMap::new(),
        }
    }

    fn start(&mut self, algorithm: HashAlgorithmKind, targets: usize) {
        let pb = self.multi.add(ProgressBar::new_spinner());
        let template = "{spinner:.green} {prefix:>6} {msg}";
        if let Ok(spinner) = ProgressStyle::default_spinner().template(template) {
            pb.set_style(spinner);
        }
        pb.set_prefix(algorithm.to_string());
        pb.set_message(format!("{targets} targets"));
        pb.enable_steady_tick(Duration::from_millis(100));
        self.bars.insert(algorithm, pb);
    }

    fn update(&self, algorithm: HashAlgorithmKind, words_tried: u64, remaining: usize) {
        if let Some(pb) = self.bars.get(&algorithm) {
            pb.set_message(format!("{words_tried} words tried, {remaining} left"));
        }
    }

    fn finish(&self, algorithm: HashAlgorithmKind, message: String) {
        if let Some(pb) = self.bars.get(&algorithm) {
            pb.finish_with_message(message);
        }
    }

    fn abandon(&self, algorithm: HashAlgorithmKind, message: String) {
        if let Some(pb) = self.bars.get(&algorithm) {
            pb.abandon_with_message(message);
        }
    }

    /// Print a stdout line without tearing the spinners
    fn println(&self, line: &str) {
        self.multi.suspend(|| {
            Term::stdout().write_line(line).ok();
        });
    }
}

/// Wait for the event printer, logging its panic instead of dropping it.
///
/// Returns whether the printer finished cleanly.
fn join_printer(handle: thread::JoinHandle<()>) -> bool {
    match handle.join() {
        Ok(()) => true,
        Err(_) => {
            tracing::error!("event printer panicked, live output may be incomplete");
            false
        }
    }
}

fn handle_events(receiver: EventReceiver, output: OutputFormat, show_progress: bool) {
    let mut view = ProgressView::new(show_progress);
    let streaming = output == OutputFormat::Pretty;

    for event in receiver.iter() {
        match event {
            Event::Load(LoadEvent::HashesSorted { .. }) if streaming => {
                view.println("Sorted hashes");
            }
            Event::Load(LoadEvent::HashesLoaded { .. }) if streaming => {
                view.println("Loaded hashes");
            }
            Event::Crack(CrackEvent::Started { algorithm, targets }) => {
                view.start(algorithm, targets);
            }
            Event::Crack(CrackEvent::Progress(p)) => {
                view.update(p.algorithm, p.words_tried, p.remaining);
            }
            Event::Crack(CrackEvent::Matched(found)) => {
                if streaming {
                    view.println(&format_match(&found));
                }
            }
            Event::Crack(CrackEvent::Finished {
                algorithm,
                words_tried,
                unsolved,
            }) => {
                let done = style("done").green();
                view.finish(
                    algorithm,
                    format!("{done} after {words_tried} words, {unsolved} unsolved"),
                );
            }
            Event::Crack(CrackEvent::Failed { algorithm, .. }) => {
                view.abandon(algorithm, style("failed").red().to_string());
            }
            _ => {}
        }
    }
}

fn print_pretty_results(report: &RunReport) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_summary(&mut stdout, report)?;
    stdout.flush()
}

fn print_json_results(report: &RunReport) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &to_json(report))?;
    writeln!(stdout)
}
