//! # Events Module
//!
//! Event-driven progress reporting.
//!
//! ## Design
//! The cracking core emits events through a channel, so a front end (the
//! CLI, a test, anything else) can print matches the moment a worker finds
//! them without the workers knowing how output is rendered.
//!
//! ## Example
//! ```rust,ignore
//! let (sender, receiver) = EventChannel::new();
//!
//! std::thread::spawn(move || {
//!     for event in receiver.iter() {
//!         if let Event::Crack(CrackEvent::Matched(m)) = event {
//!             println!("{}", format_match(&m));
//!         }
//!     }
//! });
//!
//! session.run_with_events(&sender)?;
//! ```

mod channel;
mod types;

pub use channel::{null_sender, EventChannel, EventReceiver, EventSender};
pub use types::*;
