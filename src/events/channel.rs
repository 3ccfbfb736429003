//! Event channel implementation using crossbeam-channel.
//!
//! Lets every cracking worker report matches to a single listener
//! without sharing any state with the other workers.

use crossbeam_channel::{unbounded, Receiver, Sender};

use super::Event;

/// Cloneable handle workers use to publish events.
#[derive(Clone)]
pub struct EventSender {
    inner: Sender<Event>,
}

impl EventSender {
    /// Publish an event without blocking.
    ///
    /// With the receiver gone the event is discarded, so a session can run
    /// with nobody listening.
    pub fn send(&self, event: Event) {
        if self.inner.send(event).is_err() {
            tracing::trace!("event dropped, no listener");
        }
    }
}

/// The listening end; iteration ends once every sender is dropped.
pub struct EventReceiver {
    inner: Receiver<Event>,
}

impl EventReceiver {
    /// Blocking iterator over events
    pub fn iter(&self) -> impl Iterator<Item = Event> + '_ {
        self.inner.iter()
    }
}

/// Factory for sender/receiver pairs.
pub struct EventChannel;

impl EventChannel {
    /// Create a new unbounded event channel.
    ///
    /// Workers never wait on the listener, so a slow terminal cannot stall
    /// a scan.
    pub fn new() -> (EventSender, EventReceiver) {
        let (sender, receiver) = unbounded();
        (EventSender { inner: sender }, EventReceiver { inner: receiver })
    }
}

/// A sender whose receiver is already gone, for running without a listener.
pub fn null_sender() -> EventSender {
    EventChannel::new().0
}
