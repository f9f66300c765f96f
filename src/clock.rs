//! Server clock
//!
//! Countdowns must agree with the server, not the shopper's device. A
//! [`ServerClock`] owns the offset between the two and is created once at
//! application start, then handed to whatever needs the current time.

use std::fmt;

use jiff::{SignedDuration, Timestamp};
use tracing::debug;

/// Something that can report the local wall-clock time.
pub trait TimeSource {
    /// The current local time.
    fn now(&self) -> Timestamp;
}

/// Reads the operating system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTimeSource(pub Timestamp);

impl TimeSource for FixedTimeSource {
    fn now(&self) -> Timestamp {
        self.0
    }
}

/// Local time corrected by the last known server offset.
pub struct ServerClock<S: TimeSource = SystemTimeSource> {
    source: S,
    offset: SignedDuration,
    synced: bool,
}

impl ServerClock<SystemTimeSource> {
    /// Clock over the operating system time, not yet synced.
    #[must_use]
    pub fn system() -> Self {
        Self::new(SystemTimeSource)
    }
}

impl<S: TimeSource> ServerClock<S> {
    /// Clock over `source` with a zero offset until [`ServerClock::sync`] is called.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            offset: SignedDuration::ZERO,
            synced: false,
        }
    }

    /// Record the server's current time, replacing any previous offset.
    pub fn sync(&mut self, server_time: Timestamp) {
        self.offset = server_time.duration_since(self.source.now());
        self.synced = true;

        debug!(
            offset_secs = self.offset.as_secs(),
            "synced server clock"
        );
    }

    /// Best estimate of the server's current time.
    ///
    /// Falls back to local time if the offset would overflow the timestamp range.
    pub fn now(&self) -> Timestamp {
        let local = self.source.now();

        local.checked_add(self.offset).unwrap_or(local)
    }

    /// Offset applied to local time.
    pub fn offset(&self) -> SignedDuration {
        self.offset
    }

    /// Whether a server time has been recorded.
    pub fn is_synced(&self) -> bool {
        self.synced
    }
}

impl<S: TimeSource> fmt::Debug for ServerClock<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerClock")
            .field("offset", &self.offset)
            .field("synced", &self.synced)
            .finish_non_exhaustive()
    }
}
