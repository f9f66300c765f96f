//! Countdown

use std::fmt;

use jiff::{SignedDuration, Timestamp};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;

/// Time left until an instant, clamped at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: SignedDuration,
}

impl Countdown {
    /// Time left from `now` until `end`; zero once `end` has passed.
    #[must_use]
    pub fn until(end: Timestamp, now: Timestamp) -> Self {
        let remaining = end.duration_since(now);

        Self {
            remaining: if remaining.is_negative() {
                SignedDuration::ZERO
            } else {
                remaining
            },
        }
    }

    /// Remaining duration, never negative.
    #[must_use]
    pub fn remaining(&self) -> SignedDuration {
        self.remaining
    }

    /// Whole hours left. Not wrapped at 24.
    #[must_use]
    pub fn hours(&self) -> i64 {
        self.remaining.as_secs() / SECONDS_PER_HOUR
    }

    /// Minutes past the whole hours.
    #[must_use]
    pub fn minutes(&self) -> i64 {
        (self.remaining.as_secs() / SECONDS_PER_MINUTE) % 60
    }

    /// Seconds past the whole minutes.
    #[must_use]
    pub fn seconds(&self) -> i64 {
        self.remaining.as_secs() % 60
    }

    /// Whether the end time has been reached.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.remaining.is_zero()
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours(),
            self.minutes(),
            self.seconds()
        )
    }
}
