//! Countdown to the announced platform update.

use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    /// Time left until `target`, broken into whole days/hours/minutes/
    /// seconds. Once the target has passed everything is zero.
    pub fn until(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let diff = target - now;
        let total_seconds = diff.num_seconds();

        if total_seconds <= 0 {
            return Countdown::default();
        }

        Countdown {
            days: total_seconds / 86_400,
            hours: (total_seconds / 3_600) % 24,
            minutes: (total_seconds / 60) % 60,
            seconds: total_seconds % 60,
        }
    }

    pub fn is_elapsed(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d {}h {}m {}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}
