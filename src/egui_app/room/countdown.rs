//! Room Countdown
//!
//! Every room lives for a fixed duration anchored at its creation
//! timestamp. The countdown recomputes remaining time from the wall
//! clock each frame rather than decrementing, so a suspended or busy
//! client stays correct, and the server's `timeRemaining` push can
//! re-anchor it at any point.
//!
//! Milestones announce remaining time in chat. Each threshold fires at
//! most once, on the downward crossing; thresholds already below the
//! starting point (a late join) are marked fired silently.

use chrono::{DateTime, Duration, Utc};

use crate::shared::limits::MILESTONES_SECONDS;

/// Countdown state for one room
#[derive(Debug)]
pub struct Countdown {
    deadline: Option<DateTime<Utc>>,
    remaining: i64,
    expired: bool,
    fired: [bool; MILESTONES_SECONDS.len()],
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Countdown {
    pub fn new() -> Self {
        Self {
            deadline: None,
            remaining: 0,
            expired: false,
            fired: [false; MILESTONES_SECONDS.len()],
        }
    }

    /// Anchor the countdown at the room's creation time
    ///
    /// Thresholds strictly above the starting remainder are marked
    /// fired without announcing; a threshold exactly at the starting
    /// remainder still announces on the first tick.
    pub fn start(&mut self, created_at: DateTime<Utc>, duration_seconds: i64, now: DateTime<Utc>) {
        let deadline = created_at + Duration::seconds(duration_seconds);
        self.deadline = Some(deadline);
        self.remaining = (deadline - now).num_seconds().max(0);
        self.expired = false;
        for (slot, &threshold) in self.fired.iter_mut().zip(MILESTONES_SECONDS.iter()) {
            *slot = threshold > self.remaining;
        }
    }

    pub fn is_running(&self) -> bool {
        self.deadline.is_some() && !self.expired
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    pub fn remaining_seconds(&self) -> i64 {
        self.remaining
    }

    /// Apply an authoritative `timeRemaining` push
    ///
    /// Thresholds skipped by a backward jump still fire on the next
    /// tick, preserving at-most-once per threshold.
    pub fn set_remaining(&mut self, seconds: i64, now: DateTime<Utc>) {
        let seconds = seconds.max(0);
        self.deadline = Some(now + Duration::seconds(seconds));
        self.remaining = seconds;
    }

    /// Recompute remaining time; returns thresholds crossed this tick
    pub fn tick(&mut self, now: DateTime<Utc>) -> Vec<i64> {
        let Some(deadline) = self.deadline else {
            return Vec::new();
        };
        self.remaining = (deadline - now).num_seconds().max(0);

        let mut crossed = Vec::new();
        for (slot, &threshold) in self.fired.iter_mut().zip(MILESTONES_SECONDS.iter()) {
            if !*slot && self.remaining <= threshold {
                *slot = true;
                crossed.push(threshold);
            }
        }
        if self.remaining == 0 {
            self.expired = true;
        }
        crossed
    }

    /// Stop without announcing anything further
    pub fn halt(&mut self) {
        self.deadline = None;
        self.expired = true;
        self.remaining = 0;
    }

    /// Header display: whole minutes (rounded up) until the final
    /// minute, then M:SS
    pub fn display(&self) -> String {
        let remaining = self.remaining.max(0);
        if remaining > 60 {
            format!("{} min", (remaining + 59) / 60)
        } else {
            format!("{}:{:02}", remaining / 60, remaining % 60)
        }
    }
}

/// Chat announcement for a crossed threshold
pub fn milestone_label(threshold: i64) -> String {
    match threshold {
        0 => "Time is up".to_string(),
        60 => "1 minute remaining".to_string(),
        t if t % 60 == 0 => format!("{} minutes remaining", t / 60),
        t => format!("{} seconds remaining", t),
    }
}
