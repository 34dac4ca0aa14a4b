//! Step arithmetic.
//!
//! Pure functions over `(current, total, step_interval, cycle)`. A `total`
//! of zero means the sequence is unbounded and nothing is clamped.

use serde::{Deserialize, Serialize};

/// The bounds a step moves within.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepBounds {
    /// Number of steps, 0 for unbounded.
    pub total: u32,
    pub step_interval: i64,
    pub cycle: bool,
}

impl StepBounds {
    pub fn new(total: u32, step_interval: i64, cycle: bool) -> Self {
        Self {
            total,
            step_interval,
            cycle,
        }
    }

    pub fn is_bounded(&self) -> bool {
        self.total > 0
    }

    /// Index of the last step, if the sequence is bounded.
    pub fn last(&self) -> Option<i64> {
        self.is_bounded().then(|| i64::from(self.total) - 1)
    }

    pub fn next_step(&self, current: i64) -> i64 {
        let candidate = current.saturating_add(self.step_interval);
        match self.last() {
            Some(last) if candidate > last => {
                if self.cycle {
                    0
                } else {
                    last
                }
            }
            _ => candidate,
        }
    }

    pub fn previous_step(&self, current: i64) -> i64 {
        let candidate = current.saturating_sub(self.step_interval);
        match self.last() {
            Some(last) if candidate < 0 => {
                if self.cycle {
                    last
                } else {
                    0
                }
            }
            _ => candidate,
        }
    }

    /// Move `offset` steps from `current`, wrapping when cycling and
    /// clamping to `[0, total - 1]` otherwise.
    pub fn clamp_step(&self, current: i64, offset: i64) -> i64 {
        let candidate = current.saturating_add(offset);
        let Some(last) = self.last() else {
            return candidate;
        };
        if self.cycle {
            candidate.rem_euclid(i64::from(self.total))
        } else {
            candidate.clamp(0, last)
        }
    }
}
