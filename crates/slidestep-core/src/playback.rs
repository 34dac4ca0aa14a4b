//! Playback timer bookkeeping.
//!
//! The engine never owns a real timer. It hands out handle ids and emits
//! start/stop commands; the host runs the timer and feeds ticks back with
//! the id they were started under. A tick whose id is no longer active
//! belongs to a cancelled timer and is dropped.

use serde::{Deserialize, Serialize};

use crate::config::SliderConfig;
use crate::events::Effect;

/// Handle of a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimerId(pub u64);

/// The single repeating playback timer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaybackTimer {
    active: Option<TimerId>,
    issued: u64,
}

impl PlaybackTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<TimerId> {
        self.active
    }

    /// Whether a tick carrying `id` comes from the running timer.
    pub fn accepts(&self, id: TimerId) -> bool {
        self.active == Some(id)
    }

    /// Schedule a repeating tick every `interval_ms`, replacing any running timer.
    pub fn start(&mut self, interval_ms: u64, effects: &mut Vec<Effect>) -> TimerId {
        self.stop(effects);
        self.issued += 1;
        let id = TimerId(self.issued);
        self.active = Some(id);
        tracing::debug!(timer = id.0, interval_ms, "playback timer started");
        effects.push(Effect::StartTimer { id, interval_ms });
        id
    }

    /// Cancel the running timer, if any.
    pub fn stop(&mut self, effects: &mut Vec<Effect>) {
        if let Some(id) = self.active.take() {
            tracing::debug!(timer = id.0, "playback timer stopped");
            effects.push(Effect::StopTimer { id });
        }
    }

    /// Apply the start/stop policy after a state settles.
    ///
    /// `paused` is the effective pause state, hover included.
    pub fn reevaluate(
        &mut self,
        config: &SliderConfig,
        current_step: i64,
        paused: bool,
        effects: &mut Vec<Effect>,
    ) {
        let at_end = !config.cycle
            && config.has_playback()
            && config.bounds().last().is_some_and(|last| current_step >= last);
        if paused || at_end {
            self.stop(effects);
        } else if config.has_playback() && !self.is_active() {
            self.start(config.duration_ms, effects);
        }
    }
}
