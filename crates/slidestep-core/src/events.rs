use serde::{Deserialize, Serialize};

use crate::gesture::GestureState;
use crate::playback::TimerId;

/// Read-only view of the engine handed to rendering code on every settle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub current_step: i64,
    pub paused: bool,
    pub animating: bool,
    pub gesture: GestureState,
}

/// Every hook invocation the engine asks for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notification {
    BeforeChange { step: i64, snapshot: Snapshot },
    Changed { step: i64, snapshot: Snapshot },
    AfterChange { step: i64, snapshot: Snapshot },
    Play { snapshot: Snapshot },
    Pause { snapshot: Snapshot },
    Next { step: i64, snapshot: Snapshot },
    Previous { step: i64, snapshot: Snapshot },
    SwipeStart { gesture: GestureState, snapshot: Snapshot },
    SwipeMove { gesture: GestureState, snapshot: Snapshot },
    SwipeEnd { gesture: GestureState, snapshot: Snapshot },
}

impl Notification {
    /// Hook name, as used in logs and CLI output.
    pub fn name(&self) -> &'static str {
        match self {
            Notification::BeforeChange { .. } => "before_change",
            Notification::Changed { .. } => "changed",
            Notification::AfterChange { .. } => "after_change",
            Notification::Play { .. } => "play",
            Notification::Pause { .. } => "pause",
            Notification::Next { .. } => "next",
            Notification::Previous { .. } => "previous",
            Notification::SwipeStart { .. } => "swipe_start",
            Notification::SwipeMove { .. } => "swipe_move",
            Notification::SwipeEnd { .. } => "swipe_end",
        }
    }

    /// The step this notification carries, if any.
    pub fn step(&self) -> Option<i64> {
        match self {
            Notification::BeforeChange { step, .. }
            | Notification::Changed { step, .. }
            | Notification::AfterChange { step, .. }
            | Notification::Next { step, .. }
            | Notification::Previous { step, .. } => Some(*step),
            _ => None,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        match self {
            Notification::BeforeChange { snapshot, .. }
            | Notification::Changed { snapshot, .. }
            | Notification::AfterChange { snapshot, .. }
            | Notification::Play { snapshot }
            | Notification::Pause { snapshot }
            | Notification::Next { snapshot, .. }
            | Notification::Previous { snapshot, .. }
            | Notification::SwipeStart { snapshot, .. }
            | Notification::SwipeMove { snapshot, .. }
            | Notification::SwipeEnd { snapshot, .. } => snapshot,
        }
    }
}

/// Side effects requested by a transition. The host performs them in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    /// Tick every `interval_ms` with `id` until stopped.
    StartTimer { id: TimerId, interval_ms: u64 },
    StopTimer { id: TimerId },
    /// Deliver `commit_elapsed(id)` once after `delay_ms`.
    ScheduleCommit { id: TimerId, delay_ms: u64 },
    CancelCommit { id: TimerId },
    /// Suppress the platform's default handling of the pointer event.
    SuppressDefault,
    Notify(Notification),
}

impl Effect {
    pub fn notification(&self) -> Option<&Notification> {
        match self {
            Effect::Notify(notification) => Some(notification),
            _ => None,
        }
    }
}
