//! Tokio host for a [`SliderEngine`].
//!
//! The host owns the real timers the engine only describes: the playback
//! timer becomes a [`tokio::time::Interval`] and a deferred commit becomes a
//! [`tokio::time::Sleep`]. Each is tagged with the engine's handle id so a
//! timer that fires after being replaced is reported under its old id and
//! dropped by the engine.
//!
//! The loop ends when the input channel closes or `Input::Dispose` arrives;
//! either way the engine is disposed and both timers are dropped.

use std::pin::Pin;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Instant, Interval, MissedTickBehavior, Sleep};

use crate::engine::{Input, SliderEngine};
use crate::events::Effect;
use crate::hooks::Hooks;
use crate::playback::TimerId;

pub struct Host {
    engine: SliderEngine,
    hooks: Hooks,
    playback: Option<(TimerId, Interval)>,
    commit: Option<(TimerId, Pin<Box<Sleep>>)>,
}

impl Host {
    pub fn new(engine: SliderEngine, hooks: Hooks) -> Self {
        Self {
            engine,
            hooks,
            playback: None,
            commit: None,
        }
    }

    pub fn engine(&self) -> &SliderEngine {
        &self.engine
    }

    /// Drive the engine until disposal. Returns the engine for inspection.
    pub async fn run(mut self, mut inputs: mpsc::UnboundedReceiver<Input>) -> SliderEngine {
        let effects = self.engine.start();
        self.apply(effects);

        while !self.engine.is_disposed() {
            let input = tokio::select! {
                received = inputs.recv() => received.unwrap_or(Input::Dispose),
                id = next_tick(&mut self.playback) => Input::TimerTick { id },
                id = commit_due(&mut self.commit) => Input::CommitElapsed { id },
            };
            let effects = self.engine.handle(input);
            self.apply(effects);
        }
        tracing::debug!("host stopped");
        self.engine
    }

    fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartTimer { id, interval_ms } => {
                    let period = Duration::from_millis(interval_ms);
                    let mut interval = tokio::time::interval_at(Instant::now() + period, period);
                    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                    self.playback = Some((id, interval));
                }
                Effect::StopTimer { id } => {
                    if self.playback.as_ref().is_some_and(|(active, _)| *active == id) {
                        self.playback = None;
                    }
                }
                Effect::ScheduleCommit { id, delay_ms } => {
                    let sleep = tokio::time::sleep(Duration::from_millis(delay_ms));
                    self.commit = Some((id, Box::pin(sleep)));
                }
                Effect::CancelCommit { id } => {
                    if self.commit.as_ref().is_some_and(|(pending, _)| *pending == id) {
                        self.commit = None;
                    }
                }
                Effect::SuppressDefault => {}
                Effect::Notify(notification) => self.hooks.dispatch(&notification),
            }
        }
    }
}

async fn next_tick(playback: &mut Option<(TimerId, Interval)>) -> TimerId {
    match playback {
        Some((id, interval)) => {
            interval.tick().await;
            *id
        }
        None => std::future::pending().await,
    }
}

async fn commit_due(commit: &mut Option<(TimerId, Pin<Box<Sleep>>)>) -> TimerId {
    match commit {
        Some((id, sleep)) => {
            sleep.as_mut().await;
            let id = *id;
            *commit = None;
            id
        }
        None => std::future::pending().await,
    }
}
