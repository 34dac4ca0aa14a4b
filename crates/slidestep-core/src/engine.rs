//! Slider engine implementation.
//!
//! The engine is an explicit state machine holding the step state and the
//! gesture state. It performs no side effects itself: every action returns
//! the effects the host must carry out, in order (timer commands and hook
//! notifications).
//!
//! ## Flow of a step change
//!
//! ```text
//! action -> candidate step -> before_change -> [deferred commit] -> commit -> changed -> after_change
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = SliderEngine::new(config, Controls::none())?;
//! host.apply(engine.start());
//! host.apply(engine.next());
//! // On teardown:
//! host.apply(engine.dispose());
//! ```

use serde::{Deserialize, Serialize};

use crate::config::SliderConfig;
use crate::control::{Controls, Field};
use crate::error::ConfigError;
use crate::events::{Effect, Notification, Snapshot};
use crate::gesture::{Extent, GestureTracker, Point, PointerSource, Release, SwipeRequest};
use crate::playback::{PlaybackTimer, TimerId};

/// Everything a host can feed into the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Input {
    Next,
    Previous,
    Play,
    Pause,
    GoTo { step: i64 },
    PointerDown {
        source: PointerSource,
        points: Vec<Point>,
        target: Extent,
    },
    PointerMove { points: Vec<Point> },
    PointerUp,
    PointerLeave,
    HoverEnter,
    HoverLeave,
    TimerTick { id: TimerId },
    CommitElapsed { id: TimerId },
    UpdateControls { controls: Controls },
    Start,
    Stop,
    Dispose,
}

/// A step commit waiting for its animation delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingCommit {
    id: TimerId,
    step: i64,
}

/// Core slider engine.
#[derive(Debug, Clone)]
pub struct SliderEngine {
    config: SliderConfig,
    step: Field<i64>,
    paused: Field<bool>,
    animating: bool,
    hovering: bool,
    gesture: GestureTracker,
    playback: PlaybackTimer,
    pending: Option<PendingCommit>,
    commits_issued: u64,
    disposed: bool,
}

impl SliderEngine {
    /// Create an engine. Fails before any state exists if `config` is invalid.
    ///
    /// # Errors
    ///
    /// Returns the first violated configuration invariant.
    pub fn new(config: SliderConfig, controls: Controls) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            step: Field::new(config.default_step, controls.step),
            paused: Field::new(!config.auto_play, controls.paused),
            config,
            animating: false,
            hovering: false,
            gesture: GestureTracker::new(),
            playback: PlaybackTimer::new(),
            pending: None,
            commits_issued: 0,
            disposed: false,
        })
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn current_step(&self) -> i64 {
        self.step.get()
    }

    pub fn is_paused(&self) -> bool {
        self.paused.get()
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn is_step_controlled(&self) -> bool {
        self.step.is_controlled()
    }

    pub fn is_paused_controlled(&self) -> bool {
        self.paused.is_controlled()
    }

    /// Id of the running playback timer, if any.
    pub fn active_timer(&self) -> Option<TimerId> {
        self.playback.active()
    }

    /// Id of the pending deferred commit, if any.
    pub fn pending_commit(&self) -> Option<TimerId> {
        self.pending.map(|p| p.id)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            current_step: self.step.get(),
            paused: self.paused.get(),
            animating: self.animating,
            gesture: *self.gesture.state(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Dispatch a host input to the matching action.
    pub fn handle(&mut self, input: Input) -> Vec<Effect> {
        match input {
            Input::Next => self.next(),
            Input::Previous => self.previous(),
            Input::Play => self.play(),
            Input::Pause => self.pause(),
            Input::GoTo { step } => self.go_to(step),
            Input::PointerDown {
                source,
                points,
                target,
            } => self.pointer_down(source, &points, target),
            Input::PointerMove { points } => self.pointer_move(&points),
            Input::PointerUp => self.pointer_up(),
            Input::PointerLeave => self.pointer_leave(),
            Input::HoverEnter => self.hover_enter(),
            Input::HoverLeave => self.hover_leave(),
            Input::TimerTick { id } => self.timer_tick(id),
            Input::CommitElapsed { id } => self.commit_elapsed(id),
            Input::UpdateControls { controls } => self.update_controls(controls),
            Input::Start => self.start(),
            Input::Stop => self.stop(),
            Input::Dispose => self.dispose(),
        }
    }

    /// Mount: evaluate the playback policy for the first time.
    pub fn start(&mut self) -> Vec<Effect> {
        self.run(|_, _| ())
    }

    /// Halt the playback timer until the next settle decides otherwise.
    pub fn stop(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        if !self.disposed {
            self.playback.stop(&mut effects);
        }
        effects
    }

    /// Tear down: cancel the playback timer and any pending commit. Every
    /// later input is ignored.
    pub fn dispose(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.disposed {
            return effects;
        }
        self.playback.stop(&mut effects);
        self.cancel_pending(&mut effects);
        self.animating = false;
        self.disposed = true;
        tracing::debug!(step = self.step.get(), "slider disposed");
        effects
    }

    pub fn next(&mut self) -> Vec<Effect> {
        self.run(|engine, effects| engine.advance(effects))
    }

    pub fn previous(&mut self) -> Vec<Effect> {
        self.run(|engine, effects| engine.retreat(effects))
    }

    /// Jump to `target`, wrapped or clamped into range.
    pub fn go_to(&mut self, target: i64) -> Vec<Effect> {
        self.run(|engine, effects| {
            let current = engine.base_step();
            let step = engine
                .config
                .bounds()
                .clamp_step(current, target.saturating_sub(current));
            engine.change_slide(step, effects);
        })
    }

    pub fn play(&mut self) -> Vec<Effect> {
        self.run(|engine, effects| engine.request_pause_change(false, effects))
    }

    pub fn pause(&mut self) -> Vec<Effect> {
        self.run(|engine, effects| engine.request_pause_change(true, effects))
    }

    /// A playback tick. Ticks from a cancelled timer are dropped.
    pub fn timer_tick(&mut self, id: TimerId) -> Vec<Effect> {
        if !self.playback.accepts(id) {
            tracing::debug!(timer = id.0, "stale playback tick ignored");
            return Vec::new();
        }
        self.next()
    }

    /// The animation delay for commit `id` has elapsed.
    pub fn commit_elapsed(&mut self, id: TimerId) -> Vec<Effect> {
        self.run(|engine, effects| {
            let Some(pending) = engine.pending.filter(|p| p.id == id) else {
                tracing::debug!(commit = id.0, "stale commit ignored");
                return;
            };
            engine.pending = None;
            engine.animating = false;
            engine.request_step_change(pending.step, effects);
            engine.notify(effects, Notification::AfterChange {
                step: pending.step,
                snapshot: engine.snapshot(),
            });
        })
    }

    /// Take the caller-supplied values for this update cycle.
    pub fn update_controls(&mut self, controls: Controls) -> Vec<Effect> {
        self.run(|engine, _| {
            engine.step.set_external(controls.step);
            engine.paused.set_external(controls.paused);
        })
    }

    pub fn pointer_down(
        &mut self,
        source: PointerSource,
        points: &[Point],
        target: Extent,
    ) -> Vec<Effect> {
        self.run(|engine, effects| {
            if engine.gesture.on_start(&engine.config, source, points, target) {
                effects.push(Effect::Notify(Notification::SwipeStart {
                    gesture: *engine.gesture.state(),
                    snapshot: engine.snapshot(),
                }));
            }
        })
    }

    pub fn pointer_move(&mut self, points: &[Point]) -> Vec<Effect> {
        self.run(|engine, effects| {
            if engine.gesture.on_move(&engine.config, points, engine.animating) {
                effects.push(Effect::Notify(Notification::SwipeMove {
                    gesture: *engine.gesture.state(),
                    snapshot: engine.snapshot(),
                }));
            }
        })
    }

    pub fn pointer_up(&mut self) -> Vec<Effect> {
        self.run(|engine, effects| {
            let request = match engine.gesture.on_end(&engine.config, engine.animating) {
                Release::NotDragging => {
                    if engine.config.swipe {
                        effects.push(Effect::SuppressDefault);
                    }
                    return;
                }
                Release::Ended { request } => request,
            };
            effects.push(Effect::Notify(Notification::SwipeEnd {
                gesture: *engine.gesture.state(),
                snapshot: engine.snapshot(),
            }));
            match request {
                Some(SwipeRequest::Next) => engine.advance(effects),
                Some(SwipeRequest::Previous) => engine.retreat(effects),
                None => {}
            }
        })
    }

    /// The pointer left the target. An unfinished drag ends here.
    pub fn pointer_leave(&mut self) -> Vec<Effect> {
        if self.gesture.is_dragging() {
            self.pointer_up()
        } else {
            Vec::new()
        }
    }

    pub fn hover_enter(&mut self) -> Vec<Effect> {
        self.run(|engine, _| engine.hovering = engine.config.pause_on_hover)
    }

    pub fn hover_leave(&mut self) -> Vec<Effect> {
        self.run(|engine, _| engine.hovering = false)
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Run one action, then settle. Does nothing once disposed.
    fn run(&mut self, action: impl FnOnce(&mut Self, &mut Vec<Effect>)) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.disposed {
            return effects;
        }
        action(self, &mut effects);
        self.settle(&mut effects);
        effects
    }

    /// Re-run the playback policy. The timer stays stopped while a commit
    /// is pending; the commit's own settle restarts it.
    fn settle(&mut self, effects: &mut Vec<Effect>) {
        let paused = self.paused.get() || self.hovering || self.animating;
        self.playback
            .reevaluate(&self.config, self.step.get(), paused, effects);
    }

    /// Step that navigation counts from: the pending target while animating.
    fn base_step(&self) -> i64 {
        self.pending.map_or_else(|| self.step.get(), |pending| pending.step)
    }

    fn advance(&mut self, effects: &mut Vec<Effect>) {
        let step = self.config.bounds().next_step(self.base_step());
        self.notify(effects, Notification::Next {
            step,
            snapshot: self.snapshot(),
        });
        self.change_slide(step, effects);
    }

    fn retreat(&mut self, effects: &mut Vec<Effect>) {
        let step = self.config.bounds().previous_step(self.base_step());
        self.notify(effects, Notification::Previous {
            step,
            snapshot: self.snapshot(),
        });
        self.change_slide(step, effects);
    }

    fn change_slide(&mut self, step: i64, effects: &mut Vec<Effect>) {
        self.notify(effects, Notification::BeforeChange {
            step,
            snapshot: self.snapshot(),
        });
        if self.config.animation_speed_ms > 0 {
            self.cancel_pending(effects);
            self.commits_issued += 1;
            let id = TimerId(self.commits_issued);
            self.pending = Some(PendingCommit { id, step });
            self.animating = true;
            tracing::debug!(commit = id.0, step, delay_ms = self.config.animation_speed_ms, "commit deferred");
            effects.push(Effect::ScheduleCommit {
                id,
                delay_ms: self.config.animation_speed_ms,
            });
        } else {
            self.request_step_change(step, effects);
            self.notify(effects, Notification::AfterChange {
                step,
                snapshot: self.snapshot(),
            });
        }
    }

    fn cancel_pending(&mut self, effects: &mut Vec<Effect>) {
        if let Some(pending) = self.pending.take() {
            effects.push(Effect::CancelCommit { id: pending.id });
        }
    }

    /// The single entry point for step mutation.
    fn request_step_change(&mut self, step: i64, effects: &mut Vec<Effect>) {
        // A tick that already fired must not race this change.
        self.playback.stop(effects);
        if self.step.commit(step) {
            tracing::debug!(step, "step committed");
            self.settle(effects);
        } else {
            tracing::debug!(step, "step is controlled, reporting only");
        }
        self.notify(effects, Notification::Changed {
            step,
            snapshot: self.snapshot(),
        });
    }

    /// The single entry point for pause mutation.
    fn request_pause_change(&mut self, paused: bool, effects: &mut Vec<Effect>) {
        if !self.config.has_playback() {
            return;
        }
        if self.paused.commit(paused) {
            tracing::debug!(paused, "pause committed");
        }
        let snapshot = self.snapshot();
        effects.push(Effect::Notify(if paused {
            Notification::Pause { snapshot }
        } else {
            Notification::Play { snapshot }
        }));
    }

    fn notify(&self, effects: &mut Vec<Effect>, notification: Notification) {
        effects.push(Effect::Notify(notification));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(config: SliderConfig) -> SliderEngine {
        SliderEngine::new(config, Controls::none()).unwrap()
    }

    fn cycling(total: u32) -> SliderConfig {
        SliderConfig {
            total,
            cycle: true,
            ..SliderConfig::default()
        }
    }

    fn names(effects: &[Effect]) -> Vec<&'static str> {
        effects
            .iter()
            .filter_map(Effect::notification)
            .map(Notification::name)
            .collect()
    }

    fn find<'a>(effects: &'a [Effect], name: &str) -> Option<&'a Notification> {
        effects
            .iter()
            .filter_map(Effect::notification)
            .find(|n| n.name() == name)
    }

    fn swipe(engine: &mut SliderEngine, dx: f64) -> Vec<Effect> {
        let mut effects = engine.pointer_down(
            PointerSource::Touch,
            &[Point::new(100.0, 0.0)],
            Extent::new(200.0, 100.0),
        );
        effects.extend(engine.pointer_move(&[Point::new(100.0 + dx, 0.0)]));
        effects.extend(engine.pointer_up());
        effects
    }

    #[test]
    fn next_wraps_and_notifies() {
        let mut engine = engine(SliderConfig {
            default_step: 4,
            ..cycling(5)
        });
        let effects = engine.next();
        assert_eq!(engine.current_step(), 0);
        assert_eq!(
            names(&effects),
            vec!["next", "before_change", "changed", "after_change"]
        );
        assert_eq!(find(&effects, "next").and_then(Notification::step), Some(0));
        assert_eq!(find(&effects, "changed").and_then(Notification::step), Some(0));
        assert_eq!(
            find(&effects, "changed").map(|n| n.snapshot().current_step),
            Some(0)
        );
    }

    #[test]
    fn previous_stops_at_first_step_without_cycle() {
        let mut engine = engine(SliderConfig {
            total: 3,
            ..SliderConfig::default()
        });
        engine.previous();
        assert_eq!(engine.current_step(), 0);
        engine.next();
        engine.next();
        engine.next();
        assert_eq!(engine.current_step(), 2);
    }

    #[test]
    fn unbounded_steps_go_negative() {
        let mut engine = engine(SliderConfig::default());
        engine.previous();
        engine.previous();
        assert_eq!(engine.current_step(), -2);
        engine.go_to(40);
        assert_eq!(engine.current_step(), 40);
    }

    #[test]
    fn go_to_wraps_when_cycling() {
        let mut engine = engine(cycling(5));
        let effects = engine.go_to(7);
        assert_eq!(engine.current_step(), 2);
        assert_eq!(names(&effects), vec!["before_change", "changed", "after_change"]);
    }

    #[test]
    fn invalid_config_fails_before_state_exists() {
        let err = SliderEngine::new(
            SliderConfig {
                cycle: true,
                ..SliderConfig::default()
            },
            Controls::none(),
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::CycleWithoutTotal);
    }

    #[test]
    fn controlled_step_is_never_mutated() {
        let mut engine = SliderEngine::new(cycling(5), Controls::step(2)).unwrap();
        assert!(engine.is_step_controlled());
        let effects = engine.next();
        assert_eq!(engine.current_step(), 2);
        let changed = find(&effects, "changed").unwrap();
        assert_eq!(changed.step(), Some(3));
        assert_eq!(changed.snapshot().current_step, 2);

        // The caller feeds the value back.
        engine.update_controls(Controls::step(3));
        assert_eq!(engine.current_step(), 3);

        // Releasing control resumes from the internal value.
        engine.update_controls(Controls::none());
        assert!(!engine.is_step_controlled());
        assert_eq!(engine.current_step(), 0);
    }

    #[test]
    fn play_and_pause_drive_the_timer() {
        let mut engine = engine(SliderConfig {
            duration_ms: 150,
            ..SliderConfig::default()
        });
        assert!(engine.is_paused());
        assert!(engine.start().is_empty());

        let effects = engine.play();
        assert!(!engine.is_paused());
        assert_eq!(names(&effects), vec!["play"]);
        let id = engine.active_timer().unwrap();
        assert!(effects.contains(&Effect::StartTimer { id, interval_ms: 150 }));

        let effects = engine.pause();
        assert!(engine.is_paused());
        assert_eq!(engine.active_timer(), None);
        assert!(effects.contains(&Effect::StopTimer { id }));
    }

    #[test]
    fn play_without_duration_is_a_no_op() {
        let mut engine = engine(SliderConfig::default());
        assert!(engine.play().is_empty());
        assert!(engine.is_paused());
    }

    #[test]
    fn controlled_pause_only_notifies() {
        let mut engine = SliderEngine::new(
            SliderConfig {
                duration_ms: 100,
                ..SliderConfig::default()
            },
            Controls::paused(true),
        )
        .unwrap();
        let effects = engine.play();
        assert_eq!(names(&effects), vec!["play"]);
        assert!(engine.is_paused());
        assert_eq!(engine.active_timer(), None);
    }

    #[test]
    fn auto_play_starts_on_mount_and_ticks_advance() {
        let mut engine = engine(SliderConfig {
            auto_play: true,
            duration_ms: 100,
            ..cycling(3)
        });
        engine.start();
        let first = engine.active_timer().unwrap();

        let effects = engine.timer_tick(first);
        assert_eq!(engine.current_step(), 1);
        // The change restarts the countdown under a new handle.
        let second = engine.active_timer().unwrap();
        assert_ne!(first, second);
        assert!(effects.contains(&Effect::StopTimer { id: first }));
        assert!(effects.contains(&Effect::StartTimer { id: second, interval_ms: 100 }));

        // A tick from the old handle lost the race.
        assert!(engine.timer_tick(first).is_empty());
        assert_eq!(engine.current_step(), 1);
    }

    #[test]
    fn playback_stops_on_last_step_without_cycle() {
        let mut engine = engine(SliderConfig {
            total: 2,
            auto_play: true,
            duration_ms: 100,
            ..SliderConfig::default()
        });
        engine.start();
        let id = engine.active_timer().unwrap();
        engine.timer_tick(id);
        assert_eq!(engine.current_step(), 1);
        assert_eq!(engine.active_timer(), None);
    }

    #[test]
    fn explicit_navigation_restarts_countdown() {
        let mut engine = engine(SliderConfig {
            auto_play: true,
            duration_ms: 100,
            ..cycling(4)
        });
        engine.start();
        let before = engine.active_timer().unwrap();
        engine.next();
        assert_ne!(engine.active_timer(), Some(before));
        assert!(engine.active_timer().is_some());
    }

    #[test]
    fn hover_suspends_playback() {
        let mut engine = engine(SliderConfig {
            auto_play: true,
            duration_ms: 100,
            ..cycling(4)
        });
        engine.start();
        engine.hover_enter();
        assert_eq!(engine.active_timer(), None);
        assert!(!engine.is_paused());
        engine.hover_leave();
        assert!(engine.active_timer().is_some());
    }

    #[test]
    fn hover_ignored_without_pause_on_hover() {
        let mut engine = engine(SliderConfig {
            auto_play: true,
            duration_ms: 100,
            pause_on_hover: false,
            ..cycling(4)
        });
        engine.start();
        engine.hover_enter();
        assert!(engine.active_timer().is_some());
    }

    #[test]
    fn animation_defers_commit() {
        let mut engine = engine(SliderConfig {
            animation_speed_ms: 300,
            ..cycling(5)
        });
        let effects = engine.next();
        assert_eq!(names(&effects), vec!["next", "before_change"]);
        assert_eq!(engine.current_step(), 0);
        assert!(engine.is_animating());
        let id = engine.pending_commit().unwrap();
        assert!(effects.contains(&Effect::ScheduleCommit { id, delay_ms: 300 }));

        let effects = engine.commit_elapsed(id);
        assert_eq!(engine.current_step(), 1);
        assert!(!engine.is_animating());
        assert_eq!(names(&effects), vec!["changed", "after_change"]);
        assert!(engine.commit_elapsed(id).is_empty());
    }

    #[test]
    fn new_transition_replaces_pending_commit() {
        let mut engine = engine(SliderConfig {
            animation_speed_ms: 300,
            ..cycling(5)
        });
        engine.next();
        let first = engine.pending_commit().unwrap();
        let effects = engine.go_to(3);
        let second = engine.pending_commit().unwrap();
        assert!(effects.contains(&Effect::CancelCommit { id: first }));

        let stale = engine.commit_elapsed(first);
        assert!(names(&stale).is_empty());
        assert_eq!(engine.current_step(), 0);

        engine.commit_elapsed(second);
        assert_eq!(engine.current_step(), 3);
    }

    #[test]
    fn dispose_cancels_timer_and_pending_commit() {
        let mut engine = engine(SliderConfig {
            auto_play: true,
            duration_ms: 100,
            animation_speed_ms: 300,
            ..cycling(5)
        });
        engine.start();
        let timer = engine.active_timer().unwrap();
        engine.next();
        let commit = engine.pending_commit().unwrap();
        engine.play();
        assert!(engine.active_timer().is_none());

        let effects = engine.dispose();
        assert_eq!(effects, vec![Effect::CancelCommit { id: commit }]);
        assert!(!effects.contains(&Effect::StopTimer { id: timer }));
        assert!(engine.is_disposed());
        assert!(engine.commit_elapsed(commit).is_empty());
        assert!(engine.next().is_empty());
        assert!(engine.dispose().is_empty());
        assert_eq!(engine.current_step(), 0);
    }

    #[test]
    fn dispose_stops_running_timer() {
        let mut engine = engine(SliderConfig {
            auto_play: true,
            duration_ms: 100,
            ..cycling(5)
        });
        engine.start();
        let timer = engine.active_timer().unwrap();
        assert_eq!(engine.dispose(), vec![Effect::StopTimer { id: timer }]);
    }

    #[test]
    fn playback_holds_while_commit_pending() {
        let mut engine = engine(SliderConfig {
            auto_play: true,
            duration_ms: 100,
            animation_speed_ms: 300,
            ..cycling(5)
        });
        engine.start();
        let timer = engine.active_timer().unwrap();

        let effects = engine.timer_tick(timer);
        assert!(effects.contains(&Effect::StopTimer { id: timer }));
        assert_eq!(engine.active_timer(), None);
        let commit = engine.pending_commit().unwrap();

        // A tick that was already queued must not replace the commit.
        assert!(engine.timer_tick(timer).is_empty());
        assert_eq!(engine.pending_commit(), Some(commit));

        let effects = engine.commit_elapsed(commit);
        assert_eq!(engine.current_step(), 1);
        let restarted = engine.active_timer().unwrap();
        assert_ne!(restarted, timer);
        assert!(effects.contains(&Effect::StartTimer {
            id: restarted,
            interval_ms: 100
        }));

        engine.timer_tick(restarted);
        let commit = engine.pending_commit().unwrap();
        engine.commit_elapsed(commit);
        assert_eq!(engine.current_step(), 2);
    }

    #[test]
    fn navigation_during_animation_counts_from_pending_target() {
        let mut engine = engine(SliderConfig {
            animation_speed_ms: 300,
            ..cycling(5)
        });
        engine.next();
        let effects = engine.next();
        assert_eq!(find(&effects, "next").and_then(Notification::step), Some(2));
        let commit = engine.pending_commit().unwrap();
        engine.commit_elapsed(commit);
        assert_eq!(engine.current_step(), 2);

        engine.previous();
        engine.previous();
        let commit = engine.pending_commit().unwrap();
        engine.commit_elapsed(commit);
        assert_eq!(engine.current_step(), 0);
    }

    #[test]
    fn swipe_past_threshold_changes_step() {
        let mut engine = engine(SliderConfig {
            touch_threshold: 20.0,
            ..cycling(5)
        });
        let effects = swipe(&mut engine, -15.0);
        assert_eq!(engine.current_step(), 1);
        assert_eq!(
            names(&effects),
            vec![
                "swipe_start",
                "swipe_move",
                "swipe_end",
                "next",
                "before_change",
                "changed",
                "after_change"
            ]
        );
        let end = find(&effects, "swipe_end").unwrap();
        assert!(!end.snapshot().gesture.dragging);

        swipe(&mut engine, 15.0);
        assert_eq!(engine.current_step(), 0);
    }

    #[test]
    fn short_swipe_keeps_step() {
        let mut engine = engine(SliderConfig {
            touch_threshold: 20.0,
            ..cycling(5)
        });
        let effects = swipe(&mut engine, -5.0);
        assert_eq!(engine.current_step(), 0);
        assert_eq!(names(&effects), vec!["swipe_start", "swipe_move", "swipe_end"]);
    }

    #[test]
    fn move_during_animation_is_suppressed() {
        let mut engine = engine(SliderConfig {
            touch_threshold: 20.0,
            animation_speed_ms: 300,
            ..cycling(5)
        });
        engine.next();
        let effects = swipe(&mut engine, -50.0);
        assert_eq!(names(&effects), vec!["swipe_start", "swipe_end"]);
        assert!(engine.pending_commit().is_some());
        assert_eq!(engine.current_step(), 0);
    }

    #[test]
    fn pointer_up_without_drag_suppresses_default() {
        let mut engine = engine(SliderConfig::default());
        assert_eq!(engine.pointer_up(), vec![Effect::SuppressDefault]);

        let mut disabled = self::engine(SliderConfig {
            swipe: false,
            ..SliderConfig::default()
        });
        assert!(disabled.pointer_up().is_empty());
    }

    #[test]
    fn pointer_leave_ends_drag() {
        let mut engine = engine(SliderConfig {
            touch_threshold: 20.0,
            ..cycling(5)
        });
        assert!(engine.pointer_leave().is_empty());
        engine.pointer_down(PointerSource::Mouse, &[Point::new(0.0, 0.0)], Extent::new(200.0, 0.0));
        engine.pointer_move(&[Point::new(-30.0, 0.0)]);
        let effects = engine.pointer_leave();
        assert_eq!(find(&effects, "swipe_end").map(|n| n.snapshot().gesture.dragging), Some(false));
        assert_eq!(engine.current_step(), 1);
    }

    #[test]
    fn handle_dispatches_inputs() {
        let mut engine = engine(cycling(3));
        engine.handle(Input::Next);
        engine.handle(Input::GoTo { step: 2 });
        assert_eq!(engine.current_step(), 2);
        engine.handle(Input::Dispose);
        assert!(engine.is_disposed());
    }
}
