use std::path::PathBuf;
use std::str::FromStr;

use clap::Args;
use slidestep_core::{Controls, Effect, Extent, Point, PointerSource, SliderConfig, SliderEngine};

use super::print_notification;

/// Extent of the simulated swipe target along both axes.
const SWIPE_TARGET: f64 = 200.0;

#[derive(Args)]
pub struct SimulateArgs {
    /// Configuration file (defaults to ~/.config/slidestep/slider.toml)
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Control the step from outside (the engine only reports changes)
    #[arg(long)]
    pub step: Option<i64>,
    /// Control the paused flag from outside
    #[arg(long)]
    pub paused: Option<bool>,
    /// Actions: next, prev, play, pause, goto:N, tick, settle, swipe:DX[:DY], hover, unhover
    #[arg(required = true)]
    pub actions: Vec<Action>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Next,
    Previous,
    Play,
    Pause,
    GoTo(i64),
    /// Fire the running playback timer.
    Tick,
    /// Fire the pending deferred commit.
    Settle,
    Swipe { dx: f64, dy: f64 },
    Hover,
    Unhover,
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let name = parts.next().unwrap_or_default();
        let action = match name {
            "next" => Action::Next,
            "prev" | "previous" => Action::Previous,
            "play" => Action::Play,
            "pause" => Action::Pause,
            "tick" => Action::Tick,
            "settle" => Action::Settle,
            "hover" => Action::Hover,
            "unhover" => Action::Unhover,
            "goto" => Action::GoTo(argument(s, parts.next(), "a step")?),
            "swipe" => {
                let dx = argument(s, parts.next(), "a distance")?;
                let dy = match parts.next() {
                    Some(dy) => argument(s, Some(dy), "a distance")?,
                    None => 0.0,
                };
                Action::Swipe { dx, dy }
            }
            other => return Err(format!("unknown action: {other}")),
        };
        Ok(action)
    }
}

/// Parse one `:`-separated argument of `action`.
fn argument<T>(action: &str, raw: Option<&str>, what: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.ok_or_else(|| format!("'{action}' needs {what}"))?
        .parse::<T>()
        .map_err(|e| format!("invalid {what} in '{action}': {e}"))
}

fn apply(engine: &mut SliderEngine, action: Action) -> Vec<Effect> {
    match action {
        Action::Next => engine.next(),
        Action::Previous => engine.previous(),
        Action::Play => engine.play(),
        Action::Pause => engine.pause(),
        Action::GoTo(step) => engine.go_to(step),
        Action::Tick => match engine.active_timer() {
            Some(id) => engine.timer_tick(id),
            None => {
                tracing::warn!("tick ignored: no playback timer is running");
                Vec::new()
            }
        },
        Action::Settle => match engine.pending_commit() {
            Some(id) => engine.commit_elapsed(id),
            None => {
                tracing::warn!("settle ignored: no commit is pending");
                Vec::new()
            }
        },
        Action::Swipe { dx, dy } => {
            let origin = Point::new(SWIPE_TARGET / 2.0, SWIPE_TARGET / 2.0);
            let mut effects = engine.pointer_down(
                PointerSource::Touch,
                &[origin],
                Extent::new(SWIPE_TARGET, SWIPE_TARGET),
            );
            effects.extend(engine.pointer_move(&[Point::new(origin.x + dx, origin.y + dy)]));
            effects.extend(engine.pointer_up());
            effects
        }
        Action::Hover => engine.hover_enter(),
        Action::Unhover => engine.hover_leave(),
    }
}

pub fn run(args: SimulateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = SliderConfig::load_or_default(args.file.as_deref())?;
    let controls = Controls {
        step: args.step,
        paused: args.paused,
    };
    let mut engine = SliderEngine::new(config, controls)?;

    let mut effects = engine.start();
    for action in args.actions {
        tracing::debug!(?action, "simulating");
        effects.extend(apply(&mut engine, action));
    }
    effects.extend(engine.dispose());

    for effect in &effects {
        match effect {
            Effect::Notify(notification) => print_notification(notification)?,
            other => tracing::debug!(effect = ?other, "timer command"),
        }
    }
    let summary = serde_json::json!({ "type": "snapshot", "snapshot": engine.snapshot() });
    println!("{summary}");
    Ok(())
}
