use std::path::PathBuf;

use clap::Args;
use slidestep_core::{Controls, Hooks, Host, Input, Notification, SliderConfig, SliderEngine};
use tokio::sync::mpsc;

use super::print_notification;

#[derive(Args)]
pub struct PlayArgs {
    /// Configuration file (defaults to ~/.config/slidestep/slider.toml)
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Stop after this many step changes
    #[arg(long, default_value = "3", value_parser = clap::value_parser!(u32).range(1..))]
    pub changes: u32,
}

pub fn run(args: PlayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = SliderConfig::load_or_default(args.file.as_deref())?;
    if !config.has_playback() {
        return Err("play requires duration_ms greater than zero".into());
    }
    let last_step = (!config.cycle).then(|| config.bounds().last()).flatten();
    if last_step.is_some_and(|last| config.default_step >= last) {
        return Err("already on the last step, nothing to play".into());
    }
    let engine = SliderEngine::new(config, Controls::none())?;

    let (tx, rx) = mpsc::unbounded_channel();
    let limit = args.changes;
    let mut seen = 0;
    let stopper = tx.clone();
    let hooks = Hooks::new().observe(move |notification| {
        if let Err(e) = print_notification(notification) {
            tracing::error!("failed to print notification: {e}");
        }
        if let Notification::Changed { step, .. } = notification {
            seen += 1;
            let exhausted = last_step.is_some_and(|last| *step >= last);
            if seen >= limit || exhausted {
                // The host may already be gone; nothing left to stop then.
                let _ = stopper.send(Input::Dispose);
            }
        }
    });

    tx.send(Input::Play)?;
    drop(tx);

    let runtime = tokio::runtime::Runtime::new()?;
    let engine = runtime.block_on(Host::new(engine, hooks).run(rx));
    let summary = serde_json::json!({ "type": "snapshot", "snapshot": engine.snapshot() });
    println!("{summary}");
    Ok(())
}
