//! # slidestep Core Library
//!
//! Headless state for step-based widgets: carousels, slideshows and
//! multi-step forms. The library tracks the current step and turns button
//! presses, playback ticks and swipe gestures into step changes. It draws
//! nothing; rendering code reads [`Snapshot`]s and binds its input events to
//! the engine's actions.
//!
//! ## Architecture
//!
//! - **Slider Engine**: a state machine whose actions return [`Effect`]s
//!   (timer commands and hook notifications) instead of performing them
//! - **Step Arithmetic**: next/previous/clamp over bounded, cycling or
//!   unbounded sequences
//! - **Gesture Recognizer**: drag distance, direction and swipe decision
//! - **Host Runtime**: a tokio loop that runs the timers the engine describes
//!
//! ## Key Components
//!
//! - [`SliderEngine`]: Core step state machine
//! - [`SliderConfig`]: Validated configuration, loadable from TOML
//! - [`Hooks`]: Optional named callbacks
//! - [`Host`]: Tokio event loop

pub mod config;
pub mod control;
pub mod engine;
pub mod error;
pub mod events;
pub mod gesture;
pub mod hooks;
pub mod playback;
pub mod runtime;
pub mod step;
pub mod util;

pub use config::SliderConfig;
pub use control::{Controls, Ownership};
pub use engine::{Input, SliderEngine};
pub use error::{ConfigError, CoreError};
pub use events::{Effect, Notification, Snapshot};
pub use gesture::{Extent, GestureState, Point, PointerSource};
pub use hooks::Hooks;
pub use playback::TimerId;
pub use runtime::Host;
pub use step::StepBounds;
