//! Swipe gesture recognition.
//!
//! Turns raw pointer/touch samples into drag distances and, on release,
//! into a next/previous request.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging -> (Swiped | Cancelled) -> Idle
//! ```

use serde::{Deserialize, Serialize};

use crate::config::SliderConfig;
use crate::util::{first, sign};

/// Movement below this length is treated as jitter, not a swipe.
const SWIPE_NOISE_FLOOR: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerSource {
    Mouse,
    Touch,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Size of the element the gesture started on.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

impl Extent {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn along(&self, vertical: bool) -> f64 {
        if vertical {
            self.height
        } else {
            self.width
        }
    }
}

/// Per-gesture tracking fields. All zero while idle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureState {
    pub dragging: bool,
    pub swiping: bool,
    pub swiped: bool,
    pub start_x: f64,
    pub start_y: f64,
    pub cur_x: f64,
    pub cur_y: f64,
    pub swipe_length_x: f64,
    pub swipe_length_y: f64,
    /// Length along the primary axis.
    pub swipe_length: f64,
    pub left_distance: f64,
    pub down_distance: f64,
    pub direction_sign: i8,
    pub ratio: f64,
}

impl Default for GestureState {
    fn default() -> Self {
        Self {
            dragging: false,
            swiping: false,
            swiped: false,
            start_x: 0.0,
            start_y: 0.0,
            cur_x: 0.0,
            cur_y: 0.0,
            swipe_length_x: 0.0,
            swipe_length_y: 0.0,
            swipe_length: 0.0,
            left_distance: 0.0,
            down_distance: 0.0,
            direction_sign: 1,
            ratio: 0.0,
        }
    }
}

/// Step request produced by a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeRequest {
    Next,
    Previous,
}

/// Result of releasing the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// No drag was in progress.
    NotDragging,
    /// The drag ended; `request` is set when it was long enough to count.
    Ended { request: Option<SwipeRequest> },
}

/// Tracks a single gesture at a time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GestureTracker {
    state: GestureState,
    /// Extent of the target along the configured axis, captured on start.
    target_extent: f64,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.dragging
    }

    /// Minimum primary-axis length for a drag to count as a swipe. `None`
    /// when the extent or threshold leaves no usable minimum.
    pub fn min_swipe(&self, config: &SliderConfig) -> Option<f64> {
        let min_swipe = self.target_extent / config.touch_threshold;
        (min_swipe > 0.0 && min_swipe.is_finite()).then_some(min_swipe)
    }

    /// Begin tracking. Returns `false` when the gesture is ignored.
    pub fn on_start(
        &mut self,
        config: &SliderConfig,
        source: PointerSource,
        points: &[Point],
        target: Extent,
    ) -> bool {
        if !config.swipe || (source == PointerSource::Mouse && !config.draggable) {
            return false;
        }
        let Some(&position) = first(points) else {
            return false;
        };
        self.target_extent = target.along(config.vertical);
        self.state = GestureState {
            dragging: true,
            start_x: position.x,
            start_y: position.y,
            cur_x: position.x,
            cur_y: position.y,
            ..GestureState::default()
        };
        true
    }

    /// Update distances from the latest sample. Returns `false` when the
    /// sample is ignored.
    pub fn on_move(&mut self, config: &SliderConfig, points: &[Point], animating: bool) -> bool {
        if !self.state.dragging || animating {
            return false;
        }
        let Some(&position) = first(points) else {
            return false;
        };

        let min_swipe = self.min_swipe(config);
        let state = &mut self.state;
        state.cur_x = position.x;
        state.cur_y = position.y;
        state.left_distance = position.x - state.start_x;
        state.down_distance = position.y - state.start_y;
        state.swipe_length_x = state.left_distance.powi(2).sqrt();
        state.swipe_length_y = state.down_distance.powi(2).sqrt();

        let (length, signed) = if config.vertical {
            (state.swipe_length_y, state.down_distance)
        } else {
            (state.swipe_length_x, state.left_distance)
        };
        state.swipe_length = length;
        state.direction_sign = sign(signed);

        match min_swipe {
            Some(min_swipe) => {
                state.swiped = length > min_swipe;
                state.ratio = length / min_swipe;
            }
            None => {
                state.swiped = false;
                state.ratio = 0.0;
            }
        }
        if length > SWIPE_NOISE_FLOOR {
            state.swiping = true;
        }
        tracing::trace!(
            swipe_length = length,
            direction = state.direction_sign,
            swiped = state.swiped,
            "gesture moved"
        );
        true
    }

    /// Finish the gesture and reset all tracking fields.
    pub fn on_end(&mut self, config: &SliderConfig, animating: bool) -> Release {
        if !self.state.dragging {
            return Release::NotDragging;
        }
        let direction = self.state.direction_sign;
        let length = self.state.swipe_length;
        let min_swipe = self.min_swipe(config);
        self.state = GestureState::default();

        if animating || length == 0.0 {
            return Release::Ended { request: None };
        }
        let accepted = min_swipe.is_some_and(|min_swipe| length > min_swipe);
        let request = accepted.then(|| {
            if direction == -1 || config.swipe_iterate_only {
                SwipeRequest::Next
            } else {
                SwipeRequest::Previous
            }
        });
        Release::Ended { request }
    }
}
