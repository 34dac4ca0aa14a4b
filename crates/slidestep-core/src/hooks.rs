//! Named notification hooks.
//!
//! Every hook is optional. A missing hook swallows its notification.
//! Observers see every notification after the named hook ran.

use crate::events::{Effect, Notification, Snapshot};
use crate::gesture::GestureState;
use crate::util::call_all;

pub type StepHook = Box<dyn FnMut(i64, &Snapshot) + Send>;
pub type StateHook = Box<dyn FnMut(&Snapshot) + Send>;
pub type GestureHook = Box<dyn FnMut(&GestureState, &Snapshot) + Send>;
pub type Observer = Box<dyn FnMut(&Notification) + Send>;

#[derive(Default)]
pub struct Hooks {
    pub before_change: Option<StepHook>,
    pub changed: Option<StepHook>,
    pub after_change: Option<StepHook>,
    pub play: Option<StateHook>,
    pub pause: Option<StateHook>,
    pub next: Option<StepHook>,
    pub previous: Option<StepHook>,
    pub swipe_start: Option<GestureHook>,
    pub swipe_move: Option<GestureHook>,
    pub swipe_end: Option<GestureHook>,
    pub observers: Vec<Observer>,
}

impl std::fmt::Debug for Hooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hooks")
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_before_change(mut self, hook: impl FnMut(i64, &Snapshot) + Send + 'static) -> Self {
        self.before_change = Some(Box::new(hook));
        self
    }

    pub fn on_change(mut self, hook: impl FnMut(i64, &Snapshot) + Send + 'static) -> Self {
        self.changed = Some(Box::new(hook));
        self
    }

    pub fn on_after_change(mut self, hook: impl FnMut(i64, &Snapshot) + Send + 'static) -> Self {
        self.after_change = Some(Box::new(hook));
        self
    }

    pub fn on_play(mut self, hook: impl FnMut(&Snapshot) + Send + 'static) -> Self {
        self.play = Some(Box::new(hook));
        self
    }

    pub fn on_pause(mut self, hook: impl FnMut(&Snapshot) + Send + 'static) -> Self {
        self.pause = Some(Box::new(hook));
        self
    }

    pub fn on_next(mut self, hook: impl FnMut(i64, &Snapshot) + Send + 'static) -> Self {
        self.next = Some(Box::new(hook));
        self
    }

    pub fn on_previous(mut self, hook: impl FnMut(i64, &Snapshot) + Send + 'static) -> Self {
        self.previous = Some(Box::new(hook));
        self
    }

    pub fn on_swipe_start(
        mut self,
        hook: impl FnMut(&GestureState, &Snapshot) + Send + 'static,
    ) -> Self {
        self.swipe_start = Some(Box::new(hook));
        self
    }

    pub fn on_swipe_move(
        mut self,
        hook: impl FnMut(&GestureState, &Snapshot) + Send + 'static,
    ) -> Self {
        self.swipe_move = Some(Box::new(hook));
        self
    }

    pub fn on_swipe_end(
        mut self,
        hook: impl FnMut(&GestureState, &Snapshot) + Send + 'static,
    ) -> Self {
        self.swipe_end = Some(Box::new(hook));
        self
    }

    /// Add a catch-all observer.
    pub fn observe(mut self, observer: impl FnMut(&Notification) + Send + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Run the hook matching `notification`, then every observer.
    pub fn dispatch(&mut self, notification: &Notification) {
        match notification {
            Notification::BeforeChange { step, snapshot } => {
                call_step(&mut self.before_change, *step, snapshot)
            }
            Notification::Changed { step, snapshot } => {
                call_step(&mut self.changed, *step, snapshot)
            }
            Notification::AfterChange { step, snapshot } => {
                call_step(&mut self.after_change, *step, snapshot)
            }
            Notification::Next { step, snapshot } => {
                call_step(&mut self.next, *step, snapshot)
            }
            Notification::Previous { step, snapshot } => {
                call_step(&mut self.previous, *step, snapshot)
            }
            Notification::Play { snapshot } => {
                if let Some(hook) = self.play.as_mut() {
                    hook(snapshot);
                }
            }
            Notification::Pause { snapshot } => {
                if let Some(hook) = self.pause.as_mut() {
                    hook(snapshot);
                }
            }
            Notification::SwipeStart { gesture, snapshot } => {
                call_gesture(&mut self.swipe_start, gesture, snapshot)
            }
            Notification::SwipeMove { gesture, snapshot } => {
                call_gesture(&mut self.swipe_move, gesture, snapshot)
            }
            Notification::SwipeEnd { gesture, snapshot } => {
                call_gesture(&mut self.swipe_end, gesture, snapshot)
            }
        }
        call_all(self.observers.iter_mut(), notification);
    }

    /// Dispatch the notifications among `effects`, skipping timer commands.
    pub fn dispatch_all<'a>(&mut self, effects: impl IntoIterator<Item = &'a Effect>) {
        for notification in effects.into_iter().filter_map(Effect::notification) {
            self.dispatch(notification);
        }
    }
}

fn call_step(hook: &mut Option<StepHook>, step: i64, snapshot: &Snapshot) {
    if let Some(hook) = hook.as_mut() {
        hook(step, snapshot);
    }
}

fn call_gesture(hook: &mut Option<GestureHook>, gesture: &GestureState, snapshot: &Snapshot) {
    if let Some(hook) = hook.as_mut() {
        hook(gesture, snapshot);
    }
}
