//! Controlled vs. internally owned state.
//!
//! A field is controlled when the caller supplies its value. The engine then
//! never writes the field; it only reports the value it would have written.

use serde::{Deserialize, Serialize};

/// Values supplied by the caller for one update cycle. `None` leaves the
/// field with the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Controls {
    #[serde(default)]
    pub step: Option<i64>,
    #[serde(default)]
    pub paused: Option<bool>,
}

impl Controls {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn step(step: i64) -> Self {
        Self {
            step: Some(step),
            ..Self::default()
        }
    }

    pub fn paused(paused: bool) -> Self {
        Self {
            paused: Some(paused),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ownership {
    /// The engine holds the value.
    Internal,
    /// The caller holds the value.
    External,
}

/// One field of tracked state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field<T> {
    internal: T,
    external: Option<T>,
}

impl<T: Copy> Field<T> {
    pub fn new(initial: T, external: Option<T>) -> Self {
        Self {
            internal: initial,
            external,
        }
    }

    pub fn ownership(&self) -> Ownership {
        if self.external.is_some() {
            Ownership::External
        } else {
            Ownership::Internal
        }
    }

    pub fn is_controlled(&self) -> bool {
        self.ownership() == Ownership::External
    }

    /// The value the rest of the engine should see.
    pub fn get(&self) -> T {
        self.external.unwrap_or(self.internal)
    }

    /// Replace the caller-supplied value for this update cycle.
    pub fn set_external(&mut self, external: Option<T>) {
        self.external = external;
    }

    /// Write `value` if the engine owns the field. Returns whether it did.
    pub fn commit(&mut self, value: T) -> bool {
        match self.ownership() {
            Ownership::Internal => {
                self.internal = value;
                true
            }
            Ownership::External => false,
        }
    }
}
