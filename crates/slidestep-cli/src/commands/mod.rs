pub mod config;
pub mod play;
pub mod simulate;

use chrono::{DateTime, Utc};
use serde::Serialize;
use slidestep_core::Notification;

/// A notification as printed on stdout, one JSON object per line.
#[derive(Serialize)]
pub struct Stamped<'a> {
    pub at: DateTime<Utc>,
    #[serde(flatten)]
    pub notification: &'a Notification,
}

pub fn print_notification(notification: &Notification) -> Result<(), serde_json::Error> {
    let line = serde_json::to_string(&Stamped {
        at: Utc::now(),
        notification,
    })?;
    println!("{line}");
    Ok(())
}
