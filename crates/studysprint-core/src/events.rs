use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{Phase, Theme};

/// Every state change in the system produces an Event.
/// Front ends print or react to them; expiry events are the cue to move to
/// the "session complete" / "break complete" views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        time_remaining: u32,
        is_break: bool,
        at: DateTime<Utc>,
    },
    TimerPaused {
        time_remaining: u32,
        is_break: bool,
        at: DateTime<Utc>,
    },
    TimerReset {
        time_remaining: u32,
        at: DateTime<Utc>,
    },
    DurationChanged {
        custom_minutes: u32,
        time_remaining: u32,
        at: DateTime<Utc>,
    },
    Ticked {
        time_remaining: u32,
        at: DateTime<Utc>,
    },
    /// Focus countdown observed at zero; running has stopped.
    FocusExpired {
        at: DateTime<Utc>,
    },
    BreakStarted {
        break_time_remaining: u32,
        at: DateTime<Utc>,
    },
    BreakTicked {
        break_time_remaining: u32,
        at: DateTime<Utc>,
    },
    /// Break countdown observed at zero; break mode has been left.
    BreakExpired {
        at: DateTime<Utc>,
    },
    BreakSkipped {
        break_time_remaining: u32,
        at: DateTime<Utc>,
    },
    SessionCompleted {
        sessions_completed: u32,
        at: DateTime<Utc>,
    },
    SettingsChanged {
        theme: Theme,
        sound_enabled: bool,
        vibration_enabled: bool,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        phase: Phase,
        is_running: bool,
        is_break: bool,
        time_remaining: u32,
        initial_time: u32,
        break_time_remaining: u32,
        custom_minutes: u32,
        sessions_completed: u32,
        display: String,
        remaining_ratio: f64,
        theme: Theme,
        sound_enabled: bool,
        vibration_enabled: bool,
        at: DateTime<Utc>,
    },
    TaskAdded {
        id: String,
        title: String,
        at: DateTime<Utc>,
    },
    TaskToggled {
        id: String,
        completed: bool,
        at: DateTime<Utc>,
    },
    TaskDeleted {
        id: String,
        at: DateTime<Utc>,
    },
    CompletedTasksCleared {
        removed: usize,
        at: DateTime<Utc>,
    },
    NotesUpdated {
        length: usize,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Whether this event marks a countdown reaching its end.
    pub fn is_expiry(&self) -> bool {
        matches!(self, Event::FocusExpired { .. } | Event::BreakExpired { .. })
    }
}
