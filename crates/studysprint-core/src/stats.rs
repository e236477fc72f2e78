//! Session statistics derived from the timer record.
//!
//! Only the session counter is stored, so totals assume every finished
//! session ran for the currently configured focus length.

use serde::{Deserialize, Serialize};

use crate::format::{format_total_time, format_total_time_long};
use crate::timer::TimerEngine;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SessionStats {
    pub sessions_completed: u32,
    pub total_focus_minutes: u32,
    pub average_session_minutes: u32,
    /// e.g. `1h 15m`
    pub total_focus_display: String,
    /// e.g. `1 hours 15 minutes`
    pub total_focus_long: String,
}

impl SessionStats {
    pub fn from_engine(engine: &TimerEngine) -> Self {
        let total = engine
            .sessions_completed()
            .saturating_mul(engine.custom_minutes());
        Self {
            sessions_completed: engine.sessions_completed(),
            total_focus_minutes: total,
            average_session_minutes: engine.custom_minutes(),
            total_focus_display: format_total_time(total),
            total_focus_long: format_total_time_long(total),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sessions_completed == 0
    }
}
