//! Focus/break session state machine.
//!
//! The engine does not own a clock. The caller invokes `tick()` (focus) or
//! `tick_break()` (break) once per second while the matching countdown is
//! running. Reaching zero takes two ticks: one that decrements 1 -> 0 and
//! one that observes 0 and stops the countdown.
//!
//! ## Phases
//!
//! ```text
//! IdleFocus <-> RunningFocus -> FocusExpired
//!     ^                              |
//!     |                         start_break()
//!     |                              v
//!     +--- skip_break() ---- IdleBreak <-> RunningBreak
//! ```
//!
//! A break that runs out leaves break mode in the same tick that observes
//! zero; a focus countdown that runs out only stops running.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::theme::{Palette, Theme};
use crate::events::Event;
use crate::format::{format_time, minutes_to_seconds};

/// Fixed break length in seconds.
pub const BREAK_DURATION_SECS: u32 = 5 * 60;

/// Focus length used when nothing else has been configured.
pub const DEFAULT_CUSTOM_MINUTES: u32 = 15;

/// Phase derived from the running/break flags and the active countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    IdleFocus,
    RunningFocus,
    /// Focus countdown finished; waiting for the session to be acknowledged.
    FocusExpired,
    IdleBreak,
    RunningBreak,
    BreakExpired,
}

/// Timer, session counter and feedback settings.
///
/// Serialized as the persisted timer record; field names are part of the
/// storage format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimerEngine {
    is_running: bool,
    time_remaining: u32,
    initial_time: u32,
    custom_minutes: u32,
    is_break: bool,
    break_time_remaining: u32,
    sessions_completed: u32,
    theme: Theme,
    sound_enabled: bool,
    vibration_enabled: bool,
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::with_settings(DEFAULT_CUSTOM_MINUTES, Theme::default(), true, true)
    }
}

impl TimerEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh idle state with the given focus length and preferences.
    pub fn with_settings(
        custom_minutes: u32,
        theme: Theme,
        sound_enabled: bool,
        vibration_enabled: bool,
    ) -> Self {
        let secs = minutes_to_seconds(custom_minutes);
        Self {
            is_running: false,
            time_remaining: secs,
            initial_time: secs,
            custom_minutes,
            is_break: false,
            break_time_remaining: BREAK_DURATION_SECS,
            sessions_completed: 0,
            theme,
            sound_enabled,
            vibration_enabled,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn is_break(&self) -> bool {
        self.is_break
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn initial_time(&self) -> u32 {
        self.initial_time
    }

    pub fn custom_minutes(&self) -> u32 {
        self.custom_minutes
    }

    pub fn break_time_remaining(&self) -> u32 {
        self.break_time_remaining
    }

    pub fn sessions_completed(&self) -> u32 {
        self.sessions_completed
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn palette(&self) -> &'static Palette {
        self.theme.palette()
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn vibration_enabled(&self) -> bool {
        self.vibration_enabled
    }

    pub fn phase(&self) -> Phase {
        match (self.is_break, self.is_running) {
            (false, true) => Phase::RunningFocus,
            (false, false) if self.time_remaining == 0 => Phase::FocusExpired,
            (false, false) => Phase::IdleFocus,
            (true, true) => Phase::RunningBreak,
            (true, false) if self.break_time_remaining == 0 => Phase::BreakExpired,
            (true, false) => Phase::IdleBreak,
        }
    }

    /// Seconds shown on the clock: the break countdown during a break,
    /// otherwise the focus countdown.
    pub fn display_seconds(&self) -> u32 {
        if self.is_break {
            self.break_time_remaining
        } else {
            self.time_remaining
        }
    }

    /// 1.0 (full) .. 0.0 (empty) fraction of the active countdown left.
    pub fn remaining_ratio(&self) -> f64 {
        let (left, total) = if self.is_break {
            (self.break_time_remaining, BREAK_DURATION_SECS)
        } else {
            (self.time_remaining, self.initial_time)
        };
        if total == 0 {
            return 0.0;
        }
        f64::from(left) / f64::from(total)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            phase: self.phase(),
            is_running: self.is_running,
            is_break: self.is_break,
            time_remaining: self.time_remaining,
            initial_time: self.initial_time,
            break_time_remaining: self.break_time_remaining,
            custom_minutes: self.custom_minutes,
            sessions_completed: self.sessions_completed,
            display: format_time(self.display_seconds()),
            remaining_ratio: self.remaining_ratio(),
            theme: self.theme,
            sound_enabled: self.sound_enabled,
            vibration_enabled: self.vibration_enabled,
            at: Utc::now(),
        }
    }

    // ── Focus commands ───────────────────────────────────────────────

    /// Change the focus length. Input is expected to be validated already
    /// (see [`crate::format::parse_minutes`]).
    pub fn set_custom_minutes(&mut self, minutes: u32) -> Option<Event> {
        let secs = minutes_to_seconds(minutes);
        self.custom_minutes = minutes;
        self.initial_time = secs;
        self.time_remaining = secs;
        self.is_running = false;
        Some(Event::DurationChanged {
            custom_minutes: minutes,
            time_remaining: secs,
            at: Utc::now(),
        })
    }

    /// Start the active countdown. A zero countdown is not rejected; the
    /// next tick reports expiry.
    pub fn start_timer(&mut self) -> Option<Event> {
        if self.is_running {
            return None;
        }
        self.is_running = true;
        Some(self.started_event())
    }

    pub fn pause_timer(&mut self) -> Option<Event> {
        if !self.is_running {
            return None;
        }
        self.is_running = false;
        Some(self.paused_event())
    }

    pub fn toggle_timer(&mut self) -> Option<Event> {
        self.is_running = !self.is_running;
        if self.is_running {
            Some(self.started_event())
        } else {
            Some(self.paused_event())
        }
    }

    /// Refill the focus countdown and leave any break.
    pub fn reset_timer(&mut self) -> Option<Event> {
        self.time_remaining = minutes_to_seconds(self.custom_minutes);
        self.is_running = false;
        self.is_break = false;
        Some(Event::TimerReset {
            time_remaining: self.time_remaining,
            at: Utc::now(),
        })
    }

    /// One focus second. Returns `FocusExpired` on the call that observes
    /// zero.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.is_running || self.is_break {
            return None;
        }
        if self.time_remaining > 0 {
            self.time_remaining -= 1;
            Some(Event::Ticked {
                time_remaining: self.time_remaining,
                at: Utc::now(),
            })
        } else {
            self.is_running = false;
            tracing::debug!("focus countdown expired");
            Some(Event::FocusExpired { at: Utc::now() })
        }
    }

    // ── Break commands ───────────────────────────────────────────────

    /// Enter break mode with a full break countdown, already running.
    pub fn start_break(&mut self) -> Option<Event> {
        self.is_break = true;
        self.break_time_remaining = BREAK_DURATION_SECS;
        self.is_running = true;
        Some(Event::BreakStarted {
            break_time_remaining: self.break_time_remaining,
            at: Utc::now(),
        })
    }

    /// One break second. The call that observes zero also leaves break
    /// mode.
    pub fn tick_break(&mut self) -> Option<Event> {
        if !self.is_running || !self.is_break {
            return None;
        }
        if self.break_time_remaining > 0 {
            self.break_time_remaining -= 1;
            Some(Event::BreakTicked {
                break_time_remaining: self.break_time_remaining,
                at: Utc::now(),
            })
        } else {
            self.is_running = false;
            self.is_break = false;
            tracing::debug!("break countdown expired");
            Some(Event::BreakExpired { at: Utc::now() })
        }
    }

    pub fn skip_break(&mut self) -> Option<Event> {
        self.is_break = false;
        self.is_running = false;
        Some(Event::BreakSkipped {
            break_time_remaining: self.break_time_remaining,
            at: Utc::now(),
        })
    }

    // ── Sessions and settings ────────────────────────────────────────

    /// Count one finished focus session. Every call counts; the caller
    /// invokes it once per completed session.
    pub fn complete_session(&mut self) -> Option<Event> {
        self.sessions_completed = self.sessions_completed.saturating_add(1);
        Some(Event::SessionCompleted {
            sessions_completed: self.sessions_completed,
            at: Utc::now(),
        })
    }

    pub fn set_theme(&mut self, theme: Theme) -> Option<Event> {
        self.theme = theme;
        Some(self.settings_event())
    }

    pub fn toggle_sound(&mut self) -> Option<Event> {
        self.sound_enabled = !self.sound_enabled;
        Some(self.settings_event())
    }

    pub fn toggle_vibration(&mut self) -> Option<Event> {
        self.vibration_enabled = !self.vibration_enabled;
        Some(self.settings_event())
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn started_event(&self) -> Event {
        Event::TimerStarted {
            time_remaining: self.display_seconds(),
            is_break: self.is_break,
            at: Utc::now(),
        }
    }

    fn paused_event(&self) -> Event {
        Event::TimerPaused {
            time_remaining: self.display_seconds(),
            is_break: self.is_break,
            at: Utc::now(),
        }
    }

    fn settings_event(&self) -> Event {
        Event::SettingsChanged {
            theme: self.theme,
            sound_enabled: self.sound_enabled,
            vibration_enabled: self.vibration_enabled,
            at: Utc::now(),
        }
    }
}
