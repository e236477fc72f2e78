//! Owned state container for the timer record, the task list and the
//! study notes.
//!
//! [`SprintStore`] is created once, loads every record from a
//! [`Persistence`] backend, and writes the affected record back after every
//! mutation. Write failures are logged and otherwise ignored: the
//! in-memory state stays authoritative for the life of the process.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{CoreError, Result};
use crate::events::Event;
use crate::notes::Notes;
use crate::stats::SessionStats;
use crate::task::TaskList;
use crate::timer::{Theme, TimerEngine};

/// Storage key of the timer/settings record.
pub const TIMER_KEY: &str = "timer_state";
/// Storage key of the task list record.
pub const TASKS_KEY: &str = "tasks";
/// Storage key of the study notes record.
pub const NOTES_KEY: &str = "task_notes";

/// Durable home for the JSON records.
pub trait Persistence {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Process-local backend, used by tests and throwaway sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    records: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend whose writes always fail, for exercising write-failure paths.
    pub fn failing() -> Self {
        Self {
            records: HashMap::new(),
            fail_writes: true,
        }
    }

    pub fn with_record(mut self, key: &str, value: &str) -> Self {
        self.records.insert(key.to_string(), value.to_string());
        self
    }

    pub fn record(&self, key: &str) -> Option<&str> {
        self.records.get(key).map(String::as_str)
    }
}

impl Persistence for MemoryBackend {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.records.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(CoreError::Custom(format!("write refused for '{key}'")));
        }
        self.records.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Timer state, task list, notes and their backend, owned together.
pub struct SprintStore<P: Persistence> {
    timer: TimerEngine,
    tasks: TaskList,
    notes: Notes,
    backend: P,
}

impl<P: Persistence> SprintStore<P> {
    /// Load every record, using `initial_timer` when no usable timer record
    /// exists and empty tasks/notes when theirs are missing.
    pub fn open(backend: P, initial_timer: TimerEngine) -> Self {
        let timer = load_record(&backend, TIMER_KEY).unwrap_or(initial_timer);
        let tasks = load_record(&backend, TASKS_KEY).unwrap_or_default();
        let notes = load_record(&backend, NOTES_KEY).unwrap_or_default();
        Self {
            timer,
            tasks,
            notes,
            backend,
        }
    }

    pub fn timer(&self) -> &TimerEngine {
        &self.timer
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn notes(&self) -> &Notes {
        &self.notes
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats::from_engine(&self.timer)
    }

    pub fn snapshot(&self) -> Event {
        self.timer.snapshot()
    }

    pub fn backend(&self) -> &P {
        &self.backend
    }

    pub fn into_backend(self) -> P {
        self.backend
    }

    // ── Timer ────────────────────────────────────────────────────────

    pub fn set_custom_minutes(&mut self, minutes: u32) -> Option<Event> {
        self.with_timer(|t| t.set_custom_minutes(minutes))
    }

    pub fn start_timer(&mut self) -> Option<Event> {
        self.with_timer(TimerEngine::start_timer)
    }

    pub fn pause_timer(&mut self) -> Option<Event> {
        self.with_timer(TimerEngine::pause_timer)
    }

    pub fn reset_timer(&mut self) -> Option<Event> {
        self.with_timer(TimerEngine::reset_timer)
    }

    pub fn tick(&mut self) -> Option<Event> {
        self.with_timer(TimerEngine::tick)
    }

    pub fn toggle_timer(&mut self) -> Option<Event> {
        self.with_timer(TimerEngine::toggle_timer)
    }

    pub fn start_break(&mut self) -> Option<Event> {
        self.with_timer(TimerEngine::start_break)
    }

    pub fn tick_break(&mut self) -> Option<Event> {
        self.with_timer(TimerEngine::tick_break)
    }

    pub fn skip_break(&mut self) -> Option<Event> {
        self.with_timer(TimerEngine::skip_break)
    }

    pub fn complete_session(&mut self) -> Option<Event> {
        self.with_timer(TimerEngine::complete_session)
    }

    pub fn set_theme(&mut self, theme: Theme) -> Option<Event> {
        self.with_timer(|t| t.set_theme(theme))
    }

    pub fn toggle_sound(&mut self) -> Option<Event> {
        self.with_timer(TimerEngine::toggle_sound)
    }

    pub fn toggle_vibration(&mut self) -> Option<Event> {
        self.with_timer(TimerEngine::toggle_vibration)
    }

    // ── Tasks ────────────────────────────────────────────────────────

    pub fn add_task(&mut self, title: &str) -> Option<Event> {
        self.with_tasks(|l| l.add_task(title))
    }

    pub fn toggle_task(&mut self, id: &str) -> Option<Event> {
        self.with_tasks(|l| l.toggle_task(id))
    }

    pub fn delete_task(&mut self, id: &str) -> Option<Event> {
        self.with_tasks(|l| l.delete_task(id))
    }

    pub fn clear_completed_tasks(&mut self) -> Option<Event> {
        self.with_tasks(TaskList::clear_completed_tasks)
    }

    // ── Notes ────────────────────────────────────────────────────────

    pub fn set_notes(&mut self, text: &str) -> Option<Event> {
        let event = self.notes.set_notes(text);
        if event.is_some() {
            persist(&mut self.backend, NOTES_KEY, &self.notes);
        }
        event
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn with_timer(&mut self, op: impl FnOnce(&mut TimerEngine) -> Option<Event>) -> Option<Event> {
        let event = op(&mut self.timer);
        if event.is_some() {
            persist(&mut self.backend, TIMER_KEY, &self.timer);
        }
        event
    }

    fn with_tasks(&mut self, op: impl FnOnce(&mut TaskList) -> Option<Event>) -> Option<Event> {
        let event = op(&mut self.tasks);
        if event.is_some() {
            persist(&mut self.backend, TASKS_KEY, &self.tasks);
        }
        event
    }
}

fn load_record<T: DeserializeOwned>(backend: &impl Persistence, key: &str) -> Option<T> {
    let raw = match backend.load(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read record, using defaults");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "unreadable record, using defaults");
            None
        }
    }
}

fn persist<T: Serialize>(backend: &mut impl Persistence, key: &str, value: &T) {
    let result = serde_json::to_string(value)
        .map_err(CoreError::from)
        .and_then(|json| backend.save(key, &json));
    if let Err(e) = result {
        tracing::warn!(key, error = %e, "failed to persist record");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::Phase;

    fn fresh() -> SprintStore<MemoryBackend> {
        SprintStore::open(MemoryBackend::new(), TimerEngine::new())
    }

    #[test]
    fn empty_backend_uses_initial_timer() {
        let store = SprintStore::open(
            MemoryBackend::new(),
            TimerEngine::with_settings(40, Theme::Dark, true, false),
        );
        assert_eq!(store.timer().time_remaining(), 2400);
        assert_eq!(store.timer().theme(), Theme::Dark);
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn mutations_are_written_through() {
        let mut store = fresh();
        store.set_custom_minutes(25);
        store.add_task("outline essay");

        let timer_json = store.backend().record(TIMER_KEY).unwrap();
        assert!(timer_json.contains("\"timeRemaining\":1500"));
        let tasks_json = store.backend().record(TASKS_KEY).unwrap();
        assert!(tasks_json.contains("outline essay"));
    }

    #[test]
    fn no_op_commands_do_not_write() {
        let mut store = fresh();
        assert!(store.pause_timer().is_none());
        assert!(store.tick().is_none());
        assert!(store.toggle_task("missing").is_none());
        assert!(store.backend().record(TIMER_KEY).is_none());
        assert!(store.backend().record(TASKS_KEY).is_none());
    }

    #[test]
    fn reopen_restores_both_records() {
        let mut store = fresh();
        store.set_custom_minutes(30);
        store.start_timer();
        store.tick();
        store.complete_session();
        store.set_theme(Theme::Sunset);
        store.add_task("a");
        store.add_task("b");

        let backend = store.into_backend();
        let store = SprintStore::open(backend, TimerEngine::new());
        assert_eq!(store.timer().custom_minutes(), 30);
        assert_eq!(store.timer().time_remaining(), 1799);
        assert!(store.timer().is_running());
        assert_eq!(store.timer().sessions_completed(), 1);
        assert_eq!(store.timer().theme(), Theme::Sunset);
        assert_eq!(store.tasks().len(), 2);
    }

    #[test]
    fn notes_are_truncated_and_survive_reopen() {
        let mut store = fresh();
        assert!(store.notes().is_empty());
        let long = "x".repeat(250);
        assert!(store.set_notes(&long).is_some());
        assert_eq!(store.notes().text().len(), 200);
        assert!(store.set_notes(&long).is_none());

        let backend = store.into_backend();
        assert!(backend.record(NOTES_KEY).is_some());
        let store = SprintStore::open(backend, TimerEngine::new());
        assert_eq!(store.notes().text(), "x".repeat(200));
    }

    #[test]
    fn corrupt_records_fall_back_to_defaults() {
        let backend = MemoryBackend::new()
            .with_record(TIMER_KEY, "not json")
            .with_record(TASKS_KEY, "{\"oops\": true}")
            .with_record(NOTES_KEY, "[1, 2]");
        let store = SprintStore::open(backend, TimerEngine::new());
        assert_eq!(store.timer(), &TimerEngine::new());
        assert!(store.tasks().is_empty());
        assert!(store.notes().is_empty());
    }

    #[test]
    fn write_failures_leave_memory_authoritative() {
        let mut store = SprintStore::open(MemoryBackend::failing(), TimerEngine::new());
        store.set_custom_minutes(1);
        store.start_timer();
        for _ in 0..60 {
            store.tick();
        }
        assert!(store.tick().is_some_and(|e| e.is_expiry()));
        assert_eq!(store.timer().phase(), Phase::FocusExpired);
        store.complete_session();
        store.add_task("still here");
        assert_eq!(store.timer().sessions_completed(), 1);
        assert_eq!(store.tasks().len(), 1);
        assert!(store.backend().record(TIMER_KEY).is_none());
    }

    #[test]
    fn stats_follow_timer_record() {
        let mut store = fresh();
        store.set_custom_minutes(20);
        store.complete_session();
        store.complete_session();
        assert_eq!(store.stats().total_focus_minutes, 40);
    }
}
