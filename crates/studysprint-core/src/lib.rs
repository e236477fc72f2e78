//! # Study Sprint Core Library
//!
//! Core logic for the Study Sprint focus timer: a focus/break countdown
//! state machine, a short task list, session statistics, and the storage
//! that keeps them across restarts. Front ends (the `studysprint` CLI)
//! read state and dispatch operations; they own the one-second clock.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a tick-driven state machine; the caller invokes
//!   `tick()` / `tick_break()` once per second
//! - **Tasks**: at most ten tasks, oldest dropped first
//! - **Notes**: one short block of study notes
//! - **Storage**: SQLite key-value records and TOML configuration
//! - **Store**: owned container that loads records on open and writes them
//!   back after every mutation
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: Core timer state machine
//! - [`TaskList`]: Task collection
//! - [`SprintStore`]: State container over a [`Persistence`] backend
//! - [`Database`]: SQLite persistence
//! - [`Config`]: Application configuration management

pub mod error;
pub mod events;
pub mod format;
pub mod notes;
pub mod stats;
pub mod storage;
pub mod store;
pub mod task;
pub mod timer;

pub use error::{ConfigError, CoreError, DatabaseError, ValidationError};
pub use events::Event;
pub use format::{
    format_time, minutes_to_seconds, parse_minutes, parse_preset, validate_minutes,
};
pub use notes::Notes;
pub use stats::SessionStats;
pub use storage::{Config, Database};
pub use store::{MemoryBackend, Persistence, SprintStore};
pub use task::{Task, TaskList};
pub use timer::{Palette, Phase, Theme, TimerEngine};
