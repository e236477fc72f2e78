mod engine;
mod theme;

pub use engine::{Phase, TimerEngine, BREAK_DURATION_SECS, DEFAULT_CUSTOM_MINUTES};
pub use theme::{Palette, Theme};
