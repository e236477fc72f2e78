//! Short task list kept next to the timer.
//!
//! The list holds at most [`MAX_TASKS`] entries in creation order. Adding
//! beyond the cap drops the oldest entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::events::Event;

/// Maximum number of tasks retained.
pub const MAX_TASKS: usize = 10;

/// Maximum title length in characters.
pub const MAX_TITLE_LEN: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Creation-order token: creation time in epoch milliseconds, bumped
    /// when two tasks land in the same millisecond.
    pub id: String,
    pub title: String,
    pub completed: bool,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

/// Ordered task collection, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn pending_count(&self) -> usize {
        self.len() - self.completed_count()
    }

    /// Append a task. Blank titles are ignored.
    pub fn add_task(&mut self, title: &str) -> Option<Event> {
        self.add_task_at(title, Utc::now())
    }

    pub fn add_task_at(&mut self, title: &str, now: DateTime<Utc>) -> Option<Event> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return None;
        }
        let title: String = trimmed.chars().take(MAX_TITLE_LEN).collect();
        let title = title.trim_end().to_string();
        let id = self.next_id(now);

        self.tasks.push(Task {
            id: id.clone(),
            title: title.clone(),
            completed: false,
            created_at: now,
        });
        if self.tasks.len() > MAX_TASKS {
            let overflow = self.tasks.len() - MAX_TASKS;
            self.tasks.drain(..overflow);
        }

        Some(Event::TaskAdded {
            id,
            title,
            at: now,
        })
    }

    pub fn toggle_task(&mut self, id: &str) -> Option<Event> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = !task.completed;
        Some(Event::TaskToggled {
            id: task.id.clone(),
            completed: task.completed,
            at: Utc::now(),
        })
    }

    pub fn delete_task(&mut self, id: &str) -> Option<Event> {
        let pos = self.tasks.iter().position(|t| t.id == id)?;
        let task = self.tasks.remove(pos);
        Some(Event::TaskDeleted {
            id: task.id,
            at: Utc::now(),
        })
    }

    /// Drop every completed task, keeping the rest in order.
    pub fn clear_completed_tasks(&mut self) -> Option<Event> {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        Some(Event::CompletedTasksCleared {
            removed: before - self.tasks.len(),
            at: Utc::now(),
        })
    }

    fn next_id(&self, now: DateTime<Utc>) -> String {
        let stamp = now.timestamp_millis();
        let newest = self
            .tasks
            .iter()
            .filter_map(|t| t.id.parse::<i64>().ok())
            .max();
        match newest {
            Some(n) if n >= stamp => (n + 1).to_string(),
            _ => stamp.to_string(),
        }
    }
}
