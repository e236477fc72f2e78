//! Task list commands for CLI.

use chrono::Local;
use clap::Subcommand;

use super::{open_store, print_outcome, CmdResult};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task (at most ten are kept; the oldest is dropped)
    Add {
        /// Task title
        title: String,
    },
    /// List tasks, oldest first
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Flip a task between done and not done
    Toggle {
        /// Task ID
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
    /// Remove every completed task
    ClearCompleted,
}

pub fn run(action: TaskAction) -> CmdResult {
    let mut store = open_store()?;

    match action {
        TaskAction::Add { title } => match store.add_task(&title) {
            Some(event) => print_outcome(&store, Some(event)),
            None => Err("task title is empty".into()),
        },
        TaskAction::List { json } => {
            let tasks = store.tasks().tasks();
            if json {
                println!("{}", serde_json::to_string_pretty(tasks)?);
            } else if tasks.is_empty() {
                println!("No tasks yet.");
            } else {
                for task in tasks {
                    let mark = if task.completed { "x" } else { " " };
                    let added = task.created_at.with_timezone(&Local).format("%b %d %H:%M");
                    println!("[{mark}] {}  {added}  {}", task.id, task.title);
                }
            }
            Ok(())
        }
        TaskAction::Toggle { id } => match store.toggle_task(&id) {
            Some(event) => print_outcome(&store, Some(event)),
            None => Err(format!("Task not found: {id}").into()),
        },
        TaskAction::Delete { id } => match store.delete_task(&id) {
            Some(event) => print_outcome(&store, Some(event)),
            None => Err(format!("Task not found: {id}").into()),
        },
        TaskAction::ClearCompleted => {
            let event = store.clear_completed_tasks();
            print_outcome(&store, event)
        }
    }
}
