use clap::Subcommand;
use studysprint_core::notes::MAX_NOTES_LEN;

use super::{open_store, CmdResult};

#[derive(Subcommand)]
pub enum NotesAction {
    /// Print the saved study notes
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Replace the study notes (longer text is cut at 200 characters)
    Set {
        /// Note text
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Remove the study notes
    Clear,
}

pub fn run(action: NotesAction) -> CmdResult {
    let mut store = open_store()?;

    let event = match action {
        NotesAction::Show { json } => {
            let text = store.notes().text();
            if json {
                let value = serde_json::json!({
                    "notes": text,
                    "length": text.chars().count(),
                    "max_length": MAX_NOTES_LEN,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else if text.is_empty() {
                println!("No notes yet. What are you focusing on this session?");
            } else {
                println!("{text}");
            }
            return Ok(());
        }
        NotesAction::Set { text } => store.set_notes(&text),
        NotesAction::Clear => store.set_notes(""),
    };

    match event {
        Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
        None => tracing::info!("notes unchanged"),
    }
    Ok(())
}
