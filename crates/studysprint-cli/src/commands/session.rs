use clap::Subcommand;

use super::{open_store, print_outcome, CmdResult};

#[derive(Subcommand)]
pub enum SessionAction {
    /// Count one finished focus session (call once per session)
    Complete,
}

pub fn run(action: SessionAction) -> CmdResult {
    let mut store = open_store()?;

    match action {
        SessionAction::Complete => {
            let event = store.complete_session();
            print_outcome(&store, event)
        }
    }
}
