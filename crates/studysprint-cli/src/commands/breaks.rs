use clap::Subcommand;
use studysprint_core::SprintStore;

use super::{block_on, open_store, print_outcome, run_clock, step_n, CmdResult};

#[derive(Subcommand)]
pub enum BreakAction {
    /// Start a fresh five-minute break
    Start,
    /// Advance the break countdown by one or more seconds
    Tick {
        /// Number of one-second ticks to apply
        #[arg(long, default_value = "1")]
        count: u32,
    },
    /// Abandon the break
    Skip,
    /// Run the break countdown live, starting a break if none is active
    Run,
}

pub fn run(action: BreakAction) -> CmdResult {
    let mut store = open_store()?;

    match action {
        BreakAction::Start => {
            let event = store.start_break();
            print_outcome(&store, event)
        }
        BreakAction::Tick { count } => step_n(&mut store, count, SprintStore::tick_break),
        BreakAction::Skip => {
            let event = store.skip_break();
            print_outcome(&store, event)
        }
        BreakAction::Run => {
            if store.timer().is_break() {
                store.start_timer();
            } else {
                store.start_break();
            }
            let expired = block_on(run_clock(&mut store, SprintStore::tick_break))??;
            print_outcome(&store, expired)
        }
    }
}
