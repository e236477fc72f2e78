use clap::Subcommand;
use studysprint_core::{parse_minutes, parse_preset, SprintStore};

use super::{block_on, open_store, print_outcome, run_clock, step_n, CmdResult};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Print current timer state as JSON
    Status,
    /// Start the countdown
    Start,
    /// Pause the countdown
    Pause,
    /// Start if paused, pause if running
    Toggle,
    /// Refill the focus countdown and leave any break
    Reset,
    /// Advance the focus countdown by one or more seconds
    Tick {
        /// Number of one-second ticks to apply
        #[arg(long, default_value = "1")]
        count: u32,
    },
    /// Set the focus length in minutes (1-120)
    Minutes {
        /// Minutes, as typed
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Set the focus length to a quick-pick duration
    Preset {
        /// One of 5, 15, 25 or 45
        minutes: String,
    },
    /// Run the focus countdown live, one tick per second
    Run {
        /// Count the session as completed when the countdown expires
        #[arg(long)]
        complete: bool,
    },
}

pub fn run(action: TimerAction) -> CmdResult {
    let mut store = open_store()?;

    match action {
        TimerAction::Status => print_outcome(&store, None),
        TimerAction::Start => {
            let event = store.start_timer();
            print_outcome(&store, event)
        }
        TimerAction::Pause => {
            let event = store.pause_timer();
            print_outcome(&store, event)
        }
        TimerAction::Toggle => {
            let event = store.toggle_timer();
            print_outcome(&store, event)
        }
        TimerAction::Reset => {
            let event = store.reset_timer();
            print_outcome(&store, event)
        }
        TimerAction::Tick { count } => step_n(&mut store, count, SprintStore::tick),
        TimerAction::Minutes { value } => {
            let minutes = parse_minutes(&value)?;
            let event = store.set_custom_minutes(minutes);
            print_outcome(&store, event)
        }
        TimerAction::Preset { minutes } => {
            let minutes = parse_preset(&minutes)?;
            let event = store.set_custom_minutes(minutes);
            print_outcome(&store, event)
        }
        TimerAction::Run { complete } => {
            if store.timer().is_break() {
                return Err("a break is active; use `studysprint break run` or `break skip`".into());
            }
            store.start_timer();
            let expired = block_on(run_clock(&mut store, SprintStore::tick))??;
            match expired {
                Some(event) => {
                    println!("{}", serde_json::to_string_pretty(&event)?);
                    if complete {
                        let done = store.complete_session();
                        print_outcome(&store, done)?;
                    }
                    Ok(())
                }
                None => print_outcome(&store, None),
            }
        }
    }
}
