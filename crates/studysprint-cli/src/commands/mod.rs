pub mod breaks;
pub mod config;
pub mod notes;
pub mod session;
pub mod settings;
pub mod stats;
pub mod task;
pub mod timer;

use std::io::Write;
use std::time::Duration;

use studysprint_core::{format_time, Config, Database, Event, SprintStore};

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Open the persisted state, seeding a fresh timer record from config.
pub fn open_store() -> Result<SprintStore<Database>, Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let db = Database::open()?;
    Ok(SprintStore::open(db, config.initial_timer()))
}

/// Print the event a command produced, or the current snapshot if the
/// command changed nothing.
pub fn print_outcome(store: &SprintStore<Database>, event: Option<Event>) -> CmdResult {
    let event = event.unwrap_or_else(|| store.snapshot());
    println!("{}", serde_json::to_string_pretty(&event)?);
    Ok(())
}

/// Apply `step` up to `count` times, printing each event. Stops early when
/// a step has no effect or a countdown expires.
pub fn step_n(
    store: &mut SprintStore<Database>,
    count: u32,
    step: fn(&mut SprintStore<Database>) -> Option<Event>,
) -> CmdResult {
    let mut last = None;
    for _ in 0..count {
        match step(store) {
            Some(event) => {
                let expired = event.is_expiry();
                last = Some(event);
                if expired {
                    break;
                }
            }
            None => break,
        }
    }
    print_outcome(store, last)
}

/// Drive `step` once per second until it stops producing events or a
/// countdown expires. Ctrl-C pauses the countdown and returns.
pub async fn run_clock(
    store: &mut SprintStore<Database>,
    step: fn(&mut SprintStore<Database>) -> Option<Event>,
) -> Result<Option<Event>, Box<dyn std::error::Error>> {
    let mut interval = tokio::time::interval(Duration::from_secs(1));
    interval.tick().await;
    render_clock(store)?;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                match step(store) {
                    Some(event) if event.is_expiry() => {
                        println!();
                        return Ok(Some(event));
                    }
                    Some(_) => render_clock(store)?,
                    None => {
                        println!();
                        return Ok(None);
                    }
                }
            }
            _ = &mut ctrl_c => {
                store.pause_timer();
                println!();
                tracing::info!("interrupted, countdown paused");
                return Ok(None);
            }
        }
    }
}

fn render_clock(store: &SprintStore<Database>) -> CmdResult {
    let label = if store.timer().is_break() { "break" } else { "focus" };
    let mut out = std::io::stdout();
    write!(out, "\r{label} {}", format_time(store.timer().display_seconds()))?;
    out.flush()?;
    Ok(())
}

pub fn block_on<F: std::future::Future>(fut: F) -> Result<F::Output, std::io::Error> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(rt.block_on(fut))
}
