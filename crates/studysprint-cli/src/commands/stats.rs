use super::{open_store, CmdResult};

pub fn run(json: bool) -> CmdResult {
    let store = open_store()?;
    let stats = store.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Sessions:          {}", stats.sessions_completed);
    println!("Total focus time:  {}", stats.total_focus_long);
    println!("Average session:   {} minutes", stats.average_session_minutes);
    if stats.is_empty() {
        println!("Complete your first session to see your stats!");
    }
    Ok(())
}
