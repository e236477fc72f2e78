//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary against a throwaway data directory and
//! verify outputs.

use std::path::Path;
use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(data_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_studysprint"))
        .args(args)
        .env("STUDYSPRINT_DATA_DIR", data_dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_json(data_dir: &Path, args: &[&str]) -> serde_json::Value {
    let (stdout, stderr, code) = run_cli(data_dir, args);
    assert_eq!(code, 0, "{args:?} failed: {stderr}");
    serde_json::from_str(&stdout).expect("Failed to parse JSON output")
}

#[test]
fn test_timer_status_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let snap = run_json(dir.path(), &["timer", "status"]);
    assert_eq!(snap["type"], "StateSnapshot");
    assert_eq!(snap["time_remaining"], 900);
    assert_eq!(snap["display"], "15:00");
    assert_eq!(snap["phase"], "idle_focus");
}

#[test]
fn test_timer_minutes_rejects_invalid_input() {
    let dir = tempfile::tempdir().unwrap();
    for raw in ["0", "121", "abc", "-5"] {
        let (_, stderr, code) = run_cli(dir.path(), &["timer", "minutes", raw]);
        assert_ne!(code, 0, "minutes {raw} unexpectedly succeeded");
        assert!(stderr.contains("Invalid duration"), "stderr was: {stderr}");
    }
    let snap = run_json(dir.path(), &["timer", "status"]);
    assert_eq!(snap["custom_minutes"], 15);
}

#[test]
fn test_timer_minutes_persists() {
    let dir = tempfile::tempdir().unwrap();
    let ev = run_json(dir.path(), &["timer", "minutes", "25"]);
    assert_eq!(ev["type"], "DurationChanged");
    let snap = run_json(dir.path(), &["timer", "status"]);
    assert_eq!(snap["time_remaining"], 1500);
    assert_eq!(snap["initial_time"], 1500);
    assert_eq!(snap["is_running"], false);
}

#[test]
fn test_timer_tick_to_expiry() {
    let dir = tempfile::tempdir().unwrap();
    run_json(dir.path(), &["timer", "minutes", "1"]);
    run_json(dir.path(), &["timer", "start"]);
    let ev = run_json(dir.path(), &["timer", "tick", "--count", "60"]);
    assert_eq!(ev["type"], "Ticked");
    assert_eq!(ev["time_remaining"], 0);

    let ev = run_json(dir.path(), &["timer", "tick"]);
    assert_eq!(ev["type"], "FocusExpired");
    let snap = run_json(dir.path(), &["timer", "status"]);
    assert_eq!(snap["phase"], "focus_expired");
}

#[test]
fn test_timer_run_complete_records_one_session() {
    let dir = tempfile::tempdir().unwrap();
    run_json(dir.path(), &["timer", "minutes", "1"]);
    run_json(dir.path(), &["timer", "start"]);
    let ev = run_json(dir.path(), &["timer", "tick", "--count", "58"]);
    assert_eq!(ev["time_remaining"], 2);

    let (stdout, stderr, code) = run_cli(dir.path(), &["timer", "run", "--complete"]);
    assert_eq!(code, 0, "timer run failed: {stderr}");
    assert!(stdout.contains("focus 00:02"));
    assert!(stdout.contains("focus 00:00"));
    assert!(stdout.contains("\"type\": \"FocusExpired\""));
    assert_eq!(stdout.matches("\"type\": \"SessionCompleted\"").count(), 1);

    let snap = run_json(dir.path(), &["timer", "status"]);
    assert_eq!(snap["sessions_completed"], 1);
    assert_eq!(snap["phase"], "focus_expired");
    assert_eq!(snap["is_running"], false);
}

#[test]
fn test_timer_run_refused_during_break() {
    let dir = tempfile::tempdir().unwrap();
    run_json(dir.path(), &["break", "start"]);
    let (_, stderr, code) = run_cli(dir.path(), &["timer", "run"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("a break is active"), "stderr was: {stderr}");

    let snap = run_json(dir.path(), &["timer", "status"]);
    assert_eq!(snap["is_break"], true);
    assert_eq!(snap["break_time_remaining"], 300);
}

#[test]
fn test_break_run_until_expired() {
    let dir = tempfile::tempdir().unwrap();
    run_json(dir.path(), &["break", "start"]);
    let ev = run_json(dir.path(), &["break", "tick", "--count", "298"]);
    assert_eq!(ev["break_time_remaining"], 2);

    let (stdout, stderr, code) = run_cli(dir.path(), &["break", "run"]);
    assert_eq!(code, 0, "break run failed: {stderr}");
    assert!(stdout.contains("break 00:01"));
    assert!(stdout.contains("\"type\": \"BreakExpired\""));

    let snap = run_json(dir.path(), &["timer", "status"]);
    assert_eq!(snap["is_break"], false);
    assert_eq!(snap["is_running"], false);
}

#[test]
fn test_timer_preset() {
    let dir = tempfile::tempdir().unwrap();
    let ev = run_json(dir.path(), &["timer", "preset", "25"]);
    assert_eq!(ev["type"], "DurationChanged");
    assert_eq!(ev["time_remaining"], 1500);

    let (_, stderr, code) = run_cli(dir.path(), &["timer", "preset", "30"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Unknown preset"), "stderr was: {stderr}");
    let snap = run_json(dir.path(), &["timer", "status"]);
    assert_eq!(snap["custom_minutes"], 25);
}

#[test]
fn test_break_and_session_flow() {
    let dir = tempfile::tempdir().unwrap();
    let ev = run_json(dir.path(), &["break", "start"]);
    assert_eq!(ev["break_time_remaining"], 300);
    let ev = run_json(dir.path(), &["break", "tick", "--count", "3"]);
    assert_eq!(ev["break_time_remaining"], 297);
    run_json(dir.path(), &["break", "skip"]);
    let snap = run_json(dir.path(), &["timer", "status"]);
    assert_eq!(snap["is_break"], false);
    assert_eq!(snap["is_running"], false);

    run_json(dir.path(), &["session", "complete"]);
    let ev = run_json(dir.path(), &["session", "complete"]);
    assert_eq!(ev["sessions_completed"], 2);

    let stats = run_json(dir.path(), &["stats", "--json"]);
    assert_eq!(stats["total_focus_minutes"], 30);
}

#[test]
fn test_task_cap_and_clear() {
    let dir = tempfile::tempdir().unwrap();
    for i in 1..=11 {
        run_json(dir.path(), &["task", "add", &format!("task {i}")]);
    }
    let tasks = run_json(dir.path(), &["task", "list", "--json"]);
    let tasks = tasks.as_array().unwrap();
    assert_eq!(tasks.len(), 10);
    assert_eq!(tasks[0]["title"], "task 2");
    assert_eq!(tasks[9]["title"], "task 11");

    let id = tasks[0]["id"].as_str().unwrap().to_string();
    run_json(dir.path(), &["task", "toggle", &id]);
    let ev = run_json(dir.path(), &["task", "clear-completed"]);
    assert_eq!(ev["removed"], 1);

    let (_, _, code) = run_cli(dir.path(), &["task", "delete", "nope"]);
    assert_ne!(code, 0);
    let (_, _, code) = run_cli(dir.path(), &["task", "add", "   "]);
    assert_ne!(code, 0);
}

#[test]
fn test_settings_theme() {
    let dir = tempfile::tempdir().unwrap();
    let ev = run_json(dir.path(), &["settings", "theme", "sunset"]);
    assert_eq!(ev["theme"], "sunset");
    let palette = run_json(dir.path(), &["settings", "palette"]);
    assert_eq!(palette["primary"], "#FF7E5F");

    let (_, stderr, code) = run_cli(dir.path(), &["settings", "theme", "green"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Unknown theme"));
}

#[test]
fn test_config_default_minutes_seed_fresh_state() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["config", "set", "timer.default_minutes", "30"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("ok"));

    let (stdout, _, code) = run_cli(dir.path(), &["config", "get", "timer.default_minutes"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "30");

    let snap = run_json(dir.path(), &["timer", "status"]);
    assert_eq!(snap["time_remaining"], 1800);

    let (_, _, code) = run_cli(dir.path(), &["config", "get", "timer.nope"]);
    assert_ne!(code, 0);
}

#[test]
fn test_notes_set_show_and_clear() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["notes", "show"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("No notes yet"));

    let ev = run_json(dir.path(), &["notes", "set", "integrals, then flashcards"]);
    assert_eq!(ev["type"], "NotesUpdated");
    assert_eq!(ev["length"], 26);

    let (stdout, _, code) = run_cli(dir.path(), &["notes", "show"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "integrals, then flashcards");

    let long = "n".repeat(250);
    run_json(dir.path(), &["notes", "set", &long]);
    let shown = run_json(dir.path(), &["notes", "show", "--json"]);
    assert_eq!(shown["length"], 200);
    assert_eq!(shown["notes"], "n".repeat(200));

    run_json(dir.path(), &["notes", "clear"]);
    let shown = run_json(dir.path(), &["notes", "show", "--json"]);
    assert_eq!(shown["notes"], "");
}

#[test]
fn test_completions() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["completions", "bash"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("studysprint"));
}

#[test]
fn test_completions_leave_no_files() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("fresh");
    let (_, _, code) = run_cli(&data, &["completions", "zsh"]);
    assert_eq!(code, 0);
    assert!(!data.exists());
}
