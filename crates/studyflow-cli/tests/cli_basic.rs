//! Basic CLI E2E tests.
//!
//! Each test runs the built binary against its own temporary config
//! directory and checks stdout, stderr and the exit code.

use std::process::Command;

use tempfile::TempDir;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(home: &TempDir, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_studyflow"))
        .args(args)
        .env("STUDYFLOW_HOME", home.path())
        .env_remove("STUDYFLOW_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_cli_success(home: &TempDir, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(home, args);
    assert_eq!(code, 0, "CLI command failed: {args:?}\n{stderr}");
    stdout
}

fn home() -> TempDir {
    tempfile::tempdir().expect("tempdir")
}

#[test]
fn test_simulate_runs_to_completion() {
    let home = home();
    let out = run_cli_success(&home, &["timer", "simulate", "--seconds", "5", "--ops", "start,tick*5"]);
    let events: serde_json::Value = serde_json::from_str(&out).unwrap();
    let events = events.as_array().unwrap();

    assert_eq!(events[0]["type"], "timer_started");
    assert_eq!(events[5]["type"], "timer_completed");
    let snapshot = events.last().unwrap();
    assert_eq!(snapshot["type"], "state_snapshot");
    assert_eq!(snapshot["remaining_secs"], 0);
    assert_eq!(snapshot["running"], false);
    assert_eq!(snapshot["progress"], 1.0);
}

#[test]
fn test_simulate_pause_floors_at_zero() {
    let home = home();
    let out = run_cli_success(
        &home,
        &["timer", "simulate", "--seconds", "10", "--ops", "start,tick*3,pause,tick*5,start,tick*7"],
    );
    let events: serde_json::Value = serde_json::from_str(&out).unwrap();
    let snapshot = events.as_array().unwrap().last().unwrap().clone();
    assert_eq!(snapshot["remaining_secs"], 0);
    assert_eq!(snapshot["label"], "00:00");
}

#[test]
fn test_simulate_rejects_zero_duration() {
    let home = home();
    let (_, stderr, code) = run_cli(&home, &["timer", "simulate", "--seconds", "0"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("invalid timer duration"), "{stderr}");
}

#[test]
fn test_timer_run_short_countdown() {
    let home = home();
    run_cli_success(&home, &["config", "set", "timer.tick_interval_ms", "10"]);
    let out = run_cli_success(&home, &["timer", "run", "--seconds", "3", "--json"]);
    let types: Vec<String> = out
        .lines()
        .map(|l| serde_json::from_str::<serde_json::Value>(l).unwrap()["type"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(types, ["timer_started", "timer_ticked", "timer_ticked", "timer_completed"]);
}

#[test]
fn test_simulate_huge_tick_count_stops_at_completion() {
    let home = home();
    let out = run_cli_success(
        &home,
        &["timer", "simulate", "--seconds", "3", "--ops", "start,tick*18446744073709551615"],
    );
    let events: serde_json::Value = serde_json::from_str(&out).unwrap();
    let events = events.as_array().unwrap();
    assert_eq!(events.len(), 5);
    assert_eq!(events[3]["type"], "timer_completed");
    assert_eq!(events[4]["remaining_secs"], 0);
}

#[test]
fn test_dashboard_renders_sections() {
    let home = home();
    let out = run_cli_success(&home, &["dashboard", "--date", "2026-10-19"]);
    assert!(out.contains("October 2026"));
    assert!(out.contains("Focus Timer"));
    assert!(out.contains("25:00"));
    assert!(out.contains("Calculus: Integration by Parts"));
    assert!(out.contains("progress [####......]   40%"));
    assert!(out.contains("Upcoming Sessions"));
    assert!(out.contains("Recommendations"));
}

#[test]
fn test_dashboard_dark_flag() {
    let home = home();
    let out = run_cli_success(&home, &["dashboard", "--date", "2026-10-19", "--dark"]);
    assert!(out.contains('░'));
}

#[test]
fn test_sessions_list_json() {
    let home = home();
    let out = run_cli_success(&home, &["sessions", "list", "--date", "2026-10-19", "--json"]);
    let sessions: serde_json::Value = serde_json::from_str(&out).unwrap();
    let sessions = sessions.as_array().unwrap();
    assert_eq!(sessions.len(), 3);
    assert_eq!(sessions[0]["start"], "09:00:00");
}

#[test]
fn test_sessions_create_validates() {
    let home = home();
    let out = run_cli_success(
        &home,
        &[
            "sessions", "create", "--title", "Mock exam", "--subject", "physics", "--date", "2026-10-19",
            "--start", "13:15", "--duration", "45", "--difficulty", "4", "--notes", "past paper 2",
        ],
    );
    assert!(out.contains("13:15-14:00  Mock exam"));
    assert!(out.contains("difficulty ####. 4/5"));
    assert!(out.contains("note: past paper 2"));

    for level in ["hard", "6"] {
        let (_, _, code) = run_cli(
            &home,
            &["sessions", "create", "--title", "X", "--subject", "math", "--start", "10:00", "--duration", "30", "--difficulty", level],
        );
        assert_ne!(code, 0, "difficulty {level} accepted");
    }

    let (_, stderr, code) = run_cli(
        &home,
        &["sessions", "create", "--title", "Stars", "--subject", "astrology", "--start", "10:00", "--duration", "30"],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("Unknown subject: astrology"), "{stderr}");
}

#[test]
fn test_notifications_read() {
    let home = home();
    let out = run_cli_success(&home, &["notifications", "--read", "n1", "--read", "n3"]);
    assert!(out.starts_with("Notifications (1 unread)"));

    let (_, _, code) = run_cli(&home, &["notifications", "--read", "n9"]);
    assert_eq!(code, 1);
}

#[test]
fn test_calendar_month() {
    let home = home();
    let out = run_cli_success(&home, &["calendar", "--month", "2021-02"]);
    assert!(out.starts_with("February 2021\n"));
    let (_, _, code) = run_cli(&home, &["calendar", "--month", "2021-13"]);
    assert_eq!(code, 1);
}

#[test]
fn test_last_calendar_month_and_day() {
    let home = home();
    let out = run_cli_success(&home, &["calendar", "--month", "262142-12"]);
    assert!(out.contains(" 31"));
    let out = run_cli_success(&home, &["dashboard", "--date", "262142-12-31"]);
    assert!(out.contains("Upcoming Sessions"));
    assert!(out.contains("Nothing scheduled."));
}

#[test]
fn test_config_set_get_reset() {
    let home = home();
    assert_eq!(run_cli_success(&home, &["config", "get", "timer.focus_secs"]).trim(), "1500");
    run_cli_success(&home, &["config", "set", "timer.focus_secs", "600"]);
    assert_eq!(run_cli_success(&home, &["config", "get", "timer.focus_secs"]).trim(), "600");
    assert!(home.path().join("config.toml").exists());

    let (_, _, code) = run_cli(&home, &["config", "set", "timer.focus_secs", "0"]);
    assert_eq!(code, 1);
    let (_, _, code) = run_cli(&home, &["config", "get", "nope"]);
    assert_eq!(code, 1);

    assert_eq!(run_cli_success(&home, &["config", "get", "timer.break_secs"]).trim(), "300");
    run_cli_success(&home, &["config", "set", "timer.break_secs", "600"]);
    assert_eq!(run_cli_success(&home, &["config", "get", "timer.break_secs"]).trim(), "600");

    run_cli_success(&home, &["config", "reset"]);
    assert_eq!(run_cli_success(&home, &["config", "get", "timer.focus_secs"]).trim(), "1500");
}

#[test]
fn test_progress_and_recommendations() {
    let home = home();
    assert!(run_cli_success(&home, &["progress"]).contains("Mathematics"));
    assert!(run_cli_success(&home, &["recommendations"]).contains("active recall"));
}
