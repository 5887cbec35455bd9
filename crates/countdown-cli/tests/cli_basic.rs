//! Basic CLI E2E tests.
//!
//! Each test runs the built binary against its own temporary data directory.

use std::process::Command;

use tempfile::TempDir;

const FAR_FUTURE: &str = "2099-01-01T00:00:00Z";

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(data_dir: &TempDir, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_countdown"))
        .args(args)
        .env("COUNTDOWN_DATA_DIR", data_dir.path())
        .env_remove("COUNTDOWN_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_ok(data_dir: &TempDir, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(data_dir, args);
    assert_eq!(code, 0, "{args:?} failed: {stderr}");
    stdout
}

fn json(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout).expect("Failed to parse JSON output")
}

#[test]
fn test_set_then_status() {
    let dir = TempDir::new().unwrap();
    let set = json(&run_ok(&dir, &["set", FAR_FUTURE, "--name", "Next century"]));
    assert_eq!(set["type"], "target_set");
    assert_eq!(set["event_name"], "Next century");
    assert_eq!(set["target"], "2099-01-01T00:00:00.000Z");

    let status = json(&run_ok(&dir, &["status"]));
    assert_eq!(status["event_name"], "Next century");
    assert_eq!(status["display"]["unit"], "days");
    assert_eq!(status["finished"], false);
}

#[test]
fn test_set_rejects_past_target() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(&dir, &["set", "2000-01-01T00:00:00Z", "--name", "Y2K"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("not in the future"), "{stderr}");
}

#[test]
fn test_set_rejects_blank_name() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(&dir, &["set", FAR_FUTURE, "--name", "   "]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Event name must not be empty"), "{stderr}");
}

#[test]
fn test_status_without_target_fails() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(&dir, &["status"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("no countdown set"));
}

#[test]
fn test_clear() {
    let dir = TempDir::new().unwrap();
    run_ok(&dir, &["set", FAR_FUTURE, "--name", "Gone soon"]);
    let cleared = json(&run_ok(&dir, &["clear"]));
    assert_eq!(cleared["type"], "target_cleared");
    assert_eq!(run_cli(&dir, &["status"]).2, 1);
}

#[test]
fn test_share_and_open() {
    let source = TempDir::new().unwrap();
    run_ok(&source, &["set", FAR_FUTURE, "--name", "Shared"]);
    let url = run_ok(&source, &["share", "--base-url", "https://example.com/c"]);
    let url = url.trim();
    assert!(url.starts_with("https://example.com/c?name=Shared&date="), "{url}");

    let dest = TempDir::new().unwrap();
    run_ok(&dest, &["open", url]);
    let status = json(&run_ok(&dest, &["status"]));
    assert_eq!(status["event_name"], "Shared");
}

#[test]
fn test_open_rejects_incomplete_link() {
    let dir = TempDir::new().unwrap();
    let (_, _, code) = run_cli(&dir, &["open", "https://example.com/?name=OnlyName"]);
    assert_eq!(code, 1);
}

#[test]
fn test_sqlite_backend_is_separate() {
    let dir = TempDir::new().unwrap();
    run_ok(&dir, &["--backend", "sqlite", "set", FAR_FUTURE, "--name", "In sqlite"]);
    let status = json(&run_ok(&dir, &["--backend", "sqlite", "status"]));
    assert_eq!(status["event_name"], "In sqlite");
    assert_eq!(run_cli(&dir, &["--backend", "file", "status"]).2, 1);
}

#[test]
fn test_config_set_get() {
    let dir = TempDir::new().unwrap();
    assert_eq!(run_ok(&dir, &["config", "get", "display.arc_convention"]).trim(), "emptying-clockwise");
    run_ok(&dir, &["config", "set", "display.arc_convention", "shrinking-pie"]);
    assert_eq!(run_ok(&dir, &["config", "get", "display.arc_convention"]).trim(), "shrinking-pie");

    let (_, _, code) = run_cli(&dir, &["config", "set", "display.arc_convention", "spiral"]);
    assert_eq!(code, 1);
    let (_, _, code) = run_cli(&dir, &["config", "get", "display.nope"]);
    assert_eq!(code, 1);
}

#[test]
fn test_pomodoro_lifecycle() {
    let dir = TempDir::new().unwrap();
    let idle = json(&run_ok(&dir, &["pomodoro", "status"]));
    assert_eq!(idle["is_running"], false);
    assert_eq!(idle["text"], "25:00");

    let started = json(&run_ok(&dir, &["pomodoro", "start"]));
    assert_eq!(started["type"], "pomodoro_started");
    assert_eq!(started["duration_secs"], 1500);

    let running = json(&run_ok(&dir, &["pomodoro", "status"]));
    assert_eq!(running["is_running"], true);

    run_ok(&dir, &["pomodoro", "reset"]);
    let reset = json(&run_ok(&dir, &["pomodoro", "status"]));
    assert_eq!(reset["is_running"], false);
}

#[test]
fn test_pomodoro_stale_session_prints_one_document() {
    let dir = TempDir::new().unwrap();
    let stale = serde_json::json!({
        "pomodoroState": r#"{"startTime":1000,"isRunning":true}"#,
    });
    std::fs::write(dir.path().join("storage.json"), stale.to_string()).unwrap();

    let status = json(&run_ok(&dir, &["pomodoro", "status"]));
    assert_eq!(status["is_running"], false);
    assert_eq!(status["text"], "25:00");
}

#[test]
fn test_watch_json_on_elapsed_target() {
    let dir = TempDir::new().unwrap();
    run_ok(
        &dir,
        &["open", "https://example.com/?name=Past&date=2000-01-01T00:00:00.000Z"],
    );

    let stdout = run_ok(&dir, &["watch", "--json"]);
    let lines: Vec<serde_json::Value> = stdout.lines().map(json).collect();
    assert_eq!(lines.len(), 2, "{stdout}");
    assert_eq!(lines[0]["type"], "tick");
    assert_eq!(lines[0]["finished"], true);
    assert_eq!(lines[0]["event_name"], "Past");
    assert_eq!(lines[1]["type"], "countdown_finished");
    assert_eq!(lines[1]["event_name"], "Past");
}

#[test]
fn test_completions() {
    let dir = TempDir::new().unwrap();
    let script = run_ok(&dir, &["completions", "bash"]);
    assert!(script.contains("countdown"));
}
