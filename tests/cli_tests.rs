use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::TestEnv;

#[test]
fn test_init_creates_empty_document() {
    let env = TestEnv::new();

    env.cmd()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("Pause document created"))
        .stdout(contains("Employee directory already present"));

    let doc = env.read_document();
    assert_eq!(doc["active"], serde_json::json!({}));
    assert_eq!(doc["history"], serde_json::json!([]));

    // second run leaves everything in place
    env.cmd()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("Pause document already present"));
}

#[test]
fn test_pause_toggles_start_then_end() {
    let env = TestEnv::new();

    env.cmd()
        .args(["pause", "1234"])
        .assert()
        .success()
        .stdout(contains("Break started for Alice (1234)"));

    let doc = env.read_document();
    assert!(doc["active"]["1234"].is_string());

    env.cmd()
        .args(["pause", "1234"])
        .assert()
        .success()
        .stdout(contains("Break ended for Alice (1234) after 0 min"));

    let doc = env.read_document();
    assert_eq!(doc["active"], serde_json::json!({}));
    assert_eq!(doc["history"].as_array().map(Vec::len), Some(1));
    assert_eq!(doc["history"][0]["badgeId"], "1234");
    assert_eq!(doc["history"][0]["overThreshold"], false);
}

#[test]
fn test_pause_rejects_malformed_badge() {
    let env = TestEnv::new();

    env.cmd()
        .args(["pause", "12a4"])
        .assert()
        .failure()
        .stderr(contains("Invalid badge identifier"));

    assert!(!env.db.exists());
}

#[test]
fn test_pause_rejects_unknown_badge() {
    let env = TestEnv::new();

    env.cmd()
        .args(["pause", "9999"])
        .assert()
        .failure()
        .stderr(contains("Unknown employee for badge 9999"));

    assert!(!env.db.exists());
}

#[test]
fn test_missing_employee_directory_is_an_error() {
    let env = TestEnv::new();
    std::fs::remove_file(&env.employees).unwrap();

    env.cmd()
        .args(["pause", "1234"])
        .assert()
        .failure()
        .stderr(contains("Employee directory error"));
}

#[test]
fn test_active_lists_open_breaks() {
    let env = TestEnv::new();

    env.cmd()
        .arg("active")
        .assert()
        .success()
        .stdout(contains("Nobody is on break."));

    env.cmd().args(["pause", "5678"]).assert().success();

    env.cmd()
        .arg("active")
        .assert()
        .success()
        .stdout(contains("5678").and(contains("Bob")));
}

#[test]
fn test_history_shows_records_newest_first() {
    let env = TestEnv::new();
    env.write_document(
        r#"{
          "active": {},
          "history": [
            { "badgeId": "5678", "name": "Bob", "start": "2025-03-10T10:00:00.000Z",
              "end": "2025-03-10T10:25:00.000Z", "durationMinutes": 25, "overThreshold": true },
            { "badgeId": "1234", "name": "Alice", "start": "2025-03-10T09:00:00.000Z",
              "end": "2025-03-10T09:15:00.000Z", "durationMinutes": 15, "overThreshold": false }
          ]
        }"#,
    );

    let output = env.cmd().arg("history").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("Break history (2 entries)"));
    assert!(stdout.contains("00h 25m"));
    assert!(stdout.contains("00h 15m"));
    let bob = stdout.find("Bob").unwrap();
    let alice = stdout.find("Alice").unwrap();
    assert!(bob < alice, "newest record must come first:\n{stdout}");
}

#[test]
fn test_history_empty() {
    let env = TestEnv::new();

    env.cmd()
        .arg("history")
        .assert()
        .success()
        .stdout(contains("No completed breaks yet."));
}

#[test]
fn test_corrupt_document_starts_fresh() {
    let env = TestEnv::new();
    env.write_document("this is not json");

    env.cmd()
        .args(["pause", "1234"])
        .assert()
        .success()
        .stdout(contains("Break started"));

    let doc = env.read_document();
    assert!(doc["active"]["1234"].is_string());
}

#[test]
fn test_config_print_shows_defaults() {
    let env = TestEnv::new();

    env.cmd()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("break_threshold_minutes: 20"))
        .stdout(contains("max_pending_toggles: 64"))
        .stdout(contains("pauses.json"));
}

#[test]
fn test_terminal_pause_alongside_running_service() {
    use rpauselogger::core::{BreakPolicy, PauseService};
    use rpauselogger::db::{EmployeeDirectory, PauseStore};

    let env = TestEnv::new();
    let server = PauseService::new(
        PauseStore::new(&env.db),
        EmployeeDirectory::load(&env.employees).unwrap(),
        BreakPolicy::default(),
    );
    assert!(server.history().unwrap().is_empty());

    env.cmd()
        .args(["pause", "1234"])
        .assert()
        .success()
        .stdout(contains("Break started for Alice (1234)"));

    // the service toggles another badge after the terminal wrote the file
    assert!(server.toggle("5678").unwrap().is_start());

    let doc = env.read_document();
    assert!(doc["active"]["1234"].is_string());
    assert!(doc["active"]["5678"].is_string());

    // and sees the terminal's break when ending it
    assert!(!server.toggle("1234").unwrap().is_start());
    assert_eq!(server.history().unwrap()[0].name, "Alice");
}

#[test]
fn test_older_document_format_is_preserved() {
    let env = TestEnv::new();
    env.write_document(
        r#"{
  "active": {},
  "history": [
    {
      "matricule": "1234",
      "name": "Alice",
      "start": "2025-03-10T09:00:00.000Z",
      "end": "2025-03-10T09:25:00.000Z",
      "durationMinutes": 25,
      "statusColor": "red"
    }
  ]
}"#,
    );

    env.cmd()
        .arg("history")
        .assert()
        .success()
        .stdout(contains("Alice").and(contains("over")));

    env.cmd().args(["pause", "5678"]).assert().success();

    let doc = env.read_document();
    assert_eq!(doc["history"][0]["badgeId"], "1234");
    assert_eq!(doc["history"][0]["overThreshold"], true);
    assert!(doc["active"]["5678"].is_string());
}

#[test]
fn test_corrupt_document_is_backed_up_before_overwrite() {
    let env = TestEnv::new();
    env.write_document("{ \"history\": [ truncated");

    env.cmd().args(["pause", "1234"]).assert().success();

    let backups: Vec<_> = std::fs::read_dir(env.dir.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.to_string_lossy().contains("pauses.json.corrupt-"))
        .collect();
    assert_eq!(backups.len(), 1);
    assert_eq!(
        std::fs::read_to_string(&backups[0]).unwrap(),
        "{ \"history\": [ truncated"
    );
}
