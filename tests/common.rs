#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const EMPLOYEES: &str = r#"[
  { "badgeId": "1234", "name": "Alice" },
  { "badgeId": "5678", "name": "Bob" }
]"#;

pub fn rpl() -> Command {
    cargo_bin_cmd!("rpauselogger")
}

/// A throwaway HOME with an employee directory and a (not yet created) pause document.
pub struct TestEnv {
    pub dir: TempDir,
    pub db: PathBuf,
    pub employees: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let db = dir.path().join("pauses.json");
        let employees = dir.path().join("employees.json");
        fs::write(&employees, EMPLOYEES).expect("write employees");
        Self { dir, db, employees }
    }

    /// CLI command pointed at this environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = rpl();
        cmd.env("HOME", self.dir.path())
            .env_remove("PORT")
            .env_remove("RUST_LOG")
            .arg("--db")
            .arg(&self.db)
            .arg("--employees")
            .arg(&self.employees);
        cmd
    }

    pub fn write_document(&self, json: &str) {
        fs::write(&self.db, json).expect("write pause document");
    }

    pub fn read_document(&self) -> serde_json::Value {
        read_json(&self.db)
    }
}

pub fn read_json(path: &Path) -> serde_json::Value {
    let raw = fs::read_to_string(path).expect("read json");
    serde_json::from_str(&raw).expect("parse json")
}
