#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    tmp: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            tmp: TempDir::new().expect("create temp dir"),
        }
    }

    /// Writes `content` to a file in the temp dir and returns its path.
    pub fn write_input(&self, name: &str, content: &str) -> PathBuf {
        let path = self.tmp.path().join(name);
        fs::write(&path, content).expect("write input file");
        path
    }

    pub fn cmd(&self) -> Command {
        Command::cargo_bin("weekend-picker").expect("binary is built")
    }

    pub fn run_json(&self, input: &PathBuf, extra: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--input")
            .arg(input)
            .args(["--output-format", "json"])
            .args(extra)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("stdout is JSON")
    }
}

pub const ANA_MAY_JUNE: &str = r#"{
    "min_date": "2026-05-01",
    "max_date": "2026-06-30",
    "people": [
        {
            "name": "Ana",
            "hard_constraints": [
                {"type": "interval", "start_date": "2026-05-22", "end_date": "2026-05-24"}
            ],
            "soft_constraints": [
                {"type": "date", "date": "2026-05-15"}
            ]
        },
        {
            "name": "Rui",
            "soft_constraints": [
                {"type": "interval", "start_date": "2026-05-01", "end_date": "2026-05-09"}
            ]
        }
    ]
}"#;

pub const ALL_BLOCKED: &str = r#"{
    "min_date": "2026-05-01",
    "max_date": "2026-05-31",
    "people": [
        {"name": "Ana", "hard_constraints": [
            {"type": "interval", "start_date": "2026-05-01", "end_date": "2026-05-31"}
        ]},
        {"name": "Rui", "hard_constraints": [
            {"type": "date", "date": "2026-05-16"},
            {"type": "date", "date": "2026-05-24"}
        ]}
    ]
}"#;
