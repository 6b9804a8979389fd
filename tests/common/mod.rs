//! Shared testing utilities for steaminfo CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Snapshot in name order, as written by a previous run.
pub const SORTED_SNAPSHOT: &str = r#"{"applist":{"apps":[{"appid":3,"name":"Celeste"},{"appid":2,"name":"Mario"},{"appid":1,"name":"Zelda"}]}}"#;

/// App list as Steam serves it: ordered by id, not by name.
pub const REMOTE_APP_LIST: &str = r#"{"applist":{"apps":[{"appid":1,"name":"Zelda"},{"appid":2,"name":"Mario"},{"appid":3,"name":"Celeste"}]}}"#;

pub const REVIEWS_BODY: &str = r#"{
    "success": 1,
    "query_summary": {
        "num_reviews": 0,
        "review_score": 8,
        "review_score_desc": "Very Positive",
        "total_positive": 900,
        "total_negative": 100,
        "total_reviews": 1000
    },
    "reviews": [],
    "cursor": "*"
}"#;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the directory CLI invocations run in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Default snapshot location relative to the work directory.
    pub fn cache_path(&self) -> PathBuf {
        self.work_dir.join("response.json")
    }

    /// Build a command for invoking the compiled `steaminfo` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("steaminfo").expect("Failed to locate steaminfo binary");
        cmd.current_dir(&self.work_dir).env_remove("RUST_LOG");
        cmd
    }

    /// Write `steaminfo.toml` pointing both endpoints at `base_url`.
    pub fn write_config(&self, base_url: &str) {
        let content = format!(
            r#"[steam]
app_list_url = "{base}/ISteamApps/GetAppList/v2/"
reviews_url = "{base}/appreviews/"
timeout_secs = 5
"#,
            base = base_url.trim_end_matches('/')
        );
        fs::write(self.work_dir.join("steaminfo.toml"), content).expect("Failed to write config");
    }

    /// Seed the default snapshot file.
    pub fn seed_cache(&self, content: &str) {
        fs::write(self.cache_path(), content).expect("Failed to seed cache");
    }

    pub fn read_cache(&self) -> String {
        fs::read_to_string(self.cache_path()).expect("Cache file should exist")
    }
}
