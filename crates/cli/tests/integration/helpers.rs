//! Test helper utilities for CLI integration tests.

#![allow(deprecated)] // Command::cargo_bin deprecation

use assert_cmd::Command;

/// Timestamp one hour after the fixture streams were last updated.
pub const FIXTURE_TIMESTAMP: &str = "1631591111";

/// Create a CLI command with a clean logging environment.
pub fn lending_cmd() -> Command {
    let mut cmd = Command::cargo_bin("lending").unwrap();
    cmd.env_remove("RUST_LOG").env_remove("LENDING_TIMESTAMP");
    cmd
}

/// Absolute path of a fixture file.
pub fn fixture_path(name: &str) -> String {
    format!(
        "{}/tests/fixtures/{}.json",
        env!("CARGO_MANIFEST_DIR"),
        name
    )
}

/// Parse command stdout as JSON.
pub fn stdout_json(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).unwrap_or_else(|e| panic!("stdout is not JSON: {}", e))
}
