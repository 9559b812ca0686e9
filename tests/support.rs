//! Common test support utilities and fixtures
//!
//! Workspaces hold a `.env` file and a `gg.yaml` pointing at a mock server, so
//! neither the commands nor the binary ever read the real environment token.

#![allow(dead_code)]

use gg::commands::CommandContext;
use gg::config::Config;
use serde_json::{Value, json};
use std::{fs, path::PathBuf, process::Command};
use tempfile::TempDir;
use wiremock::MockServer;

/// Token variable used by every test workspace; never set in the process environment
pub const TOKEN_VAR: &str = "GG_TEST_ACCESS_TOKEN";
pub const TOKEN: &str = "test-token";

/// Result of running a CLI command
#[derive(Debug)]
pub struct CliOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

/// A temporary working directory with optional credentials and config
pub struct Workspace {
    pub root: TempDir,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory");
        Self { root }
    }

    pub fn dotenv_path(&self) -> PathBuf {
        self.root.path().join(".env")
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.path().join("gg.yaml")
    }

    /// Write the token into the workspace `.env`
    pub fn with_token(self) -> Self {
        fs::write(self.dotenv_path(), format!("{TOKEN_VAR}={TOKEN}\n"))
            .expect("Failed to write .env");
        self
    }

    /// Write `gg.yaml` targeting `api_url`
    pub fn with_config(self, api_url: &str, extra: &str) -> Self {
        let content = format!("api_url: {api_url}\ntoken_env: {TOKEN_VAR}\n{extra}");
        fs::write(self.config_path(), content).expect("Failed to write gg.yaml");
        self
    }

    /// In-process configuration equivalent to `with_config`
    pub fn config(&self, api_url: &str) -> Config {
        Config {
            api_url: api_url.to_string(),
            token_env: TOKEN_VAR.to_string(),
            dotenv_file: self.dotenv_path(),
            ..Config::new()
        }
    }

    pub fn context(&self, server: &MockServer) -> CommandContext {
        CommandContext::new(self.config(&server.uri()))
    }

    /// Run the gg binary inside the workspace
    pub fn run(&self, args: &[&str]) -> CliOutput {
        let output = Command::new(env!("CARGO_BIN_EXE_gg"))
            .args(args)
            .current_dir(self.root.path())
            .env_remove(TOKEN_VAR)
            .env_remove("GITHUB_ACCESS_TOKEN")
            .env_remove("GG_LOG")
            .env("NO_COLOR", "1")
            .output()
            .expect("Failed to run gg");

        CliOutput {
            status: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

pub fn repos(names: &[&str]) -> Value {
    Value::Array(
        names
            .iter()
            .enumerate()
            .map(|(i, name)| json!({ "id": i + 1, "name": name, "full_name": format!("octocat/{name}") }))
            .collect(),
    )
}

pub fn pulls(titles: &[(&str, &str)]) -> Value {
    Value::Array(
        titles
            .iter()
            .enumerate()
            .map(|(i, (title, sha))| {
                json!({
                    "number": i + 1,
                    "title": title,
                    "state": "open",
                    "created_at": "2023-09-23T10:00:00Z",
                    "head": { "ref": format!("branch-{i}"), "sha": sha }
                })
            })
            .collect(),
    )
}

pub fn search_results(titles: &[&str]) -> Value {
    let items: Vec<Value> = titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            json!({
                "number": i + 1,
                "title": title,
                "state": "open",
                "created_at": "2023-09-22T08:30:00Z"
            })
        })
        .collect();
    json!({ "total_count": items.len(), "incomplete_results": false, "items": items })
}

pub async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or_default()
}
