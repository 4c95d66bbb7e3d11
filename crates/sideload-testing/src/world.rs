//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating isolated test environments with their own config file
//! - Placing sample or inline documents
//! - Executing CLI commands, with or without stdin

use anyhow::Result;
use assert_cmd::Command;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::SampleFiles;

/// Declarative test environment builder.
///
/// Every command runs with `--config` pointing inside the temp dir, so a
/// developer's own config never leaks into a test.
///
/// # Example
/// ```no_run
/// use sideload_testing::TestWorld;
///
/// let world = TestWorld::new().with_sample("widgets_collection.json");
///
/// let result = world.run(&["list", "widgets_collection.json"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    env_vars: HashMap<String, String>,
    samples: SampleFiles,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");

        Self {
            temp_dir,
            config_path,
            env_vars: HashMap::new(),
            samples: SampleFiles::new(),
        }
    }

    /// Get the temp directory root (also the commands' working directory).
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Config file every command is pointed at (may not exist).
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Write the config file.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(&self.config_path, toml).expect("Failed to write config");
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Copy a shared sample document into the temp dir under its own name.
    pub fn with_sample(self, sample_name: &str) -> Self {
        let dest = self.temp_dir.path().join(sample_name);
        self.samples
            .copy_to(sample_name, &dest)
            .expect("Failed to copy sample");
        self
    }

    /// Write an inline document into the temp dir.
    pub fn with_document(self, name: &str, document: &Value) -> Self {
        let body = serde_json::to_vec_pretty(document).expect("Failed to serialize document");
        self.with_body(name, &body)
    }

    /// Write raw bytes into the temp dir, for malformed bodies.
    pub fn with_body(self, name: &str, body: &[u8]) -> Self {
        std::fs::write(self.temp_dir.path().join(name), body).expect("Failed to write body");
        self
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The caller must provide the base command (e.g., from `cargo_bin_cmd!("sideload")`).
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config").arg(&self.config_path);

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RUST_LOG");
        cmd.env_remove("SIDELOAD_CONFIG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute a command using the project's binary and return the result.
    ///
    /// # Note
    /// This method uses `Command::cargo_bin()` which requires the binary to be
    /// built (which cargo test does automatically for the `sideload` package).
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        self.run_with_stdin(args, None)
    }

    /// Execute a command feeding `stdin` as the response body.
    #[allow(deprecated)]
    pub fn run_with_stdin(&self, args: &[&str], stdin: Option<&[u8]>) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("sideload")
            .map_err(|e| anyhow::anyhow!("Failed to find sideload binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);
        if let Some(body) = stdin {
            cmd.write_stdin(body.to_vec());
        }

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Exit code, `None` if killed by a signal.
    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
