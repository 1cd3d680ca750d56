//! Common test utilities for editor-host contract and CLI tests.
//!
//! - `TestEnv`: isolated project and home directories plus a CLI runner
//! - `FakePalette`: a palette whose roles are all distinguishable

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use editor_host::domain::ports::SystemColors;
use editor_host::domain::value_objects::{Rgb, SystemColorRole};
use tempfile::TempDir;

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().unwrap(),
            home_dir: TempDir::new().unwrap(),
        }
    }

    /// Write `.editor-host/config.toml` under the project root.
    pub fn write_project_config(&self, content: &str) -> PathBuf {
        let path = self.project_root.path().join(".editor-host/config.toml");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    /// Write the user config where `dirs::config_dir` finds it with
    /// `XDG_CONFIG_HOME` pointed at `<home>/.config`.
    pub fn write_user_config(&self, content: &str) -> PathBuf {
        let path = self.home_dir.path().join(".config/editor-host/config.toml");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = editor_host_cmd(self.project_root.path());
        cmd.env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .args(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to run editor-host");
        TestResult {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// The CLI with a clean environment rooted at `cwd`.
pub fn editor_host_cmd(cwd: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_editor-host"));
    cmd.current_dir(cwd)
        .env("NO_COLOR", "1")
        .env("TERM", "dumb")
        .env_remove("RUST_LOG")
        .env_remove("EDITOR_HOST_VERSION")
        .env_remove("EDITOR_HOST_LOG");
    cmd
}

/// Each role maps to its own color so tests can tell them apart.
pub struct FakePalette;

impl FakePalette {
    pub fn color_of(role: SystemColorRole) -> Rgb {
        match role {
            SystemColorRole::Window => Rgb::new(0x10, 0, 0),
            SystemColorRole::WindowText => Rgb::new(0x20, 0, 0),
            SystemColorRole::Highlight => Rgb::new(0x30, 0, 0),
            SystemColorRole::HighlightText => Rgb::new(0x40, 0, 0),
            SystemColorRole::Control => Rgb::new(0x50, 0, 0),
            SystemColorRole::ControlText => Rgb::new(0x60, 0, 0),
        }
    }
}

impl SystemColors for FakePalette {
    fn color(&self, role: SystemColorRole) -> Rgb {
        Self::color_of(role)
    }
}
