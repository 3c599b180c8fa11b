//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A scratch directory holding state/history/notes fixture files
pub struct Fixture {
  _root: TempDir,
  pub path: PathBuf,
}

impl Fixture {
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();
    Ok(Self { _root: root, path })
  }

  /// Write a fixture file and return its path as a string argument
  pub fn write(&self, name: &str, content: &str) -> Result<String> {
    let file = self.path.join(name);
    std::fs::write(&file, content)?;
    Ok(file.to_string_lossy().into_owned())
  }

  /// Write a VersionState JSON fixture
  pub fn state(&self, name: &str, base: &str, phase: &str, phase_number: u32, dev_number: u32) -> Result<String> {
    self.write(
      name,
      &format!(
        r#"{{"base":"{}","phase":"{}","phaseNumber":{},"devNumber":{},"pending":"none"}}"#,
        base, phase, phase_number, dev_number
      ),
    )
  }
}

/// Run the relver binary; callers assert on status themselves
pub fn relver(cwd: &Path, args: &[&str]) -> Result<Output> {
  let bin = env!("CARGO_BIN_EXE_relver");

  Command::new(bin)
    .current_dir(cwd)
    .args(args)
    .output()
    .context("Failed to run relver")
}

/// Run relver and fail the test if it did not exit 0
pub fn relver_ok(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = relver(cwd, args)?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    anyhow::bail!(
      "relver command failed: relver {}\nstdout: {}\nstderr: {}",
      args.join(" "),
      stdout,
      stderr
    );
  }

  Ok(output)
}

/// Parse a command's stdout as JSON
pub fn stdout_json(output: &Output) -> Result<serde_json::Value> {
  let stdout = String::from_utf8_lossy(&output.stdout);
  serde_json::from_str(&stdout).with_context(|| format!("stdout is not JSON: {}", stdout))
}
