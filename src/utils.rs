//! Input helpers shared by the commands
//!
//! Every command takes its state, notes, and history as files so the CI
//! driver can pipe provider API responses straight through; `-` reads
//! stdin instead.

use crate::core::error::{RelverResult, ResultExt};
use crate::version::ReleaseInfo;
use std::io::Read;

/// Read an input argument: a file path, or stdin when it is `-`
pub fn read_input(path: &str) -> RelverResult<String> {
  if path == "-" {
    let mut buffer = String::new();
    std::io::stdin()
      .read_to_string(&mut buffer)
      .context("Failed to read from stdin")?;
    Ok(buffer)
  } else {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read input file '{}'", path))
  }
}

/// Load and parse a release-history JSON file, if one was given.
///
/// The expected shape is the hosting provider's release list: an array of
/// objects with `tagName`, `isDraft`, `isPrerelease`.
pub fn read_history(path: Option<&str>) -> RelverResult<Option<Vec<ReleaseInfo>>> {
  let Some(path) = path else {
    return Ok(None);
  };
  let text = read_input(path)?;
  let history: Vec<ReleaseInfo> =
    serde_json::from_str(&text).with_context(|| format!("Failed to parse release history from '{}'", path))?;
  Ok(Some(history))
}
