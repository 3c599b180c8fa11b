//! Integration tests for `relver validate`

use crate::helpers::{Fixture, relver, relver_ok, stdout_json};
use anyhow::Result;

#[test]
fn test_validate_passes_without_history() -> Result<()> {
  let fx = Fixture::new()?;

  let output = relver_ok(&fx.path, &["validate", "1.2.3"])?;
  let json = stdout_json(&output)?;

  assert_eq!(json["valid"], true);
  assert!(json.get("reason").is_none());

  Ok(())
}

#[test]
fn test_validate_rejects_duplicate_shipment() -> Result<()> {
  let fx = Fixture::new()?;
  let history = fx.write(
    "releases.json",
    r#"[{"tagName":"v0.0.1","isDraft":false,"isPrerelease":false}]"#,
  )?;

  let output = relver(&fx.path, &["validate", "0.0.1", "--history", &history])?;
  assert_eq!(output.status.code(), Some(3));

  let json = stdout_json(&output)?;
  assert_eq!(json["valid"], false);
  assert!(json["reason"].as_str().unwrap().contains("0.0.1"));

  Ok(())
}

#[test]
fn test_validate_rejects_regression() -> Result<()> {
  let fx = Fixture::new()?;
  let history = fx.write(
    "releases.json",
    r#"[{"tagName":"v0.5.0","isDraft":false,"isPrerelease":false}]"#,
  )?;

  let output = relver(&fx.path, &["validate", "0.4.9", "--history", &history])?;
  assert_eq!(output.status.code(), Some(3));

  Ok(())
}

#[test]
fn test_validate_accepts_version_ahead_of_history() -> Result<()> {
  let fx = Fixture::new()?;
  let history = fx.write(
    "releases.json",
    r#"[
      {"tagName":"v0.5.0","isDraft":false,"isPrerelease":false},
      {"tagName":"v0.5.1-pre.1.rel","isDraft":false,"isPrerelease":true},
      {"tagName":"v9.9.9","isDraft":true,"isPrerelease":false}
    ]"#,
  )?;

  let output = relver_ok(&fx.path, &["validate", "0.5.1-pre.2.rel", "--history", &history])?;
  assert_eq!(stdout_json(&output)?["valid"], true);

  Ok(())
}

#[test]
fn test_validate_rejects_malformed_version() -> Result<()> {
  let fx = Fixture::new()?;

  let output = relver(&fx.path, &["validate", "not-a-version"])?;
  assert_eq!(output.status.code(), Some(3));

  let json = stdout_json(&output)?;
  assert!(json["reason"].as_str().unwrap().contains("not-a-version"));

  Ok(())
}
