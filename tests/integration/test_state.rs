//! Integration tests for `relver state`

use crate::helpers::{Fixture, relver, relver_ok, stdout_json};
use anyhow::Result;

#[test]
fn test_state_decodes_marker_from_notes() -> Result<()> {
  let fx = Fixture::new()?;
  let notes = fx.write(
    "notes.md",
    "## 0.2.0-rc.1.rel\n\nStabilization round.\n\n<!-- relver-state: 0.2.0|rc|1|3|none -->\n",
  )?;

  let output = relver_ok(&fx.path, &["state", "--notes", &notes])?;
  let json = stdout_json(&output)?;

  assert_eq!(json["state"]["base"], "0.2.0");
  assert_eq!(json["state"]["phase"], "rc");
  assert_eq!(json["state"]["phaseNumber"], 1);
  assert_eq!(json["state"]["devNumber"], 3);
  assert!(json["encoded"].as_str().unwrap().contains("relver-state"));

  Ok(())
}

#[test]
fn test_state_decodes_legacy_encoding() -> Result<()> {
  let fx = Fixture::new()?;
  let notes = fx.write("notes.md", "old body\n<!-- release-stage: 0.1.0|rtm|2|5 -->\n")?;

  let output = relver_ok(&fx.path, &["state", "--notes", &notes])?;
  let json = stdout_json(&output)?;

  // Legacy rtm iterations collapse to 0
  assert_eq!(json["state"]["phase"], "rtm");
  assert_eq!(json["state"]["phaseNumber"], 0);
  // Re-encoded in the canonical form for migration
  assert!(json["encoded"].as_str().unwrap().starts_with("<!-- relver-state:"));

  Ok(())
}

#[test]
fn test_state_fails_when_notes_have_no_marker() -> Result<()> {
  let fx = Fixture::new()?;
  let notes = fx.write("notes.md", "just some prose, no marker here")?;

  let output = relver(&fx.path, &["state", "--notes", &notes])?;
  assert_eq!(output.status.code(), Some(1));
  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("marker"), "stderr was: {}", stderr);

  Ok(())
}

#[test]
fn test_state_derives_from_release_history() -> Result<()> {
  let fx = Fixture::new()?;
  let history = fx.write(
    "releases.json",
    r#"[
      {"tagName":"v0.3.0","isDraft":false,"isPrerelease":false,"publishedAt":"2026-02-01T12:00:00Z"},
      {"tagName":"v0.4.0-pre.1.rel","isDraft":false,"isPrerelease":true},
      {"tagName":"v0.2.0","isDraft":false,"isPrerelease":false}
    ]"#,
  )?;

  let output = relver_ok(&fx.path, &["state", "--history", &history])?;
  let json = stdout_json(&output)?;

  // One patch ahead of the highest stable tag, fresh pre.1 iteration
  assert_eq!(json["state"]["base"], "0.3.1");
  assert_eq!(json["state"]["phase"], "pre");
  assert_eq!(json["state"]["phaseNumber"], 1);
  assert_eq!(json["state"]["devNumber"], 0);
  assert_eq!(json["state"]["pending"], "none");

  Ok(())
}

#[test]
fn test_state_falls_back_to_initial_version() -> Result<()> {
  let fx = Fixture::new()?;

  let output = relver_ok(&fx.path, &["state"])?;
  let json = stdout_json(&output)?;

  assert_eq!(json["state"]["base"], "0.0.1");
  assert_eq!(json["state"]["phase"], "pre");
  assert_eq!(json["state"]["phaseNumber"], 1);

  Ok(())
}

#[test]
fn test_state_round_trips_through_encoded_line() -> Result<()> {
  let fx = Fixture::new()?;

  let first = relver_ok(&fx.path, &["state"])?;
  let json = stdout_json(&first)?;
  let encoded = json["encoded"].as_str().unwrap();

  let notes = fx.write("persisted.md", &format!("body\n{}\ntrailer", encoded))?;
  let second = relver_ok(&fx.path, &["state", "--notes", &notes])?;

  assert_eq!(stdout_json(&second)?["state"], json["state"]);

  Ok(())
}
