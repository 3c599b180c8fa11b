//! Integration tests for `relver advance`

use crate::helpers::{Fixture, relver_ok, stdout_json};
use anyhow::Result;

#[test]
fn test_advance_pre_phase_increments_iteration() -> Result<()> {
  let fx = Fixture::new()?;
  let state = fx.state("state.json", "0.0.1", "pre", 1, 4)?;

  let output = relver_ok(&fx.path, &["advance", &state, "0.0.1-pre.1.rel"])?;
  let json = stdout_json(&output)?;

  assert_eq!(json["base"], "0.0.1");
  assert_eq!(json["phase"], "pre");
  assert_eq!(json["phaseNumber"], 2);
  assert_eq!(json["devNumber"], 0);
  assert_eq!(json["pending"], "none");

  Ok(())
}

#[test]
fn test_advance_rtm_rolls_base_forward() -> Result<()> {
  let fx = Fixture::new()?;
  let state = fx.state("state.json", "0.0.1", "rtm", 0, 3)?;

  let output = relver_ok(&fx.path, &["advance", &state, "0.0.1"])?;
  let json = stdout_json(&output)?;

  assert_eq!(json["base"], "0.0.2");
  assert_eq!(json["phase"], "pre");
  assert_eq!(json["phaseNumber"], 1);
  assert_eq!(json["devNumber"], 0);

  Ok(())
}

#[test]
fn test_advance_chain_produces_increasing_rel_versions() -> Result<()> {
  let fx = Fixture::new()?;
  let mut state_file = fx.state("state.json", "0.1.0", "rc", 1, 0)?;

  let mut seen = Vec::new();
  for i in 0..3 {
    let versions = stdout_json(&relver_ok(&fx.path, &["calculate", &state_file])?)?;
    seen.push(versions["rcVersion"].as_str().unwrap().to_string());

    let next = stdout_json(&relver_ok(&fx.path, &["advance", &state_file, &seen[i]])?)?;
    state_file = fx.write(&format!("state-{}.json", i), &next.to_string())?;
  }

  assert_eq!(seen, vec!["0.1.0-rc.1.rel", "0.1.0-rc.2.rel", "0.1.0-rc.3.rel"]);

  Ok(())
}
