//! Integration tests for `relver calculate`

use crate::helpers::{Fixture, relver, relver_ok, stdout_json};
use anyhow::Result;

#[test]
fn test_calculate_pre_phase() -> Result<()> {
  let fx = Fixture::new()?;
  let state = fx.state("state.json", "0.0.1", "pre", 1, 0)?;

  let output = relver_ok(&fx.path, &["calculate", &state])?;
  let json = stdout_json(&output)?;

  assert_eq!(json["devVersion"], "0.0.1-pre.1.dev.1");
  assert_eq!(json["rcVersion"], "0.0.1-pre.1.rel");
  assert_eq!(json["nextState"]["devNumber"], 1);
  assert_eq!(json["nextState"]["pending"], "none");

  Ok(())
}

#[test]
fn test_calculate_rtm_ships_bare_base() -> Result<()> {
  let fx = Fixture::new()?;
  let state = fx.state("state.json", "1.4.0", "rtm", 0, 2)?;

  let output = relver_ok(&fx.path, &["calculate", &state])?;
  let json = stdout_json(&output)?;

  assert_eq!(json["devVersion"], "1.4.0-rtm.dev.3");
  assert_eq!(json["rcVersion"], "1.4.0");

  Ok(())
}

#[test]
fn test_calculate_twice_yields_same_versions() -> Result<()> {
  let fx = Fixture::new()?;
  let state = fx.state("state.json", "0.2.0", "rc", 2, 7)?;

  let first = stdout_json(&relver_ok(&fx.path, &["calculate", &state])?)?;
  let second = stdout_json(&relver_ok(&fx.path, &["calculate", &state])?)?;

  assert_eq!(first, second);

  Ok(())
}

#[test]
fn test_calculate_rejects_unknown_phase_in_json() -> Result<()> {
  let fx = Fixture::new()?;
  let state = fx.write(
    "state.json",
    r#"{"base":"0.0.1","phase":"beta","phaseNumber":1,"devNumber":0,"pending":"none"}"#,
  )?;

  let output = relver(&fx.path, &["calculate", &state])?;
  assert_eq!(output.status.code(), Some(1));

  Ok(())
}

#[test]
fn test_calculate_rejects_inconsistent_state() -> Result<()> {
  let fx = Fixture::new()?;
  // rtm must not carry an iteration number
  let state = fx.state("state.json", "1.0.0", "rtm", 2, 0)?;

  let output = relver(&fx.path, &["calculate", &state])?;
  assert_eq!(output.status.code(), Some(1));

  Ok(())
}

#[test]
fn test_calculate_next_state_feeds_back_in() -> Result<()> {
  let fx = Fixture::new()?;
  let state = fx.state("state.json", "0.0.1", "pre", 1, 0)?;

  let first = stdout_json(&relver_ok(&fx.path, &["calculate", &state])?)?;
  let next = fx.write("next.json", &first["nextState"].to_string())?;
  let second = stdout_json(&relver_ok(&fx.path, &["calculate", &next])?)?;

  assert_eq!(second["devVersion"], "0.0.1-pre.1.dev.2");
  // The shippable version is unaffected by dev builds
  assert_eq!(second["rcVersion"], first["rcVersion"]);

  Ok(())
}
