//! Bump command: operator-requested base bump and/or phase transition

use crate::core::error::{RelverError, RelverResult};
use crate::utils::read_history;
use crate::version::bump;

/// Run the bump command.
///
/// The full `BumpResult` is printed to stdout either way; a rejection
/// additionally puts the reason on stderr and exits non-zero so CI scripts
/// can gate on the status alone.
pub fn run_bump(
  state_path: String,
  kind: String,
  target_phase: String,
  history: Option<String>,
  force: bool,
) -> RelverResult<()> {
  let state = super::load_state(&state_path)?;
  let history = read_history(history.as_deref())?;

  let result = bump(&state, &kind, &target_phase, history.as_deref(), force);
  super::print_json(&result)?;

  if result.valid {
    Ok(())
  } else {
    Err(RelverError::Rejected {
      reason: result.reason.unwrap_or_else(|| "bump rejected".to_string()),
    })
  }
}
