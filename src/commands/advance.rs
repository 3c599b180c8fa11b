//! Advance command: move the state forward after a confirmed shipment

use crate::core::error::RelverResult;
use crate::version::advance;

/// Run the advance command.
///
/// The shipped version is the caller's record of what actually went out;
/// the release driver validated it against the state's shippable version
/// before publishing, so it is echoed rather than re-checked.
pub fn run_advance(state_path: String, shipped: String) -> RelverResult<()> {
  let state = super::load_state(&state_path)?;
  let next = advance(&state);
  eprintln!(
    "ℹ️  Recorded shipment of {} from {} phase; next iteration is {}.{}",
    shipped, state.phase, next.phase, next.phase_number
  );
  super::print_json(&next)
}
