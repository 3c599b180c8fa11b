//! Calculate command: derive versions for the next development build

use crate::core::error::RelverResult;
use crate::version::calculate;

/// Run the calculate command
pub fn run_calculate(state_path: String) -> RelverResult<()> {
  let state = super::load_state(&state_path)?;
  let versions = calculate(&state);
  super::print_json(&versions)
}
