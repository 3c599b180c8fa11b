//! CLI commands for relver
//!
//! Each command is invoked once per need by the build or release driver,
//! prints a structured JSON result to stdout, and exits 0 on success:
//!
//! - **state**: decode a persisted blob, or derive a fresh state from
//!   release history
//! - **calculate**: derive dev/shippable versions for the next build
//! - **advance**: compute the state that follows a confirmed shipment
//! - **bump**: apply a base bump and/or phase transition
//! - **validate**: check a version against shipment history
//!
//! Human-readable notes go to stderr so stdout stays machine-parseable.

pub mod advance;
pub mod bump;
pub mod calculate;
pub mod state;
pub mod validate;

pub use advance::run_advance;
pub use bump::run_bump;
pub use calculate::run_calculate;
pub use state::run_state;
pub use validate::run_validate;

use crate::core::error::{RelverResult, ResultExt};
use crate::version::VersionState;

/// Load a VersionState from a JSON file argument and re-check its
/// invariants (JSON input bypasses the codec's checks)
pub(crate) fn load_state(path: &str) -> RelverResult<VersionState> {
  let text = crate::utils::read_input(path)?;
  let state: VersionState =
    serde_json::from_str(&text).with_context(|| format!("Failed to parse version state from '{}'", path))?;
  state.check()?;
  Ok(state)
}

/// Print a result value as pretty JSON on stdout
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> RelverResult<()> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}
