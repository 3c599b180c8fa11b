//! Validate command: check a version against shipment history

use crate::core::error::{RelverError, RelverResult};
use crate::utils::read_history;
use crate::version::validate;

/// Run the validate command
pub fn run_validate(version: String, history: Option<String>) -> RelverResult<()> {
  let history = read_history(history.as_deref())?;

  let result = validate(&version, history.as_deref());
  super::print_json(&result)?;

  if result.valid {
    Ok(())
  } else {
    Err(RelverError::Rejected {
      reason: result.reason.unwrap_or_else(|| "validation failed".to_string()),
    })
  }
}
