//! Derivation of concrete version identifiers from a state
//!
//! Pure: the input state is never mutated. Calling this twice on the same
//! state yields the same versions, which is what makes a crashed or retried
//! publish resume at the same target instead of burning a version.

use crate::version::codec::encode;
use crate::version::state::{Pending, Phase, VersionState};
use serde::{Deserialize, Serialize};

/// Versions derived from a state for the next development build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedVersions {
  /// Identifies the next development build
  pub dev_version: String,
  /// The version that would ship for the current phase
  pub rc_version: String,
  /// State to persist if the caller accepts this dev build's version
  pub next_state: VersionState,
  /// Canonical marker line for `next_state`
  pub next_state_encoded: String,
}

/// Derive the next dev-build version and the current shippable version.
///
/// The dev number is incremented for the build about to happen, not the
/// one that already did.
pub fn calculate(state: &VersionState) -> CalculatedVersions {
  let dev_number = state.dev_number + 1;

  let dev_version = match state.phase {
    Phase::Pre | Phase::Rc => format!(
      "{}-{}.{}.dev.{}",
      state.base, state.phase, state.phase_number, dev_number
    ),
    Phase::Rtm => format!("{}-rtm.dev.{}", state.base, dev_number),
  };

  let next_state = VersionState {
    base: state.base.clone(),
    phase: state.phase,
    phase_number: state.phase_number,
    dev_number,
    pending: Pending::None,
  };
  let next_state_encoded = encode(&next_state);

  CalculatedVersions {
    dev_version,
    rc_version: shippable_version(state),
    next_state,
    next_state_encoded,
  }
}

/// The version a shipment from this state would carry.
///
/// For pre and rc this is the iteration's `.rel` tag; for rtm it is the
/// bare base triple, the stable release itself.
pub fn shippable_version(state: &VersionState) -> String {
  match state.phase {
    Phase::Pre | Phase::Rc => format!("{}-{}.{}.rel", state.base, state.phase, state.phase_number),
    Phase::Rtm => state.base.to_string(),
  }
}
