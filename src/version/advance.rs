//! State progression after a confirmed shipment
//!
//! Called once the caller knows the shipment succeeded; the shipped version
//! was validated against the state's shippable version before the attempt,
//! so it is not re-checked here.

use crate::version::state::{Pending, Phase, VersionState, next_base};

/// Compute the state that follows a successful shipment.
///
/// Shipping a pre or rc iteration opens the next iteration of the same
/// phase. Shipping from rtm is the stable release itself: the base rolls
/// forward and the lifecycle starts over at pre.1.
pub fn advance(state: &VersionState) -> VersionState {
  match state.phase {
    Phase::Pre | Phase::Rc => VersionState {
      base: state.base.clone(),
      phase: state.phase,
      phase_number: state.phase_number + 1,
      dev_number: 0,
      pending: Pending::None,
    },
    Phase::Rtm => VersionState {
      base: next_base(&state.base),
      phase: Phase::Pre,
      phase_number: 1,
      dev_number: 0,
      pending: Pending::None,
    },
  }
}
