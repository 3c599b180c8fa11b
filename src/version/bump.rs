//! Operator-requested base bumps and phase transitions
//!
//! The one entry point that can move the lifecycle sideways, and therefore
//! the one place the ordering rules are enforced:
//!
//! 1. **Phases only move backward alongside a base bump.** A pure phase
//!    transition (no version change) to an earlier phase would re-open a
//!    lifecycle that already progressed past it.
//! 2. **A pending shipment blocks the bump** unless explicitly overridden.
//! 3. **The resulting shippable version must clear shipment history** when
//!    history is supplied.
//!
//! Everything here is a policy decision, not a crash: unknown bump kinds
//! and phases come in as operator-typed strings and are answered with a
//! `valid: false` result, never an abort.

use crate::version::calculate::shippable_version;
use crate::version::history::{ReleaseInfo, validate};
use crate::version::state::{Pending, Phase, VersionState, next_base};
use semver::Version;
use serde::{Deserialize, Serialize};

/// How the base version changes during a bump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
  /// Keep the base as-is (pure phase transition)
  None,
  /// Patch while pre-1.0, minor afterwards
  Auto,
  Patch,
  Minor,
  Major,
}

impl BumpKind {
  /// Parse an operator-supplied kind token
  pub fn parse(s: &str) -> Option<Self> {
    match s.trim() {
      "none" => Some(BumpKind::None),
      "auto" => Some(BumpKind::Auto),
      "patch" => Some(BumpKind::Patch),
      "minor" => Some(BumpKind::Minor),
      "major" => Some(BumpKind::Major),
      _ => None,
    }
  }

  /// Apply this bump to a base triple
  pub fn apply(self, base: &Version) -> Version {
    match self {
      BumpKind::None => base.clone(),
      BumpKind::Auto => next_base(base),
      BumpKind::Patch => Version::new(base.major, base.minor, base.patch + 1),
      BumpKind::Minor => Version::new(base.major, base.minor + 1, 0),
      BumpKind::Major => Version::new(base.major + 1, 0, 0),
    }
  }
}

/// Outcome of a bump request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BumpResult {
  pub valid: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reason: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub state: Option<VersionState>,
}

impl BumpResult {
  fn ok(state: VersionState) -> Self {
    BumpResult {
      valid: true,
      reason: None,
      state: Some(state),
    }
  }

  fn rejected(reason: impl Into<String>) -> Self {
    BumpResult {
      valid: false,
      reason: Some(reason.into()),
      state: None,
    }
  }
}

/// Apply a base-version bump and/or phase transition.
///
/// `kind` and `target_phase` arrive as raw operator input; unrecognized
/// values reject rather than abort. `force` overrides the pending-shipment
/// guard for recovery after a wedged publish.
pub fn bump(
  state: &VersionState,
  kind: &str,
  target_phase: &str,
  history: Option<&[ReleaseInfo]>,
  force: bool,
) -> BumpResult {
  let Some(kind) = BumpKind::parse(kind) else {
    return BumpResult::rejected(format!(
      "unknown bump kind '{}' (expected none, auto, patch, minor, or major)",
      kind
    ));
  };

  let Some(target) = Phase::parse(target_phase) else {
    return BumpResult::rejected(format!("unknown phase '{}' (expected pre, rc, or rtm)", target_phase));
  };

  if !state.pending.is_none() && !force {
    return BumpResult::rejected(format!(
      "a {} shipment is pending; confirm or abort it before bumping (--force to override)",
      state.pending
    ));
  }

  let new_base = kind.apply(&state.base);

  // A pure phase transition carries no version change, so it may only move
  // the lifecycle forward
  if new_base == state.base && kind == BumpKind::None {
    if target == state.phase {
      return BumpResult::rejected(format!("nothing to do: already in phase {} at {}", target, state.base));
    }
    if target < state.phase {
      return BumpResult::rejected(format!(
        "cannot move from {} back to {} without a version bump",
        state.phase, target
      ));
    }
  }

  let next = VersionState {
    base: new_base,
    phase: target,
    phase_number: if target == Phase::Rtm { 0 } else { 1 },
    dev_number: 0,
    pending: Pending::None,
  };

  if let Some(history) = history {
    let proposed = shippable_version(&next);
    let result = validate(&proposed, Some(history));
    if !result.valid {
      return BumpResult::rejected(
        result
          .reason
          .unwrap_or_else(|| format!("proposed version {} conflicts with shipment history", proposed)),
      );
    }
  }

  BumpResult::ok(next)
}
