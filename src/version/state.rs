//! The persisted release lifecycle state
//!
//! # Core Invariants
//!
//! 1. **`phase_number` is 0 exactly when the phase is rtm**
//!    - pre and rc phases iterate (pre.1, pre.2, rc.1, ...)
//!    - rtm has no sub-iterations
//!
//! 2. **`dev_number` resets whenever base, phase, or phase number changes**
//!    - It only counts builds within the current iteration
//!
//! 3. **A non-none `pending` blocks state mutation**
//!    - A shipment attempt is in flight; base/phase/phase_number must not
//!      change until it is confirmed or explicitly overridden

use crate::core::error::{RelverError, RelverResult};
use semver::Version;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Release lifecycle phase, ordered pre < rc < rtm
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
  /// Iterative pre-release development
  Pre,
  /// Release-candidate stabilization
  Rc,
  /// Final preparation for the stable release
  Rtm,
}

impl Phase {
  /// Parse a phase token, `None` for anything unrecognized
  pub fn parse(s: &str) -> Option<Self> {
    match s.trim() {
      "pre" => Some(Phase::Pre),
      "rc" => Some(Phase::Rc),
      "rtm" => Some(Phase::Rtm),
      _ => None,
    }
  }
}

impl fmt::Display for Phase {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Phase::Pre => write!(f, "pre"),
      Phase::Rc => write!(f, "rc"),
      Phase::Rtm => write!(f, "rtm"),
    }
  }
}

/// Release type currently in flight, if any
///
/// Closed enum: the encoding is free-form text, but only these three values
/// are ever legitimately produced. Anything else is treated as corruption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pending {
  /// No shipment attempt in flight
  None,
  /// A pre-release/rc shipment has started but is not confirmed
  Prerelease,
  /// A stable shipment has started but is not confirmed
  Stable,
}

impl Pending {
  /// Parse a pending token; empty means none, `None` for anything unrecognized
  pub fn parse(s: &str) -> Option<Self> {
    match s.trim() {
      "" | "none" => Some(Pending::None),
      "prerelease" => Some(Pending::Prerelease),
      "stable" => Some(Pending::Stable),
      _ => None,
    }
  }

  pub fn is_none(self) -> bool {
    self == Pending::None
  }
}

impl fmt::Display for Pending {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Pending::None => write!(f, "none"),
      Pending::Prerelease => write!(f, "prerelease"),
      Pending::Stable => write!(f, "stable"),
    }
  }
}

/// The single persisted entity: where a package sits in its release lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionState {
  /// Foundation triple all derived versions build on
  pub base: Version,
  /// Current lifecycle phase
  pub phase: Phase,
  /// Iteration within the current phase (0 for rtm)
  pub phase_number: u32,
  /// Development builds produced since the last shipment in this iteration
  pub dev_number: u32,
  /// Release type in flight, for crash-safe retries
  pub pending: Pending,
}

impl VersionState {
  /// The hard-coded starting point when neither persisted state nor
  /// release history exists
  pub fn initial() -> Self {
    VersionState {
      base: Version::new(0, 0, 1),
      phase: Phase::Pre,
      phase_number: 1,
      dev_number: 0,
      pending: Pending::None,
    }
  }

  /// Check the phase/phase_number invariant on externally supplied state
  ///
  /// JSON handed to a command bypasses the codec, so the invariant has to
  /// be re-checked before any derivation runs on it.
  pub fn check(&self) -> RelverResult<()> {
    match self.phase {
      Phase::Rtm if self.phase_number != 0 => Err(RelverError::message(format!(
        "Inconsistent state: rtm phase must have phaseNumber 0, got {}",
        self.phase_number
      ))),
      Phase::Pre | Phase::Rc if self.phase_number == 0 => Err(RelverError::message(format!(
        "Inconsistent state: {} phase requires phaseNumber >= 1",
        self.phase
      ))),
      _ => Ok(()),
    }
  }
}

/// The shared base increment rule: patch while the package is pre-1.0,
/// minor (with patch reset) afterwards.
pub fn next_base(base: &Version) -> Version {
  if base.major == 0 {
    Version::new(base.major, base.minor, base.patch + 1)
  } else {
    Version::new(base.major, base.minor + 1, 0)
  }
}
