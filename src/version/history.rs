//! Shipment history validation
//!
//! The core monotonicity guarantee lives here: a candidate version must be
//! strictly ahead of every version already shipped. History is supplied by
//! the caller from the release-hosting provider; this module never fetches
//! anything itself.

use crate::version::compare::compare;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A single release as reported by the hosting provider
///
/// Never created or mutated here; it arrives as JSON from the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseInfo {
  pub tag_name: String,
  #[serde(default)]
  pub is_draft: bool,
  #[serde(default)]
  pub is_prerelease: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub published_at: Option<DateTime<Utc>>,
}

/// Outcome of checking a candidate version against shipment history
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
  pub valid: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reason: Option<String>,
}

impl ValidationResult {
  pub fn ok() -> Self {
    ValidationResult {
      valid: true,
      reason: None,
    }
  }

  pub fn rejected(reason: impl Into<String>) -> Self {
    ValidationResult {
      valid: false,
      reason: Some(reason.into()),
    }
  }
}

/// Validate a candidate version against already-shipped releases.
///
/// The candidate must parse as a semantic version. Without history the
/// check is advisory and any syntactically valid version passes. With
/// history, the candidate is rejected if it is less than or equal to any
/// non-draft shipped version (drafts never shipped; prereleases did).
pub fn validate(version: &str, history: Option<&[ReleaseInfo]>) -> ValidationResult {
  if semver::Version::parse(version).is_err() {
    return ValidationResult::rejected(format!("'{}' is not a valid semantic version", version));
  }

  let Some(history) = history else {
    return ValidationResult::ok();
  };

  for release in history.iter().filter(|r| !r.is_draft) {
    let shipped = release.tag_name.trim().trim_start_matches('v');
    if semver::Version::parse(shipped).is_err() {
      // Tags that are not versions (nightly builds, odd manual tags)
      // carry no ordering information
      continue;
    }
    if compare(version, shipped) != Ordering::Greater {
      return ValidationResult::rejected(format!(
        "version {} is not ahead of already-shipped release {}",
        version, release.tag_name
      ));
    }
  }

  ValidationResult::ok()
}
