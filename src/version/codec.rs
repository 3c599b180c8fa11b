//! Encoding and decoding of the persisted version state
//!
//! State persists as a single marker line embedded in free-form text (a
//! release-note body owned by the hosting provider). The canonical form is
//!
//! ```text
//! <!-- relver-state: 1.2.0|rc|2|7|none -->
//! ```
//!
//! with five `|`-delimited fields: base, phase, phase number, dev number,
//! pending. A legacy form from before the rc phase existed is still
//! readable:
//!
//! ```text
//! <!-- release-stage: 1.2.0|pre|2|7 -->
//! ```
//!
//! Legacy payloads have four or five fields, name the lifecycle position a
//! "stage", and know only the pre and rtm stages. Both forms feed the same
//! canonical [`VersionState`]; the two parsers are explicit variants, not a
//! regex fallback chain, so the migration concern stays in one place.

use crate::core::error::{DecodeError, RelverResult};
use crate::version::compare::compare;
use crate::version::history::ReleaseInfo;
use crate::version::state::{Pending, Phase, VersionState, next_base};
use semver::Version;
use std::cmp::Ordering;

const CANONICAL_MARKER: &str = "<!-- relver-state:";
const LEGACY_MARKER: &str = "<!-- release-stage:";
const MARKER_END: &str = "-->";

/// Which encoding a blob was decoded from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
  Canonical,
  Legacy,
}

/// A successfully decoded state plus the encoding it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
  pub state: VersionState,
  pub encoding: Encoding,
}

/// Encode a state as its canonical marker line
pub fn encode(state: &VersionState) -> String {
  format!(
    "{} {}|{}|{}|{}|{} {}",
    CANONICAL_MARKER, state.base, state.phase, state.phase_number, state.dev_number, state.pending, MARKER_END
  )
}

/// Decode a state from free-form text containing a marker line.
///
/// The canonical marker wins when both are present (a migrated note may
/// still carry the old line). Fails with [`DecodeError::MarkerNotFound`]
/// when neither marker exists: the caller explicitly provided text to
/// parse, so fabricating a fresh state here would hide corruption.
pub fn decode(text: &str) -> RelverResult<Decoded> {
  if let Some(payload) = extract_payload(text, CANONICAL_MARKER) {
    return Ok(Decoded {
      state: parse_canonical(payload)?,
      encoding: Encoding::Canonical,
    });
  }

  if let Some(payload) = extract_payload(text, LEGACY_MARKER) {
    return Ok(Decoded {
      state: parse_legacy(payload)?,
      encoding: Encoding::Legacy,
    });
  }

  Err(DecodeError::MarkerNotFound.into())
}

/// Derive a fresh state from release history when no persisted blob exists.
///
/// Picks the highest stable (non-draft, non-prerelease) tag whose name
/// parses as a version and starts a new pre.1 iteration one base increment
/// ahead of it. Returns the release the state was derived from, if any;
/// with no stable release at all the state falls back to
/// [`VersionState::initial`].
pub fn state_from_history(history: &[ReleaseInfo]) -> (VersionState, Option<ReleaseInfo>) {
  let mut latest: Option<(Version, &ReleaseInfo)> = None;

  for release in history.iter().filter(|r| !r.is_draft && !r.is_prerelease) {
    let tag = release.tag_name.trim().trim_start_matches('v');
    let Ok(version) = Version::parse(tag) else {
      continue;
    };
    if !version.pre.is_empty() {
      continue;
    }
    let is_higher = match &latest {
      Some((current, _)) => compare(tag, &current.to_string()) == Ordering::Greater,
      None => true,
    };
    if is_higher {
      latest = Some((version, release));
    }
  }

  match latest {
    Some((version, release)) => {
      let state = VersionState {
        base: next_base(&version),
        phase: Phase::Pre,
        phase_number: 1,
        dev_number: 0,
        pending: Pending::None,
      };
      (state, Some(release.clone()))
    }
    None => (VersionState::initial(), None),
  }
}

/// Find a marker in the text and slice out its field payload
fn extract_payload<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
  let start = text.find(marker)? + marker.len();
  let rest = &text[start..];
  let end = rest.find(MARKER_END)?;
  Some(rest[..end].trim())
}

/// Canonical payload: base|phase|phaseNumber|devNumber|pending
fn parse_canonical(payload: &str) -> RelverResult<VersionState> {
  let fields: Vec<&str> = payload.split('|').map(str::trim).collect();
  if fields.len() != 5 {
    return Err(
      DecodeError::MalformedState {
        reason: format!("expected 5 fields, got {}", fields.len()),
      }
      .into(),
    );
  }

  let base = parse_base(fields[0])?;
  let phase = Phase::parse(fields[1]).ok_or_else(|| DecodeError::UnknownPhase {
    value: fields[1].to_string(),
  })?;
  let phase_number = parse_number(fields[2], "phase number")?;
  let dev_number = parse_number(fields[3], "dev number")?;
  let pending = Pending::parse(fields[4]).ok_or_else(|| DecodeError::UnknownPending {
    value: fields[4].to_string(),
  })?;

  // The canonical writer always keeps this invariant; a violation means
  // the blob was edited by hand and cannot be trusted
  if (phase == Phase::Rtm) != (phase_number == 0) {
    return Err(
      DecodeError::MalformedState {
        reason: format!("phase {} is inconsistent with phase number {}", phase, phase_number),
      }
      .into(),
    );
  }

  Ok(VersionState {
    base,
    phase,
    phase_number,
    dev_number,
    pending,
  })
}

/// Legacy payload: base|stage|iteration|dev with an optional fifth pending
/// field. Stages were only pre and rtm; the iteration number was written
/// even for rtm and is forced back to 0 here.
fn parse_legacy(payload: &str) -> RelverResult<VersionState> {
  let fields: Vec<&str> = payload.split('|').map(str::trim).collect();
  if fields.len() != 4 && fields.len() != 5 {
    return Err(
      DecodeError::MalformedState {
        reason: format!("expected 4 or 5 legacy fields, got {}", fields.len()),
      }
      .into(),
    );
  }

  let base = parse_base(fields[0])?;
  let stage = fields[1];
  let phase = match stage {
    "pre" => Phase::Pre,
    "rtm" => Phase::Rtm,
    other => {
      return Err(
        DecodeError::UnknownPhase {
          value: other.to_string(),
        }
        .into(),
      );
    }
  };
  let iteration = parse_number(fields[2], "stage iteration")?;
  let dev_number = parse_number(fields[3], "dev number")?;
  let pending = match fields.get(4) {
    Some(raw) => Pending::parse(raw).ok_or_else(|| DecodeError::UnknownPending { value: raw.to_string() })?,
    None => Pending::None,
  };

  Ok(VersionState {
    base,
    phase,
    phase_number: if phase == Phase::Rtm { 0 } else { iteration },
    dev_number,
    pending,
  })
}

fn parse_base(raw: &str) -> RelverResult<Version> {
  let version = Version::parse(raw).map_err(|e| DecodeError::MalformedState {
    reason: format!("invalid base version '{}': {}", raw, e),
  })?;
  if !version.pre.is_empty() || !version.build.is_empty() {
    return Err(
      DecodeError::MalformedState {
        reason: format!("base version '{}' must be a bare major.minor.patch triple", raw),
      }
      .into(),
    );
  }
  Ok(version)
}

fn parse_number(raw: &str, what: &str) -> RelverResult<u32> {
  raw
    .parse()
    .map_err(|_| {
      DecodeError::MalformedState {
        reason: format!("invalid {} '{}'", what, raw),
      }
      .into()
    })
}
