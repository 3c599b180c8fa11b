//! State command: decode or derive the persisted version state

use crate::core::error::RelverResult;
use crate::utils::{read_history, read_input};
use crate::version::{Encoding, VersionState, decode, encode, state_from_history};
use serde::Serialize;

/// JSON payload printed by `relver state`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StateOutput {
  state: VersionState,
  /// Canonical marker line ready to embed in a release-note body
  encoded: String,
}

/// Run the state command.
///
/// Resolution order: explicit notes text (must contain a marker), then
/// release history (highest stable tag plus one increment), then the fixed
/// initial state.
pub fn run_state(notes: Option<String>, history: Option<String>) -> RelverResult<()> {
  let state = if let Some(notes_path) = notes {
    let text = read_input(&notes_path)?;
    let decoded = decode(&text)?;
    if decoded.encoding == Encoding::Legacy {
      eprintln!("ℹ️  Decoded a legacy stage encoding; re-persist the encoded line below to migrate");
    }
    decoded.state
  } else if let Some(history) = read_history(history.as_deref())? {
    let (state, source) = state_from_history(&history);
    match source {
      Some(release) => {
        let published = release
          .published_at
          .map(|d| format!(" published {}", d.format("%Y-%m-%d")))
          .unwrap_or_default();
        eprintln!(
          "ℹ️  Derived from latest stable release {}{}",
          release.tag_name, published
        );
      }
      None => eprintln!("ℹ️  No stable release in history; starting at {}", state.base),
    }
    state
  } else {
    let state = VersionState::initial();
    eprintln!("ℹ️  No state or history supplied; starting at {}-pre.1", state.base);
    state
  };

  let encoded = encode(&state);
  super::print_json(&StateOutput { state, encoded })
}
