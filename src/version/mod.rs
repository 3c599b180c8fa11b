//! Release version state machine
//!
//! Tracks a package's release lifecycle across development iterations,
//! release-candidate phases, and final shipment, and derives concrete
//! version identifiers for every build.
//!
//! # Core Invariants
//!
//! 1. **Shipped versions never decrease or repeat**
//!    - Every shippable version must clear the shipment history check
//!    - Package-manager ordering guarantees depend on it
//!
//! 2. **Retries resume at the same target version**
//!    - `calculate` is a pure function of the state; a crashed publish that
//!      retries against the unchanged state lands on the same version
//!
//! 3. **Phases move forward unless a base bump accompanies the move**
//!    - pre < rc < rtm; `bump` enforces the ordering
//!
//! 4. **State is parameter-in, value-out**
//!    - No caches, no I/O, no shared mutable state; the caller owns
//!      persistence and serializes concurrent release attempts
//!
//! # Architecture
//!
//! - **compare**: version-string ordering everything else leans on
//! - **state**: the persisted `VersionState` entity
//! - **codec**: marker-line encoding, legacy decoding, history bootstrap
//! - **calculate**: dev and shippable version derivation per build
//! - **advance**: state progression after a confirmed shipment
//! - **bump**: operator-requested base bumps and phase transitions
//! - **history**: monotonicity validation against shipped releases

pub mod advance;
pub mod bump;
pub mod calculate;
pub mod codec;
pub mod compare;
pub mod history;
pub mod state;

pub use advance::advance;
pub use bump::{BumpKind, BumpResult, bump};
pub use calculate::{CalculatedVersions, calculate, shippable_version};
pub use codec::{Decoded, Encoding, decode, encode, state_from_history};
pub use compare::compare;
pub use history::{ReleaseInfo, ValidationResult, validate};
pub use state::{Pending, Phase, VersionState, next_base};
