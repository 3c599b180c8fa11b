//! Shared building blocks for relver commands
//!
//! - **error**: Error types with exit codes, separating structural errors
//!   (corrupted state, malformed JSON) from policy rejections (invalid
//!   transitions, history conflicts)

pub mod error;
