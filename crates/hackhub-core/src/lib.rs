//! Shared core types for hackhub.
//!
//! Provides the strongly typed identifiers used across the workspace.

mod ids;

pub use ids::{ParseIdError, SessionId, UserId};
