//! Cross-cutting error types for Karkhana.
//!
//! Transport and backend errors live in `kar-api`; auth errors in `kar-auth`.
//! The CLI converges all of them through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Karkhana crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A status change was requested that the document's workflow does not allow.
    #[error("Invalid status change: {kind} {id} from {from} to {to}")]
    InvalidTransition {
        kind: String,
        id: String,
        from: String,
        to: String,
    },

    /// A role name outside the known set.
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Input failed validation before being sent to the backend.
    #[error("Validation error: {0}")]
    Validation(String),
}
