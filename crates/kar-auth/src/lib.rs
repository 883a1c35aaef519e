//! # kar-auth
//!
//! Sign-in session handling for the Karkhana CLI.
//!
//! Persists the bearer token (OS keychain, `KARKHANA_AUTH__TOKEN`, or a
//! private credentials file) together with the signed-in user's profile,
//! reads JWT expiry without verifying signatures, and guards each area by
//! the user's role.

pub mod error;
pub mod expiry;
pub mod guard;
pub mod session;

pub use error::AuthError;
pub use guard::{accessible_areas, require};
pub use session::{Session, SessionStore, TOKEN_ENV_VAR, TokenSource};
