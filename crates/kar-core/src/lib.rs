//! # kar-core
//!
//! Core types shared by every Karkhana crate.
//!
//! - Record structs for each backend resource (indents, purchase orders, GRNs, ...)
//! - The shared status vocabulary and its badge lookup
//! - Per-document workflow transitions
//! - Roles and the page areas they may open
//! - List parameters and paginated envelopes
//! - Client-side indent cost derivation
//! - Cross-cutting error types

pub mod costing;
pub mod entities;
pub mod errors;
pub mod pagination;
pub mod roles;
pub mod status;
pub mod workflow;

pub use errors::CoreError;
pub use status::Status;
