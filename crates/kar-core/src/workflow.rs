//! Status transitions per document kind.
//!
//! The backend owns every status change. These tables describe the usual
//! path so the client can warn about an unusual move; the move is still sent.
//!
//! ```text
//! indent:          draft → submitted → approved → completed
//!                                    → rejected → draft
//! purchase order:  draft → submitted → approved → partially_received → completed → closed
//!                                    → rejected   approved → completed
//! grn:             draft → submitted → approved | rejected
//! production:      planned → in_progress → qc → released → completed
//!                                           qc → in_progress (rework)
//! customer order:  draft → approved → in_progress → completed → closed
//!                        → rejected
//! ```

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CoreError;
use crate::status::Status;

/// Documents whose status follows a workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Indent,
    PurchaseOrder,
    Grn,
    Production,
    CustomerOrder,
}

impl DocumentKind {
    /// Valid next states from `from` for this document kind.
    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub const fn allowed_next(self, from: Status) -> &'static [Status] {
        use Status::{
            Approved, Closed, Completed, Draft, InProgress, PartiallyReceived, Planned, Qc,
            Rejected, Released, Submitted,
        };
        match (self, from) {
            (Self::Indent, Draft) => &[Submitted],
            (Self::Indent, Submitted) => &[Approved, Rejected],
            (Self::Indent, Approved) => &[Completed],
            (Self::Indent, Rejected) => &[Draft],

            (Self::PurchaseOrder, Draft) => &[Submitted],
            (Self::PurchaseOrder, Submitted) => &[Approved, Rejected],
            (Self::PurchaseOrder, Approved) => &[PartiallyReceived, Completed],
            (Self::PurchaseOrder, PartiallyReceived) => &[Completed],
            (Self::PurchaseOrder, Completed) => &[Closed],

            (Self::Grn, Draft) => &[Submitted],
            (Self::Grn, Submitted) => &[Approved, Rejected],

            (Self::Production, Planned) => &[InProgress],
            (Self::Production, InProgress) => &[Qc],
            (Self::Production, Qc) => &[Released, InProgress],
            (Self::Production, Released) => &[Completed],

            (Self::CustomerOrder, Draft) => &[Approved, Rejected],
            (Self::CustomerOrder, Approved) => &[InProgress],
            (Self::CustomerOrder, InProgress) => &[Completed],
            (Self::CustomerOrder, Completed) => &[Closed],

            _ => &[],
        }
    }

    /// Check whether moving from `from` to `to` is allowed.
    #[must_use]
    pub fn can_transition(self, from: Status, to: Status) -> bool {
        self.allowed_next(from).contains(&to)
    }

    /// Status a freshly created document starts in.
    #[must_use]
    pub const fn initial(self) -> Status {
        match self {
            Self::Production => Status::Planned,
            _ => Status::Draft,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Indent => "indent",
            Self::PurchaseOrder => "purchase_order",
            Self::Grn => "grn",
            Self::Production => "production",
            Self::CustomerOrder => "customer_order",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check a status change against the workflow table.
///
/// # Errors
///
/// Returns [`CoreError::InvalidTransition`] when `to` is not reachable from `from`.
pub fn check_transition(
    kind: DocumentKind,
    id: &str,
    from: Status,
    to: Status,
) -> Result<(), CoreError> {
    if kind.can_transition(from, to) {
        return Ok(());
    }
    Err(CoreError::InvalidTransition {
        kind: kind.to_string(),
        id: id.to_string(),
        from: from.to_string(),
        to: to.to_string(),
    })
}
