//! The shared status vocabulary and its badge lookup.
//!
//! Every document the backend returns carries a status drawn from one closed
//! vocabulary. The backend is not consistent about spelling (`in-progress`,
//! `in_process`, `In Progress`), so all inbound values go through
//! [`Status::normalize`] and outbound values always use the canonical token.
//! Unrecognized values fall back to [`Status::Draft`].

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical document status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Draft,
    Submitted,
    Approved,
    Rejected,
    InProgress,
    Completed,
    Planned,
    Qc,
    Released,
    PartiallyReceived,
    Closed,
}

/// Visual tone of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

impl BadgeTone {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

impl fmt::Display for BadgeTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display label and tone for a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct Badge {
    pub label: &'static str,
    pub tone: BadgeTone,
}

impl Status {
    /// Every status in the vocabulary, in lifecycle order.
    pub const ALL: [Self; 11] = [
        Self::Draft,
        Self::Submitted,
        Self::Approved,
        Self::Rejected,
        Self::InProgress,
        Self::Completed,
        Self::Planned,
        Self::Qc,
        Self::Released,
        Self::PartiallyReceived,
        Self::Closed,
    ];

    /// Map any recognized spelling to its canonical status.
    ///
    /// Matching ignores case and surrounding whitespace and treats `-` and
    /// spaces as `_`. Anything unrecognized, including the empty string, is
    /// [`Status::Draft`].
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        Self::recognize(raw).unwrap_or_default()
    }

    /// Like [`Status::normalize`], but `None` for an unrecognized spelling.
    #[must_use]
    pub fn recognize(raw: &str) -> Option<Self> {
        let key = raw.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        let status = match key.as_str() {
            "draft" => Self::Draft,
            "submitted" | "submit" | "pending_approval" => Self::Submitted,
            "approved" | "approve" => Self::Approved,
            "rejected" | "reject" => Self::Rejected,
            "in_progress" | "in_process" | "inprogress" | "processing" => Self::InProgress,
            "completed" | "complete" | "done" => Self::Completed,
            "planned" | "scheduled" => Self::Planned,
            "qc" | "quality_check" | "in_qc" => Self::Qc,
            "released" | "release" => Self::Released,
            "partially_received" | "partial" | "partially_receive" => Self::PartiallyReceived,
            "closed" | "close" => Self::Closed,
            _ => return None,
        };
        Some(status)
    }

    /// Canonical wire token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Planned => "planned",
            Self::Qc => "qc",
            Self::Released => "released",
            Self::PartiallyReceived => "partially_received",
            Self::Closed => "closed",
        }
    }

    /// Badge lookup used wherever a status is rendered.
    #[must_use]
    pub const fn badge(self) -> Badge {
        let (label, tone) = match self {
            Self::Draft => ("Draft", BadgeTone::Neutral),
            Self::Submitted => ("Submitted", BadgeTone::Info),
            Self::Approved => ("Approved", BadgeTone::Success),
            Self::Rejected => ("Rejected", BadgeTone::Danger),
            Self::InProgress => ("In Progress", BadgeTone::Warning),
            Self::Completed => ("Completed", BadgeTone::Success),
            Self::Planned => ("Planned", BadgeTone::Info),
            Self::Qc => ("QC", BadgeTone::Warning),
            Self::Released => ("Released", BadgeTone::Success),
            Self::PartiallyReceived => ("Partially Received", BadgeTone::Warning),
            Self::Closed => ("Closed", BadgeTone::Neutral),
        };
        Badge { label, tone }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::normalize(s))
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map_or(Self::Draft, Self::normalize))
    }
}
