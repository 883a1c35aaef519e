use kar_core::status::{BadgeTone, Status};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StatusCommands;
use crate::output::output;

#[derive(Debug, Serialize, PartialEq, Eq)]
struct StatusView {
    input: String,
    status: Status,
    recognized: bool,
    label: &'static str,
    tone: BadgeTone,
}

impl StatusView {
    fn of(raw: &str) -> Self {
        let status = Status::normalize(raw);
        let badge = status.badge();
        Self {
            input: raw.to_string(),
            status,
            recognized: Status::recognize(raw).is_some(),
            label: badge.label,
            tone: badge.tone,
        }
    }
}

/// Handle `kar status`. Works offline.
pub fn handle(action: &StatusCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        StatusCommands::Normalize { raw } => output(&StatusView::of(raw), flags.format),
        StatusCommands::List => {
            let all: Vec<StatusView> = Status::ALL
                .iter()
                .map(|status| StatusView::of(status.as_str()))
                .collect();
            output(&all, flags.format)
        }
    }
}
