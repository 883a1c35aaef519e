use kar_core::status::{BadgeTone, Status};

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render a simple aligned table for string rows.
///
/// Cells under a `status` header are colored by their badge tone when
/// `options.color` is set.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let status_column = headers.iter().position(|header| *header == "status");
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
                .max(4)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| format_cell(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.chars().count());

    let row_lines = rows
        .iter()
        .map(|row| {
            widths
                .iter()
                .enumerate()
                .map(|(index, width)| {
                    let value = row.get(index).cloned().unwrap_or_else(|| "-".to_string());
                    let truncated = truncate_text(&value, *width);
                    let cell = format_cell(&truncated, *width, looks_numeric(&truncated));
                    if options.color && status_column == Some(index) {
                        colorize_status(&cell, &truncated)
                    } else {
                        cell
                    }
                })
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect::<Vec<_>>();

    let mut lines = Vec::with_capacity(2 + row_lines.len());
    lines.push(header_line);
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].len().max(4))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = widest else {
            break;
        };

        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
}

fn format_cell(value: &str, width: usize, numeric: bool) -> String {
    let pad = width.saturating_sub(value.chars().count());
    if numeric {
        format!("{}{}", " ".repeat(pad), value)
    } else {
        format!("{}{}", value, " ".repeat(pad))
    }
}

/// Wrap an already padded cell in the ANSI color of its status badge.
fn colorize_status(cell: &str, value: &str) -> String {
    let code = match Status::recognize(value).map(|status| status.badge().tone) {
        Some(BadgeTone::Success) => "32",
        Some(BadgeTone::Warning) => "33",
        Some(BadgeTone::Danger) => "31",
        Some(BadgeTone::Info) => "36",
        Some(BadgeTone::Neutral) | None => return cell.to_string(),
    };
    format!("\u{1b}[{code}m{cell}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn table_alignment_handles_mixed_widths() {
        let headers = ["id", "status", "vendor"];
        let rows = vec![
            vec!["po-1".to_string(), "draft".to_string(), "Shree".to_string()],
            vec![
                "po-200".to_string(),
                "partially_received".to_string(),
                "Bharat Castings".to_string(),
            ],
        ];

        let table = render_entity_table(&headers, &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("id"));
        assert!(lines[0].contains("status"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(!table.contains('\u{1b}'));
    }

    #[test]
    fn status_cells_take_badge_color() {
        let options = TableOptions {
            max_width: None,
            color: true,
        };
        let rows = vec![
            vec!["1".to_string(), "rejected".to_string(), "rejected".to_string()],
            vec!["2".to_string(), "draft".to_string(), "x".to_string()],
        ];
        let table = render_entity_table(&["id", "status", "note"], &rows, options);
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[2].contains("\u{1b}[31mrejected"));
        // Only the status column is colored; neutral tones stay plain.
        assert_eq!(lines[2].matches('\u{1b}').count(), 2);
        assert!(!lines[3].contains('\u{1b}'));
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let rows = vec![vec![
            "ind-1".to_string(),
            "a very long remark about the gear housing order".to_string(),
        ]];
        let options = TableOptions {
            max_width: Some(30),
            color: false,
        };
        let table = render_entity_table(&["id", "remarks"], &rows, options);
        let row = table.lines().nth(2).unwrap();
        assert!(row.chars().count() <= 30);
        assert!(row.ends_with('…'));
    }
}
