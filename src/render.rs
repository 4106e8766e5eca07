//! Text and JSON output for word and line diffs

use crate::config::Markers;
use crate::diff::{DiffKind, DiffStats, DiffToken, LineRow};

/// Render a word diff on one line with inline markers
///
/// Neighbouring tokens of the same changed kind share a marker pair, e.g.
/// `keep [-old words-] {+new+} keep`.
pub fn render_plain(tokens: &[DiffToken], markers: &Markers) -> String {
    let mut out = String::new();
    let mut open: Option<DiffKind> = None;

    for (idx, token) in tokens.iter().enumerate() {
        if open.is_some_and(|kind| kind != token.kind) {
            close_marker(&mut out, open.take(), markers);
        }
        if idx > 0 {
            out.push(' ');
        }
        if open.is_none() {
            match token.kind {
                DiffKind::Add => out.push_str(&markers.add_open),
                DiffKind::Remove => out.push_str(&markers.remove_open),
                DiffKind::Same => {}
            }
            if token.kind != DiffKind::Same {
                open = Some(token.kind);
            }
        }
        out.push_str(&token.text);
    }
    close_marker(&mut out, open, markers);

    out
}

fn close_marker(out: &mut String, kind: Option<DiffKind>, markers: &Markers) {
    match kind {
        Some(DiffKind::Add) => out.push_str(&markers.add_close),
        Some(DiffKind::Remove) => out.push_str(&markers.remove_close),
        Some(DiffKind::Same) | None => {}
    }
}

/// Render a word diff as a JSON array of `{ "text", "kind" }` objects
pub fn render_json(tokens: &[DiffToken]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(tokens)
}

/// Render a line diff, one prefixed line per source line
///
/// Changed rows are followed by a `~ ` line holding their inline word diff.
pub fn render_rows_plain(rows: &[LineRow], markers: &Markers) -> String {
    let mut lines = Vec::new();

    for row in rows {
        match row {
            LineRow::Unchanged { line } => lines.push(format!("  {}", line)),
            LineRow::Changed {
                removed,
                added,
                words,
            } => {
                lines.extend(removed.iter().map(|l| format!("- {}", l)));
                lines.extend(added.iter().map(|l| format!("+ {}", l)));
                if !removed.is_empty() && !added.is_empty() {
                    lines.push(format!("~ {}", render_plain(words, markers)));
                }
            }
        }
    }

    lines.join("\n")
}

pub fn render_rows_json(rows: &[LineRow]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(rows)
}

pub fn render_stats(stats: &DiffStats) -> String {
    format!(
        "{} unchanged, {} added ({} chars), {} removed ({} chars)",
        stats.same_count,
        stats.added_count,
        stats.added_chars,
        stats.removed_count,
        stats.removed_chars
    )
}
