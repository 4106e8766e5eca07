use super::compute_word_diff;
use super::types::{DiffLine, DiffLineType, LineRow};
use similar::{ChangeTag, TextDiff};

/// Compute line-based diff between old and new text
pub fn compute_line_diff(old: &str, new: &str) -> Vec<DiffLine> {
    let diff = TextDiff::from_lines(old, new);

    diff.iter_all_changes()
        .map(|change| {
            let line_type = match change.tag() {
                ChangeTag::Delete => DiffLineType::Removed,
                ChangeTag::Insert => DiffLineType::Added,
                ChangeTag::Equal => DiffLineType::Unchanged,
            };
            DiffLine {
                line_type,
                content: change
                    .to_string()
                    .trim_end_matches(['\n', '\r'])
                    .to_string(),
            }
        })
        .collect()
}

/// Group raw diff lines into rows where unchanged lines are single rows,
/// and a removed block plus the added block right after it become one
/// changed row carrying the word diff between the two blocks.
pub fn group_into_rows(diff_lines: &[DiffLine]) -> Vec<LineRow> {
    let mut rows = Vec::new();
    let mut i = 0usize;

    while i < diff_lines.len() {
        if diff_lines[i].line_type == DiffLineType::Unchanged {
            rows.push(LineRow::Unchanged {
                line: diff_lines[i].content.clone(),
            });
            i += 1;
            continue;
        }

        let mut removed = Vec::new();
        while i < diff_lines.len() && diff_lines[i].line_type == DiffLineType::Removed {
            removed.push(diff_lines[i].content.clone());
            i += 1;
        }

        let mut added = Vec::new();
        while i < diff_lines.len() && diff_lines[i].line_type == DiffLineType::Added {
            added.push(diff_lines[i].content.clone());
            i += 1;
        }

        let words = compute_word_diff(&removed.join("\n"), &added.join("\n"));
        rows.push(LineRow::Changed {
            removed,
            added,
            words,
        });
    }

    rows
}
