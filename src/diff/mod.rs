mod backtrack;
mod group;
mod lines;
mod matrix;
mod stats;
mod tokenize;
mod types;

use tracing::debug;

// Re-export public types
pub use backtrack::backtrack;
pub use group::group_into_chunks;
pub use lines::{compute_line_diff, group_into_rows};
pub use matrix::LcsTable;
pub use stats::{DiffStats, calculate_stats, has_meaningful_changes};
pub use tokenize::tokenize;
pub use types::{DiffChunk, DiffKind, DiffLine, DiffLineType, DiffToken, LineRow};

/// Compute the word-level diff between two texts
///
/// Both inputs are split on whitespace and aligned on their longest common
/// subsequence of words. Never fails; empty inputs give empty or one-sided
/// results.
pub fn compute_word_diff(original: &str, updated: &str) -> Vec<DiffToken> {
    let a = tokenize(original);
    let b = tokenize(updated);
    debug!("Word diff of {} vs {} tokens", a.len(), b.len());

    let table = LcsTable::build(&a, &b);
    backtrack(&a, &b, &table)
}
