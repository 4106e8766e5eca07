use super::types::{DiffKind, DiffToken};
use serde::Serialize;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    pub same_count: usize,
    pub added_count: usize,
    pub removed_count: usize,
    pub added_chars: usize,
    pub removed_chars: usize,
}

impl DiffStats {
    pub fn changed_count(&self) -> usize {
        self.added_count + self.removed_count
    }
}

/// Count words and characters on each side of a word diff
pub fn calculate_stats(tokens: &[DiffToken]) -> DiffStats {
    let mut stats = DiffStats::default();

    for token in tokens {
        match token.kind {
            DiffKind::Same => stats.same_count += 1,
            DiffKind::Add => {
                stats.added_count += 1;
                stats.added_chars += token.text.chars().count();
            }
            DiffKind::Remove => {
                stats.removed_count += 1;
                stats.removed_chars += token.text.chars().count();
            }
        }
    }

    stats
}

/// Check if a word diff contains any added or removed word
pub fn has_meaningful_changes(tokens: &[DiffToken]) -> bool {
    tokens.iter().any(|t| t.kind != DiffKind::Same)
}
