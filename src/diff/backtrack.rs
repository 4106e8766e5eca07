use super::matrix::LcsTable;
use super::types::DiffToken;

/// Walk the LCS table from (m, n) back to (0, 0) and emit the edit script
///
/// At a tie between adding from `updated` and removing from `original` the
/// walk takes the add step (`>=`). The output order depends on this rule.
pub fn backtrack(original: &[&str], updated: &[&str], table: &LcsTable) -> Vec<DiffToken> {
    let mut i = original.len();
    let mut j = updated.len();
    let mut result = Vec::with_capacity(i + j);

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && original[i - 1] == updated[j - 1] {
            result.push(DiffToken::same(original[i - 1]));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
            result.push(DiffToken::add(updated[j - 1]));
            j -= 1;
        } else {
            result.push(DiffToken::remove(original[i - 1]));
            i -= 1;
        }
    }

    // collected end-to-start
    result.reverse();
    result
}
