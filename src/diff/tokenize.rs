/// Split text into whitespace-delimited words
///
/// Leading and trailing whitespace is ignored and runs of whitespace count as
/// a single separator, so the result never contains empty tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
