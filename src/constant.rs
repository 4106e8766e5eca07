/// Application name and metadata constants
pub const APP_NAME: &str = "word-diff";

/// Default inline markers
pub const DEFAULT_ADD_OPEN: &str = "{+";
pub const DEFAULT_ADD_CLOSE: &str = "+}";
pub const DEFAULT_REMOVE_OPEN: &str = "[-";
pub const DEFAULT_REMOVE_CLOSE: &str = "-]";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Diff related Magic Numbers
// Above this many alignment cells the quadratic table gets noticeably slow.
pub const LARGE_TABLE_CELLS: usize = 4_000_000;
