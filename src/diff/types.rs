use serde::{Deserialize, Serialize};

/// Whether a word is kept, inserted or deleted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    Same,
    Add,
    Remove,
}

/// One word of the merged edit script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffToken {
    pub text: String,
    pub kind: DiffKind,
}

impl DiffToken {
    pub fn new(text: impl Into<String>, kind: DiffKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn same(text: impl Into<String>) -> Self {
        Self::new(text, DiffKind::Same)
    }

    pub fn add(text: impl Into<String>) -> Self {
        Self::new(text, DiffKind::Add)
    }

    pub fn remove(text: impl Into<String>) -> Self {
        Self::new(text, DiffKind::Remove)
    }
}

/// A run of word tokens, either unchanged or replaced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DiffChunk {
    Same { words: Vec<String> },
    Replace { removed: Vec<String>, added: Vec<String> },
}

/// Whether a line is kept, inserted or deleted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffLineType {
    Added,
    Removed,
    Unchanged,
}

/// One line of a line diff, without its line terminator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLine {
    pub line_type: DiffLineType,
    pub content: String,
}

/// A line diff row: an unchanged line, or a removed block paired with the
/// added block after it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LineRow {
    Unchanged {
        line: String,
    },
    Changed {
        removed: Vec<String>,
        added: Vec<String>,
        /// Word diff between the removed and the added block
        words: Vec<DiffToken>,
    },
}
