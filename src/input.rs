use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The two texts being compared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPair {
    pub original: String,
    pub updated: String,
}

impl InputPair {
    /// Resolve the positional arguments, reading them as files unless
    /// `literal` is set
    pub fn from_args(original: &str, updated: &str, literal: bool) -> Result<Self, InputError> {
        if literal {
            return Ok(Self {
                original: original.to_string(),
                updated: updated.to_string(),
            });
        }

        Ok(Self {
            original: load_text(Path::new(original))?,
            updated: load_text(Path::new(updated))?,
        })
    }
}

/// Read a UTF-8 text file
pub fn load_text(path: &Path) -> Result<String, InputError> {
    let content = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {:?}", content.len(), path);
    Ok(content)
}
