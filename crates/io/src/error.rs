use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum IoError {
    /// Sighting or signature source cannot be opened or read.
    InputUnavailable { path: PathBuf, reason: String },
    /// Result destination cannot be opened or written.
    OutputUnavailable { path: PathBuf, reason: String },
}

impl IoError {
    pub fn path(&self) -> &Path {
        match self {
            Self::InputUnavailable { path, .. } | Self::OutputUnavailable { path, .. } => path,
        }
    }
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputUnavailable { path, reason } => {
                write!(f, "cannot open file {}: {reason}", path.display())
            }
            Self::OutputUnavailable { path, reason } => {
                write!(f, "cannot open output file {}: {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for IoError {}
