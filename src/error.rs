//! Error types for mdtree.
//!
//! Every fallible operation returns [`TreeResult<T>`]. Errors are never
//! recovered from locally: an unreadable entry aborts the whole build.

use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// The root or a directory below it could not be inspected or listed.
    #[error("cannot access '{}': {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The destination could not be opened or written.
    #[error("error writing {destination}: {source}")]
    Io {
        destination: String,
        #[source]
        source: io::Error,
    },
}

impl TreeError {
    pub fn filesystem(path: &Path, source: io::Error) -> Self {
        Self::Filesystem {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn io(destination: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            destination: destination.into(),
            source,
        }
    }

    /// Kind of the underlying I/O failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::Filesystem { source, .. } | Self::Io { source, .. } => source.kind(),
        }
    }
}

pub type TreeResult<T> = Result<T, TreeError>;
