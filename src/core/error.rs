//! Error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum XrefError {
    /// A word list could not be read. Fatal: nothing is scanned.
    #[error("couldn't open dictionary file {}", path.display())]
    Dictionary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A target file could not be read. The file is skipped.
    #[error("couldn't open file {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A target file failed partway through. Tokens from the lines before
    /// `line` stay in the index.
    #[error("couldn't read file {} past line {line}", path.display())]
    ReadFailed {
        path: PathBuf,
        line: u32,
        #[source]
        source: io::Error,
    },

    /// The list of targets on stdin could not be read.
    #[error("couldn't read file names from stdin")]
    StdinList(#[source] io::Error),
}

impl XrefError {
    /// Whether scanning can carry on after this error
    #[cfg(test)]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            XrefError::Unreadable { .. } | XrefError::ReadFailed { .. }
        )
    }
}
