use std::path::PathBuf;

use thiserror::Error;

use crate::model::NoteName;

#[derive(Debug, Error)]
pub enum Error {
    /// A chord or note token does not follow the chord grammar.
    #[error("cannot parse {token:?}: {reason}")]
    Parse { token: String, reason: String },

    /// Two sections of an instrument file name the same pitch class.
    #[error("duplicate section [{section}] at line {line}: already seen a section for {first}")]
    DuplicateSection {
        section: String,
        first: NoteName,
        line: usize,
    },

    /// A digit run in a chord name has no spelled-out LaTeX equivalent.
    #[error("no spelled-out name for number {0:?}")]
    KeyLookup(String),

    #[error("invalid finger positions {value:?} for chord {chord} at line {line}")]
    InvalidFingering {
        chord: String,
        value: String,
        line: usize,
    },

    #[error("syntax error at line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("no line matching {0:?} found")]
    MarkerNotFound(String),

    #[error("chords per line must be at least 1")]
    InvalidBatchSize,

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn parse(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            token: token.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
