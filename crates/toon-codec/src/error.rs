use std::io;
use thiserror::Error;

/// Codec error. Decoder variants carry the 1-based source line number.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[cfg(feature = "json")]
    #[error("serde_json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid options: {0}")]
    InvalidOptions(String),

    #[error("line {line}: unexpected indentation: {message}")]
    UnexpectedIndentation { line: usize, message: String },

    #[error("line {line}: malformed array header: {message}")]
    MalformedHeader { line: usize, message: String },

    #[error("line {line}: row has {found} fields, header declares {expected}")]
    FieldCountMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: array declares {declared} elements, found {found}")]
    ArrayLengthMismatch {
        line: usize,
        declared: usize,
        found: usize,
    },

    #[error("line {line}: duplicate key `{key}`")]
    DuplicateKey { line: usize, key: String },

    #[error("line {line}: unterminated quoted string")]
    UnterminatedBlock { line: usize },

    #[error("line {line}: path expansion conflict at `{path}`")]
    AmbiguousPathExpansion { line: usize, path: String },
}

impl Error {
    /// Source line of a decode error, when the variant has one.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::UnexpectedIndentation { line, .. }
            | Error::MalformedHeader { line, .. }
            | Error::FieldCountMismatch { line, .. }
            | Error::ArrayLengthMismatch { line, .. }
            | Error::DuplicateKey { line, .. }
            | Error::UnterminatedBlock { line }
            | Error::AmbiguousPathExpansion { line, .. } => Some(*line),
            _ => None,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
