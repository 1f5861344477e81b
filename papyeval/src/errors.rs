//! Definition of errors.

use std::error::Error;
use std::fmt;

pub type Result<T, E = PapyevalError> = std::result::Result<T, E>;

#[derive(Debug)]
pub enum PapyevalError {
    InvalidArgument(InvalidArgumentError),
    Corpus(CorpusError),
    JsonError(serde_json::Error),
    IOError(std::io::Error),
}

impl PapyevalError {
    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }
}

impl fmt::Display for PapyevalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidArgument(e) => e.fmt(f),
            Self::Corpus(e) => e.fmt(f),
            Self::JsonError(e) => e.fmt(f),
            Self::IOError(e) => e.fmt(f),
        }
    }
}

impl Error for PapyevalError {}

/// Error used when the argument is invalid.
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// Name of the argument.
    pub(crate) arg: &'static str,

    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

/// Error used when a corpus query fails.
///
/// Carries everything needed to report the failed query: the operation that
/// issued it, the SQL text and the bound parameters.
#[derive(Debug)]
pub struct CorpusError {
    /// Name of the failed operation.
    pub operation: &'static str,

    /// SQL text of the query.
    pub sql: String,

    /// Bound parameters, rendered for display.
    pub params: String,

    /// Error message reported by the database driver.
    pub msg: String,
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "CorpusError in {}: {}\n Sql: {}\n Params: {}",
            self.operation,
            self.msg,
            self.sql.trim(),
            self.params
        )
    }
}

impl Error for CorpusError {}

impl From<CorpusError> for PapyevalError {
    fn from(error: CorpusError) -> Self {
        Self::Corpus(error)
    }
}

impl From<serde_json::Error> for PapyevalError {
    fn from(error: serde_json::Error) -> Self {
        Self::JsonError(error)
    }
}

impl From<std::io::Error> for PapyevalError {
    fn from(error: std::io::Error) -> Self {
        Self::IOError(error)
    }
}
