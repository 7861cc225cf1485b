//! Error types for reclist scanning and writing.
//!
//! The reclist format is lenient: malformed headers, keys without values,
//! stray `@` signs and unterminated quotes are normalized or dropped while
//! scanning and never show up here. The only failures are faults of the
//! underlying reader or sink, plus invalid UTF-8 in the input.
//!
//! ## Examples
//!
//! ```rust
//! use reclist::Error;
//!
//! let err = Error::read(12, "connection reset");
//! assert_eq!(err.line(), Some(12));
//! assert!(err.to_string().contains("line 12"));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors reported by a [`Scanner`](crate::Scanner)
/// or a [`Writer`](crate::Writer).
///
/// Errors are `Clone` so that a scanner or writer can keep the fault that
/// stopped it and report it again on later calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The underlying reader failed.
    #[error("reclist: read error at line {line}: {msg}")]
    Read { line: usize, msg: String },

    /// The input is not valid UTF-8.
    #[error("reclist: invalid UTF-8 at line {line}: {msg}")]
    Encoding { line: usize, msg: String },

    /// The underlying sink failed.
    #[error("reclist: write error: {0}")]
    Write(String),

    /// Custom error
    #[error("reclist: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a read error for the given input line.
    pub fn read<T: fmt::Display>(line: usize, msg: T) -> Self {
        Error::Read {
            line,
            msg: msg.to_string(),
        }
    }

    /// Creates an encoding error for the given input line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reclist::Error;
    ///
    /// let err = Error::encoding(3, "unexpected byte 0xff");
    /// assert!(err.to_string().contains("invalid UTF-8"));
    /// ```
    pub fn encoding<T: fmt::Display>(line: usize, msg: T) -> Self {
        Error::Encoding {
            line,
            msg: msg.to_string(),
        }
    }

    /// Creates a write error.
    pub fn write<T: fmt::Display>(msg: T) -> Self {
        Error::Write(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns the input line the error refers to, if any.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Read { line, .. } | Error::Encoding { line, .. } => Some(*line),
            Error::Write(_) | Error::Custom(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
