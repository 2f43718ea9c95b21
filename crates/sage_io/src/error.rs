//! Error types that can be emitted from this library

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// The byte source ended before the requested read completed
    #[error("ran out of data at offset {offset:#x}")]
    OutOfData {
        /// Last valid offset before the failed read
        offset: u64,
    },

    /// A boolean byte held a value other than 0 or 1
    #[error("invalid boolean value {value:#x} at offset {offset:#x}")]
    InvalidBoolean { offset: u64, value: u8 },

    /// Transparent wrapper for [`std::string::FromUtf8Error`]
    #[error(transparent)]
    Utf8Error(#[from] std::string::FromUtf8Error),

    /// Transparent wrapper for [`std::io::Error`]
    #[error(transparent)]
    IOError(std::io::Error),
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
