//! Error types that can be emitted from this library

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// File does not start with the GENREP magic
    #[error("file is not a GENREP replay")]
    InvalidReplay,

    /// The stream ended before a single chunk was decoded
    #[error("replay contains no chunks")]
    EmptyReplay,

    /// The header's timecode total does not match the final chunk
    #[error("timecode mismatch: header declares {expected}, last chunk is {actual}")]
    TimecodeMismatch { expected: u32, actual: u32 },

    /// A chunk's argument table referenced a type this decoder does not know
    #[error("unknown order argument type {tag} at offset {offset:#x}")]
    UnknownArgumentType { tag: u8, offset: u64 },

    /// Transparent wrapper for [`std::string::FromUtf16Error`]
    #[error(transparent)]
    Utf16Error(#[from] std::string::FromUtf16Error),

    /// Transparent wrapper for [`sage_io::error::Error`]
    #[error(transparent)]
    Stream(#[from] sage_io::error::Error),

    /// Transparent wrapper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
