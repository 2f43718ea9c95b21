//! Error types that can be emitted from this library

use miette::Diagnostic;
use thiserror::Error;

use crate::types::BehaviorKind;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// The version tag at the start of a record is not one this decoder
    /// supports for the given behavior kind
    #[error("unsupported version {version} for behavior kind {kind:?}")]
    UnsupportedVersion { kind: BehaviorKind, version: u32 },

    /// A sentinel word did not hold the expected constant
    #[error("sentinel mismatch at offset {offset:#x}: expected {expected:#x}, found {actual:#x}")]
    SentinelMismatch {
        offset: u64,
        expected: u32,
        actual: u32,
    },

    /// Transparent wrapper for [`sage_io::error::Error`]
    #[error(transparent)]
    Stream(#[from] sage_io::error::Error),
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
