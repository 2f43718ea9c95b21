//! Error types that can be emitted from this library

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Every candidate file failed its format probe
    #[error("no candidate matched a recognized texture format")]
    UnrecognizedFormat,

    /// The byte source ended before the declared payload was read
    #[error("ran out of data at offset {offset:#x}")]
    OutOfData { offset: u64 },

    /// A fixed header field held a structurally impossible value
    #[error("invalid texture container header")]
    InvalidHeader,

    /// The DDS pixel format is outside the closed set this decoder supports
    #[error("unsupported DDS pixel format")]
    UnsupportedPixelFormat,

    /// The TGA image type is not one of the uncompressed forms the engine
    /// ships
    #[error("unsupported TGA image type {0}")]
    UnsupportedImageType(u8),

    /// Transparent wrapper for [`binrw::Error`]
    #[error(transparent)]
    BinRWError(#[from] binrw::Error),

    /// Transparent wrapper for [`image::ImageError`]
    #[error(transparent)]
    ImageError(#[from] image::ImageError),

    /// Transparent wrapper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
