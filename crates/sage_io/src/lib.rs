//! This library provides the sequential binary reader shared by the SAGE
//! format crates.
//!
//! All of the formats produced by the *SAGE* engine (save-game state, `GENREP`
//! replays, texture containers) are forward-only byte streams. This crate
//! wraps any [`std::io::Read`] in a [`StreamReader`] that tracks the absolute
//! byte offset of every read so that a malformed file can be reported with
//! the position it went wrong at, rather than silently corrupting the decoded
//! state downstream.
//!
//! ## Conventions
//!
//! - All multi-byte integers are little-endian.
//! - Booleans are stored as a single byte that must be `0` or `1`.
//! - Strings are either fixed-length ASCII, NUL-terminated ASCII, or
//!   NUL-terminated UTF-16.
//! - Regions whose purpose has not been confirmed by reverse engineering are
//!   consumed with [`StreamReader::skip`]; only their width and position are
//!   fixed by the format, never their contents.
//!
//! Reading past the end of the source is always an error ([`Error::OutOfData`])
//! carrying the last valid offset. No read ever zero-fills.

pub mod error;
pub mod read;
pub mod types;

pub use read::StreamReader;
pub use types::Vector3;
