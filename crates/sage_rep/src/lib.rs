//! # GENREP Replay Format Documentation
//!
//! This crate provides utilities to read the **GENREP** replay format recorded
//! by the *SAGE* engine. A replay is a header followed by a sequence of
//! timestamped order chunks; the engine re-simulates the match by feeding the
//! orders back in. Replay files are typically identified with the `.rep`
//! extension.
//!
//! ## File Structure
//!
//! A replay consists of one header followed by chunks until end of file.
//! There is **no chunk count field**: the stream runs until the file is
//! exhausted, and the header's timecode total is cross-checked against the
//! last chunk afterwards.
//!
//! ### Header
//!
//! | Field           | Width    | Description                                   |
//! |-----------------|----------|-----------------------------------------------|
//! | Magic           | 6        | ASCII `GENREP`                                |
//! | Begin timestamp | 4        | Unix timestamp, match start                   |
//! | End timestamp   | 4        | Unix timestamp, match end                     |
//! | Num timecodes   | 4        | Timecode of the final chunk                   |
//! | Unknown         | 12       | Unconfirmed                                   |
//! | Filename        | variable | NUL-terminated UTF-16                         |
//! | Date/time       | 16       | 8 x u16: year, month, day-of-week, day, hour, minute, second, millisecond |
//! | Version         | variable | NUL-terminated UTF-16                         |
//! | Build date      | variable | NUL-terminated UTF-16                         |
//! | Version minor   | 2        | u16                                           |
//! | Version major   | 2        | u16                                           |
//! | Game options    | variable | NUL-terminated ASCII, free-form configuration text including the player list |
//! | Unknown         | 10       | Unconfirmed (u16 + 2 x u32)                   |
//!
//! The game options text is decoded but not interpreted; its contents belong
//! to the lobby/game-setup layer.
//!
//! ### Chunk
//!
//! | Field           | Width    | Description                                   |
//! |-----------------|----------|-----------------------------------------------|
//! | Timecode        | 4        | Simulation tick, non-decreasing               |
//! | Order type      | 4        | Engine order code                             |
//! | Player id       | 4        | Issuing player slot                           |
//! | Argument types  | 1        | Number of unique argument types that follow   |
//! | Type table      | 2 each   | (argument type, count) byte pairs             |
//! | Arguments       | variable | Arguments grouped by the type table           |
//!
//! The payload is self-describing: the type table fixes the width of every
//! argument that follows, so no order-specific schema is needed to walk the
//! stream.
//!
//! ## Additional Information
//!
//! - **File Extension**: `.rep`
//! - **Endianness**: Little-endian for all multi-byte integers

pub mod error;
pub mod read;
pub mod types;

pub use read::ReplayFile;
pub use types::{ChunkHeader, OrderArgument, ReplayChunk, ReplayHeader};
