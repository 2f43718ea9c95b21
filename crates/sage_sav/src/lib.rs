//! # SAGE Save-Game Behavior State Documentation
//!
//! This crate decodes the per-object behavior state blocks persisted by *SAGE*
//! engine save games. Each game object carries a list of behavior modules, and
//! each module serializes its own versioned record into the save stream. The
//! format was reverse-engineered from the original engine's output; fields
//! whose purpose is unconfirmed are named `unknown_*` and only their byte
//! width and position are contractual.
//!
//! ## Record Structure
//!
//! Every record starts with a version tag whose width is fixed per behavior
//! kind, followed by that version's fixed field sequence. Records may nest:
//! a `Railroad` record contains a full `Physics` record, which contains an
//! `Update` record. All nested records carry their own version tags.
//!
//! | Kind       | Version width | Supported versions |
//! |------------|---------------|--------------------|
//! | `Update`   | u16           | 1                  |
//! | `Physics`  | u16           | 1                  |
//! | `Railroad` | u16           | 2                  |
//! | `RailPath` | u32           | 1                  |
//!
//! ### `Update` (version 1)
//!
//! | Field               | Width | Description                      |
//! |---------------------|-------|----------------------------------|
//! | `next_update_frame` | 4     | Frame the module next runs on    |
//!
//! ### `Physics` (version 1)
//!
//! | Field                  | Width | Description                      |
//! |------------------------|-------|----------------------------------|
//! | nested `Update`        | 6     | Base module state                |
//! | `acceleration`         | 12    | 3 x f32                          |
//! | `last_acceleration`    | 12    | 3 x f32                          |
//! | `velocity`             | 12    | 3 x f32                          |
//! | unknown                | 4     | Unconfirmed, skipped             |
//! | `mass`                 | 4     | f32                              |
//! | `current_overlap_id`   | 4     | Object id, 0 when none           |
//! | `previous_overlap_id`  | 4     | Object id, 0 when none           |
//! | `airborne`             | 1     | Boolean byte                     |
//! | unknown                | 3     | Unconfirmed, skipped             |
//!
//! ### `Railroad` (version 2)
//!
//! Nested `Physics` record, followed by an unconfirmed region of object ids,
//! flags and counters (see [`types::RailroadState`]), and two nested
//! `RailPath` records.
//!
//! ### `RailPath` (version 1)
//!
//! Three f32 values, one 3-vector, then **three consecutive sentinel words**.
//! The sentinel is the only integrity check available for this region: each
//! word must equal `0x00FACADE` or the record is rejected.
//!
//! ## Additional Information
//!
//! - **Endianness**: Little-endian for all multi-byte values
//! - **Booleans**: One byte, `0` or `1` only
//! - **Sentinel**: `0x00FACADE`, see [`SENTINEL`]

pub mod error;
pub mod read;
pub mod types;

pub use read::{decode_behavior, decode_object_state, SENTINEL};
pub use types::{BehaviorKind, BehaviorState, ObjectState};
