//! Decoded replay structures
//!
//! Fields named `unknown*` were observed in real replays but their semantics
//! are unconfirmed; their byte width and position are fixed by the format.

use sage_io::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Wall-clock date and time as 8 consecutive u16 fields.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReplayDateTime {
    pub year: u16,
    pub month: u16,
    pub day_of_week: u16,
    pub day: u16,
    pub hour: u16,
    pub minute: u16,
    pub second: u16,
    pub millisecond: u16,
}

/// Fixed-layout replay header.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReplayHeader {
    pub begin_timestamp: u32,
    pub end_timestamp: u32,

    /// Timecode of the final chunk. Cross-checked after the chunk loop; the
    /// format has no chunk count field.
    pub num_timecodes: u32,

    pub filename: String,
    pub date_time: ReplayDateTime,
    pub version: String,
    pub build_date: String,
    pub version_minor: u16,
    pub version_major: u16,

    /// Free-form game configuration text, including the player list. Decoded
    /// verbatim, not interpreted.
    pub game_options: String,
}

/// Per-chunk fixed header.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChunkHeader {
    /// Simulation tick the order executes on. Non-decreasing across the
    /// stream.
    pub timecode: u32,

    /// Engine order code. Kept raw; the set of codes is game-version
    /// dependent and the payload is self-describing either way.
    pub order_type: u32,

    /// Issuing player slot.
    pub player_id: u32,
}

/// One decoded order argument.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OrderArgument {
    Integer(i32),
    Float(f32),
    Boolean(bool),
    ObjectId(u32),
    Position(Vector3),
    ScreenPosition { x: i32, y: i32 },
    ScreenRectangle { x1: i32, y1: i32, x2: i32, y2: i32 },
}

impl OrderArgument {
    /// Wire tag for this argument type.
    pub fn type_tag(&self) -> u8 {
        match self {
            OrderArgument::Integer(_) => 0,
            OrderArgument::Float(_) => 1,
            OrderArgument::Boolean(_) => 2,
            OrderArgument::ObjectId(_) => 3,
            OrderArgument::Position(_) => 6,
            OrderArgument::ScreenPosition { .. } => 7,
            OrderArgument::ScreenRectangle { .. } => 8,
        }
    }
}

/// One timestamped unit of the replay's event log.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReplayChunk {
    pub header: ChunkHeader,
    pub arguments: Vec<OrderArgument>,
}
