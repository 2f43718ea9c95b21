use std::io::Cursor;

use sage_rep::error::{Error, Result};
use sage_rep::{OrderArgument, ReplayFile};
use tracing_test::traced_test;

/// Builds replay fixtures with the inverse of the decode field sequence.
#[derive(Default)]
struct ReplayBuilder {
    bytes: Vec<u8>,
}

impl ReplayBuilder {
    fn u8(mut self, value: u8) -> Self {
        self.bytes.push(value);
        self
    }

    fn u16(mut self, value: u16) -> Self {
        self.bytes.extend_from_slice(&value.to_le_bytes());
        self
    }

    fn u32(mut self, value: u32) -> Self {
        self.bytes.extend_from_slice(&value.to_le_bytes());
        self
    }

    fn i32(mut self, value: i32) -> Self {
        self.bytes.extend_from_slice(&value.to_le_bytes());
        self
    }

    fn f32(mut self, value: f32) -> Self {
        self.bytes.extend_from_slice(&value.to_le_bytes());
        self
    }

    fn zeroes(mut self, count: usize) -> Self {
        self.bytes.extend(std::iter::repeat(0).take(count));
        self
    }

    fn ascii_z(mut self, value: &str) -> Self {
        self.bytes.extend_from_slice(value.as_bytes());
        self.bytes.push(0);
        self
    }

    fn utf16_z(mut self, value: &str) -> Self {
        for unit in value.encode_utf16() {
            self.bytes.extend_from_slice(&unit.to_le_bytes());
        }
        self.bytes.extend_from_slice(&[0, 0]);
        self
    }

    fn header(self, num_timecodes: u32) -> Self {
        let mut b = self;
        b.bytes.extend_from_slice(b"GENREP");
        b.u32(1_600_000_000) // begin timestamp
            .u32(1_600_000_900) // end timestamp
            .u32(num_timecodes)
            .zeroes(12)
            .utf16_z("last replay")
            .u16(2024) // year
            .u16(7) // month
            .u16(2) // day of week
            .u16(16) // day
            .u16(21) // hour
            .u16(30) // minute
            .u16(5) // second
            .u16(0) // millisecond
            .utf16_z("Version 1.04")
            .utf16_z("Oct 14 2003")
            .u16(4) // version minor
            .u16(1) // version major
            .ascii_z("M=maps/alpine assault;MC=42;SD=;C=100;SR=0;")
            .zeroes(10)
    }

    /// A chunk with no arguments.
    fn empty_chunk(self, timecode: u32, order_type: u32, player_id: u32) -> Self {
        self.u32(timecode).u32(order_type).u32(player_id).u8(0)
    }

    fn build(self) -> Cursor<Vec<u8>> {
        Cursor::new(self.bytes)
    }
}

#[traced_test]
#[test]
fn read_replay_with_matching_timecodes() -> Result<()> {
    let input = ReplayBuilder::default()
        .header(3)
        .empty_chunk(1, 1095, 2)
        .empty_chunk(2, 1095, 2)
        .empty_chunk(3, 27, 2)
        .build();

    let replay = ReplayFile::read(input)?;

    assert_eq!(replay.header.num_timecodes, 3);
    assert_eq!(replay.header.version_major, 1);
    assert_eq!(replay.header.version_minor, 4);
    assert_eq!(replay.header.filename, "last replay");
    assert_eq!(replay.header.version, "Version 1.04");
    assert_eq!(replay.header.date_time.year, 2024);
    assert!(replay.header.game_options.contains("alpine assault"));

    assert_eq!(replay.chunks.len(), 3);
    assert_eq!(replay.chunks[2].header.timecode, 3);
    assert_eq!(replay.chunks[2].header.order_type, 27);

    Ok(())
}

#[traced_test]
#[test]
fn truncated_replay_fails_with_timecode_mismatch() {
    let input = ReplayBuilder::default()
        .header(3)
        .empty_chunk(1, 1095, 2)
        .empty_chunk(2, 1095, 2)
        .build();

    let result = ReplayFile::read(input);

    assert!(matches!(
        result,
        Err(Error::TimecodeMismatch {
            expected: 3,
            actual: 2
        })
    ));
}

#[traced_test]
#[test]
fn replay_without_chunks_is_rejected() {
    let input = ReplayBuilder::default().header(0).build();

    let result = ReplayFile::read(input);
    assert!(matches!(result, Err(Error::EmptyReplay)));
}

#[traced_test]
#[test]
fn read_chunk_arguments() -> Result<()> {
    // One chunk: 2 object ids, 1 position, 1 boolean.
    let input = ReplayBuilder::default()
        .header(1)
        .u32(1) // timecode
        .u32(1068) // order type
        .u32(3) // player id
        .u8(3) // unique argument types
        .u8(3) // object id ...
        .u8(2) // ... x2
        .u8(6) // position ...
        .u8(1) // ... x1
        .u8(2) // boolean ...
        .u8(1) // ... x1
        .u32(701)
        .u32(702)
        .f32(10.0)
        .f32(20.0)
        .f32(0.0)
        .u8(1)
        .build();

    let replay = ReplayFile::read(input)?;

    assert_eq!(replay.chunks.len(), 1);
    let arguments = &replay.chunks[0].arguments;
    assert_eq!(arguments.len(), 4);
    assert_eq!(arguments[0], OrderArgument::ObjectId(701));
    assert_eq!(arguments[1], OrderArgument::ObjectId(702));
    assert!(matches!(arguments[2], OrderArgument::Position(v) if v.x == 10.0 && v.y == 20.0));
    assert_eq!(arguments[3], OrderArgument::Boolean(true));

    Ok(())
}

#[traced_test]
#[test]
fn read_screen_arguments() -> Result<()> {
    let input = ReplayBuilder::default()
        .header(5)
        .u32(5) // timecode
        .u32(1092) // order type
        .u32(0) // player id
        .u8(2) // unique argument types
        .u8(7) // screen position ...
        .u8(1) // ... x1
        .u8(8) // screen rectangle ...
        .u8(1) // ... x1
        .i32(640)
        .i32(480)
        .i32(0)
        .i32(0)
        .i32(100)
        .i32(120)
        .build();

    let replay = ReplayFile::read(input)?;

    let arguments = &replay.chunks[0].arguments;
    assert_eq!(arguments[0], OrderArgument::ScreenPosition { x: 640, y: 480 });
    assert_eq!(
        arguments[1],
        OrderArgument::ScreenRectangle {
            x1: 0,
            y1: 0,
            x2: 100,
            y2: 120
        }
    );

    Ok(())
}

#[traced_test]
#[test]
fn unknown_argument_type_is_fatal() {
    let input = ReplayBuilder::default()
        .header(1)
        .u32(1)
        .u32(1001)
        .u32(0)
        .u8(1) // unique argument types
        .u8(42) // no such argument type
        .u8(1)
        .u32(0)
        .build();

    let result = ReplayFile::read(input);
    assert!(matches!(
        result,
        Err(Error::UnknownArgumentType { tag: 42, .. })
    ));
}
