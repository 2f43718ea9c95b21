use std::io::Cursor;

use sage_io::StreamReader;
use sage_sav::error::{Error, Result};
use sage_sav::{decode_behavior, decode_object_state, BehaviorKind, BehaviorState, SENTINEL};
use tracing_test::traced_test;

/// Builds record fixtures with the inverse of the decode field sequence.
#[derive(Default)]
struct RecordBuilder {
    bytes: Vec<u8>,
}

impl RecordBuilder {
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

    fn vector3(self, x: f32, y: f32, z: f32) -> Self {
        self.f32(x).f32(y).f32(z)
    }

    fn bool(mut self, value: bool) -> Self {
        self.bytes.push(value as u8);
        self
    }

    fn zeroes(mut self, count: usize) -> Self {
        self.bytes.extend(std::iter::repeat(0).take(count));
        self
    }

    fn sentinel(self) -> Self {
        self.u32(SENTINEL)
    }

    fn raw(mut self, other: &[u8]) -> Self {
        self.bytes.extend_from_slice(other);
        self
    }

    fn build(self) -> Vec<u8> {
        self.bytes
    }
}

fn update_v1(next_update_frame: u32) -> Vec<u8> {
    RecordBuilder::default()
        .u16(1)
        .u32(next_update_frame)
        .build()
}

fn physics_v1() -> Vec<u8> {
    RecordBuilder::default()
        .u16(1) // version
        .raw(&update_v1(100))
        .vector3(0.0, 0.0, -9.8) // acceleration
        .vector3(0.0, 0.0, 0.0) // last_acceleration
        .vector3(4.0, 0.0, 0.0) // velocity
        .zeroes(4)
        .f32(120.5) // mass
        .u32(0) // current_overlap_id
        .u32(0) // previous_overlap_id
        .bool(false) // airborne
        .zeroes(3)
        .build()
}

fn rail_path_v1(f1: f32) -> Vec<u8> {
    RecordBuilder::default()
        .u32(1) // version (u32 width for this kind)
        .f32(f1)
        .f32(0.5)
        .f32(0.25)
        .vector3(10.0, 20.0, 0.0)
        .sentinel()
        .sentinel()
        .sentinel()
        .build()
}

fn railroad_v2() -> Vec<u8> {
    RecordBuilder::default()
        .u16(2) // version
        .raw(&physics_v1())
        .zeroes(4)
        .u32(77) // unknown_object_id
        .u32(3) // unknown_uint1
        .zeroes(4)
        .bool(true)
        .bool(false)
        .bool(false)
        .bool(true)
        .bool(false)
        .bool(false)
        .bool(true)
        .zeroes(4)
        .bool(true)
        .i32(-5)
        .i32(9)
        .raw(&rail_path_v1(1.0))
        .raw(&rail_path_v1(2.0))
        .build()
}

#[traced_test]
#[test]
fn decode_railroad_record() -> Result<()> {
    let input = railroad_v2();

    let mut reader = StreamReader::new(Cursor::new(&input));
    let BehaviorState::Railroad(state) = decode_behavior(BehaviorKind::Railroad, &mut reader)?
    else {
        panic!("wrong record kind");
    };

    assert_eq!(state.physics.update.next_update_frame, 100);
    assert_eq!(state.physics.velocity.x, 4.0);
    assert_eq!(state.physics.mass, 120.5);
    assert!(!state.physics.airborne);

    assert_eq!(state.unknown_object_id, 77);
    assert_eq!(state.unknown_uint1, 3);
    assert!(state.unknown_bool1);
    assert!(state.unknown_bool7);
    assert!(state.unknown_bool8);
    assert_eq!(state.unknown_int1, -5);
    assert_eq!(state.unknown_int2, 9);

    assert_eq!(state.unknown_state1.unknown_float1, 1.0);
    assert_eq!(state.unknown_state2.unknown_float1, 2.0);
    assert_eq!(state.unknown_state1.unknown_vector.y, 20.0);

    // The record consumed the entire fixture.
    assert_eq!(reader.position(), input.len() as u64);

    Ok(())
}

#[traced_test]
#[test]
fn decode_object_state_preserves_order() -> Result<()> {
    let mut input = update_v1(7);
    input.extend(physics_v1());
    input.extend(railroad_v2());

    let kinds = [
        BehaviorKind::Update,
        BehaviorKind::Physics,
        BehaviorKind::Railroad,
    ];

    let mut reader = StreamReader::new(Cursor::new(&input));
    let object = decode_object_state(42, &kinds, &mut reader)?;

    assert_eq!(object.object_id, 42);
    assert_eq!(object.behaviors.len(), 3);
    assert_eq!(object.behaviors[0].kind(), BehaviorKind::Update);
    assert_eq!(object.behaviors[1].kind(), BehaviorKind::Physics);
    assert_eq!(object.behaviors[2].kind(), BehaviorKind::Railroad);
    assert_eq!(reader.position(), input.len() as u64);

    Ok(())
}

#[traced_test]
#[test]
fn object_state_fails_atomically() {
    let mut input = update_v1(7);
    // Second record carries a version the decoder does not know.
    input.extend(RecordBuilder::default().u16(99).build());

    let kinds = [BehaviorKind::Update, BehaviorKind::Physics];

    let mut reader = StreamReader::new(Cursor::new(&input));
    let result = decode_object_state(1, &kinds, &mut reader);

    assert!(matches!(
        result,
        Err(Error::UnsupportedVersion {
            kind: BehaviorKind::Physics,
            version: 99
        })
    ));
}

#[traced_test]
#[test]
fn truncated_record_reports_out_of_data() {
    let full = railroad_v2();
    let truncated = &full[..full.len() - 6];

    let mut reader = StreamReader::new(Cursor::new(truncated));
    let result = decode_behavior(BehaviorKind::Railroad, &mut reader);

    assert!(matches!(
        result,
        Err(Error::Stream(sage_io::error::Error::OutOfData { .. }))
    ));
}

#[traced_test]
#[test]
fn every_sentinel_byte_is_checked() {
    // Corrupting any byte of any of the three sentinels must produce a
    // mismatch whose offset points at the word the byte belongs to.
    let clean = rail_path_v1(1.0);
    let sentinel_start = clean.len() - 12;

    for byte in sentinel_start..clean.len() {
        let mut corrupted = clean.clone();
        corrupted[byte] ^= 0xFF;

        let mut reader = StreamReader::new(Cursor::new(&corrupted));
        let result = decode_behavior(BehaviorKind::RailPath, &mut reader);

        let expected_offset = (byte - (byte - sentinel_start) % 4) as u64;
        match result {
            Err(Error::SentinelMismatch { offset, .. }) => {
                assert_eq!(offset, expected_offset, "corrupted byte {byte}")
            }
            other => panic!("expected sentinel mismatch for byte {byte}, got {other:?}"),
        }
    }
}
