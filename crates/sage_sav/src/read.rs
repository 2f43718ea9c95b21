//! Decoding of versioned behavior records
//!

use sage_io::StreamReader;
use std::io::Read;
use tracing::trace;

use crate::{
    error::{Error, Result},
    types::{
        BehaviorKind, BehaviorState, ObjectState, PhysicsState, RailPathState, RailroadState,
        UpdateState, VersionWidth,
    },
};

/// Stream-integrity sentinel written by the engine at fixed points inside
/// certain records. Carries no data; a mismatch always rejects the record.
pub const SENTINEL: u32 = 0x00FA_CADE;

/// Decode one behavior record of the given kind from the current cursor
/// position.
///
/// Reads the kind's version tag first and fails with
/// [`Error::UnsupportedVersion`] before consuming any further bytes if the
/// tag is not in the kind's supported set. Decoding is all-or-nothing: on any
/// error the partially read state is discarded.
pub fn decode_behavior<R: Read>(
    kind: BehaviorKind,
    reader: &mut StreamReader<R>,
) -> Result<BehaviorState> {
    let version = read_version(kind, reader)?;
    trace!(?kind, version, offset = reader.position(), "decoding record");

    match (kind, version) {
        (BehaviorKind::Update, 1) => Ok(BehaviorState::Update(decode_update_v1(reader)?)),
        (BehaviorKind::Physics, 1) => Ok(BehaviorState::Physics(decode_physics_v1(reader)?)),
        (BehaviorKind::Railroad, 2) => Ok(BehaviorState::Railroad(decode_railroad_v2(reader)?)),
        (BehaviorKind::RailPath, 1) => Ok(BehaviorState::RailPath(decode_rail_path_v1(reader)?)),
        _ => unreachable!("version {version} accepted but not dispatched for {kind:?}"),
    }
}

/// Decode the behavior records a game object declares, in declaration order.
///
/// The order of `kinds` must match the order the records were written in:
/// every record starts where the previous one ended on the shared cursor.
/// The first decode error aborts the whole object; no partial tree is
/// returned.
pub fn decode_object_state<R: Read>(
    object_id: u32,
    kinds: &[BehaviorKind],
    reader: &mut StreamReader<R>,
) -> Result<ObjectState> {
    let behaviors = kinds
        .iter()
        .map(|&kind| decode_behavior(kind, reader))
        .collect::<Result<Vec<_>>>()?;

    Ok(ObjectState {
        object_id,
        behaviors,
    })
}

fn read_version<R: Read>(kind: BehaviorKind, reader: &mut StreamReader<R>) -> Result<u32> {
    let version = match kind.version_width() {
        VersionWidth::U16 => reader.read_u16()? as u32,
        VersionWidth::U32 => reader.read_u32()?,
    };

    if !kind.supported_versions().contains(&version) {
        return Err(Error::UnsupportedVersion { kind, version });
    }
    Ok(version)
}

fn check_sentinel<R: Read>(reader: &mut StreamReader<R>) -> Result<()> {
    let offset = reader.position();
    let actual = reader.read_u32()?;
    if actual != SENTINEL {
        return Err(Error::SentinelMismatch {
            offset,
            expected: SENTINEL,
            actual,
        });
    }
    Ok(())
}

fn decode_update_v1<R: Read>(reader: &mut StreamReader<R>) -> Result<UpdateState> {
    Ok(UpdateState {
        next_update_frame: reader.read_u32()?,
    })
}

fn decode_physics_v1<R: Read>(reader: &mut StreamReader<R>) -> Result<PhysicsState> {
    let BehaviorState::Update(update) = decode_behavior(BehaviorKind::Update, reader)? else {
        unreachable!()
    };

    let acceleration = reader.read_vector3()?;
    let last_acceleration = reader.read_vector3()?;
    let velocity = reader.read_vector3()?;

    reader.skip(4)?; // unconfirmed

    let mass = reader.read_f32()?;
    let current_overlap_id = reader.read_u32()?;
    let previous_overlap_id = reader.read_u32()?;
    let airborne = reader.read_bool()?;

    reader.skip(3)?; // unconfirmed

    Ok(PhysicsState {
        update,
        acceleration,
        last_acceleration,
        velocity,
        mass,
        current_overlap_id,
        previous_overlap_id,
        airborne,
    })
}

fn decode_railroad_v2<R: Read>(reader: &mut StreamReader<R>) -> Result<RailroadState> {
    let BehaviorState::Physics(physics) = decode_behavior(BehaviorKind::Physics, reader)? else {
        unreachable!()
    };

    reader.skip(4)?; // unconfirmed

    let unknown_object_id = reader.read_u32()?;
    let unknown_uint1 = reader.read_u32()?;

    reader.skip(4)?; // unconfirmed

    let unknown_bool1 = reader.read_bool()?;
    let unknown_bool2 = reader.read_bool()?;
    let unknown_bool3 = reader.read_bool()?;
    let unknown_bool4 = reader.read_bool()?;
    let unknown_bool5 = reader.read_bool()?;
    let unknown_bool6 = reader.read_bool()?;
    let unknown_bool7 = reader.read_bool()?;

    reader.skip(4)?; // unconfirmed

    let unknown_bool8 = reader.read_bool()?;
    let unknown_int1 = reader.read_i32()?;
    let unknown_int2 = reader.read_i32()?;

    let BehaviorState::RailPath(unknown_state1) = decode_behavior(BehaviorKind::RailPath, reader)?
    else {
        unreachable!()
    };
    let BehaviorState::RailPath(unknown_state2) = decode_behavior(BehaviorKind::RailPath, reader)?
    else {
        unreachable!()
    };

    Ok(RailroadState {
        physics,
        unknown_object_id,
        unknown_uint1,
        unknown_bool1,
        unknown_bool2,
        unknown_bool3,
        unknown_bool4,
        unknown_bool5,
        unknown_bool6,
        unknown_bool7,
        unknown_bool8,
        unknown_int1,
        unknown_int2,
        unknown_state1,
        unknown_state2,
    })
}

fn decode_rail_path_v1<R: Read>(reader: &mut StreamReader<R>) -> Result<RailPathState> {
    let unknown_float1 = reader.read_f32()?;
    let unknown_float2 = reader.read_f32()?;
    let unknown_float3 = reader.read_f32()?;
    let unknown_vector = reader.read_vector3()?;

    check_sentinel(reader)?;
    check_sentinel(reader)?;
    check_sentinel(reader)?;

    Ok(RailPathState {
        unknown_float1,
        unknown_float2,
        unknown_float3,
        unknown_vector,
    })
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use sage_io::StreamReader;

    use crate::error::{Error, Result};
    use crate::read::{decode_behavior, SENTINEL};
    use crate::types::{BehaviorKind, BehaviorState};

    #[test]
    fn decode_update() -> Result<()> {
        #[rustfmt::skip]
        let input = [
            0x01, 0x00,              // version 1
            0x2A, 0x00, 0x00, 0x00,  // next_update_frame
        ];

        let mut reader = StreamReader::new(Cursor::new(input));
        let BehaviorState::Update(update) = decode_behavior(BehaviorKind::Update, &mut reader)?
        else {
            panic!("wrong record kind");
        };

        assert_eq!(update.next_update_frame, 42);
        Ok(())
    }

    #[test]
    fn unsupported_version_stops_before_fields() {
        #[rustfmt::skip]
        let input = [
            0x63, 0x00,              // version 99
            0x2A, 0x00, 0x00, 0x00,
        ];

        let mut reader = StreamReader::new(Cursor::new(input));
        let result = decode_behavior(BehaviorKind::Update, &mut reader);

        assert!(matches!(
            result,
            Err(Error::UnsupportedVersion {
                kind: BehaviorKind::Update,
                version: 99
            })
        ));
        // Only the tag itself was consumed.
        assert_eq!(reader.position(), 2);
    }

    #[test]
    fn version_zero_is_rejected() {
        let input = [0x00u8, 0x00];

        let mut reader = StreamReader::new(Cursor::new(input));
        let result = decode_behavior(BehaviorKind::Physics, &mut reader);

        assert!(matches!(
            result,
            Err(Error::UnsupportedVersion { version: 0, .. })
        ));
    }

    #[test]
    fn decode_rail_path() -> Result<()> {
        #[rustfmt::skip]
        let input = [
            0x01, 0x00, 0x00, 0x00,  // version 1 (u32 for this kind)
            0x00, 0x00, 0x80, 0x3F,  // 1.0
            0x00, 0x00, 0x00, 0x40,  // 2.0
            0x00, 0x00, 0x40, 0x40,  // 3.0
            0x00, 0x00, 0x80, 0x3F,  // vector x
            0x00, 0x00, 0x80, 0x3F,  // vector y
            0x00, 0x00, 0x80, 0x3F,  // vector z
            0xDE, 0xCA, 0xFA, 0x00,  // sentinel
            0xDE, 0xCA, 0xFA, 0x00,  // sentinel
            0xDE, 0xCA, 0xFA, 0x00,  // sentinel
        ];

        let mut reader = StreamReader::new(Cursor::new(input));
        let BehaviorState::RailPath(state) = decode_behavior(BehaviorKind::RailPath, &mut reader)?
        else {
            panic!("wrong record kind");
        };

        assert_eq!(state.unknown_float1, 1.0);
        assert_eq!(state.unknown_float2, 2.0);
        assert_eq!(state.unknown_float3, 3.0);
        assert_eq!(reader.position(), 40);
        Ok(())
    }

    #[test]
    fn corrupt_sentinel_reports_offset() {
        #[rustfmt::skip]
        let input = [
            0x01, 0x00, 0x00, 0x00,  // version
            0x00, 0x00, 0x80, 0x3F,
            0x00, 0x00, 0x00, 0x40,
            0x00, 0x00, 0x40, 0x40,
            0x00, 0x00, 0x80, 0x3F,
            0x00, 0x00, 0x80, 0x3F,
            0x00, 0x00, 0x80, 0x3F,
            0xDE, 0xCA, 0xFA, 0x00,  // sentinel ok
            0xDE, 0xCA, 0xFA, 0x01,  // corrupted high byte
            0xDE, 0xCA, 0xFA, 0x00,
        ];

        let mut reader = StreamReader::new(Cursor::new(input));
        let result = decode_behavior(BehaviorKind::RailPath, &mut reader);

        match result {
            Err(Error::SentinelMismatch {
                offset,
                expected,
                actual,
            }) => {
                assert_eq!(offset, 32);
                assert_eq!(expected, SENTINEL);
                assert_eq!(actual, 0x01FACADE);
            }
            other => panic!("expected sentinel mismatch, got {other:?}"),
        }
    }
}
