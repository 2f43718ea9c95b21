//! Decoded behavior record types
//!
//! Fields named `unknown_*` were observed in real save games but their
//! semantics are unconfirmed. Their byte width and position are fixed by the
//! format; no meaning beyond that should be read into them.

use sage_io::Vector3;

/// The width of the version tag at the start of a record.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VersionWidth {
    U16,
    U32,
}

/// The closed set of behavior kinds this decoder understands.
///
/// Each kind maps to exactly one record layout per supported version. New
/// kinds observed in the wild are added here together with their layout;
/// there is no fallback decode for an unlisted kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BehaviorKind {
    /// Base module scheduling state, nested inside every other kind
    Update,
    /// Rigid-body physics state
    Physics,
    /// Train locomotive/carriage behavior
    Railroad,
    /// Per-carriage path-following state, nested inside `Railroad`
    RailPath,
}

impl BehaviorKind {
    /// Width of this kind's version tag. Fixed per kind.
    pub fn version_width(&self) -> VersionWidth {
        match self {
            BehaviorKind::Update => VersionWidth::U16,
            BehaviorKind::Physics => VersionWidth::U16,
            BehaviorKind::Railroad => VersionWidth::U16,
            BehaviorKind::RailPath => VersionWidth::U32,
        }
    }

    /// The exact set of versions this decoder accepts for the kind.
    pub fn supported_versions(&self) -> &'static [u32] {
        match self {
            BehaviorKind::Update => &[1],
            BehaviorKind::Physics => &[1],
            BehaviorKind::Railroad => &[2],
            BehaviorKind::RailPath => &[1],
        }
    }
}

/// Base module scheduling state.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UpdateState {
    pub next_update_frame: u32,
}

/// Rigid-body physics state.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PhysicsState {
    pub update: UpdateState,
    pub acceleration: Vector3,
    pub last_acceleration: Vector3,
    pub velocity: Vector3,
    pub mass: f32,
    pub current_overlap_id: u32,
    pub previous_overlap_id: u32,
    pub airborne: bool,
}

/// Train behavior state.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RailroadState {
    pub physics: PhysicsState,
    pub unknown_object_id: u32,
    pub unknown_uint1: u32,
    pub unknown_bool1: bool,
    pub unknown_bool2: bool,
    pub unknown_bool3: bool,
    pub unknown_bool4: bool,
    pub unknown_bool5: bool,
    pub unknown_bool6: bool,
    pub unknown_bool7: bool,
    pub unknown_bool8: bool,
    pub unknown_int1: i32,
    pub unknown_int2: i32,
    pub unknown_state1: RailPathState,
    pub unknown_state2: RailPathState,
}

/// Path-following state nested inside [`RailroadState`].
///
/// Terminated by three consecutive sentinel words in the stream.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RailPathState {
    pub unknown_float1: f32,
    pub unknown_float2: f32,
    pub unknown_float3: f32,
    pub unknown_vector: Vector3,
}

/// One decoded behavior record.
#[derive(Debug, Clone, PartialEq)]
pub enum BehaviorState {
    Update(UpdateState),
    Physics(PhysicsState),
    Railroad(RailroadState),
    RailPath(RailPathState),
}

impl BehaviorState {
    /// The kind this record was decoded as.
    pub fn kind(&self) -> BehaviorKind {
        match self {
            BehaviorState::Update(_) => BehaviorKind::Update,
            BehaviorState::Physics(_) => BehaviorKind::Physics,
            BehaviorState::Railroad(_) => BehaviorKind::Railroad,
            BehaviorState::RailPath(_) => BehaviorKind::RailPath,
        }
    }
}

/// All behavior records decoded for one persisted game object.
///
/// `behaviors` preserves the caller-supplied decode order: records share one
/// forward-only cursor, so the order is part of the format, not a
/// presentation detail.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectState {
    /// Opaque object id, resolved by the save-game layer
    pub object_id: u32,
    pub behaviors: Vec<BehaviorState>,
}
