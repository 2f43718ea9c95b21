#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Three consecutive little-endian f32 values, as stored by the engine for
/// positions, velocities and accelerations.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}
