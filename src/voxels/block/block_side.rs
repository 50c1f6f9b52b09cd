//! # Block Side Module
//!
//! This module defines the six faces of a voxel and how each one maps onto an
//! axis and a direction along it.

use cgmath::Vector3;

/// Represents the six possible faces of a voxel block.
///
/// Each face is identified by the axis it is perpendicular to (0 = X, 1 = Y,
/// 2 = Z) and whether it faces the positive or negative end of that axis.
///
/// The order is: [FRONT, BACK, BOTTOM, TOP, LEFT, RIGHT]
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// The front face (facing positive Z)
    FRONT = 0,

    /// The back face (facing negative Z)
    BACK = 1,

    /// The bottom face (facing negative Y)
    BOTTOM = 2,

    /// The top face (facing positive Y)
    TOP = 3,

    /// The left face (facing negative X)
    LEFT = 4,

    /// The right face (facing positive X)
    RIGHT = 5,
}

impl BlockSide {
    /// Returns an array containing all six block faces in a consistent order.
    ///
    /// The order is: [FRONT, BACK, BOTTOM, TOP, LEFT, RIGHT]
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::FRONT,
            BlockSide::BACK,
            BlockSide::BOTTOM,
            BlockSide::TOP,
            BlockSide::LEFT,
            BlockSide::RIGHT,
        ]
    }

    /// Gets the face perpendicular to `axis` on the requested side.
    ///
    /// # Arguments
    /// * `axis` - 0 for X, 1 for Y, 2 for Z
    /// * `positive` - Whether the face points towards increasing coordinates
    ///
    /// # Panics
    /// Panics if `axis` is not 0, 1 or 2.
    pub fn from_axis(axis: usize, positive: bool) -> Self {
        match (axis, positive) {
            (0, false) => BlockSide::LEFT,
            (0, true) => BlockSide::RIGHT,
            (1, false) => BlockSide::BOTTOM,
            (1, true) => BlockSide::TOP,
            (2, false) => BlockSide::BACK,
            (2, true) => BlockSide::FRONT,
            _ => panic!("invalid axis {axis}"),
        }
    }

    /// The axis this face is perpendicular to (0 = X, 1 = Y, 2 = Z).
    pub fn axis(self) -> usize {
        match self {
            BlockSide::LEFT | BlockSide::RIGHT => 0,
            BlockSide::BOTTOM | BlockSide::TOP => 1,
            BlockSide::BACK | BlockSide::FRONT => 2,
        }
    }

    /// Whether the face points towards increasing coordinates along its axis.
    pub fn is_positive(self) -> bool {
        matches!(self, BlockSide::RIGHT | BlockSide::TOP | BlockSide::FRONT)
    }

    /// Integer offset from a voxel to the neighbour this face looks at.
    pub fn offset(self) -> Vector3<i32> {
        let mut offset = [0; 3];
        offset[self.axis()] = if self.is_positive() { 1 } else { -1 };
        offset.into()
    }

    /// Unit normal of the face.
    pub fn normal(self) -> Vector3<f32> {
        let offset = self.offset();
        Vector3::new(offset.x as f32, offset.y as f32, offset.z as f32)
    }
}
