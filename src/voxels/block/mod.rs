//! # Block Module
//!
//! This module provides the block-related vocabulary of the voxel world: the
//! raw voxel identifier, the well-known block types used by terrain
//! generation, and the six face directions used by meshing.

use block_type::BlockType;

pub mod block_side;
pub mod block_type;

/// The underlying integer type used to represent a voxel.
///
/// `0` is air; any other value identifies a solid block type. Voxels carry no
/// metadata beyond this identifier.
pub type VoxelId = u8;

/// The identifier of an empty (air) voxel.
pub const AIR: VoxelId = BlockType::AIR as VoxelId;

/// Maps each known block type to an RGB color used for untextured rendering.
///
/// Indexed by `BlockType` as a `usize`. Unknown identifiers fall back to
/// [`DEFAULT_BLOCK_COLOR`].
pub static BLOCK_TYPE_TO_COLOR: [[f32; 3]; 4] = [
    [0.0, 0.0, 0.0], // AIR (never meshed)
    [0.2, 0.8, 0.2], // GRASS
    [0.6, 0.4, 0.2], // DIRT
    [0.5, 0.5, 0.5], // STONE
];

/// Color used for voxel identifiers that have no entry in [`BLOCK_TYPE_TO_COLOR`].
pub const DEFAULT_BLOCK_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

/// Returns `true` if the identifier denotes a solid voxel.
#[inline]
pub fn is_solid(id: VoxelId) -> bool {
    id != AIR
}

/// Gets the display color for a voxel identifier.
///
/// # Arguments
/// * `id` - The voxel identifier
///
/// # Returns
/// The RGB color of the matching [`BlockType`], or white for unknown ids.
pub fn get_color_from_id(id: VoxelId) -> [f32; 3] {
    match BlockType::from_id(id) {
        Some(block_type) => BLOCK_TYPE_TO_COLOR[block_type as usize],
        None => DEFAULT_BLOCK_COLOR,
    }
}
