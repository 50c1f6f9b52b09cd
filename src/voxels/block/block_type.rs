//! # Block Type Module
//!
//! This module names the block identifiers the terrain generator places by
//! default. Voxels themselves are plain [`VoxelId`] bytes, so any nonzero
//! value is a valid solid block even if it has no name here.

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use super::VoxelId;

/// Enumerates the well-known block types of the voxel world.
///
/// The discriminants are the on-disk voxel identifiers. The `FromPrimitive`
/// derive allows conversion from raw identifiers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum BlockType {
    /// An empty voxel.
    AIR = 0,

    /// The surface layer of generated terrain.
    GRASS = 1,

    /// The thin layer directly below the surface.
    DIRT = 2,

    /// Everything deeper than the dirt layer.
    STONE = 3,
}

impl BlockType {
    /// Converts a raw voxel identifier to a `BlockType`.
    ///
    /// # Returns
    /// `Some` for the named identifiers, `None` for any other byte.
    pub fn from_id(id: VoxelId) -> Option<Self> {
        FromPrimitive::from_u8(id)
    }

    /// The voxel identifier of this block type.
    pub fn id(self) -> VoxelId {
        self as VoxelId
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id_round_trip() {
        for block_type in [BlockType::AIR, BlockType::GRASS, BlockType::DIRT, BlockType::STONE] {
            assert_eq!(BlockType::from_id(block_type.id()), Some(block_type));
        }
    }

    #[test]
    fn test_unnamed_ids() {
        assert_eq!(BlockType::from_id(4), None);
        assert_eq!(BlockType::from_id(u8::MAX), None);
    }
}
