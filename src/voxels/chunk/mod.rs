//! # Chunk Module
//!
//! This module provides the `Chunk` struct and related functionality for managing
//! 16x16x16 blocks of voxel data.
//!
//! ## Storage
//!
//! A chunk keeps two views of its contents:
//! - `voxels`: one byte per voxel, laid out in X-Y-Z order (X outermost, Z innermost).
//!   This is exactly the flat array produced by [`Chunk::to_flat_array`].
//! - `solid_array`: a bit vector (1 bit per block) indicating which blocks are solid,
//!   padded by one layer on every side.
//!
//! The padding makes neighbour lookups one voxel past the chunk edge valid: those
//! bits are never set, so anything outside the chunk reads as empty. Meshing relies
//! on this for face visibility and ambient occlusion.
//!
//! ### Performance Characteristics
//! - **Solidity Check**: O(1), including one voxel beyond each face
//! - **Block Lookup**: O(1)
//! - **Memory Usage**: 1 byte per voxel + 1 bit per padded voxel

use bitvec::prelude::BitVec;
use chunk_creation::ChunkCreationIterator;
use chunk_iteration::ChunkBlockIterator;

use super::block::block_side::BlockSide;
use super::block::{is_solid, VoxelId, AIR};
use crate::core::{Error, Result};

mod chunk_creation;
pub mod chunk_iteration;

/// The dimension (width, height, depth) of a chunk in blocks.
pub const CHUNK_DIMENSION: i32 = 16;
/// The number of blocks in a single 2D plane of a chunk (CHUNK_DIMENSION²).
pub const CHUNK_PLANE_SIZE: i32 = CHUNK_DIMENSION * CHUNK_DIMENSION;
/// The total number of blocks in a chunk (CHUNK_DIMENSION³).
pub const CHUNK_SIZE: i32 = CHUNK_PLANE_SIZE * CHUNK_DIMENSION;
/// The dimension of a chunk including an extra layer of blocks on each side for neighbor lookups.
pub const CHUNK_DIMENSION_WRAPPED: usize = (CHUNK_DIMENSION + 2) as usize;
/// The number of blocks in a wrapped 2D chunk plane.
pub const CHUNK_PLANE_SIZE_WRAPPED: usize = CHUNK_DIMENSION_WRAPPED * CHUNK_DIMENSION_WRAPPED;
/// The total number of blocks in a wrapped chunk.
pub const CHUNK_SIZE_WRAPPED: usize = CHUNK_PLANE_SIZE_WRAPPED * CHUNK_DIMENSION_WRAPPED;

/// Represents a 16x16x16 collection of voxels.
///
/// A chunk has no identity beyond its contents: it does not know where it sits in
/// the world. It is created empty and mutated in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chunk {
    /// One identifier per voxel, indexed by [`flat_index`].
    voxels: Vec<VoxelId>,

    /// A bit vector where each bit represents whether the corresponding block is solid (1) or air (0).
    ///
    /// The bits are stored in X-Y-Z order and include one layer of padding
    /// (CHUNK_DIMENSION_WRAPPED in each dimension). Padding bits are always 0.
    solid_array: BitVec,
}

/// Index of a chunk-local coordinate in the flat X-Y-Z voxel array.
#[inline]
pub fn flat_index(x: usize, y: usize, z: usize) -> usize {
    let dimension = CHUNK_DIMENSION as usize;
    x * dimension * dimension + y * dimension + z
}

#[inline]
fn wrapped_index(wx: usize, wy: usize, wz: usize) -> usize {
    wx * CHUNK_PLANE_SIZE_WRAPPED + wy * CHUNK_DIMENSION_WRAPPED + wz
}

impl Default for Chunk {
    fn default() -> Self {
        Self::new()
    }
}

impl Chunk {
    /// Creates a new, completely empty chunk (all voxels are air).
    pub fn new() -> Self {
        Chunk {
            voxels: vec![AIR; CHUNK_SIZE as usize],
            solid_array: BitVec::repeat(false, CHUNK_SIZE_WRAPPED),
        }
    }

    /// Creates a new chunk with every voxel set to `id`.
    pub fn filled(id: VoxelId) -> Self {
        let mut cci = ChunkCreationIterator::new();

        for _ in 0..CHUNK_SIZE {
            cci.push_voxel(id);
        }

        cci.return_chunk()
    }

    /// Creates a new chunk with a 3D checkerboard pattern of `id` and air.
    ///
    /// The voxel at (0, 0, 0) is solid. No two solid voxels share a face, which
    /// makes this the worst case for meshing.
    pub fn checkerboard(id: VoxelId) -> Self {
        Self::from_fn(|x, y, z| if (x + y + z) % 2 == 0 { id } else { AIR })
    }

    /// Creates a chunk by evaluating `f` at every chunk-local position.
    ///
    /// `f` is called exactly once per voxel, in X-Y-Z order.
    pub fn from_fn(mut f: impl FnMut(usize, usize, usize) -> VoxelId) -> Self {
        let dimension = CHUNK_DIMENSION as usize;
        let mut cci = ChunkCreationIterator::new();
        for x in 0..dimension {
            for y in 0..dimension {
                for z in 0..dimension {
                    cci.push_voxel(f(x, y, z));
                }
            }
        }

        cci.return_chunk()
    }

    /// Gets the voxel at the specified chunk-local coordinates.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if any coordinate is outside `[0, CHUNK_DIMENSION)`.
    pub fn get(&self, x: i32, y: i32, z: i32) -> Result<VoxelId> {
        Self::validate_coordinates(x, y, z)?;
        Ok(self.voxel(x as usize, y as usize, z as usize))
    }

    /// Sets the voxel at the specified chunk-local coordinates.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if any coordinate is outside `[0, CHUNK_DIMENSION)`.
    /// The chunk is left untouched in that case.
    pub fn set(&mut self, x: i32, y: i32, z: i32, id: VoxelId) -> Result<()> {
        Self::validate_coordinates(x, y, z)?;
        self.set_voxel(x as usize, y as usize, z as usize, id);
        Ok(())
    }

    /// Returns a flat copy of the voxel data in X-Y-Z order.
    ///
    /// The array has exactly `CHUNK_SIZE` entries; entry `x*N*N + y*N + z` holds the
    /// voxel at (x, y, z). This layout is part of the persisted format.
    pub fn to_flat_array(&self) -> Vec<VoxelId> {
        self.voxels.clone()
    }

    /// Creates a chunk from a flat voxel array in X-Y-Z order.
    ///
    /// # Errors
    /// Returns [`Error::InvalidLength`] unless `data` holds exactly `CHUNK_SIZE` voxels.
    pub fn from_flat_array(data: &[VoxelId]) -> Result<Self> {
        if data.len() != CHUNK_SIZE as usize {
            return Err(Error::InvalidLength {
                expected: CHUNK_SIZE as usize,
                actual: data.len(),
            });
        }

        let mut cci = ChunkCreationIterator::new();
        for &id in data {
            cci.push_voxel(id);
        }

        Ok(cci.return_chunk())
    }

    /// Reads a voxel whose coordinates are already known to be in range.
    ///
    /// # Panics
    /// Panics if a coordinate is `CHUNK_DIMENSION` or larger.
    pub(crate) fn voxel(&self, x: usize, y: usize, z: usize) -> VoxelId {
        self.voxels[flat_index(x, y, z)]
    }

    /// Writes a voxel whose coordinates are already known to be in range,
    /// keeping the solid array in sync.
    pub(crate) fn set_voxel(&mut self, x: usize, y: usize, z: usize, id: VoxelId) {
        self.voxels[flat_index(x, y, z)] = id;
        self.solid_array
            .set(wrapped_index(x + 1, y + 1, z + 1), is_solid(id));
    }

    /// Checks if the voxel at the specified chunk-local coordinates is solid.
    ///
    /// Coordinates outside the chunk are never solid. Coordinates one voxel
    /// outside are answered from the padding layer.
    pub fn is_block_solid(&self, x: i32, y: i32, z: i32) -> bool {
        let range = -1..=CHUNK_DIMENSION;
        if !range.contains(&x) || !range.contains(&y) || !range.contains(&z) {
            return false;
        }

        self.solid_array[wrapped_index(
            (x + 1) as usize,
            (y + 1) as usize,
            (z + 1) as usize,
        )]
    }

    /// Determines which neighbours of the voxel at (x, y, z) are solid.
    ///
    /// This is used for face culling: a face only needs to be drawn when the
    /// neighbour it looks at is not solid. Neighbours outside the chunk count as
    /// empty.
    ///
    /// # Returns
    /// An array of 6 booleans indexed by `BlockSide as usize`, each `true` when the
    /// neighbour on that side is solid.
    pub fn generate_adjacent_blocks(&self, x: usize, y: usize, z: usize) -> [bool; 6] {
        let mut adjacency_data = [false; 6];
        for side in BlockSide::all() {
            let offset = side.offset();
            adjacency_data[side as usize] = self.is_block_solid(
                x as i32 + offset.x,
                y as i32 + offset.y,
                z as i32 + offset.z,
            );
        }
        adjacency_data
    }

    /// Number of solid voxels in the chunk.
    pub fn solid_count(&self) -> usize {
        self.solid_array.count_ones()
    }

    /// Returns `true` if every voxel is air.
    pub fn is_empty(&self) -> bool {
        self.solid_array.not_any()
    }

    /// Iterates over every solid voxel together with its local position.
    pub fn blocks(&self) -> ChunkBlockIterator<'_> {
        ChunkBlockIterator::new(self)
    }

    fn validate_coordinates(x: i32, y: i32, z: i32) -> Result<()> {
        let range = 0..CHUNK_DIMENSION;
        if range.contains(&x) && range.contains(&y) && range.contains(&z) {
            Ok(())
        } else {
            Err(Error::OutOfRange { x, y, z })
        }
    }
}
