//! # Chunk Creation Module
//!
//! This module provides a builder that fills a chunk sequentially in X-Y-Z order
//! (the same order as the flat voxel array) while building the padded solidity
//! bit vector alongside it.
//!
//! Pushing in order lets the builder append to the bit vector instead of
//! computing a padded index per voxel: padding bits are emitted whenever a row,
//! plane or the whole chunk is finished.

use bitvec::vec::BitVec;

use crate::voxels::block::{is_solid, VoxelId};

use super::{Chunk, CHUNK_DIMENSION_WRAPPED, CHUNK_PLANE_SIZE_WRAPPED, CHUNK_SIZE, CHUNK_SIZE_WRAPPED};

/// A builder for creating chunks one voxel at a time in X-Y-Z order.
///
/// The builder ensures the voxel array and the padded solid array remain
/// consistent as voxels are added.
pub struct ChunkCreationIterator {
    /// Bit vector where each bit represents whether a block is solid (1) or air (0)
    ///
    /// This is stored with padding (CHUNK_DIMENSION_WRAPPED) to simplify neighbor lookups.
    solid_array: BitVec,
    /// Voxel identifiers pushed so far, in X-Y-Z order
    voxels: Vec<VoxelId>,
    /// Current X position within the padded chunk (1..CHUNK_DIMENSION_WRAPPED-1)
    ///
    /// Note the 1-based indexing to account for the padding in the solid array.
    local_x: usize,
    /// Current Y position within the padded chunk (1..CHUNK_DIMENSION_WRAPPED-1)
    local_y: usize,
    /// Current Z position within the padded chunk (1..CHUNK_DIMENSION_WRAPPED-1)
    local_z: usize,
}

impl ChunkCreationIterator {
    /// Creates a new `ChunkCreationIterator` positioned at voxel (0, 0, 0).
    pub fn new() -> Self {
        let mut solid_array = BitVec::with_capacity(CHUNK_SIZE_WRAPPED);
        // Padding for the first plane, the first row of the next plane and the
        // first column of that row
        for _ in 0..(CHUNK_PLANE_SIZE_WRAPPED + CHUNK_DIMENSION_WRAPPED + 1) {
            solid_array.push(false);
        }
        ChunkCreationIterator {
            solid_array,
            voxels: Vec::with_capacity(CHUNK_SIZE as usize),
            local_x: 1,
            local_y: 1,
            local_z: 1,
        }
    }

    /// Finalizes the chunk creation and returns the constructed `Chunk`.
    ///
    /// # Panics
    /// Panics in debug builds if fewer or more than `CHUNK_SIZE` voxels were pushed.
    pub fn return_chunk(self) -> Chunk {
        debug_assert_eq!(self.voxels.len(), CHUNK_SIZE as usize);
        debug_assert_eq!(self.solid_array.len(), CHUNK_SIZE_WRAPPED);
        Chunk {
            voxels: self.voxels,
            solid_array: self.solid_array,
        }
    }

    /// Adds a voxel at the current position and advances the position.
    ///
    /// Z advances fastest, then Y, then X.
    pub fn push_voxel(&mut self, id: VoxelId) {
        self.solid_array.push(is_solid(id));
        self.voxels.push(id);

        self.local_z += 1;

        // End of row: close this row and open the next one
        if self.local_z == CHUNK_DIMENSION_WRAPPED - 1 {
            self.solid_array.push(false);
            self.solid_array.push(false);

            self.local_z = 1;
            self.local_y += 1;

            // End of plane: the rest of the padding row, the padding row of the
            // next plane and the first column of its first row
            if self.local_y == CHUNK_DIMENSION_WRAPPED - 1 {
                for _ in 0..2 * CHUNK_DIMENSION_WRAPPED {
                    self.solid_array.push(false);
                }

                self.local_y = 1;
                self.local_x += 1;

                // End of chunk: close the trailing padding plane
                if self.local_x == CHUNK_DIMENSION_WRAPPED - 1 {
                    for _ in 0..CHUNK_PLANE_SIZE_WRAPPED - CHUNK_DIMENSION_WRAPPED - 1 {
                        self.solid_array.push(false);
                    }
                }
            }
        }
    }
}
