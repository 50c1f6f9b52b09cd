//! # Chunk Iteration Module
//!
//! This module provides an iterator for traversing all non-air voxels in a chunk
//! in X-Y-Z order.

use cgmath::Point3;

use crate::voxels::block::{is_solid, VoxelId};

use super::{Chunk, CHUNK_DIMENSION};

/// An iterator over all non-air voxels in a chunk.
///
/// Yields the chunk-local position and identifier of each solid voxel. Air is
/// skipped, so iterating a sparse chunk is cheap for callers such as the culled
/// mesher that only care about solid voxels.
pub struct ChunkBlockIterator<'a> {
    /// Reference to the chunk being iterated over
    chunk_ref: &'a Chunk,
    /// Next position in the flat voxel array
    current_offset: usize,
}

impl<'a> ChunkBlockIterator<'a> {
    /// Creates a new `ChunkBlockIterator` positioned before the first voxel.
    pub fn new(chunk_ref: &'a Chunk) -> Self {
        ChunkBlockIterator {
            chunk_ref,
            current_offset: 0,
        }
    }
}

impl Iterator for ChunkBlockIterator<'_> {
    type Item = (Point3<usize>, VoxelId);

    fn next(&mut self) -> Option<Self::Item> {
        let dimension = CHUNK_DIMENSION as usize;
        let voxels = &self.chunk_ref.voxels;

        while self.current_offset < voxels.len() {
            let offset = self.current_offset;
            self.current_offset += 1;

            let id = voxels[offset];
            if !is_solid(id) {
                continue;
            }

            let position = Point3::new(
                offset / (dimension * dimension),
                (offset / dimension) % dimension,
                offset % dimension,
            );
            return Some((position, id));
        }

        None
    }
}
