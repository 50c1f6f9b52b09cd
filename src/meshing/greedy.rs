//! Greedy meshing implementation for voxel rendering.
//!
//! This module implements the greedy meshing algorithm which combines adjacent coplanar
//! faces of the same voxel type into larger quads, significantly reducing the number of
//! vertices needed to render a chunk.
//!
//! For every axis and both directions along it, each slice of the chunk is turned
//! into a 2D mask of visible faces, then the mask is consumed row by row into
//! rectangles. The rectangles are deterministic but not a minimal cover.

use super::face::{axes, Face};
use crate::voxels::block::block_side::BlockSide;
use crate::voxels::block::{VoxelId, AIR};
use crate::voxels::chunk::{Chunk, CHUNK_DIMENSION, CHUNK_PLANE_SIZE};

const N: usize = CHUNK_DIMENSION as usize;

/// Size of the scratch mask needed by [`greedy_faces`].
pub const MASK_SIZE: usize = CHUNK_PLANE_SIZE as usize;

/// Collects the merged boundary faces of `chunk` into `faces`.
///
/// # Arguments
/// * `chunk` - The chunk to mesh
/// * `mask` - Scratch space of at least [`MASK_SIZE`] entries, reused across slices
/// * `faces` - Output vector the faces are appended to
///
/// # Panics
/// Panics if `mask` is shorter than [`MASK_SIZE`].
pub fn greedy_faces(chunk: &Chunk, mask: &mut [VoxelId], faces: &mut Vec<Face>) {
    let mask = &mut mask[..MASK_SIZE];

    for axis in 0..3 {
        for positive in [false, true] {
            let side = BlockSide::from_axis(axis, positive);
            for slice in 0..N {
                fill_mask(chunk, side, slice, mask);
                merge_mask(mask, side, slice, faces);
            }
        }
    }
}

/// Writes the visible faces of one slice into `mask`, indexed `v * N + u`.
///
/// A cell holds the voxel ID when that voxel is solid and its neighbour on `side`
/// is not, and [`AIR`] otherwise.
fn fill_mask(chunk: &Chunk, side: BlockSide, slice: usize, mask: &mut [VoxelId]) {
    let (axis, u_axis, v_axis) = axes(side.axis());
    let step = if side.is_positive() { 1 } else { -1 };

    for v in 0..N {
        for u in 0..N {
            let mut position = [0; 3];
            position[axis] = slice;
            position[u_axis] = u;
            position[v_axis] = v;

            let id = chunk.voxel(position[0], position[1], position[2]);
            let mut neighbour = position.map(|c| c as i32);
            neighbour[axis] += step;

            mask[v * N + u] = if id != AIR
                && !chunk.is_block_solid(neighbour[0], neighbour[1], neighbour[2])
            {
                id
            } else {
                AIR
            };
        }
    }
}

/// Consumes `mask` into maximal rectangles anchored at the first unvisited cell
/// of a row-major scan. Every covered cell is cleared.
fn merge_mask(mask: &mut [VoxelId], side: BlockSide, slice: usize, faces: &mut Vec<Face>) {
    let plane = slice + usize::from(side.is_positive());

    for v in 0..N {
        let mut u = 0;
        while u < N {
            let id = mask[v * N + u];
            if id == AIR {
                u += 1;
                continue;
            }

            let mut width = 1;
            while u + width < N && mask[v * N + u + width] == id {
                width += 1;
            }

            let mut height = 1;
            while v + height < N {
                let row = (v + height) * N + u;
                if mask[row..row + width].iter().any(|&cell| cell != id) {
                    break;
                }
                height += 1;
            }

            for row in v..v + height {
                mask[row * N + u..row * N + u + width].fill(AIR);
            }

            faces.push(Face {
                block_id: id,
                side,
                plane,
                u,
                v,
                width,
                height,
            });
            u += width;
        }
    }
}

/// Collects one 1x1 face per exposed side of every solid voxel, without merging.
pub fn culled_faces(chunk: &Chunk, faces: &mut Vec<Face>) {
    for (position, id) in chunk.blocks() {
        let adjacent = chunk.generate_adjacent_blocks(position.x, position.y, position.z);
        for side in BlockSide::all() {
            if !adjacent[side as usize] {
                faces.push(Face::unit(position.x, position.y, position.z, id, side));
            }
        }
    }
}
