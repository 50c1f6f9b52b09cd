//! # World Module
//!
//! This module provides the `World` struct which manages a sparse collection of
//! chunks addressed by world coordinates.
//!
//! ## Architecture
//!
//! The world uses a sparse storage approach where only chunks that have been
//! accessed, generated or loaded are kept in memory. Any other position behaves
//! as an empty chunk, and is materialised as one the first time it is touched.
//!
//! ## Coordinates
//!
//! World coordinates are arbitrary signed integers. A world coordinate `c` lives
//! in chunk `floor(c / N)` at local index `c mod N` (floor modulo), so local
//! indices are always in `[0, N)`, including for negative coordinates:
//!
//! | world | chunk | local |
//! |-------|-------|-------|
//! | 0     | 0     | 0     |
//! | 15    | 0     | 15    |
//! | 16    | 1     | 0     |
//! | -1    | -1    | 15    |
//! | -16   | -1    | 0     |
//! | -17   | -2    | 15    |

use std::collections::HashMap;

use cgmath::Point3;
use serde::{Deserialize, Serialize};

use super::block::VoxelId;
use super::chunk::{Chunk, CHUNK_DIMENSION};

/// Position of a chunk in the chunk grid.
///
/// Each unit is `CHUNK_DIMENSION` world units along its axis.
/// Only positions between [`ChunkPosition::MIN_INDEX`] and
/// [`ChunkPosition::MAX_INDEX`] on every axis hold addressable voxels.
/// Deserialization rejects anything else.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawChunkPosition")]
pub struct ChunkPosition {
    /// Chunk index along X
    pub x: i32,
    /// Chunk index along Y
    pub y: i32,
    /// Chunk index along Z
    pub z: i32,
}

impl ChunkPosition {
    /// Smallest chunk index whose voxels have i32 world coordinates.
    pub const MIN_INDEX: i32 = i32::MIN / CHUNK_DIMENSION;
    /// Largest chunk index whose voxels have i32 world coordinates.
    pub const MAX_INDEX: i32 = i32::MAX / CHUNK_DIMENSION;

    /// Creates a chunk position from chunk grid indices.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        ChunkPosition { x, y, z }
    }

    /// Gets the chunk containing the given world coordinates.
    pub fn from_world(x: i32, y: i32, z: i32) -> Self {
        ChunkPosition {
            x: div_floor(x, CHUNK_DIMENSION),
            y: div_floor(y, CHUNK_DIMENSION),
            z: div_floor(z, CHUNK_DIMENSION),
        }
    }

    /// Whether every voxel of this chunk has an i32 world coordinate.
    pub fn is_addressable(&self) -> bool {
        let range = Self::MIN_INDEX..=Self::MAX_INDEX;
        range.contains(&self.x) && range.contains(&self.y) && range.contains(&self.z)
    }

    /// World coordinates of this chunk's voxel (0, 0, 0), or `None` when the
    /// chunk lies outside the addressable world.
    pub fn checked_origin(&self) -> Option<Point3<i32>> {
        if !self.is_addressable() {
            return None;
        }
        Some(Point3::new(
            self.x * CHUNK_DIMENSION,
            self.y * CHUNK_DIMENSION,
            self.z * CHUNK_DIMENSION,
        ))
    }

    /// World coordinates of this chunk's voxel (0, 0, 0).
    ///
    /// Saturates at the i32 limits for positions that are not
    /// [addressable](ChunkPosition::is_addressable).
    pub fn origin(&self) -> Point3<i32> {
        Point3::new(
            self.x.saturating_mul(CHUNK_DIMENSION),
            self.y.saturating_mul(CHUNK_DIMENSION),
            self.z.saturating_mul(CHUNK_DIMENSION),
        )
    }
}

/// Wire form of [`ChunkPosition`] before range validation.
#[derive(Deserialize)]
struct RawChunkPosition {
    x: i32,
    y: i32,
    z: i32,
}

impl TryFrom<RawChunkPosition> for ChunkPosition {
    type Error = String;

    fn try_from(raw: RawChunkPosition) -> Result<Self, Self::Error> {
        let position = ChunkPosition::new(raw.x, raw.y, raw.z);
        if position.is_addressable() {
            Ok(position)
        } else {
            Err(format!(
                "chunk position ({}, {}, {}) lies outside [{}, {}]",
                raw.x,
                raw.y,
                raw.z,
                ChunkPosition::MIN_INDEX,
                ChunkPosition::MAX_INDEX
            ))
        }
    }
}

impl From<Point3<i32>> for ChunkPosition {
    fn from(point: Point3<i32>) -> Self {
        ChunkPosition::new(point.x, point.y, point.z)
    }
}

/// Floor division: rounds towards negative infinity.
#[inline]
pub fn div_floor(a: i32, b: i32) -> i32 {
    a.div_euclid(b)
}

/// Floor modulo: the result is always in `[0, b)` for positive `b`.
#[inline]
pub fn mod_floor(a: i32, b: i32) -> i32 {
    a.rem_euclid(b)
}

/// Splits world coordinates into the owning chunk and the chunk-local position.
pub fn world_to_local(x: i32, y: i32, z: i32) -> (ChunkPosition, Point3<usize>) {
    (
        ChunkPosition::from_world(x, y, z),
        Point3::new(
            mod_floor(x, CHUNK_DIMENSION) as usize,
            mod_floor(y, CHUNK_DIMENSION) as usize,
            mod_floor(z, CHUNK_DIMENSION) as usize,
        ),
    )
}

/// Represents a voxel world composed of multiple chunks.
///
/// The world is stored as a sparse 3D grid of chunks, where each chunk is a 16x16x16
/// collection of voxels. Chunks are created lazily and never removed.
///
/// # Examples
///
/// ```
/// use voxel_world::voxels::world::{ChunkPosition, World};
///
/// let mut world = World::new();
/// world.set_voxel(-1, -1, -1, 9);
///
/// assert_eq!(world.get_voxel(-1, -1, -1), 9);
/// assert!(world.get_chunk(ChunkPosition::new(-1, -1, -1)).is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct World {
    /// A mapping from chunk coordinates to chunk data.
    chunks: HashMap<ChunkPosition, Chunk>,
}

impl World {
    /// Creates a new, empty world.
    pub fn new() -> Self {
        World {
            chunks: HashMap::new(),
        }
    }

    /// Retrieves the chunk at `position`, creating an empty one first if none is stored.
    pub fn get_or_create_chunk(&mut self, position: ChunkPosition) -> &mut Chunk {
        self.chunks.entry(position).or_default()
    }

    /// Retrieves the chunk at `position` without creating it.
    ///
    /// # Returns
    ///
    /// `None` if no chunk has been stored at that position yet.
    pub fn get_chunk(&self, position: ChunkPosition) -> Option<&Chunk> {
        self.chunks.get(&position)
    }

    /// Inserts a chunk at `position`, replacing any chunk already stored there.
    ///
    /// This bypasses lazy creation and is used by terrain population and by
    /// deserialization.
    pub fn add_chunk(&mut self, position: ChunkPosition, chunk: Chunk) {
        self.chunks.insert(position, chunk);
    }

    /// Gets the voxel at the given world coordinates.
    ///
    /// Like every lookup, this creates the owning chunk if it does not exist yet.
    pub fn get_voxel(&mut self, x: i32, y: i32, z: i32) -> VoxelId {
        let (position, local) = world_to_local(x, y, z);
        self.get_or_create_chunk(position)
            .voxel(local.x, local.y, local.z)
    }

    /// Sets the voxel at the given world coordinates.
    pub fn set_voxel(&mut self, x: i32, y: i32, z: i32, id: VoxelId) {
        let (position, local) = world_to_local(x, y, z);
        self.get_or_create_chunk(position)
            .set_voxel(local.x, local.y, local.z, id);
    }

    /// Enumerates all stored chunks and their flattened voxel data.
    ///
    /// The order is unspecified. Every stored position appears exactly once, and the
    /// enumeration can be restarted by calling this method again.
    pub fn enumerate_chunks(&self) -> impl Iterator<Item = (ChunkPosition, Vec<VoxelId>)> + '_ {
        self.chunks
            .iter()
            .map(|(position, chunk)| (*position, chunk.to_flat_array()))
    }

    /// Iterates over stored chunks by reference, in unspecified order.
    pub fn chunks(&self) -> impl Iterator<Item = (&ChunkPosition, &Chunk)> {
        self.chunks.iter()
    }

    /// Number of chunks currently stored.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }
}
