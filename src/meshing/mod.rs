//! Mesh generation for voxel chunks.
//!
//! This module converts voxel data into renderer-agnostic triangle meshes. Only
//! faces between a solid voxel and a non-solid neighbour are emitted, and
//! anything outside the chunk counts as non-solid, so every chunk is meshed
//! independently of its neighbours.
//!
//! # Architecture
//! - [`MeshBuilder`]: turns a [`Chunk`] (or a whole [`World`]) into [`MeshData`]
//! - [`MeshingStrategy`]: greedy rectangle merging or one quad per voxel face
//! - [`Face`]: an axis-aligned rectangle of voxel faces
//! - [`occlusion`]: per-vertex ambient occlusion
//!
//! # Usage
//! ```
//! use voxel_world::meshing::MeshBuilder;
//! use voxel_world::voxels::chunk::Chunk;
//!
//! let chunk = Chunk::filled(3);
//! let mesh = MeshBuilder::new().generate_mesh(&chunk);
//!
//! // The whole solid chunk merges into its six outer faces.
//! assert_eq!(mesh.quad_count(), 6);
//! assert_eq!(mesh.indices.len(), 36);
//! ```

use cgmath::Vector3;
use log::{debug, warn};
use web_time::Instant;

use crate::voxels::block::{get_color_from_id, VoxelId, AIR};
use crate::voxels::chunk::Chunk;
use crate::voxels::world::World;

mod face;
mod greedy;
mod mesh;
pub mod occlusion;

pub use face::Face;
pub use mesh::{MeshData, Vertex};

/// How faces are grouped into quads.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum MeshingStrategy {
    /// Merge adjacent coplanar faces of the same voxel type into rectangles.
    #[default]
    Greedy,
    /// Emit one quad per visible voxel face.
    Culled,
}

/// Builds meshes from chunks.
///
/// The builder owns the scratch buffers used while meshing, so reusing one
/// builder for many chunks avoids reallocating them.
#[derive(Debug)]
pub struct MeshBuilder {
    strategy: MeshingStrategy,
    mask: Vec<VoxelId>,
    faces: Vec<Face>,
}

impl Default for MeshBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshBuilder {
    /// Creates a builder using greedy meshing.
    pub fn new() -> Self {
        Self::with_strategy(MeshingStrategy::default())
    }

    /// Creates a builder using the given strategy.
    pub fn with_strategy(strategy: MeshingStrategy) -> Self {
        MeshBuilder {
            strategy,
            mask: vec![AIR; greedy::MASK_SIZE],
            faces: Vec::new(),
        }
    }

    /// The strategy this builder uses.
    pub fn strategy(&self) -> MeshingStrategy {
        self.strategy
    }

    /// Generates the mesh of a single chunk in chunk-local coordinates.
    ///
    /// # Returns
    /// A [`MeshData`] with one quad per emitted face. An empty chunk yields an
    /// empty mesh.
    pub fn generate_mesh(&mut self, chunk: &Chunk) -> MeshData {
        let start = Instant::now();
        let mut mesh = MeshData::new();
        if chunk.is_empty() {
            return mesh;
        }

        self.faces.clear();
        match self.strategy {
            MeshingStrategy::Greedy => greedy::greedy_faces(chunk, &mut self.mask, &mut self.faces),
            MeshingStrategy::Culled => greedy::culled_faces(chunk, &mut self.faces),
        }

        for face in &self.faces {
            let corners = face.corners().map(|corner| {
                [corner.x as f32, corner.y as f32, corner.z as f32]
            });
            mesh.push_quad(
                corners,
                face.side.normal(),
                occlusion::face_ambient_occlusion(chunk, face),
                get_color_from_id(face.block_id),
            );
        }

        debug!(
            "Meshed chunk with {} solid voxels into {} quads in {:.2?}",
            chunk.solid_count(),
            mesh.quad_count(),
            start.elapsed()
        );
        mesh
    }

    /// Meshes every stored chunk of `world` into one mesh in world coordinates.
    ///
    /// Each chunk is meshed on its own and translated by its origin. Faces on
    /// chunk borders are emitted even when the neighbouring chunk is solid there.
    /// Chunks are visited in position order, so equal worlds give equal meshes.
    /// Chunks outside the addressable world are skipped.
    pub fn generate_world_mesh(&mut self, world: &World) -> MeshData {
        let start = Instant::now();
        let mut world_mesh = MeshData::new();

        let mut chunks: Vec<_> = world.chunks().collect();
        chunks.sort_unstable_by_key(|(position, _)| **position);

        for (position, chunk) in chunks {
            let Some(origin) = position.checked_origin() else {
                warn!("Skipping chunk {position:?} outside the addressable world");
                continue;
            };
            let chunk_mesh = self.generate_mesh(chunk);
            if chunk_mesh.is_empty() {
                continue;
            }
            let offset = Vector3::new(origin.x as f32, origin.y as f32, origin.z as f32);
            world_mesh.append(&chunk_mesh, offset);
        }

        debug!(
            "Meshed {} chunks into {} quads in {:.2?}",
            world.chunk_count(),
            world_mesh.quad_count(),
            start.elapsed()
        );
        world_mesh
    }
}

/// Generates the greedy mesh of a chunk with a throwaway builder.
pub fn generate_mesh(chunk: &Chunk) -> MeshData {
    MeshBuilder::new().generate_mesh(chunk)
}

#[cfg(test)]
mod tests {
    use cgmath::InnerSpace;

    use super::*;
    use crate::voxels::block::block_side::BlockSide;
    use crate::voxels::chunk::CHUNK_DIMENSION;
    use crate::voxels::world::ChunkPosition;

    const N: usize = CHUNK_DIMENSION as usize;

    fn single_voxel() -> Chunk {
        let mut chunk = Chunk::new();
        chunk.set(0, 0, 0, 1).unwrap();
        chunk
    }

    fn assert_well_formed(mesh: &MeshData) {
        assert_eq!(mesh.vertices.len() % 12, 0);
        assert_eq!(mesh.indices.len() % 6, 0);
        assert_eq!(mesh.normals.len(), mesh.vertices.len());
        assert_eq!(mesh.colors.len(), mesh.vertices.len());
        assert_eq!(mesh.ambient_occlusion.len(), mesh.vertex_count());
        assert!(mesh
            .indices
            .iter()
            .all(|&index| (index as usize) < mesh.vertex_count()));
        assert!(mesh
            .ambient_occlusion
            .iter()
            .all(|ao| (0.0..=1.0).contains(ao)));
    }

    #[test]
    fn test_empty_chunk_gives_empty_mesh() {
        for strategy in [MeshingStrategy::Greedy, MeshingStrategy::Culled] {
            let mesh = MeshBuilder::with_strategy(strategy).generate_mesh(&Chunk::new());
            assert!(mesh.is_empty());
            assert!(mesh.vertices.is_empty());
        }
    }

    #[test]
    fn test_single_voxel() {
        for strategy in [MeshingStrategy::Greedy, MeshingStrategy::Culled] {
            let mesh = MeshBuilder::with_strategy(strategy).generate_mesh(&single_voxel());
            assert_eq!(mesh.vertex_count(), 24);
            assert_eq!(mesh.vertices.len(), 72);
            assert_eq!(mesh.indices.len(), 36);
            assert!(mesh.ambient_occlusion.iter().all(|&ao| ao == 1.0));
            assert!(mesh.vertices.iter().all(|&c| c == 0.0 || c == 1.0));
            assert_well_formed(&mesh);
        }
    }

    #[test]
    fn test_single_voxel_normals() {
        let mesh = generate_mesh(&single_voxel());
        for side in BlockSide::all() {
            let normal = side.normal();
            let matching = mesh
                .normals
                .chunks_exact(3)
                .filter(|n| **n == [normal.x, normal.y, normal.z])
                .count();
            assert_eq!(matching, 4, "{side:?}");
        }
    }

    #[test]
    fn test_full_chunk() {
        let greedy = generate_mesh(&Chunk::filled(2));
        assert_eq!(greedy.vertex_count(), 24);
        assert_eq!(greedy.indices.len(), 36);
        assert_well_formed(&greedy);

        let culled = MeshBuilder::with_strategy(MeshingStrategy::Culled)
            .generate_mesh(&Chunk::filled(2));
        assert_eq!(culled.quad_count(), 6 * N * N);
        assert_well_formed(&culled);
    }

    #[test]
    fn test_triangles_wind_towards_normal() {
        let chunk = Chunk::from_fn(|x, y, z| if (x * 7 + y * 3 + z) % 4 == 0 { 3 } else { 0 });
        let mesh = generate_mesh(&chunk);
        assert_well_formed(&mesh);

        let position = |i: u32| {
            let i = i as usize * 3;
            Vector3::new(mesh.vertices[i], mesh.vertices[i + 1], mesh.vertices[i + 2])
        };
        for triangle in mesh.indices.chunks_exact(3) {
            let (a, b, c) = (position(triangle[0]), position(triangle[1]), position(triangle[2]));
            let n = triangle[0] as usize * 3;
            let normal = Vector3::new(mesh.normals[n], mesh.normals[n + 1], mesh.normals[n + 2]);
            assert!((b - a).cross(c - a).dot(normal) > 0.0);
        }
    }

    #[test]
    fn test_colors_follow_block_type() {
        let mesh = generate_mesh(&single_voxel());
        for color in mesh.colors.chunks_exact(3) {
            assert_eq!(color, &[0.2, 0.8, 0.2]);
        }

        let mut unknown = Chunk::new();
        unknown.set(3, 3, 3, 200).unwrap();
        let mesh = generate_mesh(&unknown);
        assert!(mesh.colors.iter().all(|&c| c == 1.0));
    }

    #[test]
    fn test_ambient_occlusion_darkens_inner_corners() {
        // A floor with a single block standing on it.
        let mut chunk = Chunk::from_fn(|_, y, _| if y == 0 { 3 } else { 0 });
        chunk.set(5, 1, 5, 3).unwrap();

        let mesh = generate_mesh(&chunk);
        let darkened = mesh.ambient_occlusion.iter().filter(|&&ao| ao < 1.0).count();
        assert!(darkened > 0);
        assert!(mesh
            .ambient_occlusion
            .iter()
            .all(|&ao| [0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0]
                .iter()
                .any(|level| (ao - level).abs() < 1e-6)));
    }

    #[test]
    fn test_builder_is_reusable() {
        let mut builder = MeshBuilder::new();
        let first = builder.generate_mesh(&Chunk::checkerboard(1));
        let _ = builder.generate_mesh(&Chunk::filled(1));
        let again = builder.generate_mesh(&Chunk::checkerboard(1));
        assert_eq!(first, again);
    }

    #[test]
    fn test_world_mesh_translates_chunks() {
        let mut world = World::new();
        world.set_voxel(0, 0, 0, 1);
        world.set_voxel(CHUNK_DIMENSION, 0, 0, 2);
        world.set_voxel(-1, -1, -1, 3);
        world.get_or_create_chunk(ChunkPosition::new(5, 5, 5));

        let mesh = MeshBuilder::new().generate_world_mesh(&world);
        assert_eq!(mesh.quad_count(), 18);
        assert_well_formed(&mesh);

        let xs: Vec<f32> = mesh.vertices.chunks_exact(3).map(|p| p[0]).collect();
        assert!(xs.contains(&17.0));
        assert!(xs.contains(&-1.0));
        assert!(mesh.vertices.iter().all(|&c| (-1.0..=17.0).contains(&c)));
    }

    #[test]
    fn test_world_mesh_ignores_insertion_order() {
        let positions: Vec<ChunkPosition> = (-3..3)
            .flat_map(|x| (-1..2).map(move |z| ChunkPosition::new(x, x.rem_euclid(2), z)))
            .collect();
        let chunk_at = |position: &ChunkPosition| {
            Chunk::from_fn(|x, y, z| ((x + y + z) as i32 + position.x + position.z).rem_euclid(4) as u8)
        };

        let mut forward = World::new();
        for position in &positions {
            forward.add_chunk(*position, chunk_at(position));
        }
        let mut backward = World::new();
        for position in positions.iter().rev() {
            backward.add_chunk(*position, chunk_at(position));
        }

        let mut builder = MeshBuilder::new();
        let a = builder.generate_world_mesh(&forward);
        let b = builder.generate_world_mesh(&backward);
        assert!(!a.is_empty());
        assert_eq!(a, b);
    }

    #[test]
    fn test_world_mesh_skips_unaddressable_chunks() {
        let mut world = World::new();
        world.set_voxel(0, 0, 0, 1);
        world.add_chunk(ChunkPosition::new(200_000_000, 0, 0), Chunk::filled(1));
        world.add_chunk(ChunkPosition::new(0, i32::MIN, 0), Chunk::filled(2));

        let mesh = MeshBuilder::new().generate_world_mesh(&world);
        assert_eq!(mesh.quad_count(), 6);
        assert!(mesh.vertices.iter().all(|&c| (0.0..=1.0).contains(&c)));
    }
}
