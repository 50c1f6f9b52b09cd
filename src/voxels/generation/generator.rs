//! Noise-based heightmap terrain generation.

use log::{debug, info, warn};
use web_time::Instant;

use super::config::{WorldGenerationConfig, MAX_OCTAVES};
use super::layered::LayeredNoiseProvider;
use super::noise_provider::{NoiseProvider, ScaledNoiseProvider};
use super::perlin::PerlinNoiseProvider;
use crate::voxels::block::{VoxelId, AIR};
use crate::voxels::chunk::{Chunk, CHUNK_DIMENSION};
use crate::voxels::world::{ChunkPosition, World};

/// Produces chunk contents for a position in the chunk grid.
pub trait WorldGenerator {
    /// Generates the chunk at chunk coordinates (chunk_x, chunk_y, chunk_z).
    fn generate_chunk(&self, chunk_x: i32, chunk_y: i32, chunk_z: i32) -> Chunk;
}

/// Picks the block for a voxel at `world_y` in a column whose surface is at `height`.
///
/// - above the surface: air
/// - at the surface: the surface block
/// - one or two below the surface: the subsurface block
/// - deeper: the under block
pub fn stratify(height: i32, world_y: i32, config: &WorldGenerationConfig) -> VoxelId {
    if world_y > height {
        AIR
    } else if world_y == height {
        config.surface_block_id
    } else if world_y >= height - 2 {
        config.subsurface_block_id
    } else {
        config.under_block_id
    }
}

/// Heightmap terrain generator driven by layered Perlin noise.
///
/// Each (x, z) column samples the noise field once at `(worldX * scale, 0,
/// worldZ * scale)` and turns it into an integer surface height
/// `floor(noise * height_scale)`. Voxels are then stratified with [`stratify`].
pub struct NoiseBasedWorldGenerator {
    config: WorldGenerationConfig,
    noise: Box<dyn NoiseProvider>,
}

impl NoiseBasedWorldGenerator {
    /// Create a generator using `config.octaves` layers of Perlin noise.
    ///
    /// Octave `i` uses seed `seed + i`, frequency `lacunarity^i` and weight
    /// `persistence^i`. A single octave is one plain Perlin layer of weight 1.
    /// The octave count is clamped to `1..=MAX_OCTAVES`.
    pub fn new(config: WorldGenerationConfig) -> Self {
        let octaves = config.octaves.clamp(1, MAX_OCTAVES);
        if octaves != config.octaves {
            warn!(
                "Octave count {} clamped to {octaves}",
                config.octaves
            );
        }
        let layers = (0..octaves).map(|octave| {
            let perlin = PerlinNoiseProvider::new(config.seed.wrapping_add(octave));
            let frequency = config.lacunarity.powi(octave as i32);
            let weight = config.persistence.powi(octave as i32);
            let layer: Box<dyn NoiseProvider> =
                Box::new(ScaledNoiseProvider::new(perlin, frequency));
            (layer, weight)
        });
        let noise = Box::new(LayeredNoiseProvider::new(layers));

        Self { config, noise }
    }

    /// Create a generator sampling a caller-supplied noise field.
    pub fn with_noise(config: WorldGenerationConfig, noise: Box<dyn NoiseProvider>) -> Self {
        Self { config, noise }
    }

    /// Get the generation parameters.
    pub fn config(&self) -> &WorldGenerationConfig {
        &self.config
    }

    /// Surface height of the column at world position (x, z).
    pub fn height_at(&self, world_x: i32, world_z: i32) -> i32 {
        let noise_x = world_x as f64 * self.config.scale;
        let noise_z = world_z as f64 * self.config.scale;
        let noise_value = self.noise.sample(noise_x, 0.0, noise_z);
        (noise_value * self.config.height_scale).floor() as i32
    }
}

impl WorldGenerator for NoiseBasedWorldGenerator {
    fn generate_chunk(&self, chunk_x: i32, chunk_y: i32, chunk_z: i32) -> Chunk {
        let dimension = CHUNK_DIMENSION as usize;
        let position = ChunkPosition::new(chunk_x, chunk_y, chunk_z);
        let Some(origin) = position.checked_origin() else {
            warn!("Chunk {position:?} lies outside the addressable world, leaving it empty");
            return Chunk::default();
        };

        let mut heights = vec![0; dimension * dimension];
        for x in 0..dimension {
            for z in 0..dimension {
                heights[x * dimension + z] =
                    self.height_at(origin.x + x as i32, origin.z + z as i32);
            }
        }

        Chunk::from_fn(|x, y, z| {
            stratify(heights[x * dimension + z], origin.y + y as i32, &self.config)
        })
    }
}

/// Generates every chunk in `[-extent_x, extent_x] x [-extent_y, extent_y] x
/// [-extent_z, extent_z]` (inclusive) and stores it in `world`, replacing any
/// chunk already at that position.
///
/// # Returns
/// The number of chunks generated, `(2*extent_x + 1) * (2*extent_y + 1) * (2*extent_z + 1)`
/// for non-negative extents.
pub fn populate<G: WorldGenerator + ?Sized>(
    world: &mut World,
    generator: &G,
    extent_x: i32,
    extent_y: i32,
    extent_z: i32,
) -> usize {
    let start = Instant::now();
    let mut generated = 0;

    for chunk_x in extent_x.saturating_neg()..=extent_x {
        for chunk_y in extent_y.saturating_neg()..=extent_y {
            for chunk_z in extent_z.saturating_neg()..=extent_z {
                let chunk = generator.generate_chunk(chunk_x, chunk_y, chunk_z);
                debug!(
                    "Generated chunk ({chunk_x}, {chunk_y}, {chunk_z}) with {} solid voxels",
                    chunk.solid_count()
                );
                world.add_chunk(ChunkPosition::new(chunk_x, chunk_y, chunk_z), chunk);
                generated += 1;
            }
        }
    }

    info!(
        "Populated {generated} chunks in {:.2?}",
        start.elapsed()
    );
    generated
}
