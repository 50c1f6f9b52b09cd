//! Configuration parameters for world generation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::Result;
use crate::voxels::block::block_type::BlockType;
use crate::voxels::block::VoxelId;
use crate::voxels::chunk::CHUNK_DIMENSION;

/// Most noise layers a generator builds; larger `octaves` values are clamped.
pub const MAX_OCTAVES: u32 = 16;

/// Parameters controlling terrain generation.
///
/// Deserialization fills any missing field from [`Default`], so a JSON file
/// only needs to name the values it changes:
///
/// ```
/// use voxel_world::voxels::generation::WorldGenerationConfig;
///
/// let config: WorldGenerationConfig = serde_json::from_str(r#"{ "seed": 7 }"#).unwrap();
/// assert_eq!(config.seed, 7);
/// assert_eq!(config.height_scale, 16.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldGenerationConfig {
    /// Seed for the noise permutation tables
    pub seed: u32,
    /// Factor converting world coordinates to noise space
    pub scale: f64,
    /// Maximum terrain height in world units
    pub height_scale: f64,
    /// Number of Perlin layers (1 = a single layer, at most [`MAX_OCTAVES`])
    pub octaves: u32,
    /// Weight multiplier between successive octaves
    pub persistence: f64,
    /// Frequency multiplier between successive octaves
    pub lacunarity: f64,
    /// Block placed at the terrain surface (e.g. grass)
    pub surface_block_id: VoxelId,
    /// Block placed in the two layers below the surface (e.g. dirt)
    pub subsurface_block_id: VoxelId,
    /// Block placed everywhere deeper (e.g. stone)
    pub under_block_id: VoxelId,
}

impl Default for WorldGenerationConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            scale: 1.0,
            height_scale: CHUNK_DIMENSION as f64,
            octaves: 1,
            persistence: 0.5,
            lacunarity: 2.0,
            surface_block_id: BlockType::GRASS.id(),
            subsurface_block_id: BlockType::DIRT.id(),
            under_block_id: BlockType::STONE.id(),
        }
    }
}

impl WorldGenerationConfig {
    /// Load a configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Save the configuration as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WorldGenerationConfig::default();
        assert_eq!(config.seed, 0);
        assert_eq!(config.scale, 1.0);
        assert_eq!(config.height_scale, 16.0);
        assert_eq!(config.octaves, 1);
        assert_eq!(config.surface_block_id, 1);
        assert_eq!(config.subsurface_block_id, 2);
        assert_eq!(config.under_block_id, 3);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: WorldGenerationConfig =
            serde_json::from_str(r#"{ "scale": 0.05, "under_block_id": 9 }"#).unwrap();
        assert_eq!(config.scale, 0.05);
        assert_eq!(config.under_block_id, 9);
        assert_eq!(config.surface_block_id, 1);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = WorldGenerationConfig {
            seed: 77,
            octaves: 3,
            ..Default::default()
        };

        config.save(&path).unwrap();
        assert_eq!(WorldGenerationConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_rejects_out_of_range_block_id() {
        let result: serde_json::Result<WorldGenerationConfig> =
            serde_json::from_str(r#"{ "surface_block_id": 300 }"#);
        assert!(result.is_err());
    }
}
