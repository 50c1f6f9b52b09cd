//! # World Serializer
//!
//! Persists a [`World`] as a JSON document of chunk records:
//!
//! ```json
//! { "chunks": [ { "position": { "x": 0, "y": 0, "z": 0 }, "voxels": [0, 1, ...] } ] }
//! ```
//!
//! Each `voxels` array holds exactly `CHUNK_SIZE` values in X-Y-Z order, as
//! produced by [`Chunk::to_flat_array`]. Records are written sorted by position
//! so saving the same world twice yields the same bytes.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use web_time::Instant;

use super::block::VoxelId;
use super::chunk::Chunk;
use super::world::{ChunkPosition, World};
use crate::core::Result;

/// Top-level persisted document.
#[derive(Debug, Serialize, Deserialize)]
struct WorldDocument {
    chunks: Vec<ChunkRecord>,
}

/// One stored chunk.
#[derive(Debug, Serialize, Deserialize)]
struct ChunkRecord {
    position: ChunkPosition,
    voxels: Vec<VoxelId>,
}

/// Saves and loads worlds as JSON documents.
pub struct WorldSerializer;

impl WorldSerializer {
    /// Encodes every stored chunk of `world` as a pretty-printed JSON document.
    pub fn to_string(world: &World) -> Result<String> {
        let mut chunks: Vec<ChunkRecord> = world
            .enumerate_chunks()
            .map(|(position, voxels)| ChunkRecord { position, voxels })
            .collect();
        chunks.sort_unstable_by_key(|record| record.position);

        Ok(serde_json::to_string_pretty(&WorldDocument { chunks })?)
    }

    /// Decodes a document into a fresh world.
    ///
    /// # Errors
    /// - [`Error::Format`](crate::core::Error::Format) if the text is not a valid
    ///   document (missing fields, wrong types, voxel values above 255, or a
    ///   position outside the [addressable](ChunkPosition::is_addressable) range)
    /// - [`Error::InvalidLength`](crate::core::Error::InvalidLength) if a voxel
    ///   array does not hold exactly one value per chunk voxel
    ///
    /// No partially loaded world is ever returned.
    pub fn from_str(document: &str) -> Result<World> {
        let document: WorldDocument = serde_json::from_str(document)?;
        let mut world = World::new();
        for record in document.chunks {
            let chunk = Chunk::from_flat_array(&record.voxels)?;
            world.add_chunk(record.position, chunk);
        }

        Ok(world)
    }

    /// Writes `world` to `path`.
    ///
    /// The document is first written to a sibling temporary file which then
    /// replaces `path`, so an existing file is never left half-written.
    pub fn save(world: &World, path: &Path) -> Result<()> {
        let start = Instant::now();
        let json = Self::to_string(world)?;

        let temp_path = temp_sibling(path);
        if let Err(e) = fs::write(&temp_path, &json).and_then(|()| fs::rename(&temp_path, path)) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        info!(
            "Saved {} chunks to {} in {:.2?}",
            world.chunk_count(),
            path.display(),
            start.elapsed()
        );
        Ok(())
    }

    /// Reads a world previously written by [`WorldSerializer::save`].
    pub fn load(path: &Path) -> Result<World> {
        let start = Instant::now();
        let json = fs::read_to_string(path)?;
        let world = Self::from_str(&json)?;

        debug!("Parsed {} bytes from {}", json.len(), path.display());
        info!(
            "Loaded {} chunks from {} in {:.2?}",
            world.chunk_count(),
            path.display(),
            start.elapsed()
        );
        Ok(world)
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| "world".into());
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;
    use crate::voxels::chunk::{CHUNK_DIMENSION, CHUNK_SIZE};

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("world.json");

        let mut world = World::new();
        world.set_voxel(0, 0, 0, 1);
        world.set_voxel(CHUNK_DIMENSION - 1, CHUNK_DIMENSION - 1, CHUNK_DIMENSION - 1, 2);
        world.set_voxel(CHUNK_DIMENSION, 0, 0, 3);

        WorldSerializer::save(&world, &path).unwrap();
        let mut loaded = WorldSerializer::load(&path).unwrap();

        assert_eq!(loaded.chunk_count(), 2);
        assert_eq!(loaded.get_voxel(0, 0, 0), 1);
        assert_eq!(
            loaded.get_voxel(CHUNK_DIMENSION - 1, CHUNK_DIMENSION - 1, CHUNK_DIMENSION - 1),
            2
        );
        assert_eq!(loaded.get_voxel(CHUNK_DIMENSION, 0, 0), 3);
        assert_eq!(loaded.get_voxel(1, 1, 1), 0);
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("world.json");
        let mut world = World::new();
        world.set_voxel(-5, 3, 7, 4);

        WorldSerializer::save(&world, &path).unwrap();
        WorldSerializer::save(&world, &path).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_negative_positions_round_trip() {
        let mut world = World::new();
        world.set_voxel(-17, -18, -1, 9);

        let json = WorldSerializer::to_string(&world).unwrap();
        let mut loaded = WorldSerializer::from_str(&json).unwrap();
        assert_eq!(loaded.get_voxel(-17, -18, -1), 9);
        assert!(loaded.get_chunk(ChunkPosition::new(-2, -2, -1)).is_some());
    }

    #[test]
    fn test_document_layout() {
        let mut world = World::new();
        world.set_voxel(0, 0, 1, 5);
        let json = WorldSerializer::to_string(&world).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let record = &value["chunks"][0];
        assert_eq!(record["position"]["x"], 0);
        assert_eq!(record["position"]["y"], 0);
        assert_eq!(record["position"]["z"], 0);
        let voxels = record["voxels"].as_array().unwrap();
        assert_eq!(voxels.len(), CHUNK_SIZE as usize);
        assert_eq!(voxels[1], 5);
    }

    #[test]
    fn test_output_is_deterministic() {
        let mut world = World::new();
        for i in -3..3 {
            world.set_voxel(i * CHUNK_DIMENSION, i, -i * CHUNK_DIMENSION, 1);
        }
        assert_eq!(
            WorldSerializer::to_string(&world).unwrap(),
            WorldSerializer::to_string(&world.clone()).unwrap()
        );
    }

    #[test]
    fn test_wrong_voxel_count_is_rejected() {
        let json = r#"{ "chunks": [ { "position": { "x": 0, "y": 0, "z": 0 }, "voxels": [1, 2, 3] } ] }"#;
        assert!(matches!(
            WorldSerializer::from_str(json),
            Err(Error::InvalidLength {
                expected: 4096,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_missing_fields_are_rejected() {
        assert!(matches!(
            WorldSerializer::from_str(r#"{ "chunks": [ { "voxels": [] } ] }"#),
            Err(Error::Format(_))
        ));
        assert!(matches!(
            WorldSerializer::from_str(r#"{}"#),
            Err(Error::Format(_))
        ));
        assert!(matches!(
            WorldSerializer::from_str("not json"),
            Err(Error::Format(_))
        ));
    }

    #[test]
    fn test_voxel_value_above_byte_is_rejected() {
        let mut voxels = vec!["0"; CHUNK_SIZE as usize];
        voxels[0] = "256";
        let json = format!(
            r#"{{ "chunks": [ {{ "position": {{ "x": 0, "y": 0, "z": 0 }}, "voxels": [{}] }} ] }}"#,
            voxels.join(",")
        );
        assert!(matches!(
            WorldSerializer::from_str(&json),
            Err(Error::Format(_))
        ));
    }

    #[test]
    fn test_unaddressable_position_is_rejected() {
        let voxels = vec!["1"; CHUNK_SIZE as usize].join(",");
        let json = format!(
            r#"{{ "chunks": [ {{ "position": {{ "x": 200000000, "y": 0, "z": 0 }}, "voxels": [{}] }} ] }}"#,
            voxels
        );
        assert!(matches!(
            WorldSerializer::from_str(&json),
            Err(Error::Format(_))
        ));

        let edge = format!(
            r#"{{ "chunks": [ {{ "position": {{ "x": {}, "y": 0, "z": {} }}, "voxels": [{}] }} ] }}"#,
            ChunkPosition::MAX_INDEX,
            ChunkPosition::MIN_INDEX,
            voxels
        );
        let world = WorldSerializer::from_str(&edge).unwrap();
        assert_eq!(world.chunk_count(), 1);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = WorldSerializer::load(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_empty_world_round_trip() {
        let json = WorldSerializer::to_string(&World::new()).unwrap();
        assert_eq!(WorldSerializer::from_str(&json).unwrap().chunk_count(), 0);
    }
}
