#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel World
//!
//! A sparse voxel world with procedural terrain, greedy meshing and JSON
//! persistence.
//!
//! The crate is the data and geometry core of a voxel application. It stores
//! voxels, fills them with terrain and turns them into triangle meshes, and
//! leaves windows, input and draw calls to the host.
//!
//! ## Key Modules
//!
//! * `core` - The crate error type
//! * `voxels` - Chunks, the world grid, terrain generation and persistence
//! * `meshing` - Conversion of chunks into meshes with ambient occlusion
//!
//! ## Usage
//!
//! ```rust
//! use voxel_world::meshing::MeshBuilder;
//! use voxel_world::voxels::generation::{populate, NoiseBasedWorldGenerator, WorldGenerationConfig};
//! use voxel_world::voxels::world::World;
//!
//! let generator = NoiseBasedWorldGenerator::new(WorldGenerationConfig {
//!     scale: 0.05,
//!     ..Default::default()
//! });
//! let mut world = World::new();
//! populate(&mut world, &generator, 1, 0, 1);
//!
//! let mesh = MeshBuilder::new().generate_world_mesh(&world);
//! assert!(!mesh.is_empty());
//! ```

use std::path::{Path, PathBuf};

use log::{error, info};

use crate::core::Result;
use crate::meshing::{MeshBuilder, MeshData};
use crate::voxels::generation::{populate, NoiseBasedWorldGenerator, WorldGenerationConfig};
use crate::voxels::serializer::WorldSerializer;
use crate::voxels::world::World;

pub mod core;
pub mod meshing;
pub mod voxels;

/// Where [`run`] writes the world when no path is given.
pub const DEFAULT_OUTPUT_PATH: &str = "world.json";

/// Chunk extents populated by [`run`] along X, Y and Z.
pub const DEFAULT_EXTENTS: [i32; 3] = [2, 1, 2];

/// Generation parameters used by [`run`] when no configuration file is given.
pub fn default_run_config() -> WorldGenerationConfig {
    WorldGenerationConfig {
        seed: 1337,
        scale: 0.03,
        octaves: 3,
        ..Default::default()
    }
}

/// Headless entry point: `voxel-world [OUTPUT_PATH] [CONFIG_JSON]`.
///
/// Generates terrain around the origin, meshes it, and saves the world to
/// `OUTPUT_PATH`. Set `RUST_LOG` to control log output.
pub fn run() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let mut args = std::env::args().skip(1);
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));
    let config_path = args.next().map(PathBuf::from);

    if let Err(e) = build_world(&output, config_path.as_deref()) {
        error!("Failed to build world: {e}");
        std::process::exit(1);
    }
}

/// Generates, meshes and saves a world.
///
/// # Arguments
/// * `output` - Path the world document is written to
/// * `config_path` - Optional JSON generation config; [`default_run_config`] otherwise
///
/// # Returns
/// The generated world together with its combined mesh.
pub fn build_world(output: &Path, config_path: Option<&Path>) -> Result<(World, MeshData)> {
    let config = match config_path {
        Some(path) => {
            info!("Loading generation config from {}", path.display());
            WorldGenerationConfig::load(path)?
        }
        None => default_run_config(),
    };

    let generator = NoiseBasedWorldGenerator::new(config);
    let mut world = World::new();
    let [extent_x, extent_y, extent_z] = DEFAULT_EXTENTS;
    populate(&mut world, &generator, extent_x, extent_y, extent_z);

    let mesh = MeshBuilder::new().generate_world_mesh(&world);
    info!(
        "World mesh: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.indices.len() / 3
    );

    WorldSerializer::save(&world, output)?;
    Ok((world, mesh))
}
