//! # Voxel World Entry Point
//!
//! Headless driver for the library: generates terrain, meshes it and writes
//! the world to disk.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release -- world.json config.json
//! ```

fn main() {
    voxel_world::run();
}
