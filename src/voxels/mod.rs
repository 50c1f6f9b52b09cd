//! # Voxels Module
//!
//! The voxel data model and everything that produces or persists it:
//!
//! - [`block`]: voxel identifiers, block types and face directions
//! - [`chunk`]: fixed-size 16x16x16 voxel containers
//! - [`world`]: the sparse, unbounded grid of chunks
//! - [`generation`]: noise fields and terrain generation
//! - [`serializer`]: JSON persistence of whole worlds

pub mod block;
pub mod chunk;
pub mod generation;
pub mod serializer;
pub mod world;
