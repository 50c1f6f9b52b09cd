//! Procedural terrain: noise fields and the chunk generator built on them.
//!
//! A [`NoiseBasedWorldGenerator`] samples a [`NoiseProvider`] once per (x, z)
//! column and stacks surface, subsurface and under blocks below the resulting
//! height. [`populate`] fills a box of chunks around the origin.

mod config;
mod generator;
mod layered;
mod noise_provider;
mod perlin;

pub use config::{WorldGenerationConfig, MAX_OCTAVES};
pub use generator::{populate, stratify, NoiseBasedWorldGenerator, WorldGenerator};
pub use layered::LayeredNoiseProvider;
pub use noise_provider::{NoiseFnProvider, NoiseProvider, ScaledNoiseProvider};
pub use perlin::PerlinNoiseProvider;
