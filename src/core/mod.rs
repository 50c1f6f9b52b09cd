//! # Core Module
//!
//! Types shared by every other module of the crate. At the moment this is the
//! error taxonomy:
//!
//! - [`Error::OutOfRange`] for chunk-local coordinates outside the chunk
//! - [`Error::InvalidLength`] and [`Error::Format`] for malformed voxel data
//! - [`Error::Io`] for persistence failures
//!
//! Nothing here is ever swallowed internally; every variant reaches the caller.

pub mod error;

pub use error::{Error, Result};
