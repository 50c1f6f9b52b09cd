//! Error types for the voxel world core.

use thiserror::Error;

/// Main error type for chunk access, generation and persistence.
#[derive(Debug, Error)]
pub enum Error {
    /// A chunk-local coordinate fell outside `[0, CHUNK_DIMENSION)`.
    #[error("coordinates out of range: ({x}, {y}, {z})")]
    OutOfRange {
        /// Requested X coordinate
        x: i32,
        /// Requested Y coordinate
        y: i32,
        /// Requested Z coordinate
        z: i32,
    },

    /// A flat voxel array did not hold exactly one byte per chunk voxel.
    #[error("voxel data length must be {expected}, got {actual}")]
    InvalidLength {
        /// Required number of voxels
        expected: usize,
        /// Number of voxels supplied
        actual: usize,
    },

    /// A persisted document was missing fields or held malformed values.
    #[error("malformed world data: {0}")]
    Format(#[from] serde_json::Error),

    /// Reading or writing a document failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let error = Error::OutOfRange { x: 16, y: -1, z: 3 };
        assert_eq!(error.to_string(), "coordinates out of range: (16, -1, 3)");
    }

    #[test]
    fn test_invalid_length_message() {
        let error = Error::InvalidLength {
            expected: 4096,
            actual: 3,
        };
        assert_eq!(error.to_string(), "voxel data length must be 4096, got 3");
    }
}
