//! Error types for the viewer

use thiserror::Error;

/// Shown for every decoder-level failure. The viewer only documents an
/// informal support ceiling, so the text names that instead of the
/// decoder's actual complaint (which goes to the log).
pub const DECODE_FAILURE_MESSAGE: &str = "Error: Could not load voxel data from file\nThis might be due to version incompatibility.\nThe viewer currently supports .vox files up to version 200.";

/// Failure classes recognized by the pipeline.
///
/// `Display` output is the literal text shown in the placeholder scene,
/// so these messages are user-facing rather than diagnostic.
#[derive(Debug, Error)]
pub enum Error {
    /// No file was supplied
    #[error("Please upload a .vox file")]
    MissingInput,

    /// The supplied file name does not end in ".vox"
    #[error("Please upload a valid .vox file")]
    InvalidExtension,

    /// The decoder could not produce a model; carries the fixed
    /// explanatory message, never the raw decoder error
    #[error("{0}")]
    Decode(String),

    /// The model decoded cleanly but contains no occupied voxels
    #[error("Error: No voxels found in the model")]
    EmptyModel,

    /// Last-resort containment for failures with no classified variant
    #[error("Error loading model: {detail}")]
    Unexpected { detail: String },
}
