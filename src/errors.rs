//! Error Types
//!
//! This module defines the error types used throughout the viewer.
//!
//! # Overview
//!
//! The main error type [`ViewerError`] covers:
//! - Asset selection and loading failures
//! - Settings parsing and validation failures
//! - Index contract violations in the pose resolver and clip selection
//!
//! Numeric edge cases (such as a zero-length quaternion) are never reported;
//! the math kernel substitutes a neutral value instead.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rigview::errors::{Result, ViewerError};
//!
//! fn load() -> Result<()> {
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for the viewer.
#[derive(Error, Debug)]
pub enum ViewerError {
    // ========================================================================
    // Asset Loading Errors
    // ========================================================================
    /// The selected file does not carry an accepted model extension.
    #[error("The file should be a {accepted} file: {}", path.display())]
    UnsupportedExtension {
        /// The rejected path
        path: PathBuf,
        /// Human readable list of accepted extensions
        accepted: String,
    },

    /// glTF parsing or loading error.
    #[error("glTF error: {0}")]
    Gltf(String),

    /// The model has animations but no skin to drive.
    #[error("Model has no skin: {0}")]
    MissingSkin(String),

    // ========================================================================
    // I/O & Format Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings parsed but describe an unusable configuration.
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    // ========================================================================
    // Index Errors
    // ========================================================================
    /// Frame index outside the clip's frame table.
    #[error("Frame {frame} out of range (frame count: {frame_count})")]
    FrameOutOfRange {
        /// Requested frame
        frame: usize,
        /// Number of frames in the clip
        frame_count: usize,
    },

    /// A skeleton bone has no entry in the frame pose table.
    #[error("Bone {bone} out of range (bone count: {bone_count})")]
    BoneOutOfRange {
        /// First bone without a pose
        bone: usize,
        /// Number of bones in the skeleton
        bone_count: usize,
    },

    /// A bone references a parent that does not exist.
    #[error("Bone {bone} references invalid parent {parent}")]
    InvalidParent {
        /// The child bone
        bone: usize,
        /// The stored parent index
        parent: i32,
    },

    /// Animation clip index out of bounds.
    #[error("Animation clip {index} out of range (clip count: {count})")]
    ClipOutOfRange {
        /// Requested clip
        index: usize,
        /// Number of loaded clips
        count: usize,
    },

    /// Dropdown option index out of bounds.
    #[error("Option {index} out of range (option count: {count})")]
    OptionOutOfRange {
        /// Requested option
        index: usize,
        /// Number of options
        count: usize,
    },
}

impl From<gltf::Error> for ViewerError {
    fn from(err: gltf::Error) -> Self {
        ViewerError::Gltf(err.to_string())
    }
}

/// Alias for `Result<T, ViewerError>`.
pub type Result<T> = std::result::Result<T, ViewerError>;
