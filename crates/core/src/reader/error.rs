//! Error types for folder reading.
//!
//! This module defines all errors that can abort a model-folder read.
//! Every variant is fatal: the read either returns a complete result or
//! one of these errors, never a partial result.

use crate::reader::MAX_RECURSION_DEPTH;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a model folder.
#[derive(Error, Debug)]
pub enum ReadError {
    /// The folder tree nests deeper than [`MAX_RECURSION_DEPTH`] levels.
    #[error("Max recursion depth ({}) reached. Current folder: {}", MAX_RECURSION_DEPTH, .path.display())]
    DepthExceeded { path: PathBuf },

    /// Failed to list the entries of a directory.
    #[error("Failed to read directory {}: {source}", .path.display())]
    DirectoryList {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to read an SML file from disk.
    #[error("Failed to read file at {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse an SML file as YAML.
    #[error("Failed to parse YAML file at {}: {source}", .path.display())]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

/// Type alias for Result with ReadError.
pub type ReadResult<T> = Result<T, ReadError>;
