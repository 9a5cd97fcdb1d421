//! # sml-protocol
//!
//! Core data definitions for sml-kit.
//!
//! This crate defines the shared data structures used for:
//! - Parsing SML object files (YAML documents tagged with an `object_type`)
//! - Representing the aggregated contents of an SML model folder
//!
//! ## Modules
//!
//! - [`object_models`]: The SML object envelope and its kind enumeration
//! - [`result_models`]: The immutable result of reading a model folder
//!
//! ## Design Principles
//!
//! - Minimal dependencies: only serde and serde_yaml
//! - Kind-specific fields stay opaque: downstream consumers decide how
//!   much structure they need
//! - Independent compilation: no dependencies on other sml-kit crates

pub mod object_models;
pub mod result_models;

// Re-export all public types for convenience
pub use object_models::*;
pub use result_models::*;
