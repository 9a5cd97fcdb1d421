//! # sml-core
//!
//! Reader engine for SML model folders.
//!
//! This crate provides:
//! - Recursive, concurrent traversal of a model folder tree
//! - Classification of YAML documents into typed SML objects
//! - Aggregation of all recognized objects into one
//!   [`SmlConverterResult`](sml_protocol::SmlConverterResult)
//!
//! ## Modules
//!
//! - [`reader`]: Folder traversal, classification and aggregation

pub mod reader;
