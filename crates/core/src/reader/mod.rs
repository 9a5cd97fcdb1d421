//! Recursive reading of SML model folders.
//!
//! The entry point is [`read_sml_objects`], which walks a folder tree,
//! parses every `.yml`/`.yaml` file it finds, and aggregates the
//! recognized SML objects into a single result.

pub mod builder;
pub mod classifier;
pub mod error;
pub mod lister;
pub mod walker;

/// How many directory levels a read will descend before giving up.
///
/// Circuit breaker against symlink cycles and pathological trees.
pub const MAX_RECURSION_DEPTH: usize = 100;

pub use error::{ReadError, ReadResult};
pub use walker::read_sml_objects;
