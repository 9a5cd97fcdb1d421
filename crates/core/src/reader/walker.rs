//! Recursive walk over an SML model folder tree.
//!
//! This module provides the reader entry point, [`read_sml_objects`]. At
//! each directory it lists the entries, loads and classifies every
//! `.yml`/`.yaml` file concurrently, dispatches the recognized objects
//! into a branch-local accumulator, and descends into subdirectories
//! concurrently. Each branch's accumulator is folded into its parent's
//! when the branch joins, so the walk needs no shared mutable state.

use crate::reader::builder::SmlResultBuilder;
use crate::reader::classifier::classify;
use crate::reader::error::{ReadError, ReadResult};
use crate::reader::lister::list_files_and_folders;
use crate::reader::MAX_RECURSION_DEPTH;
use futures::future::{try_join_all, BoxFuture};
use sml_protocol::{SmlConverterResult, SmlObject, SmlObjectType};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Reads a directory tree of SML yaml files and returns everything
/// recognized as an SML object, aggregated by kind.
///
/// The whole subtree is read before returning: file loads within a
/// directory and descents into sibling subdirectories run concurrently
/// and are joined, first failure wins. Files without a `.yml`/`.yaml`
/// extension are skipped, and well-formed YAML documents that are not
/// SML objects are silently excluded.
///
/// # Errors
///
/// Returns `ReadError` if:
/// - The tree nests deeper than 100 directory levels
/// - A directory cannot be listed or a candidate file cannot be read
/// - A candidate file is not valid YAML
///
/// Any of these aborts the read; no partial result is returned.
///
/// # Example
///
/// ```rust,no_run
/// use sml_core::reader::read_sml_objects;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let result = read_sml_objects(Path::new("./model")).await?;
/// println!("Found {} objects", result.object_count());
/// # Ok(())
/// # }
/// ```
pub async fn read_sml_objects(folder_path: &Path) -> ReadResult<SmlConverterResult> {
    let builder = read_folder(folder_path.to_path_buf(), 0).await?;
    Ok(builder.build())
}

/// One level of the recursive walk.
///
/// Boxed because the future recurses; owns its path so sibling descents
/// can run as independent tasks.
fn read_folder(folder_path: PathBuf, depth: usize) -> BoxFuture<'static, ReadResult<SmlResultBuilder>> {
    Box::pin(async move {
        if depth >= MAX_RECURSION_DEPTH {
            return Err(ReadError::DepthExceeded { path: folder_path });
        }

        let listing = list_files_and_folders(&folder_path).await?;

        // Load and classify every file in this directory concurrently.
        let loads = listing
            .files
            .iter()
            .map(|file| load_sml_object(folder_path.join(file)));
        let objects = try_join_all(loads).await?;

        let mut builder = SmlResultBuilder::new();
        for object in objects.into_iter().flatten() {
            dispatch(&mut builder, object);
        }

        // Descend into subfolders concurrently, folding each branch in
        // once all of them have completed.
        let descents = listing
            .folders
            .iter()
            .map(|folder| read_folder(folder_path.join(folder), depth + 1));
        for child in try_join_all(descents).await? {
            builder.merge(child);
        }

        Ok(builder)
    })
}

/// Loads one file and classifies it as an SML object.
///
/// Returns `Ok(None)` for files whose name does not end in `.yml` or
/// `.yaml` (case-sensitive) and for well-formed YAML that does not
/// classify. I/O and YAML syntax failures are errors; classification
/// rejection is not.
async fn load_sml_object(file_path: PathBuf) -> ReadResult<Option<SmlObject>> {
    let name = file_path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    if !name.ends_with(".yml") && !name.ends_with(".yaml") {
        return Ok(None);
    }

    let content =
        tokio::fs::read_to_string(&file_path)
            .await
            .map_err(|source| ReadError::FileRead {
                path: file_path.clone(),
                source,
            })?;

    let value: serde_yaml::Value =
        serde_yaml::from_str(&content).map_err(|source| ReadError::YamlParse {
            path: file_path,
            source,
        })?;

    Ok(classify(value))
}

/// Routes one recognized object into the accumulator by its kind.
///
/// The match is exhaustive over the closed kind enumeration, so there is
/// no "unknown kind" branch here: an unknown tag already failed
/// classification. Settings kinds are recognized but not aggregated.
fn dispatch(builder: &mut SmlResultBuilder, object: SmlObject) {
    match object.object_type {
        SmlObjectType::Catalog => builder.set_catalog(object),
        SmlObjectType::Model => builder.add_model(object),
        SmlObjectType::ModelSettings => {
            warn!("Model Settings object not implemented - skipping object");
        }
        SmlObjectType::GlobalSettings => {
            warn!("Global Settings object not implemented - skipping object");
        }
        SmlObjectType::Dimension => builder.add_dimension(object),
        SmlObjectType::Dataset => builder.add_dataset(object),
        SmlObjectType::Metric => builder.add_metric(object),
        SmlObjectType::MetricCalc => builder.add_metric_calculated(object),
        SmlObjectType::Connection => builder.add_connection(object),
        SmlObjectType::RowSecurity => builder.add_row_security(object),
        SmlObjectType::CompositeModel => builder.add_composite_model(object),
    }
}
