//! SML object envelope models for `*.yml` / `*.yaml` model files.
//!
//! Every SML file carries the same three-field envelope (`object_type`,
//! `label`, `unique_name`) followed by fields specific to its kind.
//! Only the envelope is modeled here; kind-specific fields pass through
//! untouched.

use serde::{Deserialize, Serialize};

/// The closed set of object kinds an SML file can declare.
///
/// The `object_type` field of every SML document must be one of these
/// tags. Matching on this enum is exhaustive, so adding a kind forces
/// every dispatch site to handle it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SmlObjectType {
    /// The single catalog describing the model folder itself.
    Catalog,
    /// A semantic model.
    Model,
    /// Per-model settings. Recognized but not aggregated.
    ModelSettings,
    /// Folder-wide settings. Recognized but not aggregated.
    GlobalSettings,
    /// A dimension definition.
    Dimension,
    /// A dataset definition.
    Dataset,
    /// A plain metric.
    Metric,
    /// A calculated metric.
    MetricCalc,
    /// A data warehouse connection.
    Connection,
    /// A row-level security rule.
    RowSecurity,
    /// A composite model combining other models.
    CompositeModel,
}

/// A single SML object as read from one YAML file.
///
/// The envelope fields are mandatory: a document missing any of them, or
/// carrying an `object_type` outside [`SmlObjectType`], does not
/// deserialize into this type. Everything else in the document lands in
/// [`properties`](Self::properties) unvalidated.
///
/// # Example
///
/// ```yaml
/// object_type: dimension
/// label: Age
/// unique_name: dim.age
/// hierarchies:
///   - unique_name: age_hierarchy
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SmlObject {
    /// Which kind of semantic-model entity this file declares.
    pub object_type: SmlObjectType,

    /// Human-readable display name.
    pub label: String,

    /// Identifier used by other objects to reference this one.
    pub unique_name: String,

    /// All kind-specific fields, passed through without validation.
    #[serde(flatten)]
    pub properties: serde_yaml::Mapping,
}
