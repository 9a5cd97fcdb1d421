//! Mutable accumulator for objects found during a read.

use sml_protocol::{SmlConverterResult, SmlObject};

/// Accumulates SML objects while a folder tree is being read.
///
/// Each recursive branch of the walk owns its own builder; a child's
/// builder is [`merge`](Self::merge)d into its parent's when the branch
/// joins, so no builder is ever touched from two tasks at once.
///
/// Appends make no attempt to deduplicate: two files declaring the same
/// `unique_name` both land in the collection. The catalog slot is the
/// exception: it holds at most one object and each new catalog replaces
/// the previous one.
#[derive(Debug, Default)]
pub struct SmlResultBuilder {
    result: SmlConverterResult,
}

impl SmlResultBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the catalog, replacing any catalog seen earlier.
    pub fn set_catalog(&mut self, catalog: SmlObject) {
        self.result.catalog = Some(catalog);
    }

    pub fn add_model(&mut self, model: SmlObject) {
        self.result.models.push(model);
    }

    pub fn add_dimension(&mut self, dimension: SmlObject) {
        self.result.dimensions.push(dimension);
    }

    pub fn add_dataset(&mut self, dataset: SmlObject) {
        self.result.datasets.push(dataset);
    }

    pub fn add_metric(&mut self, metric: SmlObject) {
        self.result.metrics.push(metric);
    }

    pub fn add_metric_calculated(&mut self, metric: SmlObject) {
        self.result.metrics_calculated.push(metric);
    }

    pub fn add_connection(&mut self, connection: SmlObject) {
        self.result.connections.push(connection);
    }

    pub fn add_row_security(&mut self, row_security: SmlObject) {
        self.result.row_securities.push(row_security);
    }

    pub fn add_composite_model(&mut self, composite_model: SmlObject) {
        self.result.composite_models.push(composite_model);
    }

    /// Folds a child branch's accumulated objects into this builder.
    ///
    /// Collections are appended; a catalog found in the child replaces
    /// this builder's catalog, if any.
    pub fn merge(&mut self, other: SmlResultBuilder) {
        let child = other.result;
        if child.catalog.is_some() {
            self.result.catalog = child.catalog;
        }
        self.result.models.extend(child.models);
        self.result.dimensions.extend(child.dimensions);
        self.result.datasets.extend(child.datasets);
        self.result.metrics.extend(child.metrics);
        self.result.metrics_calculated.extend(child.metrics_calculated);
        self.result.connections.extend(child.connections);
        self.result.row_securities.extend(child.row_securities);
        self.result.composite_models.extend(child.composite_models);
    }

    /// Returns a snapshot of everything accumulated so far.
    ///
    /// The snapshot is independent of the builder: mutating the builder
    /// afterwards does not affect a result already returned.
    pub fn build(&self) -> SmlConverterResult {
        self.result.clone()
    }
}
