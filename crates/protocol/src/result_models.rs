//! The aggregated result of reading an SML model folder.

use crate::object_models::SmlObject;

/// Everything found in one complete read of a model folder.
///
/// One collection per plural object kind plus a single catalog slot.
/// Collections are unordered: the set of objects is deterministic for a
/// given folder tree, the sequence within a collection is not.
///
/// Produced by `sml-core`'s folder reader; immutable once returned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SmlConverterResult {
    /// The catalog for the folder, if any file declared one.
    ///
    /// When several files declare a catalog, only the last one processed
    /// is retained.
    pub catalog: Option<SmlObject>,

    /// All model definitions.
    pub models: Vec<SmlObject>,

    /// All dimension definitions.
    pub dimensions: Vec<SmlObject>,

    /// All dataset definitions.
    pub datasets: Vec<SmlObject>,

    /// All plain metrics.
    pub metrics: Vec<SmlObject>,

    /// All calculated metrics.
    pub metrics_calculated: Vec<SmlObject>,

    /// All connection definitions.
    pub connections: Vec<SmlObject>,

    /// All row-security rules.
    pub row_securities: Vec<SmlObject>,

    /// All composite models.
    pub composite_models: Vec<SmlObject>,
}

impl SmlConverterResult {
    /// Total number of objects across every collection, catalog included.
    pub fn object_count(&self) -> usize {
        usize::from(self.catalog.is_some())
            + self.models.len()
            + self.dimensions.len()
            + self.datasets.len()
            + self.metrics.len()
            + self.metrics_calculated.len()
            + self.connections.len()
            + self.row_securities.len()
            + self.composite_models.len()
    }

    /// True if the read found no recognized objects at all.
    pub fn is_empty(&self) -> bool {
        self.object_count() == 0
    }
}
