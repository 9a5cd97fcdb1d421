//! Classification of parsed YAML documents into SML objects.

use sml_protocol::SmlObject;

/// Narrows a parsed YAML value to an [`SmlObject`], if it is one.
///
/// A value qualifies when its `object_type` is a recognized kind and
/// both `label` and `unique_name` are strings. Anything else (a missing
/// field, a wrong type, an unknown kind tag, or a document that is not a
/// mapping at all) is rejected by returning `None`. Rejection is
/// silent and never an error: a model folder may legitimately contain
/// YAML files that are not SML objects.
pub fn classify(value: serde_yaml::Value) -> Option<SmlObject> {
    serde_yaml::from_value(value).ok()
}
