//! Shallow override merging for option mappings.
//!
//! Overrides replace whole values. Nested mappings and lists are never merged
//! recursively, so a user list always replaces the default list.

use serde_json::{Map, Value};

/// Replace top-level options in `base` with those from `overlay`.
///
/// - Every key in `overlay` replaces the key in `base` entirely
/// - Keys only in `base` are kept
/// - A null overlay value means "not specified" and keeps the base value
///
/// # Example
/// ```
/// use serde_json::json;
/// use nlu_pipeline_config::config::override_options;
///
/// let mut base = json!({"language": "en", "path": "projects"});
/// let overlay = json!({"language": "de", "path": null, "emulate": "wit"});
/// override_options(base.as_object_mut().unwrap(), overlay.as_object().unwrap().clone());
/// // Result: { "language": "de", "path": "projects", "emulate": "wit" }
/// ```
pub fn override_options(base: &mut Map<String, Value>, overlay: Map<String, Value>) {
    for (key, value) in overlay {
        if value.is_null() && base.contains_key(&key) {
            continue;
        }
        base.insert(key, value);
    }
}

/// Layer component attributes over a defaults mapping.
///
/// Unlike [`override_options`], an explicit null in `custom` is kept: for
/// component attributes null is a meaningful value (e.g. "no model, use the
/// language").
pub fn override_defaults(defaults: &Map<String, Value>, custom: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = defaults.clone();
    for (key, value) in custom {
        merged.insert(key.clone(), value.clone());
    }
    merged
}
