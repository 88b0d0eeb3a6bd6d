//! The resolved configuration handed to the component builder.

use super::merge::override_defaults;
use super::types::{ComponentSpec, GlobalSettings, PIPELINE_KEY};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

/// Fully merged configuration: typed global options plus an explicit pipeline.
///
/// The pipeline is always a list of [`ComponentSpec`]s. The only mutation
/// after load is [`NluConfig::set_component_attr`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NluConfig {
    #[serde(flatten)]
    settings: GlobalSettings,

    pipeline: Vec<ComponentSpec>,
}

impl NluConfig {
    pub(crate) fn new(settings: GlobalSettings, pipeline: Vec<ComponentSpec>) -> Self {
        Self { settings, pipeline }
    }

    pub fn settings(&self) -> &GlobalSettings {
        &self.settings
    }

    pub fn language(&self) -> &str {
        &self.settings.language
    }

    /// Ordered pipeline; order is execution order.
    pub fn pipeline(&self) -> &[ComponentSpec] {
        &self.pipeline
    }

    pub fn component_names(&self) -> Vec<&str> {
        self.pipeline.iter().map(|spec| spec.name.as_str()).collect()
    }

    /// Every option as one mapping, `pipeline` as a list of spec mappings.
    ///
    /// Keys are sorted, so iteration order is stable across loads.
    pub fn as_dict(&self) -> Map<String, Value> {
        let mut map = self.settings.to_map();
        map.insert(
            PIPELINE_KEY.to_string(),
            Value::Array(self.pipeline.iter().map(ComponentSpec::to_value).collect()),
        );
        map
    }

    /// Number of top-level option keys, `pipeline` included.
    pub fn len(&self) -> usize {
        self.keys().len()
    }

    /// Always false: `pipeline` and the typed options are always present.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn keys(&self) -> Vec<String> {
        self.as_dict().keys().cloned().collect()
    }

    /// Each option key exactly once, with its value.
    pub fn iter(&self) -> impl Iterator<Item = (String, Value)> {
        self.as_dict().into_iter()
    }

    /// Look up a top-level option by name.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.as_dict().remove(key)
    }

    /// First pipeline entry named `name`, if any.
    pub fn find_component(&self, name: &str) -> Option<&ComponentSpec> {
        self.pipeline.iter().find(|spec| spec.name == name)
    }

    /// Spec for the first pipeline entry named `name`.
    ///
    /// A name that is not in the pipeline yields a bare `{name}` spec rather
    /// than an error.
    pub fn for_component(&self, name: &str) -> ComponentSpec {
        self.find_component(name)
            .cloned()
            .unwrap_or_else(|| ComponentSpec::new(name))
    }

    /// Like [`for_component`](Self::for_component), layered over `defaults`.
    pub fn for_component_with_defaults(&self, name: &str, defaults: &Map<String, Value>) -> Map<String, Value> {
        override_defaults(defaults, &self.for_component(name).to_map())
    }

    /// Merge `attrs` into the first pipeline entry named `name`.
    ///
    /// Returns whether an entry was updated. Naming a component that is not
    /// in the pipeline is a no-op.
    pub fn set_component_attr<I, K>(&mut self, name: &str, attrs: I) -> bool
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let Some(spec) = self.pipeline.iter_mut().find(|spec| spec.name == name) else {
            debug!(component = name, "component not in pipeline, attributes ignored");
            return false;
        };
        for (key, value) in attrs {
            spec.set_attr(key.into(), value);
        }
        true
    }
}

impl<'a> IntoIterator for &'a NluConfig {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.as_dict().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> NluConfig {
        NluConfig::new(
            GlobalSettings::default(),
            vec![
                ComponentSpec::new("tokenizer_spacy"),
                ComponentSpec::new("intent_classifier_sklearn"),
                ComponentSpec::new("intent_classifier_sklearn").with_attr("C", json!([1])),
            ],
        )
    }

    #[test]
    fn test_set_attr_then_for_component() {
        let mut cfg = config();
        assert!(cfg.set_component_attr("intent_classifier_sklearn", [("C", json!(324))]));

        assert_eq!(
            cfg.for_component("intent_classifier_sklearn").to_value(),
            json!({"C": 324, "name": "intent_classifier_sklearn"})
        );
        assert_eq!(
            cfg.for_component("tokenizer_spacy").to_value(),
            json!({"name": "tokenizer_spacy"})
        );
        // Only the first matching entry is touched.
        assert_eq!(cfg.pipeline()[2].get("C"), Some(&json!([1])));
    }

    #[test]
    fn test_set_attr_on_missing_component_is_noop() {
        let mut cfg = config();
        let before = cfg.clone();
        assert!(!cfg.set_component_attr("ner_crf", [("max_iterations", json!(1))]));
        assert_eq!(cfg, before);
    }

    #[test]
    fn test_for_component_falls_back_to_name() {
        let cfg = config();
        assert!(cfg.find_component("ner_crf").is_none());
        assert_eq!(cfg.for_component("ner_crf").to_value(), json!({"name": "ner_crf"}));
    }

    #[test]
    fn test_for_component_with_defaults() {
        let mut cfg = config();
        cfg.set_component_attr("intent_classifier_sklearn", [("C", json!([5]))]);
        let defaults = json!({"C": [1, 2], "kernels": ["linear"]});
        let merged = cfg.for_component_with_defaults(
            "intent_classifier_sklearn",
            defaults.as_object().unwrap(),
        );
        assert_eq!(
            Value::Object(merged),
            json!({"name": "intent_classifier_sklearn", "C": [5], "kernels": ["linear"]})
        );
    }

    #[test]
    fn test_keys_are_unique_and_stable() {
        let cfg = config();
        let keys = cfg.keys();
        assert_eq!(keys.len(), cfg.len());
        assert!(cfg.len() > 1);
        assert_eq!(keys.iter().filter(|k| *k == "pipeline").count(), 1);

        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        assert_eq!(cfg.iter().count(), cfg.len());
    }

    #[test]
    fn test_serialize_matches_as_dict() {
        let mut cfg = config();
        cfg.settings.extra.insert("num_threads".to_string(), json!(2));
        let serialized = serde_json::to_value(&cfg).unwrap();
        assert_eq!(serialized, Value::Object(cfg.as_dict()));
    }
}
