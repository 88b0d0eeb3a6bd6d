//! Constructs components from a resolved configuration.

use super::Component;
use crate::config::{ComponentSpec, NluConfig};
use crate::error::ConfigResult;
use crate::registry::Registry;
use tracing::debug;

/// Creates component instances through a [`Registry`].
///
/// Instances are owned by the caller; the builder keeps no cache and never
/// changes the configuration it reads from.
#[derive(Debug, Clone, Copy)]
pub struct ComponentBuilder<'a> {
    registry: &'a Registry,
}

impl Default for ComponentBuilder<'static> {
    fn default() -> Self {
        Self::new(Registry::global())
    }
}

impl<'a> ComponentBuilder<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Build the component `name` from its spec in `config`.
    ///
    /// Uses the first pipeline entry with that name, or a bare spec when the
    /// name is not in the pipeline. Fails if the name is not registered or
    /// the component rejects its attributes.
    pub fn create_component(
        &self,
        name: &str,
        config: &NluConfig,
    ) -> ConfigResult<Box<dyn Component>> {
        self.create_from_spec(&config.for_component(name), config)
    }

    /// Build one component from an explicit spec.
    pub fn create_from_spec(
        &self,
        spec: &ComponentSpec,
        config: &NluConfig,
    ) -> ConfigResult<Box<dyn Component>> {
        let entry = self.registry.lookup_component_class(&spec.name)?;
        let component = (entry.factory)(spec.attrs.clone(), config)?;
        debug!(component = %spec.name, "created component");
        Ok(component)
    }

    /// Build every pipeline entry in order, each from its own spec.
    pub fn create_pipeline(&self, config: &NluConfig) -> ConfigResult<Vec<Box<dyn Component>>> {
        config
            .pipeline()
            .iter()
            .map(|spec| self.create_from_spec(spec, config))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::featurizers::CountVectorsFeaturizer;
    use crate::config::ConfigResolver;
    use crate::error::InvalidConfigError;

    fn load(text: &str) -> NluConfig {
        ConfigResolver::global().load_str(text).unwrap()
    }

    #[test]
    fn test_attributes_reach_the_instance() {
        let cfg = load("pipeline:\n  - name: intent_featurizer_count_vectors\n    max_ngram: 3\n");
        let component = ComponentBuilder::default()
            .create_component("intent_featurizer_count_vectors", &cfg)
            .unwrap();

        let featurizer = component.downcast_ref::<CountVectorsFeaturizer>().unwrap();
        assert_eq!(featurizer.max_ngram, 3);
        // Not specified, so the component's own default applies.
        assert_eq!(featurizer.min_ngram, 1);
    }

    #[test]
    fn test_unknown_component_fails_at_build() {
        let cfg = load("pipeline:\n  - name: tokenizer_unicorn\n");
        let err = ComponentBuilder::default()
            .create_component("tokenizer_unicorn", &cfg)
            .unwrap_err();
        assert!(matches!(err, InvalidConfigError::UnknownComponent(_)));
    }

    #[test]
    fn test_builder_does_not_mutate_config() {
        let cfg = load("pipeline: tensorflow_embedding");
        let before = cfg.clone();
        let components = ComponentBuilder::default().create_pipeline(&cfg).unwrap();
        assert_eq!(components.len(), 4);
        assert_eq!(cfg, before);
    }

    #[test]
    fn test_duplicates_built_from_their_own_spec() {
        let cfg = load(
            r#"
pipeline:
  - name: intent_featurizer_count_vectors
    max_ngram: 2
  - name: intent_featurizer_count_vectors
    max_ngram: 4
"#,
        );
        let components = ComponentBuilder::default().create_pipeline(&cfg).unwrap();
        let ngrams: Vec<usize> = components
            .iter()
            .map(|c| c.downcast_ref::<CountVectorsFeaturizer>().unwrap().max_ngram)
            .collect();
        assert_eq!(ngrams, vec![2, 4]);
    }

    #[test]
    fn test_bad_attribute_type() {
        let cfg = load("pipeline:\n  - name: intent_featurizer_count_vectors\n    max_ngram: three\n");
        let err = ComponentBuilder::default()
            .create_component("intent_featurizer_count_vectors", &cfg)
            .unwrap_err();
        assert!(matches!(
            err,
            InvalidConfigError::InvalidComponentAttribute { ref component, .. }
                if component == "intent_featurizer_count_vectors"
        ));
    }
}
