//! Component and pipeline template registry.
//!
//! Maps component names to factories and prerequisite lists, and template
//! names to ordered component lists. The registry is a plain mapping: build
//! it once (from [`Registry::builtin`] plus any extra entries), then share it
//! by reference. [`Registry::global`] holds the built-in tables.

mod builtin;

use crate::components::{ComponentClass, ComponentFactory};
use crate::error::UnknownComponentError;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Registration for one component name.
#[derive(Debug, Clone)]
pub struct RegistryEntry {
    pub name: String,
    pub factory: ComponentFactory,
    /// Components that must appear earlier in the pipeline.
    pub requires: Vec<String>,
    /// Supported languages; `None` means any.
    pub language_list: Option<Vec<String>>,
}

impl RegistryEntry {
    pub fn new(name: impl Into<String>, factory: ComponentFactory) -> Self {
        Self {
            name: name.into(),
            factory,
            requires: Vec::new(),
            language_list: None,
        }
    }

    /// Entry for a typed component, using its declared name and requirements.
    pub fn of<T: ComponentClass>() -> Self {
        Self {
            name: T::NAME.to_string(),
            factory: T::create,
            requires: T::REQUIRES.iter().map(|name| name.to_string()).collect(),
            language_list: T::LANGUAGES
                .map(|languages| languages.iter().map(|lang| lang.to_string()).collect()),
        }
    }

    pub fn with_requires<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requires = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.language_list = Some(languages.into_iter().map(Into::into).collect());
        self
    }

    pub fn can_handle_language(&self, language: &str) -> bool {
        match self.language_list {
            Some(ref languages) => languages.iter().any(|lang| lang == language),
            None => true,
        }
    }
}

/// Lookup tables for components and pipeline templates.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    components: BTreeMap<String, RegistryEntry>,
    templates: BTreeMap<String, Vec<String>>,
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

impl Registry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in component and template.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for entry in builtin::components() {
            registry.register_component(entry);
        }
        for (name, components) in builtin::PIPELINE_TEMPLATES {
            registry.register_template(*name, components.iter().copied());
        }
        registry
    }

    /// Shared built-in registry, created on first use and never mutated.
    pub fn global() -> &'static Registry {
        REGISTRY.get_or_init(Registry::builtin)
    }

    /// Add or replace a component entry. Returns the replaced entry.
    pub fn register_component(&mut self, entry: RegistryEntry) -> Option<RegistryEntry> {
        self.components.insert(entry.name.clone(), entry)
    }

    /// Add or replace a pipeline template.
    pub fn register_template<I, S>(&mut self, name: impl Into<String>, components: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.templates
            .insert(name.into(), components.into_iter().map(Into::into).collect());
    }

    pub fn with_component(mut self, entry: RegistryEntry) -> Self {
        self.register_component(entry);
        self
    }

    pub fn with_template<I, S>(mut self, name: impl Into<String>, components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.register_template(name, components);
        self
    }

    /// Entry for a component name.
    pub fn lookup_component_class(&self, name: &str) -> Result<&RegistryEntry, UnknownComponentError> {
        self.components
            .get(name)
            .ok_or_else(|| UnknownComponentError::new(name))
    }

    /// Ordered component names of a template.
    pub fn lookup_template(&self, name: &str) -> Option<&[String]> {
        self.templates.get(name).map(Vec::as_slice)
    }

    pub fn contains_component(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Registered component names, sorted.
    pub fn component_names(&self) -> Vec<&str> {
        self.components.keys().map(String::as_str).collect()
    }

    /// Registered template names, sorted.
    pub fn template_names(&self) -> Vec<&str> {
        self.templates.keys().map(String::as_str).collect()
    }

    pub fn entries(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.components.values()
    }

    pub fn templates(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.templates
            .iter()
            .map(|(name, components)| (name.as_str(), components.as_slice()))
    }
}
