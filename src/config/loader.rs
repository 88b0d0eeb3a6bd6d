//! Document loading and config resolution.
//!
//! Reads a YAML or JSON document into an option mapping, then merges it over
//! [`DefaultSettings`], expanding pipeline templates through the [`Registry`].

use super::merge::override_options;
use super::resolved::NluConfig;
use super::types::{ComponentSpec, DefaultSettings, GlobalSettings, PIPELINE_KEY};
use crate::error::{ConfigResult, InvalidConfigError};
use crate::registry::Registry;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::{debug, info};

/// Config file picked up by [`load_with_overrides`] when no path is given.
pub const DEFAULT_CONFIG_LOCATION: &str = "config.yml";

/// Parse structured text into an option mapping.
///
/// Empty and comment-only documents are the empty mapping. Any other
/// top-level value than a mapping is rejected.
pub fn parse_document(text: &str) -> ConfigResult<Map<String, Value>> {
    if text.trim().is_empty() {
        return Ok(Map::new());
    }

    // Comment-only YAML parses as null
    let value: Option<Value> = serde_yaml::from_str(text)?;
    match value {
        None | Some(Value::Null) => Ok(Map::new()),
        Some(Value::Object(map)) => Ok(map),
        Some(other) => Err(InvalidConfigError::NotAMapping {
            found: InvalidConfigError::kind_of(&other),
        }),
    }
}

/// Read and parse a config document from disk.
pub fn read_document<P: AsRef<Path>>(path: P) -> ConfigResult<Map<String, Value>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| InvalidConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&content)
}

/// Merges raw documents over defaults using a registry for template lookup.
#[derive(Debug, Clone, Copy)]
pub struct ConfigResolver<'a> {
    defaults: &'a DefaultSettings,
    registry: &'a Registry,
}

impl ConfigResolver<'static> {
    /// Resolver over the process-wide defaults and built-in registry.
    pub fn global() -> Self {
        Self::new(DefaultSettings::global(), Registry::global())
    }
}

impl<'a> ConfigResolver<'a> {
    pub fn new(defaults: &'a DefaultSettings, registry: &'a Registry) -> Self {
        Self { defaults, registry }
    }

    /// Load and resolve a config file.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> ConfigResult<NluConfig> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config document");
        self.resolve(read_document(path)?)
    }

    /// Resolve config text that is already in memory.
    pub fn load_str(&self, text: &str) -> ConfigResult<NluConfig> {
        self.resolve(parse_document(text)?)
    }

    /// Merge a raw override mapping over the defaults.
    ///
    /// Top-level options replace their defaults wholesale. `pipeline` is
    /// either a template name, expanded here, or an explicit list of specs
    /// kept in document order. Component names are not checked against the
    /// registry until build time.
    pub fn resolve(&self, raw: Map<String, Value>) -> ConfigResult<NluConfig> {
        let mut options = self.defaults.settings.to_map();
        let mut pipeline = self.defaults.pipeline.clone();
        let mut overlay = Map::new();

        for (key, value) in raw {
            if key == PIPELINE_KEY {
                if let Some(resolved) = self.resolve_pipeline(value)? {
                    pipeline = resolved;
                }
                continue;
            }
            if !options.contains_key(&key) {
                debug!(option = %key, "passing through unrecognised option");
            }
            overlay.insert(key, value);
        }
        override_options(&mut options, overlay);

        let settings = GlobalSettings::from_map(options)?;
        info!(
            language = %settings.language,
            components = pipeline.len(),
            "resolved pipeline configuration"
        );
        Ok(NluConfig::new(settings, pipeline))
    }

    /// Turn a raw `pipeline` value into specs. `None` keeps the default.
    fn resolve_pipeline(&self, value: Value) -> ConfigResult<Option<Vec<ComponentSpec>>> {
        match value {
            Value::Null => Ok(None),
            Value::String(template) => {
                let Some(names) = self.registry.lookup_template(&template) else {
                    return Err(InvalidConfigError::UnknownPipelineTemplate {
                        name: template,
                        known: self.registry.template_names().join(", "),
                    });
                };
                debug!(template = %template, "expanding pipeline template");
                Ok(Some(names.iter().map(ComponentSpec::new).collect()))
            }
            Value::Array(entries) => entries
                .into_iter()
                .enumerate()
                .map(|(index, entry)| ComponentSpec::from_value(index, entry))
                .collect::<ConfigResult<Vec<_>>>()
                .map(Some),
            other => Err(InvalidConfigError::InvalidPipelineEntry {
                index: 0,
                reason: format!(
                    "'{PIPELINE_KEY}' must be a template name or a list of components, found {}",
                    InvalidConfigError::kind_of(&other)
                ),
            }),
        }
    }
}

/// Load a config file over the built-in defaults and registry.
pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<NluConfig> {
    ConfigResolver::global().load(path)
}

/// Load with keyword-style top-level overrides applied over the file.
///
/// Without a path, [`DEFAULT_CONFIG_LOCATION`] in the working directory is
/// used when it exists; otherwise only the overrides are resolved.
pub fn load_with_overrides(
    path: Option<&Path>,
    overrides: Map<String, Value>,
) -> ConfigResult<NluConfig> {
    load_with_overrides_in(Path::new(""), path, overrides)
}

/// [`load_with_overrides`] with relative paths and the default config
/// location taken from `base_dir` instead of the working directory.
pub fn load_with_overrides_in(
    base_dir: &Path,
    path: Option<&Path>,
    overrides: Map<String, Value>,
) -> ConfigResult<NluConfig> {
    let path = match path {
        Some(path) => Some(base_dir.join(path)),
        None => {
            let fallback = base_dir.join(DEFAULT_CONFIG_LOCATION);
            fallback.is_file().then_some(fallback)
        }
    };

    let mut raw = match path {
        Some(ref path) => read_document(path)?,
        None => {
            debug!("no config file, resolving overrides only");
            Map::new()
        }
    };
    for (key, value) in overrides {
        raw.insert(key, value);
    }
    ConfigResolver::global().resolve(raw)
}
