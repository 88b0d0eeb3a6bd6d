//! Configuration types: component specs, global options and defaults.

use super::loader::parse_document;
use crate::error::{ConfigResult, InvalidConfigError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::warn;

/// Key holding the component list in a config document.
pub const PIPELINE_KEY: &str = "pipeline";

/// Key holding a component's registry name inside a spec.
pub const NAME_KEY: &str = "name";

/// One pipeline stage: a registry name plus attribute overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSpec {
    /// Registry name of the component.
    pub name: String,

    /// Component-specific attributes, passed untyped to the component factory.
    #[serde(flatten)]
    pub attrs: Map<String, Value>,
}

impl ComponentSpec {
    /// Spec with no attribute overrides.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Map::new(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_attr(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attrs.get(key)
    }

    /// Set one attribute, replacing any previous value.
    ///
    /// The `name` key identifies the spec and cannot be overwritten here.
    pub fn set_attr(&mut self, key: String, value: Value) {
        if key == NAME_KEY {
            warn!(component = %self.name, "ignoring attempt to overwrite component name");
            return;
        }
        self.attrs.insert(key, value);
    }

    /// Full mapping including `name`.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = self.attrs.clone();
        map.insert(NAME_KEY.to_string(), Value::String(self.name.clone()));
        map
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.to_map())
    }

    /// Parse a pipeline entry at position `index` of a document.
    ///
    /// An entry is either a bare component name or a mapping with a `name`
    /// key and attribute overrides.
    pub(crate) fn from_value(index: usize, value: Value) -> ConfigResult<Self> {
        let mut map = match value {
            Value::String(name) => return Ok(Self::new(name)),
            Value::Object(map) => map,
            other => {
                return Err(InvalidConfigError::InvalidPipelineEntry {
                    index,
                    reason: format!(
                        "expected a component name or a mapping with a '{NAME_KEY}' key, found {}",
                        InvalidConfigError::kind_of(&other)
                    ),
                });
            }
        };

        match map.remove(NAME_KEY) {
            Some(Value::String(name)) => Ok(Self { name, attrs: map }),
            Some(other) => Err(InvalidConfigError::InvalidPipelineEntry {
                index,
                reason: format!(
                    "'{NAME_KEY}' must be a string, found {}",
                    InvalidConfigError::kind_of(&other)
                ),
            }),
            None => Err(InvalidConfigError::InvalidPipelineEntry {
                index,
                reason: format!("missing required key '{NAME_KEY}'"),
            }),
        }
    }
}

/// Typed global options.
///
/// Known options are type-checked on load; anything else lands in `extra`
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Language of the training data (default: "en").
    #[serde(default = "default_language")]
    pub language: String,

    /// Project the trained model belongs to.
    #[serde(default)]
    pub project: Option<String>,

    /// Fixed name for the persisted model instead of a timestamp.
    #[serde(default)]
    pub fixed_model_name: Option<String>,

    /// Root directory for persisted projects (default: "projects").
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Training data location.
    #[serde(default)]
    pub data: Option<PathBuf>,

    /// Options without a typed field.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            language: default_language(),
            project: None,
            fixed_model_name: None,
            path: default_path(),
            data: None,
            extra: Map::new(),
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

fn default_path() -> PathBuf {
    PathBuf::from("projects")
}

fn path_value(path: &Path) -> Value {
    Value::String(path.to_string_lossy().into_owned())
}

impl GlobalSettings {
    /// Flatten into an option mapping, typed options first.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = self.extra.clone();
        map.insert("language".to_string(), Value::String(self.language.clone()));
        map.insert(
            "project".to_string(),
            self.project.clone().map_or(Value::Null, Value::String),
        );
        map.insert(
            "fixed_model_name".to_string(),
            self.fixed_model_name.clone().map_or(Value::Null, Value::String),
        );
        map.insert("path".to_string(), path_value(&self.path));
        map.insert(
            "data".to_string(),
            self.data.as_deref().map_or(Value::Null, path_value),
        );
        map
    }

    /// Type-check an option mapping. `pipeline` must already be removed.
    pub fn from_map(map: Map<String, Value>) -> ConfigResult<Self> {
        serde_json::from_value(Value::Object(map)).map_err(InvalidConfigError::InvalidOption)
    }
}

/// Process-wide defaults that every loaded document is merged over.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DefaultSettings {
    pub settings: GlobalSettings,
    pub pipeline: Vec<ComponentSpec>,
}

static DEFAULTS: OnceLock<DefaultSettings> = OnceLock::new();

impl DefaultSettings {
    /// Built-in defaults, created on first use and never mutated.
    pub fn global() -> &'static DefaultSettings {
        DEFAULTS.get_or_init(DefaultSettings::default)
    }

    /// Replace the default pipeline with name-only specs.
    pub fn with_pipeline<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pipeline = names.into_iter().map(ComponentSpec::new).collect();
        self
    }

    /// Parse defaults from YAML text.
    ///
    /// `pipeline` must be a list; entries may be bare component names or
    /// full specs.
    pub fn from_yaml_str(text: &str) -> ConfigResult<Self> {
        let mut map = parse_document(text)?;
        // Null options are unspecified and keep the built-in value
        map.retain(|_, value| !value.is_null());
        let pipeline = match map.remove(PIPELINE_KEY) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(entries)) => entries
                .into_iter()
                .enumerate()
                .map(|(index, entry)| ComponentSpec::from_value(index, entry))
                .collect::<ConfigResult<Vec<_>>>()?,
            Some(other) => {
                return Err(InvalidConfigError::InvalidPipelineEntry {
                    index: 0,
                    reason: format!(
                        "default pipeline must be a list of component names, found {}",
                        InvalidConfigError::kind_of(&other)
                    ),
                });
            }
        };

        Ok(Self {
            settings: GlobalSettings::from_map(map)?,
            pipeline,
        })
    }

    /// Load defaults from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| InvalidConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Defaults as a plain mapping, shaped like a resolved configuration.
    pub fn as_dict(&self) -> Map<String, Value> {
        let mut map = self.settings.to_map();
        map.insert(
            PIPELINE_KEY.to_string(),
            Value::Array(self.pipeline.iter().map(ComponentSpec::to_value).collect()),
        );
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builtin_defaults() {
        let defaults = DefaultSettings::global();
        assert_eq!(defaults.settings.language, "en");
        assert_eq!(defaults.settings.path, PathBuf::from("projects"));
        assert!(defaults.pipeline.is_empty());
        assert_eq!(
            Value::Object(defaults.as_dict()),
            json!({
                "language": "en",
                "project": null,
                "fixed_model_name": null,
                "path": "projects",
                "data": null,
                "pipeline": []
            })
        );
    }

    #[test]
    fn test_spec_from_value_requires_name() {
        let err = ComponentSpec::from_value(2, json!({"C": 3})).unwrap_err();
        assert!(err.to_string().contains("position 2"));
        assert!(err.to_string().contains("missing required key 'name'"));

        let err = ComponentSpec::from_value(1, json!(3)).unwrap_err();
        assert!(err.to_string().contains("found a number"));
    }

    #[test]
    fn test_spec_from_bare_name() {
        let spec = ComponentSpec::from_value(0, json!("ner_crf")).unwrap();
        assert_eq!(spec, ComponentSpec::new("ner_crf"));
    }

    #[test]
    fn test_spec_keeps_attributes() {
        let spec = ComponentSpec::from_value(0, json!({"name": "ner_crf", "max_iterations": 10}))
            .unwrap();
        assert_eq!(spec.name, "ner_crf");
        assert_eq!(spec.get("max_iterations"), Some(&json!(10)));
        assert_eq!(spec.to_value(), json!({"name": "ner_crf", "max_iterations": 10}));
    }

    #[test]
    fn test_set_attr_cannot_rename() {
        let mut spec = ComponentSpec::new("ner_crf");
        spec.set_attr("name".to_string(), json!("ner_spacy"));
        assert_eq!(spec.to_value(), json!({"name": "ner_crf"}));
    }

    #[test]
    fn test_defaults_from_yaml() {
        let defaults = DefaultSettings::from_yaml_str(
            r#"
language: de
num_threads: 4
pipeline:
  - tokenizer_whitespace
  - name: ner_crf
    max_iterations: 20
"#,
        )
        .unwrap();

        assert_eq!(defaults.settings.language, "de");
        assert_eq!(defaults.settings.extra.get("num_threads"), Some(&json!(4)));
        assert_eq!(defaults.pipeline.len(), 2);
        assert_eq!(defaults.pipeline[0], ComponentSpec::new("tokenizer_whitespace"));
        assert_eq!(
            defaults.pipeline[1],
            ComponentSpec::new("ner_crf").with_attr("max_iterations", 20)
        );
    }

    #[test]
    fn test_defaults_null_option_keeps_builtin() {
        let defaults = DefaultSettings::from_yaml_str("language:\npath:\nproject: demo\n").unwrap();
        assert_eq!(defaults.settings.language, "en");
        assert_eq!(defaults.settings.path, PathBuf::from("projects"));
        assert_eq!(defaults.settings.project.as_deref(), Some("demo"));
    }

    #[test]
    fn test_defaults_reject_template_pipeline() {
        let err = DefaultSettings::from_yaml_str("pipeline: spacy_sklearn").unwrap_err();
        assert!(matches!(err, InvalidConfigError::InvalidPipelineEntry { .. }));
    }

    #[test]
    fn test_typed_option_rejects_wrong_type() {
        let mut map = Map::new();
        map.insert("language".to_string(), json!(["en", "de"]));
        let err = GlobalSettings::from_map(map).unwrap_err();
        assert!(matches!(err, InvalidConfigError::InvalidOption(_)));
    }
}
