//! Error types for configuration loading and component construction.

use std::path::PathBuf;
use thiserror::Error;

/// A component name with no registry entry.
///
/// Returned by [`crate::registry::Registry::lookup_component_class`]. At the
/// top level it is surfaced as [`InvalidConfigError::UnknownComponent`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "failed to find component class for '{name}'. Unknown component name. \
     Check your configured pipeline and make sure the component name is not misspelled"
)]
pub struct UnknownComponentError {
    pub name: String,
}

impl UnknownComponentError {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Any failure while turning a config document into a pipeline.
#[derive(Debug, Error)]
pub enum InvalidConfigError {
    #[error("failed to read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config document: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("config document must be a mapping of option names, found {found}")]
    NotAMapping { found: &'static str },

    #[error("unknown pipeline template '{name}'. Known pipeline templates: {known}")]
    UnknownPipelineTemplate { name: String, known: String },

    #[error("invalid pipeline entry at position {index}: {reason}")]
    InvalidPipelineEntry { index: usize, reason: String },

    #[error("invalid value for global option: {0}")]
    InvalidOption(#[source] serde_json::Error),

    #[error(transparent)]
    UnknownComponent(#[from] UnknownComponentError),

    #[error("invalid attributes for component '{component}': {source}")]
    InvalidComponentAttribute {
        component: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("component '{component}' rejected its configuration: {message}")]
    ComponentSetup { component: String, message: String },
}

impl InvalidConfigError {
    /// Short name for the JSON value kind, used in `NotAMapping`.
    pub(crate) fn kind_of(value: &serde_json::Value) -> &'static str {
        match value {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "a boolean",
            serde_json::Value::Number(_) => "a number",
            serde_json::Value::String(_) => "a string",
            serde_json::Value::Array(_) => "a list",
            serde_json::Value::Object(_) => "a mapping",
        }
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, InvalidConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_template_message() {
        let err = InvalidConfigError::UnknownPipelineTemplate {
            name: "my_made_up_name".to_string(),
            known: "keyword, spacy_sklearn".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("unknown pipeline template"));
        assert!(msg.contains("my_made_up_name"));
    }

    #[test]
    fn test_unknown_component_is_transparent() {
        let err: InvalidConfigError = UnknownComponentError::new("tokenizer_nope").into();
        assert!(matches!(err, InvalidConfigError::UnknownComponent(_)));
        assert!(err.to_string().contains("'tokenizer_nope'"));
    }
}
