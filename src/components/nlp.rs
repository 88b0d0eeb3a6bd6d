//! Language model loaders that other components build on.

use super::ComponentClass;
use crate::config::NluConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Loads a spaCy language model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacyNlp {
    /// Model to load; the pipeline language when unset.
    pub model: Option<String>,
    /// Keep token case when computing features.
    pub case_sensitive: bool,
}

impl ComponentClass for SpacyNlp {
    const NAME: &'static str = "nlp_spacy";

    fn prepare(&mut self, config: &NluConfig) -> Result<(), String> {
        if self.model.is_none() {
            self.model = Some(config.language().to_string());
        }
        Ok(())
    }
}

/// Loads MITIE word feature extractors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MitieNlp {
    /// Path to the MITIE feature extractor file.
    pub model: Option<PathBuf>,
}

impl ComponentClass for MitieNlp {
    const NAME: &'static str = "nlp_mitie";

    fn prepare(&mut self, _config: &NluConfig) -> Result<(), String> {
        match self.model {
            Some(_) => Ok(()),
            None => Err(format!(
                "the MITIE component '{}' needs the configuration value for 'model'",
                Self::NAME
            )),
        }
    }
}
