//! Entity extractors.

use super::ComponentClass;
use crate::config::NluConfig;
use serde::{Deserialize, Serialize};

/// Conditional random field over token features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrfEntityExtractor {
    /// Tag entities with the BILOU scheme instead of plain IO.
    #[serde(rename = "BILOU_flag")]
    pub bilou_flag: bool,
    /// Token features for each position of the window around a token.
    pub features: Vec<Vec<String>>,
    pub max_iterations: usize,
    #[serde(rename = "L1_c")]
    pub l1_c: f64,
    #[serde(rename = "L2_c")]
    pub l2_c: f64,
}

fn features(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

impl Default for CrfEntityExtractor {
    fn default() -> Self {
        Self {
            bilou_flag: true,
            features: vec![
                features(&["low", "title", "upper"]),
                features(&[
                    "bias", "low", "prefix5", "prefix2", "suffix5", "suffix3", "suffix2", "upper",
                    "title", "digit", "pattern",
                ]),
                features(&["low", "title", "upper"]),
            ],
            max_iterations: 50,
            l1_c: 0.1,
            l2_c: 0.1,
        }
    }
}

impl ComponentClass for CrfEntityExtractor {
    const NAME: &'static str = "ner_crf";

    fn prepare(&mut self, _config: &NluConfig) -> Result<(), String> {
        if self.features.len() % 2 == 0 {
            return Err(format!(
                "feature window must be centred on the token, got {} positions",
                self.features.len()
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacyEntityExtractor {
    /// Entity labels to keep; all when unset.
    pub dimensions: Option<Vec<String>>,
}

impl ComponentClass for SpacyEntityExtractor {
    const NAME: &'static str = "ner_spacy";
    const REQUIRES: &'static [&'static str] = &["nlp_spacy"];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitieEntityExtractor {}

impl ComponentClass for MitieEntityExtractor {
    const NAME: &'static str = "ner_mitie";
    const REQUIRES: &'static [&'static str] = &["nlp_mitie"];
}

/// Maps extracted entity values onto their canonical synonyms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntitySynonymMapper {}

impl ComponentClass for EntitySynonymMapper {
    const NAME: &'static str = "ner_synonyms";
}

/// Structured entities (dates, amounts, ...) from a duckling HTTP server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DucklingHttpExtractor {
    pub url: Option<String>,
    /// Duckling dimensions to keep; all when unset.
    pub dimensions: Option<Vec<String>>,
    /// Locale sent to duckling; derived from the language when unset.
    pub locale: Option<String>,
}

impl ComponentClass for DucklingHttpExtractor {
    const NAME: &'static str = "ner_duckling_http";

    fn prepare(&mut self, config: &NluConfig) -> Result<(), String> {
        if self.locale.is_none() {
            let language = config.language();
            self.locale = Some(format!("{}_{}", language, language.to_uppercase()));
        }
        Ok(())
    }
}
