//! Intent featurizers.

use super::ComponentClass;
use crate::config::NluConfig;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sentence vectors from the spaCy document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpacyFeaturizer {}

impl ComponentClass for SpacyFeaturizer {
    const NAME: &'static str = "intent_featurizer_spacy";
    const REQUIRES: &'static [&'static str] = &["nlp_spacy"];
}

/// Sentence vectors from MITIE word features.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitieFeaturizer {}

impl ComponentClass for MitieFeaturizer {
    const NAME: &'static str = "intent_featurizer_mitie";
    const REQUIRES: &'static [&'static str] = &["nlp_mitie"];
}

/// Appends character n-gram features to spaCy sentence vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NGramFeaturizer {
    /// Most discriminative n-grams kept as features.
    pub max_number_of_ngrams: usize,
}

impl Default for NGramFeaturizer {
    fn default() -> Self {
        Self {
            max_number_of_ngrams: 10,
        }
    }
}

impl ComponentClass for NGramFeaturizer {
    const NAME: &'static str = "intent_featurizer_ngrams";
    const REQUIRES: &'static [&'static str] = &["nlp_spacy"];
}

/// Binary features for regex and lookup-table matches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegexFeaturizer {}

impl ComponentClass for RegexFeaturizer {
    const NAME: &'static str = "intent_entity_featurizer_regex";
}

/// Bag-of-words token counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountVectorsFeaturizer {
    /// Pattern a token must match to be counted.
    pub token_pattern: String,
    /// `ascii`, `unicode`, or unset for no accent stripping.
    pub strip_accents: Option<String>,
    /// `english`, an explicit word list, or unset.
    pub stop_words: Option<Value>,
    pub min_df: f64,
    pub max_df: f64,
    pub min_ngram: usize,
    pub max_ngram: usize,
    pub max_features: Option<usize>,
}

impl Default for CountVectorsFeaturizer {
    fn default() -> Self {
        Self {
            token_pattern: r"\b\w\w+\b".to_string(),
            strip_accents: None,
            stop_words: None,
            min_df: 1.0,
            max_df: 1.0,
            min_ngram: 1,
            max_ngram: 1,
            max_features: None,
        }
    }
}

impl ComponentClass for CountVectorsFeaturizer {
    const NAME: &'static str = "intent_featurizer_count_vectors";

    fn prepare(&mut self, _config: &NluConfig) -> Result<(), String> {
        Regex::new(&self.token_pattern)
            .map_err(|e| format!("invalid token_pattern '{}': {}", self.token_pattern, e))?;

        if self.min_ngram == 0 || self.min_ngram > self.max_ngram {
            return Err(format!(
                "n-gram range must satisfy 1 <= min_ngram <= max_ngram, got {}..={}",
                self.min_ngram, self.max_ngram
            ));
        }

        if let Some(ref accents) = self.strip_accents
            && accents != "ascii"
            && accents != "unicode"
        {
            return Err(format!(
                "strip_accents must be 'ascii' or 'unicode', got '{accents}'"
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ComponentBuilder;
    use crate::config::ConfigResolver;
    use crate::error::InvalidConfigError;

    fn build(text: &str) -> Result<Box<dyn crate::components::Component>, InvalidConfigError> {
        let cfg = ConfigResolver::global().load_str(text).unwrap();
        ComponentBuilder::default().create_component(CountVectorsFeaturizer::NAME, &cfg)
    }

    #[test]
    fn test_defaults_build() {
        let component = build("pipeline:\n  - name: intent_featurizer_count_vectors\n").unwrap();
        let featurizer = component.downcast_ref::<CountVectorsFeaturizer>().unwrap();
        assert_eq!(featurizer, &CountVectorsFeaturizer::default());
    }

    #[test]
    fn test_rejects_inverted_ngram_range() {
        let err = build(
            "pipeline:\n  - name: intent_featurizer_count_vectors\n    min_ngram: 3\n    max_ngram: 2\n",
        )
        .unwrap_err();
        assert!(matches!(err, InvalidConfigError::ComponentSetup { .. }));
    }

    #[test]
    fn test_rejects_bad_token_pattern() {
        let err = build(
            "pipeline:\n  - name: intent_featurizer_count_vectors\n    token_pattern: \"(unclosed\"\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("token_pattern"));
    }

    #[test]
    fn test_rejects_unknown_accent_mode() {
        let err = build(
            "pipeline:\n  - name: intent_featurizer_count_vectors\n    strip_accents: latin\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("strip_accents"));
    }
}
