//! Intent classifiers.

use super::ComponentClass;
use crate::config::NluConfig;
use serde::{Deserialize, Serialize};

/// Matches intent names as keywords in the message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordIntentClassifier {}

impl ComponentClass for KeywordIntentClassifier {
    const NAME: &'static str = "intent_classifier_keyword";
}

/// SVM over sentence features, tuned with a grid search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SklearnIntentClassifier {
    /// Regularization values tried in the grid search.
    #[serde(rename = "C")]
    pub c: Vec<f64>,
    /// SVM kernels tried in the grid search.
    pub kernels: Vec<String>,
    pub max_cross_validation_folds: usize,
}

impl Default for SklearnIntentClassifier {
    fn default() -> Self {
        Self {
            c: vec![1.0, 2.0, 5.0, 10.0, 20.0, 100.0],
            kernels: vec!["linear".to_string()],
            max_cross_validation_folds: 5,
        }
    }
}

impl ComponentClass for SklearnIntentClassifier {
    const NAME: &'static str = "intent_classifier_sklearn";

    fn prepare(&mut self, _config: &NluConfig) -> Result<(), String> {
        if self.c.is_empty() || self.kernels.is_empty() {
            return Err("grid search needs at least one value for 'C' and 'kernels'".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitieIntentClassifier {}

impl ComponentClass for MitieIntentClassifier {
    const NAME: &'static str = "intent_classifier_mitie";
    const REQUIRES: &'static [&'static str] = &["nlp_mitie"];
}

/// Embeds messages and intent labels into a shared space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingIntentClassifier {
    pub hidden_layers_sizes_a: Vec<usize>,
    pub hidden_layers_sizes_b: Vec<usize>,
    /// Batch size grows linearly from the first to the second value.
    pub batch_size: Vec<usize>,
    pub epochs: usize,
    pub embed_dim: usize,
    pub mu_pos: f64,
    pub mu_neg: f64,
    /// `cosine` or `inner`.
    pub similarity_type: String,
    pub num_neg: usize,
    pub use_max_sim_neg: bool,
    #[serde(rename = "C2")]
    pub c2: f64,
    #[serde(rename = "C_emb")]
    pub c_emb: f64,
    pub droprate: f64,
    pub intent_tokenization_flag: bool,
    pub intent_split_symbol: String,
    pub evaluate_every_num_epochs: usize,
    pub evaluate_on_num_examples: usize,
}

impl Default for EmbeddingIntentClassifier {
    fn default() -> Self {
        Self {
            hidden_layers_sizes_a: vec![256, 128],
            hidden_layers_sizes_b: Vec::new(),
            batch_size: vec![64, 256],
            epochs: 300,
            embed_dim: 20,
            mu_pos: 0.8,
            mu_neg: -0.4,
            similarity_type: "cosine".to_string(),
            num_neg: 20,
            use_max_sim_neg: true,
            c2: 0.002,
            c_emb: 0.8,
            droprate: 0.2,
            intent_tokenization_flag: false,
            intent_split_symbol: "_".to_string(),
            evaluate_every_num_epochs: 10,
            evaluate_on_num_examples: 1000,
        }
    }
}

impl ComponentClass for EmbeddingIntentClassifier {
    const NAME: &'static str = "intent_classifier_tensorflow_embedding";

    fn prepare(&mut self, _config: &NluConfig) -> Result<(), String> {
        match self.similarity_type.as_str() {
            "cosine" | "inner" => Ok(()),
            other => Err(format!(
                "wrong similarity type '{other}', should be 'cosine' or 'inner'"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_renamed_attributes() {
        let classifier: SklearnIntentClassifier =
            serde_json::from_value(json!({"C": [0.5], "max_cross_validation_folds": 3})).unwrap();
        assert_eq!(classifier.c, vec![0.5]);
        assert_eq!(classifier.kernels, vec!["linear".to_string()]);
        assert_eq!(classifier.max_cross_validation_folds, 3);
    }

    #[test]
    fn test_embedding_partial_override() {
        let classifier: EmbeddingIntentClassifier =
            serde_json::from_value(json!({"epochs": 10, "C_emb": 0.5})).unwrap();
        assert_eq!(classifier.epochs, 10);
        assert_eq!(classifier.c_emb, 0.5);
        assert_eq!(classifier.embed_dim, 20);
    }
}
