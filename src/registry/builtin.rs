//! Built-in component and template tables.

use super::RegistryEntry;
use crate::components::classifiers::{
    EmbeddingIntentClassifier, KeywordIntentClassifier, MitieIntentClassifier,
    SklearnIntentClassifier,
};
use crate::components::extractors::{
    CrfEntityExtractor, DucklingHttpExtractor, EntitySynonymMapper, MitieEntityExtractor,
    SpacyEntityExtractor,
};
use crate::components::featurizers::{
    CountVectorsFeaturizer, MitieFeaturizer, NGramFeaturizer, RegexFeaturizer, SpacyFeaturizer,
};
use crate::components::nlp::{MitieNlp, SpacyNlp};
use crate::components::tokenizers::{
    JiebaTokenizer, MitieTokenizer, SpacyTokenizer, WhitespaceTokenizer,
};

/// Pipeline templates in execution order.
pub(super) const PIPELINE_TEMPLATES: &[(&str, &[&str])] = &[
    (
        "spacy_sklearn",
        &[
            "nlp_spacy",
            "tokenizer_spacy",
            "intent_featurizer_spacy",
            "intent_entity_featurizer_regex",
            "ner_crf",
            "ner_synonyms",
            "intent_classifier_sklearn",
        ],
    ),
    ("keyword", &["intent_classifier_keyword"]),
    (
        "tensorflow_embedding",
        &[
            "tokenizer_whitespace",
            "ner_crf",
            "intent_featurizer_count_vectors",
            "intent_classifier_tensorflow_embedding",
        ],
    ),
];

pub(super) fn components() -> Vec<RegistryEntry> {
    vec![
        // Model loaders
        RegistryEntry::of::<SpacyNlp>(),
        RegistryEntry::of::<MitieNlp>(),
        // Tokenizers
        RegistryEntry::of::<WhitespaceTokenizer>(),
        RegistryEntry::of::<JiebaTokenizer>(),
        RegistryEntry::of::<MitieTokenizer>(),
        RegistryEntry::of::<SpacyTokenizer>(),
        // Featurizers
        RegistryEntry::of::<SpacyFeaturizer>(),
        RegistryEntry::of::<MitieFeaturizer>(),
        RegistryEntry::of::<NGramFeaturizer>(),
        RegistryEntry::of::<RegexFeaturizer>(),
        RegistryEntry::of::<CountVectorsFeaturizer>(),
        // Intent classifiers
        RegistryEntry::of::<KeywordIntentClassifier>(),
        RegistryEntry::of::<SklearnIntentClassifier>(),
        RegistryEntry::of::<MitieIntentClassifier>(),
        RegistryEntry::of::<EmbeddingIntentClassifier>(),
        // Entity extractors
        RegistryEntry::of::<CrfEntityExtractor>(),
        RegistryEntry::of::<SpacyEntityExtractor>(),
        RegistryEntry::of::<MitieEntityExtractor>(),
        RegistryEntry::of::<EntitySynonymMapper>(),
        RegistryEntry::of::<DucklingHttpExtractor>(),
    ]
}
