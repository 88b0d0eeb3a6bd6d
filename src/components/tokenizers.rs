//! Tokenizers.

use super::ComponentClass;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Splits on whitespace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WhitespaceTokenizer {}

impl ComponentClass for WhitespaceTokenizer {
    const NAME: &'static str = "tokenizer_whitespace";
}

/// Chinese word segmentation with jieba.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JiebaTokenizer {
    /// Directory of user dictionaries loaded before tokenizing.
    pub dictionary_path: Option<PathBuf>,
}

impl ComponentClass for JiebaTokenizer {
    const NAME: &'static str = "tokenizer_jieba";
    const LANGUAGES: Option<&'static [&'static str]> = Some(&["zh"]);
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitieTokenizer {}

impl ComponentClass for MitieTokenizer {
    const NAME: &'static str = "tokenizer_mitie";
}

/// Reuses the tokens of the spaCy document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpacyTokenizer {}

impl ComponentClass for SpacyTokenizer {
    const NAME: &'static str = "tokenizer_spacy";
    const REQUIRES: &'static [&'static str] = &["nlp_spacy"];
}
