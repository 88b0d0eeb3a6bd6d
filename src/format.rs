//! Output formatting for resolved configurations and registry listings.

use crate::config::NluConfig;
use crate::registry::Registry;
use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
    Markdown,
}

/// Serialize as YAML or pretty JSON.
pub fn to_text<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml | OutputFormat::Markdown => Ok(serde_yaml::to_string(value)?),
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

/// Format a resolved configuration as markdown.
pub fn format_config_markdown(config: &NluConfig) -> String {
    let mut md = String::new();

    md.push_str("## Options\n");
    for (key, value) in config.iter() {
        if key == crate::config::PIPELINE_KEY {
            continue;
        }
        md.push_str(&format!("- **{}**: {}\n", key, scalar(&value)));
    }

    md.push_str(&format!("\n## Pipeline ({})\n", config.pipeline().len()));
    for (index, spec) in config.pipeline().iter().enumerate() {
        md.push_str(&format!("{}. `{}`", index + 1, spec.name));
        if !spec.attrs.is_empty() {
            let attrs: Vec<String> = spec
                .attrs
                .iter()
                .map(|(key, value)| format!("{}={}", key, scalar(value)))
                .collect();
            md.push_str(&format!(" ({})", attrs.join(", ")));
        }
        md.push('\n');
    }

    md
}

/// Format registered templates as markdown.
pub fn format_templates_markdown(registry: &Registry) -> String {
    let mut md = String::new();

    md.push_str("# Pipeline templates\n\n");
    for (name, components) in registry.templates() {
        md.push_str(&format!("## {}\n", name));
        for (index, component) in components.iter().enumerate() {
            md.push_str(&format!("{}. `{}`\n", index + 1, component));
        }
        md.push('\n');
    }

    md
}

/// Format registered components as a markdown table.
pub fn format_components_markdown(registry: &Registry) -> String {
    let mut md = String::new();

    md.push_str("| component | requires | languages |\n");
    md.push_str("|---|---|---|\n");
    for entry in registry.entries() {
        let requires = if entry.requires.is_empty() {
            "-".to_string()
        } else {
            entry.requires.join(", ")
        };
        let languages = entry
            .language_list
            .as_ref()
            .map_or_else(|| "any".to_string(), |langs| langs.join(", "));
        md.push_str(&format!("| `{}` | {} | {} |\n", entry.name, requires, languages));
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigResolver;

    #[test]
    fn test_config_markdown() {
        let config = ConfigResolver::global()
            .load_str("pipeline:\n  - name: tokenizer_whitespace\n  - name: ner_crf\n    max_iterations: 10\n")
            .unwrap();
        let md = format_config_markdown(&config);
        assert!(md.contains("- **language**: en\n"));
        assert!(md.contains("- **project**: -\n"));
        assert!(md.contains("## Pipeline (2)\n"));
        assert!(md.contains("1. `tokenizer_whitespace`\n"));
        assert!(md.contains("2. `ner_crf` (max_iterations=10)\n"));
    }

    #[test]
    fn test_components_markdown() {
        let md = format_components_markdown(Registry::global());
        assert!(md.contains("| `tokenizer_spacy` | nlp_spacy | any |\n"));
        assert!(md.contains("| `tokenizer_jieba` | - | zh |\n"));
    }

    #[test]
    fn test_json_output_roundtrips() {
        let config = ConfigResolver::global().load_str("pipeline: keyword").unwrap();
        let text = to_text(&config, OutputFormat::Json).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["pipeline"][0]["name"], "intent_classifier_keyword");
    }
}
