//! Pipeline checks for callers that run the pipeline.
//!
//! The builder never enforces these. A trainer can call
//! [`validate_pipeline`] before building and decide what to do with the
//! issues.

use crate::config::NluConfig;
use crate::registry::Registry;
use std::collections::HashSet;
use std::fmt;

/// A problem with the component order or selection of a pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineIssue {
    /// Pipeline entry with no registry entry.
    UnknownComponent { index: usize, name: String },
    /// A prerequisite does not appear earlier in the pipeline.
    MissingPrerequisite {
        index: usize,
        component: String,
        requires: String,
    },
    /// The component does not support the configured language.
    UnsupportedLanguage {
        index: usize,
        component: String,
        language: String,
    },
}

impl fmt::Display for PipelineIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineIssue::UnknownComponent { index, name } => {
                write!(f, "#{index} '{name}': unknown component")
            }
            PipelineIssue::MissingPrerequisite {
                index,
                component,
                requires,
            } => write!(
                f,
                "#{index} '{component}': requires '{requires}' earlier in the pipeline"
            ),
            PipelineIssue::UnsupportedLanguage {
                index,
                component,
                language,
            } => write!(f, "#{index} '{component}': language '{language}' is not supported"),
        }
    }
}

/// Check every pipeline entry against the registry, in order.
pub fn validate_pipeline(config: &NluConfig, registry: &Registry) -> Vec<PipelineIssue> {
    let mut issues = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for (index, spec) in config.pipeline().iter().enumerate() {
        let Ok(entry) = registry.lookup_component_class(&spec.name) else {
            issues.push(PipelineIssue::UnknownComponent {
                index,
                name: spec.name.clone(),
            });
            seen.insert(spec.name.as_str());
            continue;
        };

        for required in &entry.requires {
            if !seen.contains(required.as_str()) {
                issues.push(PipelineIssue::MissingPrerequisite {
                    index,
                    component: spec.name.clone(),
                    requires: required.clone(),
                });
            }
        }

        if !entry.can_handle_language(config.language()) {
            issues.push(PipelineIssue::UnsupportedLanguage {
                index,
                component: spec.name.clone(),
                language: config.language().to_string(),
            });
        }

        seen.insert(spec.name.as_str());
    }

    issues
}
