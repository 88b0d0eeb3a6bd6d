//! NLU pipeline configuration library
//!
//! Resolves config documents into an ordered list of component specs and
//! builds components from them through a name-keyed registry.
//!
//! ```no_run
//! use nlu_pipeline_config::components::ComponentBuilder;
//! use nlu_pipeline_config::config;
//!
//! let mut cfg = config::load("sample_configs/config_spacy.yml")?;
//! cfg.set_component_attr("intent_classifier_sklearn", [("C", serde_json::json!([324]))]);
//! let components = ComponentBuilder::default().create_pipeline(&cfg)?;
//! # Ok::<(), nlu_pipeline_config::error::InvalidConfigError>(())
//! ```

pub mod cli;
pub mod components;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod registry;
pub mod validation;
