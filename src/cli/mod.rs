//! CLI command definitions for nlu-config
//!
//! This module defines the CLI structure using clap's derive macros.
//! The main entry point is the `Cli` struct which contains subcommands.

use crate::format::OutputFormat;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::Value;
use std::path::PathBuf;

/// Output format flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FormatArg {
    #[default]
    Yaml,
    Json,
    Markdown,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Yaml => OutputFormat::Yaml,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Markdown => OutputFormat::Markdown,
        }
    }
}

/// Resolve NLU pipeline configurations and build their components
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2", global = true)]
    pub log: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the resolved configuration
    Show(LoadArgs),

    /// List registered pipeline templates
    Templates {
        #[arg(short, long, value_enum, default_value_t)]
        format: FormatArg,
    },

    /// List registered components with prerequisites and languages
    Components,

    /// Build every pipeline component and print its effective configuration
    Build(LoadArgs),

    /// Check component order and language support without building
    Check(LoadArgs),
}

/// Arguments shared by commands that load a config document.
#[derive(Args, Debug)]
pub struct LoadArgs {
    /// Config document (YAML or JSON); defaults to ./config.yml when present
    pub config: Option<PathBuf>,

    /// Override a top-level option, e.g. `language=de`
    #[arg(short = 'o', long = "option", value_name = "KEY=VALUE", value_parser = parse_option)]
    pub options: Vec<(String, Value)>,

    /// Set a component attribute after load, e.g. `ner_crf.max_iterations=10`
    #[arg(short, long = "set", value_name = "COMPONENT.KEY=VALUE", value_parser = parse_component_attr)]
    pub set: Vec<ComponentAttr>,

    #[arg(short, long, value_enum, default_value_t)]
    pub format: FormatArg,
}

/// A `--set` assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentAttr {
    pub component: String,
    pub key: String,
    pub value: Value,
}

/// Parse the value side of an assignment as a YAML scalar or flow collection.
///
/// Falls back to a plain string when it does not parse.
fn parse_value(raw: &str) -> Value {
    serde_yaml::from_str::<Value>(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Parse `KEY=VALUE`.
pub fn parse_option(s: &str) -> Result<(String, Value), String> {
    let (key, raw) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    if key.is_empty() {
        return Err(format!("missing option name in '{s}'"));
    }
    Ok((key.to_string(), parse_value(raw)))
}

/// Parse `COMPONENT.KEY=VALUE`.
pub fn parse_component_attr(s: &str) -> Result<ComponentAttr, String> {
    let (target, value) = parse_option(s)?;
    let (component, key) = target
        .split_once('.')
        .ok_or_else(|| format!("expected COMPONENT.KEY=VALUE, got '{s}'"))?;
    if component.is_empty() || key.is_empty() {
        return Err(format!("expected COMPONENT.KEY=VALUE, got '{s}'"));
    }
    Ok(ComponentAttr {
        component: component.to_string(),
        key: key.to_string(),
        value,
    })
}
