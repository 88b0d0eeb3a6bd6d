//! nlu-config
//!
//! Resolves NLU pipeline config documents against the built-in defaults and
//! component registry, and builds the configured components.

use anyhow::{Result, bail};
use clap::Parser;
use nlu_pipeline_config::cli::{Cli, Command, LoadArgs};
use nlu_pipeline_config::components::ComponentBuilder;
use nlu_pipeline_config::config::{NluConfig, load_with_overrides};
use nlu_pipeline_config::format::{
    OutputFormat, format_components_markdown, format_config_markdown, format_templates_markdown,
    to_text,
};
use nlu_pipeline_config::logging::{self, LogTarget};
use nlu_pipeline_config::registry::Registry;
use nlu_pipeline_config::validation::validate_pipeline;
use serde_json::{Map, Value};
use tracing::{info, warn};

/// Load the config named by `args`, then apply `--set` assignments.
fn load_config(args: &LoadArgs) -> Result<NluConfig> {
    let overrides: Map<String, Value> = args.options.iter().cloned().collect();
    let mut config = load_with_overrides(args.config.as_deref(), overrides)?;

    for attr in &args.set {
        if !config.set_component_attr(&attr.component, [(attr.key.clone(), attr.value.clone())]) {
            warn!(
                component = %attr.component,
                "component is not in the pipeline, --set {}.{} ignored",
                attr.component,
                attr.key
            );
        }
    }

    Ok(config)
}

fn show(args: &LoadArgs) -> Result<()> {
    let config = load_config(args)?;
    match OutputFormat::from(args.format) {
        OutputFormat::Markdown => print!("{}", format_config_markdown(&config)),
        format => print!("{}", to_text(&config, format)?),
    }
    Ok(())
}

fn build(args: &LoadArgs) -> Result<()> {
    let config = load_config(args)?;
    let builder = ComponentBuilder::new(Registry::global());
    let components = builder.create_pipeline(&config)?;
    info!(count = components.len(), "built pipeline components");

    let configs: Vec<Value> = components.iter().map(|c| c.component_config()).collect();
    match OutputFormat::from(args.format) {
        OutputFormat::Markdown => {
            for (index, component) in configs.iter().enumerate() {
                println!("## {}. `{}`", index + 1, component["name"].as_str().unwrap_or("?"));
                println!("```yaml\n{}```", serde_yaml::to_string(component)?);
            }
        }
        format => print!("{}", to_text(&configs, format)?),
    }
    Ok(())
}

fn check(args: &LoadArgs) -> Result<()> {
    let config = load_config(args)?;
    let issues = validate_pipeline(&config, Registry::global());
    if issues.is_empty() {
        println!(
            "pipeline OK: {} components for language '{}'",
            config.pipeline().len(),
            config.language()
        );
        return Ok(());
    }

    for issue in &issues {
        eprintln!("{}", issue);
    }
    bail!("pipeline has {} issue(s)", issues.len());
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&LogTarget::parse(&cli.log), cli.verbose)?;

    let registry = Registry::global();
    match cli.command {
        Command::Show(ref args) => show(args),
        Command::Build(ref args) => build(args),
        Command::Check(ref args) => check(args),
        Command::Templates { format } => {
            match OutputFormat::from(format) {
                OutputFormat::Markdown => print!("{}", format_templates_markdown(registry)),
                format => {
                    let templates: Map<String, Value> = registry
                        .templates()
                        .map(|(name, components)| (name.to_string(), Value::from(components.to_vec())))
                        .collect();
                    print!("{}", to_text(&templates, format)?);
                }
            }
            Ok(())
        }
        Command::Components => {
            print!("{}", format_components_markdown(registry));
            Ok(())
        }
    }
}
