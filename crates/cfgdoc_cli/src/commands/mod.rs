//! CLI command definitions.
//!
//! Each subcommand works on exactly one component: a spec file describing its
//! fields and an example file holding a full config for it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_yaml::Value;

use cfgdoc_spec::{ComponentLoader, ComponentSpec};

pub mod render;
pub mod validate;

/// cfgdoc - component configuration documentation generator
#[derive(Parser)]
#[command(name = "cfgdoc")]
#[command(version, about = "cfgdoc - component configuration documentation generator")]
#[command(long_about = r#"
cfgdoc reconciles a component's declared field schema against a full example
config and renders Markdown documentation for it.

COMMANDS:
  render    → Render one component document to stdout
  validate  → Lint the schema and check it against the example

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Validation failure
  4 - Template error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a component document
    Render(render::RenderArgs),

    /// Validate a component schema against its example
    Validate(validate::ValidateArgs),
}

/// The spec/example pair every command operates on.
#[derive(Args)]
pub struct ComponentArgs {
    /// Component spec file (YAML)
    #[arg(short, long)]
    pub spec: PathBuf,

    /// Full example config file (YAML)
    #[arg(short, long)]
    pub example: PathBuf,
}

impl ComponentArgs {
    pub fn load(&self) -> Result<(ComponentSpec, Value)> {
        let spec = ComponentLoader::load_spec(&self.spec)
            .with_context(|| format!("loading component spec {}", self.spec.display()))?;
        let example = ComponentLoader::load_example(&self.example)
            .with_context(|| format!("loading example config {}", self.example.display()))?;
        Ok((spec, example))
    }
}
