//! Render command - Render one component document.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use cfgdoc_templates::{DocConfig, DocumentSynthesizer};

use super::ComponentArgs;

#[derive(Args)]
pub struct RenderArgs {
    #[command(flatten)]
    component: ComponentArgs,

    /// Render config file (TOML or YAML)
    #[arg(short, long, env = "CFGDOC_CONFIG")]
    config: Option<PathBuf>,

    /// Nest example configs under the component type
    #[arg(long, env = "CFGDOC_NEST")]
    nest: bool,

    /// Print the render context as JSON instead of the document
    #[arg(long)]
    context_json: bool,
}

pub fn execute(args: RenderArgs) -> Result<()> {
    let output = build(&args)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&output)?;
    stdout.flush()?;
    Ok(())
}

/// The document, or the render context as JSON.
fn build(args: &RenderArgs) -> Result<Vec<u8>> {
    let config = match &args.config {
        Some(path) => DocConfig::from_file(path)
            .with_context(|| format!("loading render config {}", path.display()))?,
        None => DocConfig::default(),
    };
    let config = if args.nest { config.with_nest(true) } else { config };

    let (spec, example) = args.component.load()?;
    info!("Rendering {} {}", spec.category, spec.name);

    let synthesizer = DocumentSynthesizer::new(config)?;
    let output = if args.context_json {
        synthesizer.context(&spec, &example)?.to_json()?.into_bytes()
    } else {
        synthesizer.render(&spec, &example)?
    };
    Ok(output)
}
