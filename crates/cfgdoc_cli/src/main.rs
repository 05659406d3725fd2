//! cfgdoc CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Validation failure
//! - 4: Template error

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cfgdoc_spec::SpecError;
use cfgdoc_templates::TemplateError;

mod commands;

use commands::{Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const VALIDATION_FAILURE: u8 = 3;
    pub const TEMPLATE_ERROR: u8 = 4;
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the rendered document
    let default_level = if cli.verbose {
        "cfgdoc=debug,info"
    } else if cli.quiet {
        "error"
    } else {
        "cfgdoc=info,warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let result = match cli.command {
        Commands::Render(args) => commands::render::execute(args),
        Commands::Validate(args) => commands::validate::execute(args),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    for cause in e.chain() {
        if let Some(err) = cause.downcast_ref::<TemplateError>() {
            return match err {
                TemplateError::Spec(spec) => categorize_spec_error(spec),
                TemplateError::Parse(_) | TemplateError::Render(_) => ExitCodes::TEMPLATE_ERROR,
                TemplateError::InvalidConfig { .. } | TemplateError::Io { .. } => {
                    ExitCodes::INVALID_ARGS
                }
                _ => ExitCodes::GENERAL_ERROR,
            };
        }
        if let Some(err) = cause.downcast_ref::<SpecError>() {
            return categorize_spec_error(err);
        }
    }

    if e.to_string().to_lowercase().contains("validation") {
        ExitCodes::VALIDATION_FAILURE
    } else {
        ExitCodes::GENERAL_ERROR
    }
}

fn categorize_spec_error(e: &SpecError) -> u8 {
    match e {
        SpecError::Io { .. } | SpecError::Yaml(_) => ExitCodes::INVALID_ARGS,
        SpecError::Serialization(_) => ExitCodes::GENERAL_ERROR,
        _ => ExitCodes::VALIDATION_FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_mismatch_is_validation_failure() {
        let err = anyhow::Error::from(TemplateError::from(SpecError::SchemaMismatch {
            paths: vec!["extra".into()],
        }));
        assert_eq!(categorize_error(&err), ExitCodes::VALIDATION_FAILURE);
    }

    #[test]
    fn test_missing_file_is_invalid_args() {
        let err = anyhow::Error::from(SpecError::Io {
            path: "nope.yaml".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        })
        .context("loading component spec nope.yaml");
        assert_eq!(categorize_error(&err), ExitCodes::INVALID_ARGS);
    }

    #[test]
    fn test_template_errors() {
        let err = anyhow::Error::from(TemplateError::Parse("bad".into()));
        assert_eq!(categorize_error(&err), ExitCodes::TEMPLATE_ERROR);
    }
}
