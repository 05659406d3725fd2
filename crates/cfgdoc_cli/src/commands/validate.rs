//! Validate command - Check a component schema against its example.

use anyhow::Result;
use clap::Args;
use tracing::info;

use cfgdoc_spec::{SchemaLinter, TreeReconciler};

use super::ComponentArgs;

#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    component: ComponentArgs,

    /// Treat lint warnings as failures
    #[arg(long)]
    strict: bool,
}

pub fn execute(args: ValidateArgs) -> Result<()> {
    let (spec, example) = args.component.load()?;
    info!("Validating {} {}", spec.category, spec.name);

    let mut all_passed = true;

    println!("📋 Linting schema...");
    let report = SchemaLinter::lint(&spec);
    if report.is_valid() {
        println!("   ✅ Schema lint passed");
    } else {
        all_passed = false;
        println!("   ❌ Schema lint failed:");
        for error in &report.errors {
            println!("      - {}", error);
        }
    }
    for warning in &report.warnings {
        println!("   ⚠️  {}", warning);
    }
    if args.strict && !report.warnings.is_empty() {
        all_passed = false;
    }

    println!("🔍 Reconciling schema with example...");
    if spec.has_schema() {
        let result = TreeReconciler::reconcile(&spec.fields, &example);
        if result.is_consistent() {
            println!("   ✅ {} fields reconciled", result.fields.len());
            for flat in &result.fields {
                let label = flat.label.as_deref().unwrap_or("?");
                let note = if flat.field.deprecated { " (deprecated)" } else { "" };
                println!("      {} `{}`{}", flat.path, label, note);
            }
        } else {
            all_passed = false;
            println!("   ❌ Example keys missing from the schema:");
            for path in &result.missing {
                println!("      - {}", path);
            }
        }
    } else {
        println!("   ⚠️  No fields declared, example is documented as-is");
    }

    println!();
    if all_passed {
        println!("✅ All validations passed!");
        Ok(())
    } else {
        anyhow::bail!("validation failed for {} {}", spec.category, spec.name)
    }
}
