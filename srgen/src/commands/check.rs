use std::path::PathBuf;

use clap::{Args, ValueEnum};
use eyre::{Context, Result};
use srgen_codegen::pipeline::{Pipeline, Severity};
use srgen_schema::RecordsToml;

use super::UnwrapOrExit;

#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct CheckCommand {
    /// Path to records.toml (defaults to ./records.toml)
    #[arg(short, long, default_value = "records.toml")]
    pub config: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let records = RecordsToml::open(&self.config).unwrap_or_exit();
        let schema = records.manifest();

        // Run the pipeline to validate
        let pipeline = Pipeline::new();
        let ctx = match pipeline.run(schema.clone()) {
            Ok(ctx) => ctx,
            Err(e) => {
                if matches!(self.format, OutputFormat::Json) {
                    let report = serde_json::json!({
                        "valid": false,
                        "error": format!("{:#}", e),
                    });
                    println!("{}", serde_json::to_string_pretty(&report)?);
                    std::process::exit(1);
                }
                return Err(e).wrap_err("Validation failed");
            }
        };

        let emission_order: Vec<&str> = ctx
            .plan
            .as_ref()
            .map(|plan| plan.order.iter().map(String::as_str).collect())
            .unwrap_or_default();

        if matches!(self.format, OutputFormat::Json) {
            let report = serde_json::json!({
                "valid": true,
                "namespace": schema.record.namespace,
                "root": schema.record.root,
                "root_proxy": schema.record.root_proxy,
                "emission_order": emission_order,
                "diagnostics": ctx.diagnostics,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        // Print all diagnostics
        let mut has_warnings = false;
        for diag in &ctx.diagnostics {
            match diag.severity {
                Severity::Error => {
                    eprintln!("error: {}", diag.message);
                    if let Some(loc) = &diag.location {
                        eprintln!("  --> {}", loc);
                    }
                }
                Severity::Warning => {
                    has_warnings = true;
                    eprintln!("warning: {}", diag.message);
                    if let Some(loc) = &diag.location {
                        eprintln!("  --> {}", loc);
                    }
                }
                Severity::Info => {
                    println!("info: {}", diag.message);
                    if let Some(loc) = &diag.location {
                        println!("  --> {}", loc);
                    }
                }
            }
        }

        if has_warnings {
            println!();
        }

        println!("✓ {} is valid\n", self.config.display());

        // Record info
        println!(
            "  {}::{} -> {}",
            schema.record.namespace, schema.record.root, schema.record.root_proxy
        );

        let type_count = schema.types.len();
        println!(
            "  {} record type{}:",
            type_count,
            if type_count == 1 { "" } else { "s" }
        );
        for (name, def) in &schema.types {
            let field_count = def.fields.len();
            println!(
                "    {} ({} field{})",
                name,
                field_count,
                if field_count == 1 { "" } else { "s" }
            );
        }

        if !emission_order.is_empty() {
            println!("\n  Emission order: {}", emission_order.join(", "));
        }

        if !schema.record.enums.is_empty() {
            let enum_count = schema.record.enums.len();
            println!(
                "\n  {} enumeration{}:",
                enum_count,
                if enum_count == 1 { "" } else { "s" }
            );
            for name in &schema.record.enums {
                println!("    {}", name);
            }
        }

        Ok(())
    }
}
