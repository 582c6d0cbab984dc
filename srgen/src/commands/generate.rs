use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use srgen_codegen::pipeline::{Pipeline, Severity};
use srgen_codegen_cpp::{Generator, LanguageCodegen};
use srgen_schema::RecordsToml;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to records.toml (defaults to ./records.toml)
    #[arg(short, long, default_value = "records.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let records = RecordsToml::open(&self.config).unwrap_or_exit();
        let schema = records.manifest();

        // Run the pipeline to validate, lower, and resolve emission order
        let pipeline = Pipeline::new();
        let ctx = pipeline.run(schema.clone()).wrap_err("Pipeline failed")?;

        // Print any warnings
        for diag in &ctx.diagnostics {
            if matches!(diag.severity, Severity::Warning) {
                eprintln!("warning: {}", diag.message);
            }
        }

        let generator = Generator::from_context(&ctx)?;
        if self.dry_run {
            return Self::run_preview(&generator);
        }

        let result = generator
            .generate(&self.output)
            .wrap_err("Failed to generate code")?;

        // Print header
        println!(
            "{}::{} -> {}",
            schema.record.namespace, schema.record.root, schema.record.root_proxy
        );
        if let Some(plan) = &ctx.plan {
            println!("Emission order: {}", plan.order.join(", "));
        }
        println!();

        println!("Generated:");
        for path in &result.written {
            println!("  {}", path.display());
        }

        Ok(())
    }

    fn run_preview<G: LanguageCodegen>(generator: &G) -> Result<()> {
        let files = generator.preview();

        for file in &files {
            println!("── {} ──", file.path);
            println!("{}", file.content);
        }

        println!("── Summary ──");
        println!("{} files would be generated", files.len());

        Ok(())
    }
}
