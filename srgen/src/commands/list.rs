use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use srgen_schema::RecordsToml;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ListCommand {
    /// Path to records.toml (defaults to ./records.toml)
    #[arg(short, long, default_value = "records.toml")]
    pub config: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let records = RecordsToml::open(&self.config).unwrap_or_exit();
        let schema = records.manifest();

        if schema.types.is_empty() {
            println!("No record types defined");
            return Ok(());
        }

        println!("Types:");
        for (name, def) in &schema.types {
            match def.single_base() {
                Some(base) => println!("  {}: {}", name, base),
                None => println!("  {}", name),
            }
            for field in &def.fields {
                println!("    {}: {}", field.name, field.ty);
            }
        }

        if !schema.record.enums.is_empty() {
            println!("\nEnumerations:");
            for name in &schema.record.enums {
                println!("  {}", name);
            }
        }

        Ok(())
    }
}
