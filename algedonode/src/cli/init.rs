//! `init` subcommand: write the default configuration.

use super::CliError;
use algedonode::HierarchyConfig;
use std::path::Path;

pub fn run(output: &Path) -> Result<(), CliError> {
    HierarchyConfig::default().save(output)?;
    eprintln!("Default configuration written to {}", output.display());
    Ok(())
}
