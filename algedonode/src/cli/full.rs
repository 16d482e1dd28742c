//! `full` subcommand: exhaustive simulation of all dial states.

use super::{load_hierarchy, CliError, HierarchyOptions};
use algedonode::SimulationReport;
use std::path::Path;

pub fn run(options: &HierarchyOptions, report_path: Option<&Path>, table: bool) -> Result<(), CliError> {
    let mut hierarchy = load_hierarchy(options)?;
    let records = hierarchy.full_simulate();
    let report = SimulationReport::from_records(&records);

    report.print_summary();
    if table {
        report.print_table();
    }

    if let Some(path) = report_path {
        report.save_json(path).map_err(|source| CliError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        eprintln!("Report written to {}", path.display());
    }
    Ok(())
}
