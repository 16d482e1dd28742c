//! `simulate` subcommand: evaluate one dial state.

use super::{load_hierarchy, CliError, HierarchyOptions};
use algedonode::contacts::ROWS;
use algedonode::{Activatable, DialState};
use colored::Colorize;

pub fn run(options: &HierarchyOptions, dials: &[u8]) -> Result<(), CliError> {
    let values: [u8; 4] = dials
        .try_into()
        .map_err(|_| algedonode::StateError::WrongLength(dials.len()))?;
    let state = DialState::new(values)?;

    let mut hierarchy = load_hierarchy(options)?;
    let result = hierarchy.simulate(state);

    println!("State: {}", state.to_string().bold());
    for row in 0..ROWS {
        let value = state.value(row);
        let fired = hierarchy.fired_nodes().find(|node| node.row() == row);
        match fired {
            Some(node) => println!(
                "  row {row}  dial {value:>2} → node {} pad {}",
                node.column(),
                node.pad().active_index().unwrap_or_default()
            ),
            None if value > 8 => {
                let escaped = hierarchy
                    .set_activators()
                    .iter()
                    .find(|a| a.row() == row + 1 && a.is_active())
                    .map(|a| format!("columns {}–{}", a.partition().0, a.partition().1));
                println!(
                    "  row {row}  dial {value:>2} → {} {}",
                    "escape".yellow(),
                    escaped.unwrap_or_else(|| "to lights".to_string())
                );
            }
            None => println!("  row {row}  dial {value:>2} → {}", "no live contact".red()),
        }
    }

    match result {
        Some(light) => println!("Light: {}", light.to_string().green().bold()),
        None => println!("Light: {}", "none".red().bold()),
    }
    Ok(())
}
