//! Summary of a full-state simulation.
//!
//! [`SimulationReport`] tallies how many of the 10,000 dial states end on
//! each light. It can be printed to the terminal or saved as JSON.
//!
//! ```rust
//! use algedonode::{Hierarchy, SimulationReport};
//!
//! let mut hierarchy = Hierarchy::new();
//! let report = SimulationReport::from_records(&hierarchy.full_simulate());
//! assert_eq!(report.total_states, 10_000);
//! assert_eq!(report.unlit_states, 0);
//! ```

use crate::contacts::COLUMNS;
use crate::state::{AOrB, SimulationRecord};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Distribution of states over the sixteen lights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub total_states: usize,
    /// States that lit nothing.
    pub unlit_states: usize,
    /// One entry per light, column 0 first, B before A.
    pub lights: Vec<LightTally>,
}

/// States ending on one light.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightTally {
    pub column: usize,
    pub a_or_b: AOrB,
    pub count: usize,
    /// `count / total_states`.
    pub share: f64,
}

impl SimulationReport {
    pub fn from_records(records: &[SimulationRecord]) -> Self {
        let mut counts = [0usize; 2 * COLUMNS];
        let mut unlit = 0;
        for record in records {
            match record.result {
                Some(light) => counts[light_slot(light.column, light.a_or_b)] += 1,
                None => unlit += 1,
            }
        }

        let total = records.len();
        let lights = (0..COLUMNS)
            .flat_map(|column| [AOrB::B, AOrB::A].map(|a_or_b| (column, a_or_b)))
            .map(|(column, a_or_b)| {
                let count = counts[light_slot(column, a_or_b)];
                LightTally {
                    column,
                    a_or_b,
                    count,
                    share: if total > 0 {
                        count as f64 / total as f64
                    } else {
                        0.0
                    },
                }
            })
            .collect();

        Self {
            total_states: total,
            unlit_states: unlit,
            lights,
        }
    }

    /// Tally for one light.
    pub fn tally(&self, column: usize, a_or_b: AOrB) -> &LightTally {
        &self.lights[light_slot(column, a_or_b)]
    }

    /// Whether every state lit a light and all lights were hit equally often.
    pub fn is_uniform(&self) -> bool {
        self.unlit_states == 0
            && self
                .lights
                .windows(2)
                .all(|pair| pair[0].count == pair[1].count)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Save report to JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), std::io::Error> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = self
            .to_json()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, json)
    }

    /// Print human-readable summary to terminal.
    pub fn print_summary(&self) {
        use colored::Colorize;

        println!("\n{}", "═".repeat(60).bold());
        println!("{}", " ALGEDONODE FULL SIMULATION ".bold().on_blue());
        println!("{}", "═".repeat(60).bold());
        println!("States:     {}", self.total_states);

        let unlit = if self.unlit_states == 0 {
            "0".green()
        } else {
            self.unlit_states.to_string().red().bold()
        };
        println!("Unlit:      {unlit}");
        println!();

        let max = self.lights.iter().map(|l| l.count).max().unwrap_or(0).max(1);
        for tally in &self.lights {
            let width = tally.count * 40 / max;
            println!(
                "  {}{} {:>5} {:>6.2}% {}",
                tally.a_or_b,
                tally.column,
                tally.count,
                tally.share * 100.0,
                "█".repeat(width).cyan()
            );
        }

        println!("{}", "─".repeat(60));
        let verdict = if self.is_uniform() {
            "UNIFORM".green().bold()
        } else {
            "NON-UNIFORM".yellow().bold()
        };
        println!("Distribution: {verdict}");
        println!("{}\n", "═".repeat(60).bold());
    }

    /// Print the per-light tallies as a table.
    pub fn print_table(&self) {
        use tabled::{Table, Tabled};

        #[derive(Tabled)]
        struct LightRow {
            light: String,
            column: usize,
            #[tabled(rename = "A/B")]
            a_or_b: String,
            states: usize,
            #[tabled(rename = "Share (%)")]
            share: String,
        }

        let rows: Vec<LightRow> = self
            .lights
            .iter()
            .map(|t| LightRow {
                light: format!("{}{}", t.a_or_b, t.column),
                column: t.column,
                a_or_b: t.a_or_b.to_string(),
                states: t.count,
                share: format!("{:.2}", t.share * 100.0),
            })
            .collect();

        println!("\nLight Distribution:\n{}", Table::new(rows));
    }
}

fn light_slot(column: usize, a_or_b: AOrB) -> usize {
    2 * column
        + match a_or_b {
            AOrB::B => 0,
            AOrB::A => 1,
        }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{DialState, LightResult};

    fn record(ordinal: usize, result: Option<(usize, AOrB)>) -> SimulationRecord {
        SimulationRecord {
            state: DialState::from_ordinal(ordinal).unwrap(),
            result: result.map(|(column, a_or_b)| LightResult { column, a_or_b }),
        }
    }

    #[test]
    fn tallies_and_shares() {
        let records = vec![
            record(0, Some((0, AOrB::B))),
            record(1, Some((0, AOrB::B))),
            record(2, Some((5, AOrB::A))),
            record(3, None),
        ];
        let report = SimulationReport::from_records(&records);
        assert_eq!(report.total_states, 4);
        assert_eq!(report.unlit_states, 1);
        assert_eq!(report.lights.len(), 16);
        assert_eq!(report.tally(0, AOrB::B).count, 2);
        assert!((report.tally(0, AOrB::B).share - 0.5).abs() < 1e-12);
        assert_eq!(report.tally(5, AOrB::A).count, 1);
        assert_eq!(report.tally(5, AOrB::B).count, 0);
        assert!(!report.is_uniform());
    }

    #[test]
    fn empty_report() {
        let report = SimulationReport::from_records(&[]);
        assert_eq!(report.total_states, 0);
        assert!(report.lights.iter().all(|t| t.share == 0.0));
    }

    #[test]
    fn save_json_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports/full.json");
        let report = SimulationReport::from_records(&[record(0, Some((3, AOrB::A)))]);
        report.save_json(&path).unwrap();

        let loaded: SimulationReport =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded, report);
    }
}
