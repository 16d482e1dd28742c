//! Contact position layouts.
//!
//! Every algedonode carries `2^row` contacts, each a fixed tap on the node's
//! pad-pair at a position in `(-0.5, 0.5)`. A [`ContactLayout`] holds the
//! positions for all 32 nodes, indexed by row (equivalently contact count),
//! column and contact index.
//!
//! Two layouts are built in:
//! - [`ContactLayout::default_layout`], the reference arrangement whose
//!   simulation results are the golden baseline
//! - [`ContactLayout::randomized`], a seeded layout. The same seed always
//!   produces the same positions, so a randomized hierarchy can be
//!   reproduced exactly.
//!
//! Randomization uses a SplitMix64-derived hash of `(seed, contact)` rather
//! than a stateful generator, so each contact's position is independent of
//! the order positions are generated in.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Algedonode rows (one per dial).
pub const ROWS: usize = 4;
/// Columns (strips) per row.
pub const COLUMNS: usize = 8;
/// Largest magnitude a generated contact position takes.
pub const POSITION_LIMIT: f64 = 0.49;

const ALTERNATING: [f64; 2] = [-0.49, 0.49];
const TWO_CONTACTS: [f64; 2] = [-0.49, 0.49];
const FOUR_CONTACTS: [f64; 4] = [-0.49, -0.16, 0.16, 0.49];
const EIGHT_CONTACTS: [f64; 8] = [-0.49, -0.35, -0.21, -0.07, 0.07, 0.21, 0.35, 0.49];

/// Contacts per node in `row`.
pub const fn contact_count(row: usize) -> usize {
    1 << row
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Expected 4 rows of contacts, got {0}")]
    RowCount(usize),
    #[error("Row {row}: expected 8 columns, got {got}")]
    ColumnCount { row: usize, got: usize },
    #[error("Row {row} column {column}: expected {expected} contacts, got {got}")]
    ContactCount {
        row: usize,
        column: usize,
        expected: usize,
        got: usize,
    },
    #[error("Row {row} column {column} contact {index}: position {position} is outside (-0.5, 0.5)")]
    Position {
        row: usize,
        column: usize,
        index: usize,
        position: f64,
    },
}

/// Contact positions for every node, `rows[row][column][index]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLayout {
    rows: Vec<Vec<Vec<f64>>>,
}

impl Default for ContactLayout {
    fn default() -> Self {
        Self::default_layout()
    }
}

impl ContactLayout {
    /// The reference layout.
    ///
    /// - 1 contact: alternating `-0.49`, `0.49` across the columns
    /// - 2 contacts: `[-0.49, 0.49]`
    /// - 4 contacts: `[-0.49, -0.16, 0.16, 0.49]`
    /// - 8 contacts: evenly spaced from `-0.49` to `0.49` in steps of `0.14`
    pub fn default_layout() -> Self {
        let rows = (0..ROWS)
            .map(|row| {
                (0..COLUMNS)
                    .map(|column| match row {
                        0 => vec![ALTERNATING[column % 2]],
                        1 => TWO_CONTACTS.to_vec(),
                        2 => FOUR_CONTACTS.to_vec(),
                        _ => EIGHT_CONTACTS.to_vec(),
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Seeded layout with every position uniform in `[-0.49, 0.49]`.
    pub fn randomized(seed: u64) -> Self {
        let rows = (0..ROWS)
            .map(|row| {
                (0..COLUMNS)
                    .map(|column| {
                        (0..contact_count(row))
                            .map(|index| {
                                let key = (row * COLUMNS + column) * contact_count(ROWS - 1) + index;
                                POSITION_LIMIT * deterministic_random(seed, key)
                            })
                            .collect()
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Build a layout from raw positions, checking shape and range.
    pub fn from_rows(rows: Vec<Vec<Vec<f64>>>) -> Result<Self, LayoutError> {
        let layout = Self { rows };
        layout.validate()?;
        Ok(layout)
    }

    /// Positions of the contacts on node `(row, column)`.
    pub fn positions(&self, row: usize, column: usize) -> &[f64] {
        &self.rows[row][column]
    }

    /// Overwrite one contact position.
    pub fn set_position(&mut self, row: usize, column: usize, index: usize, position: f64) {
        self.rows[row][column][index] = position;
    }

    /// Check the layout matches the wiring: 4 rows, 8 columns, `2^row` contacts.
    pub fn check_shape(&self) -> Result<(), LayoutError> {
        if self.rows.len() != ROWS {
            return Err(LayoutError::RowCount(self.rows.len()));
        }
        for (row, columns) in self.rows.iter().enumerate() {
            if columns.len() != COLUMNS {
                return Err(LayoutError::ColumnCount {
                    row,
                    got: columns.len(),
                });
            }
            for (column, positions) in columns.iter().enumerate() {
                if positions.len() != contact_count(row) {
                    return Err(LayoutError::ContactCount {
                        row,
                        column,
                        expected: contact_count(row),
                        got: positions.len(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Shape check plus every position strictly inside `(-0.5, 0.5)`.
    pub fn validate(&self) -> Result<(), LayoutError> {
        self.check_shape()?;
        for (row, columns) in self.rows.iter().enumerate() {
            for (column, positions) in columns.iter().enumerate() {
                for (index, &position) in positions.iter().enumerate() {
                    if !(position > -0.5 && position < 0.5) {
                        return Err(LayoutError::Position {
                            row,
                            column,
                            index,
                            position,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

/// Deterministic pseudo-random number in [-1, 1] from seed + key.
fn deterministic_random(seed: u64, key: usize) -> f64 {
    let mut z = seed.wrapping_add(key as u64).wrapping_mul(0x9E3779B97F4A7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^= z >> 31;

    (z as f64 / u64::MAX as f64) * 2.0 - 1.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
