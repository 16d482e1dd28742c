//! Algedonode — a simulation of the algedonode hierarchy from Stafford
//! Beer's *Brain of the Firm*.
//!
//! Four dials, each set to a value from 1 to 10, drive a four-row network of
//! algedonodes. Row `r` has eight nodes with `2^r` contacts each; the live
//! contact of a node lands on one of two pads, and the pad selects which half
//! of the next row's partition becomes active. Dial values 9 and 10 are
//! escape lines that jump straight to the next partition, but only inside the
//! branch that is already active. Of the sixteen lights below the last row,
//! exactly one is lit for each of the 10,000 dial states.
//!
//! # Modules
//!
//! - [`state`] — dial states and results
//! - [`contacts`] — contact position layouts (default and seeded random)
//! - [`elements`] — contacts, pad-pairs, algedonodes, set-activators, lights, dials
//! - [`hierarchy`] — wiring, propagation and full-state simulation
//! - [`config`] — YAML configuration
//! - [`report`] — distribution summary of a full simulation
//!
//! ```rust
//! use algedonode::{AOrB, DialState, Hierarchy, LightResult};
//!
//! let mut hierarchy = Hierarchy::new();
//! let lit = hierarchy.simulate(DialState::new([1, 1, 1, 1]).unwrap());
//! assert_eq!(lit, Some(LightResult { column: 0, a_or_b: AOrB::B }));
//! ```

pub mod config;
pub mod contacts;
pub mod elements;
pub mod hierarchy;
pub mod report;
pub mod state;

pub use config::{ConfigError, HierarchyConfig};
pub use contacts::ContactLayout;
pub use elements::{Activatable, ActivationSource};
pub use hierarchy::Hierarchy;
pub use report::SimulationReport;
pub use state::{AOrB, DialState, LightResult, SimulationRecord, StateError};
