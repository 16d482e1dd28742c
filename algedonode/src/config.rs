//! YAML hierarchy configuration.
//!
//! Everything a hierarchy needs beyond its fixed wiring: strip offsets,
//! contact positions and the dial values to start from. Configuration can be
//! loaded from YAML or built programmatically.
//!
//! ```yaml
//! strip_offsets: [0.0, 0.0, 0.25, 0.0, 0.0, 0.0, -0.5, 0.0]
//! initial_dials: [1, 1, 1, 1]
//! # contacts:       optional, defaults to the reference layout
//! #   rows:         rows[row][column][index], 2^row positions per column
//! ```
//!
//! ```rust
//! use algedonode::config::HierarchyConfig;
//!
//! let mut config = HierarchyConfig::default();
//! config.strip_offsets[2] = 0.25;
//! let hierarchy = config.build().unwrap();
//! assert_eq!(hierarchy.strip_offset(2), 0.25);
//! ```

use crate::contacts::{ContactLayout, LayoutError, COLUMNS};
use crate::hierarchy::Hierarchy;
use crate::state::{DialState, StateError, DIAL_COUNT, MIN_DIAL_VALUE};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Strip {column} offset {offset} is outside [-1, 1]")]
    StripOffset { column: usize, offset: f64 },
    #[error("Invalid contact layout: {0}")]
    Contacts(#[from] LayoutError),
    #[error("Invalid initial dials: {0}")]
    Dials(#[from] StateError),
}

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyConfig {
    #[serde(default)]
    pub strip_offsets: [f64; COLUMNS],
    #[serde(default = "default_initial_dials")]
    pub initial_dials: [u8; DIAL_COUNT],
    #[serde(default)]
    pub contacts: ContactLayout,
}

fn default_initial_dials() -> [u8; DIAL_COUNT] {
    [MIN_DIAL_VALUE; DIAL_COUNT]
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            strip_offsets: [0.0; COLUMNS],
            initial_dials: default_initial_dials(),
            contacts: ContactLayout::default_layout(),
        }
    }
}

impl HierarchyConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, self.to_yaml()?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (column, &offset) in self.strip_offsets.iter().enumerate() {
            if !(-1.0..=1.0).contains(&offset) {
                return Err(ConfigError::StripOffset { column, offset });
            }
        }
        self.contacts.validate()?;
        DialState::new(self.initial_dials)?;
        Ok(())
    }

    /// Construct a hierarchy, apply the configuration and run one cycle so
    /// the initial dials already show their light.
    pub fn build(&self) -> Result<Hierarchy, ConfigError> {
        self.validate()?;
        let mut hierarchy = Hierarchy::with_contacts(self.contacts.clone());
        for (column, &offset) in self.strip_offsets.iter().enumerate() {
            hierarchy.move_strip(column, offset);
        }
        hierarchy.simulate(DialState::new(self.initial_dials)?);
        Ok(hierarchy)
    }
}
