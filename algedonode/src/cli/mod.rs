pub mod full;
pub mod init;
pub mod simulate;

use algedonode::{Hierarchy, HierarchyConfig};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Errors surfaced by the subcommands.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] algedonode::ConfigError),
    #[error(transparent)]
    State(#[from] algedonode::StateError),
    #[error("Invalid strip override '{0}' (expected COLUMN=OFFSET, column 0-7, offset -1..1)")]
    Strip(String),
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Hierarchy options shared by every subcommand.
pub struct HierarchyOptions {
    pub config: Option<PathBuf>,
    pub seed: Option<u64>,
    pub strips: Vec<String>,
}

/// Install the fmt subscriber. `RUST_LOG` wins over `-v`.
pub fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Build the hierarchy described by the options: config file (or defaults),
/// then seeded contacts, then strip overrides.
pub fn load_hierarchy(options: &HierarchyOptions) -> Result<Hierarchy, CliError> {
    let mut config = match &options.config {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration");
            HierarchyConfig::load(path)?
        }
        None => HierarchyConfig::default(),
    };

    if let Some(seed) = options.seed {
        config.contacts = algedonode::ContactLayout::randomized(seed);
    }
    for arg in &options.strips {
        let (column, offset) = parse_strip(arg)?;
        config.strip_offsets[column] = offset;
    }

    Ok(config.build()?)
}

fn parse_strip(arg: &str) -> Result<(usize, f64), CliError> {
    let invalid = || CliError::Strip(arg.to_string());
    let (column, offset) = arg.split_once('=').ok_or_else(invalid)?;
    let column: usize = column.trim().parse().map_err(|_| invalid())?;
    let offset: f64 = offset.trim().parse().map_err(|_| invalid())?;
    if column >= algedonode::contacts::COLUMNS || !(-1.0..=1.0).contains(&offset) {
        return Err(invalid());
    }
    Ok((column, offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_overrides() {
        assert_eq!(parse_strip("3=0.5").unwrap(), (3, 0.5));
        assert_eq!(parse_strip(" 7 = -1 ").unwrap(), (7, -1.0));
        assert!(parse_strip("8=0").is_err());
        assert!(parse_strip("2=1.5").is_err());
        assert!(parse_strip("2").is_err());
    }

    #[test]
    fn options_apply_in_order() {
        let options = HierarchyOptions {
            config: None,
            seed: Some(11),
            strips: vec!["1=0.25".into()],
        };
        let hierarchy = load_hierarchy(&options).unwrap();
        assert_eq!(hierarchy.strip_offset(1), 0.25);
        assert_eq!(
            hierarchy.contact_layout(),
            &algedonode::ContactLayout::randomized(11)
        );
    }
}
