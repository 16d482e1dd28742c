mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "algedonode", about = "Algedonode hierarchy simulator — four dials, sixteen lights")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Hierarchy configuration YAML (strip offsets, contacts, initial dials).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Replace the contact layout with a seeded random one.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Strip offset overrides (e.g. --strip 3=0.5), repeatable.
    #[arg(long = "strip", global = true)]
    strips: Vec<String>,

    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate one dial state and show the active path.
    Simulate {
        /// Dial values 1–10, dial 0 first.
        #[arg(num_args = 4, required = true)]
        dials: Vec<u8>,
    },
    /// Evaluate all 10,000 dial states and summarise the light distribution.
    Full {
        /// Write the report as JSON.
        #[arg(long)]
        report: Option<PathBuf>,
        /// Print the per-light table.
        #[arg(long)]
        table: bool,
    },
    /// Write the default configuration YAML.
    Init {
        #[arg(short, long, default_value = "algedonode.yaml")]
        output: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    cli::init_tracing(cli.verbose);

    let options = cli::HierarchyOptions {
        config: cli.config,
        seed: cli.seed,
        strips: cli.strips,
    };

    let result = match cli.command {
        Command::Simulate { dials } => cli::simulate::run(&options, &dials),
        Command::Full { report, table } => cli::full::run(&options, report.as_deref(), table),
        Command::Init { output } => cli::init::run(&output),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
