//! popsicle CLI: pull student names at random while keeping call counts even.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};

use popsicle_core::{load_config_from, Roster};

mod commands;

#[derive(Parser)]
#[command(
    name = "popsicle",
    version,
    about = "Balanced random student picker for the classroom"
)]
struct Cli {
    /// Roster database file (overrides config and POPSICLE_DB)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enter student names one per line until a blank line
    Create,

    /// Add students to the roster
    Add {
        /// Student names (prompts for one when omitted)
        #[arg(value_name = "STUDENT")]
        names: Vec<String>,
    },

    /// Remove students from the roster
    Remove {
        /// Student names
        #[arg(value_name = "STUDENT")]
        names: Vec<String>,
    },

    /// Reset call counts for the given students, or everyone if none given
    Reset {
        /// Student names
        #[arg(value_name = "STUDENT")]
        names: Vec<String>,
    },

    /// Remove every student from the roster
    Destroy,

    /// Pull a student and print their name
    Pull,

    /// Load an empty roster from a CSV roster export
    Load {
        /// CSV file (searches the current directory when omitted)
        csv: Option<PathBuf>,
    },

    /// Rename a student, keeping their call count
    Edit {
        /// Current name
        old: String,
        /// New name
        new: String,
    },

    /// Show every student and their call count
    List,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("popsicle=info".parse().unwrap()),
        )
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            process::exit(code);
        }
    };

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config_from(cli.config.as_deref())?;
    let db_path = cli.db.unwrap_or_else(|| config.db_path.clone());

    let mut roster = Roster::load(&db_path)
        .with_context(|| format!("failed to open roster {}", db_path.display()))?;

    match cli.command {
        Commands::Create => commands::create::execute(&mut roster)?,
        Commands::Add { names } => commands::add::execute(&mut roster, names)?,
        Commands::Remove { names } => commands::remove::execute(&mut roster, names),
        Commands::Reset { names } => commands::reset::execute(&mut roster, names),
        Commands::Destroy => commands::destroy::execute(&mut roster),
        Commands::Pull => commands::pull::execute(&mut roster)?,
        Commands::Load { csv } => {
            commands::load::execute(&mut roster, csv, &config.roster_pattern)?
        }
        Commands::Edit { old, new } => commands::edit::execute(&mut roster, &old, &new)?,
        Commands::List => commands::list::execute(&roster),
    }

    roster
        .save(&db_path)
        .with_context(|| format!("failed to save roster {}", db_path.display()))
}
