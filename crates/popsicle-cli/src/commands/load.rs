//! The `popsicle load` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use popsicle_core::{discover_roster, Roster, RosterImport};

pub fn execute(roster: &mut Roster, csv_path: Option<PathBuf>, pattern: &str) -> Result<()> {
    if !roster.is_empty() {
        println!(
            "Roster already has {} students. Run `popsicle destroy` first to load from CSV.",
            roster.len()
        );
        return Ok(());
    }

    let path = match csv_path {
        Some(path) => path,
        None => match discover_roster(Path::new("."), pattern)? {
            Some(path) => path,
            None => {
                println!(
                    "No csv file presented. Please specify the csv file to load from, \
                     e.g. `popsicle load student_roster.csv`"
                );
                return Ok(());
            }
        },
    };

    let import = RosterImport::from_path(&path)?;
    let added = roster.import(import.display_names());
    println!("Loaded {added} students from {}", path.display());
    Ok(())
}
