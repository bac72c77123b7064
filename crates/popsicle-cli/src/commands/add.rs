//! The `popsicle add` command.

use std::io;

use anyhow::Result;

use popsicle_core::Roster;

use super::prompt_for_name;

pub fn execute(roster: &mut Roster, names: Vec<String>) -> Result<()> {
    if names.is_empty() {
        let stdin = io::stdin();
        let stdout = io::stdout();
        if let Some(name) = prompt_for_name(roster, &mut stdin.lock(), &mut stdout.lock())? {
            add_one(roster, &name);
        }
        println!();
        return Ok(());
    }

    for name in &names {
        add_one(roster, name);
    }
    Ok(())
}

fn add_one(roster: &mut Roster, name: &str) {
    if name.trim().is_empty() {
        tracing::warn!("ignoring blank student name");
    } else if !roster.add(name) {
        tracing::warn!("'{}' is already on the roster", name.trim());
    }
}
