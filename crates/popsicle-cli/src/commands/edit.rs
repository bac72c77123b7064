//! The `popsicle edit` command.

use anyhow::Result;

use popsicle_core::Roster;

pub fn execute(roster: &mut Roster, old: &str, new: &str) -> Result<()> {
    roster.edit(old, new)?;
    println!("Renamed {} to {}", old.trim(), new.trim());
    Ok(())
}
