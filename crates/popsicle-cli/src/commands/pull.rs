//! The `popsicle pull` command.

use anyhow::Result;

use popsicle_core::Roster;

pub fn execute(roster: &mut Roster) -> Result<()> {
    let name = roster.pull()?;
    println!("{name}");
    Ok(())
}
