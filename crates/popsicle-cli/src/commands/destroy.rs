//! The `popsicle destroy` command.

use popsicle_core::Roster;

pub fn execute(roster: &mut Roster) {
    let removed = roster.len();
    roster.destroy();
    println!("Removed {removed} students.");
}
