//! The `popsicle reset` command.

use popsicle_core::Roster;

pub fn execute(roster: &mut Roster, names: Vec<String>) {
    if names.is_empty() {
        roster.reset_all();
        println!("Reset all {} students.", roster.len());
        return;
    }
    for name in &names {
        if !roster.reset(name) {
            tracing::warn!("'{name}' is not on the roster");
        }
    }
}
