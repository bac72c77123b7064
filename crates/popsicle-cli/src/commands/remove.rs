//! The `popsicle remove` command.

use popsicle_core::Roster;

pub fn execute(roster: &mut Roster, names: Vec<String>) {
    if names.is_empty() {
        tracing::warn!("no students given, nothing removed");
        return;
    }
    for name in &names {
        if !roster.remove(name) {
            tracing::warn!("'{name}' is not on the roster");
        }
    }
}
