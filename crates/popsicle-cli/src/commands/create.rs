//! The `popsicle create` command.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use popsicle_core::Roster;

use super::prompt_for_name;

pub fn execute(roster: &mut Roster) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(roster, &mut stdin.lock(), &mut stdout.lock())
}

/// Keep prompting for names until a blank line or EOF.
pub(crate) fn run<R: BufRead, W: Write>(
    roster: &mut Roster,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    while let Some(name) = prompt_for_name(roster, input, output)? {
        if !roster.add(&name) {
            tracing::warn!("'{name}' is already on the roster");
        }
    }
    writeln!(output)?;
    Ok(())
}
