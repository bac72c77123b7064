//! Subcommand implementations. Each takes the roster loaded by `main`.

pub mod add;
pub mod create;
pub mod destroy;
pub mod edit;
pub mod list;
pub mod load;
pub mod pull;
pub mod remove;
pub mod reset;

use std::io::{BufRead, Write};

use anyhow::Result;

use popsicle_core::Roster;

/// Show the current students and read one name from `input`.
///
/// Returns `None` on EOF or a blank line.
pub(crate) fn prompt_for_name<R: BufRead, W: Write>(
    roster: &Roster,
    input: &mut R,
    output: &mut W,
) -> Result<Option<String>> {
    writeln!(output, "Current Students")?;
    writeln!(output, "----------------")?;
    for name in roster.names() {
        writeln!(output, "{name}")?;
    }
    write!(output, "Student Name => ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let name = line.trim();
    if name.is_empty() {
        Ok(None)
    } else {
        Ok(Some(name.to_string()))
    }
}
