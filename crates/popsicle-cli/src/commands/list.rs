//! The `popsicle list` command.

use comfy_table::{Cell, Table};

use popsicle_core::Roster;

pub fn execute(roster: &Roster) {
    if roster.is_empty() {
        println!("No students yet. Run `popsicle add <name>` or `popsicle load <csv>`.");
        return;
    }
    println!("{}", render(roster));
}

fn render(roster: &Roster) -> Table {
    let last = roster.last_selected();

    let mut table = Table::new();
    table.set_header(vec!["Student", "Calls", ""]);
    for record in roster.records() {
        let marker = if last == Some(record.name.as_str()) {
            "last"
        } else {
            ""
        };
        table.add_row(vec![
            Cell::new(&record.name),
            Cell::new(record.calls),
            Cell::new(marker),
        ]);
    }
    table
}
