use std::path::Path;

use comfy_table::{Cell, CellAlignment, Table};

use crate::error::Result;
use crate::fmt::{count, money};
use crate::summary::{summarize_file, Summary};

pub fn run(file: &Path) -> Result<()> {
    let summary = summarize_file(file)?;
    println!("{}", file.display());
    print_summary(&summary);
    Ok(())
}

pub fn print_summary(summary: &Summary) {
    let mut table = Table::new();
    table.set_header(vec!["Category", "Rows", "Total"]);
    for (name, cat) in summary.categories() {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(count(cat.rows)).set_alignment(CellAlignment::Right),
            Cell::new(money(cat.total)).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("All"),
        Cell::new(count(summary.rows)).set_alignment(CellAlignment::Right),
        Cell::new(money(summary.total)).set_alignment(CellAlignment::Right),
    ]);
    println!("{table}");
    println!("Users: {}  Days: {}", count(summary.distinct_users()), count(summary.distinct_dates()));
}
