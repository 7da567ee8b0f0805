use std::path::PathBuf;

use colored::Colorize;
use comfy_table::{Cell, CellAlignment, Table};
use tracing::info;

use crate::cli::summary::print_summary;
use crate::cli::GenerateArgs;
use crate::error::Result;
use crate::export::write_csv;
use crate::fmt::{count, money};
use crate::generator::Generator;
use crate::models::Transaction;
use crate::settings::Settings;
use crate::summary::Summary;

/// Layer command-line flags over the loaded settings.
pub fn apply_overrides(mut settings: Settings, args: &GenerateArgs) -> Settings {
    if let Some(output) = &args.output {
        settings.output = output.clone();
    }
    if let Some(seed) = args.seed {
        settings.seed = Some(seed);
    }
    if let Some(users) = args.users {
        settings.users = users;
    }
    if let Some(year) = args.year {
        settings.year = year;
    }
    if let Some(profile) = args.profile {
        settings.profile = profile;
    }
    if let Some(max_daily) = args.max_daily {
        settings.max_daily_transactions = max_daily;
    }
    if let Some(preview) = args.preview {
        settings.preview_rows = preview;
    }
    settings
}

pub fn run(settings: Settings, args: GenerateArgs) -> Result<()> {
    let settings = apply_overrides(settings, &args);
    let config = settings.generator_config();
    info!(
        users = config.users,
        year = config.year,
        profile = ?config.profile,
        seed = ?config.seed,
        "generating transactions"
    );

    let mut generator = Generator::new(config)?;
    let mut txns = generator.generate_year()?;
    if !args.no_shuffle {
        generator.shuffle(&mut txns);
    }

    let path = PathBuf::from(&settings.output);
    write_csv(&path, &txns)?;
    info!(rows = txns.len(), path = %path.display(), "wrote csv");

    if settings.preview_rows > 0 {
        println!("{}", preview_table(&txns[..settings.preview_rows.min(txns.len())]));
    }
    if args.summary {
        print_summary(&Summary::from_transactions(&txns));
    }
    println!("{} {} transactions to {}", "Wrote".green().bold(), count(txns.len()), path.display());
    Ok(())
}

fn preview_table(txns: &[Transaction]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["user_id", "date", "category", "vendor", "amount"]);
    for t in txns {
        table.add_row(vec![
            Cell::new(t.user_id),
            Cell::new(t.date.format("%Y-%m-%d")),
            Cell::new(t.category.label()),
            Cell::new(t.vendor),
            Cell::new(money(t.amount)).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}
