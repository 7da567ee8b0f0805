mod calendar;
mod catalog;
mod cli;
mod error;
mod export;
mod fmt;
mod generator;
mod models;
mod settings;
mod summary;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, GenerateArgs};

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("spendsim=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("spendsim=info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let settings_path = cli.config.unwrap_or_else(settings::settings_path);

    let result = match cli.command.unwrap_or_else(|| Commands::Generate(GenerateArgs::default())) {
        Commands::Generate(args) => cli::generate::run(settings::load_settings_from(&settings_path), args),
        Commands::Summary { file } => cli::summary::run(&file),
        Commands::Init { force } => cli::init::run(&settings_path, force),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
