use std::io;
use std::process::ExitCode;

use clap::Parser;

mod app;
mod cli;
mod config;
mod core;
mod models;
mod utils;

use crate::core::catalog::Catalog;
use crate::utils::{Error, MoviesResult};

fn main() -> ExitCode {
    let dotenv_error = app::common::load_dotenv();

    let args = cli::Args::parse();
    let config = match config::Config::init() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", Error::from(e));
            return ExitCode::FAILURE;
        }
    };
    let level = args.log_level.as_deref().unwrap_or(&config.logs.level);
    app::common::init_logging(level);
    if let Some(e) = dotenv_error {
        tracing::warn!("Failed to load .env: {e}");
    }

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            if matches!(e, Error::MissingInput) {
                eprintln!("Example usage: movies movies_sample_1.csv");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &cli::Args, config: &config::Config) -> MoviesResult<()> {
    let Some(path) = args.resolve_file(config) else {
        return Err(Error::MissingInput);
    };

    let (catalog, report) = Catalog::from_path(&path, config.catalog.has_header)?;
    println!(
        "Processed file {} and parsed data for {} movies",
        path.display(),
        catalog.len()
    );
    if report.skipped > 0 {
        println!("Skipped {} malformed lines", report.skipped);
    }
    if catalog.is_empty() {
        tracing::warn!("No movies loaded from '{}'", path.display());
    }

    let stdin = io::stdin();
    app::menu::run(&catalog, stdin.lock(), io::stdout().lock())?;
    Ok(())
}
