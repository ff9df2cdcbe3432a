use std::str::FromStr;

use tracing::Level;

/// Load `.env` if present. A missing file is fine; anything else is returned.
pub fn load_dotenv() -> Option<dotenvy::Error> {
    dotenv_problem(dotenvy::dotenv().map(|_| ()))
}

fn dotenv_problem(result: Result<(), dotenvy::Error>) -> Option<dotenvy::Error> {
    match result {
        Ok(()) => None,
        Err(e) if e.not_found() => None,
        Err(e) => Some(e),
    }
}

/// Log to stderr so records never interleave with menu output on stdout.
pub fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_max_level(Level::from_str(level).unwrap_or(Level::WARN))
        .with_writer(std::io::stderr)
        .init();
}
