pub mod parser;
pub mod query;
pub mod types;

pub use parser::*;
pub use types::*;

use std::path::Path;

use tracing::{debug, info, warn};

use crate::models::Movie;
use crate::utils::MoviesResult;

/// Movies in the order they were loaded. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    /// Parse every line and keep the ones that parse, in arrival order.
    /// Malformed lines are logged and counted, never fatal.
    pub fn load<I, S>(lines: I) -> (Self, LoadReport)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut movies = Vec::new();
        let mut report = LoadReport::default();

        for (idx, line) in lines.into_iter().enumerate() {
            match parse_record(line.as_ref()) {
                Ok(movie) => movies.push(movie),
                Err(e) => {
                    warn!(line = idx + 1, "Skipping record: {e}");
                    report.skipped += 1;
                }
            }
        }
        report.loaded = movies.len();

        (Self { movies }, report)
    }

    /// Read a movie CSV from disk and load it.
    pub fn from_path(path: &Path, has_header: bool) -> MoviesResult<(Self, LoadReport)> {
        let lines = crate::core::fs::open_movie_lines(path, has_header)?;
        let (catalog, report) = Self::load(lines);
        info!(
            path = %path.display(),
            loaded = report.loaded,
            skipped = report.skipped,
            "Loaded catalog"
        );
        Ok((catalog, report))
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn dispatch(&self, request: &Request) -> Response {
        debug!(?request, "Dispatching request");
        match request {
            Request::ByYear(year) => Response::Titles(self.find_by_year(*year)),
            Request::HighestRatedPerYear => Response::YearBest(self.highest_rated_per_year()),
            Request::ByLanguage(language) => Response::YearTitles(self.find_by_language(language)),
            Request::Exit => Response::Exit,
        }
    }
}
