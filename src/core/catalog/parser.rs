use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::models::{Languages, Movie};
use crate::utils::{Error, MoviesResult};

const FIELD_COUNT: usize = 4;

// Longest ASCII numeric prefix, the way atoi/atof read a field
static INT_PREFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*[+-]?[0-9]+").unwrap());
static FLOAT_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?").unwrap()
});

fn lenient_int(field: &'static str, raw: &str) -> i32 {
    let parsed = INT_PREFIX_RE
        .find(raw)
        .and_then(|m| m.as_str().trim_start().parse::<i32>().ok());
    parsed.unwrap_or_else(|| {
        debug!(field, raw, "Not an integer, falling back to 0");
        0
    })
}

fn lenient_float(field: &'static str, raw: &str) -> f64 {
    let parsed = FLOAT_PREFIX_RE
        .find(raw)
        .and_then(|m| m.as_str().trim_start().parse::<f64>().ok());
    parsed.unwrap_or_else(|| {
        debug!(field, raw, "Not a number, falling back to 0.0");
        0.0
    })
}

/// `[English;French]` -> `English`, `French`. Missing brackets are tolerated.
fn parse_languages(field: &str, title: &str) -> Languages {
    let inner = field.strip_prefix('[').unwrap_or(field);
    let inner = inner.split_once(']').map_or(inner, |(list, _)| list);

    let (languages, truncated) =
        Languages::truncating(inner.split(';').filter(|t| !t.is_empty()));
    if truncated {
        debug!(title, kept = languages.len(), "Language list truncated");
    }
    languages
}

/// Parse one `title,year,[lang1;lang2],rating` line into a [`Movie`].
///
/// Only a structurally incomplete line (fewer than four fields, or an empty
/// title) is an error. A whitespace-only title is kept as is. Numeric fields that do not parse become zero.
pub fn parse_record(line: &str) -> MoviesResult<Movie> {
    let line = line.trim_end_matches(['\r', '\n']);
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < FIELD_COUNT {
        return Err(Error::malformed(format!(
            "expected {FIELD_COUNT} comma-separated fields, found {}",
            fields.len()
        )));
    }
    if fields.len() > FIELD_COUNT {
        debug!(extra = fields.len() - FIELD_COUNT, "Ignoring fields past the rating");
    }

    let title = fields[0];
    if title.is_empty() {
        return Err(Error::malformed("empty title"));
    }

    Ok(Movie {
        title: title.to_string(),
        year: lenient_int("year", fields[1]),
        languages: parse_languages(fields[2], title),
        rating: lenient_float("rating", fields[3]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_line() {
        let movie = parse_record("Avatar,2009,[English;Spanish],7.8").unwrap();
        assert_eq!(movie.title, "Avatar");
        assert_eq!(movie.year, 2009);
        assert_eq!(&*movie.languages, ["English", "Spanish"]);
        assert_eq!(movie.rating, 7.8);
    }

    #[test]
    fn strips_crlf_terminator() {
        let movie = parse_record("The Matrix,1999,[English],8.7\r\n").unwrap();
        assert_eq!(movie.rating, 8.7);
    }

    #[test]
    fn title_is_verbatim() {
        let movie = parse_record("  Spaced  Out ,2001,[English],5.0").unwrap();
        assert_eq!(movie.title, "  Spaced  Out ");
    }

    #[test]
    fn three_fields_is_malformed() {
        let err = parse_record("Avatar,2009,[English]").unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { .. }));
    }

    #[test]
    fn blank_line_and_empty_title_are_malformed() {
        assert!(matches!(parse_record(""), Err(Error::MalformedRecord { .. })));
        assert!(matches!(
            parse_record(",2009,[English],7.8"),
            Err(Error::MalformedRecord { .. })
        ));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let movie = parse_record("Avatar,2009,[English],7.8,unused").unwrap();
        assert_eq!(movie.rating, 7.8);
    }

    #[test]
    fn bad_numbers_fall_back_to_zero() {
        let movie = parse_record("Unknown,soon,[English],n/a").unwrap();
        assert_eq!(movie.year, 0);
        assert_eq!(movie.rating, 0.0);
    }

    #[test]
    fn numeric_prefix_is_kept() {
        let movie = parse_record("Odd,2009abc, [English] ,7.5/10").unwrap();
        assert_eq!(movie.year, 2009);
        assert_eq!(movie.rating, 7.5);
        assert_eq!(lenient_int("year", " -12"), -12);
        assert_eq!(lenient_float("rating", ".5"), 0.5);
        assert_eq!(lenient_float("rating", "1e1"), 10.0);
    }

    #[test]
    fn numeric_prefix_stops_at_non_ascii_digit() {
        let movie = parse_record("Odd,2010\u{0663},[English],8.8\u{0663}").unwrap();
        assert_eq!(movie.year, 2010);
        assert_eq!(movie.rating, 8.8);

        let movie = parse_record("Arabic,\u{0662}\u{0660}\u{0661}\u{0660},[Arabic],\u{0667}").unwrap();
        assert_eq!(movie.year, 0);
        assert_eq!(movie.rating, 0.0);
    }

    #[test]
    fn whitespace_title_is_kept() {
        let movie = parse_record("   ,2009,[English],7.8").unwrap();
        assert_eq!(movie.title, "   ");
        assert_eq!(movie.year, 2009);
    }

    #[test]
    fn out_of_range_year_falls_back_to_zero() {
        assert_eq!(lenient_int("year", "99999999999"), 0);
    }

    #[test]
    fn languages_are_truncated_to_five() {
        let movie =
            parse_record("Babel,2006,[Arabic;English;Japanese;Spanish;Berber;Russian],7.5").unwrap();
        assert_eq!(
            &*movie.languages,
            ["Arabic", "English", "Japanese", "Spanish", "Berber"]
        );
    }

    #[test]
    fn empty_language_tokens_are_skipped() {
        let movie = parse_record("Silent,1927,[],8.0").unwrap();
        assert!(movie.languages.is_empty());

        let movie = parse_record("Gaps,2000,[;English;;French;],6.0").unwrap();
        assert_eq!(&*movie.languages, ["English", "French"]);
    }

    #[test]
    fn languages_without_brackets() {
        let movie = parse_record("Plain,2000,English;French,6.0").unwrap();
        assert_eq!(&*movie.languages, ["English", "French"]);
    }
}
