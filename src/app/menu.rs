use std::io::{self, BufRead, Write};

use crate::core::catalog::{Catalog, Request, Response};

const MENU: &str = "\n1. Show movies released in the specified year\n\
2. Show highest rated movie for each year\n\
3. Show the title and year of release of all movies in a specific language\n\
4. Exit from the program\n\
\nEnter a choice from 1 to 4: ";

const INCORRECT_CHOICE: &str = "You entered an incorrect choice. Try again.";
const INVALID_YEAR: &str = "You entered an invalid year. Try again.";

enum Input {
    Request(Request),
    Rejected(&'static str),
    Closed,
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> io::Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;
    read_line(input)
}

fn read_request<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Input> {
    let Some(choice) = prompt(input, out, MENU)? else {
        return Ok(Input::Closed);
    };

    let request = match choice.parse::<u32>() {
        Ok(1) => {
            let Some(year) = prompt(input, out, "Enter the year for which you want to see movies: ")? else {
                return Ok(Input::Closed);
            };
            match year.parse::<i32>() {
                Ok(year) => Request::ByYear(year),
                Err(_) => return Ok(Input::Rejected(INVALID_YEAR)),
            }
        }
        Ok(2) => Request::HighestRatedPerYear,
        Ok(3) => {
            let mut answer = prompt(input, out, "Enter the language for which you want to see movies: ")?;
            // blank lines are skipped until a word arrives
            let language = loop {
                let Some(line) = answer else {
                    return Ok(Input::Closed);
                };
                if let Some(word) = line.split_whitespace().next() {
                    break word.to_string();
                }
                answer = read_line(input)?;
            };
            Request::ByLanguage(language)
        }
        Ok(4) => Request::Exit,
        _ => return Ok(Input::Rejected(INCORRECT_CHOICE)),
    };
    Ok(Input::Request(request))
}

/// Print a query result, or the "no data" line when it is empty.
pub fn render<W: Write>(request: &Request, response: &Response, out: &mut W) -> io::Result<()> {
    match (request, response) {
        (Request::ByYear(year), Response::Titles(titles)) if titles.is_empty() => {
            writeln!(out, "No data about movies released in the year {year}")
        }
        (_, Response::Titles(titles)) => titles.iter().try_for_each(|t| writeln!(out, "{t}")),
        (_, Response::YearBest(rows)) => rows
            .iter()
            .try_for_each(|r| writeln!(out, "{} {:.1} {}", r.year, r.rating, r.title)),
        (Request::ByLanguage(language), Response::YearTitles(rows)) if rows.is_empty() => {
            writeln!(out, "No data about movies released in {language}")
        }
        (_, Response::YearTitles(rows)) => rows
            .iter()
            .try_for_each(|r| writeln!(out, "{} {}", r.year, r.title)),
        (_, Response::Exit) => Ok(()),
    }
}

/// Run the interactive menu until the user exits or input ends.
pub fn run<R: BufRead, W: Write>(catalog: &Catalog, mut input: R, mut out: W) -> io::Result<()> {
    loop {
        let request = match read_request(&mut input, &mut out)? {
            Input::Request(request) => request,
            Input::Rejected(message) => {
                writeln!(out, "{message}")?;
                continue;
            }
            Input::Closed => {
                tracing::debug!("Input closed, leaving menu");
                break;
            }
        };

        let response = catalog.dispatch(&request);
        if response == Response::Exit {
            break;
        }
        render(&request, &response, &mut out)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn sample() -> Catalog {
        Catalog::load([
            "Inception,2010,[English;Japanese],8.8",
            "Amelie,2001,[French],8.3",
            "Interstellar,2010,[English],8.6",
        ])
        .0
    }

    fn session(input: &str) -> String {
        let mut out = Vec::new();
        run(&sample(), Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn exit_stops_immediately() {
        let out = session("4\n1\n2010\n");
        assert_eq!(out.matches("Enter a choice from 1 to 4").count(), 1);
        assert!(!out.contains("Inception"));
    }

    #[test]
    fn by_year_lists_titles() {
        let out = session("1\n2010\n4\n");
        assert!(out.contains("Inception\nInterstellar\n"));
    }

    #[test]
    fn by_year_without_matches() {
        let out = session("1\n1999\n4\n");
        assert!(out.contains("No data about movies released in the year 1999\n"));
    }

    #[test]
    fn highest_rated_formats_one_decimal() {
        let out = session("2\n4\n");
        assert!(out.contains("2010 8.8 Inception\n2001 8.3 Amelie\n"));
    }

    #[test]
    fn by_language_lists_year_and_title() {
        let out = session("3\nEnglish\n4\n");
        assert!(out.contains("2010 Inception\n2010 Interstellar\n"));

        let out = session("3\nfrench\n4\n");
        assert!(out.contains("No data about movies released in french\n"));
    }

    #[test]
    fn blank_language_lines_are_skipped() {
        let out = session("3\n\n   \nFrench\n4\n");
        assert!(out.contains("2001 Amelie\n"));
        assert!(!out.contains("No data about movies released in \n"));
        assert_eq!(out.matches("Enter a choice from 1 to 4").count(), 2);
    }

    #[test]
    fn blank_language_then_end_of_input() {
        let out = session("3\n\n");
        assert!(!out.contains("No data about movies"));
    }

    #[test]
    fn bad_choice_and_bad_year_reprompt() {
        let out = session("7\nabc\n1\nsoon\n4\n");
        assert_eq!(out.matches(INCORRECT_CHOICE).count(), 2);
        assert_eq!(out.matches(INVALID_YEAR).count(), 1);
        assert_eq!(out.matches("Enter a choice from 1 to 4").count(), 4);
    }

    #[test]
    fn end_of_input_leaves_cleanly() {
        let out = session("1\n");
        assert!(out.contains("Enter the year"));
        assert_eq!(session(""), MENU);
    }
}
