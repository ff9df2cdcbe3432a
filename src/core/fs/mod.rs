use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, error};

use crate::utils::{Error, MoviesResult};

/// Lazily yields the data lines of a movie CSV, terminators removed.
///
/// Invalid UTF-8 is replaced rather than rejected. A read error ends the
/// sequence early and is logged.
pub struct MovieLines<R> {
    reader: R,
    buf: Vec<u8>,
    done: bool,
}

impl<R: BufRead> MovieLines<R> {
    pub fn new(reader: R, has_header: bool) -> Self {
        let mut lines = Self { reader, buf: Vec::new(), done: false };
        if has_header {
            if let Some(header) = lines.next() {
                debug!(header = %header, "Discarded header line");
            }
        }
        lines
    }
}

impl<R: BufRead> Iterator for MovieLines<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                let line = String::from_utf8_lossy(&self.buf);
                Some(line.trim_end_matches(['\r', '\n']).to_string())
            }
            Err(e) => {
                error!("Read failed, stopping early: {e}");
                self.done = true;
                None
            }
        }
    }
}

/// Open `path` for reading movie lines, discarding the header when `has_header`.
pub fn open_movie_lines(path: &Path, has_header: bool) -> MoviesResult<MovieLines<BufReader<File>>> {
    let file = File::open(path).map_err(|source| Error::FileUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(MovieLines::new(BufReader::new(file), has_header))
}
