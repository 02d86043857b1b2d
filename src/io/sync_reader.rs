//! Synchronous JSON-lines reader with iterator interface
//!
//! Provides a streaming iterator over input events read from a file or from
//! standard input. Delegates record format concerns to the json_format module.
//!
//! # Iterator Interface
//!
//! SyncReader implements the Iterator trait, yielding
//! `Result<Event, AuthorizerError>` for each non-blank line:
//!
//! ```no_run
//! use authorizer::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::open(Path::new("operations.jsonl")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(event) => println!("Processing event: {:?}", event),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found) are returned from `open()`
//! - Individual record errors are yielded as Err variants carrying the line number
//! - Blank lines are skipped

use crate::io::json_format::{is_blank, parse_bytes};
use crate::types::{AuthorizerError, Event};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Synchronous line reader
///
/// Reads one line at a time, so memory usage does not depend on input size.
/// Lines are split on raw bytes; decoding happens per record.
pub struct SyncReader {
    lines: io::Split<Box<dyn BufRead>>,
    line_num: usize,
}

impl SyncReader {
    /// Create a new SyncReader over any buffered reader
    pub fn new(reader: Box<dyn BufRead>) -> Self {
        Self {
            lines: reader.split(b'\n'),
            line_num: 0,
        }
    }

    /// Open a file for reading
    ///
    /// # Returns
    ///
    /// * `Ok(SyncReader)` if file opened successfully
    /// * `Err(AuthorizerError)` if file could not be opened
    pub fn open(path: &Path) -> Result<Self, AuthorizerError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => AuthorizerError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => AuthorizerError::from(e),
        })?;

        Ok(Self::new(Box::new(BufReader::with_capacity(8 * 1024, file))))
    }

    /// Read from standard input
    pub fn stdin() -> Self {
        Self::new(Box::new(io::stdin().lock()))
    }
}

impl Iterator for SyncReader {
    type Item = Result<Event, AuthorizerError>;

    /// Get the next event
    ///
    /// # Returns
    ///
    /// * `Some(Ok(Event))` - Successfully parsed record
    /// * `Some(Err(AuthorizerError))` - Read or parse error
    /// * `None` - End of input reached
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_num += 1;

            if is_blank(&line) {
                continue;
            }

            return Some(parse_bytes(&line).map_err(|e| e.at_line(self.line_num)));
        }
    }
}
