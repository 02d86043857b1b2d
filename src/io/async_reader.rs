//! Asynchronous JSON-lines reader with batch interface
//!
//! Reads input lines through tokio and hands them out in batches of parsed
//! events. Parsing is delegated to the json_format module.
//!
//! # Architecture
//!
//! ```text
//! AsyncRead → AsyncReader → Batches of Events
//!                  ↓
//!           json_format module
//!           (InputRecord, convert_record)
//! ```
//!
//! A batch ends early once the buffered input is used up, so a slow producer
//! such as an interactive stdin gets its outcomes without waiting for a full
//! batch.

use crate::io::json_format::{is_blank, parse_bytes};
use crate::types::{AuthorizerError, Event};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

/// Asynchronous line reader
///
/// Provides batch reading interface over input events.
pub struct AsyncReader<R: AsyncRead + Unpin> {
    reader: BufReader<R>,
    line: Vec<u8>,
    line_num: usize,
}

impl<R: AsyncRead + Unpin> AsyncReader<R> {
    /// Create a new AsyncReader from an async reader
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line: Vec::new(),
            line_num: 0,
        }
    }

    /// Read a batch of events
    ///
    /// Reads lines until `batch_size` events were parsed, the input ends, or
    /// the buffered input is drained with at least one event ready.
    /// Invalid records are logged and skipped. Blank lines are ignored.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Event>)` - The parsed events, empty at end of input
    /// * `Err(AuthorizerError)` - Reading the input failed
    pub async fn read_batch(&mut self, batch_size: usize) -> Result<Vec<Event>, AuthorizerError> {
        let mut batch = Vec::with_capacity(batch_size);

        while batch.len() < batch_size {
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line).await? == 0 {
                break;
            }
            self.line_num += 1;

            if !is_blank(&self.line) {
                match parse_bytes(&self.line) {
                    Ok(event) => batch.push(event),
                    Err(e) => tracing::warn!("Skipping record: {}", e.at_line(self.line_num)),
                }
            }

            if !batch.is_empty() && self.reader.buffer().is_empty() {
                break;
            }
        }

        Ok(batch)
    }
}
