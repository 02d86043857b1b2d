//! I/O module
//!
//! Handles JSON-lines parsing and output.
//!
//! # Components
//!
//! - `json_format` - Record format handling (record conversion, output serialization)
//! - `sync_reader` - Synchronous line reader with iterator interface
//! - `async_reader` - Asynchronous line reader with batch reading interface

pub mod async_reader;
pub mod json_format;
pub mod sync_reader;

pub use async_reader::AsyncReader;
pub use json_format::{
    convert_record, parse_bytes, parse_line, render_outcome, write_outcome, InputRecord,
};
pub use sync_reader::SyncReader;
