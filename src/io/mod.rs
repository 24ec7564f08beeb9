//! I/O module
//!
//! Handles scenario file parsing.
//!
//! # Components
//!
//! - `csv_format` - CSV record conversion into scenario steps
//! - `sync_reader` - Synchronous CSV reader with iterator interface
//! - `async_reader` - Asynchronous CSV reader with batch reading interface

pub mod async_reader;
pub mod csv_format;
pub mod sync_reader;

pub use async_reader::AsyncReader;
pub use csv_format::{convert_csv_record, CsvRecord};
pub use sync_reader::SyncReader;
