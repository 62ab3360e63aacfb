//! Table ingestion for the productivity metrics engine.
//!
//! The core is a pure library; this crate is the file boundary in front of
//! it. It loads delimited files into string-celled [`kaizen_model::RawTable`]s
//! and nothing more - validation and numeric coercion happen in the
//! normalizer, and in-memory callers can build raw tables directly without
//! going through a file at all.

mod error;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::read_raw_table;
