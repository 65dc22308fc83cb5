//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `table` - Table stores (CSV files, in-memory)

pub mod table;

pub use table::{CsvTableReader, CsvTableWriter, InMemoryTableStore};
