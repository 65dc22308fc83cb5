//! Table store adapters (CSV files and in-memory).

mod csv_table_store;
mod in_memory_table_store;

pub use csv_table_store::{CsvTableReader, CsvTableWriter};
pub use in_memory_table_store::InMemoryTableStore;
