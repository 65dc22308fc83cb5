//! Table Store Port - Interface for loading and saving tabular data.
//!
//! The ranking core never touches files directly. Input tables are read
//! through a `TableReader` and results are persisted through a `TableWriter`.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::TopsisError;

/// Errors that can occur during table storage operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("Table not found: {0}")]
    NotFound(String),

    #[error("Malformed table: {0}")]
    Malformed(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<TableError> for TopsisError {
    fn from(err: TableError) -> Self {
        match err {
            TableError::NotFound(path) => TopsisError::file_not_found(path),
            TableError::Malformed(msg) => TopsisError::file_read(msg),
            TableError::Io(msg) => TopsisError::file_write(msg),
        }
    }
}

/// A header row plus string records, exactly as stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub records: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<impl Into<String>>, records: Vec<Vec<String>>) -> Self {
        Self {
            headers: headers.into_iter().map(|h| h.into()).collect(),
            records,
        }
    }

    /// Returns the number of columns, including the label column.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Returns the number of data rows.
    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    /// Appends a column; `values` must hold one entry per record.
    pub fn push_column(&mut self, header: impl Into<String>, values: Vec<String>) {
        self.headers.push(header.into());
        for (record, value) in self.records.iter_mut().zip(values) {
            record.push(value);
        }
    }
}

/// Port for loading an input table
pub trait TableReader: Send + Sync {
    /// Read the whole table
    ///
    /// # Errors
    /// - `NotFound` if the source does not exist
    /// - `Malformed` if the source cannot be parsed as a table
    fn read(&self) -> Result<Table, TableError>;
}

/// Port for persisting a result table
pub trait TableWriter: Send + Sync {
    /// Write the whole table, replacing any previous content
    fn write(&self, table: &Table) -> Result<(), TableError>;
}
