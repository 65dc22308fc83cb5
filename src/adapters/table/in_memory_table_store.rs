//! In-Memory Table Store Adapter
//!
//! Holds an input table and captures written tables in memory.
//! Useful for testing and for embedding the ranker without files.

use std::sync::{Arc, Mutex};

use crate::ports::{Table, TableError, TableReader, TableWriter};

/// In-memory table source and sink
#[derive(Debug, Clone, Default)]
pub struct InMemoryTableStore {
    input: Option<Table>,
    written: Arc<Mutex<Vec<Table>>>,
    fail_writes: bool,
}

impl InMemoryTableStore {
    /// Create a store that serves `table` on read
    pub fn with_table(table: Table) -> Self {
        Self {
            input: Some(table),
            ..Self::default()
        }
    }

    /// Create a store whose writes always fail
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Tables written so far, oldest first
    pub fn written(&self) -> Vec<Table> {
        self.written
            .lock()
            .map(|tables| tables.clone())
            .unwrap_or_default()
    }

    /// Get the number of written tables
    pub fn write_count(&self) -> usize {
        self.written.lock().map(|tables| tables.len()).unwrap_or(0)
    }
}

impl TableReader for InMemoryTableStore {
    fn read(&self) -> Result<Table, TableError> {
        self.input
            .clone()
            .ok_or_else(|| TableError::NotFound("<memory>".to_string()))
    }
}

impl TableWriter for InMemoryTableStore {
    fn write(&self, table: &Table) -> Result<(), TableError> {
        if self.fail_writes {
            return Err(TableError::Io("Simulated write failure".to_string()));
        }
        self.written
            .lock()
            .map_err(|e| TableError::Io(e.to_string()))?
            .push(table.clone());
        Ok(())
    }
}
