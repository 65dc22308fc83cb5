//! Ports - Interfaces between the ranking core and the outside world.
//!
//! Adapters in `crate::adapters` implement these traits.

mod table_store;

pub use table_store::{Table, TableError, TableReader, TableWriter};
