//! CSV Table Store Adapter
//!
//! Reads the input decision table from, and writes the ranked result table
//! to, comma-separated files with a header row.

use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::ports::{Table, TableError, TableReader, TableWriter};

/// Reads a table from a CSV file
#[derive(Debug, Clone)]
pub struct CsvTableReader {
    path: PathBuf,
}

impl CsvTableReader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl TableReader for CsvTableReader {
    fn read(&self) -> Result<Table, TableError> {
        if !self.path.exists() {
            return Err(TableError::NotFound(self.path.display().to_string()));
        }

        let mut reader = csv::Reader::from_path(&self.path)
            .map_err(|e| TableError::Malformed(format!("Failed to open CSV: {e}")))?;

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| TableError::Malformed(format!("Failed to read headers: {e}")))?
            .iter()
            .map(str::to_string)
            .collect();

        if headers.is_empty() {
            return Err(TableError::Malformed(
                "No columns to parse from file".to_string(),
            ));
        }

        let mut records = Vec::new();
        // Line 1 is the header.
        for (line, result) in (2..).zip(reader.records()) {
            let record = result
                .map_err(|e| TableError::Malformed(format!("Failed to read line {line}: {e}")))?;
            records.push(record.iter().map(str::to_string).collect());
        }

        Ok(Table { headers, records })
    }
}

/// Writes a table to a CSV file, replacing any existing file
///
/// Records are staged in a temporary file next to the target, which is only
/// moved into place once every record has been written.
#[derive(Debug, Clone)]
pub struct CsvTableWriter {
    path: PathBuf,
}

impl CsvTableWriter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn staging_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}

impl TableWriter for CsvTableWriter {
    fn write(&self, table: &Table) -> Result<(), TableError> {
        let staged = NamedTempFile::new_in(self.staging_dir())
            .map_err(|e| TableError::Io(format!("{}: {e}", self.path.display())))?;
        let mut writer = csv::Writer::from_writer(staged);

        writer
            .write_record(&table.headers)
            .map_err(|e| TableError::Io(e.to_string()))?;
        for record in &table.records {
            writer
                .write_record(record)
                .map_err(|e| TableError::Io(e.to_string()))?;
        }

        let staged = writer
            .into_inner()
            .map_err(|e| TableError::Io(e.to_string()))?;
        staged
            .persist(&self.path)
            .map_err(|e| TableError::Io(format!("{}: {}", self.path.display(), e.error)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn reads_headers_and_records() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "Model,Price,Storage").expect("write header");
        writeln!(file, "M1,250,16").expect("write row");
        writeln!(file, "M2,200,32").expect("write row");

        let table = CsvTableReader::new(file.path()).read().expect("read CSV");

        assert_eq!(table.headers, vec!["Model", "Price", "Storage"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.records[1], vec!["M2", "200", "32"]);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempdir().expect("temp dir");
        let result = CsvTableReader::new(dir.path().join("absent.csv")).read();
        assert!(matches!(result, Err(TableError::NotFound(_))));
    }

    #[test]
    fn ragged_rows_are_malformed() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "Model,Price,Storage").expect("write header");
        writeln!(file, "M1,250").expect("write row");

        let result = CsvTableReader::new(file.path()).read();
        assert!(matches!(result, Err(TableError::Malformed(_))));
    }

    #[test]
    fn empty_file_is_malformed() {
        let file = NamedTempFile::new().expect("temp file");
        let result = CsvTableReader::new(file.path()).read();
        assert!(matches!(result, Err(TableError::Malformed(_))));
    }

    #[test]
    fn writes_table_with_header() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("out.csv");
        let table = Table::new(
            vec!["Model", "Rank"],
            vec![vec!["M1".to_string(), "1".to_string()]],
        );

        CsvTableWriter::new(&path).write(&table).expect("write CSV");

        let written = fs::read_to_string(&path).expect("read back");
        assert_eq!(written, "Model,Rank\nM1,1\n");
    }

    #[test]
    fn failed_write_keeps_existing_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("out.csv");
        fs::write(&path, "previous\n").expect("seed output");
        let ragged = Table::new(
            vec!["Model", "Rank"],
            vec![
                vec!["M1".to_string(), "1".to_string()],
                vec!["M2".to_string()],
            ],
        );

        let result = CsvTableWriter::new(&path).write(&ragged);

        assert!(matches!(result, Err(TableError::Io(_))));
        assert_eq!(fs::read_to_string(&path).expect("read back"), "previous\n");
        assert_eq!(fs::read_dir(dir.path()).expect("list dir").count(), 1);
    }

    #[test]
    fn write_replaces_existing_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("out.csv");
        fs::write(&path, "stale,content,here\n").expect("seed output");
        let table = Table::new(vec!["Model"], vec![vec!["M1".to_string()]]);

        CsvTableWriter::new(&path).write(&table).expect("write CSV");

        assert_eq!(fs::read_to_string(&path).expect("read back"), "Model\nM1\n");
    }

    #[test]
    fn write_into_missing_directory_is_io_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("missing").join("out.csv");

        let result = CsvTableWriter::new(path).write(&Table::default());
        assert!(matches!(result, Err(TableError::Io(_))));
    }
}
