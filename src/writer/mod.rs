//! Delimited-text output sink
//!
//! Serializes a [`Table`] as RFC 4180 CSV (header row of column names, one
//! line per table row, fields containing the delimiter, quotes, or newlines
//! quoted with doubled quotes) and persists it into a configured directory.

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use crate::config::Settings;
use crate::error::OutputError;
use crate::normalize::table::Table;

/// File name of the result written into the output directory
pub const RESULT_FILE_NAME: &str = "result.csv";

/// Writes tables as CSV files into a configured directory
///
/// The directory is supplied at construction time; the sink never consults
/// the environment itself.
pub struct CsvSink {
    output_dir: PathBuf,
}

impl CsvSink {
    /// Create a sink writing into the given directory
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Create a sink from resolved settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.output_dir.clone())
    }

    /// Full path of the result file this sink writes
    pub fn target_path(&self) -> PathBuf {
        self.output_dir.join(RESULT_FILE_NAME)
    }

    /// Serialize the table and persist it at the target path, overwriting
    /// any existing file.
    ///
    /// Rows go to a temporary file in the output directory first and are
    /// renamed over the destination only after a successful flush, so a
    /// failed run never leaves a readable partial file behind.
    pub fn write(&self, table: &Table) -> Result<PathBuf, OutputError> {
        let path = self.target_path();

        let mut tmp = NamedTempFile::new_in(&self.output_dir)
            .map_err(|e| OutputError::io(path.clone(), e))?;
        self.write_to(tmp.as_file_mut(), table)?;
        tmp.persist(&path)
            .map_err(|e| OutputError::io(path.clone(), e.error))?;

        Ok(path)
    }

    /// Serialize the table into an arbitrary writer.
    ///
    /// A table with zero columns has no representable header line and
    /// produces no output.
    pub fn write_to<W: Write>(&self, writer: W, table: &Table) -> Result<(), OutputError> {
        if table.column_count() == 0 {
            return Ok(());
        }

        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(table.columns())?;
        for row in table.rows() {
            csv_writer.write_record(row.iter().map(|cell| cell.render()))?;
        }
        csv_writer.flush().map_err(csv::Error::from)?;

        Ok(())
    }
}
