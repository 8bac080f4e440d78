//! CSV output backend.
//!
//! One row per run, columns as produced by
//! [`flatten_stats`][crate::flatten_stats].  Snapshot histories do not fit a
//! flat table and are not written.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use csv::Writer;

use fs_sim::RunStats;

use crate::flatten::{StatsTable, flatten_stats};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// Writes per-run statistics as CSV.
pub struct CsvWriter<W: Write = File> {
    inner:    Writer<W>,
    finished: bool,
}

impl CsvWriter<File> {
    /// Create (or truncate) the CSV file at `path`.
    pub fn new(path: &Path) -> OutputResult<Self> {
        Ok(Self::from_writer(File::create(path)?))
    }
}

impl<W: Write> CsvWriter<W> {
    /// Write CSV into any byte sink.
    pub fn from_writer(sink: W) -> Self {
        Self { inner: Writer::from_writer(sink), finished: false }
    }

    /// Write a pre-flattened table: header row, then one row per record.
    pub fn write_table(&mut self, table: &StatsTable) -> OutputResult<()> {
        self.inner.write_record(&table.header)?;
        for row in &table.rows {
            self.inner.write_record(row)?;
        }
        Ok(())
    }

    /// Flush and hand back the underlying sink.
    pub fn into_inner(mut self) -> OutputResult<W> {
        self.inner.flush()?;
        self.inner
            .into_inner()
            .map_err(|e| OutputError::Io(io::Error::other(e.to_string())))
    }
}

impl<W: Write> OutputWriter for CsvWriter<W> {
    fn write_stats(&mut self, stats: &[RunStats]) -> OutputResult<()> {
        let table = flatten_stats(stats)?;
        self.write_table(&table)?;
        tracing::debug!(rows = table.rows.len(), columns = table.header.len(), "stats written as CSV");
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.inner.flush()?;
        Ok(())
    }
}

/// Render per-run statistics as one CSV document.
pub fn stats_to_csv_string(stats: &[RunStats]) -> OutputResult<String> {
    let mut writer = CsvWriter::from_writer(Vec::new());
    writer.write_stats(stats)?;
    let bytes = writer.into_inner()?;
    String::from_utf8(bytes).map_err(|e| OutputError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}
