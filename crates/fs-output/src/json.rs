//! JSON output backend.
//!
//! Produces a single document:
//!
//! ```json
//! { "all_simulation_states": [[<tick>, ...], ...], "all_stats": [<stats>, ...] }
//! ```
//!
//! Both parts are buffered and written on [`finish`][OutputWriter::finish].

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use fs_sim::RunStats;
use fs_station::TickSnapshot;

use crate::OutputResult;
use crate::writer::OutputWriter;

/// Borrowed view of a whole batch, in the document layout above.
#[derive(Debug, Serialize)]
pub struct BatchExport<'a> {
    pub all_simulation_states: &'a [Vec<TickSnapshot>],
    pub all_stats:             &'a [RunStats],
}

/// Writes a batch as one pretty-printed JSON document.
pub struct JsonWriter<W: Write = BufWriter<File>> {
    sink:   Option<W>,
    states: Value,
    stats:  Value,
}

impl JsonWriter<BufWriter<File>> {
    /// Create (or truncate) the JSON file at `path`.
    pub fn new(path: &Path) -> OutputResult<Self> {
        Ok(Self::from_writer(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> JsonWriter<W> {
    pub fn from_writer(sink: W) -> Self {
        Self { sink: Some(sink), states: Value::Array(Vec::new()), stats: Value::Array(Vec::new()) }
    }

    /// Write `export` straight through, bypassing the buffered parts.
    pub fn write_export(&mut self, export: &BatchExport<'_>) -> OutputResult<()> {
        self.states = serde_json::to_value(export.all_simulation_states)?;
        self.stats = serde_json::to_value(export.all_stats)?;
        self.finish()
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_states(&mut self, all_states: &[Vec<TickSnapshot>]) -> OutputResult<()> {
        self.states = serde_json::to_value(all_states)?;
        Ok(())
    }

    fn write_stats(&mut self, stats: &[RunStats]) -> OutputResult<()> {
        self.stats = serde_json::to_value(stats)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        let Some(mut sink) = self.sink.take() else {
            return Ok(());
        };
        let mut doc = serde_json::Map::new();
        doc.insert("all_simulation_states".to_owned(), std::mem::take(&mut self.states));
        doc.insert("all_stats".to_owned(), std::mem::take(&mut self.stats));
        serde_json::to_writer_pretty(&mut sink, &doc)?;
        sink.flush()?;
        tracing::debug!("batch written as JSON");
        Ok(())
    }
}
