//! The `OutputWriter` trait implemented by all backend writers.

use fs_sim::RunStats;
use fs_station::TickSnapshot;

use crate::OutputResult;

/// Trait implemented by the CSV and JSON writers.
///
/// A batch is handed over in two parts; each writer keeps what its format can
/// hold.
pub trait OutputWriter {
    /// Per-run snapshot histories, indexed by run.
    ///
    /// The default implementation ignores them.
    fn write_states(&mut self, _all_states: &[Vec<TickSnapshot>]) -> OutputResult<()> {
        Ok(())
    }

    /// Per-run statistics, indexed by run.
    fn write_stats(&mut self, stats: &[RunStats]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
