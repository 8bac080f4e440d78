//! `fs-output`: run result writers for the fuel_station simulator.
//!
//! | Backend | Type         | Content                                           |
//! |---------|--------------|---------------------------------------------------|
//! | CSV     | [`CsvWriter`]  | one row of flattened statistics per run         |
//! | JSON    | [`JsonWriter`] | `{all_simulation_states, all_stats}` document   |
//!
//! Both implement [`OutputWriter`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use fs_output::{CsvWriter, OutputWriter};
//!
//! let (all_states, all_stats) = fs_sim::run_multiple_simulations(100, &config)?;
//! let mut csv = CsvWriter::new(Path::new("stats.csv"))?;
//! csv.write_stats(&all_stats)?;
//! csv.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod flatten;
pub mod json;
pub mod writer;


pub use crate::csv::{CsvWriter, stats_to_csv_string};
pub use error::{OutputError, OutputResult};
pub use flatten::{StatsTable, flatten_records, flatten_stats};
pub use json::{BatchExport, JsonWriter};
pub use writer::OutputWriter;
