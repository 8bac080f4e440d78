//! Single-run and batch drivers.
//!
//! Run `i` of a batch is seeded with [`run_seed`]`(config.seed, i)`, so run 0
//! of any batch reproduces [`run_simulation`] exactly and a batch is a pure
//! function of its configuration.  With the `parallel` feature the runs are
//! spread over Rayon's pool; results are still returned in run-index order.

use serde::Serialize;

use fs_core::{StationConfig, run_seed};
use fs_station::{Event, TickSnapshot};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{NoopObserver, RunStats, SimBuilder, SimResult};

/// Everything one run records.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunOutput {
    /// One snapshot per tick, `0..=simulation_duration`.
    pub states: Vec<TickSnapshot>,
    /// One entry per service start.
    pub events: Vec<Event>,
    pub stats:  RunStats,
}

/// Build and run one simulation with an explicit seed.
pub fn run_once(config: &StationConfig, seed: u64) -> SimResult<RunOutput> {
    let mut sim = SimBuilder::new(config.clone()).seed(seed).build()?;
    sim.run(&mut NoopObserver);
    Ok(sim.into_output())
}

/// Run one simulation seeded with `config.seed`.
pub fn run_simulation(config: &StationConfig) -> SimResult<(Vec<TickSnapshot>, RunStats)> {
    let output = run_once(config, run_seed(config.seed, 0))?;
    Ok((output.states, output.stats))
}

/// Run `n` independent simulations and keep their full output.
///
/// The configuration is validated once up front, so an invalid config fails
/// before any run starts.  `n == 0` yields an empty batch.
pub fn run_batch(n: usize, config: &StationConfig) -> SimResult<Vec<RunOutput>> {
    config.validate()?;
    tracing::info!(runs = n, seed = config.seed, "starting batch");

    #[cfg(feature = "parallel")]
    let outputs = (0..n)
        .into_par_iter()
        .map(|i| run_once(config, run_seed(config.seed, i)))
        .collect::<SimResult<Vec<_>>>()?;

    #[cfg(not(feature = "parallel"))]
    let outputs = (0..n)
        .map(|i| run_once(config, run_seed(config.seed, i)))
        .collect::<SimResult<Vec<_>>>()?;

    tracing::info!(runs = outputs.len(), "batch complete");
    Ok(outputs)
}

/// Run `n` simulations and split the result into per-run snapshot lists
/// and per-run statistics, both indexed by run.
pub fn run_multiple_simulations(
    n:      usize,
    config: &StationConfig,
) -> SimResult<(Vec<Vec<TickSnapshot>>, Vec<RunStats>)> {
    Ok(run_batch(n, config)?
        .into_iter()
        .map(|output| (output.states, output.stats))
        .unzip())
}
