//! Command-line arguments and their mapping onto a [`StationConfig`].

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use fs_core::{RoutingPolicy, Scenario, StationConfig};

#[derive(Parser, Debug)]
#[command(name = "fuelsim")]
#[command(about = "Discrete-time fuel station queueing simulator", long_about = None)]
pub struct Cli {
    /// Number of independent runs
    #[arg(short, long, default_value_t = 100)]
    pub runs: usize,

    /// Named dispenser layout (see --list-scenarios)
    #[arg(short, long)]
    pub scenario: Option<String>,

    /// Base configuration as JSON; flags below override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Root RNG seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Last simulated tick
    #[arg(long)]
    pub duration: Option<u64>,

    /// Probability that a driver heads for a pump of the wrong fuel
    #[arg(long, conflicts_with = "strict")]
    pub mistake_chance: Option<f64>,

    /// Drivers never pick the wrong pump
    #[arg(long)]
    pub strict: bool,

    /// Write per-run statistics as CSV
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Write snapshots and statistics of every run as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Print the registered scenarios and exit
    #[arg(long)]
    pub list_scenarios: bool,

    /// Print the resolved configuration as JSON and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Resolve the configuration: JSON file (or defaults), then scenario,
    /// then individual overrides.  The result is validated.
    pub fn station_config(&self) -> Result<StationConfig> {
        let mut config = match &self.config {
            Some(path) => StationConfig::from_json_path(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => StationConfig::default(),
        };

        if let Some(name) = &self.scenario {
            config = config.with_scenario(Scenario::from_name(name)?);
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(duration) = self.duration {
            config.simulation_duration = duration;
        }
        if self.strict {
            config.routing = RoutingPolicy::Strict;
        } else if let Some(probability) = self.mistake_chance {
            config.routing = RoutingPolicy::MistakeAware { probability };
        }

        config.validate()?;
        Ok(config)
    }
}
