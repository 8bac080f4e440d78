//! Station configuration.
//!
//! A [`StationConfig`] is an immutable value handed to the engine at run
//! start.  Nothing in the simulator reads process-wide state, so two runs
//! with equal configs (and equal seeds) are indistinguishable.
//!
//! Configs are usually built from [`StationConfig::default`] (the reference
//! four-dispenser station) and tweaked, or loaded from JSON:
//!
//! ```json
//! {
//!   "simulation_duration": 200,
//!   "fuel_types": ["A", "B"],
//!   "fuel_probabilities": [0.5, 0.5],
//!   "dispensers": [{ "id": 0, "fuels": ["A", "B"] }],
//!   "routing": { "kind": "strict" }
//! }
//! ```
//!
//! Missing fields take their default values; unknown fields are rejected.

use std::collections::HashSet;
use std::io::Read;
use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{DispenserId, FsError, FsResult, FuelType, Scenario, Tick};

/// Weights must sum to 1 within this tolerance.
const PROBABILITY_TOLERANCE: f64 = 1e-6;

// ── RoutingPolicy ─────────────────────────────────────────────────────────────

/// How the head-of-queue car picks a dispenser.
///
/// The routing behaviour itself lives in `fs-routing`; this enum is the
/// configuration value that selects it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoutingPolicy {
    /// Always route to a dispenser that serves the car's fuel.
    Strict,
    /// With `probability`, the driver heads for a dispenser serving some
    /// other fuel; otherwise routes strictly.
    MistakeAware { probability: f64 },
}

impl RoutingPolicy {
    /// Mistake probability of the reference station.
    pub const DEFAULT_MISTAKE_CHANCE: f64 = 0.1;

    /// Probability of a deliberate misroute (0 for [`RoutingPolicy::Strict`]).
    pub fn mistake_chance(&self) -> f64 {
        match *self {
            RoutingPolicy::Strict => 0.0,
            RoutingPolicy::MistakeAware { probability } => probability,
        }
    }
}

impl Default for RoutingPolicy {
    fn default() -> Self {
        RoutingPolicy::MistakeAware { probability: Self::DEFAULT_MISTAKE_CHANCE }
    }
}

// ── DispenserSpec ─────────────────────────────────────────────────────────────

/// One dispenser of the station layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DispenserSpec {
    pub id:    DispenserId,
    pub fuels: Vec<FuelType>,
}

impl DispenserSpec {
    pub fn new(id: u32, fuels: &[&str]) -> Self {
        Self {
            id:    DispenserId(id),
            fuels: fuels.iter().map(|&f| FuelType::new(f)).collect(),
        }
    }
}

// ── StationConfig ─────────────────────────────────────────────────────────────

/// Everything one run needs to know.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StationConfig {
    /// Last tick simulated.  A run processes `simulation_duration + 1` ticks.
    pub simulation_duration: u64,

    /// Inclusive bounds of the uniform service-time draw, in ticks.
    pub min_service_time: u64,
    pub max_service_time: u64,

    /// Fuel labels, in the order used for statistics columns.
    pub fuel_types: Vec<FuelType>,

    /// Categorical weights matching `fuel_types`; must sum to 1.
    pub fuel_probabilities: Vec<f64>,

    /// Normal distribution of the inter-arrival gap (before flooring and
    /// clamping to at least one tick).
    pub arrival_mean: f64,
    pub arrival_std:  f64,

    /// Main-queue length that counts as "full".  Cars are never turned away;
    /// reaching the cap only sets `time_when_queue_is_full`.
    pub main_queue_soft_cap: usize,

    /// Capacity of every dispenser's mini-queue.  Must be at least 1.
    pub dispenser_mini_queue_capacity: usize,

    /// Station layout, in snapshot order.
    pub dispensers: Vec<DispenserSpec>,

    /// Routing behaviour of drivers.
    pub routing: RoutingPolicy,

    /// Root RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Force the first arrival to this tick instead of drawing a gap from
    /// tick 0.  Later gaps are drawn as usual.
    pub initial_arrival_tick: Option<Tick>,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            simulation_duration:           100,
            min_service_time:              5,
            max_service_time:              15,
            fuel_types:                    vec![FuelType::new("A"), FuelType::new("B")],
            fuel_probabilities:            vec![0.7, 0.3],
            arrival_mean:                  2.0,
            arrival_std:                   0.5,
            main_queue_soft_cap:           12,
            dispenser_mini_queue_capacity: 3,
            dispensers:                    Scenario::Default.dispensers(),
            routing:                       RoutingPolicy::default(),
            seed:                          42,
            initial_arrival_tick:          None,
        }
    }
}

impl StationConfig {
    /// Parse a JSON config from any `Read` source.  Does not validate.
    pub fn from_json_reader<R: Read>(reader: R) -> FsResult<Self> {
        serde_json::from_reader(reader).map_err(|e| FsError::Parse(e.to_string()))
    }

    /// Parse and validate a JSON config file.
    pub fn from_json_path(path: &Path) -> FsResult<Self> {
        let file = std::fs::File::open(path)?;
        let config = Self::from_json_reader(file)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded station config");
        Ok(config)
    }

    /// Replace the dispenser layout with the one registered for `scenario`.
    pub fn with_scenario(mut self, scenario: Scenario) -> Self {
        self.dispensers = scenario.dispensers();
        self
    }

    /// The last tick of the run.
    #[inline]
    pub fn last_tick(&self) -> Tick {
        Tick(self.simulation_duration)
    }

    /// Inclusive service-time range.
    #[inline]
    pub fn service_range(&self) -> RangeInclusive<u64> {
        self.min_service_time..=self.max_service_time
    }

    /// Position of `fuel` in `fuel_types`.
    pub fn fuel_index(&self, fuel: &FuelType) -> Option<usize> {
        self.fuel_types.iter().position(|f| f == fuel)
    }

    /// Check every constraint the engine relies on.
    ///
    /// A fuel type that no dispenser serves is *not* an error: such cars
    /// simply never leave the main queue.
    pub fn validate(&self) -> FsResult<()> {
        // ── Fuels ─────────────────────────────────────────────────────────
        if self.fuel_types.is_empty() {
            return Err(FsError::NoFuelTypes);
        }
        let mut seen = HashSet::with_capacity(self.fuel_types.len());
        for fuel in &self.fuel_types {
            if !seen.insert(fuel) {
                return Err(FsError::DuplicateFuel(fuel.clone()));
            }
        }

        if self.fuel_probabilities.len() != self.fuel_types.len() {
            return Err(FsError::FuelProbabilities(format!(
                "{} weights for {} fuel types",
                self.fuel_probabilities.len(),
                self.fuel_types.len()
            )));
        }
        if let Some(w) = self
            .fuel_probabilities
            .iter()
            .find(|w| !w.is_finite() || **w < 0.0)
        {
            return Err(FsError::FuelProbabilities(format!("weight {w} is not a probability")));
        }
        let sum: f64 = self.fuel_probabilities.iter().sum();
        if (sum - 1.0).abs() > PROBABILITY_TOLERANCE {
            return Err(FsError::FuelProbabilities(format!("weights sum to {sum}, expected 1")));
        }

        // ── Durations ─────────────────────────────────────────────────────
        if self.min_service_time > self.max_service_time {
            return Err(FsError::ServiceRange {
                min: self.min_service_time,
                max: self.max_service_time,
            });
        }
        if !self.arrival_mean.is_finite() || !self.arrival_std.is_finite() || self.arrival_std < 0.0 {
            return Err(FsError::ArrivalDistribution {
                mean: self.arrival_mean,
                std:  self.arrival_std,
            });
        }

        // ── Dispensers ────────────────────────────────────────────────────
        if self.dispenser_mini_queue_capacity == 0 {
            return Err(FsError::ZeroQueueCapacity);
        }
        let mut ids = HashSet::with_capacity(self.dispensers.len());
        for spec in &self.dispensers {
            if !ids.insert(spec.id) {
                return Err(FsError::DuplicateDispenser(spec.id));
            }
            if let Some(fuel) = spec.fuels.iter().find(|f| self.fuel_index(f).is_none()) {
                return Err(FsError::UnknownFuel {
                    dispenser: spec.id,
                    fuel:      fuel.clone(),
                });
            }
        }

        // ── Routing ───────────────────────────────────────────────────────
        let p = self.routing.mistake_chance();
        if !(0.0..=1.0).contains(&p) {
            return Err(FsError::MistakeProbability(p));
        }

        Ok(())
    }
}
