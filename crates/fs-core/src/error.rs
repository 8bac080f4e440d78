//! Framework error type.
//!
//! Every variant except `Io` and `Parse` describes an invalid configuration.
//! These are raised by [`StationConfig::validate`][crate::StationConfig::validate]
//! before any run starts; a run itself never fails.

use thiserror::Error;

use crate::{DispenserId, FuelType};

/// The top-level error type for `fs-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("unknown scenario {0:?}")]
    UnknownScenario(String),

    #[error("no fuel types configured")]
    NoFuelTypes,

    #[error("fuel type {0} listed more than once")]
    DuplicateFuel(FuelType),

    #[error("dispenser {dispenser} serves unknown fuel {fuel}")]
    UnknownFuel {
        dispenser: DispenserId,
        fuel:      FuelType,
    },

    #[error("invalid fuel probabilities: {0}")]
    FuelProbabilities(String),

    #[error("service time range {min}..={max} is empty")]
    ServiceRange { min: u64, max: u64 },

    #[error("invalid arrival distribution: mean {mean}, std {std}")]
    ArrivalDistribution { mean: f64, std: f64 },

    #[error("dispenser mini-queue capacity must be at least 1")]
    ZeroQueueCapacity,

    #[error("dispenser {0} configured more than once")]
    DuplicateDispenser(DispenserId),

    #[error("mistake probability {0} is outside [0, 1]")]
    MistakeProbability(f64),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `fs-*` crates.
pub type FsResult<T> = Result<T, FsError>;
