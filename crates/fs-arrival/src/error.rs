use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArrivalError {
    #[error("fuel weights rejected: {0}")]
    FuelWeights(#[from] rand::distributions::WeightedError),

    #[error("inter-arrival distribution rejected: {0}")]
    Gap(#[from] rand_distr::NormalError),

    #[error("{weights} fuel weights for {fuels} fuel types")]
    FuelWeightCount { fuels: usize, weights: usize },

    #[error("service time range {min}..={max} is empty")]
    ServiceRange { min: u64, max: u64 },
}

pub type ArrivalResult<T> = Result<T, ArrivalError>;
