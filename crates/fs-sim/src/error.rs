use fs_arrival::ArrivalError;
use fs_core::FsError;
use thiserror::Error;

/// Errors raised while preparing a run.  Once built, a run cannot fail.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid station configuration: {0}")]
    Config(#[from] FsError),

    #[error("arrival process: {0}")]
    Arrival(#[from] ArrivalError),
}

pub type SimResult<T> = Result<T, SimError>;
