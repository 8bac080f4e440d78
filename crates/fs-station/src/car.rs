//! The `Car` entity.

use serde::Serialize;

use fs_core::{CarId, FuelType};

/// A car moving through the station.
///
/// Serialises as `{id, fuel_type, service_time}`.  The waiting time is kept
/// for statistics but is not part of the public snapshot view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Car {
    pub id:           CarId,
    pub fuel_type:    FuelType,
    /// Ticks of service this car needs, fixed at creation.
    pub service_time: u64,
    #[serde(skip)]
    waiting_time:     u64,
}

impl Car {
    pub fn new(id: CarId, fuel_type: FuelType, service_time: u64) -> Self {
        Self { id, fuel_type, service_time, waiting_time: 0 }
    }

    /// Charge one tick of waiting.  Called once per tick while queued.
    #[inline]
    pub fn wait(&mut self) {
        self.waiting_time += 1;
    }

    /// Ticks spent queued so far.
    #[inline]
    pub fn waiting_time(&self) -> u64 {
        self.waiting_time
    }
}
