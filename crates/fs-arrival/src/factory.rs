//! `CarFactory`: mints the cars of one run.

use rand::distributions::{Distribution, Uniform, WeightedIndex};

use fs_core::{CarId, FuelType, SimRng, StationConfig};
use fs_station::Car;

use crate::{ArrivalError, ArrivalResult};

/// Produces cars with increasing ids (starting at 1), a fuel type drawn
/// from the configured categorical distribution and a uniform service time.
///
/// Create one per run; ids restart with every new factory.
pub struct CarFactory {
    fuels:     Vec<FuelType>,
    fuel_dist: WeightedIndex<f64>,
    service:   Uniform<u64>,
    generated: u64,
}

impl CarFactory {
    pub fn new(config: &StationConfig) -> ArrivalResult<Self> {
        if config.fuel_probabilities.len() != config.fuel_types.len() {
            return Err(ArrivalError::FuelWeightCount {
                fuels:   config.fuel_types.len(),
                weights: config.fuel_probabilities.len(),
            });
        }
        if config.min_service_time > config.max_service_time {
            return Err(ArrivalError::ServiceRange {
                min: config.min_service_time,
                max: config.max_service_time,
            });
        }
        Ok(Self {
            fuels:     config.fuel_types.clone(),
            fuel_dist: WeightedIndex::new(&config.fuel_probabilities)?,
            service:   Uniform::new_inclusive(config.min_service_time, config.max_service_time),
            generated: 0,
        })
    }

    /// Draw the next car: fuel first, then service time.
    pub fn next_car(&mut self, rng: &mut SimRng) -> Car {
        self.generated += 1;
        let fuel = self.fuels[self.fuel_dist.sample(rng.inner())].clone();
        let service_time = self.service.sample(rng.inner());
        Car::new(CarId(self.generated), fuel, service_time)
    }

    /// An endless stream of cars drawn from `rng`.
    pub fn cars<'a>(&'a mut self, rng: &'a mut SimRng) -> impl Iterator<Item = Car> + 'a {
        std::iter::from_fn(move || Some(self.next_car(rng)))
    }

    /// Number of cars minted so far.
    pub fn generated(&self) -> u64 {
        self.generated
    }
}
