//! `ArrivalProcess`: the arrival clock of one run.

use rand_distr::{Distribution, Normal};

use fs_core::{SimRng, StationConfig, Tick};
use fs_station::Car;

use crate::{ArrivalResult, CarFactory};

/// Decides on which ticks a car arrives and draws it from a [`CarFactory`].
///
/// Gaps are at least one tick, so at most one car arrives per tick and the
/// process always moves forward.
pub struct ArrivalProcess {
    factory:      CarFactory,
    gap:          Normal<f64>,
    next_arrival: Tick,
}

impl ArrivalProcess {
    /// Build the process and schedule the first arrival.
    ///
    /// The first arrival is `config.initial_arrival_tick` when set; otherwise
    /// one gap after tick 0 (so nobody arrives at tick 0 by default).
    pub fn new(config: &StationConfig, rng: &mut SimRng) -> ArrivalResult<Self> {
        let factory = CarFactory::new(config)?;
        let gap = Normal::new(config.arrival_mean, config.arrival_std)?;
        let mut process = Self { factory, gap, next_arrival: Tick::ZERO };
        process.next_arrival = match config.initial_arrival_tick {
            Some(tick) => tick,
            None => Tick::ZERO + process.draw_gap(rng),
        };
        Ok(process)
    }

    /// Tick of the next scheduled arrival.
    #[inline]
    pub fn next_arrival(&self) -> Tick {
        self.next_arrival
    }

    /// Cars generated so far in this run.
    pub fn generated(&self) -> u64 {
        self.factory.generated()
    }

    /// Return the arriving car if `now` has reached the scheduled arrival,
    /// and schedule the next one.
    pub fn poll(&mut self, now: Tick, rng: &mut SimRng) -> Option<Car> {
        if now < self.next_arrival {
            return None;
        }
        let car = self.factory.next_car(rng);
        self.next_arrival = now + self.draw_gap(rng);
        Some(car)
    }

    /// `max(1, floor(sample))`.
    fn draw_gap(&self, rng: &mut SimRng) -> u64 {
        self.gap.sample(rng.inner()).floor().max(1.0) as u64
    }
}
