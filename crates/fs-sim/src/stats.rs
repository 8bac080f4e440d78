//! Run statistics.
//!
//! [`RunCounters`] accumulate during the tick loop; [`RunStats`] is the flat
//! record derived from them (plus the final station state) at run end.
//!
//! `RunStats` serialises its fields in declaration order, and the two nested
//! maps are keyed by configuration order (every configured dispenser and fuel
//! present, zero or not).  Every run of a batch therefore produces the same
//! key set, which is what the CSV flattening in `fs-output` relies on.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use fs_core::{DispenserId, FuelType, StationConfig, Tick};
use fs_station::Station;

// ── RunCounters ───────────────────────────────────────────────────────────────

/// Running totals kept by [`Sim`][crate::Sim].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunCounters {
    /// Sum of the waiting times of every car that started service.
    pub total_waiting_time:  u64,
    pub cars_generated:      u64,
    pub cars_serviced:       u64,
    /// Misrouted cars bounced back to the main queue.
    pub mistakes:            u64,
    pub cars_with_fuel:      IndexMap<FuelType, u64>,
    /// First tick the head of the main queue could not be routed.
    pub first_blocked:       Option<Tick>,
    /// First tick that ended with a car still waiting in a mini-queue.
    pub first_mini_queue_wait: Option<Tick>,
    /// First tick the main queue reached its soft cap.
    pub queue_full_at:       Option<Tick>,
}

impl RunCounters {
    /// Zeroed counters with one fuel entry per configured fuel type.
    pub fn new(config: &StationConfig) -> Self {
        Self {
            cars_with_fuel: config.fuel_types.iter().map(|f| (f.clone(), 0)).collect(),
            ..Default::default()
        }
    }

    pub(crate) fn record_arrival(&mut self, fuel: &FuelType) {
        self.cars_generated += 1;
        *self.cars_with_fuel.entry(fuel.clone()).or_insert(0) += 1;
    }

    /// Mean waiting time of serviced cars; 0 when nobody was serviced.
    pub fn avg_waiting_time(&self) -> f64 {
        if self.cars_serviced == 0 {
            0.0
        } else {
            self.total_waiting_time as f64 / self.cars_serviced as f64
        }
    }
}

// ── RunStats ──────────────────────────────────────────────────────────────────

/// Summary of one completed run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    pub avg_waiting_time:                  f64,
    pub time_when_first_car_at_main_queue: Option<Tick>,
    pub time_when_first_car_at_mini_queue: Option<Tick>,
    pub total_cars_serviced:               u64,
    pub total_cars_generated:              u64,
    pub cars_serviced_by_dispenser:        IndexMap<DispenserId, u64>,
    pub total_cars_in_main_queue_at_end:   u64,
    pub total_cars_in_mini_queues_at_end:  u64,
    pub time_when_queue_is_full:           Option<Tick>,
    pub total_cars_with_fuel:              IndexMap<FuelType, u64>,
    pub number_of_mistakes:                u64,
}

impl RunStats {
    /// Derive the record from accumulated counters and the station as it
    /// stands.
    pub fn collect(counters: &RunCounters, station: &Station) -> Self {
        Self {
            avg_waiting_time:                  counters.avg_waiting_time(),
            time_when_first_car_at_main_queue: counters.first_blocked,
            time_when_first_car_at_mini_queue: counters.first_mini_queue_wait,
            total_cars_serviced:               counters.cars_serviced,
            total_cars_generated:              counters.cars_generated,
            cars_serviced_by_dispenser:        station
                .dispensers
                .iter()
                .map(|d| (d.id(), d.serviced_cars()))
                .collect(),
            total_cars_in_main_queue_at_end:   station.main_queue.len() as u64,
            total_cars_in_mini_queues_at_end:  station.mini_queue_total() as u64,
            time_when_queue_is_full:           counters.queue_full_at,
            total_cars_with_fuel:              counters.cars_with_fuel.clone(),
            number_of_mistakes:                counters.mistakes,
        }
    }
}
