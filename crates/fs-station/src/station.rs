//! `Station`: every dispenser plus the shared main queue.

use std::collections::VecDeque;

use fs_core::{StationConfig, Tick};

use crate::{Car, Dispenser, DispenserState, TickSnapshot};

/// Mutable state of one run.  Created fresh for every run.
#[derive(Clone, Debug)]
pub struct Station {
    /// Dispensers in configuration order.
    pub dispensers: Vec<Dispenser>,
    /// Cars that have arrived but are not yet assigned to a dispenser.
    pub main_queue: VecDeque<Car>,
}

impl Station {
    /// An empty station with the dispenser layout of `config`.
    pub fn from_config(config: &StationConfig) -> Self {
        let dispensers = config
            .dispensers
            .iter()
            .map(|spec| Dispenser::new(spec, config.dispenser_mini_queue_capacity))
            .collect();
        Self { dispensers, main_queue: VecDeque::new() }
    }

    /// Record the current state as the snapshot for `tick`.
    pub fn snapshot(&self, tick: Tick) -> TickSnapshot {
        TickSnapshot {
            tick,
            dispensers: self.dispensers.iter().map(DispenserState::from).collect(),
            main_queue: self.main_queue.iter().cloned().collect(),
        }
    }

    /// Charge one tick of waiting to every queued car.  Cars being serviced
    /// are not queued and are left alone.
    pub fn charge_waiting(&mut self) {
        for car in self.main_queue.iter_mut() {
            car.wait();
        }
        for dispenser in &mut self.dispensers {
            for car in dispenser.mini_queue_mut().iter_mut() {
                car.wait();
            }
        }
    }

    /// Total number of cars across all mini-queues.
    pub fn mini_queue_total(&self) -> usize {
        self.dispensers.iter().map(Dispenser::queue_len).sum()
    }

    /// Every car in the station, queued or in service.
    pub fn cars(&self) -> impl Iterator<Item = &Car> {
        self.main_queue.iter().chain(self.dispensers.iter().flat_map(|d| {
            d.car_inside().into_iter().chain(d.mini_queue().iter())
        }))
    }
}
