//! Serialisable per-tick views of the station.
//!
//! A [`TickSnapshot`] is taken at the *start* of every tick, before arrivals,
//! routing or service run.  Once recorded it is never modified.
//!
//! JSON shape (one element of a run's `states`):
//!
//! ```json
//! {
//!   "time": 3,
//!   "dispensers": [
//!     { "id": 0, "fuels": ["A"], "is_available": false,
//!       "car_inside": { "id": 1, "fuel_type": "A", "service_time": 7 },
//!       "expected_finish_time": 9, "mini_queue": [] }
//!   ],
//!   "main_queue": [{ "id": 2, "fuel_type": "B", "service_time": 11 }]
//! }
//! ```

use serde::Serialize;

use fs_core::{DispenserId, FuelType, Tick};

use crate::{Car, Dispenser};

/// State of one dispenser at the start of a tick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DispenserState {
    pub id:                   DispenserId,
    pub fuels:                Vec<FuelType>,
    pub is_available:         bool,
    pub car_inside:           Option<Car>,
    /// `None` (serialised as `null`) while idle.
    pub expected_finish_time: Option<Tick>,
    pub mini_queue:           Vec<Car>,
}

impl From<&Dispenser> for DispenserState {
    fn from(d: &Dispenser) -> Self {
        Self {
            id:                   d.id(),
            fuels:                d.fuels().to_vec(),
            is_available:         d.is_available(),
            car_inside:           d.car_inside().cloned(),
            expected_finish_time: d.expected_finish(),
            mini_queue:           d.mini_queue().iter().cloned().collect(),
        }
    }
}

/// The whole station at the start of a tick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TickSnapshot {
    #[serde(rename = "time")]
    pub tick:       Tick,
    pub dispensers: Vec<DispenserState>,
    pub main_queue: Vec<Car>,
}
