//! Service-start events.

use std::fmt;

use serde::Serialize;

use fs_core::{CarId, DispenserId, Tick};

/// A car began service at a dispenser.  Events form an append-only log per
/// run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Event {
    #[serde(rename = "time")]
    pub tick:         Tick,
    pub dispenser_id: DispenserId,
    pub car_id:       CarId,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Event(time={}, dispenser_id={}, car_id={})",
            self.tick.0, self.dispenser_id.0, self.car_id.0
        )
    }
}
