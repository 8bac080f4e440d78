//! Simulation time model.
//!
//! Time is a monotonically increasing integer `Tick`.  There is no mapping to
//! wall-clock time: every duration in the station (service times, inter-arrival
//! gaps, waiting times) is measured in ticks, so all arithmetic is exact.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

/// Saturates at `u64::MAX`, a tick no run ever reaches.
impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0.saturating_add(rhs))
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The run's clock: the current tick and the last tick to simulate.
///
/// The final tick is *inclusive*: a run with `last_tick = T5` processes six
/// ticks, `T0..=T5`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimClock {
    /// The tick currently being processed.
    pub current_tick: Tick,
    /// The last tick the run processes.
    pub last_tick:    Tick,
}

impl SimClock {
    pub fn new(last_tick: Tick) -> Self {
        Self { current_tick: Tick::ZERO, last_tick }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// `true` once every tick up to and including `last_tick` has run.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.current_tick > self.last_tick
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.current_tick, self.last_tick)
    }
}
