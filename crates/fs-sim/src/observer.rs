//! Simulation observer trait for progress reporting and data collection.

use fs_core::{DispenserId, Tick};
use fs_routing::RoutingDecision;
use fs_station::{Car, Event, Station};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: mistake counter
///
/// ```rust,ignore
/// struct Mistakes(u64);
///
/// impl SimObserver for Mistakes {
///     fn on_mistake(&mut self, _tick: Tick, _dispenser: DispenserId, _car: &Car) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before the snapshot is taken.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// A car joined the back of the main queue.
    fn on_arrival(&mut self, _tick: Tick, _car: &Car) {}

    /// The head car left the main queue for a dispenser's mini-queue.
    fn on_routed(&mut self, _tick: Tick, _car: &Car, _decision: &RoutingDecision) {}

    /// The head car found no dispenser and stays at the head of the queue.
    fn on_blocked(&mut self, _tick: Tick, _car: &Car) {}

    /// A car began service.  `car` is the car now inside the dispenser.
    fn on_service_start(&mut self, _event: &Event, _car: &Car) {}

    /// A misrouted car reached a dispenser that does not serve its fuel and
    /// was sent back to the main queue.
    fn on_mistake(&mut self, _tick: Tick, _dispenser: DispenserId, _car: &Car) {}

    /// Service finished and the car left the station.
    fn on_service_end(&mut self, _tick: Tick, _dispenser: DispenserId, _car: &Car) {}

    /// Called at the end of each tick, after waiting times were charged.
    ///
    /// Provides read-only access to the live station, including the internal
    /// waiting times that snapshots leave out.
    fn on_tick_end(&mut self, _tick: Tick, _station: &Station) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
