//! The `Sim` struct and its tick loop.

use fs_arrival::ArrivalProcess;
use fs_core::{RoutingPolicy, SimClock, SimRng, StationConfig, Tick};
use fs_routing::Router;
use fs_station::{Event, ServiceStep, Station, TickSnapshot};

use crate::{RunCounters, RunOutput, RunStats, SimObserver};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<R>` holds all state of one run and drives the five-phase tick loop
/// described in the [crate docs][crate].  A single [`SimRng`] feeds both the
/// arrival process and the router, so a run is fully determined by its seed.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<R: Router = RoutingPolicy> {
    /// The validated configuration this run was built from.
    pub config: StationConfig,

    /// Tracks the current tick; the run ends after `config.last_tick()`.
    pub clock: SimClock,

    /// Main queue and dispensers.
    pub station: Station,

    /// Generates cars at normally distributed gaps.
    pub arrivals: ArrivalProcess,

    /// Chooses a mini-queue for the head of the main queue.
    pub router: R,

    /// One pre-mutation snapshot per processed tick.
    pub states: Vec<TickSnapshot>,

    /// One event per service start, in start order.
    pub events: Vec<Event>,

    /// Running totals behind [`RunStats`].
    pub counters: RunCounters,

    pub(crate) rng: SimRng,
}

impl<R: Router> Sim<R> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick through `config.last_tick()` inclusive.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        while !self.clock.is_finished() {
            let now = self.clock.current_tick;
            self.process_tick(now, observer);
            self.clock.advance();
        }

        let stats = self.stats();
        tracing::debug!(
            generated = stats.total_cars_generated,
            serviced  = stats.total_cars_serviced,
            mistakes  = stats.number_of_mistakes,
            avg_wait  = stats.avg_waiting_time,
            "simulation finished"
        );
        observer.on_sim_end(self.clock.current_tick);
    }

    /// Run exactly `n` ticks from the current position (ignores the
    /// configured duration).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            let now = self.clock.current_tick;
            self.process_tick(now, observer);
            self.clock.advance();
        }
    }

    /// Statistics for the ticks processed so far.
    pub fn stats(&self) -> RunStats {
        RunStats::collect(&self.counters, &self.station)
    }

    /// Consume the run and hand back its recorded output.
    pub fn into_output(self) -> RunOutput {
        let stats = self.stats();
        RunOutput { states: self.states, events: self.events, stats }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        observer.on_tick_start(now);

        // ── Phase 1: snapshot ─────────────────────────────────────────────
        self.states.push(self.station.snapshot(now));

        // ── Phase 2: arrival ──────────────────────────────────────────────
        if let Some(car) = self.arrivals.poll(now, &mut self.rng) {
            self.counters.record_arrival(&car.fuel_type);
            observer.on_arrival(now, &car);
            self.station.main_queue.push_back(car);

            if self.counters.queue_full_at.is_none()
                && self.station.main_queue.len() >= self.config.main_queue_soft_cap
            {
                tracing::trace!(%now, len = self.station.main_queue.len(), "main queue at soft cap");
                self.counters.queue_full_at = Some(now);
            }
        }

        // ── Phase 3: route the head of the main queue ─────────────────────
        self.route_head(now, observer);

        // ── Phase 4: service ──────────────────────────────────────────────
        for i in 0..self.station.dispensers.len() {
            let step = self.station.dispensers[i].step(now);
            let id = self.station.dispensers[i].id();
            match step {
                ServiceStep::Unchanged => {}
                ServiceStep::Started { event, waited } => {
                    self.counters.total_waiting_time += waited;
                    if let Some(car) = self.station.dispensers[i].car_inside() {
                        observer.on_service_start(&event, car);
                    }
                    self.events.push(event);
                }
                ServiceStep::Rejected(car) => {
                    tracing::trace!(%now, car = %car.id, dispenser = %id, "wrong pump, back to main queue");
                    self.counters.mistakes += 1;
                    observer.on_mistake(now, id, &car);
                    self.station.main_queue.push_back(car);
                }
                ServiceStep::Finished(car) => {
                    self.counters.cars_serviced += 1;
                    observer.on_service_end(now, id, &car);
                }
            }
        }

        if self.counters.first_mini_queue_wait.is_none() && self.station.mini_queue_total() > 0 {
            self.counters.first_mini_queue_wait = Some(now);
        }

        // ── Phase 5: waiting ──────────────────────────────────────────────
        self.station.charge_waiting();

        observer.on_tick_end(now, &self.station);
    }

    /// Move the head of the main queue into the mini-queue the router picks.
    ///
    /// A car the router cannot place, or places on a full or unknown
    /// dispenser, stays at the head and blocks the queue.
    fn route_head<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        let Some(head) = self.station.main_queue.front() else {
            return;
        };
        let decision = self.router.route(
            head,
            &self.station.dispensers,
            &self.config.fuel_types,
            &mut self.rng,
        );

        let dispensers = &self.station.dispensers;
        let decision = decision.filter(|d| dispensers.get(d.index).is_some_and(|x| x.has_capacity()));
        let Some(decision) = decision else {
            self.counters.first_blocked.get_or_insert(now);
            observer.on_blocked(now, head);
            return;
        };
        let Some(car) = self.station.main_queue.pop_front() else {
            return;
        };

        observer.on_routed(now, &car, &decision);
        if let Err(car) = self.station.dispensers[decision.index].enqueue(car) {
            self.station.main_queue.push_front(car);
        }
    }
}
