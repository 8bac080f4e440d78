//! Dispensers and their service state machine.
//!
//! # States
//!
//! ```text
//!            head car's fuel supported
//!   Idle ─────────────────────────────▶ Serving { car, finish }
//!    ▲                                        │
//!    └──────────── now >= finish ─────────────┘
//! ```
//!
//! [`Dispenser::step`] performs at most one transition per tick: a dispenser
//! that starts service cannot also finish it in the same tick.

use fs_core::{DispenserId, DispenserSpec, FuelType, Tick};

use crate::{BoundedQueue, Car, Event};

// ── ServiceState ──────────────────────────────────────────────────────────────

/// What the dispenser is doing right now.
///
/// Holding the serviced car inside the `Serving` variant makes "a car is
/// inside iff the dispenser is unavailable" true by construction.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ServiceState {
    #[default]
    Idle,
    Serving { car: Car, finish: Tick },
}

// ── ServiceStep ───────────────────────────────────────────────────────────────

/// Result of one [`Dispenser::step`].
#[derive(Debug, PartialEq, Eq)]
pub enum ServiceStep {
    /// Nothing to do: idle with an empty mini-queue, or still serving.
    Unchanged,
    /// The head car began service.  `waited` is its accumulated waiting time.
    Started { event: Event, waited: u64 },
    /// The head car's fuel is not served here.  The car is returned so the
    /// caller can send it back to the main queue.
    Rejected(Car),
    /// Service ended; the car leaves the station.
    Finished(Car),
}

// ── Dispenser ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Dispenser {
    id:       DispenserId,
    fuels:    Vec<FuelType>,
    state:    ServiceState,
    queue:    BoundedQueue<Car>,
    serviced: u64,
}

impl Dispenser {
    /// Build an idle dispenser.  Duplicate fuels in `spec` are dropped,
    /// keeping first-seen order.
    pub fn new(spec: &DispenserSpec, queue_capacity: usize) -> Self {
        let mut fuels: Vec<FuelType> = Vec::with_capacity(spec.fuels.len());
        for fuel in &spec.fuels {
            if !fuels.contains(fuel) {
                fuels.push(fuel.clone());
            }
        }
        Self {
            id: spec.id,
            fuels,
            state: ServiceState::Idle,
            queue: BoundedQueue::new(queue_capacity),
            serviced: 0,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> DispenserId {
        self.id
    }

    pub fn fuels(&self) -> &[FuelType] {
        &self.fuels
    }

    #[inline]
    pub fn supports(&self, fuel: &FuelType) -> bool {
        self.fuels.contains(fuel)
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        matches!(self.state, ServiceState::Idle)
    }

    pub fn car_inside(&self) -> Option<&Car> {
        match &self.state {
            ServiceState::Idle => None,
            ServiceState::Serving { car, .. } => Some(car),
        }
    }

    /// Tick at which the current service completes; `None` while idle.
    pub fn expected_finish(&self) -> Option<Tick> {
        match self.state {
            ServiceState::Idle => None,
            ServiceState::Serving { finish, .. } => Some(finish),
        }
    }

    pub fn mini_queue(&self) -> &BoundedQueue<Car> {
        &self.queue
    }

    pub fn mini_queue_mut(&mut self) -> &mut BoundedQueue<Car> {
        &mut self.queue
    }

    #[inline]
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    pub fn has_capacity(&self) -> bool {
        !self.queue.is_full()
    }

    /// Cars whose service finished here over the run.
    pub fn serviced_cars(&self) -> u64 {
        self.serviced
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Put `car` at the back of the mini-queue, or hand it back if full.
    pub fn enqueue(&mut self, car: Car) -> Result<(), Car> {
        self.queue.push(car)
    }

    /// Advance this dispenser by one tick.
    pub fn step(&mut self, now: Tick) -> ServiceStep {
        match self.expected_finish() {
            None => self.try_start(now),
            Some(finish) if now >= finish => self.finish_service(),
            Some(_) => ServiceStep::Unchanged,
        }
    }

    /// Idle branch: start serving the head of the mini-queue, or bounce it.
    fn try_start(&mut self, now: Tick) -> ServiceStep {
        let supported = match self.queue.front() {
            None => return ServiceStep::Unchanged,
            Some(head) => self.supports(&head.fuel_type),
        };
        let Some(car) = self.queue.pop() else {
            return ServiceStep::Unchanged;
        };
        if !supported {
            return ServiceStep::Rejected(car);
        }

        let event = Event { tick: now, dispenser_id: self.id, car_id: car.id };
        let waited = car.waiting_time();
        let finish = now + car.service_time;
        self.state = ServiceState::Serving { car, finish };
        ServiceStep::Started { event, waited }
    }

    fn finish_service(&mut self) -> ServiceStep {
        match std::mem::take(&mut self.state) {
            ServiceState::Serving { car, .. } => {
                self.serviced += 1;
                ServiceStep::Finished(car)
            }
            ServiceState::Idle => ServiceStep::Unchanged,
        }
    }
}
