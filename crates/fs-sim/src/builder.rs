//! Fluent builder for constructing a [`Sim`].

use fs_arrival::ArrivalProcess;
use fs_core::{RoutingPolicy, SimClock, SimRng, StationConfig};
use fs_routing::Router;
use fs_station::Station;

use crate::{RunCounters, Sim, SimResult};

/// Fluent builder for [`Sim<R>`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                  |
/// |-----------------|------------------------------------------|
/// | `.seed(s)`      | `config.seed`                            |
/// | `.policy(p)`    | `config.routing`                         |
/// | `.router(r)`    | the configured [`RoutingPolicy`]         |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(StationConfig::default())
///     .seed(7)
///     .policy(RoutingPolicy::Strict)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// let output = sim.into_output();
/// ```
pub struct SimBuilder<R: Router = RoutingPolicy> {
    config: StationConfig,
    seed:   Option<u64>,
    router: R,
}

impl SimBuilder<RoutingPolicy> {
    /// Start from a configuration; the router is the configured policy.
    pub fn new(config: StationConfig) -> Self {
        let router = config.routing;
        Self { config, seed: None, router }
    }

    /// Replace the routing policy.  The configuration is updated too, so
    /// the probability is validated by [`build`][Self::build].
    pub fn policy(mut self, policy: RoutingPolicy) -> Self {
        self.config.routing = policy;
        self.router = policy;
        self
    }
}

impl<R: Router> SimBuilder<R> {
    /// Seed the run's random stream, overriding `config.seed`.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Swap in a custom [`Router`].
    pub fn router<R2: Router>(self, router: R2) -> SimBuilder<R2> {
        SimBuilder { config: self.config, seed: self.seed, router }
    }

    /// Validate the configuration, draw the first arrival and return a
    /// ready-to-run [`Sim`] positioned at tick 0.
    pub fn build(self) -> SimResult<Sim<R>> {
        self.config.validate()?;

        let seed = self.seed.unwrap_or(self.config.seed);
        let mut rng = SimRng::new(seed);
        let arrivals = ArrivalProcess::new(&self.config, &mut rng)?;

        tracing::debug!(
            seed,
            duration = self.config.simulation_duration,
            dispensers = self.config.dispensers.len(),
            "building simulation"
        );

        Ok(Sim {
            clock:    SimClock::new(self.config.last_tick()),
            station:  Station::from_config(&self.config),
            counters: RunCounters::new(&self.config),
            states:   Vec::new(),
            events:   Vec::new(),
            arrivals,
            router:   self.router,
            rng,
            config:   self.config,
        })
    }
}
