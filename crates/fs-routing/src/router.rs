//! The `Router` trait and its implementation for [`RoutingPolicy`].

use fs_core::{DispenserId, FuelType, RoutingPolicy, SimRng};
use fs_station::{Car, Dispenser};

/// Where a car was sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutingDecision {
    /// Position of the chosen dispenser in the station's dispenser list.
    pub index:     usize,
    pub dispenser: DispenserId,
    /// `Some(fuel)` when the driver deliberately headed for a dispenser
    /// serving `fuel` instead of their own fuel type.
    pub misroute:  Option<FuelType>,
}

/// Pluggable dispenser selection.
///
/// `fuels` is the station's configured fuel list (the pool a confused driver
/// picks a wrong fuel from).  Returning `None` leaves the car at the head of
/// the main queue; the engine retries next tick.
pub trait Router {
    fn route(
        &self,
        car:        &Car,
        dispensers: &[Dispenser],
        fuels:      &[FuelType],
        rng:        &mut SimRng,
    ) -> Option<RoutingDecision>;
}

/// Index of the least-loaded dispenser that serves `fuel` and has room.
///
/// Fewest queued cars wins; ties go to the lowest dispenser id.
pub fn least_loaded(dispensers: &[Dispenser], fuel: &FuelType) -> Option<usize> {
    dispensers
        .iter()
        .enumerate()
        .filter(|(_, d)| d.supports(fuel) && d.has_capacity())
        .min_by_key(|(_, d)| (d.queue_len(), d.id()))
        .map(|(i, _)| i)
}

fn decision(dispensers: &[Dispenser], index: usize, misroute: Option<FuelType>) -> RoutingDecision {
    RoutingDecision { index, dispenser: dispensers[index].id(), misroute }
}

fn route_strict(car: &Car, dispensers: &[Dispenser]) -> Option<RoutingDecision> {
    least_loaded(dispensers, &car.fuel_type).map(|i| decision(dispensers, i, None))
}

fn route_with_mistakes(
    car:         &Car,
    dispensers:  &[Dispenser],
    fuels:       &[FuelType],
    probability: f64,
    rng:         &mut SimRng,
) -> Option<RoutingDecision> {
    // A full forecourt rejects everyone; the driver never gets to choose.
    if !dispensers.iter().any(Dispenser::has_capacity) {
        return None;
    }
    if rng.random::<f64>() >= probability {
        return route_strict(car, dispensers);
    }

    let wrong: Vec<&FuelType> = fuels.iter().filter(|&f| *f != car.fuel_type).collect();
    let Some(&wrong_fuel) = rng.choose(&wrong) else {
        // Only one fuel exists, so there is nothing to confuse it with.
        return route_strict(car, dispensers);
    };

    let chosen = least_loaded(dispensers, wrong_fuel);
    tracing::trace!(
        car = car.id.0,
        actual = %car.fuel_type,
        believed = %wrong_fuel,
        dispenser = ?chosen.map(|i| dispensers[i].id().0),
        "driver misroute"
    );
    chosen.map(|i| decision(dispensers, i, Some(wrong_fuel.clone())))
}

impl Router for RoutingPolicy {
    fn route(
        &self,
        car:        &Car,
        dispensers: &[Dispenser],
        fuels:      &[FuelType],
        rng:        &mut SimRng,
    ) -> Option<RoutingDecision> {
        match *self {
            RoutingPolicy::Strict => route_strict(car, dispensers),
            RoutingPolicy::MistakeAware { probability } => {
                route_with_mistakes(car, dispensers, fuels, probability, rng)
            }
        }
    }
}
