//! Unit tests for fs-routing.

use fs_core::{CarId, DispenserId, DispenserSpec, FuelType, RoutingPolicy, SimRng};
use fs_station::{Car, Dispenser};

use crate::{Router, least_loaded};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn car(id: u64, fuel: &str) -> Car {
    Car::new(CarId(id), FuelType::new(fuel), 5)
}

fn fuels() -> Vec<FuelType> {
    vec![FuelType::new("A"), FuelType::new("B")]
}

/// The reference layout `0:{A} 1:{A} 2:{A,B} 3:{B}` with capacity 3.
fn reference_station() -> Vec<Dispenser> {
    [
        DispenserSpec::new(0, &["A"]),
        DispenserSpec::new(1, &["A"]),
        DispenserSpec::new(2, &["A", "B"]),
        DispenserSpec::new(3, &["B"]),
    ]
    .iter()
    .map(|s| Dispenser::new(s, 3))
    .collect()
}

fn fill(d: &mut Dispenser, n: usize) {
    for i in 0..n {
        d.enqueue(car(100 + i as u64, "A")).unwrap();
    }
}

// ── least_loaded ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod least_loaded_tests {
    use super::*;

    #[test]
    fn ties_go_to_lowest_id() {
        let ds = reference_station();
        assert_eq!(least_loaded(&ds, &FuelType::new("A")), Some(0));
        assert_eq!(least_loaded(&ds, &FuelType::new("B")), Some(2));
    }

    #[test]
    fn shortest_queue_wins() {
        let mut ds = reference_station();
        fill(&mut ds[0], 2);
        fill(&mut ds[1], 1);
        fill(&mut ds[2], 1);
        assert_eq!(least_loaded(&ds, &FuelType::new("A")), Some(1));
    }

    #[test]
    fn lowest_id_not_list_position() {
        let ds: Vec<Dispenser> = [DispenserSpec::new(7, &["A"]), DispenserSpec::new(3, &["A"])]
            .iter()
            .map(|s| Dispenser::new(s, 3))
            .collect();
        assert_eq!(least_loaded(&ds, &FuelType::new("A")), Some(1));
    }

    #[test]
    fn full_queues_are_skipped() {
        let mut ds = reference_station();
        fill(&mut ds[0], 3);
        fill(&mut ds[1], 3);
        fill(&mut ds[2], 3);
        assert_eq!(least_loaded(&ds, &FuelType::new("A")), None);
        assert_eq!(least_loaded(&ds, &FuelType::new("B")), Some(3));
    }

    #[test]
    fn unserved_fuel_has_no_candidate() {
        let ds = reference_station();
        assert_eq!(least_loaded(&ds, &FuelType::new("LPG")), None);
        assert_eq!(least_loaded(&[], &FuelType::new("A")), None);
    }
}

// ── Strict policy ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod strict {
    use super::*;

    #[test]
    fn routes_to_matching_fuel() {
        let ds = reference_station();
        let mut rng = SimRng::new(0);
        let d = RoutingPolicy::Strict.route(&car(1, "B"), &ds, &fuels(), &mut rng).unwrap();
        assert_eq!(d.dispenser, DispenserId(2));
        assert!(d.misroute.is_none());
    }

    #[test]
    fn never_misroutes() {
        let ds = reference_station();
        let mut rng = SimRng::new(1);
        for i in 0..500 {
            let d = RoutingPolicy::Strict.route(&car(i, "A"), &ds, &fuels(), &mut rng).unwrap();
            assert!(ds[d.index].supports(&FuelType::new("A")));
            assert!(d.misroute.is_none());
        }
    }
}

// ── Mistake-aware policy ──────────────────────────────────────────────────────

#[cfg(test)]
mod mistake_aware {
    use super::*;

    #[test]
    fn probability_one_always_misroutes() {
        let ds = reference_station();
        let policy = RoutingPolicy::MistakeAware { probability: 1.0 };
        let mut rng = SimRng::new(2);
        for i in 0..200 {
            let d = policy.route(&car(i, "A"), &ds, &fuels(), &mut rng).unwrap();
            assert_eq!(d.misroute, Some(FuelType::new("B")));
            // B is served by 2 and 3; both empty, so the lower id wins.
            assert_eq!(d.dispenser, DispenserId(2));
        }
    }

    #[test]
    fn probability_zero_matches_strict() {
        let ds = reference_station();
        let policy = RoutingPolicy::MistakeAware { probability: 0.0 };
        let mut rng = SimRng::new(3);
        let mut strict_rng = SimRng::new(3);
        for i in 0..200 {
            let c = car(i, if i % 3 == 0 { "B" } else { "A" });
            assert_eq!(
                policy.route(&c, &ds, &fuels(), &mut rng),
                RoutingPolicy::Strict.route(&c, &ds, &fuels(), &mut strict_rng),
            );
        }
    }

    #[test]
    fn misroute_without_wrong_fuel_dispenser_is_no_assignment() {
        let ds: Vec<Dispenser> = [DispenserSpec::new(0, &["A"])]
            .iter()
            .map(|s| Dispenser::new(s, 3))
            .collect();
        let policy = RoutingPolicy::MistakeAware { probability: 1.0 };
        let mut rng = SimRng::new(4);
        assert_eq!(policy.route(&car(1, "A"), &ds, &fuels(), &mut rng), None);
    }

    #[test]
    fn single_fuel_station_cannot_misroute() {
        let ds = reference_station();
        let policy = RoutingPolicy::MistakeAware { probability: 1.0 };
        let only_a = vec![FuelType::new("A")];
        let mut rng = SimRng::new(5);
        let d = policy.route(&car(1, "A"), &ds, &only_a, &mut rng).unwrap();
        assert_eq!(d.dispenser, DispenserId(0));
        assert!(d.misroute.is_none());
    }

    #[test]
    fn full_forecourt_is_no_assignment() {
        let mut ds = reference_station();
        for d in &mut ds {
            fill(d, 3);
        }
        let policy = RoutingPolicy::default();
        let mut rng = SimRng::new(6);
        assert_eq!(policy.route(&car(1, "A"), &ds, &fuels(), &mut rng), None);
        assert_eq!(policy.route(&car(1, "A"), &[], &fuels(), &mut rng), None);
    }

    #[test]
    fn default_rate_is_roughly_ten_percent() {
        let ds = reference_station();
        let policy = RoutingPolicy::default();
        let mut rng = SimRng::new(7);
        let n = 20_000;
        let misroutes = (0..n)
            .filter_map(|i| policy.route(&car(i, "A"), &ds, &fuels(), &mut rng))
            .filter(|d| d.misroute.is_some())
            .count();
        let rate = misroutes as f64 / n as f64;
        assert!((rate - 0.1).abs() < 0.015, "misroute rate {rate}");
    }
}
