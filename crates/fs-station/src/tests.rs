//! Unit tests for fs-station.

use fs_core::{CarId, DispenserSpec, FuelType, StationConfig, Tick};

use crate::{BoundedQueue, Car, Dispenser, ServiceStep, Station};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn car(id: u64, fuel: &str, service_time: u64) -> Car {
    Car::new(CarId(id), FuelType::new(fuel), service_time)
}

fn dispenser(id: u32, fuels: &[&str]) -> Dispenser {
    Dispenser::new(&DispenserSpec::new(id, fuels), 3)
}

// ── BoundedQueue ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod bounded_queue {
    use super::*;

    #[test]
    fn push_beyond_capacity_hands_item_back() {
        let mut q = BoundedQueue::new(2);
        assert!(q.push(1).is_ok());
        assert!(q.push(2).is_ok());
        assert!(q.is_full());
        assert_eq!(q.push(3), Err(3));
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn huge_capacity_allocates_lazily() {
        let mut q = BoundedQueue::new(usize::MAX);
        assert!(q.push(1u8).is_ok());
        assert!(!q.is_full());
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn fifo_order() {
        let mut q = BoundedQueue::new(3);
        q.push('a').unwrap();
        q.push('b').unwrap();
        assert_eq!(q.front(), Some(&'a'));
        assert_eq!(q.pop(), Some('a'));
        assert_eq!(q.pop(), Some('b'));
        assert_eq!(q.pop(), None);
        assert!(q.is_empty());
    }
}

// ── Car ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod car_tests {
    use super::*;

    #[test]
    fn waiting_accumulates() {
        let mut c = car(1, "A", 5);
        assert_eq!(c.waiting_time(), 0);
        c.wait();
        c.wait();
        assert_eq!(c.waiting_time(), 2);
    }

    #[test]
    fn serialised_view_omits_waiting_time() {
        let mut c = car(4, "B", 9);
        c.wait();
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"id":4,"fuel_type":"B","service_time":9}"#);
    }
}

// ── Dispenser state machine ───────────────────────────────────────────────────

#[cfg(test)]
mod dispenser_tests {
    use super::*;

    #[test]
    fn new_dispenser_is_idle() {
        let d = dispenser(0, &["A", "A", "B"]);
        assert!(d.is_available());
        assert!(d.car_inside().is_none());
        assert!(d.expected_finish().is_none());
        assert_eq!(d.fuels(), &[FuelType::new("A"), FuelType::new("B")]);
    }

    #[test]
    fn idle_with_empty_queue_is_unchanged() {
        let mut d = dispenser(0, &["A"]);
        assert_eq!(d.step(Tick(0)), ServiceStep::Unchanged);
    }

    #[test]
    fn starts_then_finishes_on_later_tick() {
        let mut d = dispenser(2, &["A"]);
        let mut c = car(1, "A", 3);
        c.wait();
        d.enqueue(c).unwrap();

        match d.step(Tick(4)) {
            ServiceStep::Started { event, waited } => {
                assert_eq!(event.tick, Tick(4));
                assert_eq!(event.dispenser_id.0, 2);
                assert_eq!(event.car_id, CarId(1));
                assert_eq!(waited, 1);
            }
            other => panic!("expected Started, got {other:?}"),
        }
        assert!(!d.is_available());
        assert_eq!(d.expected_finish(), Some(Tick(7)));
        assert_eq!(d.queue_len(), 0);

        assert_eq!(d.step(Tick(5)), ServiceStep::Unchanged);
        assert_eq!(d.step(Tick(6)), ServiceStep::Unchanged);
        match d.step(Tick(7)) {
            ServiceStep::Finished(done) => assert_eq!(done.id, CarId(1)),
            other => panic!("expected Finished, got {other:?}"),
        }
        assert!(d.is_available());
        assert_eq!(d.serviced_cars(), 1);
    }

    #[test]
    fn zero_service_time_still_needs_a_second_tick() {
        let mut d = dispenser(0, &["A"]);
        d.enqueue(car(1, "A", 0)).unwrap();
        assert!(matches!(d.step(Tick(3)), ServiceStep::Started { .. }));
        // Same tick again would finish, but the engine calls step once per tick.
        assert!(matches!(d.step(Tick(4)), ServiceStep::Finished(_)));
    }

    #[test]
    fn unsupported_fuel_is_rejected_without_service() {
        let mut d = dispenser(0, &["A"]);
        d.enqueue(car(9, "B", 4)).unwrap();
        d.enqueue(car(10, "A", 4)).unwrap();
        match d.step(Tick(1)) {
            ServiceStep::Rejected(c) => assert_eq!(c.id, CarId(9)),
            other => panic!("expected Rejected, got {other:?}"),
        }
        assert!(d.is_available());
        assert_eq!(d.queue_len(), 1);
        assert_eq!(d.serviced_cars(), 0);
    }

    #[test]
    fn serving_dispenser_does_not_pull_from_queue() {
        let mut d = dispenser(0, &["A"]);
        d.enqueue(car(1, "A", 10)).unwrap();
        d.enqueue(car(2, "A", 10)).unwrap();
        d.step(Tick(0));
        assert_eq!(d.step(Tick(1)), ServiceStep::Unchanged);
        assert_eq!(d.queue_len(), 1);
        assert!(!d.is_available());
        assert_eq!(d.car_inside().map(|c| c.id), Some(CarId(1)));
    }

    #[test]
    fn enqueue_respects_capacity() {
        let mut d = dispenser(0, &["A"]);
        for i in 0..3 {
            d.enqueue(car(i, "A", 1)).unwrap();
        }
        assert!(!d.has_capacity());
        assert!(d.enqueue(car(3, "A", 1)).is_err());
        assert_eq!(d.queue_len(), 3);
    }
}

// ── Station ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod station_tests {
    use super::*;

    #[test]
    fn from_config_mirrors_layout() {
        let station = Station::from_config(&StationConfig::default());
        let ids: Vec<u32> = station.dispensers.iter().map(|d| d.id().0).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        assert!(station.dispensers.iter().all(|d| d.has_capacity() && d.queue_len() == 0));
        assert!(station.main_queue.is_empty());
    }

    #[test]
    fn charge_waiting_skips_cars_in_service() {
        let mut station = Station::from_config(&StationConfig::default());
        station.main_queue.push_back(car(1, "A", 5));
        station.dispensers[0].enqueue(car(2, "A", 5)).unwrap();
        station.dispensers[0].step(Tick(0));
        station.dispensers[0].enqueue(car(3, "A", 5)).unwrap();

        station.charge_waiting();
        station.charge_waiting();

        assert_eq!(station.main_queue[0].waiting_time(), 2);
        assert_eq!(station.dispensers[0].mini_queue().front().unwrap().waiting_time(), 2);
        assert_eq!(station.dispensers[0].car_inside().unwrap().waiting_time(), 0);
        assert_eq!(station.cars().count(), 3);
        assert_eq!(station.dispensers.iter().filter(|d| d.car_inside().is_some()).count(), 1);
        assert_eq!(station.mini_queue_total(), 1);
    }

    #[test]
    fn snapshot_serialises_expected_shape() {
        let cfg = StationConfig {
            dispensers: vec![DispenserSpec::new(0, &["A"])],
            ..Default::default()
        };
        let mut station = Station::from_config(&cfg);
        station.main_queue.push_back(car(2, "B", 11));
        station.dispensers[0].enqueue(car(1, "A", 7)).unwrap();
        station.dispensers[0].step(Tick(2));

        let snap = station.snapshot(Tick(3));
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "time": 3,
                "dispensers": [{
                    "id": 0,
                    "fuels": ["A"],
                    "is_available": false,
                    "car_inside": { "id": 1, "fuel_type": "A", "service_time": 7 },
                    "expected_finish_time": 9,
                    "mini_queue": []
                }],
                "main_queue": [{ "id": 2, "fuel_type": "B", "service_time": 11 }]
            })
        );
    }

    #[test]
    fn idle_snapshot_uses_nulls() {
        let station = Station::from_config(&StationConfig::default());
        let json = serde_json::to_value(station.snapshot(Tick(0))).unwrap();
        assert!(json["dispensers"][0]["car_inside"].is_null());
        assert!(json["dispensers"][0]["expected_finish_time"].is_null());
        assert_eq!(json["dispensers"][0]["is_available"], true);
    }

    #[test]
    fn event_display() {
        let e = crate::Event { tick: Tick(4), dispenser_id: fs_core::DispenserId(1), car_id: CarId(8) };
        assert_eq!(e.to_string(), "Event(time=4, dispenser_id=1, car_id=8)");
    }
}
