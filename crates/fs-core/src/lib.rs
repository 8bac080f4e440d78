//! `fs-core`: foundational types for the `fuel_station` simulator.
//!
//! Every other `fs-*` crate depends on this one.  It has no `fs-*`
//! dependencies of its own.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `CarId`, `DispenserId`                                |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`rng`]         | `SimRng` (one per run), `run_seed`                    |
//! | [`fuel`]        | `FuelType` label                                      |
//! | [`config`]      | `StationConfig`, `DispenserSpec`, `RoutingPolicy`     |
//! | [`scenario`]    | `Scenario` registry of named dispenser layouts        |
//! | [`error`]       | `FsError`, `FsResult`                                 |

pub mod config;
pub mod error;
pub mod fuel;
pub mod ids;
pub mod rng;
pub mod scenario;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DispenserSpec, RoutingPolicy, StationConfig};
pub use error::{FsError, FsResult};
pub use fuel::FuelType;
pub use ids::{CarId, DispenserId};
pub use rng::{SimRng, run_seed};
pub use scenario::Scenario;
pub use time::{SimClock, Tick};
