//! `fs-sim`: tick loop orchestrator for the fuel_station simulator.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..=config.simulation_duration:
//!   ① Snapshot : record the station as it stands (pre-mutation).
//!   ② Arrival  : if tick >= next_arrival: new car joins the main queue.
//!   ③ Routing  : head of the main queue asks the Router for a dispenser;
//!                 assigned → moves to that mini-queue, else it stays put.
//!   ④ Service  : every dispenser steps once: idle ones pull (or bounce)
//!                 their head car, serving ones finish when due.
//!   ⑤ Waiting  : every queued car is charged one tick of waiting.
//! ```
//!
//! The order is part of the contract: a car that starts service in ④ is no
//! longer queued in ⑤, so it is not charged for that tick.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the runs of a batch on Rayon's thread pool.       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fs_core::StationConfig;
//! use fs_sim::{run_multiple_simulations, run_simulation};
//!
//! let config = StationConfig::default();
//! let (states, stats) = run_simulation(&config)?;
//! let (all_states, all_stats) = run_multiple_simulations(100, &config)?;
//! ```

pub mod batch;
pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod stats;


pub use batch::{RunOutput, run_batch, run_multiple_simulations, run_once, run_simulation};
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use stats::{RunCounters, RunStats};
