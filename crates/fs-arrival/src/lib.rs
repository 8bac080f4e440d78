//! `fs-arrival`: when cars show up, and what they look like.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`factory`]  | `CarFactory`: categorical fuel draw, uniform service time  |
//! | [`process`]  | `ArrivalProcess`: normal inter-arrival gaps, next arrival  |
//! | [`error`]    | `ArrivalError`, `ArrivalResult<T>`                          |
//!
//! # Arrival model (summary)
//!
//! ```text
//! gap           = max(1, floor(Normal(arrival_mean, arrival_std)))
//! first_arrival = initial_arrival_tick  or  0 + gap
//! on arrival    : next_arrival = now + gap
//! ```
//!
//! Every draw comes from the run's [`SimRng`][fs_core::SimRng], passed in by
//! `&mut`; nothing here owns randomness.

pub mod error;
pub mod factory;
pub mod process;


pub use error::{ArrivalError, ArrivalResult};
pub use factory::CarFactory;
pub use process::ArrivalProcess;
