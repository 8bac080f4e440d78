//! `fs-station`: the passive entity model of a fuel station.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`car`]        | `Car`: fuel type, service time, accumulated waiting time  |
//! | [`queue`]      | `BoundedQueue<T>`: capacity-limited FIFO                  |
//! | [`dispenser`]  | `Dispenser`, `ServiceState`, `ServiceStep`                 |
//! | [`event`]      | `Event`: a car beginning service                          |
//! | [`station`]    | `Station`: all dispensers plus the main queue             |
//! | [`snapshot`]   | `TickSnapshot`, `DispenserState`: serialisable views      |
//!
//! # Ownership
//!
//! A [`Car`] is owned by exactly one container at a time: the main queue, a
//! dispenser's mini-queue, or a dispenser's service slot.  Every transfer is a
//! move, so a car can never be in two places within the same tick.

pub mod car;
pub mod dispenser;
pub mod event;
pub mod queue;
pub mod snapshot;
pub mod station;

#[cfg(test)]
mod tests;

pub use car::Car;
pub use dispenser::{Dispenser, ServiceState, ServiceStep};
pub use event::Event;
pub use queue::BoundedQueue;
pub use snapshot::{DispenserState, TickSnapshot};
pub use station::Station;
