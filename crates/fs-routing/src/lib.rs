//! `fs-routing`: which dispenser the head-of-queue car drives to.
//!
//! # Policies
//!
//! | Variant                          | Behaviour                                        |
//! |----------------------------------|--------------------------------------------------|
//! | `Strict`                         | least-loaded dispenser serving the car's fuel    |
//! | `MistakeAware { probability }`   | with `probability`, least-loaded dispenser serving a *different* fuel; otherwise `Strict` |
//!
//! Only dispensers with spare mini-queue capacity are candidates.  "Least
//! loaded" means the fewest cars in the mini-queue, ties going to the lowest
//! dispenser id.  When no dispenser qualifies the car stays where it is and
//! nothing changes.
//!
//! The policy enum itself ([`RoutingPolicy`]) is configuration and lives in
//! `fs-core`; this crate gives it behaviour through the [`Router`] trait so
//! the engine never matches on the variant.

pub mod router;

#[cfg(test)]
mod tests;

pub use fs_core::RoutingPolicy;
pub use router::{Router, RoutingDecision, least_loaded};
