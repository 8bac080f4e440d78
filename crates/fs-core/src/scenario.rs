//! Named dispenser layouts.
//!
//! The trigger surface (CLI) selects a layout by name.  Names are resolved
//! with [`Scenario::from_name`], which rejects anything unregistered so that
//! no run ever starts with a misspelt scenario.

use std::fmt;
use std::str::FromStr;

use crate::{DispenserSpec, FsError, FsResult};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// Reference station: `0:{A} 1:{A} 2:{A,B} 3:{B}`.
    Default,
    /// One dispenser serving both fuels.
    SinglePump,
    /// No mixed dispensers: `0:{A} 1:{A} 2:{B}`.
    Dedicated,
    /// Four dispensers, each serving both fuels.
    AllMixed,
    /// An empty forecourt.  Every car waits forever.
    NoDispensers,
}

impl Scenario {
    pub const ALL: [Scenario; 5] = [
        Scenario::Default,
        Scenario::SinglePump,
        Scenario::Dedicated,
        Scenario::AllMixed,
        Scenario::NoDispensers,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scenario::Default      => "default",
            Scenario::SinglePump   => "single-pump",
            Scenario::Dedicated    => "dedicated",
            Scenario::AllMixed     => "all-mixed",
            Scenario::NoDispensers => "no-dispensers",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Scenario::Default      => "two A pumps, one A/B pump, one B pump",
            Scenario::SinglePump   => "a single A/B pump",
            Scenario::Dedicated    => "two A pumps and one B pump, no mixed pump",
            Scenario::AllMixed     => "four A/B pumps",
            Scenario::NoDispensers => "no pumps at all",
        }
    }

    /// Look a scenario up by its registered name.
    pub fn from_name(name: &str) -> FsResult<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| FsError::UnknownScenario(name.to_owned()))
    }

    /// The dispenser layout of this scenario.  Fuel labels are `A` and `B`.
    pub fn dispensers(self) -> Vec<DispenserSpec> {
        match self {
            Scenario::Default => vec![
                DispenserSpec::new(0, &["A"]),
                DispenserSpec::new(1, &["A"]),
                DispenserSpec::new(2, &["A", "B"]),
                DispenserSpec::new(3, &["B"]),
            ],
            Scenario::SinglePump => vec![DispenserSpec::new(0, &["A", "B"])],
            Scenario::Dedicated => vec![
                DispenserSpec::new(0, &["A"]),
                DispenserSpec::new(1, &["A"]),
                DispenserSpec::new(2, &["B"]),
            ],
            Scenario::AllMixed => (0..4).map(|id| DispenserSpec::new(id, &["A", "B"])).collect(),
            Scenario::NoDispensers => vec![],
        }
    }
}

impl FromStr for Scenario {
    type Err = FsError;

    fn from_str(s: &str) -> FsResult<Self> {
        Scenario::from_name(s)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
