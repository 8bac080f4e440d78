//! Fuel type labels.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A fuel label such as `"A"` or `"diesel"`.
///
/// Labels are shared (`Arc<str>`), so cloning one onto every generated car
/// and into every snapshot is a reference-count bump, not an allocation.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct FuelType(Arc<str>);

impl FuelType {
    pub fn new(label: &str) -> Self {
        FuelType(Arc::from(label))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FuelType {
    fn from(label: &str) -> Self {
        FuelType::new(label)
    }
}

impl From<String> for FuelType {
    fn from(label: String) -> Self {
        FuelType(Arc::from(label))
    }
}

impl AsRef<str> for FuelType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for FuelType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for FuelType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(FuelType::from)
    }
}
