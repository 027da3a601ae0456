//! Opaque vehicle identity.

use std::fmt;

/// A vehicle, identified only by its plate.
///
/// The simulator never inspects or validates the plate; two vehicles are the
/// same vehicle iff their plates are equal.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    plate: String,
}

impl Vehicle {
    pub fn new(plate: impl Into<String>) -> Self {
        Self { plate: plate.into() }
    }

    #[inline]
    pub fn plate(&self) -> &str {
        &self.plate
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.plate)
    }
}
