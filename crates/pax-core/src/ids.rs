//! Passenger identifier.

use std::fmt;

/// Position of a passenger in its roster.
///
/// Handed out in order when the roster is built and never reused while that
/// roster lives.  Use [`PassengerId::index`] to index roster storage.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassengerId(pub u32);

impl PassengerId {
    /// Placeholder for "no passenger".  Never handed out by a roster.
    pub const INVALID: PassengerId = PassengerId(u32::MAX);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for PassengerId {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for PassengerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PassengerId({})", self.0)
    }
}

impl TryFrom<usize> for PassengerId {
    type Error = std::num::TryFromIntError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        u32::try_from(index).map(PassengerId)
    }
}
