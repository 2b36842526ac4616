//! Results of cost checks and payments.

use crate::spell::Coordinate;

/// Result of asking whether a character can pay for a skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Affordability {
    /// The skill is outside the system; only the host's own cost check applies.
    Unmanaged,
    /// At least one use remains at the coordinate.
    Available(Coordinate),
    /// The coordinate has no uses left.
    Exhausted(Coordinate),
}

impl Affordability {
    /// Combines the usage check with the host's own (MP/TP) check.
    pub const fn allows(self, host_ok: bool) -> bool {
        match self {
            Self::Unmanaged | Self::Available(_) => host_ok,
            Self::Exhausted(_) => false,
        }
    }

    pub const fn coordinate(self) -> Option<Coordinate> {
        match self {
            Self::Unmanaged => None,
            Self::Available(coordinate) | Self::Exhausted(coordinate) => Some(coordinate),
        }
    }

    pub const fn is_managed(self) -> bool {
        !matches!(self, Self::Unmanaged)
    }
}

/// Result of a successful payment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Payment {
    /// Nothing was spent; the skill is not managed.
    Unmanaged,
    /// One use was spent at `coordinate`.
    Spent { coordinate: Coordinate, remaining: u32 },
}

impl Payment {
    pub const fn remaining(self) -> Option<u32> {
        match self {
            Self::Unmanaged => None,
            Self::Spent { remaining, .. } => Some(remaining),
        }
    }
}
