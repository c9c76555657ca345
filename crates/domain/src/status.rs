// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The availability state of one employee for one shift slot.
///
/// Exactly one status holds per (employee, day, shift) triple at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityStatus {
    /// The employee can work this shift.
    Available,
    /// The employee cannot work this shift.
    Unavailable,
    /// No information has been entered yet.
    #[default]
    Unknown,
    /// The employee is the one assigned to work this shift.
    Assigned,
}

impl AvailabilityStatus {
    /// Applies the manual cycle transition triggered by a direct user click.
    ///
    /// Valid transitions are:
    /// - `Available` → `Unavailable`
    /// - `Unavailable` → `Unknown`
    /// - `Unknown` → `Available`
    /// - `Assigned` → `Available` (cycling out of an assignment always lands
    ///   on `Available`, never back into `Assigned`)
    #[must_use]
    pub const fn cycled(self) -> Self {
        match self {
            Self::Available => Self::Unavailable,
            Self::Unavailable => Self::Unknown,
            Self::Unknown | Self::Assigned => Self::Available,
        }
    }

    /// Applies the assignment toggle.
    ///
    /// An `Assigned` entry becomes `Available`; any other status becomes
    /// `Assigned`. Single-assignee enforcement is the mutation engine's
    /// job, not this transition's.
    #[must_use]
    pub const fn toggled_assignment(self) -> Self {
        match self {
            Self::Assigned => Self::Available,
            _ => Self::Assigned,
        }
    }

    /// Returns whether this status is `Assigned`.
    #[must_use]
    pub const fn is_assigned(self) -> bool {
        matches!(self, Self::Assigned)
    }

    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Unavailable => "unavailable",
            Self::Unknown => "unknown",
            Self::Assigned => "assigned",
        }
    }
}

impl FromStr for AvailabilityStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "unavailable" => Ok(Self::Unavailable),
            "unknown" => Ok(Self::Unknown),
            "assigned" => Ok(Self::Assigned),
            _ => Err(DomainError::UnknownStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
