// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod schedule;
mod status;
mod types;
mod unfilled;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use schedule::{DaySchedule, Schedule, ShiftSlot};
pub use status::AvailabilityStatus;
pub use types::{Employee, EmployeeAvailability, Roster, ShiftKind, WeekConfig, WeekView, Weekday};
pub use unfilled::{UnfilledShift, has_unfilled_shifts, unfilled_shifts};
pub use validation::{reconcile, validate_schedule};
