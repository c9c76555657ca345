// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{ShiftKind, Weekday};

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Employee name is empty or whitespace-only.
    InvalidEmployeeName(String),
    /// Employee already exists in the roster.
    DuplicateEmployee(String),
    /// Employee does not exist in the roster.
    EmployeeNotFound(String),
    /// The string is not a recognized weekday label.
    UnknownWeekday(String),
    /// The string is not a recognized shift kind.
    UnknownShiftKind(String),
    /// The string is not a recognized availability status.
    UnknownStatus(String),
    /// The string is not a recognized week selector.
    UnknownWeek(String),
    /// A day required by the week configuration is missing from the schedule.
    MissingDay(Weekday),
    /// A slot is missing an entry for a roster employee.
    MissingEntry {
        /// The day of the incomplete slot.
        day: Weekday,
        /// The shift kind of the incomplete slot.
        kind: ShiftKind,
        /// The roster employee with no entry.
        employee: String,
    },
    /// A slot contains an entry for an employee not in the roster.
    UnexpectedEntry {
        /// The day of the offending slot.
        day: Weekday,
        /// The shift kind of the offending slot.
        kind: ShiftKind,
        /// The name that does not appear in the roster.
        employee: String,
    },
    /// A slot contains a duplicate entry for one employee.
    DuplicateEntry {
        /// The day of the offending slot.
        day: Weekday,
        /// The shift kind of the offending slot.
        kind: ShiftKind,
        /// The duplicated name.
        employee: String,
    },
    /// More than one entry in a slot is marked `Assigned`.
    MultipleAssignees {
        /// The day of the offending slot.
        day: Weekday,
        /// The shift kind of the offending slot.
        kind: ShiftKind,
    },
    /// The half-day carries an evening slot it must not have.
    UnexpectedEveningSlot(Weekday),
    /// A full day is missing its evening slot.
    MissingEveningSlot(Weekday),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEmployeeName(name) => {
                write!(f, "Invalid employee name: '{name}'")
            }
            Self::DuplicateEmployee(name) => {
                write!(f, "Employee '{name}' already exists in the roster")
            }
            Self::EmployeeNotFound(name) => {
                write!(f, "Employee '{name}' not found in the roster")
            }
            Self::UnknownWeekday(s) => write!(f, "Unknown weekday: {s}"),
            Self::UnknownShiftKind(s) => write!(f, "Unknown shift kind: {s}"),
            Self::UnknownStatus(s) => write!(f, "Unknown availability status: {s}"),
            Self::UnknownWeek(s) => write!(f, "Unknown week selector: {s}"),
            Self::MissingDay(day) => write!(f, "Schedule is missing day {day}"),
            Self::MissingEntry {
                day,
                kind,
                employee,
            } => {
                write!(f, "Slot {day}/{kind} has no entry for employee '{employee}'")
            }
            Self::UnexpectedEntry {
                day,
                kind,
                employee,
            } => {
                write!(
                    f,
                    "Slot {day}/{kind} has an entry for '{employee}', who is not in the roster"
                )
            }
            Self::DuplicateEntry {
                day,
                kind,
                employee,
            } => {
                write!(f, "Slot {day}/{kind} has duplicate entries for '{employee}'")
            }
            Self::MultipleAssignees { day, kind } => {
                write!(f, "Slot {day}/{kind} has more than one assigned employee")
            }
            Self::UnexpectedEveningSlot(day) => {
                write!(f, "Half-day {day} must not have an evening slot")
            }
            Self::MissingEveningSlot(day) => {
                write!(f, "Day {day} is missing its evening slot")
            }
        }
    }
}

impl std::error::Error for DomainError {}
