// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shift_roster_domain::{Employee, Schedule, ShiftKind, WeekView, Weekday};

/// The coordinates of one shift slot within a week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRef {
    /// The day of the slot.
    pub day: Weekday,
    /// The shift kind of the slot.
    pub kind: ShiftKind,
}

impl SlotRef {
    /// Creates a new `SlotRef`.
    #[must_use]
    pub const fn new(day: Weekday, kind: ShiftKind) -> Self {
        Self { day, kind }
    }
}

impl std::fmt::Display for SlotRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.day, self.kind)
    }
}

/// A command represents user or producer intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Apply the manual availability cycle to one entry.
    ToggleStatus {
        /// The week being edited.
        week: WeekView,
        /// The target slot.
        slot: SlotRef,
        /// The target employee.
        employee: Employee,
    },
    /// Toggle the assignment of one entry, demoting any other assignee
    /// in the same slot.
    Assign {
        /// The week being edited.
        week: WeekView,
        /// The target slot.
        slot: SlotRef,
        /// The target employee.
        employee: Employee,
    },
    /// Force one entry to `Available`, whatever its current status.
    EnsureAvailable {
        /// The week being edited.
        week: WeekView,
        /// The target slot.
        slot: SlotRef,
        /// The target employee.
        employee: Employee,
    },
    /// Pull an employee out of one slot and place them as a candidate
    /// in another.
    MoveEmployee {
        /// The week being edited.
        week: WeekView,
        /// The employee being moved.
        employee: Employee,
        /// The slot the employee is leaving.
        source: SlotRef,
        /// The slot the employee becomes available in.
        destination: SlotRef,
    },
    /// Add an employee to the roster and to every slot of both weeks.
    AddEmployee {
        /// The employee to add.
        employee: Employee,
    },
    /// Remove an employee from the roster and from every slot of both
    /// weeks.
    RemoveEmployee {
        /// The employee to remove.
        employee: Employee,
    },
    /// Replace one week's schedule with a freshly built one.
    ResetWeek {
        /// The week to reset.
        week: WeekView,
    },
    /// Replace one week's schedule with a producer-supplied one.
    ReplaceSchedule {
        /// The week being replaced.
        week: WeekView,
        /// The replacement schedule.
        schedule: Schedule,
        /// Which producer supplied the schedule (e.g. "interpreter",
        /// "generator").
        origin: String,
    },
}

impl Command {
    /// Returns the action name recorded in the audit trail.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ToggleStatus { .. } => "ToggleStatus",
            Self::Assign { .. } => "Assign",
            Self::EnsureAvailable { .. } => "EnsureAvailable",
            Self::MoveEmployee { .. } => "MoveEmployee",
            Self::AddEmployee { .. } => "AddEmployee",
            Self::RemoveEmployee { .. } => "RemoveEmployee",
            Self::ResetWeek { .. } => "ResetWeek",
            Self::ReplaceSchedule { .. } => "ReplaceSchedule",
        }
    }

    /// Returns the week this command edits, or `None` for roster-wide
    /// commands that touch both weeks.
    #[must_use]
    pub const fn week(&self) -> Option<WeekView> {
        match self {
            Self::ToggleStatus { week, .. }
            | Self::Assign { week, .. }
            | Self::EnsureAvailable { week, .. }
            | Self::MoveEmployee { week, .. }
            | Self::ResetWeek { week }
            | Self::ReplaceSchedule { week, .. } => Some(*week),
            Self::AddEmployee { .. } | Self::RemoveEmployee { .. } => None,
        }
    }
}
