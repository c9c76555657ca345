// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::status::AvailabilityStatus;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The six working days of the week, in calendar order.
///
/// The week runs Sunday through Friday; Saturday is not scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All working days in calendar order.
    pub const ALL: [Self; 6] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
    ];

    /// Converts this weekday to its string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sunday => "sunday",
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
        }
    }
}

impl FromStr for Weekday {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sunday" => Ok(Self::Sunday),
            "monday" => Ok(Self::Monday),
            "tuesday" => Ok(Self::Tuesday),
            "wednesday" => Ok(Self::Wednesday),
            "thursday" => Ok(Self::Thursday),
            "friday" => Ok(Self::Friday),
            _ => Err(DomainError::UnknownWeekday(s.to_string())),
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The two shift slots a day can carry, ordered morning before evening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftKind {
    Morning,
    Evening,
}

impl ShiftKind {
    /// Converts this shift kind to its string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Evening => "evening",
        }
    }
}

impl FromStr for ShiftKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "morning" => Ok(Self::Morning),
            "evening" => Ok(Self::Evening),
            _ => Err(DomainError::UnknownShiftKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Selects one of the two independently scheduled weeks.
///
/// The string forms double as the fixed persistence cache keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekView {
    /// The week currently being worked.
    Current,
    /// The week being planned.
    Next,
}

impl WeekView {
    /// Both week selectors.
    pub const ALL: [Self; 2] = [Self::Current, Self::Next];

    /// Converts this week selector to its string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Next => "next",
        }
    }
}

impl FromStr for WeekView {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "current" => Ok(Self::Current),
            "next" => Ok(Self::Next),
            _ => Err(DomainError::UnknownWeek(s.to_string())),
        }
    }
}

impl std::fmt::Display for WeekView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Shape configuration for a scheduling week.
///
/// The original system hard-coded Friday as the half-day; making it
/// explicit configuration keeps the exception statically checkable
/// instead of a runtime key-membership test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekConfig {
    /// The single weekday that has only a morning slot.
    half_day: Weekday,
}

impl WeekConfig {
    /// Creates a week configuration with the given half-day.
    #[must_use]
    pub const fn new(half_day: Weekday) -> Self {
        Self { half_day }
    }

    /// Returns the configured half-day.
    #[must_use]
    pub const fn half_day(self) -> Weekday {
        self.half_day
    }

    /// Returns whether the given day carries an evening slot.
    #[must_use]
    pub fn has_evening(self, day: Weekday) -> bool {
        day != self.half_day
    }
}

impl Default for WeekConfig {
    fn default() -> Self {
        Self::new(Weekday::Friday)
    }
}

/// An employee identifier.
///
/// Names are trimmed on construction; an empty or whitespace-only name
/// is rejected. Equality is exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Employee {
    name: String,
}

impl Employee {
    /// Creates a new `Employee`.
    ///
    /// # Arguments
    ///
    /// * `name` - The employee's name (will be trimmed)
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed name is empty.
    pub fn new(name: &str) -> Result<Self, DomainError> {
        let trimmed: &str = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidEmployeeName(name.to_string()));
        }
        Ok(Self {
            name: trimmed.to_string(),
        })
    }

    /// Returns the employee's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Employee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// One employee's availability for one shift slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeAvailability {
    /// The employee this entry belongs to.
    pub employee: Employee,
    /// The current availability status.
    pub status: AvailabilityStatus,
    /// Free-form notes attached to this entry.
    ///
    /// Only the move operation ever clears notes; no status transition
    /// touches them.
    pub notes: String,
}

impl EmployeeAvailability {
    /// Creates a fresh entry: status `Unknown`, empty notes.
    #[must_use]
    pub const fn initial(employee: Employee) -> Self {
        Self {
            employee,
            status: AvailabilityStatus::Unknown,
            notes: String::new(),
        }
    }

    /// Returns a copy of this entry with the given status.
    #[must_use]
    pub fn with_status(&self, status: AvailabilityStatus) -> Self {
        Self {
            employee: self.employee.clone(),
            status,
            notes: self.notes.clone(),
        }
    }
}

/// The ordered set of currently known employee names.
///
/// The roster is shared by both week schedules; every slot of every
/// schedule must carry exactly one entry per roster employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    /// Creates an empty roster.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            employees: Vec::new(),
        }
    }

    /// Builds a roster from a list of names, preserving order.
    ///
    /// # Errors
    ///
    /// Returns an error if any name is invalid or duplicated.
    pub fn from_names<I, S>(names: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roster: Self = Self::new();
        for name in names {
            let employee: Employee = Employee::new(name.as_ref())?;
            roster = roster.with_added(employee)?;
        }
        Ok(roster)
    }

    /// Returns whether the roster contains the given employee.
    #[must_use]
    pub fn contains(&self, employee: &Employee) -> bool {
        self.employees.contains(employee)
    }

    /// Returns a new roster with the employee appended.
    ///
    /// # Errors
    ///
    /// Returns an error if the employee is already present.
    pub fn with_added(&self, employee: Employee) -> Result<Self, DomainError> {
        if self.contains(&employee) {
            return Err(DomainError::DuplicateEmployee(employee.name().to_string()));
        }
        let mut employees: Vec<Employee> = self.employees.clone();
        employees.push(employee);
        Ok(Self { employees })
    }

    /// Returns a new roster with the employee removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the employee is not present.
    pub fn with_removed(&self, employee: &Employee) -> Result<Self, DomainError> {
        if !self.contains(employee) {
            return Err(DomainError::EmployeeNotFound(employee.name().to_string()));
        }
        let employees: Vec<Employee> = self
            .employees
            .iter()
            .filter(|e| *e != employee)
            .cloned()
            .collect();
        Ok(Self { employees })
    }

    /// Iterates over the roster in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.employees.iter()
    }

    /// Returns the number of employees.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns whether the roster is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.employees.iter()
    }
}
