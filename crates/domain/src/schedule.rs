// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::status::AvailabilityStatus;
use crate::types::{Employee, EmployeeAvailability, Roster, ShiftKind, WeekConfig, Weekday};
use serde::{Deserialize, Serialize};

/// One addressable (day, shift-kind) unit holding one entry per roster
/// employee, in roster order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ShiftSlot {
    entries: Vec<EmployeeAvailability>,
}

impl ShiftSlot {
    /// Builds a fresh slot for the roster: every entry `Unknown`, notes empty.
    #[must_use]
    pub fn initial(roster: &Roster) -> Self {
        Self {
            entries: roster
                .iter()
                .cloned()
                .map(EmployeeAvailability::initial)
                .collect(),
        }
    }

    /// Builds a slot from existing entries. Validation is the caller's job.
    #[must_use]
    pub const fn from_entries(entries: Vec<EmployeeAvailability>) -> Self {
        Self { entries }
    }

    /// Returns the entry for the given employee, if present.
    #[must_use]
    pub fn entry(&self, employee: &Employee) -> Option<&EmployeeAvailability> {
        self.entries.iter().find(|e| &e.employee == employee)
    }

    /// Returns the entry currently marked `Assigned`, if any.
    #[must_use]
    pub fn assigned(&self) -> Option<&EmployeeAvailability> {
        self.entries.iter().find(|e| e.status.is_assigned())
    }

    /// Counts the entries currently marked `Assigned`.
    #[must_use]
    pub fn assigned_count(&self) -> usize {
        self.entries.iter().filter(|e| e.status.is_assigned()).count()
    }

    /// Iterates over the slot's entries in roster order.
    pub fn iter(&self) -> std::slice::Iter<'_, EmployeeAvailability> {
        self.entries.iter()
    }

    /// Returns the number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the slot has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a copy of this slot with one employee's entry rewritten by
    /// the given function. Returns `None` if the employee has no entry.
    ///
    /// The original slot is never mutated.
    #[must_use]
    pub fn with_entry<F>(&self, employee: &Employee, rewrite: F) -> Option<Self>
    where
        F: FnOnce(&EmployeeAvailability) -> EmployeeAvailability,
    {
        let index: usize = self.entries.iter().position(|e| &e.employee == employee)?;
        let mut entries: Vec<EmployeeAvailability> = self.entries.clone();
        entries[index] = rewrite(&entries[index]);
        Some(Self { entries })
    }

    /// Returns a copy of this slot with every `Assigned` entry other than
    /// the given employee demoted to `Available`.
    #[must_use]
    pub fn with_others_demoted(&self, keep: &Employee) -> Self {
        let entries: Vec<EmployeeAvailability> = self
            .entries
            .iter()
            .map(|e| {
                if e.status.is_assigned() && &e.employee != keep {
                    e.with_status(AvailabilityStatus::Available)
                } else {
                    e.clone()
                }
            })
            .collect();
        Self { entries }
    }

    /// Returns a copy of this slot with a fresh entry for the employee
    /// appended.
    #[must_use]
    pub fn with_appended(&self, employee: Employee) -> Self {
        let mut entries: Vec<EmployeeAvailability> = self.entries.clone();
        entries.push(EmployeeAvailability::initial(employee));
        Self { entries }
    }

    /// Returns a copy of this slot without the employee's entry.
    #[must_use]
    pub fn without(&self, employee: &Employee) -> Self {
        let entries: Vec<EmployeeAvailability> = self
            .entries
            .iter()
            .filter(|e| &e.employee != employee)
            .cloned()
            .collect();
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a ShiftSlot {
    type Item = &'a EmployeeAvailability;
    type IntoIter = std::slice::Iter<'a, EmployeeAvailability>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// The slots of one day.
///
/// `evening` is `None` exactly on the configured half-day; the shape
/// exception lives in the type instead of a runtime key test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    /// The morning slot, present on every day.
    pub morning: ShiftSlot,
    /// The evening slot, absent on the half-day.
    pub evening: Option<ShiftSlot>,
}

impl DaySchedule {
    /// Builds a fresh day for the roster, with or without an evening slot.
    #[must_use]
    pub fn initial(roster: &Roster, has_evening: bool) -> Self {
        Self {
            morning: ShiftSlot::initial(roster),
            evening: has_evening.then(|| ShiftSlot::initial(roster)),
        }
    }

    /// Returns the slot of the given kind, if the day carries it.
    #[must_use]
    pub const fn slot(&self, kind: ShiftKind) -> Option<&ShiftSlot> {
        match kind {
            ShiftKind::Morning => Some(&self.morning),
            ShiftKind::Evening => self.evening.as_ref(),
        }
    }

    /// Returns a copy of this day with the slot of the given kind replaced.
    /// Returns `None` if the day does not carry that slot.
    #[must_use]
    pub fn with_slot(&self, kind: ShiftKind, slot: ShiftSlot) -> Option<Self> {
        match kind {
            ShiftKind::Morning => Some(Self {
                morning: slot,
                evening: self.evening.clone(),
            }),
            ShiftKind::Evening => self.evening.as_ref().map(|_| Self {
                morning: self.morning.clone(),
                evening: Some(slot),
            }),
        }
    }

    /// Iterates over the day's slots, morning first.
    pub fn slots(&self) -> impl Iterator<Item = (ShiftKind, &ShiftSlot)> {
        std::iter::once((ShiftKind::Morning, &self.morning)).chain(
            self.evening
                .iter()
                .map(|slot| (ShiftKind::Evening, slot)),
        )
    }
}

/// A complete week snapshot: every configured day present, every slot
/// carrying exactly one entry per roster employee.
///
/// A `Schedule` value is immutable in effect: every editing helper
/// returns a new snapshot and leaves the receiver untouched, so two
/// week snapshots never share mutable structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    days: Vec<(Weekday, DaySchedule)>,
}

impl Schedule {
    /// Builds a fresh schedule from the current roster: all statuses
    /// `Unknown`, all notes empty, day set and order from the config.
    #[must_use]
    pub fn initial(config: WeekConfig, roster: &Roster) -> Self {
        Self {
            days: Weekday::ALL
                .into_iter()
                .map(|day| (day, DaySchedule::initial(roster, config.has_evening(day))))
                .collect(),
        }
    }

    /// Builds a schedule from existing day entries. Validation is the
    /// caller's job.
    #[must_use]
    pub const fn from_days(days: Vec<(Weekday, DaySchedule)>) -> Self {
        Self { days }
    }

    /// Returns the day schedule for the given day, if present.
    #[must_use]
    pub fn day(&self, day: Weekday) -> Option<&DaySchedule> {
        self.days.iter().find(|(d, _)| *d == day).map(|(_, ds)| ds)
    }

    /// Returns the slot at the given coordinates, if it exists.
    #[must_use]
    pub fn slot(&self, day: Weekday, kind: ShiftKind) -> Option<&ShiftSlot> {
        self.day(day).and_then(|ds| ds.slot(kind))
    }

    /// Iterates over the days in calendar order.
    pub fn days(&self) -> impl Iterator<Item = (Weekday, &DaySchedule)> {
        self.days.iter().map(|(day, ds)| (*day, ds))
    }

    /// Returns a copy of this schedule with one slot replaced, rewriting
    /// only the touched day. Returns `None` if the coordinates do not
    /// address an existing slot.
    #[must_use]
    pub fn with_slot(&self, day: Weekday, kind: ShiftKind, slot: ShiftSlot) -> Option<Self> {
        let index: usize = self.days.iter().position(|(d, _)| *d == day)?;
        let new_day: DaySchedule = self.days[index].1.with_slot(kind, slot)?;
        let mut days: Vec<(Weekday, DaySchedule)> = self.days.clone();
        days[index] = (day, new_day);
        Some(Self { days })
    }

    /// Returns a copy of this schedule with one employee's entry in one
    /// slot rewritten by the given function. Returns `None` if the
    /// coordinates or the employee do not resolve.
    #[must_use]
    pub fn with_entry<F>(
        &self,
        day: Weekday,
        kind: ShiftKind,
        employee: &Employee,
        rewrite: F,
    ) -> Option<Self>
    where
        F: FnOnce(&EmployeeAvailability) -> EmployeeAvailability,
    {
        let slot: &ShiftSlot = self.slot(day, kind)?;
        let new_slot: ShiftSlot = slot.with_entry(employee, rewrite)?;
        self.with_slot(day, kind, new_slot)
    }

    /// Returns a copy of this schedule with a fresh entry for the employee
    /// appended to every slot.
    #[must_use]
    pub fn with_employee_appended(&self, employee: &Employee) -> Self {
        self.map_slots(|slot| slot.with_appended(employee.clone()))
    }

    /// Returns a copy of this schedule with the employee's entry removed
    /// from every slot.
    #[must_use]
    pub fn without_employee(&self, employee: &Employee) -> Self {
        self.map_slots(|slot| slot.without(employee))
    }

    fn map_slots<F>(&self, rewrite: F) -> Self
    where
        F: Fn(&ShiftSlot) -> ShiftSlot,
    {
        let days: Vec<(Weekday, DaySchedule)> = self
            .days
            .iter()
            .map(|(day, ds)| {
                (
                    *day,
                    DaySchedule {
                        morning: rewrite(&ds.morning),
                        evening: ds.evening.as_ref().map(&rewrite),
                    },
                )
            })
            .collect();
        Self { days }
    }
}
