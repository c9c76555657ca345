// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::schedule::{DaySchedule, Schedule, ShiftSlot};
use crate::types::{EmployeeAvailability, Roster, ShiftKind, WeekConfig, Weekday};
use std::collections::HashSet;

/// Validates a schedule against the completeness, single-assignee, and
/// half-day-shape invariants.
///
/// Checked, in order, for every configured day:
/// - the day is present;
/// - the half-day has no evening slot and every other day has one;
/// - each slot carries exactly one entry per roster employee (no
///   missing, no extra, no duplicate entries);
/// - each slot has at most one `Assigned` entry.
///
/// # Errors
///
/// Returns the first violation found as a typed `DomainError`.
pub fn validate_schedule(
    schedule: &Schedule,
    roster: &Roster,
    config: WeekConfig,
) -> Result<(), DomainError> {
    for day in Weekday::ALL {
        let Some(day_schedule) = schedule.day(day) else {
            return Err(DomainError::MissingDay(day));
        };

        match (config.has_evening(day), day_schedule.evening.is_some()) {
            (false, true) => return Err(DomainError::UnexpectedEveningSlot(day)),
            (true, false) => return Err(DomainError::MissingEveningSlot(day)),
            _ => {}
        }

        for (kind, slot) in day_schedule.slots() {
            validate_slot(slot, roster, day, kind)?;
        }
    }
    Ok(())
}

fn validate_slot(
    slot: &ShiftSlot,
    roster: &Roster,
    day: Weekday,
    kind: ShiftKind,
) -> Result<(), DomainError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for entry in slot {
        if !roster.contains(&entry.employee) {
            return Err(DomainError::UnexpectedEntry {
                day,
                kind,
                employee: entry.employee.name().to_string(),
            });
        }
        if !seen.insert(entry.employee.name()) {
            return Err(DomainError::DuplicateEntry {
                day,
                kind,
                employee: entry.employee.name().to_string(),
            });
        }
    }
    for employee in roster {
        if !seen.contains(employee.name()) {
            return Err(DomainError::MissingEntry {
                day,
                kind,
                employee: employee.name().to_string(),
            });
        }
    }
    if slot.assigned_count() > 1 {
        return Err(DomainError::MultipleAssignees { day, kind });
    }
    Ok(())
}

/// Rebuilds a possibly-stale schedule into one that satisfies the
/// completeness and shape invariants for the given roster and config.
///
/// Used when initializing from a persisted snapshot whose shape may
/// predate roster or configuration changes. Statuses and notes of
/// surviving entries are preserved; missing employees gain fresh
/// `Unknown` entries; entries for unknown employees are dropped; slot
/// order is normalized to roster order and the day set to config order.
#[must_use]
pub fn reconcile(schedule: &Schedule, roster: &Roster, config: WeekConfig) -> Schedule {
    let days: Vec<(Weekday, DaySchedule)> = Weekday::ALL
        .into_iter()
        .map(|day| {
            let existing: Option<&DaySchedule> = schedule.day(day);
            let morning: ShiftSlot =
                reconcile_slot(existing.map(|ds| &ds.morning), roster);
            let evening: Option<ShiftSlot> = config.has_evening(day).then(|| {
                reconcile_slot(existing.and_then(|ds| ds.evening.as_ref()), roster)
            });
            (day, DaySchedule { morning, evening })
        })
        .collect();
    Schedule::from_days(days)
}

fn reconcile_slot(slot: Option<&ShiftSlot>, roster: &Roster) -> ShiftSlot {
    let entries: Vec<EmployeeAvailability> = roster
        .iter()
        .map(|employee| {
            slot.and_then(|s| s.entry(employee)).map_or_else(
                || EmployeeAvailability::initial(employee.clone()),
                Clone::clone,
            )
        })
        .collect();
    ShiftSlot::from_entries(entries)
}
