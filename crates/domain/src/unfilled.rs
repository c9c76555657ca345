// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::schedule::Schedule;
use crate::types::{ShiftKind, Weekday};
use serde::Serialize;

/// A shift slot with no assigned employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnfilledShift {
    /// The day of the unfilled slot.
    pub day: Weekday,
    /// The shift kind of the unfilled slot.
    pub kind: ShiftKind,
}

/// Collects every slot of the schedule that has no `Assigned` entry.
///
/// Results are ordered by calendar day, morning before evening within a
/// day. A slot with zero entries counts as unfilled.
#[must_use]
pub fn unfilled_shifts(schedule: &Schedule) -> Vec<UnfilledShift> {
    schedule
        .days()
        .flat_map(|(day, day_schedule)| {
            day_schedule
                .slots()
                .filter(|(_, slot)| slot.assigned().is_none())
                .map(move |(kind, _)| UnfilledShift { day, kind })
        })
        .collect()
}

/// Returns whether the schedule has at least one slot with no assignee.
#[must_use]
pub fn has_unfilled_shifts(schedule: &Schedule) -> bool {
    schedule
        .days()
        .any(|(_, day_schedule)| day_schedule.slots().any(|(_, slot)| slot.assigned().is_none()))
}
