// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use shift_roster_domain::{Schedule, ShiftKind, Weekday};

/// API request addressing one entry of one slot.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EntryRequest {
    /// The day of the target slot.
    pub day: Weekday,
    /// The shift kind of the target slot.
    pub shift: ShiftKind,
    /// The target employee's name.
    pub employee: String,
}

/// API request to move an employee between two slots of one week.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MoveRequest {
    /// The employee being moved.
    pub employee: String,
    /// The day of the slot the employee leaves.
    pub from_day: Weekday,
    /// The shift kind of the slot the employee leaves.
    pub from_shift: ShiftKind,
    /// The day of the slot the employee becomes available in.
    pub to_day: Weekday,
    /// The shift kind of the slot the employee becomes available in.
    pub to_shift: ShiftKind,
}

/// API request to add or remove one roster employee.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RosterEditRequest {
    /// The employee name.
    pub name: String,
}

/// API request to replace one week's schedule with a producer's output.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReplaceScheduleRequest {
    /// The full replacement schedule.
    pub schedule: Schedule,
    /// Which producer supplied the schedule.
    pub origin: String,
}

/// API response for a successful mutation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MutationResponse {
    /// A success message.
    pub message: String,
    /// The event ID of the persisted audit event.
    pub event_id: i64,
}

/// API response carrying the roster.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RosterResponse {
    /// The roster names in insertion order.
    pub employees: Vec<String>,
}

/// API response carrying one week's schedule.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScheduleResponse {
    /// The week selector as a string.
    pub week: String,
    /// The week's schedule.
    pub schedule: Schedule,
}

/// One unfilled shift in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UnfilledShiftInfo {
    /// The day of the unfilled slot.
    pub day: Weekday,
    /// The shift kind of the unfilled slot.
    pub shift: ShiftKind,
}

/// API response listing the shifts of one week with no assignee.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UnfilledResponse {
    /// The week selector as a string.
    pub week: String,
    /// The unfilled shifts in calendar order, morning before evening.
    pub unfilled: Vec<UnfilledShiftInfo>,
}
