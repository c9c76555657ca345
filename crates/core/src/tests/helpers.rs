// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{RosterState, SlotRef};
use shift_roster_audit::{Actor, Cause};
use shift_roster_domain::{
    AvailabilityStatus, Employee, Roster, Schedule, ShiftKind, WeekConfig, WeekView, Weekday,
};

pub fn test_actor() -> Actor {
    Actor::new(String::from("manager-1"), String::from("user"))
}

pub fn test_cause() -> Cause {
    Cause::new(String::from("req-1"), String::from("Test request"))
}

pub fn employee(name: &str) -> Employee {
    Employee::new(name).unwrap()
}

pub const fn slot(day: Weekday, kind: ShiftKind) -> SlotRef {
    SlotRef::new(day, kind)
}

/// A state with roster `[Avi, Bea]` and two fresh weeks.
pub fn test_state() -> RosterState {
    let config: WeekConfig = WeekConfig::default();
    let roster: Roster = Roster::from_names(["Avi", "Bea"]).unwrap();
    let current: Schedule = Schedule::initial(config, &roster);
    let next: Schedule = Schedule::initial(config, &roster);
    RosterState::from_parts(config, roster, current, next)
}

pub fn status_of(
    state: &RosterState,
    week: WeekView,
    at: SlotRef,
    name: &str,
) -> AvailabilityStatus {
    state
        .schedule(week)
        .slot(at.day, at.kind)
        .unwrap()
        .entry(&employee(name))
        .unwrap()
        .status
}
