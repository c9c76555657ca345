// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shift_roster::RosterState;
use shift_roster_audit::{Actor, Cause};
use shift_roster_domain::{Roster, Schedule, WeekConfig};
use shift_roster_persistence::Persistence;

pub fn test_actor() -> Actor {
    Actor::new(String::from("manager-1"), String::from("user"))
}

pub fn test_cause() -> Cause {
    Cause::new(String::from("req-1"), String::from("Test request"))
}

pub fn test_state() -> RosterState {
    let config: WeekConfig = WeekConfig::default();
    let roster: Roster = Roster::from_names(["Avi", "Bea"]).unwrap();
    let current: Schedule = Schedule::initial(config, &roster);
    let next: Schedule = Schedule::initial(config, &roster);
    RosterState::from_parts(config, roster, current, next)
}

pub fn test_persistence() -> Persistence {
    Persistence::new_in_memory().unwrap()
}
