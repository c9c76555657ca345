// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shift_roster_audit::{AuditEvent, StateSnapshot};
use shift_roster_domain::{Roster, Schedule, WeekConfig, WeekView, unfilled_shifts};

/// The complete scheduler state: the shared roster plus the two
/// independently scheduled weeks.
///
/// The two week schedules are exclusively owned values; no operation
/// mutates both except the roster edits, which rebuild both in one
/// transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterState {
    /// The week shape configuration shared by both weeks.
    pub config: WeekConfig,
    /// The ordered set of known employees, shared by both weeks.
    pub roster: Roster,
    /// The schedule of the week currently being worked.
    pub current: Schedule,
    /// The schedule of the week being planned.
    pub next: Schedule,
}

impl RosterState {
    /// Creates a fresh state with an empty roster and two freshly built
    /// week schedules.
    #[must_use]
    pub fn new(config: WeekConfig) -> Self {
        let roster: Roster = Roster::new();
        let current: Schedule = Schedule::initial(config, &roster);
        let next: Schedule = Schedule::initial(config, &roster);
        Self {
            config,
            roster,
            current,
            next,
        }
    }

    /// Assembles a state from already-validated parts.
    #[must_use]
    pub const fn from_parts(
        config: WeekConfig,
        roster: Roster,
        current: Schedule,
        next: Schedule,
    ) -> Self {
        Self {
            config,
            roster,
            current,
            next,
        }
    }

    /// Returns the schedule of the selected week.
    #[must_use]
    pub const fn schedule(&self, week: WeekView) -> &Schedule {
        match week {
            WeekView::Current => &self.current,
            WeekView::Next => &self.next,
        }
    }

    /// Returns a copy of this state with one week's schedule replaced.
    /// The other week is carried over untouched.
    #[must_use]
    pub fn with_schedule(&self, week: WeekView, schedule: Schedule) -> Self {
        match week {
            WeekView::Current => Self {
                config: self.config,
                roster: self.roster.clone(),
                current: schedule,
                next: self.next.clone(),
            },
            WeekView::Next => Self {
                config: self.config,
                roster: self.roster.clone(),
                current: self.current.clone(),
                next: schedule,
            },
        }
    }

    /// Converts the state to a snapshot for audit purposes.
    ///
    /// Full week payloads are too large for the audit trail; the
    /// snapshot records the roster size and per-week unfilled counts.
    #[must_use]
    pub fn to_snapshot(&self) -> StateSnapshot {
        StateSnapshot::new(format!(
            "roster={},unfilled_current={},unfilled_next={}",
            self.roster.len(),
            unfilled_shifts(&self.current).len(),
            unfilled_shifts(&self.next).len()
        ))
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail
/// without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: RosterState,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
}
