// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{Command, SlotRef};
use crate::error::CoreError;
use crate::state::{RosterState, TransitionResult};
use shift_roster_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use shift_roster_domain::{
    AvailabilityStatus, Employee, EmployeeAvailability, Roster, Schedule, ShiftSlot, WeekView,
    validate_schedule,
};

/// Applies a command to the current state, producing a new state and
/// audit event.
///
/// The prior state is never mutated; the untouched week's schedule is
/// carried over whole. Slot-coordinate commands whose coordinates do
/// not resolve (missing day, missing slot, employee absent from the
/// slot) are silent no-ops: the returned state equals the input state
/// and the audit event records the attempted action.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and audit event
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - A roster edit violates domain rules (duplicate or unknown name)
/// - A producer-supplied replacement schedule fails shape validation
pub fn apply(
    state: &RosterState,
    command: Command,
    actor: Actor,
    cause: Cause,
) -> Result<TransitionResult, CoreError> {
    let name: &'static str = command.name();
    let week_scope: Option<WeekView> = command.week();

    let (new_state, details) = match command {
        Command::ToggleStatus {
            week,
            slot,
            employee,
        } => toggle_status(state, week, slot, &employee),
        Command::Assign {
            week,
            slot,
            employee,
        } => assign(state, week, slot, &employee),
        Command::EnsureAvailable {
            week,
            slot,
            employee,
        } => ensure_available(state, week, slot, &employee),
        Command::MoveEmployee {
            week,
            employee,
            source,
            destination,
        } => move_employee(state, week, &employee, source, destination),
        Command::AddEmployee { employee } => add_employee(state, employee)?,
        Command::RemoveEmployee { employee } => remove_employee(state, &employee)?,
        Command::ResetWeek { week } => reset_week(state, week),
        Command::ReplaceSchedule {
            week,
            schedule,
            origin,
        } => replace_schedule(state, week, schedule, &origin)?,
    };

    let before: StateSnapshot = state.to_snapshot();
    let after: StateSnapshot = new_state.to_snapshot();
    let action: Action = Action::new(String::from(name), details);
    let audit_event: AuditEvent =
        AuditEvent::new(actor, cause, action, week_scope, before, after);

    Ok(TransitionResult {
        new_state,
        audit_event,
    })
}

type Step = (RosterState, Option<String>);

fn no_op(state: &RosterState, slot: SlotRef, employee: &Employee) -> Step {
    (
        state.clone(),
        Some(format!("No entry for '{employee}' at {slot}; nothing changed")),
    )
}

fn toggle_status(
    state: &RosterState,
    week: WeekView,
    slot: SlotRef,
    employee: &Employee,
) -> Step {
    let rewritten: Option<Schedule> =
        state
            .schedule(week)
            .with_entry(slot.day, slot.kind, employee, |entry| {
                entry.with_status(entry.status.cycled())
            });
    match rewritten {
        Some(schedule) => (
            state.with_schedule(week, schedule),
            Some(format!("Cycled '{employee}' at {slot}")),
        ),
        None => no_op(state, slot, employee),
    }
}

fn assign(state: &RosterState, week: WeekView, slot_ref: SlotRef, employee: &Employee) -> Step {
    let schedule: &Schedule = state.schedule(week);
    let Some(slot) = schedule.slot(slot_ref.day, slot_ref.kind) else {
        return no_op(state, slot_ref, employee);
    };
    if slot.entry(employee).is_none() {
        return no_op(state, slot_ref, employee);
    }

    // Demote any other assignee first, then toggle the target, so the
    // slot never ends up with two assignees.
    let demoted: ShiftSlot = slot.with_others_demoted(employee);
    let Some(toggled) = demoted.with_entry(employee, |entry| {
        entry.with_status(entry.status.toggled_assignment())
    }) else {
        return no_op(state, slot_ref, employee);
    };
    let Some(new_schedule) = schedule.with_slot(slot_ref.day, slot_ref.kind, toggled) else {
        return no_op(state, slot_ref, employee);
    };

    (
        state.with_schedule(week, new_schedule),
        Some(format!("Toggled assignment of '{employee}' at {slot_ref}")),
    )
}

fn ensure_available(
    state: &RosterState,
    week: WeekView,
    slot: SlotRef,
    employee: &Employee,
) -> Step {
    let rewritten: Option<Schedule> =
        state
            .schedule(week)
            .with_entry(slot.day, slot.kind, employee, |entry| {
                entry.with_status(AvailabilityStatus::Available)
            });
    match rewritten {
        Some(schedule) => (
            state.with_schedule(week, schedule),
            Some(format!("Marked '{employee}' available at {slot}")),
        ),
        None => no_op(state, slot, employee),
    }
}

fn move_employee(
    state: &RosterState,
    week: WeekView,
    employee: &Employee,
    source: SlotRef,
    destination: SlotRef,
) -> Step {
    if source == destination {
        return (
            state.clone(),
            Some(format!(
                "Move of '{employee}' from {source} to itself; nothing changed"
            )),
        );
    }

    let schedule: &Schedule = state.schedule(week);
    // Both entries must pre-exist; otherwise the whole move is
    // abandoned so no partial effect is ever observable.
    let present_at_source: bool = schedule
        .slot(source.day, source.kind)
        .is_some_and(|slot| slot.entry(employee).is_some());
    let present_at_destination: bool = schedule
        .slot(destination.day, destination.kind)
        .is_some_and(|slot| slot.entry(employee).is_some());
    if !present_at_source {
        return no_op(state, source, employee);
    }
    if !present_at_destination {
        return no_op(state, destination, employee);
    }

    let rewritten: Option<Schedule> = schedule
        .with_entry(destination.day, destination.kind, employee, |entry| {
            entry.with_status(AvailabilityStatus::Available)
        })
        .and_then(|s| {
            s.with_entry(source.day, source.kind, employee, |entry| {
                EmployeeAvailability::initial(entry.employee.clone())
            })
        });
    match rewritten {
        Some(schedule) => (
            state.with_schedule(week, schedule),
            Some(format!(
                "Moved '{employee}' from {source} to {destination}"
            )),
        ),
        // Unreachable given the presence checks above, but a miss still
        // degrades to the no-op policy rather than a panic.
        None => no_op(state, source, employee),
    }
}

fn add_employee(state: &RosterState, employee: Employee) -> Result<Step, CoreError> {
    let roster: Roster = state.roster.with_added(employee.clone())?;
    let current: Schedule = state.current.with_employee_appended(&employee);
    let next: Schedule = state.next.with_employee_appended(&employee);
    let new_state: RosterState = RosterState::from_parts(state.config, roster, current, next);
    Ok((
        new_state,
        Some(format!("Added '{employee}' to the roster and both weeks")),
    ))
}

fn remove_employee(state: &RosterState, employee: &Employee) -> Result<Step, CoreError> {
    let roster: Roster = state.roster.with_removed(employee)?;
    let current: Schedule = state.current.without_employee(employee);
    let next: Schedule = state.next.without_employee(employee);
    let new_state: RosterState = RosterState::from_parts(state.config, roster, current, next);
    Ok((
        new_state,
        Some(format!(
            "Removed '{employee}' from the roster and both weeks"
        )),
    ))
}

fn reset_week(state: &RosterState, week: WeekView) -> Step {
    let fresh: Schedule = Schedule::initial(state.config, &state.roster);
    (
        state.with_schedule(week, fresh),
        Some(format!("Reset the {week} week from the roster")),
    )
}

fn replace_schedule(
    state: &RosterState,
    week: WeekView,
    schedule: Schedule,
    origin: &str,
) -> Result<Step, CoreError> {
    validate_schedule(&schedule, &state.roster, state.config)
        .map_err(CoreError::ShapeViolation)?;
    Ok((
        state.with_schedule(week, schedule),
        Some(format!("Replaced the {week} week from {origin}")),
    ))
}
