// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Mutating handlers run one command through the core, persist the
//! transition and the new state atomically, and hand the new state
//! back to the caller. No failure here is fatal: on error the caller's
//! state and the persisted state are both unchanged.

use tracing::info;

use shift_roster::{Command, RosterState, SlotRef, TransitionResult, apply};
use shift_roster_audit::{Actor, Cause};
use shift_roster_domain::{
    Employee, UnfilledShift, WeekView, unfilled_shifts,
};
use shift_roster_persistence::Persistence;

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    EntryRequest, MoveRequest, MutationResponse, ReplaceScheduleRequest, RosterEditRequest,
    RosterResponse, ScheduleResponse, UnfilledResponse, UnfilledShiftInfo,
};

/// The result of a mutating API operation.
///
/// Carries the response alongside the new state so the caller can
/// swap its in-memory state only after persistence has succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The new state after the operation.
    pub new_state: RosterState,
}

fn parse_employee(name: &str) -> Result<Employee, ApiError> {
    Employee::new(name).map_err(translate_domain_error)
}

fn run_command(
    persistence: &mut Persistence,
    state: &RosterState,
    command: Command,
    actor: Actor,
    cause: Cause,
    message: String,
) -> Result<ApiResult<MutationResponse>, ApiError> {
    let action: &'static str = command.name();
    let result: TransitionResult =
        apply(state, command, actor, cause).map_err(translate_core_error)?;
    let event_id: i64 = persistence.record_transition(&result)?;
    info!(action, event_id, "Applied and persisted command");

    Ok(ApiResult {
        response: MutationResponse { message, event_id },
        new_state: result.new_state,
    })
}

/// Applies the manual availability cycle to one entry.
///
/// Coordinates that do not resolve are a silent no-op, persisted like
/// any other transition.
///
/// # Errors
///
/// Returns an error if the employee name is invalid or persistence
/// fails.
pub fn toggle_status(
    persistence: &mut Persistence,
    state: &RosterState,
    week: WeekView,
    request: EntryRequest,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<MutationResponse>, ApiError> {
    let employee: Employee = parse_employee(&request.employee)?;
    let message: String = format!(
        "Cycled availability of '{employee}' on {}/{} of the {week} week",
        request.day, request.shift
    );
    let command: Command = Command::ToggleStatus {
        week,
        slot: SlotRef::new(request.day, request.shift),
        employee,
    };
    run_command(persistence, state, command, actor, cause, message)
}

/// Toggles the assignment of one entry, demoting any other assignee in
/// the slot.
///
/// # Errors
///
/// Returns an error if the employee name is invalid or persistence
/// fails.
pub fn assign(
    persistence: &mut Persistence,
    state: &RosterState,
    week: WeekView,
    request: EntryRequest,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<MutationResponse>, ApiError> {
    let employee: Employee = parse_employee(&request.employee)?;
    let message: String = format!(
        "Toggled assignment of '{employee}' on {}/{} of the {week} week",
        request.day, request.shift
    );
    let command: Command = Command::Assign {
        week,
        slot: SlotRef::new(request.day, request.shift),
        employee,
    };
    run_command(persistence, state, command, actor, cause, message)
}

/// Forces one entry to `Available`.
///
/// # Errors
///
/// Returns an error if the employee name is invalid or persistence
/// fails.
pub fn ensure_available(
    persistence: &mut Persistence,
    state: &RosterState,
    week: WeekView,
    request: EntryRequest,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<MutationResponse>, ApiError> {
    let employee: Employee = parse_employee(&request.employee)?;
    let message: String = format!(
        "Marked '{employee}' available on {}/{} of the {week} week",
        request.day, request.shift
    );
    let command: Command = Command::EnsureAvailable {
        week,
        slot: SlotRef::new(request.day, request.shift),
        employee,
    };
    run_command(persistence, state, command, actor, cause, message)
}

/// Moves an employee between two slots of one week.
///
/// # Errors
///
/// Returns an error if the employee name is invalid or persistence
/// fails.
pub fn move_employee(
    persistence: &mut Persistence,
    state: &RosterState,
    week: WeekView,
    request: MoveRequest,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<MutationResponse>, ApiError> {
    let employee: Employee = parse_employee(&request.employee)?;
    let message: String = format!(
        "Moved '{employee}' from {}/{} to {}/{} in the {week} week",
        request.from_day, request.from_shift, request.to_day, request.to_shift
    );
    let command: Command = Command::MoveEmployee {
        week,
        employee,
        source: SlotRef::new(request.from_day, request.from_shift),
        destination: SlotRef::new(request.to_day, request.to_shift),
    };
    run_command(persistence, state, command, actor, cause, message)
}

/// Adds an employee to the roster and to every slot of both weeks.
///
/// # Errors
///
/// Returns an error if the name is invalid, the employee already
/// exists, or persistence fails.
pub fn add_employee(
    persistence: &mut Persistence,
    state: &RosterState,
    request: RosterEditRequest,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<MutationResponse>, ApiError> {
    let employee: Employee = parse_employee(&request.name)?;
    let message: String = format!("Added '{employee}' to the roster");
    let command: Command = Command::AddEmployee { employee };
    run_command(persistence, state, command, actor, cause, message)
}

/// Removes an employee from the roster and from every slot of both
/// weeks.
///
/// # Errors
///
/// Returns an error if the name is invalid, the employee is unknown,
/// or persistence fails.
pub fn remove_employee(
    persistence: &mut Persistence,
    state: &RosterState,
    request: RosterEditRequest,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<MutationResponse>, ApiError> {
    let employee: Employee = parse_employee(&request.name)?;
    let message: String = format!("Removed '{employee}' from the roster");
    let command: Command = Command::RemoveEmployee { employee };
    run_command(persistence, state, command, actor, cause, message)
}

/// Replaces one week's schedule with a freshly built one.
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn reset_week(
    persistence: &mut Persistence,
    state: &RosterState,
    week: WeekView,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<MutationResponse>, ApiError> {
    let message: String = format!("Reset the {week} week");
    let command: Command = Command::ResetWeek { week };
    run_command(persistence, state, command, actor, cause, message)
}

/// Replaces one week's schedule with a producer-supplied one.
///
/// The replacement is validated against the roster and week shape
/// before being accepted; a rejected replacement leaves both the
/// in-memory and the persisted state unchanged.
///
/// # Errors
///
/// Returns an error if the replacement fails shape validation or
/// persistence fails.
pub fn replace_schedule(
    persistence: &mut Persistence,
    state: &RosterState,
    week: WeekView,
    request: ReplaceScheduleRequest,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<MutationResponse>, ApiError> {
    let message: String = format!(
        "Replaced the {week} week from {}",
        request.origin
    );
    let command: Command = Command::ReplaceSchedule {
        week,
        schedule: request.schedule,
        origin: request.origin,
    };
    run_command(persistence, state, command, actor, cause, message)
}

/// Returns the roster.
#[must_use]
pub fn get_roster(state: &RosterState) -> RosterResponse {
    RosterResponse {
        employees: state
            .roster
            .iter()
            .map(|e| e.name().to_string())
            .collect(),
    }
}

/// Returns one week's schedule.
#[must_use]
pub fn get_week(state: &RosterState, week: WeekView) -> ScheduleResponse {
    ScheduleResponse {
        week: week.as_str().to_string(),
        schedule: state.schedule(week).clone(),
    }
}

/// Returns the unfilled shifts of one week in calendar order, morning
/// before evening.
#[must_use]
pub fn get_unfilled(state: &RosterState, week: WeekView) -> UnfilledResponse {
    let unfilled: Vec<UnfilledShiftInfo> = unfilled_shifts(state.schedule(week))
        .into_iter()
        .map(|shift: UnfilledShift| UnfilledShiftInfo {
            day: shift.day,
            shift: shift.kind,
        })
        .collect();
    UnfilledResponse {
        week: week.as_str().to_string(),
        unfilled,
    }
}
