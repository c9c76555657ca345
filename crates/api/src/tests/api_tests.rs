// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{test_actor, test_cause, test_persistence, test_state};
use crate::{
    ApiError, ApiResult, EntryRequest, MoveRequest, MutationResponse, ReplaceScheduleRequest,
    RosterEditRequest, RosterResponse, ScheduleResponse, UnfilledResponse, add_employee, assign,
    ensure_available, get_roster, get_unfilled, get_week, move_employee, remove_employee,
    replace_schedule, reset_week, toggle_status,
};
use shift_roster::RosterState;
use shift_roster_domain::{
    AvailabilityStatus, Employee, Schedule, ShiftKind, WeekView, Weekday,
};
use shift_roster_persistence::Persistence;

fn entry(day: Weekday, shift: ShiftKind, employee: &str) -> EntryRequest {
    EntryRequest {
        day,
        shift,
        employee: String::from(employee),
    }
}

#[test]
fn test_toggle_status_persists_and_returns_new_state() {
    let mut persistence: Persistence = test_persistence();
    let state: RosterState = test_state();

    let result: ApiResult<MutationResponse> = toggle_status(
        &mut persistence,
        &state,
        WeekView::Current,
        entry(Weekday::Sunday, ShiftKind::Morning, "Avi"),
        test_actor(),
        test_cause(),
    )
    .unwrap();

    assert!(result.response.event_id > 0);
    let status: AvailabilityStatus = result
        .new_state
        .current
        .slot(Weekday::Sunday, ShiftKind::Morning)
        .unwrap()
        .entry(&Employee::new("Avi").unwrap())
        .unwrap()
        .status;
    assert_eq!(status, AvailabilityStatus::Available);

    let loaded: RosterState = persistence.load_state(state.config).unwrap();
    assert_eq!(loaded, result.new_state);
}

#[test]
fn test_invalid_employee_name_is_invalid_input() {
    let mut persistence: Persistence = test_persistence();
    let state: RosterState = test_state();

    let result = assign(
        &mut persistence,
        &state,
        WeekView::Current,
        entry(Weekday::Sunday, ShiftKind::Morning, "   "),
        test_actor(),
        test_cause(),
    );

    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
    // Nothing was persisted.
    assert!(persistence.audit_events().unwrap().is_empty());
}

#[test]
fn test_add_duplicate_employee_is_domain_rule_violation() {
    let mut persistence: Persistence = test_persistence();
    let state: RosterState = test_state();

    let result = add_employee(
        &mut persistence,
        &state,
        RosterEditRequest {
            name: String::from("Avi"),
        },
        test_actor(),
        test_cause(),
    );

    assert!(matches!(result, Err(ApiError::DomainRuleViolation { .. })));
}

#[test]
fn test_remove_unknown_employee_is_not_found() {
    let mut persistence: Persistence = test_persistence();
    let state: RosterState = test_state();

    let result = remove_employee(
        &mut persistence,
        &state,
        RosterEditRequest {
            name: String::from("Ghost"),
        },
        test_actor(),
        test_cause(),
    );

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_move_and_reset_round_through_engine() {
    let mut persistence: Persistence = test_persistence();
    let state: RosterState = test_state();

    let moved: ApiResult<MutationResponse> = move_employee(
        &mut persistence,
        &state,
        WeekView::Current,
        MoveRequest {
            employee: String::from("Bea"),
            from_day: Weekday::Sunday,
            from_shift: ShiftKind::Morning,
            to_day: Weekday::Monday,
            to_shift: ShiftKind::Evening,
        },
        test_actor(),
        test_cause(),
    )
    .unwrap();

    let reset: ApiResult<MutationResponse> = reset_week(
        &mut persistence,
        &moved.new_state,
        WeekView::Current,
        test_actor(),
        test_cause(),
    )
    .unwrap();

    assert!(reset.response.event_id > moved.response.event_id);
    assert_eq!(reset.new_state.current, state.current);
}

#[test]
fn test_rejected_replacement_is_shape_rejected_and_unpersisted() {
    let mut persistence: Persistence = test_persistence();
    let state: RosterState = test_state();
    persistence.save_state(&state).unwrap();

    let result = replace_schedule(
        &mut persistence,
        &state,
        WeekView::Next,
        ReplaceScheduleRequest {
            schedule: Schedule::from_days(Vec::new()),
            origin: String::from("generator"),
        },
        test_actor(),
        test_cause(),
    );

    assert!(matches!(result, Err(ApiError::ShapeRejected { .. })));
    let loaded: RosterState = persistence.load_state(state.config).unwrap();
    assert_eq!(loaded, state);
}

#[test]
fn test_ensure_available_forces_available() {
    let mut persistence: Persistence = test_persistence();
    let state: RosterState = test_state();

    let result: ApiResult<MutationResponse> = ensure_available(
        &mut persistence,
        &state,
        WeekView::Next,
        entry(Weekday::Thursday, ShiftKind::Evening, "Bea"),
        test_actor(),
        test_cause(),
    )
    .unwrap();

    let status: AvailabilityStatus = result
        .new_state
        .next
        .slot(Weekday::Thursday, ShiftKind::Evening)
        .unwrap()
        .entry(&Employee::new("Bea").unwrap())
        .unwrap()
        .status;
    assert_eq!(status, AvailabilityStatus::Available);
}

#[test]
fn test_get_roster_lists_names_in_order() {
    let state: RosterState = test_state();
    let response: RosterResponse = get_roster(&state);
    assert_eq!(response.employees, vec!["Avi", "Bea"]);
}

#[test]
fn test_get_week_returns_selected_schedule() {
    let state: RosterState = test_state();
    let response: ScheduleResponse = get_week(&state, WeekView::Next);
    assert_eq!(response.week, "next");
    assert_eq!(response.schedule, state.next);
}

#[test]
fn test_get_unfilled_reports_in_calendar_order() {
    let state: RosterState = test_state();
    let response: UnfilledResponse = get_unfilled(&state, WeekView::Current);

    assert_eq!(response.week, "current");
    assert_eq!(response.unfilled.len(), 11);
    assert_eq!(response.unfilled[0].day, Weekday::Sunday);
    assert_eq!(response.unfilled[0].shift, ShiftKind::Morning);
    assert_eq!(response.unfilled[1].shift, ShiftKind::Evening);
}
