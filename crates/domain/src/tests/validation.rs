// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AvailabilityStatus, DomainError, Employee, Roster, Schedule, ShiftKind, WeekConfig, Weekday,
    reconcile, validate_schedule,
};

fn test_roster() -> Roster {
    Roster::from_names(["Avi", "Bea"]).unwrap()
}

fn employee(name: &str) -> Employee {
    Employee::new(name).unwrap()
}

#[test]
fn test_initial_schedule_validates() {
    let roster: Roster = test_roster();
    let config: WeekConfig = WeekConfig::default();
    let schedule: Schedule = Schedule::initial(config, &roster);
    assert!(validate_schedule(&schedule, &roster, config).is_ok());
}

#[test]
fn test_missing_day_detected() {
    let roster: Roster = test_roster();
    let config: WeekConfig = WeekConfig::default();
    let schedule: Schedule = Schedule::from_days(Vec::new());
    let result = validate_schedule(&schedule, &roster, config);
    assert!(matches!(result, Err(DomainError::MissingDay(_))));
}

#[test]
fn test_missing_roster_entry_detected() {
    let roster: Roster = test_roster();
    let config: WeekConfig = WeekConfig::default();
    let smaller: Roster = Roster::from_names(["Avi"]).unwrap();
    let schedule: Schedule = Schedule::initial(config, &smaller);
    let result = validate_schedule(&schedule, &roster, config);
    assert!(matches!(
        result,
        Err(DomainError::MissingEntry { employee, .. }) if employee == "Bea"
    ));
}

#[test]
fn test_entry_outside_roster_detected() {
    let roster: Roster = test_roster();
    let config: WeekConfig = WeekConfig::default();
    let bigger: Roster = Roster::from_names(["Avi", "Bea", "Chen"]).unwrap();
    let schedule: Schedule = Schedule::initial(config, &bigger);
    let result = validate_schedule(&schedule, &roster, config);
    assert!(matches!(
        result,
        Err(DomainError::UnexpectedEntry { employee, .. }) if employee == "Chen"
    ));
}

#[test]
fn test_multiple_assignees_detected() {
    let roster: Roster = test_roster();
    let config: WeekConfig = WeekConfig::default();
    let mut schedule: Schedule = Schedule::initial(config, &roster);
    for name in ["Avi", "Bea"] {
        schedule = schedule
            .with_entry(Weekday::Sunday, ShiftKind::Morning, &employee(name), |e| {
                e.with_status(AvailabilityStatus::Assigned)
            })
            .unwrap();
    }
    let result = validate_schedule(&schedule, &roster, config);
    assert!(matches!(
        result,
        Err(DomainError::MultipleAssignees {
            day: Weekday::Sunday,
            kind: ShiftKind::Morning
        })
    ));
}

#[test]
fn test_half_day_with_evening_slot_detected() {
    let roster: Roster = test_roster();
    // Build against a config whose half-day is Thursday, then validate
    // against the default (Friday half-day) config.
    let other: WeekConfig = WeekConfig::new(Weekday::Thursday);
    let schedule: Schedule = Schedule::initial(other, &roster);
    let result = validate_schedule(&schedule, &roster, WeekConfig::default());
    assert!(matches!(
        result,
        Err(DomainError::UnexpectedEveningSlot(Weekday::Friday))
            | Err(DomainError::MissingEveningSlot(Weekday::Thursday))
    ));
}

#[test]
fn test_reconcile_adds_missing_employee() {
    let config: WeekConfig = WeekConfig::default();
    let old_roster: Roster = Roster::from_names(["Avi"]).unwrap();
    let schedule: Schedule = Schedule::initial(config, &old_roster);

    let new_roster: Roster = test_roster();
    let rebuilt: Schedule = reconcile(&schedule, &new_roster, config);

    assert!(validate_schedule(&rebuilt, &new_roster, config).is_ok());
    let entry = rebuilt
        .slot(Weekday::Sunday, ShiftKind::Morning)
        .unwrap()
        .entry(&employee("Bea"))
        .unwrap();
    assert_eq!(entry.status, AvailabilityStatus::Unknown);
}

#[test]
fn test_reconcile_drops_departed_employee() {
    let config: WeekConfig = WeekConfig::default();
    let old_roster: Roster = Roster::from_names(["Avi", "Bea", "Chen"]).unwrap();
    let schedule: Schedule = Schedule::initial(config, &old_roster);

    let new_roster: Roster = test_roster();
    let rebuilt: Schedule = reconcile(&schedule, &new_roster, config);

    assert!(validate_schedule(&rebuilt, &new_roster, config).is_ok());
    let slot = rebuilt.slot(Weekday::Monday, ShiftKind::Evening).unwrap();
    assert!(slot.entry(&employee("Chen")).is_none());
}

#[test]
fn test_reconcile_preserves_surviving_statuses_and_notes() {
    let config: WeekConfig = WeekConfig::default();
    let roster: Roster = test_roster();
    let avi: Employee = employee("Avi");
    let schedule: Schedule = Schedule::initial(config, &roster)
        .with_entry(Weekday::Tuesday, ShiftKind::Morning, &avi, |e| {
            let mut entry = e.with_status(AvailabilityStatus::Assigned);
            entry.notes = String::from("covering for Bea");
            entry
        })
        .unwrap();

    let rebuilt: Schedule = reconcile(&schedule, &roster, config);
    let entry = rebuilt
        .slot(Weekday::Tuesday, ShiftKind::Morning)
        .unwrap()
        .entry(&avi)
        .unwrap();
    assert_eq!(entry.status, AvailabilityStatus::Assigned);
    assert_eq!(entry.notes, "covering for Bea");
}

#[test]
fn test_reconcile_reshapes_half_day() {
    let roster: Roster = test_roster();
    let old_config: WeekConfig = WeekConfig::new(Weekday::Thursday);
    let schedule: Schedule = Schedule::initial(old_config, &roster);

    let config: WeekConfig = WeekConfig::default();
    let rebuilt: Schedule = reconcile(&schedule, &roster, config);

    assert!(validate_schedule(&rebuilt, &roster, config).is_ok());
    assert!(rebuilt.slot(Weekday::Friday, ShiftKind::Evening).is_none());
    assert!(rebuilt.slot(Weekday::Thursday, ShiftKind::Evening).is_some());
}
