// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::AvailabilityStatus;
use std::str::FromStr;

#[test]
fn test_manual_cycle_available_to_unavailable() {
    assert_eq!(
        AvailabilityStatus::Available.cycled(),
        AvailabilityStatus::Unavailable
    );
}

#[test]
fn test_manual_cycle_unavailable_to_unknown() {
    assert_eq!(
        AvailabilityStatus::Unavailable.cycled(),
        AvailabilityStatus::Unknown
    );
}

#[test]
fn test_manual_cycle_unknown_to_available() {
    assert_eq!(
        AvailabilityStatus::Unknown.cycled(),
        AvailabilityStatus::Available
    );
}

#[test]
fn test_manual_cycle_assigned_lands_on_available() {
    assert_eq!(
        AvailabilityStatus::Assigned.cycled(),
        AvailabilityStatus::Available
    );
}

#[test]
fn test_manual_cycle_never_enters_assigned() {
    for status in [
        AvailabilityStatus::Available,
        AvailabilityStatus::Unavailable,
        AvailabilityStatus::Unknown,
        AvailabilityStatus::Assigned,
    ] {
        assert_ne!(status.cycled(), AvailabilityStatus::Assigned);
    }
}

#[test]
fn test_assignment_toggle_from_assigned() {
    assert_eq!(
        AvailabilityStatus::Assigned.toggled_assignment(),
        AvailabilityStatus::Available
    );
}

#[test]
fn test_assignment_toggle_from_everything_else() {
    for status in [
        AvailabilityStatus::Available,
        AvailabilityStatus::Unavailable,
        AvailabilityStatus::Unknown,
    ] {
        assert_eq!(status.toggled_assignment(), AvailabilityStatus::Assigned);
    }
}

#[test]
fn test_default_status_is_unknown() {
    let status: AvailabilityStatus = AvailabilityStatus::default();
    assert_eq!(status, AvailabilityStatus::Unknown);
}

#[test]
fn test_status_string_round_trip() {
    for status in [
        AvailabilityStatus::Available,
        AvailabilityStatus::Unavailable,
        AvailabilityStatus::Unknown,
        AvailabilityStatus::Assigned,
    ] {
        let parsed: AvailabilityStatus =
            AvailabilityStatus::from_str(status.as_str()).unwrap();
        assert_eq!(parsed, status);
    }
}

#[test]
fn test_status_rejects_unknown_label() {
    let result = AvailabilityStatus::from_str("maybe");
    assert!(result.is_err());
}
