// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cache and audit-log mutations and queries.
//!
//! The roster and the two week schedules are cached as JSON payloads
//! under fixed string keys; every successful transition appends one
//! row to the audit log.

use diesel::prelude::*;
use diesel::SqliteConnection;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::debug;

use shift_roster::{RosterState, TransitionResult};
use shift_roster_audit::AuditEvent;
use shift_roster_domain::{Roster, Schedule, WeekConfig, WeekView, reconcile};

use crate::backend;
use crate::data_models::{AuditEventRow, NewAuditEventRow, NewCacheEntry};
use crate::diesel_schema::{audit_events, cache_entries};
use crate::error::PersistenceError;

/// The fixed cache key under which the roster is persisted.
pub const ROSTER_KEY: &str = "employees";

/// Returns the fixed cache key for one week's schedule.
#[must_use]
pub fn schedule_key(week: WeekView) -> String {
    format!("schedule.{week}")
}

fn write_entry(
    conn: &mut SqliteConnection,
    key: &str,
    payload: &str,
) -> Result<(), PersistenceError> {
    diesel::replace_into(cache_entries::table)
        .values(NewCacheEntry {
            cache_key: key,
            payload,
        })
        .execute(conn)?;
    Ok(())
}

fn read_entry(conn: &mut SqliteConnection, key: &str) -> Result<Option<String>, PersistenceError> {
    Ok(cache_entries::table
        .find(key)
        .select(cache_entries::payload)
        .first::<String>(conn)
        .optional()?)
}

/// Writes the roster and both week schedules under their fixed keys in
/// one transaction.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_state(
    conn: &mut SqliteConnection,
    state: &RosterState,
) -> Result<(), PersistenceError> {
    let roster_json: String = serde_json::to_string(&state.roster)?;
    let current_json: String = serde_json::to_string(&state.current)?;
    let next_json: String = serde_json::to_string(&state.next)?;

    conn.transaction(|conn| {
        write_entry(conn, ROSTER_KEY, &roster_json)?;
        write_entry(conn, &schedule_key(WeekView::Current), &current_json)?;
        write_entry(conn, &schedule_key(WeekView::Next), &next_json)?;
        Ok(())
    })
}

/// Loads the persisted state, tolerating missing keys and stale shapes.
///
/// A missing roster key yields an empty roster; a missing schedule key
/// yields a freshly built week. Persisted schedules whose shape is
/// stale relative to the roster or configuration are reconciled before
/// being returned, so the result always satisfies the completeness and
/// shape invariants.
///
/// # Errors
///
/// Returns an error if a payload is present but not valid JSON for its
/// type, or if the read fails.
pub fn load_state(
    conn: &mut SqliteConnection,
    config: WeekConfig,
) -> Result<RosterState, PersistenceError> {
    let roster: Roster = match read_entry(conn, ROSTER_KEY)? {
        Some(payload) => serde_json::from_str(&payload)?,
        None => Roster::new(),
    };

    let mut schedules: Vec<Schedule> = Vec::with_capacity(2);
    for week in WeekView::ALL {
        let schedule: Schedule = match read_entry(conn, &schedule_key(week))? {
            Some(payload) => {
                let persisted: Schedule = serde_json::from_str(&payload)?;
                reconcile(&persisted, &roster, config)
            }
            None => Schedule::initial(config, &roster),
        };
        schedules.push(schedule);
    }
    let next: Schedule = schedules.pop().ok_or_else(|| {
        PersistenceError::InvalidPayload(String::from("missing next week schedule"))
    })?;
    let current: Schedule = schedules.pop().ok_or_else(|| {
        PersistenceError::InvalidPayload(String::from("missing current week schedule"))
    })?;

    debug!(roster_len = roster.len(), "Loaded persisted state");
    Ok(RosterState::from_parts(config, roster, current, next))
}

/// Appends one audit event to the log.
///
/// The `recorded_at` timestamp is assigned here, not by the core.
///
/// # Returns
///
/// The event ID assigned by the database.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn append_audit_event(
    conn: &mut SqliteConnection,
    event: &AuditEvent,
) -> Result<i64, PersistenceError> {
    let recorded_at: String = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;

    let row: NewAuditEventRow = NewAuditEventRow {
        recorded_at,
        actor_id: event.actor.id.clone(),
        actor_type: event.actor.actor_type.clone(),
        cause_id: event.cause.id.clone(),
        cause_description: event.cause.description.clone(),
        action_name: event.action.name.clone(),
        action_details: event.action.details.clone(),
        week: event.week.map(|w| w.as_str().to_string()),
        before_state: event.before.data.clone(),
        after_state: event.after.data.clone(),
    };

    diesel::insert_into(audit_events::table)
        .values(row)
        .execute(conn)?;
    let event_id: i64 = backend::get_last_insert_rowid(conn)?;
    debug!(event_id, "Persisted audit event");
    Ok(event_id)
}

/// Persists a transition: the audit event and the new state, atomically.
///
/// # Returns
///
/// The event ID assigned to the persisted audit event.
///
/// # Errors
///
/// Returns an error if persistence fails; nothing is written on failure.
pub fn persist_transition(
    conn: &mut SqliteConnection,
    result: &TransitionResult,
) -> Result<i64, PersistenceError> {
    conn.transaction(|conn| {
        let event_id: i64 = append_audit_event(conn, &result.audit_event)?;
        write_state(conn, &result.new_state)?;
        Ok(event_id)
    })
}

/// Reads the full audit log in insertion order.
///
/// # Errors
///
/// Returns an error if the read fails.
pub fn read_audit_events(
    conn: &mut SqliteConnection,
) -> Result<Vec<AuditEventRow>, PersistenceError> {
    Ok(audit_events::table
        .order(audit_events::event_id.asc())
        .load::<AuditEventRow>(conn)?)
}
