// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the shift roster scheduler.
//!
//! The roster and both week schedules are durably cached as JSON
//! payloads under fixed string keys, and every state transition is
//! appended to an audit log. Built on Diesel over `SQLite`.
//!
//! `SQLite` is the only backend: in-memory databases (unique per call)
//! for tests, a WAL-mode file database for deployments.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use shift_roster::{RosterState, TransitionResult};
use shift_roster_domain::WeekConfig;

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod store;

#[cfg(test)]
mod tests;

pub use data_models::AuditEventRow;
pub use error::PersistenceError;
pub use store::{ROSTER_KEY, schedule_key};

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based
/// collisions. Each call to `new_in_memory()` receives a unique
/// sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for the state cache and the audit log.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite`
    /// database.
    ///
    /// Each call receives a unique database instance via atomic
    /// counter, ensuring deterministic test isolation without
    /// time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name: String = format!("memdb_test_{db_id}");
        let shared_memory_url: String = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::initialize_database(&shared_memory_url)?;
        backend::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite`
    /// database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::initialize_database(path_str)?;
        backend::enable_wal_mode(&mut conn)?;
        backend::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Writes the roster and both week schedules under their fixed
    /// keys in one transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_state(&mut self, state: &RosterState) -> Result<(), PersistenceError> {
        store::write_state(&mut self.conn, state)
    }

    /// Loads the persisted state, tolerating missing keys and stale
    /// shapes.
    ///
    /// Missing keys fall back to a fresh initialization from whatever
    /// was found; persisted schedules are reconciled to the roster and
    /// week configuration before being returned.
    ///
    /// # Errors
    ///
    /// Returns an error if a payload cannot be deserialized or the
    /// read fails.
    pub fn load_state(&mut self, config: WeekConfig) -> Result<RosterState, PersistenceError> {
        store::load_state(&mut self.conn, config)
    }

    /// Persists a transition: the audit event and the new state,
    /// atomically.
    ///
    /// # Returns
    ///
    /// The event ID assigned to the persisted audit event.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails; nothing is written on
    /// failure.
    pub fn record_transition(
        &mut self,
        result: &TransitionResult,
    ) -> Result<i64, PersistenceError> {
        store::persist_transition(&mut self.conn, result)
    }

    /// Reads the full audit log in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    pub fn audit_events(&mut self) -> Result<Vec<AuditEventRow>, PersistenceError> {
        store::read_audit_events(&mut self.conn)
    }
}
