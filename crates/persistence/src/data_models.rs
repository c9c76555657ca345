// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::diesel_schema::{audit_events, cache_entries};
use diesel::prelude::*;

/// An insertable cache entry row.
#[derive(Debug, Insertable)]
#[diesel(table_name = cache_entries)]
pub struct NewCacheEntry<'a> {
    pub cache_key: &'a str,
    pub payload: &'a str,
}

/// An insertable audit event row.
#[derive(Debug, Insertable)]
#[diesel(table_name = audit_events)]
pub struct NewAuditEventRow {
    pub recorded_at: String,
    pub actor_id: String,
    pub actor_type: String,
    pub cause_id: String,
    pub cause_description: String,
    pub action_name: String,
    pub action_details: Option<String>,
    pub week: Option<String>,
    pub before_state: String,
    pub after_state: String,
}

/// A persisted audit event row, as read back from the log.
#[derive(Debug, Clone, PartialEq, Eq, Queryable)]
#[diesel(table_name = audit_events)]
pub struct AuditEventRow {
    pub event_id: i64,
    pub recorded_at: String,
    pub actor_id: String,
    pub actor_type: String,
    pub cause_id: String,
    pub cause_description: String,
    pub action_name: String,
    pub action_details: Option<String>,
    pub week: Option<String>,
    pub before_state: String,
    pub after_state: String,
}
