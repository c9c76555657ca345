// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

diesel::table! {
    cache_entries (cache_key) {
        cache_key -> Text,
        payload -> Text,
    }
}

diesel::table! {
    audit_events (event_id) {
        event_id -> BigInt,
        recorded_at -> Text,
        actor_id -> Text,
        actor_type -> Text,
        cause_id -> Text,
        cause_description -> Text,
        action_name -> Text,
        action_details -> Nullable<Text>,
        week -> Nullable<Text>,
        before_state -> Text,
        after_state -> Text,
    }
}
