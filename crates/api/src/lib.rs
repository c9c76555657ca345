// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the shift roster scheduler.
//!
//! Translates transport-level requests into core commands, runs them
//! through the mutation engine, persists the results, and maps every
//! failure into the single [`ApiError`] type the HTTP layer renders.

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

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    ApiResult, add_employee, assign, ensure_available, get_roster, get_unfilled, get_week,
    move_employee, remove_employee, replace_schedule, reset_week, toggle_status,
};
pub use request_response::{
    EntryRequest, MoveRequest, MutationResponse, ReplaceScheduleRequest, RosterEditRequest,
    RosterResponse, ScheduleResponse, UnfilledResponse, UnfilledShiftInfo,
};
