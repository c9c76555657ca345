// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shift_roster_domain::{Roster, Schedule};

/// Failure of the availability-text interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    /// A human-readable reason suitable for display.
    pub reason: String,
}

impl ParseFailure {
    /// Creates a new `ParseFailure`.
    #[must_use]
    pub const fn new(reason: String) -> Self {
        Self { reason }
    }
}

impl std::fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to interpret availability text: {}", self.reason)
    }
}

impl std::error::Error for ParseFailure {}

/// Failure of the optimal-assignment generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationFailure {
    /// A human-readable reason suitable for display.
    pub reason: String,
}

impl GenerationFailure {
    /// Creates a new `GenerationFailure`.
    #[must_use]
    pub const fn new(reason: String) -> Self {
        Self { reason }
    }
}

impl std::fmt::Display for GenerationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to generate assignments: {}", self.reason)
    }
}

impl std::error::Error for GenerationFailure {}

/// Interprets free-form availability text into a full replacement
/// schedule.
///
/// Implementations live outside the core; the engine only knows this
/// contract and validates the returned schedule's shape before
/// accepting it.
pub trait AvailabilityInterpreter {
    /// Produces a replacement schedule reflecting the status and notes
    /// updates implied by the text.
    ///
    /// # Errors
    ///
    /// Returns a `ParseFailure` with a displayable reason if the text
    /// cannot be interpreted.
    fn interpret(
        &self,
        text: &str,
        schedule: &Schedule,
        roster: &Roster,
    ) -> Result<Schedule, ParseFailure>;
}

/// Searches for an optimal assignment over a week.
///
/// Implementations live outside the core; the engine only knows this
/// contract and validates the returned schedule's shape before
/// accepting it.
pub trait AssignmentGenerator {
    /// Produces a replacement schedule with assignments filled in.
    ///
    /// # Errors
    ///
    /// Returns a `GenerationFailure` with a displayable reason if no
    /// assignment can be produced.
    fn generate(&self, schedule: &Schedule, roster: &Roster)
    -> Result<Schedule, GenerationFailure>;
}
