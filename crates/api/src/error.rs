// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use shift_roster::{CoreError, GenerationFailure, ParseFailure};
use shift_roster_domain::DomainError;
use shift_roster_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API
/// contract. This is the only error type the HTTP layer renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A producer-supplied replacement schedule was rejected; the
    /// prior schedule is preserved.
    ShapeRejected {
        /// A human-readable description of the rejection.
        message: String,
    },
    /// An external producer failed; the message is user-visible text.
    ProducerFailed {
        /// The displayable failure text.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::ShapeRejected { message } => {
                write!(f, "Replacement schedule rejected: {message}")
            }
            Self::ProducerFailed { message } => write!(f, "{message}"),
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidEmployeeName(name) => ApiError::InvalidInput {
            field: String::from("name"),
            message: format!("'{name}' is not a valid employee name"),
        },
        DomainError::DuplicateEmployee(name) => ApiError::DomainRuleViolation {
            rule: String::from("unique_employee"),
            message: format!("Employee '{name}' already exists in the roster"),
        },
        DomainError::EmployeeNotFound(name) => ApiError::ResourceNotFound {
            resource_type: String::from("Employee"),
            message: format!("Employee '{name}' is not in the roster"),
        },
        DomainError::UnknownWeekday(s) => ApiError::InvalidInput {
            field: String::from("day"),
            message: format!("'{s}' is not a weekday"),
        },
        DomainError::UnknownShiftKind(s) => ApiError::InvalidInput {
            field: String::from("shift"),
            message: format!("'{s}' is not a shift kind"),
        },
        DomainError::UnknownStatus(s) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("'{s}' is not an availability status"),
        },
        DomainError::UnknownWeek(s) => ApiError::InvalidInput {
            field: String::from("week"),
            message: format!("'{s}' is not a week selector"),
        },
        err @ (DomainError::MissingDay(_)
        | DomainError::MissingEntry { .. }
        | DomainError::UnexpectedEntry { .. }
        | DomainError::DuplicateEntry { .. }
        | DomainError::MultipleAssignees { .. }
        | DomainError::UnexpectedEveningSlot(_)
        | DomainError::MissingEveningSlot(_)) => ApiError::DomainRuleViolation {
            rule: String::from("schedule_shape"),
            message: err.to_string(),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::ShapeViolation(domain_err) => ApiError::ShapeRejected {
            message: domain_err.to_string(),
        },
    }
}

impl From<ParseFailure> for ApiError {
    fn from(err: ParseFailure) -> Self {
        Self::ProducerFailed {
            message: err.to_string(),
        }
    }
}

impl From<GenerationFailure> for ApiError {
    fn from(err: GenerationFailure) -> Self {
        Self::ProducerFailed {
            message: err.to_string(),
        }
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}
