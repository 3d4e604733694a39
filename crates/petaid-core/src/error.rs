//! Error Types
//!
//! Validation failures are user-facing (their `Display` is shown in a warning
//! notice); everything else degrades to a notice and unchanged state.

use thiserror::Error;

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Rejected draft
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more required fields were left empty (labels, in schema order)
    #[error("{} required.", required_phrase(.fields))]
    MissingFields {
        entity: &'static str,
        fields: Vec<&'static str>,
    },
    /// A field is present but does not parse into its typed value
    #[error("{field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

fn required_phrase(fields: &[&'static str]) -> String {
    match fields {
        [] => "All fields are".to_string(),
        [one] => format!("{} is", one),
        [init @ .., last] => {
            let head = init.join(", ");
            if init.len() > 1 {
                format!("{}, and {} are", head, last)
            } else {
                format!("{} and {} are", head, last)
            }
        }
    }
}

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Not found: {kind} {id}")]
    NotFound { kind: &'static str, id: String },
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("No record is being edited")]
    EditorClosed,
}

impl DomainError {
    pub fn not_found(kind: &'static str, id: impl ToString) -> Self {
        DomainError::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation(_))
    }
}
