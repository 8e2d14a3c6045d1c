//! Error types for conversation definitions.

use thiserror::Error;

/// Reasons a conversation definition is rejected.
///
/// Validation stops at the first violation, so each error names exactly one
/// contract clause (and, for per-state clauses, the offending element).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("Definition must be a JSON array of states")]
    InvalidFormat,

    #[error("Definition contains no states")]
    EmptyDefinition,

    #[error("State at index {index} is missing required property 'id' (non-empty string)")]
    MissingId { index: usize },

    #[error("State at index {index} is missing required property 'question' (string)")]
    MissingQuestion { index: usize },

    #[error(
        "State at index {index} has an answer option without properties 'answer' (string) and 'nextState' (string)"
    )]
    InvalidAnswerOption { index: usize },

    #[error("Definition source '{locator}' is not available: {reason}")]
    SourceUnavailable { locator: String, reason: String },
}

impl DefinitionError {
    /// Creates a source unavailable error.
    pub fn source_unavailable(locator: impl Into<String>, reason: impl Into<String>) -> Self {
        DefinitionError::SourceUnavailable {
            locator: locator.into(),
            reason: reason.into(),
        }
    }

    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            DefinitionError::InvalidFormat => "INVALID_FORMAT",
            DefinitionError::EmptyDefinition => "EMPTY_DEFINITION",
            DefinitionError::MissingId { .. } => "MISSING_ID",
            DefinitionError::MissingQuestion { .. } => "MISSING_QUESTION",
            DefinitionError::InvalidAnswerOption { .. } => "INVALID_ANSWER_OPTION",
            DefinitionError::SourceUnavailable { .. } => "SOURCE_UNAVAILABLE",
        }
    }

    /// Index of the offending state, for per-state violations.
    pub fn state_index(&self) -> Option<usize> {
        match self {
            DefinitionError::MissingId { index }
            | DefinitionError::MissingQuestion { index }
            | DefinitionError::InvalidAnswerOption { index } => Some(*index),
            _ => None,
        }
    }
}
