//! Error types for validation, report parsing, and history access.
//!
//! Every variant carries a message fit to show the user directly; none of
//! them is fatal to the application.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::Subject;

/// Invalid form input. Nothing is computed or persisted when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The name field was empty after trimming.
    #[error("Please enter the student's name.")]
    MissingName,

    /// The name contained a line break or the history delimiter.
    #[error("Student name {0:?} may not contain line breaks or \"---\".")]
    InvalidName(String),

    /// A score field was not an integer in 0..=100.
    #[error("Please enter valid scores (0-100) for all subjects ({subject}: {value:?}).")]
    InvalidScore { subject: Subject, value: String },
}

impl ValidationError {
    /// The subject whose score was rejected, if any.
    pub fn subject(&self) -> Option<Subject> {
        match self {
            ValidationError::InvalidScore { subject, .. } => Some(*subject),
            ValidationError::MissingName | ValidationError::InvalidName(_) => None,
        }
    }
}

/// A history block that does not have the shape of a formatted report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing line: {0}")]
    MissingLine(&'static str),

    #[error("malformed line {line:?}: expected {expected}")]
    Malformed { line: String, expected: &'static str },
}

/// Failure reading or writing the history file.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Failed to save report history to {path}: {error}")]
    Write {
        path: PathBuf,
        error: std::io::Error,
    },

    #[error("Error reading history file {path}: {error}")]
    Read {
        path: PathBuf,
        error: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_score_names_subject() {
        let err = ValidationError::InvalidScore {
            subject: Subject::Chemistry,
            value: "abc".into(),
        };
        assert_eq!(err.subject(), Some(Subject::Chemistry));
        let msg = err.to_string();
        assert!(msg.starts_with("Please enter valid scores (0-100)"));
        assert!(msg.contains("Chemistry"));
        assert!(msg.contains("\"abc\""));
    }

    #[test]
    fn missing_name_message() {
        assert_eq!(
            ValidationError::MissingName.to_string(),
            "Please enter the student's name."
        );
        assert_eq!(ValidationError::MissingName.subject(), None);
    }
}
