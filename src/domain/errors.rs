//! Domain errors. Used by ports and use cases.
//!
//! The core raises only `InvalidWorkoutInput`; adapters map infrastructure
//! errors into the remaining variants.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid workout input: {0}")]
    InvalidWorkoutInput(#[from] InputFault),

    #[error("Package source error: {0}")]
    Source(String),

    #[error("Report sink error: {0}")]
    Sink(String),

    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl DomainError {
    /// True for the core construction error (bad tag, arity or value).
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, DomainError::InvalidWorkoutInput(_))
    }
}

/// Why a package could not be turned into a workout record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputFault {
    #[error("unknown workout kind '{0}' (expected one of SWM, RUN, WLK)")]
    UnknownKind(String),

    #[error("{tag} expects {expected} parameters, got {got}")]
    Arity {
        tag: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("{field} is out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_human_readable() {
        let err = DomainError::from(InputFault::Arity {
            tag: "WLK",
            expected: 4,
            got: 3,
        });
        assert_eq!(
            err.to_string(),
            "Invalid workout input: WLK expects 4 parameters, got 3"
        );

        let err = DomainError::from(InputFault::UnknownKind("RN".into()));
        assert!(err.to_string().contains("'RN'"));
        assert!(err.is_invalid_input());
        assert!(!DomainError::Source("x".into()).is_invalid_input());
    }
}
