//! Error types for batch classification and review analysis.

use thiserror::Error;

/// Errors that abort a whole batch.
#[derive(Debug, Error)]
pub enum BatchError {
    /// `mobile` or `review` is absent after header normalization.
    #[error(
        "CSV must contain columns named 'mobile' and 'review' (missing: {})",
        .missing.join(", ")
    )]
    MissingRequiredColumn { missing: Vec<String> },

    /// Two headers collapse to the same name once normalized.
    #[error("column '{name}' appears more than once after normalizing headers")]
    DuplicateColumn { name: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for BatchError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Input problems in single-review analysis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Please select or enter a mobile name first.")]
    NoMobile,

    #[error("no mobile at position {index} (choose 1-{available})")]
    UnknownIndex { index: usize, available: usize },

    #[error("Please enter a review before analysis.")]
    EmptyReview,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_message() {
        let err = BatchError::MissingRequiredColumn {
            missing: vec!["review".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "CSV must contain columns named 'mobile' and 'review' (missing: review)"
        );
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("review".into());
        let batch_err: BatchError = polars_err.into();
        assert!(matches!(batch_err, BatchError::DataFrame { .. }));
    }
}
