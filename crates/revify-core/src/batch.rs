//! Batch classification over a review table.
//!
//! Headers are normalized first (trimmed, lower-cased), then the required
//! `mobile` and `review` columns are checked once for the whole batch.
//! Every row is classified in input order and the label is appended as
//! `Predicted_Sentiment`. Other columns pass through untouched.

use std::collections::BTreeSet;
use std::time::Instant;

use polars::prelude::{DataFrame, NamedFrom, Series};
use tracing::{debug, info};

use revify_common::text_column;
use revify_model::{BatchSummary, LabelStyle, SentimentLabel};

use crate::classifier::classify;
use crate::error::BatchError;

pub const MOBILE_COLUMN: &str = "mobile";
pub const REVIEW_COLUMN: &str = "review";
pub const PREDICTED_SENTIMENT_COLUMN: &str = "Predicted_Sentiment";

/// Columns every batch must carry after normalization.
pub const REQUIRED_COLUMNS: [&str; 2] = [MOBILE_COLUMN, REVIEW_COLUMN];

/// Result of classifying a batch.
#[derive(Debug, Clone)]
pub struct ClassifiedBatch {
    /// Input table with normalized headers and the appended label column.
    pub frame: DataFrame,
    /// One label per row, in row order.
    pub labels: Vec<SentimentLabel>,
    pub summary: BatchSummary,
}

impl ClassifiedBatch {
    /// Rewrite the label column in the given style.
    pub fn apply_label_style(&mut self, style: LabelStyle) -> Result<(), BatchError> {
        let rendered: Vec<String> = self.labels.iter().map(|label| label.render(style)).collect();
        self.frame
            .with_column(Series::new(PREDICTED_SENTIMENT_COLUMN.into(), rendered))?;
        Ok(())
    }
}

/// Normalize a header: strip surrounding whitespace and BOM, lower-case.
pub fn normalize_column_name(raw: &str) -> String {
    raw.trim()
        .trim_matches('\u{feff}')
        .trim()
        .to_lowercase()
}

/// Rename every column to its normalized form.
pub fn normalize_columns(frame: &mut DataFrame) -> Result<(), BatchError> {
    let originals: Vec<String> = frame
        .get_column_names_owned()
        .into_iter()
        .map(|name| name.to_string())
        .collect();
    let mut seen = BTreeSet::new();
    for name in &originals {
        let normalized = normalize_column_name(name);
        if !seen.insert(normalized.clone()) {
            return Err(BatchError::DuplicateColumn { name: normalized });
        }
    }
    for name in originals {
        let normalized = normalize_column_name(&name);
        if normalized != name {
            debug!(from = %name, to = %normalized, "normalized column name");
            frame.rename(&name, normalized.into())?;
        }
    }
    Ok(())
}

/// Check the required columns on an already-normalized frame.
pub fn validate_required_columns(frame: &DataFrame) -> Result<(), BatchError> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|name| frame.column(name).is_err())
        .map(|name| (*name).to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(BatchError::MissingRequiredColumn { missing })
    }
}

/// Classify review texts in order and tally the labels.
pub fn classify_reviews<I, S>(reviews: I) -> (Vec<SentimentLabel>, BatchSummary)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut labels = Vec::new();
    let mut summary = BatchSummary::default();
    for review in reviews {
        let text = review.as_ref();
        let label = classify(text);
        summary.record(label, text.trim().is_empty());
        labels.push(label);
    }
    (labels, summary)
}

/// Classify every row of `frame` and append `Predicted_Sentiment`.
///
/// # Errors
///
/// Fails before touching any row when `mobile` or `review` is missing or
/// when two headers normalize to the same name.
pub fn classify_batch(mut frame: DataFrame) -> Result<ClassifiedBatch, BatchError> {
    let start = Instant::now();
    normalize_columns(&mut frame)?;
    validate_required_columns(&frame)?;

    let reviews = text_column(&frame, REVIEW_COLUMN)?;
    let (labels, summary) = classify_reviews(&reviews);

    let rendered: Vec<String> = labels
        .iter()
        .map(|label| label.render(LabelStyle::Plain))
        .collect();
    frame.with_column(Series::new(PREDICTED_SENTIMENT_COLUMN.into(), rendered))?;

    info!(
        rows = summary.rows,
        positive = summary.positive,
        negative = summary.negative,
        neutral = summary.neutral,
        empty_reviews = summary.empty_reviews,
        duration_ms = start.elapsed().as_millis(),
        "batch classified"
    );

    Ok(ClassifiedBatch {
        frame,
        labels,
        summary,
    })
}
