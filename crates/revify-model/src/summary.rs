use serde::{Deserialize, Serialize};

use crate::label::SentimentLabel;

/// Label counts for a classified batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub rows: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    /// Rows whose review cell was null or blank.
    pub empty_reviews: usize,
}

impl BatchSummary {
    /// Record one classified row.
    pub fn record(&mut self, label: SentimentLabel, empty_review: bool) {
        self.rows += 1;
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
        if empty_review {
            self.empty_reviews += 1;
        }
    }

    pub fn count(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }

    /// Share of rows carrying `label`, in percent. Zero for an empty batch.
    pub fn percentage(&self, label: SentimentLabel) -> f64 {
        if self.rows == 0 {
            0.0
        } else {
            self.count(label) as f64 * 100.0 / self.rows as f64
        }
    }
}
