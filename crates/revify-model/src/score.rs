use serde::{Deserialize, Serialize};

use crate::label::SentimentLabel;

/// Keyword hit counts for one review.
///
/// Each keyword contributes at most one hit, however often it occurs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub positive: usize,
    pub negative: usize,
}

impl SentimentScore {
    pub fn new(positive: usize, negative: usize) -> Self {
        Self { positive, negative }
    }

    /// Derive the label: the larger side wins, ties are neutral.
    pub fn label(&self) -> SentimentLabel {
        if self.positive > self.negative {
            SentimentLabel::Positive
        } else if self.negative > self.positive {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn total_hits(&self) -> usize {
        self.positive + self.negative
    }
}
