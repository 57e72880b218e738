//! Single-review analysis.

use serde::Serialize;
use tracing::debug;

use revify_model::{SentimentLabel, SentimentScore};

use crate::classifier::matched_keywords;
use crate::error::SelectionError;
use crate::mobile::resolve_mobile;

/// One review to analyze, plus how the mobile was chosen.
#[derive(Debug, Clone, Default)]
pub struct ReviewRequest<'a> {
    pub review: &'a str,
    /// Free-text mobile name; wins when non-blank.
    pub custom_mobile: Option<&'a str>,
    /// 1-based catalog position.
    pub selected_mobile: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewAnalysis {
    pub mobile: String,
    pub label: SentimentLabel,
    pub score: SentimentScore,
    pub positive_keywords: Vec<&'static str>,
    pub negative_keywords: Vec<&'static str>,
}

/// Resolve the mobile, reject blank reviews, then classify.
pub fn analyze_review(request: &ReviewRequest<'_>) -> Result<ReviewAnalysis, SelectionError> {
    let mobile = resolve_mobile(request.custom_mobile, request.selected_mobile)?;
    if request.review.trim().is_empty() {
        return Err(SelectionError::EmptyReview);
    }
    let matches = matched_keywords(request.review);
    let score = matches.score();
    debug!(
        mobile = %mobile,
        positive_hits = score.positive,
        negative_hits = score.negative,
        "review scored"
    );
    Ok(ReviewAnalysis {
        mobile,
        label: score.label(),
        score,
        positive_keywords: matches.positive,
        negative_keywords: matches.negative,
    })
}
