//! Keyword sentiment classification for mobile product reviews.

pub mod analysis;
pub mod batch;
pub mod classifier;
pub mod error;
pub mod mobile;

pub use analysis::{ReviewAnalysis, ReviewRequest, analyze_review};
pub use batch::{
    ClassifiedBatch, MOBILE_COLUMN, PREDICTED_SENTIMENT_COLUMN, REQUIRED_COLUMNS, REVIEW_COLUMN,
    classify_batch, classify_reviews, normalize_column_name, normalize_columns,
    validate_required_columns,
};
pub use classifier::{
    KeywordMatches, KeywordSet, NEGATIVE_KEYWORDS, POSITIVE_KEYWORDS, classify, matched_keywords,
    score,
};
pub use error::{BatchError, SelectionError};
pub use mobile::{KNOWN_MOBILES, find_mobile, resolve_mobile};
