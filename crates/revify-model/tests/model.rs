//! Tests for revify-model types.

use revify_model::{BatchSummary, LabelStyle, RevifyError, SentimentLabel, SentimentScore};

#[test]
fn score_label_prefers_larger_side() {
    assert_eq!(SentimentScore::new(2, 0).label(), SentimentLabel::Positive);
    assert_eq!(SentimentScore::new(0, 3).label(), SentimentLabel::Negative);
    assert_eq!(SentimentScore::new(1, 2).label(), SentimentLabel::Negative);
}

#[test]
fn score_ties_are_neutral() {
    assert_eq!(SentimentScore::default().label(), SentimentLabel::Neutral);
    assert_eq!(SentimentScore::new(1, 1).label(), SentimentLabel::Neutral);
    assert_eq!(SentimentScore::new(4, 4).total_hits(), 8);
}

#[test]
fn summary_percentages() {
    let mut summary = BatchSummary::default();
    assert_eq!(summary.percentage(SentimentLabel::Positive), 0.0);

    summary.record(SentimentLabel::Positive, false);
    summary.record(SentimentLabel::Negative, false);
    summary.record(SentimentLabel::Negative, false);
    summary.record(SentimentLabel::Neutral, true);

    assert!((summary.percentage(SentimentLabel::Negative) - 50.0).abs() < 1e-9);
    assert!((summary.percentage(SentimentLabel::Positive) - 25.0).abs() < 1e-9);
    assert_eq!(
        summary.positive + summary.negative + summary.neutral,
        summary.rows
    );
}

#[test]
fn label_serializes_as_variant_name() {
    let json = serde_json::to_string(&SentimentLabel::Negative).expect("serialize label");
    assert_eq!(json, "\"Negative\"");
    let style: LabelStyle = serde_json::from_str("\"decorated\"").expect("deserialize style");
    assert_eq!(style, LabelStyle::Decorated);
}

#[test]
fn error_display() {
    let err = RevifyError::from(std::io::Error::other("stdin closed"));
    assert_eq!(err.to_string(), "io error: stdin closed");
}
