//! Tests for single-review analysis.

use revify_core::{ReviewRequest, SelectionError, analyze_review};
use revify_model::{SentimentLabel, SentimentScore};

#[test]
fn analyzes_review_for_catalog_pick() {
    let request = ReviewRequest {
        review: "Excellent camera and smooth performance",
        custom_mobile: None,
        selected_mobile: Some(3),
    };

    let analysis = analyze_review(&request).unwrap();

    assert_eq!(analysis.mobile, "OnePlus 12");
    assert_eq!(analysis.label, SentimentLabel::Positive);
    assert_eq!(analysis.score, SentimentScore::new(2, 0));
    assert_eq!(analysis.positive_keywords, vec!["excellent", "smooth"]);
    assert!(analysis.negative_keywords.is_empty());
}

#[test]
fn mobile_is_checked_before_review() {
    let request = ReviewRequest {
        review: "",
        custom_mobile: None,
        selected_mobile: None,
    };
    assert_eq!(analyze_review(&request), Err(SelectionError::NoMobile));
}

#[test]
fn blank_review_is_rejected() {
    let request = ReviewRequest {
        review: "   \n",
        custom_mobile: Some("Fairphone 5"),
        selected_mobile: None,
    };
    assert_eq!(analyze_review(&request), Err(SelectionError::EmptyReview));
    assert_eq!(
        SelectionError::EmptyReview.to_string(),
        "Please enter a review before analysis."
    );
}

#[test]
fn analysis_serializes_for_json_output() {
    let request = ReviewRequest {
        review: "Worst phone ever, keeps heating and lagging",
        custom_mobile: Some("Realme GT 6"),
        selected_mobile: None,
    };

    let analysis = analyze_review(&request).unwrap();
    let json = serde_json::to_value(&analysis).unwrap();

    assert_eq!(json["label"], "Negative");
    assert_eq!(json["score"]["negative"], 3);
    assert_eq!(json["mobile"], "Realme GT 6");
}
