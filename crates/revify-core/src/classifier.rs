//! Keyword-count sentiment classifier.
//!
//! A review is lower-cased once, then each keyword table is scanned for
//! substring hits. Matching is not word-bounded: "lagging"
//! and "lagoon" both hit `lag`. Each keyword counts at most once.
//!
//! # Usage
//!
//! ```
//! use revify_core::classify;
//! use revify_model::SentimentLabel;
//!
//! assert_eq!(classify("Excellent camera and smooth performance"), SentimentLabel::Positive);
//! assert_eq!(classify(""), SentimentLabel::Neutral);
//! ```

use revify_model::{SentimentLabel, SentimentScore};

/// Fixed table of substrings sharing one polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordSet {
    pub name: &'static str,
    pub words: &'static [&'static str],
}

impl KeywordSet {
    /// Number of distinct keywords occurring in already lower-cased text.
    pub fn hits(&self, lowered: &str) -> usize {
        self.words
            .iter()
            .filter(|word| lowered.contains(*word))
            .count()
    }

    /// Keywords occurring in already lower-cased text, in table order.
    pub fn matches(&self, lowered: &str) -> Vec<&'static str> {
        self.words
            .iter()
            .copied()
            .filter(|word| lowered.contains(word))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

pub const POSITIVE_KEYWORDS: KeywordSet = KeywordSet {
    name: "positive",
    words: &[
        "good",
        "great",
        "awesome",
        "nice",
        "love",
        "best",
        "fast",
        "excellent",
        "smooth",
    ],
};

pub const NEGATIVE_KEYWORDS: KeywordSet = KeywordSet {
    name: "negative",
    words: &[
        "bad", "worst", "slow", "hate", "problem", "poor", "battery", "lag", "heating",
    ],
};

/// Keywords found in one review, split by polarity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordMatches {
    pub positive: Vec<&'static str>,
    pub negative: Vec<&'static str>,
}

impl KeywordMatches {
    pub fn score(&self) -> SentimentScore {
        SentimentScore::new(self.positive.len(), self.negative.len())
    }
}

/// Count positive and negative keyword hits in `text`.
pub fn score(text: &str) -> SentimentScore {
    let lowered = text.to_lowercase();
    SentimentScore::new(
        POSITIVE_KEYWORDS.hits(&lowered),
        NEGATIVE_KEYWORDS.hits(&lowered),
    )
}

/// Classify a review. Total over all input; empty text is neutral.
///
/// Case-insensitive for ASCII letters. Other characters go through
/// Unicode lower-casing, which is not round-trip safe: `"ſlow"` stays
/// neutral while its upper-case form `"SLOW"` is negative.
pub fn classify(text: &str) -> SentimentLabel {
    score(text).label()
}

/// List the keywords that matched in `text`.
pub fn matched_keywords(text: &str) -> KeywordMatches {
    let lowered = text.to_lowercase();
    KeywordMatches {
        positive: POSITIVE_KEYWORDS.matches(&lowered),
        negative: NEGATIVE_KEYWORDS.matches(&lowered),
    }
}
