//! Sentiment labels and their presentation forms.
//!
//! The three-way [`SentimentLabel`] is the canonical classifier output.
//! Decorative glyphs are a presentation choice selected with [`LabelStyle`]
//! and never change which label a review carries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentiment assigned to a single review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SentimentLabel {
    /// More positive keyword hits than negative ones.
    Positive,
    /// More negative keyword hits than positive ones.
    Negative,
    /// Equal hit counts, including no hits at all.
    Neutral,
}

impl SentimentLabel {
    /// All labels in display order.
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ];

    /// Returns the canonical label text.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }

    /// Returns the glyph shown next to the label in decorated output.
    pub fn glyph(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "😀",
            SentimentLabel::Negative => "😞",
            SentimentLabel::Neutral => "😐",
        }
    }

    /// Renders the label in the requested style.
    pub fn render(&self, style: LabelStyle) -> String {
        match style {
            LabelStyle::Plain => self.as_str().to_string(),
            LabelStyle::Decorated => format!("{} {}", self.as_str(), self.glyph()),
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SentimentLabel {
    type Err = String;

    /// Parse a label, accepting the decorated form ("Positive 😀") as well.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let word = parts.next().unwrap_or("");
        let label = match word.to_uppercase().as_str() {
            "POSITIVE" => SentimentLabel::Positive,
            "NEGATIVE" => SentimentLabel::Negative,
            "NEUTRAL" => SentimentLabel::Neutral,
            _ => return Err(format!("Unknown sentiment label: {s}")),
        };
        match (parts.next(), parts.next()) {
            (None, None) => Ok(label),
            (Some(glyph), None) if glyph == label.glyph() => Ok(label),
            _ => Err(format!("Unknown sentiment label: {s}")),
        }
    }
}

/// How labels are written to tables and the terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    /// Canonical text only, e.g. `Positive`.
    #[default]
    Plain,
    /// Canonical text followed by a glyph, e.g. `Positive 😀`.
    Decorated,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_from_str() {
        assert_eq!(
            "positive".parse::<SentimentLabel>().unwrap(),
            SentimentLabel::Positive
        );
        assert_eq!(
            "Negative 😞".parse::<SentimentLabel>().unwrap(),
            SentimentLabel::Negative
        );
        assert_eq!(
            "  NEUTRAL ".parse::<SentimentLabel>().unwrap(),
            SentimentLabel::Neutral
        );
        assert!("mixed".parse::<SentimentLabel>().is_err());
        assert!("Positive garbage".parse::<SentimentLabel>().is_err());
        assert!("Positive 😞".parse::<SentimentLabel>().is_err());
        assert!("Neutral 😐 😐".parse::<SentimentLabel>().is_err());
        assert!("".parse::<SentimentLabel>().is_err());
    }

    #[test]
    fn test_render_styles() {
        assert_eq!(SentimentLabel::Positive.render(LabelStyle::Plain), "Positive");
        assert_eq!(
            SentimentLabel::Neutral.render(LabelStyle::Decorated),
            "Neutral 😐"
        );
    }

    #[test]
    fn test_decorated_round_trips_to_same_label() {
        for label in SentimentLabel::ALL {
            let rendered = label.render(LabelStyle::Decorated);
            assert_eq!(rendered.parse::<SentimentLabel>().unwrap(), label);
        }
    }
}
