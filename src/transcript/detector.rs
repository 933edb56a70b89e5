//! Transcript format detection by marker substrings

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::models::{Sentiment, TranscriptKind};

/// Emoji presentation selector that may trail a sentiment emoji
const VARIATION_SELECTOR: char = '\u{FE0F}';

/// Marker substrings of sentiment-annotated transcripts
///
/// Upstream sometimes hands us UTF-8 text that went through a Latin-1
/// round trip, so each emoji list and the summary ruler carry their
/// mis-encoded spelling too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
#[serde(default)]
pub struct TranscriptMarkers {
    /// Line that opens the summary block
    pub summary: Vec<String>,
    pub positive: Vec<String>,
    pub neutral: Vec<String>,
    pub negative: Vec<String>,
    /// Ruler characters around the summary block, longest spelling first
    pub separator: Vec<String>,
}

impl Default for TranscriptMarkers {
    fn default() -> Self {
        Self {
            summary: vec!["SENTIMENT ANALYSIS SUMMARY".to_string()],
            positive: vec!["🟢".to_string(), "ðŸŸ¢".to_string()],
            neutral: vec!["⚪".to_string(), "âšª".to_string()],
            negative: vec!["🔴".to_string(), "ðŸ”´".to_string()],
            separator: vec![
                "═".to_string(),
                "â•\u{90}".to_string(),
                "â•".to_string(),
            ],
        }
    }
}

impl TranscriptMarkers {
    /// Check that no marker list is empty
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyMarkers`] naming the first empty list.
    pub fn validate(&self) -> ConfigResult<()> {
        let lists = [
            ("summary", &self.summary),
            ("positive", &self.positive),
            ("neutral", &self.neutral),
            ("negative", &self.negative),
            ("separator", &self.separator),
        ];
        for (name, markers) in lists {
            if markers.iter().all(String::is_empty) {
                return Err(ConfigError::empty_markers(name));
            }
        }
        Ok(())
    }

    /// Whether `line` opens the summary block
    #[must_use]
    pub fn is_summary_marker(&self, line: &str) -> bool {
        contains_any(line, &self.summary)
    }

    /// Number of separator units when `line` is made only of separators
    #[must_use]
    pub fn separator_units(&self, line: &str) -> Option<usize> {
        let mut rest = line;
        let mut units = 0;
        while !rest.is_empty() {
            let current = rest;
            rest = self
                .separator
                .iter()
                .filter(|marker| !marker.is_empty())
                .find_map(move |marker| current.strip_prefix(marker.as_str()))?;
            units += 1;
        }
        (units > 0).then_some(units)
    }

    /// Split a leading sentiment emoji off a message body
    #[must_use]
    pub fn strip_sentiment_prefix<'a>(&self, body: &'a str) -> (Option<Sentiment>, &'a str) {
        let candidates = [
            (Sentiment::Positive, &self.positive),
            (Sentiment::Negative, &self.negative),
            (Sentiment::Neutral, &self.neutral),
        ];
        for (sentiment, markers) in candidates {
            for marker in markers.iter().filter(|marker| !marker.is_empty()) {
                if let Some(rest) = body.strip_prefix(marker.as_str()) {
                    let rest = rest.trim_start_matches(VARIATION_SELECTOR).trim_start();
                    return (Some(sentiment), rest);
                }
            }
        }
        (None, body)
    }

    fn all(&self) -> impl Iterator<Item = &String> {
        self.summary
            .iter()
            .chain(&self.positive)
            .chain(&self.neutral)
            .chain(&self.negative)
    }
}

/// Decides which parser a transcript needs
#[derive(Debug, Clone, Default)]
pub struct TranscriptDetector {
    markers: TranscriptMarkers,
}

impl TranscriptDetector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_markers(markers: TranscriptMarkers) -> Self {
        Self { markers }
    }

    /// `Sentiment` if any marker occurs anywhere in `text`, else `Standard`
    #[must_use]
    pub fn detect(&self, text: &str) -> TranscriptKind {
        if self
            .markers
            .all()
            .any(|marker| !marker.is_empty() && text.contains(marker.as_str()))
        {
            TranscriptKind::Sentiment
        } else {
            TranscriptKind::Standard
        }
    }
}

fn contains_any(text: &str, needles: &[String]) -> bool {
    needles
        .iter()
        .any(|needle| !needle.is_empty() && text.contains(needle.as_str()))
}
