use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, ParseResult};

pub type Sections = Vec<Section>;

/// A heading-delimited node of a parsed meeting note
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub title: String,
    /// 1 for `##`, 2 for `###`, 3 for `####`
    pub level: u8,
    pub content: Option<String>,
    pub subsections: Sections,
    pub items: Vec<ListItem>,
}

impl Section {
    #[must_use]
    pub fn new(title: impl Into<String>, level: u8) -> Self {
        Self {
            title: title.into(),
            level,
            content: None,
            subsections: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Append a line of free text, newline-joined with what came before
    pub fn push_content(&mut self, line: &str) {
        match &mut self.content {
            Some(content) => {
                content.push('\n');
                content.push_str(line);
            }
            None => self.content = Some(line.to_string()),
        }
    }

    /// Content if present and not just whitespace
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.content
            .as_deref()
            .map(str::trim)
            .filter(|content| !content.is_empty())
    }

    #[must_use]
    pub const fn has_items(&self) -> bool {
        !self.items.is_empty()
    }

    #[must_use]
    pub const fn has_subsections(&self) -> bool {
        !self.subsections.is_empty()
    }

    /// Number of sections in this subtree, including `self`
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self
            .subsections
            .iter()
            .map(Self::node_count)
            .sum::<usize>()
    }
}

/// A bullet under a section
///
/// `subitems` come from `+` lines and `nested_items` from indented `-`/`*`
/// lines. They are separate on purpose and are never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub text: String,
    pub level: u8,
    pub subitems: Vec<String>,
    pub nested_items: Vec<ListItem>,
}

impl ListItem {
    #[must_use]
    pub fn new(text: impl Into<String>, level: u8) -> Self {
        Self {
            text: text.into(),
            level,
            subitems: Vec::new(),
            nested_items: Vec::new(),
        }
    }
}

/// Flat projection of the "information" part of a meeting note
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
pub struct MeetingInfo {
    pub title: String,
    pub date: String,
    pub attendees: String,
    pub agenda: String,
    pub goals: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }

    /// Short form used in `[POS:92.3%]` style tags
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Positive => "POS",
            Self::Neutral => "NEU",
            Self::Negative => "NEG",
        }
    }

    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "POS" => Some(Self::Positive),
            "NEU" => Some(Self::Neutral),
            "NEG" => Some(Self::Negative),
            _ => None,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = ParseError;

    fn from_str(s: &str) -> ParseResult<Self> {
        match s.trim() {
            "positive" => Ok(Self::Positive),
            "neutral" => Ok(Self::Neutral),
            "negative" => Ok(Self::Negative),
            other => Self::from_tag(other).ok_or_else(|| ParseError::unknown_sentiment(other)),
        }
    }
}

/// Which dialogue format a transcript is written in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptKind {
    Sentiment,
    #[default]
    Standard,
}

impl TranscriptKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sentiment => "sentiment",
            Self::Standard => "standard",
        }
    }
}

impl fmt::Display for TranscriptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TranscriptKind {
    type Err = ParseError;

    fn from_str(s: &str) -> ParseResult<Self> {
        match s.trim() {
            "sentiment" => Ok(Self::Sentiment),
            "standard" => Ok(Self::Standard),
            other => Err(ParseError::unknown_transcript_kind(other)),
        }
    }
}

macro_rules! impl_variant_predicates {
    ($ty:ident: $($variant:ident),*) => {
        impl $ty {
            paste::paste! {
                $(
                    #[must_use]
                    pub const fn [<is_ $variant:snake>](&self) -> bool {
                        matches!(self, Self::$variant)
                    }
                )*
            }
        }
    };
}

impl_variant_predicates!(Sentiment: Positive, Neutral, Negative);
impl_variant_predicates!(TranscriptKind: Sentiment, Standard);

/// One speaker turn
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptMessage {
    pub speaker: String,
    pub timestamp: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
    /// Percentage without the `%` sign, e.g. `"92.3"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment_score: Option<String>,
}

impl TranscriptMessage {
    #[must_use]
    pub fn new(
        speaker: impl Into<String>,
        timestamp: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            speaker: speaker.into(),
            timestamp: timestamp.into(),
            text: text.into(),
            sentiment: None,
            sentiment_score: None,
        }
    }

    #[must_use]
    pub fn with_sentiment(mut self, sentiment: Sentiment, score: Option<String>) -> Self {
        self.sentiment = Some(sentiment);
        self.sentiment_score = score;
        self
    }
}

/// Aggregate counts from a `SENTIMENT ANALYSIS SUMMARY` block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptSummary {
    pub total_paragraphs: u32,
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
    pub positive_percentage: String,
    pub neutral_percentage: String,
    pub negative_percentage: String,
}

/// Result of parsing a transcript of either kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
pub struct ProcessedTranscript {
    #[serde(rename = "type")]
    pub kind: TranscriptKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<TranscriptSummary>,
    pub messages: Vec<TranscriptMessage>,
}

impl ProcessedTranscript {
    #[must_use]
    pub const fn empty(kind: TranscriptKind) -> Self {
        Self {
            kind,
            summary: None,
            messages: Vec::new(),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.summary.is_none()
    }
}

/// Per-speaker turn and sentiment counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerStats {
    pub speaker: String,
    pub turns: u32,
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
    pub first_timestamp: String,
    pub last_timestamp: String,
}
