//! Sentiment-annotated transcripts

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::debug;

use super::{TranscriptMarkers, TranscriptParser, speaker_header, transcript_lines};
use crate::models::{
    ProcessedTranscript, Sentiment, TranscriptKind, TranscriptMessage, TranscriptSummary,
};

/// Separators shorter than this close the summary block
const SUMMARY_CLOSE_MAX_LEN: usize = 30;

static SENTIMENT_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*\[(POS|NEU|NEG):(\d+(?:\.\d+)?)%\]\s*$").expect("valid sentiment tag regex")
});

static TOTAL_PARAGRAPHS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Total paragraphs: (\d+)").expect("valid total regex"));

static POSITIVE_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Positive: (\d+) \((\d+\.\d+)%\)").expect("valid positive regex")
});

static NEUTRAL_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Neutral: (\d+) \((\d+\.\d+)%\)").expect("valid neutral regex"));

static NEGATIVE_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Negative: (\d+) \((\d+\.\d+)%\)").expect("valid negative regex")
});

/// Parser for transcripts with emoji sentiment markers and a summary block
#[derive(Debug, Clone, Default)]
pub struct SentimentParser {
    markers: TranscriptMarkers,
}

impl SentimentParser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_markers(markers: TranscriptMarkers) -> Self {
        Self { markers }
    }

    /// Build a message from a speaker header and its body line
    ///
    /// A trailing `[POS|NEU|NEG:NN.N%]` tag wins over the leading emoji.
    #[must_use]
    pub fn message(&self, speaker: String, timestamp: String, body: &str) -> TranscriptMessage {
        let (prefix_sentiment, rest) = self.markers.strip_sentiment_prefix(body.trim());

        let (text, tag) = match SENTIMENT_TAG.captures(rest) {
            Some(caps) => {
                let start = caps.get(0).map_or(rest.len(), |m| m.start());
                (&rest[..start], parse_tag(&caps))
            }
            None => (rest, None),
        };

        let (sentiment, score) = match tag {
            Some((sentiment, score)) => (sentiment, Some(score)),
            None => (prefix_sentiment.unwrap_or(Sentiment::Neutral), None),
        };

        TranscriptMessage::new(speaker, timestamp, text.trim()).with_sentiment(sentiment, score)
    }

    /// A separator line shorter than the block's own rulers
    fn is_closing_separator(&self, line: &str) -> bool {
        self.markers
            .separator_units(line)
            .is_some_and(|units| units < SUMMARY_CLOSE_MAX_LEN)
    }
}

impl TranscriptParser for SentimentParser {
    fn kind(&self) -> TranscriptKind {
        TranscriptKind::Sentiment
    }

    fn parse(&self, text: &str) -> ProcessedTranscript {
        let lines = transcript_lines(text);
        let mut transcript = ProcessedTranscript::empty(TranscriptKind::Sentiment);
        let mut summary_lines: Vec<&str> = Vec::new();
        let mut in_summary = false;

        let mut index = 0;
        while index < lines.len() {
            let line = lines[index].as_str();

            if self.markers.is_summary_marker(line) {
                in_summary = true;
                summary_lines.push(line);
                index += 1;
                continue;
            }

            if in_summary {
                if self.is_closing_separator(line) {
                    in_summary = false;
                } else {
                    summary_lines.push(line);
                }
                index += 1;
                continue;
            }

            if self.markers.separator_units(line).is_some() {
                index += 1;
                continue;
            }

            let Some((speaker, timestamp)) = speaker_header(line) else {
                index += 1;
                continue;
            };
            let Some(body) = lines.get(index + 1) else {
                break;
            };

            transcript
                .messages
                .push(self.message(speaker, timestamp, body));
            index += 2;
        }

        if !summary_lines.is_empty() {
            transcript.summary = parse_summary(&summary_lines.join("\n"));
            if transcript.summary.is_none() {
                debug!(lines = summary_lines.len(), "summary block did not match");
            }
        }

        transcript
    }
}

fn parse_tag(caps: &Captures<'_>) -> Option<(Sentiment, String)> {
    let sentiment = Sentiment::from_tag(caps.get(1)?.as_str())?;
    let score = caps.get(2)?.as_str().to_string();
    Some((sentiment, score))
}

fn count_and_percentage(re: &Regex, text: &str) -> Option<(u32, String)> {
    let caps = re.captures(text)?;
    let count: u32 = caps.get(1)?.as_str().parse().ok()?;
    let percentage = caps.get(2)?.as_str().to_string();
    Some((count, percentage))
}

/// Summary counts, or `None` unless every expected line is present
#[must_use]
pub fn parse_summary(text: &str) -> Option<TranscriptSummary> {
    let total_paragraphs: u32 = TOTAL_PARAGRAPHS
        .captures(text)?
        .get(1)?
        .as_str()
        .parse()
        .ok()?;
    let (positive, positive_percentage) = count_and_percentage(&POSITIVE_COUNT, text)?;
    let (neutral, neutral_percentage) = count_and_percentage(&NEUTRAL_COUNT, text)?;
    let (negative, negative_percentage) = count_and_percentage(&NEGATIVE_COUNT, text)?;

    Some(TranscriptSummary {
        total_paragraphs,
        positive,
        neutral,
        negative,
        positive_percentage,
        neutral_percentage,
        negative_percentage,
    })
}
