//! Dialogue transcript parsing
//!
//! Two formats come out of the transcription service. Both start each turn
//! with a speaker line such as `ALICE [5/1/2024 10:00 AM]` and put the
//! message on the following line. The sentiment variant prefixes messages
//! with a colored emoji, may tag them with `[POS:92.3%]`, and may carry a
//! summary block with aggregate counts.

pub mod detector;
pub mod sentiment;
pub mod standard;
pub mod stats;

pub use detector::{TranscriptDetector, TranscriptMarkers};
pub use sentiment::SentimentParser;
pub use standard::StandardParser;
pub use stats::{speaker_stats, summarize_messages};

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{ProcessedTranscript, TranscriptKind};
use crate::parser::{content_lines, normalize_newlines};

static SPEAKER_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\w+)(?:\s+\[([\d/]+\s+[\d:]+\s+[AP]M)\])?").expect("valid speaker regex")
});

/// Trait for the per-format transcript parsers
pub trait TranscriptParser: Send + Sync {
    /// The format this parser handles
    fn kind(&self) -> TranscriptKind;

    /// Parse raw transcript text; never fails, unknown lines are skipped
    fn parse(&self, text: &str) -> ProcessedTranscript;
}

/// Speaker name and (possibly empty) timestamp from a header line
#[must_use]
pub fn speaker_header(line: &str) -> Option<(String, String)> {
    let caps = SPEAKER_HEADER.captures(line)?;
    let speaker = caps.get(1)?.as_str().to_string();
    let timestamp = caps
        .get(2)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
    Some((speaker, timestamp))
}

/// Trimmed non-blank lines of a transcript
pub(crate) fn transcript_lines(text: &str) -> Vec<String> {
    let text = normalize_newlines(text);
    content_lines(&text)
        .map(|line| line.trim().to_string())
        .collect()
}

/// Parser for `kind`
#[must_use]
pub fn parser_for(kind: TranscriptKind, markers: &TranscriptMarkers) -> Box<dyn TranscriptParser> {
    match kind {
        TranscriptKind::Sentiment => Box::new(SentimentParser::with_markers(markers.clone())),
        TranscriptKind::Standard => Box::new(StandardParser),
    }
}

/// Detect the format of `text` and parse it accordingly
#[must_use]
pub fn process(text: &str, markers: &TranscriptMarkers) -> ProcessedTranscript {
    if text.trim().is_empty() {
        return ProcessedTranscript::empty(TranscriptKind::Standard);
    }

    let kind = TranscriptDetector::with_markers(markers.clone()).detect(text);
    let transcript = parser_for(kind, markers).parse(text);

    tracing::debug!(
        kind = %kind,
        messages = transcript.messages.len(),
        has_summary = transcript.summary.is_some(),
        "processed transcript"
    );
    transcript
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_with_timestamp() {
        assert_eq!(
            speaker_header("ALICE [5/1/2024 10:00 AM]"),
            Some(("ALICE".to_string(), "5/1/2024 10:00 AM".to_string()))
        );
    }

    #[test]
    fn header_without_timestamp() {
        assert_eq!(
            speaker_header("Interviewer"),
            Some(("Interviewer".to_string(), String::new()))
        );
    }

    #[test]
    fn non_word_lines_are_not_headers() {
        assert_eq!(speaker_header("🟢 hello"), None);
        assert_eq!(speaker_header("════"), None);
        assert_eq!(speaker_header("  indented"), None);
    }

    #[test]
    fn process_picks_parser_by_kind() {
        let markers = TranscriptMarkers::default();

        let standard = process("ALICE\nHello", &markers);
        assert_eq!(standard.kind, TranscriptKind::Standard);
        assert_eq!(standard.messages[0].sentiment, None);

        let sentiment = process("ALICE\n🟢 Hello", &markers);
        assert_eq!(sentiment.kind, TranscriptKind::Sentiment);
        assert!(sentiment.messages[0].sentiment.is_some());
    }

    #[test]
    fn parser_for_matches_requested_kind() {
        let markers = TranscriptMarkers::default();
        for kind in [TranscriptKind::Sentiment, TranscriptKind::Standard] {
            assert_eq!(parser_for(kind, &markers).kind(), kind);
        }
    }

    #[test]
    fn empty_text_is_empty_standard() {
        let transcript = process("", &TranscriptMarkers::default());
        assert_eq!(transcript, ProcessedTranscript::empty(TranscriptKind::Standard));
    }
}
