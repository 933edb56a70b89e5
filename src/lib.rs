#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Parsers and HTML formatters for AI-generated meeting notes and
//! interview transcripts.
//!
//! Every entry point is total: malformed input degrades to empty or partial
//! output, never an error.

uniffi::setup_scaffolding!();

pub mod config;
pub mod datetime;
pub mod error;
pub mod extract;
pub mod ffi;
pub mod models;
pub mod parser;
pub mod render;
pub mod transcript;

pub use config::NoteConfig;
pub use error::{ConfigError, MeetnoteError, MeetnoteResult, ParseError};
pub use models::{
    ListItem, MeetingInfo, ProcessedTranscript, Section, Sentiment, SpeakerStats,
    TranscriptKind, TranscriptMessage, TranscriptSummary,
};

use parser::LineClassifier;
use transcript::TranscriptDetector;

/// Parse meeting-note text into a section forest
#[must_use]
pub fn parse_meeting_note(text: &str) -> Vec<Section> {
    parse_meeting_note_with(text, &NoteConfig::default())
}

#[must_use]
pub fn parse_meeting_note_with(text: &str, config: &NoteConfig) -> Vec<Section> {
    parser::parse_sections(text, &LineClassifier::with_config(config.classifier.clone()))
}

/// Meeting-note text rendered as HTML; `""` for empty input
#[must_use]
pub fn format_meeting_note_for_display(text: &str) -> String {
    format_meeting_note_for_display_with(text, &NoteConfig::default())
}

#[must_use]
pub fn format_meeting_note_for_display_with(text: &str, config: &NoteConfig) -> String {
    let sections = parse_meeting_note_with(text, config);
    render::render_sections(&sections, &config.render)
}

/// Flat date/attendees/agenda/goals summary of a meeting note
#[must_use]
pub fn extract_meeting_info(text: &str) -> MeetingInfo {
    extract_meeting_info_with(text, &NoteConfig::default())
}

#[must_use]
pub fn extract_meeting_info_with(text: &str, config: &NoteConfig) -> MeetingInfo {
    let sections = parse_meeting_note_with(text, config);
    extract::extract_info(&sections, &config.extraction)
}

/// Meeting-note text normalized to canonical heading/bullet form
#[must_use]
pub fn render_meeting_note_markdown(text: &str) -> String {
    render_meeting_note_markdown_with(text, &NoteConfig::default())
}

#[must_use]
pub fn render_meeting_note_markdown_with(text: &str, config: &NoteConfig) -> String {
    render::render_markdown(&parse_meeting_note_with(text, config))
}

/// Which transcript format `text` is written in
#[must_use]
pub fn detect_transcript_type(text: &str) -> TranscriptKind {
    detect_transcript_type_with(text, &NoteConfig::default())
}

#[must_use]
pub fn detect_transcript_type_with(text: &str, config: &NoteConfig) -> TranscriptKind {
    TranscriptDetector::with_markers(config.markers.clone()).detect(text)
}

/// Detect and parse a transcript
#[must_use]
pub fn process_transcript(text: &str) -> ProcessedTranscript {
    process_transcript_with(text, &NoteConfig::default())
}

#[must_use]
pub fn process_transcript_with(text: &str, config: &NoteConfig) -> ProcessedTranscript {
    transcript::process(text, &config.markers)
}

/// Same as [`process_transcript`]
#[must_use]
pub fn get_transcript_data(text: &str) -> ProcessedTranscript {
    process_transcript(text)
}

/// Transcript text rendered as HTML; `""` for empty input
#[must_use]
pub fn format_transcript_for_display(text: &str) -> String {
    format_transcript_for_display_with(text, &NoteConfig::default())
}

#[must_use]
pub fn format_transcript_for_display_with(text: &str, config: &NoteConfig) -> String {
    let transcript = process_transcript_with(text, config);
    render::render_transcript(&transcript, &config.render)
}
