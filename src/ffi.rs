//! `UniFFI` bindings for the meeting-note and transcript parsers
//!
//! This module exposes the parsing entry points to Swift, Kotlin and Python
//! hosts. Free functions use the default configuration; [`NoteEngine`]
//! carries a validated custom one.

use std::sync::{PoisonError, RwLock};

use crate::config::NoteConfig;
use crate::error::{ConfigError, ParseError};
use crate::models::{
    MeetingInfo, ProcessedTranscript, Section, SpeakerStats, TranscriptKind,
};
use crate::transcript::speaker_stats;

#[uniffi::export]
pub fn parse_meeting_note(text: &str) -> Vec<Section> {
    crate::parse_meeting_note(text)
}

#[uniffi::export]
pub fn format_meeting_note_for_display(text: &str) -> String {
    crate::format_meeting_note_for_display(text)
}

#[uniffi::export]
pub fn extract_meeting_info(text: &str) -> MeetingInfo {
    crate::extract_meeting_info(text)
}

#[uniffi::export]
pub fn render_meeting_note_markdown(text: &str) -> String {
    crate::render_meeting_note_markdown(text)
}

#[uniffi::export]
pub fn detect_transcript_type(text: &str) -> TranscriptKind {
    crate::detect_transcript_type(text)
}

#[uniffi::export]
pub fn process_transcript(text: &str) -> ProcessedTranscript {
    crate::process_transcript(text)
}

#[uniffi::export]
pub fn get_transcript_data(text: &str) -> ProcessedTranscript {
    crate::get_transcript_data(text)
}

#[uniffi::export]
pub fn format_transcript_for_display(text: &str) -> String {
    crate::format_transcript_for_display(text)
}

/// Per-speaker turn and sentiment counts of a raw transcript
#[uniffi::export]
pub fn transcript_speaker_stats(text: &str) -> Vec<SpeakerStats> {
    speaker_stats(&crate::process_transcript(text).messages)
}

/// Parse `"sentiment"` or `"standard"`
///
/// # Errors
///
/// Returns [`ParseError::UnknownTranscriptKind`] for any other label.
#[uniffi::export]
pub fn parse_transcript_kind(label: &str) -> Result<TranscriptKind, ParseError> {
    label.parse()
}

#[uniffi::export]
pub fn default_config() -> NoteConfig {
    NoteConfig::default()
}

/// Parser front-end bound to one configuration
#[derive(Debug, uniffi::Object)]
pub struct NoteEngine {
    config: RwLock<NoteConfig>,
}

impl NoteEngine {
    fn current(&self) -> NoteConfig {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[uniffi::export]
impl NoteEngine {
    /// Create an engine after validating `config`
    ///
    /// # Errors
    ///
    /// Returns the first configuration problem found.
    #[uniffi::constructor]
    pub fn new(config: NoteConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config: RwLock::new(config),
        })
    }

    /// Replace the configuration; the old one stays on error
    ///
    /// # Errors
    ///
    /// Returns the first configuration problem found.
    pub fn set_config(&self, config: NoteConfig) -> Result<(), ConfigError> {
        config.validate()?;
        *self
            .config
            .write()
            .unwrap_or_else(PoisonError::into_inner) = config;
        Ok(())
    }

    pub fn config(&self) -> NoteConfig {
        self.current()
    }

    pub fn parse_meeting_note(&self, text: &str) -> Vec<Section> {
        crate::parse_meeting_note_with(text, &self.current())
    }

    pub fn format_meeting_note_for_display(&self, text: &str) -> String {
        crate::format_meeting_note_for_display_with(text, &self.current())
    }

    pub fn extract_meeting_info(&self, text: &str) -> MeetingInfo {
        crate::extract_meeting_info_with(text, &self.current())
    }

    pub fn render_meeting_note_markdown(&self, text: &str) -> String {
        crate::render_meeting_note_markdown_with(text, &self.current())
    }

    pub fn detect_transcript_type(&self, text: &str) -> TranscriptKind {
        crate::detect_transcript_type_with(text, &self.current())
    }

    pub fn process_transcript(&self, text: &str) -> ProcessedTranscript {
        crate::process_transcript_with(text, &self.current())
    }

    pub fn format_transcript_for_display(&self, text: &str) -> String {
        crate::format_transcript_for_display_with(text, &self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_rejects_invalid_config() {
        let mut config = NoteConfig::default();
        config.classifier.nested_indent = 0;

        assert!(matches!(
            NoteEngine::new(config),
            Err(ConfigError::InvalidIndent)
        ));
    }

    #[test]
    fn engine_uses_its_config() {
        let engine = NoteEngine::new(NoteConfig::escaped()).unwrap();
        let html = engine.format_meeting_note_for_display("## <A>");
        assert!(html.contains("&lt;A&gt;"));

        assert!(format_meeting_note_for_display("## <A>").contains("<A>"));
    }

    #[test]
    fn set_config_keeps_old_on_error() {
        let engine = NoteEngine::new(NoteConfig::default()).unwrap();
        let mut bad = NoteConfig::default();
        bad.markers.summary.clear();

        assert_eq!(
            engine.set_config(bad),
            Err(ConfigError::empty_markers("summary"))
        );
        assert_eq!(engine.config(), NoteConfig::default());
    }

    #[test]
    fn markdown_follows_engine_classifier() {
        let mut config = NoteConfig::default();
        config.classifier.nested_indent = 2;
        let engine = NoteEngine::new(config).unwrap();
        let text = "## A\n- top\n  - nested";

        let custom = engine.render_meeting_note_markdown(text);
        assert!(custom.contains("      - nested"));

        let default = render_meeting_note_markdown(text);
        assert!(!default.contains("      - nested"));
    }

    #[test]
    fn kind_labels() {
        assert_eq!(parse_transcript_kind("sentiment"), Ok(TranscriptKind::Sentiment));
        assert!(parse_transcript_kind("other").is_err());
    }

    #[test]
    fn speaker_stats_from_text() {
        let stats = transcript_speaker_stats("ALICE\n🟢 hi\nBOB\n🔴 no\nALICE\n⚪ ok");
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].turns, 2);
    }
}
