//! Plain speaker/message transcripts

use super::{TranscriptParser, speaker_header, transcript_lines};
use crate::models::{ProcessedTranscript, TranscriptKind, TranscriptMessage};

/// Parser for transcripts without sentiment annotations
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardParser;

impl TranscriptParser for StandardParser {
    fn kind(&self) -> TranscriptKind {
        TranscriptKind::Standard
    }

    fn parse(&self, text: &str) -> ProcessedTranscript {
        let lines = transcript_lines(text);
        let mut transcript = ProcessedTranscript::empty(TranscriptKind::Standard);

        let mut index = 0;
        while index < lines.len() {
            let Some((speaker, timestamp)) = speaker_header(&lines[index]) else {
                index += 1;
                continue;
            };
            let Some(body) = lines.get(index + 1) else {
                break;
            };

            transcript
                .messages
                .push(TranscriptMessage::new(speaker, timestamp, body.as_str()));
            index += 2;
        }

        transcript
    }
}
