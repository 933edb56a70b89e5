//! Aggregates over parsed transcript messages

use crate::models::{Sentiment, SpeakerStats, TranscriptMessage, TranscriptSummary};

/// Turn and sentiment counts per speaker, in first-seen order
#[must_use]
pub fn speaker_stats(messages: &[TranscriptMessage]) -> Vec<SpeakerStats> {
    let mut stats: Vec<SpeakerStats> = Vec::new();

    for message in messages {
        let index = match stats.iter().position(|s| s.speaker == message.speaker) {
            Some(index) => index,
            None => {
                stats.push(SpeakerStats {
                    speaker: message.speaker.clone(),
                    first_timestamp: message.timestamp.clone(),
                    ..SpeakerStats::default()
                });
                stats.len() - 1
            }
        };
        let entry = &mut stats[index];

        entry.turns += 1;
        match message.sentiment {
            Some(Sentiment::Positive) => entry.positive += 1,
            Some(Sentiment::Neutral) => entry.neutral += 1,
            Some(Sentiment::Negative) => entry.negative += 1,
            None => {}
        }
        if !message.timestamp.is_empty() {
            if entry.first_timestamp.is_empty() {
                entry.first_timestamp.clone_from(&message.timestamp);
            }
            entry.last_timestamp.clone_from(&message.timestamp);
        }
    }

    stats
}

/// Recompute a summary from sentiment-labelled messages
///
/// Unlabelled messages are ignored. Returns `None` when nothing is labelled.
#[must_use]
pub fn summarize_messages(messages: &[TranscriptMessage]) -> Option<TranscriptSummary> {
    let mut summary = TranscriptSummary::default();

    for sentiment in messages.iter().filter_map(|message| message.sentiment) {
        summary.total_paragraphs += 1;
        match sentiment {
            Sentiment::Positive => summary.positive += 1,
            Sentiment::Neutral => summary.neutral += 1,
            Sentiment::Negative => summary.negative += 1,
        }
    }

    if summary.total_paragraphs == 0 {
        return None;
    }

    let total = f64::from(summary.total_paragraphs);
    let percentage = |count: u32| format!("{:.1}", f64::from(count) * 100.0 / total);
    summary.positive_percentage = percentage(summary.positive);
    summary.neutral_percentage = percentage(summary.neutral);
    summary.negative_percentage = percentage(summary.negative);

    Some(summary)
}
