//! Transcript timestamp helpers
//!
//! Timestamps arrive as `M/D/YYYY H:MM AM`. Anything we cannot parse is
//! passed through untouched so display code never loses information.

use chrono::{NaiveDateTime, TimeDelta};

use crate::models::TranscriptMessage;

const FORMATS: [&str; 2] = ["%m/%d/%Y %I:%M %p", "%m/%d/%Y %I:%M:%S %p"];

/// Parse a transcript timestamp such as `5/1/2024 10:00 AM`
#[must_use]
pub fn parse_timestamp(timestamp: &str) -> Option<NaiveDateTime> {
    let timestamp = timestamp.trim();
    FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(timestamp, format).ok())
}

/// Clock time like `10:00 AM`, or the input unchanged if unparsable
#[must_use]
pub fn format_time(timestamp: &str) -> String {
    parse_timestamp(timestamp).map_or_else(
        || timestamp.to_string(),
        |parsed| parsed.format("%-I:%M %p").to_string(),
    )
}

/// Calendar date like `May 1, 2024`, or the input unchanged if unparsable
#[must_use]
pub fn format_date(timestamp: &str) -> String {
    parse_timestamp(timestamp).map_or_else(
        || timestamp.to_string(),
        |parsed| parsed.format("%B %-d, %Y").to_string(),
    )
}

/// Time between the first and last parsable message timestamps
#[must_use]
pub fn conversation_span(messages: &[TranscriptMessage]) -> Option<TimeDelta> {
    let mut stamps = messages
        .iter()
        .filter_map(|message| parse_timestamp(&message.timestamp));
    let first = stamps.next()?;
    let last = stamps.last().unwrap_or(first);
    Some(last - first)
}
