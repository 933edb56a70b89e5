//! HTML rendering of parsed transcripts

use super::RenderOptions;
use crate::datetime::format_time;
use crate::models::{
    ProcessedTranscript, Sentiment, TranscriptKind, TranscriptMessage, TranscriptSummary,
};

/// Speaker colors for standard transcripts, assigned in first-seen order
pub const SPEAKER_PALETTE: [&str; 6] = ["blue", "green", "purple", "orange", "pink", "teal"];

/// Render a transcript of either kind; empty transcripts render as `""`
#[must_use]
pub fn render_transcript(transcript: &ProcessedTranscript, options: &RenderOptions) -> String {
    if transcript.is_empty() {
        return String::new();
    }
    match transcript.kind {
        TranscriptKind::Sentiment => {
            render_sentiment(transcript.summary.as_ref(), &transcript.messages, options)
        }
        TranscriptKind::Standard => render_standard(&transcript.messages, options),
    }
}

const fn sentiment_classes(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "sentiment-positive bg-green-50 border-l-4 border-green-500",
        Sentiment::Neutral => "sentiment-neutral bg-gray-50 border-l-4 border-gray-400",
        Sentiment::Negative => "sentiment-negative bg-red-50 border-l-4 border-red-500",
    }
}

const fn sentiment_icon(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "🟢",
        Sentiment::Neutral => "⚪",
        Sentiment::Negative => "🔴",
    }
}

/// Header plus bubbles, one header per run of equal (speaker, timestamp)
#[must_use]
pub fn render_sentiment(
    summary: Option<&TranscriptSummary>,
    messages: &[TranscriptMessage],
    options: &RenderOptions,
) -> String {
    let mut out = String::from("<div class=\"transcript sentiment-transcript\">");

    if let Some(summary) = summary {
        render_summary(&mut out, summary);
    }

    let mut previous: Option<(&str, &str)> = None;
    for message in messages {
        let key = (message.speaker.as_str(), message.timestamp.as_str());
        if previous != Some(key) {
            if previous.is_some() {
                out.push_str("</div>");
            }
            out.push_str("<div class=\"message-group\">");
            render_header(&mut out, message, None, options);
            previous = Some(key);
        }

        let sentiment = message.sentiment.unwrap_or(Sentiment::Neutral);
        out.push_str("<div class=\"message-bubble ");
        out.push_str(sentiment_classes(sentiment));
        out.push_str("\"><span class=\"sentiment-icon\">");
        out.push_str(sentiment_icon(sentiment));
        out.push_str("</span><span class=\"message-text\">");
        out.push_str(&options.inline(&message.text));
        out.push_str("</span>");
        if let Some(score) = &message.sentiment_score {
            out.push_str("<span class=\"sentiment-score\">");
            out.push_str(&options.text(score));
            out.push_str("%</span>");
        }
        out.push_str("</div>");
    }
    if previous.is_some() {
        out.push_str("</div>");
    }

    out.push_str("</div>");
    out
}

fn render_summary(out: &mut String, summary: &TranscriptSummary) {
    out.push_str("<div class=\"transcript-summary\">");
    out.push_str("<h3 class=\"summary-title\">Sentiment Analysis Summary</h3>");
    out.push_str("<div class=\"summary-stats\">");
    out.push_str(&format!(
        "<span class=\"summary-total\">Total paragraphs: {}</span>",
        summary.total_paragraphs
    ));
    let rows = [
        ("positive", "text-green-600", "Positive", summary.positive, &summary.positive_percentage),
        ("neutral", "text-gray-600", "Neutral", summary.neutral, &summary.neutral_percentage),
        ("negative", "text-red-600", "Negative", summary.negative, &summary.negative_percentage),
    ];
    for (key, color, label, count, percentage) in rows {
        out.push_str(&format!(
            "<span class=\"summary-{key} {color}\">{label}: {count} ({percentage}%)</span>"
        ));
    }
    out.push_str("</div></div>");
}

fn render_header(
    out: &mut String,
    message: &TranscriptMessage,
    color: Option<&str>,
    options: &RenderOptions,
) {
    out.push_str("<div class=\"message-header\"><span class=\"speaker-name");
    if let Some(color) = color {
        out.push_str(" text-");
        out.push_str(color);
        out.push_str("-700");
    }
    out.push_str("\">");
    out.push_str(&options.text(&message.speaker));
    out.push_str("</span>");
    if !message.timestamp.is_empty() {
        out.push_str("<span class=\"message-time\">");
        out.push_str(&options.text(&format_time(&message.timestamp)));
        out.push_str("</span>");
    }
    out.push_str("</div>");
}

/// Turns colored per speaker; repeated turns by the same speaker are
/// tucked under the previous one without a header
#[must_use]
pub fn render_standard(messages: &[TranscriptMessage], options: &RenderOptions) -> String {
    let mut out = String::from("<div class=\"transcript standard-transcript\">");
    let mut speakers: Vec<&str> = Vec::new();
    let mut previous: Option<&str> = None;

    for message in messages {
        let speaker = message.speaker.as_str();
        let index = match speakers.iter().position(|seen| *seen == speaker) {
            Some(index) => index,
            None => {
                speakers.push(speaker);
                speakers.len() - 1
            }
        };
        let color = SPEAKER_PALETTE[index % SPEAKER_PALETTE.len()];

        if previous == Some(speaker) {
            out.push_str("<div class=\"speaker-continuation mt-1 ml-4\">");
        } else {
            out.push_str("<div class=\"speaker-turn mt-4\">");
            render_header(&mut out, message, Some(color), options);
        }
        out.push_str("<div class=\"message-text border-l-4 border-");
        out.push_str(color);
        out.push_str("-400 pl-3\">");
        out.push_str(&options.inline(&message.text));
        out.push_str("</div></div>");

        previous = Some(speaker);
    }

    out.push_str("</div>");
    out
}
