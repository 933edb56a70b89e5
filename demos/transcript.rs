//! Detect, parse and render an interview transcript

use meetnote::datetime::{conversation_span, format_date};
use meetnote::transcript::{speaker_stats, summarize_messages};
use meetnote::{detect_transcript_type, format_transcript_for_display, process_transcript};

fn main() {
    println!("=== Transcript Demo ===\n");

    let text = r"INTERVIEWER [5/1/2024 10:00 AM]
⚪ Walk me through your last project. [NEU:78.0%]

CANDIDATE [5/1/2024 10:02 AM]
🟢 I led the migration to the new billing service [POS:91.5%]

CANDIDATE [5/1/2024 10:02 AM]
🔴 The rollout slipped by two weeks

INTERVIEWER [5/1/2024 10:20 AM]
🟢 Thanks, that was helpful";

    let kind = detect_transcript_type(text);
    println!("Detected kind: {kind}");

    let transcript = process_transcript(text);
    println!("Parsed {} messages", transcript.messages.len());
    if let Some(first) = transcript.messages.first() {
        println!("Held on {}", format_date(&first.timestamp));
    }
    if let Some(span) = conversation_span(&transcript.messages) {
        println!("Conversation span: {} minutes", span.num_minutes());
    }
    println!();

    println!("Per speaker:");
    for stats in speaker_stats(&transcript.messages) {
        println!(
            "  {:<12} turns={} +{} ={} -{}",
            stats.speaker, stats.turns, stats.positive, stats.neutral, stats.negative
        );
    }

    match summarize_messages(&transcript.messages) {
        Some(summary) => println!(
            "\nRecomputed summary: {}% positive, {}% negative\n",
            summary.positive_percentage, summary.negative_percentage
        ),
        None => println!("\nNo sentiment labels found\n"),
    }

    println!("HTML:\n{}", format_transcript_for_display(text));
}
