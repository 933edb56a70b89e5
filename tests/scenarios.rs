use meetnote::{
    MeetingInfo, Sentiment, TranscriptKind, TranscriptMessage, detect_transcript_type,
    extract_meeting_info, format_meeting_note_for_display, format_transcript_for_display,
    get_transcript_data, parse_meeting_note, process_transcript, render_meeting_note_markdown,
};
use rstest::rstest;

const MEETING_NOTE: &str = "\
Dạ, em đã sẵn sàng tóm tắt cuộc họp.

## Phỏng vấn thử
### A. THÔNG TIN
#### 1. Date
May 5 2024
#### 2. Attendance
- Lan (mentor)
- Minh (candidate)
### B. NHẬN XÉT
#### Điểm mạnh
- Communication
      - Clear structure
      - Good pace
+ keep it up
- Technical depth
#### Cần cải thiện
Prepare more STAR stories.
";

const SENTIMENT_TRANSCRIPT: &str = "\
INTERVIEWER [5/1/2024 10:00 AM]
⚪ Tell me about a conflict you resolved. [NEU:80.1%]

CANDIDATE [5/1/2024 10:01 AM]
🟢 Great question, I mediated a design dispute [POS:92.3%]

CANDIDATE [5/1/2024 10:01 AM]
🔴 It was stressful though

════════════════════════════════════════
📊 SENTIMENT ANALYSIS SUMMARY
════════════════════════════════════════
Total paragraphs: 3
Positive: 1 (33.3%)
Neutral: 1 (33.3%)
Negative: 1 (33.3%)
════════
";

#[test]
fn extract_date_scenario() {
    assert_eq!(
        extract_meeting_info("## Meeting\n### A. THÔNG TIN\n#### 1. Date\nMay 5 2024\n"),
        MeetingInfo {
            date: "May 5 2024".to_string(),
            ..MeetingInfo::default()
        }
    );
}

#[test]
fn nested_items_scenario() {
    let sections = parse_meeting_note(
        "## M\n### S\n#### Open\n- Item A\n      - Nested A1\n      - Nested A2\n- Item B\n",
    );
    let open = &sections[0].subsections[0].subsections[0];

    assert_eq!(open.items.len(), 2);
    assert_eq!(open.items[0].nested_items.len(), 2);
    assert_eq!(open.items[0].nested_items[0].text, "Nested A1");
    assert_eq!(open.items[0].nested_items[1].text, "Nested A2");
    assert!(open.items[1].nested_items.is_empty());
}

#[test]
fn sentiment_message_scenario() {
    let transcript = process_transcript("ALICE [5/1/2024 10:00 AM]\n🟢 Great idea [POS:92.3%]");

    assert_eq!(transcript.kind, TranscriptKind::Sentiment);
    assert_eq!(
        transcript.messages,
        vec![
            TranscriptMessage::new("ALICE", "5/1/2024 10:00 AM", "Great idea")
                .with_sentiment(Sentiment::Positive, Some("92.3".to_string()))
        ]
    );
}

#[test]
fn empty_note_formats_to_empty_string() {
    assert_eq!(format_meeting_note_for_display(""), "");
    assert_eq!(format_transcript_for_display(""), "");
}

#[test]
fn garbled_summary_scenario() {
    let text = SENTIMENT_TRANSCRIPT.replace("Negative: 1 (33.3%)\n", "");
    let transcript = process_transcript(&text);

    assert_eq!(transcript.summary, None);
    assert_eq!(transcript.messages.len(), 3);
}

#[test]
fn mis_encoded_transcript_keeps_messages() {
    let ruler = "â•\u{90}".repeat(40);
    let text = format!(
        "ðŸ“Š SENTIMENT ANALYSIS SUMMARY\n{ruler}\nTotal paragraphs: 1\n\
         Positive: 1 (100.0%)\nNeutral: 0 (0.0%)\nNegative: 0 (0.0%)\n{close}\n\
         ALICE [5/1/2024 10:00 AM]\nðŸŸ¢ Great idea [POS:92.3%]",
        close = "â•\u{90}".repeat(12)
    );
    let transcript = process_transcript(&text);

    assert_eq!(transcript.kind, TranscriptKind::Sentiment);
    assert!(transcript.summary.is_some());
    assert_eq!(
        transcript.messages,
        vec![
            TranscriptMessage::new("ALICE", "5/1/2024 10:00 AM", "Great idea")
                .with_sentiment(Sentiment::Positive, Some("92.3".to_string()))
        ]
    );
}

#[test]
fn emoji_variation_selector_is_dropped() {
    let transcript = process_transcript("ALICE\n⚪\u{FE0F} Okay then");
    assert_eq!(transcript.messages[0].text, "Okay then");
}

#[rstest]
#[case("")]
#[case("x")]
#[case("#")]
#[case("🟢")]
#[case("## ")]
#[case("\\n\\n\\n")]
#[case("+ + +\n      - -\n####")]
fn extraction_never_panics(#[case] text: &str) {
    let info = extract_meeting_info(text);
    assert_eq!(info.date, "");
    assert_eq!(info.attendees, "");
    assert_eq!(info.agenda, "");
    assert_eq!(info.goals, "");
}

#[rstest]
#[case("", TranscriptKind::Standard)]
#[case("BOB\nhello", TranscriptKind::Standard)]
#[case(SENTIMENT_TRANSCRIPT, TranscriptKind::Sentiment)]
fn detection_is_one_of_two(#[case] text: &str, #[case] expected: TranscriptKind) {
    assert_eq!(detect_transcript_type(text), expected);
}

#[test]
fn full_meeting_note() {
    let sections = parse_meeting_note(MEETING_NOTE);
    assert_eq!(sections.len(), 1);

    let info = extract_meeting_info(MEETING_NOTE);
    assert_eq!(info.title, "");
    assert_eq!(info.date, "May 5 2024");
    assert_eq!(info.attendees, "Lan (mentor), Minh (candidate)");

    let review = &sections[0].subsections[1];
    let strengths = &review.subsections[0];
    assert_eq!(strengths.items.len(), 2);
    assert_eq!(strengths.items[0].nested_items.len(), 2);
    assert_eq!(strengths.items[0].nested_items[1].subitems, vec!["keep it up"]);

    let html = format_meeting_note_for_display(MEETING_NOTE);
    assert!(html.starts_with("<div class=\"meeting-section\">"));
    assert!(!html.contains("sẵn sàng"));
    assert!(html.contains("<p class=\"section-content\">Prepare more STAR stories.</p>"));
}

#[test]
fn markdown_normalization_reparses_identically() {
    let normalized = render_meeting_note_markdown(MEETING_NOTE);
    assert_eq!(parse_meeting_note(&normalized), parse_meeting_note(MEETING_NOTE));
}

#[test]
fn full_sentiment_transcript() {
    let transcript = get_transcript_data(SENTIMENT_TRANSCRIPT);

    let summary = transcript.summary.as_ref().unwrap();
    assert_eq!(summary.total_paragraphs, 3);
    assert_eq!(summary.negative_percentage, "33.3");
    assert_eq!(transcript.messages[0].sentiment_score.as_deref(), Some("80.1"));

    let html = format_transcript_for_display(SENTIMENT_TRANSCRIPT);
    assert!(html.contains("transcript-summary"));
    assert_eq!(html.matches("class=\"message-group\"").count(), 2);
    assert_eq!(html.matches("message-bubble").count(), 3);
}

#[test]
fn standard_transcript_html() {
    let html = format_transcript_for_display("ANNA [5/1/2024 9:00 AM]\nHi\nANNA [5/1/2024 9:01 AM]\nStill me\nBEN\nHello");

    assert!(html.starts_with("<div class=\"transcript standard-transcript\">"));
    assert_eq!(html.matches("speaker-turn").count(), 2);
    assert_eq!(html.matches("speaker-continuation").count(), 1);
    assert!(html.contains("<span class=\"message-time\">9:00 AM</span>"));
}

#[test]
fn transcript_json_shape() {
    let transcript = process_transcript("ALICE [5/1/2024 10:00 AM]\n🟢 Great idea [POS:92.3%]");
    let json = serde_json::to_value(&transcript).unwrap();

    assert_eq!(json["type"], "sentiment");
    assert_eq!(json["messages"][0]["sentimentScore"], "92.3");
    assert_eq!(json["messages"][0]["sentiment"], "positive");
    assert!(json.get("summary").is_none());
}

#[test]
fn section_json_shape() {
    let sections = parse_meeting_note("## A\n- x\n      - y");
    let json = serde_json::to_value(&sections).unwrap();

    assert_eq!(json[0]["items"][0]["nestedItems"][0]["text"], "y");
    assert_eq!(json[0]["subsections"], serde_json::json!([]));
}
