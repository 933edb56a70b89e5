//! Walk a meeting note through every stage
//!
//! This example shows how to:
//! 1. Classify lines and fold them into a section forest
//! 2. Pull the flat meeting info out of the forest
//! 3. Render the forest as HTML and as normalized text

use meetnote::extract::{ExtractionConfig, extract_info};
use meetnote::parser::{LineClassifier, content_lines, normalize_newlines, parse_sections};
use meetnote::render::{RenderOptions, render_markdown, render_sections};

fn main() {
    println!("=== Meeting Note Demo ===\n");

    let note = "Dạ, em đã sẵn sàng tóm tắt.\\n## Mock interview\\n### A. THÔNG TIN\\n#### 1. Date\\nMay 5 2024\\n#### 2. Attendance\\n- Lan\\n- Minh\\n### B. FEEDBACK\\n#### Strengths\\n- **Communication**\\n      - Clear structure\\n+ Keep the pace\\n";

    let classifier = LineClassifier::new();
    let text = normalize_newlines(note);

    println!("Classified lines:");
    for line in content_lines(&text) {
        let classified = classifier.classify(line);
        println!("  {:<16} {}", format!("{:?}", classified.kind), classified.text);
    }
    println!();

    let sections = parse_sections(note, &classifier);
    for section in &sections {
        println!(
            "Section '{}' with {} nodes",
            section.title,
            section.node_count()
        );
    }
    println!();

    let info = extract_info(&sections, &ExtractionConfig::default().with_title());
    println!("Meeting info:");
    println!("  title:     {}", info.title);
    println!("  date:      {}", info.date);
    println!("  attendees: {}", info.attendees);
    println!();

    println!("HTML:\n{}\n", render_sections(&sections, &RenderOptions::default()));
    println!("Normalized:\n{}", render_markdown(&sections));
}
