//! Canonical heading/bullet text for a section forest
//!
//! Output re-parses to the same forest, so hosts can store the normalized
//! form instead of the raw summarizer output.

use crate::models::{ListItem, Section};

const NESTED_INDENT: &str = "      ";

/// Serialize sections back to `##`/`-`/`+` text
#[must_use]
pub fn render_markdown(sections: &[Section]) -> String {
    let mut output = String::new();
    for section in sections {
        serialize_section(&mut output, section);
    }
    output
}

fn serialize_section(output: &mut String, section: &Section) {
    output.push_str(&"#".repeat(usize::from(section.level.clamp(1, 3)) + 1));
    output.push(' ');
    output.push_str(&section.title);
    output.push('\n');

    if let Some(content) = &section.content {
        for line in content.lines().filter(|line| !line.trim().is_empty()) {
            output.push_str(line);
            output.push('\n');
        }
    }

    for item in &section.items {
        serialize_item(output, item, "");
    }

    for subsection in &section.subsections {
        serialize_section(output, subsection);
    }
}

fn serialize_item(output: &mut String, item: &ListItem, indent: &str) {
    output.push_str(indent);
    output.push_str("- ");
    output.push_str(&item.text);
    output.push('\n');

    for subitem in &item.subitems {
        output.push_str("+ ");
        output.push_str(subitem);
        output.push('\n');
    }

    for nested in &item.nested_items {
        serialize_item(output, nested, NESTED_INDENT);
    }
}
