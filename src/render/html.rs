//! HTML rendering of meeting-note section forests

use super::RenderOptions;
use crate::models::{ListItem, Section};

struct LevelStyle {
    container: &'static str,
    heading_tag: &'static str,
    heading_class: &'static str,
}

impl LevelStyle {
    /// Styling comes from the section's own level, not its depth, so a
    /// `###` section with no `##` above it still renders as a subsection.
    const fn for_level(level: u8) -> Self {
        match level {
            0 | 1 => Self {
                container: "meeting-section",
                heading_tag: "h2",
                heading_class: "section-title",
            },
            2 => Self {
                container: "meeting-subsection",
                heading_tag: "h3",
                heading_class: "subsection-title",
            },
            _ => Self {
                container: "meeting-subsubsection ml-4 pl-4 border-l-2 border-gray-200",
                heading_tag: "h4",
                heading_class: "subsubsection-title",
            },
        }
    }
}

/// Render a section forest as a single HTML string
///
/// An empty forest renders as the empty string.
#[must_use]
pub fn render_sections(sections: &[Section], options: &RenderOptions) -> String {
    let mut out = String::new();
    for section in sections {
        render_section(&mut out, section, options);
    }
    out
}

fn render_section(out: &mut String, section: &Section, options: &RenderOptions) {
    let style = LevelStyle::for_level(section.level);

    out.push_str("<div class=\"");
    out.push_str(style.container);
    out.push_str("\">");

    out.push('<');
    out.push_str(style.heading_tag);
    out.push_str(" class=\"");
    out.push_str(style.heading_class);
    out.push_str("\">");
    out.push_str(&options.inline(&section.title));
    out.push_str("</");
    out.push_str(style.heading_tag);
    out.push('>');

    if let Some(content) = section.text() {
        out.push_str("<p class=\"section-content\">");
        let lines: Vec<String> = content.lines().map(|line| options.inline(line)).collect();
        out.push_str(&lines.join("<br>"));
        out.push_str("</p>");
    }

    if section.has_items() {
        render_items(out, &section.items, "section-list", options);
    }

    if section.has_subsections() {
        for subsection in &section.subsections {
            render_section(out, subsection, options);
        }
    }

    out.push_str("</div>");
}

fn render_items(out: &mut String, items: &[ListItem], class: &str, options: &RenderOptions) {
    out.push_str("<ul class=\"");
    out.push_str(class);
    out.push_str("\">");

    for item in items {
        out.push_str("<li class=\"list-item\">");
        out.push_str(&options.inline(&item.text));

        if !item.nested_items.is_empty() {
            render_items(out, &item.nested_items, "nested-list", options);
        }

        if !item.subitems.is_empty() {
            out.push_str("<ul class=\"sub-list\">");
            for subitem in &item.subitems {
                out.push_str("<li class=\"sub-item\">");
                out.push_str(&options.inline(subitem));
                out.push_str("</li>");
            }
            out.push_str("</ul>");
        }

        out.push_str("</li>");
    }

    out.push_str("</ul>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{LineClassifier, parse_sections};

    fn render(text: &str) -> String {
        let sections = parse_sections(text, &LineClassifier::new());
        render_sections(&sections, &RenderOptions::default())
    }

    #[test]
    fn empty_forest_is_empty_string() {
        assert_eq!(render(""), "");
        assert_eq!(render_sections(&[], &RenderOptions::default()), "");
    }

    #[test]
    fn renders_heading_and_content() {
        assert_eq!(
            render("## Title\nline one\nline two"),
            "<div class=\"meeting-section\"><h2 class=\"section-title\">Title</h2>\
             <p class=\"section-content\">line one<br>line two</p></div>"
        );
    }

    #[test]
    fn renders_nested_levels() {
        let html = render("## A\n### B\n#### C\ntext");

        assert_eq!(
            html,
            "<div class=\"meeting-section\"><h2 class=\"section-title\">A</h2>\
             <div class=\"meeting-subsection\"><h3 class=\"subsection-title\">B</h3>\
             <div class=\"meeting-subsubsection ml-4 pl-4 border-l-2 border-gray-200\">\
             <h4 class=\"subsubsection-title\">C</h4>\
             <p class=\"section-content\">text</p></div></div></div>"
        );
    }

    #[test]
    fn root_level_subsection_keeps_its_own_style() {
        let html = render("### Loose\nnote");

        assert_eq!(
            html,
            "<div class=\"meeting-subsection\"><h3 class=\"subsection-title\">Loose</h3>\
             <p class=\"section-content\">note</p></div>"
        );
    }

    #[test]
    fn renders_items_with_both_nesting_kinds() {
        let html = render("## A\n- top **key**\n      - nested\n+ sub");

        assert_eq!(
            html,
            "<div class=\"meeting-section\"><h2 class=\"section-title\">A</h2>\
             <ul class=\"section-list\"><li class=\"list-item\">top <strong>key</strong>\
             <ul class=\"nested-list\"><li class=\"list-item\">nested\
             <ul class=\"sub-list\"><li class=\"sub-item\">sub</li></ul></li></ul>\
             </li></ul></div>"
        );
    }

    #[test]
    fn raw_text_is_not_escaped_by_default() {
        assert!(render("## A\n<img src=x>").contains("<img src=x>"));
    }

    #[test]
    fn escaping_option_escapes_text() {
        let sections = parse_sections("## A <b>\n- 1 < 2", &LineClassifier::new());
        let html = render_sections(&sections, &RenderOptions::escaped());

        assert!(html.contains("A &lt;b&gt;"));
        assert!(html.contains("1 &lt; 2"));
    }
}
