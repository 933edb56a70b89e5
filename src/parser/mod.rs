//! Line-oriented meeting-note parser
//!
//! Parsing runs in two stages:
//! - every non-blank line is classified on its own by [`LineClassifier`]
//! - the classified stream is folded into a section forest by
//!   [`ParserState`], one step per line
//!
//! Each fold step takes the state by value and returns the next one, so a
//! single transition can be tested without running a whole document.

pub mod builder;
pub mod classifier;

pub use builder::{ParserState, build_sections};
pub use classifier::{ClassifierConfig, LineClassifier};

use std::borrow::Cow;

use crate::models::Sections;

/// Token kind of a single classified line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// `## ` main section
    Heading1,
    /// `### ` subsection
    Heading2,
    /// `#### ` sub-subsection
    Heading3,
    /// `- ` or `* ` below the nesting indent
    ListItem,
    /// `- ` or `* ` at or beyond the nesting indent
    NestedListItem,
    /// `+ `
    SubBullet,
    /// Free text
    PlainContent,
    /// Greeting noise or unsupported `#` lines
    Skip,
}

impl LineKind {
    /// Heading level this kind opens, if any
    #[must_use]
    pub const fn heading_level(&self) -> Option<u8> {
        match self {
            Self::Heading1 => Some(1),
            Self::Heading2 => Some(2),
            Self::Heading3 => Some(3),
            _ => None,
        }
    }
}

/// A line with its kind and marker-stripped payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    pub kind: LineKind,
    pub text: &'a str,
}

impl<'a> ClassifiedLine<'a> {
    #[must_use]
    pub const fn new(kind: LineKind, text: &'a str) -> Self {
        Self { kind, text }
    }

    /// Payload as a heading title, without `**` emphasis markers
    #[must_use]
    pub fn title(&self) -> String {
        self.text.replace("**", "").trim().to_string()
    }
}

/// Turn escaped `\n` sequences and CRLF line endings into plain newlines
#[must_use]
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains("\\n") || text.contains('\r') {
        Cow::Owned(text.replace("\\n", "\n").replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Non-blank lines of already-normalized text, leading whitespace intact
pub fn content_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').filter(|line| !line.trim().is_empty())
}

/// Parse meeting-note text into a section forest
#[must_use]
pub fn parse_sections(text: &str, classifier: &LineClassifier) -> Sections {
    let text = normalize_newlines(text);
    let lines = content_lines(&text).map(|line| classifier.classify(line));
    let sections = build_sections(lines);

    tracing::debug!(
        sections = sections.len(),
        nested_indent = classifier.config().nested_indent,
        "parsed meeting note"
    );
    sections
}
