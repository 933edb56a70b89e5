//! Serializers for parsed notes and transcripts
//!
//! Source text is interpolated into HTML as-is unless
//! [`RenderOptions::escape_html`] is set. The summarizer output is trusted
//! upstream and existing pages depend on byte-identical markup, so raw
//! interpolation stays the default. Hosts showing text from anywhere else
//! must turn escaping on.

pub mod html;
pub mod markdown;
pub mod transcript;

pub use html::render_sections;
pub use markdown::render_markdown;
pub use transcript::render_transcript;

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid bold regex"));

/// Options shared by the HTML renderers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
#[serde(default)]
pub struct RenderOptions {
    /// Escape `<`, `>` and `&` in source text before interpolation
    pub escape_html: bool,
}

impl RenderOptions {
    /// Options that escape source text
    #[must_use]
    pub const fn escaped() -> Self {
        Self { escape_html: true }
    }

    /// Source text prepared for interpolation, without inline formatting
    #[must_use]
    pub fn text<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.escape_html {
            html_escape::encode_text(text)
        } else {
            Cow::Borrowed(text)
        }
    }

    /// Source text with `**bold**` spans turned into `<strong>`
    #[must_use]
    pub fn inline(&self, text: &str) -> String {
        let text = self.text(text);
        BOLD.replace_all(&text, "<strong>$1</strong>").into_owned()
    }
}
