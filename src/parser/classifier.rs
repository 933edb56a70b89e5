//! Line classification by prefix and indentation

use serde::{Deserialize, Serialize};

use super::{ClassifiedLine, LineKind};
use crate::error::{ConfigError, ConfigResult};

/// Configuration for line classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Leading whitespace at or above which a `-`/`*` bullet is nested
    pub nested_indent: u32,
    /// Lines starting with any of these are dropped entirely
    pub noise_prefixes: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            nested_indent: 6,
            noise_prefixes: vec!["Dạ, em đã sẵn sàng".to_string()],
        }
    }
}

impl ClassifierConfig {
    /// Check the configuration for values the classifier cannot use
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidIndent`] when `nested_indent` is zero,
    /// since every bullet would then count as nested.
    pub const fn validate(&self) -> ConfigResult<()> {
        if self.nested_indent == 0 {
            return Err(ConfigError::InvalidIndent);
        }
        Ok(())
    }
}

/// Classifies single lines of meeting-note text
#[derive(Debug, Clone, Default)]
pub struct LineClassifier {
    config: ClassifierConfig,
}

impl LineClassifier {
    /// Create a classifier with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier with custom configuration
    #[must_use]
    pub const fn with_config(config: ClassifierConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify one line, keeping its original leading whitespace
    #[must_use]
    pub fn classify<'a>(&self, line: &'a str) -> ClassifiedLine<'a> {
        let indent = indentation(line);
        let trimmed = line.trim();

        if let Some(title) = trimmed.strip_prefix("## ") {
            return ClassifiedLine::new(LineKind::Heading1, title.trim());
        }
        if let Some(title) = trimmed.strip_prefix("### ") {
            return ClassifiedLine::new(LineKind::Heading2, title.trim());
        }
        if let Some(title) = trimmed.strip_prefix("#### ") {
            return ClassifiedLine::new(LineKind::Heading3, title.trim());
        }

        if let Some(text) = trimmed
            .strip_prefix("- ")
            .or_else(|| trimmed.strip_prefix("* "))
        {
            let kind = if indent < self.config.nested_indent as usize {
                LineKind::ListItem
            } else {
                LineKind::NestedListItem
            };
            return ClassifiedLine::new(kind, text.trim());
        }

        if let Some(text) = trimmed.strip_prefix("+ ") {
            return ClassifiedLine::new(LineKind::SubBullet, text.trim());
        }

        if self.is_noise(trimmed) || trimmed.starts_with('#') {
            return ClassifiedLine::new(LineKind::Skip, trimmed);
        }

        ClassifiedLine::new(LineKind::PlainContent, trimmed)
    }

    fn is_noise(&self, trimmed: &str) -> bool {
        self.config
            .noise_prefixes
            .iter()
            .any(|prefix| !prefix.is_empty() && trimmed.starts_with(prefix.as_str()))
    }
}

/// Count of leading whitespace characters
#[must_use]
pub fn indentation(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("## Meeting", LineKind::Heading1, "Meeting")]
    #[case("### A. THÔNG TIN", LineKind::Heading2, "A. THÔNG TIN")]
    #[case("#### 1. Date", LineKind::Heading3, "1. Date")]
    #[case("- Item", LineKind::ListItem, "Item")]
    #[case("* Item", LineKind::ListItem, "Item")]
    #[case("    - Item", LineKind::ListItem, "Item")]
    #[case("      - Nested", LineKind::NestedListItem, "Nested")]
    #[case("        * Nested", LineKind::NestedListItem, "Nested")]
    #[case("+ Sub", LineKind::SubBullet, "Sub")]
    #[case("   + Sub", LineKind::SubBullet, "Sub")]
    #[case("Dạ, em đã sẵn sàng giúp anh", LineKind::Skip, "Dạ, em đã sẵn sàng giúp anh")]
    #[case("# Title", LineKind::Skip, "# Title")]
    #[case("##### Too deep", LineKind::Skip, "##### Too deep")]
    #[case("Just some text", LineKind::PlainContent, "Just some text")]
    #[case("-no space", LineKind::PlainContent, "-no space")]
    fn classifies_lines(#[case] line: &str, #[case] kind: LineKind, #[case] text: &str) {
        let classified = LineClassifier::new().classify(line);
        assert_eq!(classified.kind, kind);
        assert_eq!(classified.text, text);
    }

    #[test]
    fn heading_titles_drop_bold_markers() {
        let classified = LineClassifier::new().classify("## **Summary**");
        assert_eq!(classified.kind, LineKind::Heading1);
        assert_eq!(classified.title(), "Summary");
    }

    #[test]
    fn classification_is_idempotent() {
        let classifier = LineClassifier::new();
        for line in ["## A", "      - b", "+ c", "plain", "# x"] {
            assert_eq!(classifier.classify(line), classifier.classify(line));
        }
    }

    #[test]
    fn custom_indent_threshold() {
        let classifier = LineClassifier::with_config(ClassifierConfig {
            nested_indent: 2,
            ..ClassifierConfig::default()
        });
        assert_eq!(classifier.classify("  - x").kind, LineKind::NestedListItem);
        assert_eq!(classifier.classify(" - x").kind, LineKind::ListItem);
    }

    #[test]
    fn zero_indent_is_rejected() {
        let config = ClassifierConfig {
            nested_indent: 0,
            ..ClassifierConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidIndent));
    }

    #[test]
    fn indentation_counts_tabs_and_spaces() {
        assert_eq!(indentation("\t  - x"), 3);
        assert_eq!(indentation("x"), 0);
    }
}
