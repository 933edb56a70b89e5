//! Best-effort extraction of meeting info from a section forest
//!
//! The summarizer writes an "information" subsection (`A. THÔNG TIN` in the
//! Vietnamese template) whose own subsections hold date, attendees, agenda
//! and goals. We locate those by keyword containment on titles. Matching is
//! lossy on purpose: whatever cannot be found stays an empty string.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::models::{MeetingInfo, Section};

/// What a keyword rule locates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "camelCase")]
pub enum InfoField {
    /// The subsection that groups the other fields
    InfoGroup,
    Date,
    Attendees,
    Agenda,
    Goals,
}

impl InfoField {
    pub const ALL: [Self; 5] = [
        Self::InfoGroup,
        Self::Date,
        Self::Attendees,
        Self::Agenda,
        Self::Goals,
    ];

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::InfoGroup => "infoGroup",
            Self::Date => "date",
            Self::Attendees => "attendees",
            Self::Agenda => "agenda",
            Self::Goals => "goals",
        }
    }
}

/// Title substrings that identify one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
pub struct KeywordRule {
    pub field: InfoField,
    pub keywords: Vec<String>,
}

impl KeywordRule {
    #[must_use]
    pub fn new(field: InfoField, keywords: &[&str]) -> Self {
        Self {
            field,
            keywords: keywords.iter().map(ToString::to_string).collect(),
        }
    }

    /// Case-sensitive substring containment against any keyword
    #[must_use]
    pub fn matches(&self, title: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| !keyword.is_empty() && title.contains(keyword.as_str()))
    }
}

/// Keyword sets for each extracted field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
#[serde(default)]
pub struct ExtractionConfig {
    pub rules: Vec<KeywordRule>,
    /// Fill `MeetingInfo::title` from the first top-level heading
    pub include_title: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            rules: vec![
                KeywordRule::new(InfoField::InfoGroup, &["THÔNG TIN", "A.", "Information"]),
                KeywordRule::new(InfoField::Date, &["Date", "Ngày", "1."]),
                KeywordRule::new(
                    InfoField::Attendees,
                    &["Attendance", "Attendees", "Người tham dự", "2."],
                ),
                KeywordRule::new(InfoField::Agenda, &["Agenda", "Chương trình", "Nội dung", "3."]),
                KeywordRule::new(InfoField::Goals, &["Goals", "Objectives", "Mục tiêu", "4."]),
            ],
            include_title: false,
        }
    }
}

impl ExtractionConfig {
    /// Rule for `field`; later rules for the same field are ignored
    #[must_use]
    pub fn rule(&self, field: InfoField) -> Option<&KeywordRule> {
        self.rules.iter().find(|rule| rule.field == field)
    }

    /// Replace (or add) the keywords for one field
    #[must_use]
    pub fn with_keywords(mut self, field: InfoField, keywords: &[&str]) -> Self {
        self.rules.retain(|rule| rule.field != field);
        self.rules.push(KeywordRule::new(field, keywords));
        self
    }

    /// Also report the first top-level heading as the title
    #[must_use]
    pub fn with_title(mut self) -> Self {
        self.include_title = true;
        self
    }

    /// Check every field has a rule with at least one non-empty keyword
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyKeywords`] naming the first field that
    /// could never match.
    pub fn validate(&self) -> ConfigResult<()> {
        for field in InfoField::ALL {
            let usable = self
                .rule(field)
                .is_some_and(|rule| rule.keywords.iter().any(|keyword| !keyword.is_empty()));
            if !usable {
                return Err(ConfigError::empty_keywords(field.name()));
            }
        }
        Ok(())
    }

    fn title_matches(&self, field: InfoField, title: &str) -> bool {
        self.rule(field).is_some_and(|rule| rule.matches(title))
    }
}

/// Extract flat meeting info from a parsed section forest
#[must_use]
pub fn extract_info(sections: &[Section], config: &ExtractionConfig) -> MeetingInfo {
    let mut info = MeetingInfo::default();
    if config.include_title {
        info.title = sections
            .first()
            .map(|section| section.title.clone())
            .unwrap_or_default();
    }

    let groups: Vec<&Section> = sections
        .iter()
        .flat_map(|section| &section.subsections)
        .filter(|subsection| config.title_matches(InfoField::InfoGroup, &subsection.title))
        .collect();

    let find = |field: InfoField| -> String {
        groups
            .iter()
            .flat_map(|group| &group.subsections)
            .find(|detail| config.title_matches(field, &detail.title))
            .map(field_value)
            .unwrap_or_default()
    };

    info.date = find(InfoField::Date);
    info.attendees = find(InfoField::Attendees);
    info.agenda = find(InfoField::Agenda);
    info.goals = find(InfoField::Goals);

    tracing::debug!(
        groups = groups.len(),
        has_date = !info.date.is_empty(),
        "extracted meeting info"
    );
    info
}

/// Content if present, otherwise top-level item texts
fn field_value(section: &Section) -> String {
    if let Some(text) = section.text() {
        return text.to_string();
    }
    section
        .items
        .iter()
        .map(|item| item.text.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
