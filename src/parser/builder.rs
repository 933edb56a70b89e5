//! Fold classified lines into a section forest

use tracing::trace;

use super::{ClassifiedLine, LineKind};
use crate::models::{ListItem, Section, Sections};

/// Title of the top section synthesized for sub-subsections that appear
/// before any heading
pub const FALLBACK_ROOT_TITLE: &str = "Meeting Notes";

/// Title of the subsection synthesized for sub-subsections that appear
/// directly under a main section
pub const FALLBACK_GROUP_TITLE: &str = "Additional Details";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ItemCursor {
    Top(usize),
    Nested { parent: usize, index: usize },
}

/// Parse state threaded through the fold
///
/// Cursors are indices rather than references: `h1` into the forest, `h2`
/// into the `h1` subsections (or the forest when no `h1` is open), `h3` into
/// the `h2` subsections. Item cursors index the innermost open section's
/// items, which cannot change while they are set since only headings move
/// the innermost section and every heading clears them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserState {
    sections: Sections,
    h1: Option<usize>,
    h2: Option<usize>,
    h3: Option<usize>,
    parent_item: Option<usize>,
    current_item: Option<ItemCursor>,
}

impl ParserState {
    /// Consume one line and return the next state
    #[must_use]
    pub fn apply(mut self, line: ClassifiedLine<'_>) -> Self {
        self.step(line);
        self
    }

    /// Consume one line in place
    pub fn step(&mut self, line: ClassifiedLine<'_>) {
        match line.kind {
            LineKind::Heading1 => self.open_h1(line.title()),
            LineKind::Heading2 => self.open_h2(line.title()),
            LineKind::Heading3 => self.open_h3(line.title()),
            LineKind::ListItem => self.add_item(line.text),
            LineKind::NestedListItem => self.add_nested_item(line.text),
            LineKind::SubBullet => self.add_subitem(line.text),
            LineKind::PlainContent => self.add_content(line.text),
            LineKind::Skip => {}
        }
    }

    /// The forest built so far
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Whether a heading of `level` is currently open
    #[must_use]
    pub const fn is_open(&self, level: u8) -> bool {
        match level {
            1 => self.h1.is_some(),
            2 => self.h2.is_some(),
            3 => self.h3.is_some(),
            _ => false,
        }
    }

    /// Whether a list item is open to receive `+` sub-bullets
    #[must_use]
    pub const fn has_open_item(&self) -> bool {
        self.current_item.is_some()
    }

    #[must_use]
    pub fn finish(self) -> Sections {
        self.sections
    }

    fn open_h1(&mut self, title: String) {
        let index = push_indexed(&mut self.sections, Section::new(title, 1));
        self.h1 = Some(index);
        self.h2 = None;
        self.h3 = None;
        self.clear_items();
    }

    fn open_h2(&mut self, title: String) {
        let section = Section::new(title, 2);
        let index = match self.h1_mut() {
            Some(parent) => push_indexed(&mut parent.subsections, section),
            None => push_indexed(&mut self.sections, section),
        };
        self.h2 = Some(index);
        self.h3 = None;
        self.clear_items();
    }

    fn open_h3(&mut self, title: String) {
        if self.h2.is_none() {
            if self.h1.is_none() {
                trace!("synthesizing root section");
                self.open_h1(FALLBACK_ROOT_TITLE.to_string());
            }
            trace!("synthesizing group subsection");
            self.open_h2(FALLBACK_GROUP_TITLE.to_string());
        }

        if let Some(parent) = self.h2_mut() {
            let index = push_indexed(&mut parent.subsections, Section::new(title, 3));
            self.h3 = Some(index);
        }
        self.clear_items();
    }

    fn add_item(&mut self, text: &str) {
        let Some(section) = self.innermost_mut() else {
            trace!(text, "dropping list item outside any section");
            return;
        };
        let index = push_indexed(&mut section.items, ListItem::new(text, 1));
        self.parent_item = Some(index);
        self.current_item = Some(ItemCursor::Top(index));
    }

    fn add_nested_item(&mut self, text: &str) {
        if let Some(parent) = self.parent_item
            && let Some(item) = self
                .innermost_mut()
                .and_then(|section| section.items.get_mut(parent))
        {
            let index = push_indexed(&mut item.nested_items, ListItem::new(text, 2));
            self.current_item = Some(ItemCursor::Nested { parent, index });
            return;
        }

        let Some(section) = self.innermost_mut() else {
            trace!(text, "dropping nested item outside any section");
            return;
        };
        let index = push_indexed(&mut section.items, ListItem::new(text, 1));
        self.current_item = Some(ItemCursor::Top(index));
    }

    fn add_subitem(&mut self, text: &str) {
        match self.current_item_mut() {
            Some(item) => item.subitems.push(text.to_string()),
            None => trace!(text, "dropping sub-bullet without an open item"),
        }
    }

    fn add_content(&mut self, text: &str) {
        match self.innermost_mut() {
            Some(section) => section.push_content(text),
            None => trace!(text, "dropping content outside any section"),
        }
    }

    const fn clear_items(&mut self) {
        self.parent_item = None;
        self.current_item = None;
    }

    fn h1_mut(&mut self) -> Option<&mut Section> {
        let index = self.h1?;
        self.sections.get_mut(index)
    }

    fn h2_mut(&mut self) -> Option<&mut Section> {
        let index = self.h2?;
        match self.h1 {
            Some(h1) => self.sections.get_mut(h1)?.subsections.get_mut(index),
            None => self.sections.get_mut(index),
        }
    }

    fn h3_mut(&mut self) -> Option<&mut Section> {
        let index = self.h3?;
        self.h2_mut()?.subsections.get_mut(index)
    }

    fn innermost_mut(&mut self) -> Option<&mut Section> {
        if self.h3.is_some() {
            self.h3_mut()
        } else if self.h2.is_some() {
            self.h2_mut()
        } else {
            self.h1_mut()
        }
    }

    fn current_item_mut(&mut self) -> Option<&mut ListItem> {
        let cursor = self.current_item?;
        let items = &mut self.innermost_mut()?.items;
        match cursor {
            ItemCursor::Top(index) => items.get_mut(index),
            ItemCursor::Nested { parent, index } => {
                items.get_mut(parent)?.nested_items.get_mut(index)
            }
        }
    }
}

fn push_indexed<T>(items: &mut Vec<T>, item: T) -> usize {
    items.push(item);
    items.len() - 1
}

/// Build a section forest from a classified line stream
pub fn build_sections<'a>(lines: impl IntoIterator<Item = ClassifiedLine<'a>>) -> Sections {
    lines
        .into_iter()
        .fold(ParserState::default(), ParserState::apply)
        .finish()
}
