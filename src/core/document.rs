//! Page geometry – the vertical stack of sections and where each one sits.
//!
//! The document is laid out in terminal rows.  `hero` and `contact` are one
//! viewport tall; every other section is as tall as its content.

use super::content::{ARSENAL, EXPERIENCE, JOURNAL, PROJECTS};
use super::intent::SectionGeometry;

/// Rows per experience entry (headline, description, tags, spacer).
pub const EXPERIENCE_ROWS: usize = 4;
/// Rows per skill group (category, skills).
pub const SKILL_GROUP_ROWS: usize = 2;
/// Rows per project (title line, tagline line, stack line, spacer).
pub const PROJECT_ROWS: usize = 4;
/// Rows per journal post (title line, summary line, spacer).
pub const JOURNAL_ROWS: usize = 3;
/// Height of the photography strip frames.
pub const LAB_STRIP_ROWS: usize = 5;
/// Section heading plus the blank row under it.
pub const HEADING_ROWS: usize = 2;
/// Smallest viewport the layout accepts.
const MIN_VIEWPORT_ROWS: usize = 4;

/// The sections of the page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Hero,
    About,
    Work,
    Lab,
    Journal,
    Contact,
}

impl SectionKind {
    pub const ALL: &[SectionKind] = &[
        SectionKind::Hero,
        SectionKind::About,
        SectionKind::Work,
        SectionKind::Lab,
        SectionKind::Journal,
        SectionKind::Contact,
    ];

    /// Anchor id used by navigation.
    pub fn id(self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::About => "about",
            SectionKind::Work => "work",
            SectionKind::Lab => "lab",
            SectionKind::Journal => "journal",
            SectionKind::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.id() == id)
    }

    fn rows(self, viewport_rows: usize) -> usize {
        match self {
            SectionKind::Hero | SectionKind::Contact => viewport_rows,
            // ticker band (3) + two headed lists + trailing spacer
            SectionKind::About => {
                3 + HEADING_ROWS
                    + EXPERIENCE.len() * EXPERIENCE_ROWS
                    + HEADING_ROWS
                    + ARSENAL.len() * SKILL_GROUP_ROWS
                    + 1
            }
            SectionKind::Work => HEADING_ROWS + PROJECTS.len() * PROJECT_ROWS + 1,
            SectionKind::Lab => HEADING_ROWS + LAB_STRIP_ROWS + 1,
            SectionKind::Journal => HEADING_ROWS + JOURNAL.len() * JOURNAL_ROWS + 1,
        }
    }
}

/// One laid-out section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    /// First document row.
    pub top: usize,
    pub height: usize,
}

impl Section {
    pub fn bottom(&self) -> usize {
        self.top + self.height
    }
}

/// The laid-out page for a given viewport height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    sections: Vec<Section>,
    viewport_rows: usize,
    height: usize,
}

impl Document {
    /// Lay the page out for a viewport `viewport_rows` tall.
    pub fn layout(viewport_rows: usize) -> Self {
        let viewport_rows = viewport_rows.max(MIN_VIEWPORT_ROWS);
        let mut top = 0;
        let sections = SectionKind::ALL
            .iter()
            .map(|&kind| {
                let height = kind.rows(viewport_rows);
                let section = Section { kind, top, height };
                top += height;
                section
            })
            .collect();
        Self {
            sections,
            viewport_rows,
            height: top,
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        let kind = SectionKind::from_id(id)?;
        self.sections.iter().find(|s| s.kind == kind)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn viewport_rows(&self) -> usize {
        self.viewport_rows
    }

    /// Largest reachable scroll offset.
    pub fn limit(&self) -> f64 {
        self.height.saturating_sub(self.viewport_rows) as f64
    }

    /// How far a section has travelled through the viewport: 0 when its top
    /// meets the viewport bottom, 1 when its bottom leaves the viewport top.
    pub fn section_progress(&self, id: &str, scroll_offset: f64) -> Option<f64> {
        let section = self.section(id)?;
        let travel = (section.height + self.viewport_rows) as f64;
        let entered = scroll_offset + self.viewport_rows as f64 - section.top as f64;
        Some((entered / travel).clamp(0.0, 1.0))
    }

    /// Geometry view of this document at a given scroll offset.
    pub fn viewport(&self, scroll_offset: f64) -> Viewport<'_> {
        Viewport {
            document: self,
            scroll_offset,
        }
    }
}

/// A document seen through the viewport at some scroll offset.
#[derive(Debug, Clone, Copy)]
pub struct Viewport<'a> {
    pub document: &'a Document,
    pub scroll_offset: f64,
}

impl SectionGeometry for Viewport<'_> {
    fn viewport_height(&self) -> f64 {
        self.document.viewport_rows as f64
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    fn bounding_top(&self, id: &str) -> Option<f64> {
        self.document
            .section(id)
            .map(|s| s.top as f64 - self.scroll_offset)
    }

    fn offset_height(&self, id: &str) -> Option<f64> {
        self.document.section(id).map(|s| s.height as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_stack_without_gaps() {
        let doc = Document::layout(30);
        let mut expected_top = 0;
        for s in doc.sections() {
            assert_eq!(s.top, expected_top);
            expected_top = s.bottom();
        }
        assert_eq!(doc.height(), expected_top);
        assert_eq!(doc.sections().len(), SectionKind::ALL.len());
    }

    #[test]
    fn hero_and_contact_fill_the_viewport() {
        let doc = Document::layout(24);
        assert_eq!(doc.section("hero").map(|s| s.height), Some(24));
        assert_eq!(doc.section("contact").map(|s| s.height), Some(24));
        let contact = doc.section("contact").copied().unwrap();
        assert_eq!(contact.bottom(), doc.height());
        assert_eq!(doc.limit(), (doc.height() - 24) as f64);
    }

    #[test]
    fn tiny_viewport_is_clamped() {
        let doc = Document::layout(1);
        assert_eq!(doc.viewport_rows(), MIN_VIEWPORT_ROWS);
    }

    #[test]
    fn unknown_section_is_none() {
        let doc = Document::layout(30);
        assert!(doc.section("pricing").is_none());
        assert!(doc.viewport(0.0).bounding_top("pricing").is_none());
    }

    #[test]
    fn bounding_top_is_relative_to_scroll() {
        let doc = Document::layout(30);
        let work_top = doc.section("work").map(|s| s.top as f64).unwrap();
        let view = doc.viewport(10.0);
        assert_eq!(view.bounding_top("work"), Some(work_top - 10.0));
        assert_eq!(view.viewport_height(), 30.0);
    }

    #[test]
    fn section_progress_spans_entry_to_exit() {
        let doc = Document::layout(20);
        let lab = doc.section("lab").copied().unwrap();
        let enter = lab.top as f64 - 20.0;
        let exit = lab.bottom() as f64;
        assert_eq!(doc.section_progress("lab", enter), Some(0.0));
        assert_eq!(doc.section_progress("lab", exit), Some(1.0));
        let mid = doc.section_progress("lab", (enter + exit) / 2.0).unwrap();
        assert!((mid - 0.5).abs() < 1e-9);
    }
}
