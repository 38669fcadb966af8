//! The scrolling page: renders whichever slice of the document sits under
//! the viewport, section by section.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::core::content::{
    ARSENAL, BRAND, CONTACT_EMAIL, EXPERIENCE, HERO_CUE, HERO_KICKER, HERO_WORDS, JOURNAL,
    LAB_FRAMES, LOCATION, PROJECTS, SOCIAL_LINKS, TICKER,
};
use crate::core::document::{Document, Section, SectionKind, LAB_STRIP_ROWS};

use super::theme::Theme;

/// Frames per marquee step.
const TICKER_FRAMES_PER_COL: u64 = 3;
/// Inner width of one photograph frame in the lab strip.
const LAB_FRAME_WIDTH: usize = 28;
/// The strip drifts from +1% to −55% of its length across the section.
const LAB_DRIFT: (f64, f64) = (0.01, -0.55);

/// Renders the visible part of the page.
pub struct PageWidget<'a> {
    pub document: &'a Document,
    /// Fractional scroll position in rows.
    pub scroll: f64,
    /// Frame counter (drives the ticker).
    pub frame: u64,
    /// Pre-formatted local time for the footer.
    pub local_time: &'a str,
}

impl Widget for PageWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let first = self.scroll.round().max(0.0) as usize;
        let last = first + area.height as usize;
        let width = area.width as usize;

        for section in self.document.sections() {
            if section.bottom() <= first || section.top >= last {
                continue;
            }
            let lines = self.section_lines(section, width);
            for (i, line) in lines.into_iter().enumerate() {
                let doc_row = section.top + i;
                if doc_row < first || doc_row >= last {
                    continue;
                }
                let y = area.y + (doc_row - first) as u16;
                buf.set_line(area.x, y, &line, area.width);
            }
        }
    }
}

impl PageWidget<'_> {
    /// Exactly `section.height` lines for one section.
    fn section_lines(&self, section: &Section, width: usize) -> Vec<Line<'static>> {
        let lines = match section.kind {
            SectionKind::Hero => hero_lines(section.height, width),
            SectionKind::About => about_lines(self.frame, width),
            SectionKind::Work => work_lines(width),
            SectionKind::Lab => {
                let progress = self
                    .document
                    .section_progress(SectionKind::Lab.id(), self.scroll)
                    .unwrap_or(0.0);
                lab_lines(progress, width)
            }
            SectionKind::Journal => journal_lines(width),
            SectionKind::Contact => contact_lines(section.height, width, self.local_time),
        };
        fit(lines, section.height)
    }
}

fn fit(mut lines: Vec<Line<'static>>, height: usize) -> Vec<Line<'static>> {
    lines.truncate(height);
    lines.resize_with(height, Line::default);
    lines
}

fn heading(title: &str) -> [Line<'static>; 2] {
    [
        Line::from(Span::styled(format!("  {title}"), Theme::heading_style())),
        Line::default(),
    ]
}

/// `left` at the start and `right` flush with the end of a `width`-wide row.
fn spread(left: Span<'static>, right: Span<'static>, width: usize) -> Line<'static> {
    let used = left.width() + right.width();
    let gap = width.saturating_sub(used).max(1);
    Line::from(vec![left, Span::raw(" ".repeat(gap)), right])
}

fn centred(text: String, style: ratatui::style::Style, width: usize) -> Line<'static> {
    let pad = width.saturating_sub(text.chars().count()) / 2;
    Line::from(vec![Span::raw(" ".repeat(pad)), Span::styled(text, style)])
}

fn hero_lines(height: usize, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default(); height];
    if height < 3 {
        return lines;
    }
    // Row 0 sits under the fixed header.
    lines[1] = Line::from(Span::styled(format!("  {HERO_KICKER}"), Theme::muted_style()));
    let words_top = height.saturating_sub(HERO_WORDS.len()) / 2;
    for (i, word) in HERO_WORDS.iter().enumerate() {
        if let Some(slot) = lines.get_mut(words_top + i) {
            *slot = Line::from(Span::styled(format!("  {word}"), Theme::display_style()));
        }
    }
    lines[height - 2] = centred(HERO_CUE.to_string(), Theme::muted_style(), width);
    lines
}

fn ticker_line(frame: u64, width: usize) -> Line<'static> {
    let phrase: Vec<char> = TICKER.chars().collect();
    let shift = (frame / TICKER_FRAMES_PER_COL) as usize % phrase.len();
    let text: String = phrase.iter().cycle().skip(shift).take(width).collect();
    Line::from(Span::styled(text, Theme::ticker_style()))
}

fn about_lines(frame: u64, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default(), ticker_line(frame, width), Line::default()];

    lines.extend(heading("EXPERIENCE LOG"));
    for e in EXPERIENCE {
        lines.push(spread(
            Span::styled(format!("  {} — {}", e.company, e.role), Theme::display_style()),
            Span::styled(format!("{}  ", e.period), Theme::muted_style()),
            width,
        ));
        lines.push(Line::from(Span::styled(format!("    {}", e.desc), Theme::body_style())));
        lines.push(Line::from(Span::styled(
            format!("    {}", e.tags.join(" · ")),
            Theme::accent_style(),
        )));
        lines.push(Line::default());
    }

    lines.extend(heading("TECH ARSENAL"));
    for group in ARSENAL {
        lines.push(Line::from(Span::styled(
            format!("  {}", group.category),
            Theme::display_style(),
        )));
        lines.push(Line::from(Span::styled(
            format!("    {}", group.skills.join("  /  ")),
            Theme::body_style(),
        )));
    }
    lines
}

fn work_lines(width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::from(heading("SELECTED WORK"));
    for (i, p) in PROJECTS.iter().enumerate() {
        lines.push(spread(
            Span::styled(format!("  {:02}  {}", i + 1, p.title), Theme::display_style()),
            Span::styled(format!("{}   {}  ", p.kind, p.year), Theme::muted_style()),
            width,
        ));
        lines.push(Line::from(Span::styled(
            format!("      {} — {}", p.tagline, p.role),
            Theme::body_style(),
        )));
        lines.push(Line::from(vec![
            Span::styled(format!("      {}", p.stack.join(" / ")), Theme::accent_style()),
            Span::styled(format!("   /work/{}", p.slug), Theme::muted_style()),
        ]));
        lines.push(Line::default());
    }
    lines
}

/// One strip row across all frames.
fn strip_row(row: usize) -> String {
    let bar = "─".repeat(LAB_FRAME_WIDTH);
    LAB_FRAMES
        .iter()
        .map(|caption| match row {
            0 => format!("┌{bar}┐ "),
            r if r == LAB_STRIP_ROWS - 1 => format!("└{bar}┘ "),
            r if r == LAB_STRIP_ROWS / 2 => {
                let c: String = caption.chars().take(LAB_FRAME_WIDTH - 2).collect();
                format!("│ {c:<w$} │ ", w = LAB_FRAME_WIDTH - 2)
            }
            _ => format!("│{}│ ", " ".repeat(LAB_FRAME_WIDTH)),
        })
        .collect()
}

fn lab_lines(progress: f64, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::from(heading("PHOTOGRAPHY LAB"));
    let strip_len = LAB_FRAMES.len() * (LAB_FRAME_WIDTH + 3);
    let drift = LAB_DRIFT.0 + (LAB_DRIFT.1 - LAB_DRIFT.0) * progress.clamp(0.0, 1.0);
    let shift = drift * strip_len as f64;

    for row in 0..LAB_STRIP_ROWS {
        let text = strip_row(row);
        let line = if shift >= 0.0 {
            let pad = shift.round() as usize;
            format!("{}{}", " ".repeat(pad), text.chars().take(width.saturating_sub(pad)).collect::<String>())
        } else {
            text.chars().skip((-shift).round() as usize).take(width).collect()
        };
        lines.push(Line::from(Span::styled(line, Theme::body_style())));
    }
    lines
}

fn journal_lines(width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::from(heading("JOURNAL"));
    for post in JOURNAL {
        lines.push(spread(
            Span::styled(format!("  {}  {}", post.date, post.title), Theme::display_style()),
            Span::styled(format!("{} · {}  ", post.category, post.read_time), Theme::muted_style()),
            width,
        ));
        lines.push(Line::from(vec![
            Span::styled(format!("      {}", post.summary), Theme::body_style()),
            Span::styled(format!("   /journal/{}", post.slug), Theme::muted_style()),
        ]));
        lines.push(Line::default());
    }
    lines
}

fn contact_lines(height: usize, width: usize, local_time: &str) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default(); height];
    if height < 4 {
        return lines;
    }
    lines[1] = spread(
        Span::styled(format!("  {BRAND}"), Theme::brand_style()),
        Span::styled(format!("{}  ", SOCIAL_LINKS.join("   ")), Theme::accent_style()),
        width,
    );
    let mid = height / 2;
    lines[mid - 1] = centred("SAY HELLO".to_string(), Theme::display_style(), width);
    lines[mid] = centred(CONTACT_EMAIL.to_string(), Theme::accent_style(), width);
    lines[height - 2] = spread(
        Span::styled(format!("  {}", LOCATION.to_uppercase()), Theme::muted_style()),
        Span::styled(format!("LOCAL TIME: {local_time}   © 2024  "), Theme::muted_style()),
        width,
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(doc: &Document, scroll: f64, width: u16) -> Buffer {
        let area = Rect::new(0, 0, width, doc.viewport_rows() as u16);
        let mut buf = Buffer::empty(area);
        PageWidget {
            document: doc,
            scroll,
            frame: 0,
            local_time: "12:00:00",
        }
        .render(area, &mut buf);
        buf
    }

    fn screen_text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.y..area.y + area.height)
            .map(|y| {
                (area.x..area.x + area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn every_section_renders_exactly_its_height() {
        let doc = Document::layout(24);
        let widget = PageWidget {
            document: &doc,
            scroll: 0.0,
            frame: 7,
            local_time: "09:41:00",
        };
        for section in doc.sections() {
            assert_eq!(widget.section_lines(section, 100).len(), section.height);
        }
    }

    #[test]
    fn top_of_page_shows_hero() {
        let doc = Document::layout(24);
        let text = screen_text(&render(&doc, 0.0, 100));
        assert!(text.contains("CRAFTSMAN"));
        assert!(!text.contains("SAY HELLO"));
    }

    #[test]
    fn bottom_of_page_shows_footer() {
        let doc = Document::layout(24);
        let text = screen_text(&render(&doc, doc.limit(), 100));
        assert!(text.contains("SAY HELLO"));
        assert!(text.contains("LOCAL TIME: 12:00:00"));
    }

    #[test]
    fn work_section_lists_projects() {
        let doc = Document::layout(24);
        let work = doc.section("work").copied().unwrap();
        let text = screen_text(&render(&doc, work.top as f64, 120));
        assert!(text.contains("SELECTED WORK"));
        assert!(text.contains("Chronicle API"));
        assert!(text.contains("/work/apex-finance"));
    }

    #[test]
    fn ticker_advances_with_frames() {
        assert_ne!(ticker_line(0, 40), ticker_line(TICKER_FRAMES_PER_COL * 5, 40));
    }

    #[test]
    fn lab_strip_drifts_left_through_the_section() {
        let start = lab_lines(0.0, 80);
        let end = lab_lines(1.0, 80);
        assert_ne!(start[2], end[2]);
        let leading = |l: &Line| l.to_string().chars().take_while(|c| *c == ' ').count();
        assert!(leading(&start[2]) > 0);
        assert_eq!(leading(&end[2]), 0);
    }
}
