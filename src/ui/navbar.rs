//! Fixed header: brand, section links, availability badge.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Clear, Widget},
};

use crate::core::content::{AVAILABILITY, BRAND, ESTABLISHED, NAV_ITEMS};

use super::theme::Theme;

const ITEM_GAP: u16 = 4;

/// Clickable region of one nav item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavHit {
    pub rect: Rect,
    pub section: String,
}

/// Section id under `(column, row)`, if any.
pub fn hit_test(hits: &[NavHit], column: u16, row: u16) -> Option<&str> {
    hits.iter()
        .find(|h| {
            column >= h.rect.x
                && column < h.rect.x + h.rect.width
                && row >= h.rect.y
                && row < h.rect.y + h.rect.height
        })
        .map(|h| h.section.as_str())
}

/// The header row.  Draws nothing while hidden.
pub struct NavbarWidget {
    pub hidden: bool,
    /// Magnetic drift of the link group, in columns.
    pub drift: i16,
}

impl NavbarWidget {
    /// Render and return hit zones for mouse interaction.
    pub fn render_and_hit(self, area: Rect, buf: &mut Buffer) -> Vec<NavHit> {
        if self.hidden || area.height == 0 || area.width == 0 {
            return Vec::new();
        }
        Clear.render(area, buf);

        let brand = format!(" {BRAND} ");
        buf.set_string(area.x, area.y, &brand, Theme::brand_style());
        let brand_w = brand.chars().count() as u16;
        buf.set_string(area.x + brand_w, area.y, ESTABLISHED, Theme::muted_style());

        let badge_w = AVAILABILITY.chars().count() as u16 + 1;
        if area.width > badge_w {
            buf.set_string(
                area.x + area.width - badge_w,
                area.y,
                AVAILABILITY,
                Theme::accent_style(),
            );
        }

        let total: u16 = NAV_ITEMS.iter().map(|i| i.len() as u16).sum::<u16>()
            + ITEM_GAP * (NAV_ITEMS.len() as u16).saturating_sub(1);
        if total > area.width {
            return Vec::new();
        }
        let centred = (area.width - total) as i32 / 2 + self.drift as i32;
        let max_start = (area.width - total) as i32;
        let mut x = area.x + centred.clamp(0, max_start) as u16;

        let mut hits = Vec::with_capacity(NAV_ITEMS.len());
        for item in NAV_ITEMS {
            let w = item.len() as u16;
            buf.set_string(x, area.y, item, Theme::nav_style());
            hits.push(NavHit {
                rect: Rect::new(x, area.y, w, 1),
                section: item.to_lowercase(),
            });
            x += w + ITEM_GAP;
        }
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, area: Rect) -> String {
        (area.x..area.x + area.width)
            .map(|x| buf[(x, area.y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn hidden_navbar_draws_nothing() {
        let area = Rect::new(0, 0, 100, 1);
        let mut buf = Buffer::empty(area);
        let hits = NavbarWidget { hidden: true, drift: 0 }.render_and_hit(area, &mut buf);
        assert!(hits.is_empty());
        assert!(row_text(&buf, area).trim().is_empty());
    }

    #[test]
    fn visible_navbar_exposes_section_links() {
        let area = Rect::new(0, 0, 100, 1);
        let mut buf = Buffer::empty(area);
        let hits = NavbarWidget { hidden: false, drift: 0 }.render_and_hit(area, &mut buf);
        let text = row_text(&buf, area);
        assert!(text.contains("ATLAS"));
        assert!(text.contains("CONTACT"));

        let sections: Vec<_> = hits.iter().map(|h| h.section.as_str()).collect();
        assert_eq!(sections, vec!["work", "lab", "about", "contact"]);

        let contact = &hits[3].rect;
        assert_eq!(hit_test(&hits, contact.x + 2, 0), Some("contact"));
        assert_eq!(hit_test(&hits, 0, 0), None);
    }

    #[test]
    fn drift_shifts_links() {
        let area = Rect::new(0, 0, 100, 1);
        let still = NavbarWidget { hidden: false, drift: 0 }
            .render_and_hit(area, &mut Buffer::empty(area));
        let drifted = NavbarWidget { hidden: false, drift: 2 }
            .render_and_hit(area, &mut Buffer::empty(area));
        assert_eq!(drifted[0].rect.x, still[0].rect.x + 2);
    }
}
