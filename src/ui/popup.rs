//! Popup overlay widgets for the settings menu and controls submenu.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::app::settings::{SettingsItem, SETTINGS_ITEMS};
use crate::app::state::AppState;
use crate::config::{Action, AppConfig};

use super::theme::Theme;

// ───────────────────────────────────────── settings popup ────

/// Settings menu popup overlay.
pub struct SettingsPopup<'a> {
    pub selected: usize,
    pub state: &'a AppState,
}

impl Widget for SettingsPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = (SETTINGS_ITEMS.len() as u16) + 5;
        let popup = centered_fixed(46, height, area);
        Clear.render(popup, buf);

        let block = popup_block(" Settings ");
        let inner = block.inner(popup);
        block.render(popup, buf);

        let mut lines = vec![Line::raw("")];
        for (i, item) in SETTINGS_ITEMS.iter().enumerate() {
            let (prefix, style) = row_style(i == self.selected);

            let (suffix, suffix_style) = match item {
                SettingsItem::Submenu { .. } => (String::from("  ›"), dim()),
                SettingsItem::Toggle { get, .. } => {
                    if get(self.state) {
                        (String::from("  [ON]"), Theme::toggle_on_style())
                    } else {
                        (String::from("  [OFF]"), dim())
                    }
                }
                SettingsItem::Cycle { value, .. } => {
                    (format!("  {}", value(self.state)), Style::default().fg(Color::Yellow))
                }
            };

            lines.push(Line::from(vec![
                Span::styled(format!("{prefix}{}", item.label()), style),
                Span::styled(suffix, suffix_style),
            ]));
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "  Enter/Space: change  Esc: close",
            dim(),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}

// ───────────────────────────────────────── controls popup ────

/// Interactive controls / keybinding popup overlay.
pub struct ControlsPopup<'a> {
    pub config: &'a AppConfig,
    pub selected: usize,
    pub awaiting_rebind: bool,
}

impl Widget for ControlsPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = (Action::ALL.len() as u16) + 7;
        let popup = centered_fixed(52, height, area);
        Clear.render(popup, buf);

        let block = popup_block(" Controls ");
        let inner = block.inner(popup);
        block.render(popup, buf);

        let mut lines = vec![Line::raw("")];

        for (i, &action) in Action::ALL.iter().enumerate() {
            let is_selected = i == self.selected;
            let (prefix, base_style) = row_style(is_selected);

            let keys_display = if is_selected && self.awaiting_rebind {
                "Press a key…".to_string()
            } else {
                self.config.display_bindings(action)
            };

            let mut key_style = Style::default().fg(Color::Yellow);
            if is_selected {
                key_style = key_style.bg(Color::DarkGray);
                if self.awaiting_rebind {
                    key_style = key_style.add_modifier(Modifier::BOLD);
                }
            }

            // Label left-aligned, keys right-aligned.
            let label_col = format!("{prefix}{:<22}", action.label());
            let keys_width = (inner.width as usize)
                .saturating_sub(label_col.chars().count())
                .max(1);
            let keys_col = format!("{keys_display:>keys_width$}");

            lines.push(Line::from(vec![
                Span::styled(label_col, base_style),
                Span::styled(keys_col, key_style),
            ]));
        }

        let (reset_prefix, reset_style) = row_style(self.selected == Action::ALL.len());
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            format!("{reset_prefix}⟳ Reset to defaults"),
            reset_style,
        )));

        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "  Enter: add key  Del: clear  Esc: back",
            dim(),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}

// ───────────────────────────────────────── helpers ───────────

fn popup_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .title_style(Theme::popup_title_style())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(dim())
}

fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn row_style(selected: bool) -> (&'static str, Style) {
    if selected {
        (
            " ▸ ",
            Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("   ", Style::default().fg(Color::White))
    }
}

/// Create a centered rectangle with fixed dimensions, clamped to the available area.
fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(buf: &Buffer) -> String {
        let a = buf.area;
        (a.y..a.y + a.height)
            .map(|y| (a.x..a.x + a.width).map(|x| buf[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn centered_fixed_clamps_to_area() {
        let area = Rect::new(0, 0, 30, 10);
        assert_eq!(centered_fixed(40, 20, area), area);
        assert_eq!(centered_fixed(10, 4, area), Rect::new(10, 3, 10, 4));
    }

    #[test]
    fn settings_popup_shows_current_values() {
        let state = AppState::new(AppConfig::default());
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        SettingsPopup { selected: 0, state: &state }.render(area, &mut buf);
        let t = text(&buf);
        assert!(t.contains("Auto Snap to Footer  [ON]"));
        assert!(t.contains("3 rows/frame"));
    }

    #[test]
    fn controls_popup_prompts_while_rebinding() {
        let config = AppConfig::default();
        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);
        ControlsPopup { config: &config, selected: 1, awaiting_rebind: true }.render(area, &mut buf);
        let t = text(&buf);
        assert!(t.contains("Press a key…"));
        assert!(t.contains("Reset to defaults"));
    }
}
