//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    const ACCENT: Color = Color::Rgb(204, 255, 0);

    // ── page ───────────────────────────────────────────────────
    pub fn display_style() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn heading_style() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn body_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn muted_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn accent_style() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn ticker_style() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::ITALIC)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn brand_style() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_style() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }

    // ── popups ─────────────────────────────────────────────────
    pub fn popup_title_style() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn toggle_on_style() -> Style {
        Style::default().fg(Self::ACCENT)
    }
}
