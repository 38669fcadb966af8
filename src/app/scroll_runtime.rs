//! Frame-by-frame wiring between the scroll engine and the intent tracker.
//!
//! Per frame: advance the engine, deliver any finished animation to the
//! tracker, then feed it the frame's sample.  Relayout re-measures the
//! terminal section and refreshes the header decision at the new geometry.

use std::time::Duration;

use ratatui::layout::Rect;

use crate::core::document::Document;
use crate::ui::layout::AppLayout;

use super::state::AppState;

/// Re-layout the page for a new terminal size.
pub fn relayout(state: &mut AppState, area: Rect) {
    state.terminal_area = area;
    let layout = AppLayout::from_area(area);
    state.document = Document::layout(layout.page_area.height as usize);
    state.engine.set_limit(state.document.limit());
    state
        .tracker
        .update_metrics(&state.document.viewport(state.engine.offset()));
    let sample = state.engine.sample();
    state.tracker.on_scroll_sample(sample, &mut state.engine);
    tracing::debug!(
        rows = state.document.height(),
        limit = state.engine.limit(),
        terminal = ?state.tracker.metrics(),
        "relayout"
    );
}

/// Advance the page by one frame of `dt`.
pub fn advance(state: &mut AppState, dt: Duration) {
    let frame = state.engine.tick(dt);
    if let Some(tag) = frame.completed {
        state.tracker.on_scroll_complete(tag);
    }
    if let Some(sample) = frame.sample {
        let outcome = state.tracker.on_scroll_sample(sample, &mut state.engine);
        // Hidden links must not stay clickable until the next draw.
        if outcome.header_changed && state.tracker.header_hidden() {
            state.nav_hits.clear();
        }
        if outcome.snapped {
            tracing::debug!(offset = sample.scroll_offset, "footer snap started");
        }
    }
    state.magnetic.tick(dt);
    state.frame_count = state.frame_count.wrapping_add(1);
}

/// Smooth-scroll to a section.  Unknown ids are ignored.
pub fn navigate(state: &mut AppState, section: &str) -> bool {
    let viewport = state.document.viewport(state.engine.offset());
    state
        .tracker
        .navigate_to_section(section, &viewport, &mut state.engine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::core::intent::SnapState;
    use crate::core::scroll::{ScrollCommands, ScrollOptions, ScrollTarget};

    const FRAME: Duration = Duration::from_millis(16);

    fn state() -> AppState {
        let mut s = AppState::new(AppConfig::default());
        s.persist_config = false;
        relayout(&mut s, Rect::new(0, 0, 100, 31));
        s
    }

    fn settle(state: &mut AppState) {
        for _ in 0..5000 {
            advance(state, FRAME);
            if !state.engine.is_animating() {
                advance(state, FRAME);
                return;
            }
        }
        panic!("engine never settled");
    }

    #[test]
    fn relayout_measures_contact_footer() {
        let s = state();
        let contact = s.document.section("contact").copied().unwrap();
        let metrics = s.tracker.metrics().unwrap();
        assert_eq!(metrics.top, contact.top as f64);
        assert_eq!(metrics.height, contact.height as f64);
        assert!(!s.tracker.header_hidden());
    }

    #[test]
    fn coasting_near_the_end_snaps_to_the_footer() {
        let mut s = state();
        let limit = s.engine.limit();
        s.engine.scroll_by(limit * 0.98);
        settle(&mut s);

        assert_eq!(s.engine.offset(), limit);
        assert_eq!(s.tracker.snap_state(), SnapState::Snapped);
        assert!(s.tracker.header_hidden());
    }

    #[test]
    fn stopping_short_of_the_zone_does_not_snap() {
        let mut s = state();
        let limit = s.engine.limit();
        s.engine.scroll_by(limit * 0.5);
        settle(&mut s);

        assert_eq!(s.engine.offset(), limit * 0.5);
        assert_eq!(s.tracker.snap_state(), SnapState::Armed);
        assert!(!s.tracker.header_hidden());
    }

    #[test]
    fn navigation_lands_on_section_and_rearms() {
        let mut s = state();
        assert!(navigate(&mut s, "work"));
        assert_eq!(s.tracker.snap_state(), SnapState::Suspended);
        assert!(s.engine.is_locked());
        assert!(!s.engine.scroll_by(10.0));

        settle(&mut s);
        let work_top = s.document.section("work").map(|w| w.top as f64).unwrap();
        assert_eq!(s.engine.offset(), work_top);
        assert_eq!(s.tracker.snap_state(), SnapState::Armed);
    }

    #[test]
    fn navigation_overrides_in_flight_snap() {
        let mut s = state();
        let limit = s.engine.limit();
        s.engine.scroll_to(
            ScrollTarget::End,
            ScrollOptions::new(Duration::from_millis(1200)).lock(true),
        );
        advance(&mut s, FRAME);
        assert!(navigate(&mut s, "about"));
        settle(&mut s);

        let about_top = s.document.section("about").map(|a| a.top as f64).unwrap();
        assert_eq!(s.engine.offset(), about_top);
        assert!(s.engine.offset() < limit);
    }

    #[test]
    fn unknown_section_changes_nothing() {
        let mut s = state();
        assert!(!navigate(&mut s, "pricing"));
        assert!(!s.engine.is_animating());
        assert_eq!(s.tracker.snap_state(), SnapState::Armed);
    }

    #[test]
    fn resize_keeps_offset_within_new_limit() {
        let mut s = state();
        let limit = s.engine.limit();
        s.engine.scroll_by(limit);
        settle(&mut s);
        relayout(&mut s, Rect::new(0, 0, 100, 61));
        assert!(s.engine.offset() <= s.engine.limit());
        let contact = s.document.section("contact").copied().unwrap();
        assert_eq!(s.tracker.metrics().map(|m| m.height), Some(contact.height as f64));
    }
}
