//! Input handling — maps key/mouse events to state mutations.

use std::time::Duration;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::config::{Action, KeyBind};
use crate::core::scroll::{ScrollCommands, ScrollOptions, ScrollTag, ScrollTarget};
use crate::ui::navbar::hit_test;

use super::scroll_runtime::navigate;
use super::settings::{SettingsItem, SETTINGS_ITEMS};
use super::state::{ActiveView, AppState};

/// Duration of the Top/Bottom jumps.
const JUMP_DURATION: Duration = Duration::from_millis(1000);

/// Total selectable rows in the controls submenu (actions + "Reset").
pub fn controls_item_count() -> usize {
    Action::ALL.len() + 1
}

/// Process a key event, dispatching based on the active view.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Ctrl+c always quits, regardless of view.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match state.active_view {
        ActiveView::Page => handle_page_key(state, key),
        ActiveView::SettingsMenu => handle_settings_key(state, key),
        ActiveView::ControlsSubmenu => {
            if state.awaiting_rebind {
                handle_rebind_key(state, key);
            } else {
                handle_controls_key(state, key);
            }
        }
    }
}

// ── Page (configurable bindings) ────────────────────────────────

fn handle_page_key(state: &mut AppState, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    let Some(action) = state.config.match_key(key) else {
        return;
    };
    state.status_message = None;
    perform(state, action);
}

fn perform(state: &mut AppState, action: Action) {
    let wheel = state.config.engine.wheel_rows as f64;
    let page = state.document.viewport_rows().saturating_sub(1).max(1) as f64;

    match action {
        Action::ScrollDown => {
            state.engine.scroll_by(wheel);
        }
        Action::ScrollUp => {
            state.engine.scroll_by(-wheel);
        }
        Action::PageDown => {
            state.engine.scroll_by(page);
        }
        Action::PageUp => {
            state.engine.scroll_by(-page);
        }
        Action::Top => jump(state, ScrollTarget::Offset(0.0)),
        Action::Bottom => jump(state, ScrollTarget::End),
        Action::GoWork | Action::GoLab | Action::GoAbout | Action::GoContact => {
            if let Some(section) = action.section() {
                navigate(state, section);
            }
        }
        Action::OpenSettings => {
            state.active_view = ActiveView::SettingsMenu;
            state.settings_selected = 0;
        }
        Action::Quit => state.should_quit = true,
    }
}

/// Plain eased jump.  Unlocked, so further input interrupts it.
fn jump(state: &mut AppState, target: ScrollTarget) {
    state.engine.scroll_to(
        target,
        ScrollOptions::new(JUMP_DURATION).on_complete(ScrollTag::Jump),
    );
}

// ── Settings menu (hardcoded keys) ──────────────────────────────

fn handle_settings_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            state.active_view = ActiveView::Page;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.settings_selected = state.settings_selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.settings_selected < SETTINGS_ITEMS.len() - 1 {
                state.settings_selected += 1;
            }
        }
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
            if let Some(item) = SETTINGS_ITEMS.get(state.settings_selected) {
                match item {
                    SettingsItem::Submenu { view, .. } => {
                        state.active_view = *view;
                        state.controls_selected = 0;
                    }
                    SettingsItem::Toggle { get, set, .. } => {
                        let current = get(state);
                        set(state, !current);
                    }
                    SettingsItem::Cycle { cycle, .. } => cycle(state),
                }
            }
        }
        _ => {}
    }
}

// ── Controls submenu (hardcoded navigation, interactive rebinding) ──

fn handle_controls_key(state: &mut AppState, key: KeyEvent) {
    let item_count = controls_item_count();

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            state.active_view = ActiveView::Page;
        }
        KeyCode::Left | KeyCode::Char('h') => {
            state.active_view = ActiveView::SettingsMenu;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.controls_selected = state.controls_selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.controls_selected < item_count - 1 {
                state.controls_selected += 1;
            }
        }
        KeyCode::Enter => {
            if state.controls_selected < Action::ALL.len() {
                state.awaiting_rebind = true;
            } else {
                state.config.reset_defaults();
                state.status_message = Some("Bindings reset to defaults".into());
                state.apply_config();
            }
        }
        KeyCode::Delete | KeyCode::Backspace => {
            if let Some(&action) = Action::ALL.get(state.controls_selected) {
                state.config.clear_bindings(action);
                state.apply_config();
            }
        }
        _ => {}
    }
}

/// Capture the next key press as a new binding.
fn handle_rebind_key(state: &mut AppState, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Esc {
        state.awaiting_rebind = false;
        return;
    }

    // Ctrl+c stays reserved for quitting.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return;
    }

    if let Some(&action) = Action::ALL.get(state.controls_selected) {
        state.config.add_binding(action, KeyBind::from_key_event(key));
        state.apply_config();
    }
    state.awaiting_rebind = false;
}

// ── Mouse ───────────────────────────────────────────────────────

/// Process a mouse event.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if state.active_view != ActiveView::Page {
        return;
    }
    let wheel = state.config.engine.wheel_rows as f64;

    match mouse.kind {
        MouseEventKind::ScrollDown => {
            state.engine.scroll_by(wheel);
        }
        MouseEventKind::ScrollUp => {
            state.engine.scroll_by(-wheel);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(section) = hit_test(&state.nav_hits, mouse.column, mouse.row) {
                let section = section.to_owned();
                navigate(state, &section);
            }
        }
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            state
                .magnetic
                .set_pointer(mouse.column, state.terminal_area.width);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::scroll_runtime::{advance, relayout};
    use crate::config::AppConfig;
    use crate::core::intent::SnapState;
    use crate::ui::navbar::NavHit;
    use ratatui::layout::Rect;

    const FRAME: Duration = Duration::from_millis(16);

    fn state() -> AppState {
        let mut s = AppState::new(AppConfig::default());
        s.persist_config = false;
        relayout(&mut s, Rect::new(0, 0, 100, 31));
        s
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn run(state: &mut AppState, frames: usize) {
        for _ in 0..frames {
            advance(state, FRAME);
        }
    }

    #[test]
    fn ctrl_c_quits_from_any_view() {
        let mut s = state();
        s.active_view = ActiveView::ControlsSubmenu;
        s.awaiting_rebind = true;
        handle_key(&mut s, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(s.should_quit);
    }

    #[test]
    fn scroll_keys_move_the_page() {
        let mut s = state();
        handle_key(&mut s, press(KeyCode::Char('j')));
        run(&mut s, 200);
        assert_eq!(s.engine.offset(), 3.0);

        handle_key(&mut s, press(KeyCode::PageDown));
        run(&mut s, 200);
        assert_eq!(s.engine.offset(), 3.0 + (s.document.viewport_rows() - 1) as f64);
    }

    #[test]
    fn number_keys_navigate_to_sections() {
        let mut s = state();
        handle_key(&mut s, press(KeyCode::Char('3')));
        assert_eq!(s.tracker.snap_state(), SnapState::Suspended);
        run(&mut s, 500);
        let about = s.document.section("about").map(|a| a.top as f64).unwrap();
        assert_eq!(s.engine.offset(), about);
    }

    #[test]
    fn top_jump_yields_to_user_input() {
        let mut s = state();
        s.engine.scroll_by(20.0);
        run(&mut s, 300);
        handle_key(&mut s, press(KeyCode::Home));
        assert!(s.engine.is_animating());
        assert!(!s.engine.is_locked());
        run(&mut s, 1);
        handle_key(&mut s, press(KeyCode::Char('j')));
        run(&mut s, 300);
        assert!(s.engine.offset() > 10.0);
    }

    #[test]
    fn question_mark_opens_settings_and_escape_closes() {
        let mut s = state();
        handle_key(&mut s, press(KeyCode::Char('?')));
        assert_eq!(s.active_view, ActiveView::SettingsMenu);
        handle_key(&mut s, press(KeyCode::Esc));
        assert_eq!(s.active_view, ActiveView::Page);
    }

    #[test]
    fn settings_enter_toggles_auto_snap() {
        let mut s = state();
        s.active_view = ActiveView::SettingsMenu;
        handle_key(&mut s, press(KeyCode::Down));
        handle_key(&mut s, press(KeyCode::Enter));
        assert!(!s.config.tracker.auto_snap);
        assert!(!s.tracker.config().auto_snap);
    }

    #[test]
    fn rebinding_replaces_the_key() {
        let mut s = state();
        s.active_view = ActiveView::ControlsSubmenu;
        // Quit is the last action.
        s.controls_selected = Action::ALL.len() - 1;
        handle_key(&mut s, press(KeyCode::Enter));
        assert!(s.awaiting_rebind);
        handle_key(&mut s, press(KeyCode::Char('x')));
        assert!(!s.awaiting_rebind);

        s.active_view = ActiveView::Page;
        handle_key(&mut s, press(KeyCode::Char('x')));
        assert!(s.should_quit);
    }

    #[test]
    fn clicking_a_nav_item_navigates() {
        let mut s = state();
        s.nav_hits = vec![NavHit {
            rect: Rect::new(40, 0, 7, 1),
            section: "contact".into(),
        }];
        handle_mouse(&mut s, mouse(MouseEventKind::Down(MouseButton::Left), 42, 0));
        assert_eq!(s.tracker.snap_state(), SnapState::Suspended);
        assert!(s.engine.is_locked());
    }

    #[test]
    fn wheel_is_ignored_during_navigation() {
        let mut s = state();
        navigate(&mut s, "lab");
        run(&mut s, 2);
        let before = s.engine.offset();
        handle_mouse(&mut s, mouse(MouseEventKind::ScrollUp, 10, 10));
        run(&mut s, 1);
        assert!(s.engine.offset() >= before);
    }

    #[test]
    fn pointer_motion_feeds_magnetic_offset() {
        let mut s = state();
        handle_mouse(&mut s, mouse(MouseEventKind::Moved, 99, 5));
        run(&mut s, 60);
        assert_eq!(s.magnetic.columns(), 2);
    }
}
