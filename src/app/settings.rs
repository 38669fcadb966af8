//! Settings menu model (data only).
//!
//! Keeping these definitions outside the input handler lets both the handler
//! and UI renderers consume the same source of truth without cross-importing.

use super::state::{ActiveView, AppState};

/// Velocity thresholds offered by the settings menu, in rows per frame.
const VELOCITY_THRESHOLDS: &[f64] = &[1.0, 2.0, 3.0, 5.0, 8.0];

/// Scroll smoothing presets: (label, lerp).
const SCROLL_FEELS: &[(&str, f64)] = &[("Silky", 0.06), ("Smooth", 0.1), ("Snappy", 0.2), ("Instant", 1.0)];

/// A single item in the settings menu.
pub enum SettingsItem {
    /// Opens a submenu.
    Submenu {
        label: &'static str,
        view: ActiveView,
    },
    /// Boolean toggle; reads/writes via accessors on `AppState`.
    Toggle {
        label: &'static str,
        get: fn(&AppState) -> bool,
        set: fn(&mut AppState, bool),
    },
    /// Cycles through a finite set of values.
    Cycle {
        label: &'static str,
        value: fn(&AppState) -> String,
        cycle: fn(&mut AppState),
    },
}

impl SettingsItem {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Submenu { label, .. }
            | Self::Toggle { label, .. }
            | Self::Cycle { label, .. } => label,
        }
    }
}

fn scroll_feel_index(lerp: f64) -> Option<usize> {
    SCROLL_FEELS
        .iter()
        .position(|(_, l)| (l - lerp).abs() < f64::EPSILON)
}

/// All items shown in the settings popup, in display order.
pub static SETTINGS_ITEMS: &[SettingsItem] = &[
    SettingsItem::Submenu {
        label: "Controls",
        view: ActiveView::ControlsSubmenu,
    },
    SettingsItem::Toggle {
        label: "Auto Snap to Footer",
        get: |s| s.config.tracker.auto_snap,
        set: |s, v| {
            s.config.tracker.auto_snap = v;
            s.status_message = Some(format!("Auto snap: {}", if v { "on" } else { "off" }));
            s.apply_config();
        },
    },
    SettingsItem::Cycle {
        label: "Snap Velocity",
        value: |s| format!("{} rows/frame", s.config.tracker.velocity_threshold),
        cycle: |s| {
            let current = s.config.tracker.velocity_threshold;
            let idx = VELOCITY_THRESHOLDS
                .iter()
                .position(|v| (v - current).abs() < f64::EPSILON)
                .unwrap_or(2);
            let next = VELOCITY_THRESHOLDS[(idx + 1) % VELOCITY_THRESHOLDS.len()];
            s.config.tracker.velocity_threshold = next;
            s.status_message = Some(format!("Snap velocity: {next} rows/frame"));
            s.apply_config();
        },
    },
    SettingsItem::Cycle {
        label: "Scroll Feel",
        value: |s| match scroll_feel_index(s.config.engine.lerp) {
            Some(i) => SCROLL_FEELS[i].0.to_string(),
            None => format!("lerp {}", s.config.engine.lerp),
        },
        cycle: |s| {
            let idx = scroll_feel_index(s.config.engine.lerp).unwrap_or(0);
            let (label, lerp) = SCROLL_FEELS[(idx + 1) % SCROLL_FEELS.len()];
            s.config.engine.lerp = lerp;
            s.status_message = Some(format!("Scroll feel: {label}"));
            s.apply_config();
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn state() -> AppState {
        let mut s = AppState::new(AppConfig::default());
        s.persist_config = false;
        s
    }

    fn cycle(s: &mut AppState, index: usize) {
        match &SETTINGS_ITEMS[index] {
            SettingsItem::Cycle { cycle, .. } => cycle(s),
            _ => panic!("item {index} is not a cycle"),
        }
    }

    #[test]
    fn toggling_auto_snap_reaches_the_tracker() {
        let mut s = state();
        let SettingsItem::Toggle { get, set, .. } = &SETTINGS_ITEMS[1] else {
            panic!("item 1 is not a toggle");
        };
        assert!(get(&s));
        set(&mut s, false);
        assert!(!get(&s));
        assert!(!s.tracker.config().auto_snap);
    }

    #[test]
    fn velocity_cycles_through_presets_and_wraps() {
        let mut s = state();
        assert_eq!(s.config.tracker.velocity_threshold, 3.0);
        cycle(&mut s, 2);
        assert_eq!(s.tracker.config().velocity_threshold, 5.0);
        cycle(&mut s, 2);
        cycle(&mut s, 2);
        assert_eq!(s.config.tracker.velocity_threshold, 1.0);
    }

    #[test]
    fn scroll_feel_cycles_from_default() {
        let mut s = state();
        assert_eq!((SETTINGS_ITEMS[3].label(), s.config.engine.lerp), ("Scroll Feel", 0.1));
        cycle(&mut s, 3);
        assert_eq!(s.config.engine.lerp, 0.2);
        assert!(s.status_message.as_deref().is_some_and(|m| m.contains("Snappy")));
    }
}
