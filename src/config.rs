//! User configuration — keybindings, snap tuning, and persistence.
//!
//! Settings live in `$XDG_CONFIG_HOME/atlas-folio/config.toml`
//! (default `~/.config/atlas-folio/config.toml`).  Every key is optional;
//! anything missing falls back to the built-in defaults.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

use crate::core::intent::TrackerConfig;

// ───────────────────────────────────────── errors ────────────

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("could not serialise config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ScrollDown,
    ScrollUp,
    PageDown,
    PageUp,
    Top,
    Bottom,
    GoWork,
    GoLab,
    GoAbout,
    GoContact,
    OpenSettings,
    Quit,
}

impl Action {
    /// Ordered list of all actions (used for the controls menu).
    pub const ALL: &[Action] = &[
        Action::ScrollDown,
        Action::ScrollUp,
        Action::PageDown,
        Action::PageUp,
        Action::Top,
        Action::Bottom,
        Action::GoWork,
        Action::GoLab,
        Action::GoAbout,
        Action::GoContact,
        Action::OpenSettings,
        Action::Quit,
    ];

    /// Human-readable label for the UI.
    pub fn label(self) -> &'static str {
        match self {
            Action::ScrollDown => "Scroll Down",
            Action::ScrollUp => "Scroll Up",
            Action::PageDown => "Page Down",
            Action::PageUp => "Page Up",
            Action::Top => "Jump to Top",
            Action::Bottom => "Jump to Bottom",
            Action::GoWork => "Go to Work",
            Action::GoLab => "Go to Lab",
            Action::GoAbout => "Go to About",
            Action::GoContact => "Go to Contact",
            Action::OpenSettings => "Open Settings",
            Action::Quit => "Quit",
        }
    }

    /// Section a navigation action points at.
    pub fn section(self) -> Option<&'static str> {
        match self {
            Action::GoWork => Some("work"),
            Action::GoLab => Some("lab"),
            Action::GoAbout => Some("about"),
            Action::GoContact => Some("contact"),
            _ => None,
        }
    }

    /// Key used in the config file.
    fn config_key(self) -> &'static str {
        match self {
            Action::ScrollDown => "scroll_down",
            Action::ScrollUp => "scroll_up",
            Action::PageDown => "page_down",
            Action::PageUp => "page_up",
            Action::Top => "top",
            Action::Bottom => "bottom",
            Action::GoWork => "go_work",
            Action::GoLab => "go_lab",
            Action::GoAbout => "go_about",
            Action::GoContact => "go_contact",
            Action::OpenSettings => "open_settings",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.config_key() == s)
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A single key binding — key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Does this binding match a key event?  Only CTRL/ALT modifiers are
    /// compared; SHIFT is already folded into the character (`G` vs `g`).
    pub fn matches(&self, event: KeyEvent) -> bool {
        let mask = Self::mask(event.code);
        self.code == event.code && (self.modifiers & mask) == (event.modifiers & mask)
    }

    /// Create a binding from a raw key event (used during rebinding).
    pub fn from_key_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers & Self::mask(event.code),
        }
    }

    fn mask(code: KeyCode) -> KeyModifiers {
        match code {
            KeyCode::Char(_) => KeyModifiers::CONTROL | KeyModifiers::ALT,
            _ => KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT,
        }
    }

    fn modifier_prefix(&self) -> String {
        let mut s = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("Ctrl+");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            s.push_str("Alt+");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            s.push_str("Shift+");
        }
        s
    }

    /// User-friendly display string (e.g. `"↓"`, `"Ctrl+d"`, `"G"`).
    pub fn display(&self) -> String {
        let mut s = self.modifier_prefix();
        s.push_str(&match self.code {
            KeyCode::Char(' ') => "Space".into(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "↑".into(),
            KeyCode::Down => "↓".into(),
            KeyCode::Left => "←".into(),
            KeyCode::Right => "→".into(),
            KeyCode::Enter => "Enter".into(),
            KeyCode::Esc => "Esc".into(),
            KeyCode::Tab => "Tab".into(),
            KeyCode::Home => "Home".into(),
            KeyCode::End => "End".into(),
            KeyCode::PageUp => "PgUp".into(),
            KeyCode::PageDown => "PgDn".into(),
            KeyCode::F(n) => format!("F{n}"),
            other => format!("{other:?}"),
        });
        s
    }

    /// Serialise to config-file format (e.g. `"Down"`, `"Ctrl+d"`, `"G"`).
    fn to_config_string(&self) -> String {
        let mut s = self.modifier_prefix();
        s.push_str(&match self.code {
            KeyCode::Char(' ') => "Space".into(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "Up".into(),
            KeyCode::Down => "Down".into(),
            KeyCode::Left => "Left".into(),
            KeyCode::Right => "Right".into(),
            KeyCode::Enter => "Enter".into(),
            KeyCode::Esc => "Esc".into(),
            KeyCode::Tab => "Tab".into(),
            KeyCode::Home => "Home".into(),
            KeyCode::End => "End".into(),
            KeyCode::PageUp => "PageUp".into(),
            KeyCode::PageDown => "PageDown".into(),
            KeyCode::F(n) => format!("F{n}"),
            other => format!("{other:?}"),
        });
        s
    }

    /// Parse a key string like `"Ctrl+d"`, `"PageDown"`, `"G"`, `"Space"`.
    /// Single characters keep their case.
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        let key_part = parts.last()?;

        for &part in &parts[..parts.len() - 1] {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        if key_part.chars().count() == 1 {
            let c = key_part.chars().next()?;
            return Some(KeyBind::new(KeyCode::Char(c), modifiers));
        }

        let code = match key_part.to_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            s if s.starts_with('f') => {
                let n: u8 = s[1..].parse().ok()?;
                KeyCode::F(n)
            }
            _ => return None,
        };

        Some(KeyBind { code, modifiers })
    }
}

// ───────────────────────────────────────── file sections ─────

/// `[tracker]` — snap and header tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerSettings {
    pub snap_start: f64,
    pub already_there: f64,
    pub velocity_threshold: f64,
    pub snap_duration_secs: f64,
    pub navigate_duration_secs: f64,
    pub hide_start_fraction: f64,
    pub auto_snap: bool,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            snap_start: 0.97,
            already_there: 0.997,
            velocity_threshold: 3.0,
            snap_duration_secs: 1.2,
            navigate_duration_secs: 1.5,
            hide_start_fraction: 0.8,
            auto_snap: true,
        }
    }
}

impl TrackerSettings {
    /// Keep values inside ranges the tracker can work with.
    fn sanitize(self) -> Self {
        let d = Self::default();
        let snap_start = finite_or(self.snap_start, d.snap_start).clamp(0.5, 0.999);
        Self {
            snap_start,
            already_there: finite_or(self.already_there, d.already_there).clamp(snap_start, 1.0),
            velocity_threshold: finite_or(self.velocity_threshold, d.velocity_threshold)
                .clamp(0.1, 100.0),
            snap_duration_secs: finite_or(self.snap_duration_secs, d.snap_duration_secs)
                .clamp(0.0, 10.0),
            navigate_duration_secs: finite_or(self.navigate_duration_secs, d.navigate_duration_secs)
                .clamp(0.0, 10.0),
            hide_start_fraction: finite_or(self.hide_start_fraction, d.hide_start_fraction)
                .clamp(0.0, 1.0),
            auto_snap: self.auto_snap,
        }
    }
}

/// `clamp` lets NaN through, and TOML can spell `nan` and `inf`.
fn finite_or(value: f64, default: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        tracing::warn!(value, default, "non-finite config value replaced by default");
        default
    }
}

/// `[engine]` — scroll feel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Fraction of the remaining distance covered per 60 Hz frame.
    pub lerp: f64,
    /// Rows per wheel notch / arrow key.
    pub wheel_rows: u16,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            lerp: 0.1,
            wheel_rows: 3,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct ConfigFile {
    tracker: TrackerSettings,
    engine: EngineSettings,
    bindings: BTreeMap<String, String>,
}

// ───────────────────────────────────────── config ────────────

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    pub tracker: TrackerSettings,
    pub engine: EngineSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            tracker: TrackerSettings::default(),
            engine: EngineSettings::default(),
        }
    }
}

impl AppConfig {
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        let n = KeyModifiers::NONE;
        let ch = |c| KeyBind::new(KeyCode::Char(c), n);
        let mut m = HashMap::new();

        m.insert(Action::ScrollDown, vec![KeyBind::new(KeyCode::Down, n), ch('j')]);
        m.insert(Action::ScrollUp, vec![KeyBind::new(KeyCode::Up, n), ch('k')]);
        m.insert(Action::PageDown, vec![ch(' '), KeyBind::new(KeyCode::PageDown, n)]);
        m.insert(Action::PageUp, vec![ch('b'), KeyBind::new(KeyCode::PageUp, n)]);
        m.insert(Action::Top, vec![ch('g'), KeyBind::new(KeyCode::Home, n)]);
        m.insert(Action::Bottom, vec![ch('G'), KeyBind::new(KeyCode::End, n)]);
        m.insert(Action::GoWork, vec![ch('1')]);
        m.insert(Action::GoLab, vec![ch('2')]);
        m.insert(Action::GoAbout, vec![ch('3')]);
        m.insert(Action::GoContact, vec![ch('4')]);
        m.insert(Action::OpenSettings, vec![ch('?')]);
        m.insert(Action::Quit, vec![ch('q')]);

        m
    }

    /// Find the action that matches a key event.  When multiple bindings
    /// match, the one with the most modifiers wins.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        let mut best: Option<Action> = None;
        let mut best_mod_count = 0;

        for (&action, binds) in &self.bindings {
            for bind in binds {
                if bind.matches(event) {
                    let mc = bind.modifiers.bits().count_ones();
                    if best.is_none() || mc > best_mod_count {
                        best = Some(action);
                        best_mod_count = mc;
                    }
                }
            }
        }
        best
    }

    /// Add a binding for `action`, taking the key away from any other action.
    pub fn add_binding(&mut self, action: Action, bind: KeyBind) {
        for (_, binds) in self.bindings.iter_mut() {
            binds.retain(|b| b != &bind);
        }
        self.bindings.entry(action).or_default().push(bind);
    }

    /// Drop every binding of `action`.
    pub fn clear_bindings(&mut self, action: Action) {
        self.bindings.insert(action, Vec::new());
    }

    pub fn reset_defaults(&mut self) {
        self.bindings = Self::default_bindings();
    }

    /// Format the binding list for a given action (e.g. `"↓/j"`).
    pub fn display_bindings(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => {
                binds.iter().map(|b| b.display()).collect::<Vec<_>>().join("/")
            }
            _ => "unbound".into(),
        }
    }

    fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].display(),
            _ => "?".into(),
        }
    }

    /// Build the status-bar hint string from current bindings.
    pub fn status_bar_hint(&self) -> String {
        format!(
            "{}/{}: scroll | {}-{}: work/lab/about/contact | {}: settings | {}: quit",
            self.short_binding(Action::ScrollDown),
            self.short_binding(Action::ScrollUp),
            self.short_binding(Action::GoWork),
            self.short_binding(Action::GoContact),
            self.short_binding(Action::OpenSettings),
            self.short_binding(Action::Quit),
        )
    }

    /// Tracker tuning derived from the `[tracker]` section.
    pub fn tracker_config(&self) -> TrackerConfig {
        TrackerConfig {
            hide_start_fraction: self.tracker.hide_start_fraction,
            snap_start: self.tracker.snap_start,
            already_there: self.tracker.already_there,
            velocity_threshold: self.tracker.velocity_threshold,
            snap_duration: Duration::from_secs_f64(self.tracker.snap_duration_secs),
            navigate_duration: Duration::from_secs_f64(self.tracker.navigate_duration_secs),
            auto_snap: self.tracker.auto_snap,
            ..TrackerConfig::default()
        }
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        if !path.exists() {
            return Self::default();
        }
        let parsed = std::fs::read_to_string(&path)
            .map_err(ConfigError::from)
            .and_then(|s| Self::from_toml(&s));
        match parsed {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), "{e}; using defaults");
                Self::default()
            }
        }
    }

    /// Persist current config to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.to_toml()?)?;
        Ok(())
    }

    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(s)?;
        let mut bindings = Self::default_bindings();

        for (key, value) in &file.bindings {
            let Some(action) = Action::from_config_key(key) else {
                tracing::warn!(key = key.as_str(), "unknown action in [bindings]");
                continue;
            };
            let mut parsed = Vec::new();
            for part in value.split(',').map(str::trim).filter(|p| !p.is_empty()) {
                match KeyBind::parse(part) {
                    Some(bind) => parsed.push(bind),
                    None => tracing::warn!(key = key.as_str(), part, "unparseable key binding"),
                }
            }
            // A present but empty entry means the action was deliberately unbound.
            bindings.insert(action, parsed);
        }

        Ok(Self {
            bindings,
            tracker: file.tracker.sanitize(),
            engine: EngineSettings {
                lerp: finite_or(file.engine.lerp, EngineSettings::default().lerp).clamp(0.01, 1.0),
                wheel_rows: file.engine.wheel_rows.max(1),
            },
        })
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        let bindings = Action::ALL
            .iter()
            .filter_map(|&action| {
                let binds = self.bindings.get(&action)?;
                let keys: Vec<String> = binds.iter().map(|b| b.to_config_string()).collect();
                Some((action.config_key().to_string(), keys.join(", ")))
            })
            .collect();
        let file = ConfigFile {
            tracker: self.tracker.clone(),
            engine: self.engine.clone(),
            bindings,
        };
        let body = toml::to_string_pretty(&file)?;
        Ok(format!("# atlas-folio configuration\n\n{body}"))
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/atlas-folio/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("atlas-folio").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn defaults_match_expected_keys() {
        let config = AppConfig::default();
        assert_eq!(
            config.match_key(key(KeyCode::Char('j'), KeyModifiers::NONE)),
            Some(Action::ScrollDown)
        );
        assert_eq!(
            config.match_key(key(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            Some(Action::Bottom)
        );
        assert_eq!(
            config.match_key(key(KeyCode::Char('4'), KeyModifiers::NONE)),
            Some(Action::GoContact)
        );
        assert_eq!(config.match_key(key(KeyCode::Char('x'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn parse_keeps_character_case() {
        assert_eq!(
            KeyBind::parse("G"),
            Some(KeyBind::new(KeyCode::Char('G'), KeyModifiers::NONE))
        );
        assert_eq!(
            KeyBind::parse("Ctrl+d"),
            Some(KeyBind::new(KeyCode::Char('d'), KeyModifiers::CONTROL))
        );
        assert_eq!(
            KeyBind::parse("pagedown"),
            Some(KeyBind::new(KeyCode::PageDown, KeyModifiers::NONE))
        );
        assert_eq!(KeyBind::parse("Hyper+x"), None);
        assert_eq!(KeyBind::parse("Banana"), None);
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.tracker, TrackerSettings::default());
        assert_eq!(config.engine, EngineSettings::default());
        assert_eq!(config.bindings, AppConfig::default_bindings());
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let config = AppConfig::from_toml(
            r#"
            [tracker]
            velocity_threshold = 5.0
            auto_snap = false

            [bindings]
            quit = "x, Esc"
            "#,
        )
        .unwrap();
        assert_eq!(config.tracker.velocity_threshold, 5.0);
        assert!(!config.tracker.auto_snap);
        assert_eq!(config.tracker.snap_start, 0.97);
        assert_eq!(
            config.match_key(key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(Action::Quit)
        );
        assert_eq!(config.match_key(key(KeyCode::Char('q'), KeyModifiers::NONE)), None);

        let tracker = config.tracker_config();
        assert_eq!(tracker.velocity_threshold, 5.0);
        assert!(!tracker.auto_snap);
        assert_eq!(tracker.terminal_section, "contact");
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = AppConfig::from_toml(
            r#"
            [tracker]
            snap_start = 2.0
            already_there = 0.1
            [engine]
            lerp = 0.0
            wheel_rows = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.tracker.snap_start, 0.999);
        assert_eq!(config.tracker.already_there, 0.999);
        assert_eq!(config.engine.lerp, 0.01);
        assert_eq!(config.engine.wheel_rows, 1);
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(matches!(
            AppConfig::from_toml("[tracker\nsnap_start = "),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn serialised_config_reloads_identically() {
        let mut config = AppConfig::default();
        config.tracker.velocity_threshold = 8.0;
        config.add_binding(Action::Quit, KeyBind::new(KeyCode::Char('x'), KeyModifiers::CONTROL));

        let reloaded = AppConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(reloaded.tracker, config.tracker);
        assert_eq!(reloaded.bindings, config.bindings);
    }

    #[test]
    fn add_binding_steals_key_from_other_action() {
        let mut config = AppConfig::default();
        config.add_binding(Action::Quit, KeyBind::new(KeyCode::Char('j'), KeyModifiers::NONE));
        assert_eq!(
            config.match_key(key(KeyCode::Char('j'), KeyModifiers::NONE)),
            Some(Action::Quit)
        );
        assert_eq!(config.display_bindings(Action::ScrollDown), "↓");
    }

    #[test]
    fn non_finite_floats_fall_back_to_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [tracker]
            snap_start = nan
            already_there = nan
            velocity_threshold = inf
            snap_duration_secs = nan
            navigate_duration_secs = -inf
            hide_start_fraction = nan

            [engine]
            lerp = nan
            "#,
        )
        .unwrap();
        assert_eq!(config.tracker, TrackerSettings::default());
        assert_eq!(config.engine.lerp, EngineSettings::default().lerp);

        let tracker = config.tracker_config();
        assert_eq!(tracker.snap_duration, Duration::from_millis(1200));
        assert_eq!(tracker.navigate_duration, Duration::from_millis(1500));
    }

    #[test]
    fn cleared_action_stays_unbound_after_reload() {
        let mut config = AppConfig::default();
        config.clear_bindings(Action::GoWork);
        let reloaded = AppConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(reloaded.bindings, config.bindings);
        assert_eq!(reloaded.display_bindings(Action::GoWork), "unbound");
        assert_eq!(reloaded.match_key(key(KeyCode::Char('1'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn stolen_key_belongs_to_one_action_after_reload() {
        let mut config = AppConfig::default();
        config.add_binding(Action::Quit, KeyBind::new(KeyCode::Char('1'), KeyModifiers::NONE));
        let reloaded = AppConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(reloaded.bindings, config.bindings);
        assert!(reloaded.bindings[&Action::GoWork].is_empty());
        assert_eq!(
            reloaded.match_key(key(KeyCode::Char('1'), KeyModifiers::NONE)),
            Some(Action::Quit)
        );
    }
}
