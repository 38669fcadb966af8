//! A terminal portfolio page with a fixed header that gets out of the way
//! and a footer that snaps into view when you coast into it.
//!
//! Run the binary to open the page.  `--print-config` dumps the effective
//! configuration as TOML.

mod app;
mod config;
mod core;
mod ui;

use std::io::{self, stdout, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Terminal,
};
use tokio::time::MissedTickBehavior;

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    scroll_runtime,
    state::{ActiveView, AppState},
};
use crate::core::scroll::Direction;
use crate::ui::{
    layout::AppLayout, navbar::NavbarWidget, page::PageWidget, popup, theme::Theme,
};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Terminal portfolio page")]
struct Cli {
    /// Frame interval in milliseconds.
    #[arg(long = "frame-ms", default_value_t = 16,
          value_parser = clap::value_parser!(u64).range(1..=1000))]
    frame_ms: u64,

    /// Section to scroll to on start (work, lab, about, contact, ...).
    #[arg(long)]
    section: Option<String>,

    /// Disable the automatic snap to the footer for this session.
    #[arg(long = "no-snap")]
    no_snap: bool,

    /// Print the effective configuration as TOML and exit.
    #[arg(long = "print-config")]
    print_config: bool,
}

type Tui = Terminal<CrosstermBackend<Stdout>>;

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // The page owns stdout; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut user_config = config::AppConfig::load();
    if cli.print_config {
        print!("{}", user_config.to_toml()?);
        return Ok(());
    }
    if cli.no_snap {
        user_config.tracker.auto_snap = false;
    }

    let mut state = AppState::new(user_config);
    // Session overrides must not leak into the saved file.
    state.persist_config = !cli.no_snap;

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stdout_handle = stdout();
    execute!(stdout_handle, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut state, &cli).await;

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run(terminal: &mut Tui, state: &mut AppState, cli: &Cli) -> Result<()> {
    let frame_interval = Duration::from_millis(cli.frame_ms);

    let size = terminal.size()?;
    scroll_runtime::relayout(state, Rect::new(0, 0, size.width, size.height));
    if let Some(section) = &cli.section {
        if !scroll_runtime::navigate(state, section) {
            tracing::warn!(section = %section, "unknown section, staying at the top");
        }
    }

    let mut events = spawn_event_reader(frame_interval);
    let mut frames = tokio::time::interval(frame_interval);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut last_frame = Instant::now();

    tracing::info!(frame_ms = cli.frame_ms, "page opened");

    loop {
        // ── draw first ─────────────────────────────────────────
        terminal.draw(|frame| draw(frame, state))?;

        tokio::select! {
            biased;

            Some(event) = events.recv() => {
                match event {
                    AppEvent::Key(k) => handler::handle_key(state, k),
                    AppEvent::Mouse(m) => handler::handle_mouse(state, m),
                    AppEvent::Resize(w, h) => {
                        scroll_runtime::relayout(state, Rect::new(0, 0, w, h));
                    }
                }
            }

            _ = frames.tick() => {
                let now = Instant::now();
                scroll_runtime::advance(state, now - last_frame);
                last_frame = now;
            }
        }

        if state.should_quit {
            break;
        }
    }
    Ok(())
}

fn draw(frame: &mut ratatui::Frame, state: &mut AppState) {
    let area = frame.area();
    let layout = AppLayout::from_area(area);
    let local_time = chrono::Local::now().format("%H:%M:%S").to_string();

    frame.render_widget(
        PageWidget {
            document: &state.document,
            scroll: state.engine.offset(),
            frame: state.frame_count,
            local_time: &local_time,
        },
        layout.page_area,
    );

    state.nav_hits = NavbarWidget {
        hidden: state.tracker.header_hidden(),
        drift: state.magnetic.columns(),
    }
    .render_and_hit(layout.navbar_area, frame.buffer_mut());

    // ── status bar: hints left, snap state right ───────────────
    let hint = state.config.status_bar_hint();
    let status_text = match state.active_view {
        ActiveView::Page => state.status_message.as_deref().unwrap_or(&hint),
        ActiveView::SettingsMenu | ActiveView::ControlsSubmenu => "",
    };
    let intent = match state.tracker.last_intent() {
        Direction::Backward => '↑',
        _ => '↓',
    };
    let snap = format!(
        " {:>3.0}% {intent}  snap: {} ",
        state.engine.progress() * 100.0,
        state.tracker.snap_state().label()
    );
    let [left, right] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(snap.chars().count() as u16),
    ])
    .areas(layout.status_area);
    frame.render_widget(
        Paragraph::new(format!(" {status_text}")).style(Theme::status_bar_style()),
        left,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::raw(snap))).style(Theme::status_bar_style()),
        right,
    );

    match state.active_view {
        ActiveView::SettingsMenu => {
            frame.render_widget(
                popup::SettingsPopup {
                    selected: state.settings_selected,
                    state: &*state,
                },
                area,
            );
        }
        ActiveView::ControlsSubmenu => {
            frame.render_widget(
                popup::ControlsPopup {
                    config: &state.config,
                    selected: state.controls_selected,
                    awaiting_rebind: state.awaiting_rebind,
                },
                area,
            );
        }
        ActiveView::Page => {}
    }
}
