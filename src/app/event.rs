//! Terminal event abstraction.
//!
//! Wraps crossterm events into a simpler enum and runs a background task that
//! forwards them over a channel so the main loop stays non-blocking.  Frame
//! timing lives in the main loop, not here.

use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, MouseEvent};
use tokio::sync::mpsc;

/// High-level events consumed by the application.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

/// Spawns a background task that polls the terminal for events and sends them
/// through the returned channel.  `poll_interval` bounds how long a single
/// poll blocks before checking whether the receiver is gone.
pub fn spawn_event_reader(poll_interval: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::task::spawn_blocking(move || loop {
        if tx.is_closed() {
            break;
        }
        match event::poll(poll_interval) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(e) => {
                tracing::warn!("terminal poll failed: {e}");
                break;
            }
        }
        let app_event = match event::read() {
            Ok(CtEvent::Key(k)) => AppEvent::Key(k),
            Ok(CtEvent::Mouse(m)) => AppEvent::Mouse(m),
            Ok(CtEvent::Resize(w, h)) => AppEvent::Resize(w, h),
            Ok(_) => continue,
            Err(e) => {
                tracing::warn!("terminal read failed: {e}");
                break;
            }
        };
        if tx.send(app_event).is_err() {
            break; // receiver dropped
        }
    });

    rx
}
