//! Application orchestration — state, frame loop wiring, and input handling.

pub mod event;
pub mod handler;
pub mod scroll_runtime;
pub mod settings;
pub mod state;
