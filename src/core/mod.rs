//! Core model – scroll physics, page geometry, content, and the scroll-intent
//! heuristic that decides header visibility and bottom-snap.
//!
//! Nothing in this module depends on any TUI or rendering crate; time only
//! enters through the `dt` handed to the engine each frame.

pub mod content;
pub mod document;
pub mod engine;
pub mod intent;
pub mod scroll;
