//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the *core* page model and turns it into cells on the
//! terminal.  No scroll decisions are made here.

pub mod layout;
pub mod magnetic;
pub mod navbar;
pub mod page;
pub mod popup;
pub mod theme;
