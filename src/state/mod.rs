//! State management modules for the clubdesk GUI.
//!
//! This module contains state-only logic (no UI concerns):
//! - Content state (loaded bundle and its source)
//! - Theme state (current preference, palette access)
//! - Filter state (persisted tag selection, cached options, view narrowing)
//! - Navigation state (active section, language, content-directory memory)

mod content_state;
mod filter_state;
mod nav_state;
mod theme_state;

pub use content_state::{ContentSource, ContentState};
pub use filter_state::FilterState;
pub use nav_state::{NavState, Section};
pub use theme_state::ThemeState;
