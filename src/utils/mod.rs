//! Utility modules for the clubdesk GUI.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_file_size, format_time_range};
