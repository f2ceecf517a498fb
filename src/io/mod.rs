//! I/O modules for content loading and form export.

pub mod content_loader;
pub mod download;

// Re-export commonly used types
pub use content_loader::{AsyncContentLoader, LoadResult};
pub use download::{export_form, suggested_directory, suggested_file_name};
