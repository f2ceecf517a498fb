//! Form export.
//!
//! Copies a downloadable form out of the content directory to a
//! destination the user picked in the save dialog.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use clubdesk::DownloadableForm;

/// Copies the form's file from the content directory to `destination`.
pub fn export_form(
    content_dir: &Path,
    form: &DownloadableForm,
    destination: &Path,
) -> Result<()> {
    let source = content_dir.join(&form.file_url);
    if !source.is_file() {
        bail!("form file not found: {}", source.display());
    }

    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    fs::copy(&source, destination)
        .with_context(|| format!("copying {} to {}", source.display(), destination.display()))?;
    Ok(())
}

/// File name the save dialog suggests for a form.
pub fn suggested_file_name(form: &DownloadableForm) -> String {
    Path::new(&form.file_url)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| format!("{}.{}", form.id, form.file_type))
}

/// Directory the save dialog opens in.
pub fn suggested_directory() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}
