//! Content directory writer.
//!
//! The inverse of [`crate::content::load_bundle`]: serializes a
//! [`ContentBundle`] into the six JSON documents making up a content
//! directory. Used by the `clubdesk-contentgen` binary to scaffold a
//! content directory and by the round-trip tests.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Serialize;
use serde_json::json;

use crate::content::{
    ContentBundle, CLUB_INFO_FILE, CTA_FILE, DOWNLOADS_FILE, NAVIGATION_FILE, SCHEDULE_FILE,
    TRAINERS_FILE,
};

/// Writes content bundles as directories of JSON documents.
pub struct ContentWriter {
    dir: PathBuf,
}

impl ContentWriter {
    /// Creates a writer targeting the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Writes all documents of the bundle.
    ///
    /// With `overwrite` false, the writer refuses to touch a directory
    /// that already contains any of the target documents. Returns the
    /// paths that were written.
    pub fn write_bundle(&self, bundle: &ContentBundle, overwrite: bool) -> Result<Vec<PathBuf>> {
        if !overwrite {
            self.ensure_no_existing_documents()?;
        }

        fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating content directory {}", self.dir.display()))?;

        let mut written = Vec::new();

        if let Some(club_info) = &bundle.club_info {
            written.push(self.write_document(CLUB_INFO_FILE, club_info)?);
        }
        written.push(self.write_document(SCHEDULE_FILE, &bundle.schedule)?);
        written.push(self.write_document(TRAINERS_FILE, &bundle.trainers)?);
        written.push(self.write_document(DOWNLOADS_FILE, &json!({ "forms": bundle.forms }))?);
        written.push(self.write_document(CTA_FILE, &json!({ "actions": bundle.actions }))?);
        written.push(self.write_document(
            NAVIGATION_FILE,
            &json!({ "items": bundle.navigation }),
        )?);

        Ok(written)
    }

    fn ensure_no_existing_documents(&self) -> Result<()> {
        for name in [
            CLUB_INFO_FILE,
            SCHEDULE_FILE,
            TRAINERS_FILE,
            DOWNLOADS_FILE,
            CTA_FILE,
            NAVIGATION_FILE,
        ] {
            let path = self.dir.join(name);
            if path.exists() {
                bail!(
                    "refusing to overwrite existing document {} (pass --force to replace)",
                    path.display()
                );
            }
        }
        Ok(())
    }

    fn write_document<T: Serialize>(&self, name: &str, value: &T) -> Result<PathBuf> {
        let path = self.dir.join(name);
        let mut text = serde_json::to_string_pretty(value)
            .with_context(|| format!("serializing {}", name))?;
        text.push('\n');
        fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::load_bundle;
    use crate::sample::sample_bundle;

    #[test]
    fn test_write_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = sample_bundle();

        let written = ContentWriter::new(dir.path())
            .write_bundle(&bundle, false)
            .unwrap();
        assert_eq!(written.len(), 6);

        let loaded = load_bundle(dir.path()).unwrap();
        assert_eq!(loaded.club_info, bundle.club_info);
        assert_eq!(loaded.schedule.sessions, bundle.schedule.sessions);
        assert_eq!(loaded.trainers, bundle.trainers);
        assert_eq!(loaded.forms, bundle.forms);
        assert_eq!(loaded.actions, bundle.actions);
        assert_eq!(loaded.navigation, bundle.navigation);
    }

    #[test]
    fn test_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = sample_bundle();
        let writer = ContentWriter::new(dir.path());

        writer.write_bundle(&bundle, false).unwrap();
        assert!(writer.write_bundle(&bundle, false).is_err());
        assert!(writer.write_bundle(&bundle, true).is_ok());
    }
}
