use std::fs;

use anyhow::Result;

use clubdesk::{
    filter_label, load_bundle, sample_bundle, ContentWriter, FileStore, FilterCategory,
    FilterStore, GermanCollator, KeyValueStore, Language, ThemePreference, ThemeStore,
    FILTER_STORAGE_KEY, THEME_STORAGE_KEY,
};

#[test]
fn test_write_and_load_content_directory() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let bundle = sample_bundle();

    // Scaffold a content directory from the sample bundle
    let written = ContentWriter::new(dir.path()).write_bundle(&bundle, false)?;
    assert_eq!(written.len(), 6);
    for path in &written {
        assert!(path.exists(), "missing document {}", path.display());
    }

    // Read it back
    let loaded = load_bundle(dir.path())?;

    let club = loaded.club_info.expect("club info should load");
    assert_eq!(club.name, "SC Falkenberg 1984 e.V.");
    assert_eq!(club.programs.len(), 3);

    assert_eq!(loaded.schedule.sessions.len(), bundle.schedule.sessions.len());
    assert_eq!(loaded.trainers.len(), bundle.trainers.len());
    assert_eq!(loaded.forms.len(), 3);
    assert_eq!(loaded.actions.len(), 3);
    assert_eq!(loaded.navigation.len(), 4);

    // Trainers come back in German alphabetical order
    let last_names: Vec<&str> = loaded
        .trainers
        .iter()
        .map(|t| t.last_name.as_str())
        .collect();
    assert_eq!(
        last_names,
        vec!["Brandt", "Gruber", "Keller", "Müller", "Öztürk", "Schäfer", "Weiß"]
    );

    Ok(())
}

#[test]
fn test_load_tolerates_partially_broken_directory() -> Result<()> {
    let dir = tempfile::tempdir()?;
    ContentWriter::new(dir.path()).write_bundle(&sample_bundle(), false)?;

    // Corrupt one document and delete another
    fs::write(dir.path().join("trainers.json"), "{{ broken")?;
    fs::remove_file(dir.path().join("downloads.json"))?;

    let loaded = load_bundle(dir.path())?;

    // The broken collections are empty, the rest still loads
    assert!(loaded.trainers.is_empty());
    assert!(loaded.forms.is_empty());
    assert!(loaded.club_info.is_some());
    assert!(!loaded.schedule.sessions.is_empty());

    Ok(())
}

#[test]
fn test_invalid_sessions_are_dropped_on_load() -> Result<()> {
    let dir = tempfile::tempdir()?;
    fs::write(
        dir.path().join("training-sessions.json"),
        r#"{
            "lastUpdated": "2025-11-08",
            "sessions": [
                {
                    "id": "ok",
                    "programType": "taekwondo",
                    "dayOfWeek": "monday",
                    "startTime": "17:00",
                    "endTime": "18:30",
                    "location": "Halle",
                    "level": "beginner",
                    "ageGroup": "kids"
                },
                {
                    "id": "ok",
                    "programType": "taekwondo",
                    "dayOfWeek": "monday",
                    "startTime": "18:30",
                    "endTime": "20:00",
                    "location": "Halle",
                    "level": "advanced",
                    "ageGroup": "adults"
                },
                {
                    "id": "inverted",
                    "programType": "zumba",
                    "dayOfWeek": "friday",
                    "startTime": "20:00",
                    "endTime": "19:00",
                    "location": "Halle",
                    "level": "all",
                    "ageGroup": "all"
                }
            ]
        }"#,
    )?;

    let loaded = load_bundle(dir.path())?;
    assert_eq!(loaded.schedule.sessions.len(), 1);
    assert_eq!(loaded.schedule.sessions[0].id, "ok");

    Ok(())
}

#[test]
fn test_theme_preference_survives_restart_on_shared_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let prefs_path = dir.path().join("preferences.json");

    // First run: toggle away from the default and let the store persist it
    {
        let mut store = ThemeStore::new(FileStore::new(&prefs_path));
        assert_eq!(store.initialize(), ThemePreference::Dark);
        assert_eq!(store.toggle(), ThemePreference::Light);
    }

    // Second run: the persisted preference wins over the default
    {
        let mut store = ThemeStore::new(FileStore::new(&prefs_path));
        assert_eq!(store.initialize(), ThemePreference::Light);
    }

    // A corrupted value falls back to the default and is cleaned up
    {
        let mut raw = FileStore::new(&prefs_path);
        raw.set(THEME_STORAGE_KEY, "solarized")?;

        let mut store = ThemeStore::new(FileStore::new(&prefs_path));
        assert_eq!(store.initialize(), ThemePreference::Dark);

        let raw = FileStore::new(&prefs_path);
        assert_eq!(raw.get(THEME_STORAGE_KEY)?, None);
    }

    Ok(())
}

#[test]
fn test_filter_selection_survives_restart_on_shared_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let prefs_path = dir.path().join("preferences.json");

    {
        let mut store = FilterStore::new(FileStore::new(&prefs_path));
        store.initialize();
        assert!(store.add("beginner"));
        assert!(store.add("kids"));
        assert!(store.set_panel_expanded(true));
    }

    {
        let mut store = FilterStore::new(FileStore::new(&prefs_path));
        let restored = store.initialize();
        assert_eq!(restored, vec!["beginner".to_string(), "kids".to_string()]);
        assert!(store.panel_expanded());
    }

    // Unknown blob shapes under the key reset to defaults
    {
        let mut raw = FileStore::new(&prefs_path);
        raw.set(FILTER_STORAGE_KEY, r#"{"programType":"zumba","searchText":""}"#)?;

        let mut store = FilterStore::new(FileStore::new(&prefs_path));
        assert!(store.initialize().is_empty());
    }

    Ok(())
}

#[test]
fn test_theme_and_filter_stores_share_one_preference_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let prefs_path = dir.path().join("preferences.json");

    let mut theme_store = ThemeStore::new(FileStore::new(&prefs_path));
    let mut filter_store = FilterStore::new(FileStore::new(&prefs_path));

    theme_store.set(ThemePreference::Light);
    filter_store.set(vec!["adults".to_string()]);
    theme_store.set(ThemePreference::Dark);

    // Writes through one store must not clobber the other store's key
    let mut fresh_filter = FilterStore::new(FileStore::new(&prefs_path));
    assert_eq!(fresh_filter.initialize(), vec!["adults".to_string()]);

    let mut fresh_theme = ThemeStore::new(FileStore::new(&prefs_path));
    assert_eq!(fresh_theme.initialize(), ThemePreference::Dark);

    Ok(())
}

#[test]
fn test_filtering_workflow_over_loaded_content() -> Result<()> {
    let dir = tempfile::tempdir()?;
    ContentWriter::new(dir.path()).write_bundle(&sample_bundle(), false)?;
    let loaded = load_bundle(dir.path())?;

    let prefs = dir.path().join("preferences.json");
    let mut store = FilterStore::new(FileStore::new(&prefs));
    store.initialize();

    // No filters: everything passes in order
    let all = store.apply(&loaded.schedule.sessions, None);
    assert_eq!(all, loaded.schedule.sessions);

    // Filter to kids sessions (level OR age group matches)
    assert!(store.add("kids"));
    let kids = store.apply(&loaded.schedule.sessions, None);
    assert!(!kids.is_empty());
    assert!(kids.iter().all(|s| s.level == "kids" || s.age_group == "kids"));

    // Options are generated over the unfiltered list with German labels
    let options = store.generate_options(
        &loaded.schedule.sessions,
        FilterCategory::AgeGroup,
        |value| filter_label(Language::De, FilterCategory::AgeGroup.key(), value),
        &GermanCollator::new(),
    );
    let total: usize = options.iter().map(|o| o.count).sum();
    assert_eq!(total, loaded.schedule.sessions.len());

    let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
    let mut sorted = labels.clone();
    sorted.sort_by(|a, b| {
        use clubdesk::Collator;
        GermanCollator::new().compare(a, b)
    });
    assert_eq!(labels, sorted);

    Ok(())
}
