//! Static UI label tables.
//!
//! German is the club's primary language; English is carried as a
//! secondary translation. Lookups fall back from the requested language to
//! German and finally to the raw key, so an unknown key never renders as
//! an empty string.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::content::{DayOfWeek, ProgramType};

/// Display language of the interface labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    De,
    En,
}

impl Language {
    /// Two-letter language code.
    pub fn code(self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
        }
    }

    /// The other supported language.
    pub fn toggled(self) -> Language {
        match self {
            Language::De => Language::En,
            Language::En => Language::De,
        }
    }
}

static DE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Filter values
        ("filter.level.beginner", "Anfänger"),
        ("filter.level.intermediate", "Mittelstufe"),
        ("filter.level.advanced", "Fortgeschrittene"),
        ("filter.level.expert", "Leistungsgruppe"),
        ("filter.level.all", "Alle Stufen"),
        ("filter.age_group.kids", "Kinder"),
        ("filter.age_group.teens", "Jugendliche"),
        ("filter.age_group.adults", "Erwachsene"),
        ("filter.age_group.seniors", "Senioren"),
        ("filter.age_group.all", "Alle Altersgruppen"),
        // Weekdays
        ("day.monday", "Montag"),
        ("day.tuesday", "Dienstag"),
        ("day.wednesday", "Mittwoch"),
        ("day.thursday", "Donnerstag"),
        ("day.friday", "Freitag"),
        ("day.saturday", "Samstag"),
        ("day.sunday", "Sonntag"),
        // Programs
        ("program.taekwondo", "Taekwondo"),
        ("program.zumba", "Zumba"),
        ("program.deepwork", "deepWORK"),
        ("program.all", "Alle Programme"),
        // Navigation and panels
        ("nav.home", "Start"),
        ("nav.schedule", "Trainingszeiten"),
        ("nav.trainers", "Trainer"),
        ("nav.downloads", "Downloads"),
        ("schedule.heading", "Trainingszeiten"),
        ("schedule.filter.heading", "Filter"),
        ("schedule.filter.levels", "Stufe"),
        ("schedule.filter.age_groups", "Altersgruppe"),
        ("schedule.filter.clear", "Filter zurücksetzen"),
        ("schedule.filter.search", "Suche"),
        ("schedule.no_sessions", "Keine Trainingseinheiten gefunden"),
        ("schedule.location", "Ort"),
        ("schedule.instructor", "Trainer"),
        ("trainers.heading", "Unser Trainerteam"),
        ("trainers.load_error", "Trainerdaten konnten nicht geladen werden"),
        ("downloads.heading", "Formulare & Downloads"),
        ("downloads.save", "Speichern…"),
        ("downloads.updated", "Stand"),
        ("contact.heading", "Kontakt"),
        ("role.head-instructor", "Cheftrainer"),
        ("role.youth-protection-officer", "Jugendschutzbeauftragte"),
        ("role.first-aid-certified", "Ersthelfer"),
        ("role.competition-judge", "Kampfrichter"),
    ])
});

static EN: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("filter.level.beginner", "Beginners"),
        ("filter.level.intermediate", "Intermediate"),
        ("filter.level.advanced", "Advanced"),
        ("filter.level.expert", "Competitive squad"),
        ("filter.level.all", "All levels"),
        ("filter.age_group.kids", "Kids"),
        ("filter.age_group.teens", "Teens"),
        ("filter.age_group.adults", "Adults"),
        ("filter.age_group.seniors", "Seniors"),
        ("filter.age_group.all", "All age groups"),
        ("day.monday", "Monday"),
        ("day.tuesday", "Tuesday"),
        ("day.wednesday", "Wednesday"),
        ("day.thursday", "Thursday"),
        ("day.friday", "Friday"),
        ("day.saturday", "Saturday"),
        ("day.sunday", "Sunday"),
        ("program.taekwondo", "Taekwondo"),
        ("program.zumba", "Zumba"),
        ("program.deepwork", "deepWORK"),
        ("program.all", "All programs"),
        ("nav.home", "Home"),
        ("nav.schedule", "Schedule"),
        ("nav.trainers", "Trainers"),
        ("nav.downloads", "Downloads"),
        ("schedule.heading", "Training schedule"),
        ("schedule.filter.heading", "Filters"),
        ("schedule.filter.levels", "Level"),
        ("schedule.filter.age_groups", "Age group"),
        ("schedule.filter.clear", "Clear filters"),
        ("schedule.filter.search", "Search"),
        ("schedule.no_sessions", "No training sessions found"),
        ("schedule.location", "Location"),
        ("schedule.instructor", "Instructor"),
        ("trainers.heading", "Our trainer team"),
        ("trainers.load_error", "Trainer data could not be loaded"),
        ("downloads.heading", "Forms & downloads"),
        ("downloads.save", "Save…"),
        ("downloads.updated", "Updated"),
        ("contact.heading", "Contact"),
        ("role.head-instructor", "Head instructor"),
        ("role.youth-protection-officer", "Youth protection officer"),
        ("role.first-aid-certified", "First-aid certified"),
        ("role.competition-judge", "Competition judge"),
    ])
});

/// Looks up a label, falling back to German and then to the key itself.
pub fn label<'a>(language: Language, key: &'a str) -> &'a str {
    let table = match language {
        Language::De => &DE,
        Language::En => &EN,
    };
    table
        .get(key)
        .or_else(|| DE.get(key))
        .copied()
        .unwrap_or(key)
}

/// Label for a filter value within a category, e.g. `("level",
/// "beginner")` → "Anfänger". Unknown values fall back to the raw value so
/// new content keys still render.
pub fn filter_label(language: Language, category_key: &str, value: &str) -> String {
    let key = format!("filter.{}.{}", category_key, value);
    match label(language, &key) {
        resolved if resolved == key => value.to_string(),
        resolved => resolved.to_string(),
    }
}

/// Display name of a weekday.
pub fn day_label(language: Language, day: DayOfWeek) -> &'static str {
    let key = match day {
        DayOfWeek::Monday => "day.monday",
        DayOfWeek::Tuesday => "day.tuesday",
        DayOfWeek::Wednesday => "day.wednesday",
        DayOfWeek::Thursday => "day.thursday",
        DayOfWeek::Friday => "day.friday",
        DayOfWeek::Saturday => "day.saturday",
        DayOfWeek::Sunday => "day.sunday",
    };
    label(language, key)
}

/// Display name of a program.
pub fn program_label(language: Language, program: ProgramType) -> &'static str {
    let key = match program {
        ProgramType::Taekwondo => "program.taekwondo",
        ProgramType::Zumba => "program.zumba",
        ProgramType::Deepwork => "program.deepwork",
    };
    label(language, key)
}
