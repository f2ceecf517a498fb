//! Static content model.
//!
//! All site content (club profile, training schedule, trainer directory,
//! downloadable forms, call-to-action buttons, navigation) lives in a
//! directory of JSON documents. This module defines the document types,
//! validates them on load, and aggregates them into a [`ContentBundle`].
//!
//! Loading fails soft per document: a missing or malformed document is
//! logged and contributes an empty collection; only a missing content
//! directory is an error.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{bail, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::collation::GermanCollator;
use crate::trainers;

/// File names of the documents making up a content directory.
pub const CLUB_INFO_FILE: &str = "club-info.json";
pub const SCHEDULE_FILE: &str = "training-sessions.json";
pub const TRAINERS_FILE: &str = "trainers.json";
pub const DOWNLOADS_FILE: &str = "downloads.json";
pub const CTA_FILE: &str = "cta-buttons.json";
pub const NAVIGATION_FILE: &str = "navigation.json";

/// Programs offered by the club.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgramType {
    Taekwondo,
    Zumba,
    Deepwork,
}

impl ProgramType {
    /// All program types, in display order.
    pub const ALL: [ProgramType; 3] = [
        ProgramType::Taekwondo,
        ProgramType::Zumba,
        ProgramType::Deepwork,
    ];

    /// Stable lowercase key used in documents and label lookups.
    pub fn key(self) -> &'static str {
        match self {
            ProgramType::Taekwondo => "taekwondo",
            ProgramType::Zumba => "zumba",
            ProgramType::Deepwork => "deepwork",
        }
    }
}

/// Weekday a training session takes place on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// The week in Monday-first order, as shown on the schedule.
    pub const WEEK: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Stable lowercase key used in documents and label lookups.
    pub fn key(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "monday",
            DayOfWeek::Tuesday => "tuesday",
            DayOfWeek::Wednesday => "wednesday",
            DayOfWeek::Thursday => "thursday",
            DayOfWeek::Friday => "friday",
            DayOfWeek::Saturday => "saturday",
            DayOfWeek::Sunday => "sunday",
        }
    }

    /// Position within the Monday-first week, for ordering.
    pub fn index(self) -> usize {
        Self::WEEK.iter().position(|d| *d == self).unwrap_or(0)
    }
}

/// A single training session on the weekly schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSession {
    pub id: String,
    pub program_type: ProgramType,
    pub day_of_week: DayOfWeek,
    /// Start time in 24-hour "HH:mm" format.
    pub start_time: String,
    /// End time in 24-hour "HH:mm" format.
    pub end_time: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    /// Skill level key, e.g. "beginner" or "all".
    pub level: String,
    /// Age group key, e.g. "kids" or "adults".
    pub age_group: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TrainingSession {
    /// Combined level/age-group key, e.g. `beginner_kids`.
    pub fn level_age_key(&self) -> String {
        format!("{}_{}", self.level, self.age_group)
    }

    /// Start time in minutes since midnight, if the time string parses.
    pub fn start_minutes(&self) -> Option<u16> {
        parse_hhmm(&self.start_time)
    }
}

/// The full weekly schedule document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSchedule {
    /// ISO 8601 date of the last content update.
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub sessions: Vec<TrainingSession>,
}

/// A trainer or instructor at the club.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trainer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Path to the trainer photo, relative to the content directory.
    pub photo_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_web_p: Option<String>,
    pub programs: Vec<ProgramType>,
    /// Special roles such as "head-instructor" or
    /// "youth-protection-officer".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub special_roles: Vec<String>,
    /// Session labels shown on the card, e.g. "Kinder 6-12, Anfänger".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sessions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Precomputed key for alphabetical sorting; derived from last and
    /// first name when blank.
    #[serde(default)]
    pub sort_key: String,
}

impl Trainer {
    /// Full display name in "First Last" form.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Category of a downloadable form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormCategory {
    Membership,
    Events,
    General,
}

/// A downloadable document (registration form, event sheet, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadableForm {
    pub id: String,
    pub form_name: String,
    pub description: String,
    /// Path to the file, relative to the content directory.
    pub file_url: String,
    pub file_type: String,
    /// File size in bytes.
    pub file_size: u64,
    pub category: FormCategory,
    /// ISO 8601 date of the last revision.
    pub last_updated: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_for: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct DownloadsCollection {
    #[serde(default)]
    forms: Vec<DownloadableForm>,
}

/// What activating a call-to-action button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Mailto,
    Route,
    External,
}

/// Visual emphasis of a call-to-action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    Primary,
    Accent,
    Warn,
}

/// A call-to-action button shown on the home section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToAction {
    pub id: String,
    pub label: String,
    pub action_type: ActionType,
    /// Email address, section id, or URL depending on the action type.
    pub destination: String,
    pub button_style: ButtonStyle,
    /// Display order; lower values render first.
    pub priority: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CtaCollection {
    #[serde(default)]
    actions: Vec<CallToAction>,
}

/// An entry in the navigation header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationItem {
    pub id: String,
    pub label: String,
    /// Section anchor (e.g. "#schedule") or route this entry points at.
    pub route_or_anchor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Display order; lower values render first.
    pub order: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Navigation {
    #[serde(default)]
    items: Vec<NavigationItem>,
}

/// Club profile: identity, programs, contact, and social links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubInfo {
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub founding_year: u32,
    #[serde(default)]
    pub programs: Vec<ProgramInfo>,
    pub contact: ContactInfo,
    #[serde(default)]
    pub social_media: Vec<SocialMediaLink>,
}

/// Short description of one program offering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramInfo {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Postal address and direct contact channels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub address: Address,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub postal_code: String,
    pub city: String,
    pub country: String,
}

/// A social media presence of the club.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMediaLink {
    pub platform: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
}

/// Everything loaded from one content directory.
///
/// Collections that failed to load are empty; the club profile is `None`
/// when its document is missing or malformed.
#[derive(Debug, Clone, Default)]
pub struct ContentBundle {
    pub club_info: Option<ClubInfo>,
    pub schedule: TrainingSchedule,
    pub trainers: Vec<Trainer>,
    pub forms: Vec<DownloadableForm>,
    pub actions: Vec<CallToAction>,
    pub navigation: Vec<NavigationItem>,
}

/// Parses a strict 24-hour "HH:mm" time into minutes since midnight.
pub fn parse_hhmm(time: &str) -> Option<u16> {
    let (hours, minutes) = time.split_once(':')?;
    if hours.len() != 2 || minutes.len() != 2 {
        return None;
    }
    let hours: u16 = hours.parse().ok()?;
    let minutes: u16 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Drops sessions that violate the schedule invariants.
///
/// A session is dropped (with a logged warning) when its id duplicates an
/// earlier session, a time does not parse as "HH:mm", or the start does
/// not precede the end.
pub fn validate_sessions(sessions: Vec<TrainingSession>) -> Vec<TrainingSession> {
    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut valid = Vec::with_capacity(sessions.len());

    for session in sessions {
        let start = parse_hhmm(&session.start_time);
        let end = parse_hhmm(&session.end_time);

        match (start, end) {
            (Some(start), Some(end)) if start < end => {}
            _ => {
                warn!(
                    "dropping session {:?}: invalid time range {}-{}",
                    session.id, session.start_time, session.end_time
                );
                continue;
            }
        }

        if !seen_ids.insert(session.id.clone()) {
            warn!("dropping session with duplicate id {:?}", session.id);
            continue;
        }

        valid.push(session);
    }

    valid
}

/// Loads a content bundle from a directory of JSON documents.
///
/// Each document fails soft: a missing or malformed file is logged and
/// its collection stays empty. Sessions are validated, trainers are
/// prepared and sorted, and buttons/navigation entries are put into their
/// declared display order. Only a missing directory is an error.
pub fn load_bundle(dir: &Path) -> Result<ContentBundle> {
    if !dir.is_dir() {
        bail!("content directory not found: {}", dir.display());
    }

    let collator = GermanCollator::new();

    let club_info = load_document::<ClubInfo>(dir, CLUB_INFO_FILE);

    let schedule = load_document::<TrainingSchedule>(dir, SCHEDULE_FILE)
        .map(|mut schedule| {
            schedule.sessions = validate_sessions(schedule.sessions);
            schedule
        })
        .unwrap_or_default();

    let trainers = load_document::<Vec<Trainer>>(dir, TRAINERS_FILE)
        .map(|list| trainers::prepare_trainers(list, &collator))
        .unwrap_or_default();

    let forms = load_document::<DownloadsCollection>(dir, DOWNLOADS_FILE)
        .map(|collection| collection.forms)
        .unwrap_or_default();

    let mut actions = load_document::<CtaCollection>(dir, CTA_FILE)
        .map(|collection| collection.actions)
        .unwrap_or_default();
    actions.sort_by_key(|action| action.priority);

    let mut navigation = load_document::<Navigation>(dir, NAVIGATION_FILE)
        .map(|navigation| navigation.items)
        .unwrap_or_default();
    navigation.sort_by_key(|item| item.order);

    Ok(ContentBundle {
        club_info,
        schedule,
        trainers,
        forms,
        actions,
        navigation,
    })
}

/// Reads and parses one document, logging failures instead of propagating.
fn load_document<T: DeserializeOwned>(dir: &Path, name: &str) -> Option<T> {
    let path = dir.join(name);
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) => {
            error!("failed to read {}: {}", path.display(), err);
            return None;
        }
    };

    match serde_json::from_str(&text) {
        Ok(value) => Some(value),
        Err(err) => {
            error!("failed to parse {}: {}", path.display(), err);
            None
        }
    }
}
