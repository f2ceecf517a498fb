//! Built-in sample content.
//!
//! A complete, deterministic content bundle for the GUI demo mode, the
//! `clubdesk-contentgen` scaffolder, and the round-trip tests. The data is
//! shaped exactly like a loaded content directory: sessions are valid,
//! trainers carry sort keys and are in German alphabetical order, buttons
//! and navigation entries are in display order.

use crate::content::{
    ActionType, Address, ButtonStyle, CallToAction, ClubInfo, ContactInfo, ContentBundle,
    DayOfWeek, DownloadableForm, FormCategory, NavigationItem, ProgramInfo, ProgramType,
    SocialMediaLink, Trainer, TrainingSchedule, TrainingSession,
};
use crate::trainers::sort_key_for;

/// Returns the built-in demo bundle for a fictional club.
pub fn sample_bundle() -> ContentBundle {
    ContentBundle {
        club_info: Some(club_info()),
        schedule: TrainingSchedule {
            last_updated: "2025-11-08".to_string(),
            sessions: sessions(),
        },
        trainers: trainers(),
        forms: forms(),
        actions: actions(),
        navigation: navigation(),
    }
}

fn club_info() -> ClubInfo {
    ClubInfo {
        name: "SC Falkenberg 1984 e.V.".to_string(),
        tagline: "Taekwondo, Zumba und deepWORK für alle Altersgruppen".to_string(),
        description: "Seit 1984 trainieren wir in Falkenberg Taekwondo vom \
                      Schnupperkurs bis zur Leistungsgruppe. Mit Zumba und \
                      deepWORK ist auch abseits der Matte für Bewegung gesorgt."
            .to_string(),
        founding_year: 1984,
        programs: vec![
            ProgramInfo {
                name: "Taekwondo".to_string(),
                description: "Traditionelles Taekwondo für Kinder, Jugendliche \
                              und Erwachsene"
                    .to_string(),
                icon: Some("sports_martial_arts".to_string()),
            },
            ProgramInfo {
                name: "Zumba".to_string(),
                description: "Tanz-Fitness mit lateinamerikanischer Musik".to_string(),
                icon: Some("music_note".to_string()),
            },
            ProgramInfo {
                name: "deepWORK".to_string(),
                description: "Funktionelles athletisches Training ohne Geräte".to_string(),
                icon: Some("fitness_center".to_string()),
            },
        ],
        contact: ContactInfo {
            address: Address {
                street: "Am Sportpark 12".to_string(),
                postal_code: "88045".to_string(),
                city: "Falkenberg".to_string(),
                country: "Deutschland".to_string(),
            },
            phone: "+49 7541 123456".to_string(),
            email: "info@sc-falkenberg.de".to_string(),
        },
        social_media: vec![
            SocialMediaLink {
                platform: "facebook".to_string(),
                url: "https://www.facebook.com/scfalkenberg".to_string(),
                icon: Some("facebook".to_string()),
                aria_label: Some("SC Falkenberg auf Facebook".to_string()),
            },
            SocialMediaLink {
                platform: "instagram".to_string(),
                url: "https://www.instagram.com/scfalkenberg".to_string(),
                icon: Some("instagram".to_string()),
                aria_label: Some("SC Falkenberg auf Instagram".to_string()),
            },
        ],
    }
}

fn sessions() -> Vec<TrainingSession> {
    fn session(
        id: &str,
        program: ProgramType,
        day: DayOfWeek,
        start: &str,
        end: &str,
        location: &str,
        instructor: Option<&str>,
        level: &str,
        age_group: &str,
    ) -> TrainingSession {
        TrainingSession {
            id: id.to_string(),
            program_type: program,
            day_of_week: day,
            start_time: start.to_string(),
            end_time: end.to_string(),
            location: location.to_string(),
            instructor: instructor.map(str::to_string),
            level: level.to_string(),
            age_group: age_group.to_string(),
            max_participants: None,
            notes: None,
        }
    }

    let hall = "Sporthalle am Sportpark";
    let gym = "Gymnastikraum Schulzentrum";

    vec![
        session(
            "tkd-mon-kids-beginner",
            ProgramType::Taekwondo,
            DayOfWeek::Monday,
            "17:00",
            "18:00",
            hall,
            Some("Katrin Schäfer"),
            "beginner",
            "kids",
        ),
        session(
            "tkd-mon-teens",
            ProgramType::Taekwondo,
            DayOfWeek::Monday,
            "18:00",
            "19:30",
            hall,
            Some("Hans Müller"),
            "intermediate",
            "teens",
        ),
        session(
            "tkd-tue-adults-advanced",
            ProgramType::Taekwondo,
            DayOfWeek::Tuesday,
            "19:30",
            "21:00",
            hall,
            Some("Hans Müller"),
            "advanced",
            "adults",
        ),
        session(
            "tkd-wed-kids-intermediate",
            ProgramType::Taekwondo,
            DayOfWeek::Wednesday,
            "17:00",
            "18:30",
            hall,
            Some("Änne Öztürk"),
            "intermediate",
            "kids",
        ),
        session(
            "tkd-thu-squad",
            ProgramType::Taekwondo,
            DayOfWeek::Thursday,
            "19:00",
            "21:00",
            hall,
            Some("Hans Müller"),
            "expert",
            "all",
        ),
        session(
            "tkd-fri-beginners-open",
            ProgramType::Taekwondo,
            DayOfWeek::Friday,
            "17:30",
            "18:30",
            hall,
            Some("Katrin Schäfer"),
            "beginner",
            "all",
        ),
        session(
            "zumba-wed-adults",
            ProgramType::Zumba,
            DayOfWeek::Wednesday,
            "19:00",
            "20:00",
            gym,
            Some("Sandra Brandt"),
            "all",
            "adults",
        ),
        session(
            "zumba-fri-open",
            ProgramType::Zumba,
            DayOfWeek::Friday,
            "18:45",
            "19:45",
            gym,
            Some("Sandra Brandt"),
            "all",
            "all",
        ),
        session(
            "deepwork-tue-adults",
            ProgramType::Deepwork,
            DayOfWeek::Tuesday,
            "18:00",
            "19:00",
            gym,
            Some("Melanie Keller"),
            "all",
            "adults",
        ),
        session(
            "deepwork-sat-seniors",
            ProgramType::Deepwork,
            DayOfWeek::Saturday,
            "09:30",
            "10:30",
            gym,
            Some("Melanie Keller"),
            "all",
            "seniors",
        ),
    ]
}

fn trainers() -> Vec<Trainer> {
    fn trainer(
        id: &str,
        first: &str,
        last: &str,
        programs: &[ProgramType],
        special_roles: &[&str],
        bio: Option<&str>,
    ) -> Trainer {
        Trainer {
            id: id.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            photo_url: format!("photos/{}.jpg", id),
            photo_web_p: Some(format!("photos/{}.webp", id)),
            programs: programs.to_vec(),
            special_roles: special_roles.iter().map(|r| r.to_string()).collect(),
            sessions: Vec::new(),
            bio: bio.map(str::to_string),
            email: None,
            phone: None,
            sort_key: sort_key_for(last, first),
        }
    }

    // Already in German alphabetical order by last name.
    vec![
        trainer(
            "sandra-brandt",
            "Sandra",
            "Brandt",
            &[ProgramType::Zumba],
            &[],
            Some("Lizenzierte Zumba-Instruktorin seit 2015."),
        ),
        trainer(
            "jens-gruber",
            "Jens",
            "Gruber",
            &[ProgramType::Taekwondo],
            &["first-aid-certified"],
            None,
        ),
        trainer(
            "melanie-keller",
            "Melanie",
            "Keller",
            &[ProgramType::Deepwork, ProgramType::Zumba],
            &["youth-protection-officer"],
            Some("deepWORK- und Zumba-Trainerin, Jugendschutzbeauftragte \
                  des Vereins."),
        ),
        trainer(
            "hans-mueller",
            "Hans",
            "Müller",
            &[ProgramType::Taekwondo],
            &["head-instructor", "competition-judge"],
            Some("Cheftrainer, 5. Dan Taekwondo, Kampfrichter auf Landesebene."),
        ),
        trainer(
            "aenne-oeztuerk",
            "Änne",
            "Öztürk",
            &[ProgramType::Taekwondo],
            &[],
            Some("Betreut die Kinder- und Jugendgruppen."),
        ),
        trainer(
            "katrin-schaefer",
            "Katrin",
            "Schäfer",
            &[ProgramType::Taekwondo],
            &["first-aid-certified"],
            None,
        ),
        trainer(
            "thomas-weiss",
            "Thomas",
            "Weiß",
            &[ProgramType::Taekwondo],
            &[],
            None,
        ),
    ]
}

fn forms() -> Vec<DownloadableForm> {
    vec![
        DownloadableForm {
            id: "membership-application".to_string(),
            form_name: "Mitgliedsantrag".to_string(),
            description: "Aufnahmeantrag für neue Mitglieder inklusive \
                          SEPA-Lastschriftmandat"
                .to_string(),
            file_url: "forms/mitgliedsantrag.pdf".to_string(),
            file_type: "pdf".to_string(),
            file_size: 245_760,
            category: FormCategory::Membership,
            last_updated: "2025-09-01".to_string(),
            required_for: Some("Vereinsbeitritt".to_string()),
        },
        DownloadableForm {
            id: "tournament-registration".to_string(),
            form_name: "Turnieranmeldung Vereinsmeisterschaft".to_string(),
            description: "Anmeldebogen für die jährliche Vereinsmeisterschaft".to_string(),
            file_url: "forms/turnieranmeldung.pdf".to_string(),
            file_type: "pdf".to_string(),
            file_size: 158_208,
            category: FormCategory::Events,
            last_updated: "2025-10-15".to_string(),
            required_for: None,
        },
        DownloadableForm {
            id: "training-rules".to_string(),
            form_name: "Hallen- und Trainingsordnung".to_string(),
            description: "Regeln für den Trainingsbetrieb in der Sporthalle".to_string(),
            file_url: "forms/trainingsordnung.pdf".to_string(),
            file_type: "pdf".to_string(),
            file_size: 98_304,
            category: FormCategory::General,
            last_updated: "2025-03-20".to_string(),
            required_for: None,
        },
    ]
}

fn actions() -> Vec<CallToAction> {
    vec![
        CallToAction {
            id: "join".to_string(),
            label: "Mitglied werden".to_string(),
            action_type: ActionType::Mailto,
            destination: "info@sc-falkenberg.de".to_string(),
            button_style: ButtonStyle::Primary,
            priority: 1,
            icon: Some("person_add".to_string()),
            aria_label: Some("Per E-Mail Mitglied werden".to_string()),
        },
        CallToAction {
            id: "trial-session".to_string(),
            label: "Probetraining vereinbaren".to_string(),
            action_type: ActionType::Mailto,
            destination: "training@sc-falkenberg.de".to_string(),
            button_style: ButtonStyle::Accent,
            priority: 2,
            icon: Some("event".to_string()),
            aria_label: None,
        },
        CallToAction {
            id: "federation".to_string(),
            label: "Landesverband".to_string(),
            action_type: ActionType::External,
            destination: "https://www.dtu.de".to_string(),
            button_style: ButtonStyle::Warn,
            priority: 3,
            icon: None,
            aria_label: Some("Website des Landesverbands öffnen".to_string()),
        },
    ]
}

fn navigation() -> Vec<NavigationItem> {
    fn item(id: &str, label: &str, anchor: &str, order: u32) -> NavigationItem {
        NavigationItem {
            id: id.to_string(),
            label: label.to_string(),
            route_or_anchor: anchor.to_string(),
            icon: None,
            order,
            external_url: None,
        }
    }

    vec![
        item("home", "Start", "#home", 1),
        item("schedule", "Trainingszeiten", "#schedule", 2),
        item("trainers", "Trainer", "#trainers", 3),
        item("downloads", "Downloads", "#downloads", 4),
    ]
}
