//! Trainer directory helpers.
//!
//! Pure functions over [`Trainer`] records: alphabetical ordering under an
//! injected collator, photo-placeholder derivation (initials and a
//! deterministic gradient), and the eager/lazy photo loading split.

use std::collections::HashSet;

use tracing::warn;

use crate::content::{ProgramType, Trainer};
use crate::traits::Collator;

/// How many leading trainer photos are loaded eagerly; the rest load on
/// demand as their cards scroll into view.
pub const EAGER_LOAD_COUNT: usize = 6;

/// Photo loading strategy for one position in the sorted directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingStrategy {
    Eager,
    Lazy,
}

/// Returns the loading strategy for the trainer at `index`.
pub fn loading_strategy(index: usize, eager_count: usize) -> LoadingStrategy {
    if index < eager_count {
        LoadingStrategy::Eager
    } else {
        LoadingStrategy::Lazy
    }
}

/// Uppercased initials for the photo placeholder, e.g. "HM" for Hans
/// Müller.
pub fn initials(first_name: &str, last_name: &str) -> String {
    first_name
        .chars()
        .next()
        .into_iter()
        .chain(last_name.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Deterministic hue in [0, 360) derived from a trainer's name.
///
/// The hash only needs to be stable across runs so a trainer's placeholder
/// keeps its color; a character-code sum is plenty.
pub fn name_hue(first_name: &str, last_name: &str) -> f32 {
    let sum: u32 = first_name
        .chars()
        .chain(last_name.chars())
        .map(|ch| ch as u32)
        .fold(0, u32::wrapping_add);
    (sum % 360) as f32
}

/// Two analogous hues for the placeholder's two-stop gradient.
pub fn gradient_hues(first_name: &str, last_name: &str) -> (f32, f32) {
    let hue = name_hue(first_name, last_name);
    (hue, (hue + 40.0) % 360.0)
}

/// Sort key in "lastname firstname" form, lowercased.
pub fn sort_key_for(last_name: &str, first_name: &str) -> String {
    format!("{} {}", last_name, first_name).to_lowercase()
}

/// Returns the trainers ordered by sort key under the given collator.
///
/// The sort is stable and the input is left untouched.
pub fn sort_trainers(trainers: &[Trainer], collator: &dyn Collator) -> Vec<Trainer> {
    let mut sorted = trainers.to_vec();
    sorted.sort_by(|a, b| collator.compare(&a.sort_key, &b.sort_key));
    sorted
}

/// Prepares a freshly loaded trainer list for display.
///
/// Drops duplicate ids (with a logged warning), fills in missing sort
/// keys, and sorts once. The directory is immutable afterwards.
pub fn prepare_trainers(trainers: Vec<Trainer>, collator: &dyn Collator) -> Vec<Trainer> {
    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut prepared = Vec::with_capacity(trainers.len());

    for mut trainer in trainers {
        if !seen_ids.insert(trainer.id.clone()) {
            warn!("dropping trainer with duplicate id {:?}", trainer.id);
            continue;
        }
        if trainer.sort_key.is_empty() {
            trainer.sort_key = sort_key_for(&trainer.last_name, &trainer.first_name);
        }
        prepared.push(trainer);
    }

    sort_trainers(&prepared, collator)
}

/// Whether the trainer teaches the given program.
pub fn has_program(trainer: &Trainer, program: ProgramType) -> bool {
    trainer.programs.contains(&program)
}

/// Whether the trainer carries the given special role.
pub fn has_role(trainer: &Trainer, role: &str) -> bool {
    trainer.special_roles.iter().any(|r| r == role)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collation::GermanCollator;

    fn trainer(id: &str, first: &str, last: &str) -> Trainer {
        Trainer {
            id: id.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            photo_url: format!("photos/{}.jpg", id),
            photo_web_p: None,
            programs: vec![ProgramType::Taekwondo],
            special_roles: Vec::new(),
            sessions: Vec::new(),
            bio: None,
            email: None,
            phone: None,
            sort_key: String::new(),
        }
    }

    #[test]
    fn test_initials_are_uppercased() {
        assert_eq!(initials("Hans", "Müller"), "HM");
        assert_eq!(initials("änne", "öztürk"), "ÄÖ");
        assert_eq!(initials("", "Müller"), "M");
        assert_eq!(initials("", ""), "");
    }

    #[test]
    fn test_gradient_is_deterministic() {
        let first = gradient_hues("Änne", "Öztürk");
        let second = gradient_hues("Änne", "Öztürk");
        assert_eq!(first, second);

        let (hue, partner) = first;
        assert!((0.0..360.0).contains(&hue));
        assert!((0.0..360.0).contains(&partner));
        assert!((partner - (hue + 40.0) % 360.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_loading_strategy_threshold() {
        assert_eq!(loading_strategy(0, EAGER_LOAD_COUNT), LoadingStrategy::Eager);
        assert_eq!(loading_strategy(5, EAGER_LOAD_COUNT), LoadingStrategy::Eager);
        assert_eq!(loading_strategy(6, EAGER_LOAD_COUNT), LoadingStrategy::Lazy);
        assert_eq!(loading_strategy(100, EAGER_LOAD_COUNT), LoadingStrategy::Lazy);
    }

    #[test]
    fn test_sort_orders_umlauts_with_base_letters() {
        let trainers = vec![
            trainer("oeztuerk", "Änne", "Öztürk"),
            trainer("mueller", "Bert", "Müller"),
        ];
        let prepared = prepare_trainers(trainers, &GermanCollator::new());
        assert_eq!(prepared[0].last_name, "Müller");
        assert_eq!(prepared[1].last_name, "Öztürk");
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let original = vec![
            trainer("b", "Ben", "Zimmer"),
            trainer("a", "Ada", "Arnold"),
        ];
        let mut with_keys = original.clone();
        for t in &mut with_keys {
            t.sort_key = sort_key_for(&t.last_name, &t.first_name);
        }

        let sorted = sort_trainers(&with_keys, &GermanCollator::new());
        assert_eq!(sorted[0].last_name, "Arnold");
        // The input order is untouched.
        assert_eq!(with_keys[0].last_name, "Zimmer");
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut a = trainer("huber-sen", "Max", "Huber");
        let mut b = trainer("huber-jun", "Max", "Huber");
        a.sort_key = sort_key_for("Huber", "Max");
        b.sort_key = a.sort_key.clone();

        let sorted = sort_trainers(&[a, b], &GermanCollator::new());
        assert_eq!(sorted[0].id, "huber-sen");
        assert_eq!(sorted[1].id, "huber-jun");
    }

    #[test]
    fn test_prepare_drops_duplicate_ids() {
        let trainers = vec![
            trainer("huber", "Max", "Huber"),
            trainer("huber", "Moritz", "Huber"),
        ];
        let prepared = prepare_trainers(trainers, &GermanCollator::new());
        assert_eq!(prepared.len(), 1);
        assert_eq!(prepared[0].first_name, "Max");
    }

    #[test]
    fn test_role_and_program_membership() {
        let mut t = trainer("huber", "Max", "Huber");
        t.special_roles.push("head-instructor".to_string());

        assert!(has_program(&t, ProgramType::Taekwondo));
        assert!(!has_program(&t, ProgramType::Zumba));
        assert!(has_role(&t, "head-instructor"));
        assert!(!has_role(&t, "youth-protection-officer"));
    }
}
