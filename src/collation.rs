//! German locale collation.
//!
//! Implements DIN 5007-1 dictionary ordering: comparison is
//! case-insensitive, the umlauts ä/ö/ü sort together with their base
//! letters a/o/u, and ß sorts as ss. When two strings are equal at that
//! primary strength, the unmarked letter orders before the umlaut
//! ("Ubung" before "Übung"). A final code-point comparison makes the
//! ordering total so sorts stay deterministic.

use std::cmp::Ordering;

use crate::traits::Collator;

/// Collator applying German dictionary sorting rules.
#[derive(Debug, Default, Clone, Copy)]
pub struct GermanCollator;

impl GermanCollator {
    /// Creates a new German collator.
    pub fn new() -> Self {
        Self
    }
}

impl Collator for GermanCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        let (primary_a, marks_a) = sort_key(a);
        let (primary_b, marks_b) = sort_key(b);

        primary_a
            .cmp(&primary_b)
            .then_with(|| marks_a.cmp(&marks_b))
            .then_with(|| a.cmp(b))
    }
}

/// Builds the two-level comparison key for a string.
///
/// The primary key is the lowercased text with umlauts folded onto their
/// base letters; the secondary key records, per source character, whether
/// it carried a mark (umlaut or ß). Comparing marks lexicographically puts
/// unmarked letters first when primaries tie.
fn sort_key(text: &str) -> (String, Vec<u8>) {
    let mut primary = String::with_capacity(text.len());
    let mut marks = Vec::with_capacity(text.len());

    for ch in text.chars() {
        for lower in ch.to_lowercase() {
            match lower {
                'ä' => {
                    primary.push('a');
                    marks.push(1);
                }
                'ö' => {
                    primary.push('o');
                    marks.push(1);
                }
                'ü' => {
                    primary.push('u');
                    marks.push(1);
                }
                'ß' => {
                    primary.push_str("ss");
                    marks.push(1);
                }
                other => {
                    primary.push(other);
                    marks.push(0);
                }
            }
        }
    }

    (primary, marks)
}
