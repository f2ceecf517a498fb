//! Schedule grouping and narrowing.
//!
//! Pure view logic for the schedule panel: narrowing by program or search
//! text and grouping sessions into the weekly layout. The persisted tag
//! filtering itself lives in the library filter store; these helpers only
//! shape its output for display.

use clubdesk::{DayOfWeek, ProgramType, TrainingSession};

/// Keeps only sessions of the given program; `None` keeps everything.
pub fn narrow_by_program(
    sessions: &[TrainingSession],
    program: Option<ProgramType>,
) -> Vec<TrainingSession> {
    match program {
        None => sessions.to_vec(),
        Some(program) => sessions
            .iter()
            .filter(|session| session.program_type == program)
            .cloned()
            .collect(),
    }
}

/// Keeps only sessions matching the query in their location, instructor,
/// or notes. Matching is case-insensitive; a blank query keeps everything.
pub fn narrow_by_search(sessions: &[TrainingSession], query: &str) -> Vec<TrainingSession> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return sessions.to_vec();
    }

    sessions
        .iter()
        .filter(|session| {
            let mut haystacks = vec![session.location.as_str()];
            if let Some(instructor) = &session.instructor {
                haystacks.push(instructor);
            }
            if let Some(notes) = &session.notes {
                haystacks.push(notes);
            }
            haystacks
                .iter()
                .any(|text| text.to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}

/// Groups sessions into weekdays, Monday first.
///
/// Days without sessions are omitted; within a day, sessions are ordered
/// by start time (unparseable times sort last).
pub fn group_by_day(sessions: &[TrainingSession]) -> Vec<(DayOfWeek, Vec<TrainingSession>)> {
    let mut grouped = Vec::new();

    for day in DayOfWeek::WEEK {
        let mut on_day: Vec<TrainingSession> = sessions
            .iter()
            .filter(|session| session.day_of_week == day)
            .cloned()
            .collect();
        if on_day.is_empty() {
            continue;
        }
        on_day.sort_by_key(|session| session.start_minutes().unwrap_or(u16::MAX));
        grouped.push((day, on_day));
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(id: &str, program: ProgramType, day: DayOfWeek, start: &str) -> TrainingSession {
        TrainingSession {
            id: id.to_string(),
            program_type: program,
            day_of_week: day,
            start_time: start.to_string(),
            end_time: "22:00".to_string(),
            location: "Sporthalle West".to_string(),
            instructor: Some("Hans Müller".to_string()),
            level: "all".to_string(),
            age_group: "adults".to_string(),
            max_participants: None,
            notes: None,
        }
    }

    #[test]
    fn test_narrow_by_program() {
        let sessions = vec![
            session("a", ProgramType::Taekwondo, DayOfWeek::Monday, "17:00"),
            session("b", ProgramType::Zumba, DayOfWeek::Monday, "18:00"),
        ];

        assert_eq!(narrow_by_program(&sessions, None).len(), 2);

        let narrowed = narrow_by_program(&sessions, Some(ProgramType::Zumba));
        assert_eq!(narrowed.len(), 1);
        assert_eq!(narrowed[0].id, "b");
    }

    #[test]
    fn test_narrow_by_search_is_case_insensitive() {
        let sessions = vec![
            session("a", ProgramType::Taekwondo, DayOfWeek::Monday, "17:00"),
            session("b", ProgramType::Zumba, DayOfWeek::Monday, "18:00"),
        ];

        assert_eq!(narrow_by_search(&sessions, "  ").len(), 2);
        assert_eq!(narrow_by_search(&sessions, "müller").len(), 2);
        assert_eq!(narrow_by_search(&sessions, "sporthalle WEST").len(), 2);
        assert!(narrow_by_search(&sessions, "ostbad").is_empty());
    }

    #[test]
    fn test_group_by_day_orders_week_and_times() {
        let sessions = vec![
            session("fri", ProgramType::Zumba, DayOfWeek::Friday, "18:45"),
            session("mon-late", ProgramType::Taekwondo, DayOfWeek::Monday, "19:00"),
            session("mon-early", ProgramType::Taekwondo, DayOfWeek::Monday, "17:00"),
        ];

        let grouped = group_by_day(&sessions);
        assert_eq!(grouped.len(), 2);

        let (first_day, monday_sessions) = &grouped[0];
        assert_eq!(*first_day, DayOfWeek::Monday);
        assert_eq!(monday_sessions[0].id, "mon-early");
        assert_eq!(monday_sessions[1].id, "mon-late");

        assert_eq!(grouped[1].0, DayOfWeek::Friday);
    }
}
