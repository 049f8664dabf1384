//! The occupied-slots endpoint: `GET /api/horarios/{date}`.
//!
//! The response body is a JSON list of time strings. Only the first five
//! characters of each entry matter (see [`crate::slots::slot_key`]).

use std::fmt::Display;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::calendar::{DayStatus, WorkWeek};
use crate::error::{AgendaError, Result};
use crate::slots::{SlotBoard, reconcile};

/// Message shown when the slot list could not be loaded.
pub const FETCH_FAILED_MESSAGE: &str = "Não foi possível carregar os horários.";

/// Request path for the occupied slots of a date.
pub fn slots_path(base: &str, date: NaiveDate) -> String {
    format!(
        "{}/api/horarios/{}",
        base.trim_end_matches('/'),
        date.format("%Y-%m-%d")
    )
}

/// Decode a response body into the occupied time strings.
pub fn parse_occupied(body: &str) -> Result<Vec<String>> {
    serde_json::from_str::<Vec<String>>(body).map_err(|e| {
        warn!(error = %e, "slot list rejected");
        AgendaError::from(e)
    })
}

/// Tags outstanding requests so only the latest date's answer is applied.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RequestGeneration(u64);

impl RequestGeneration {
    /// Start a new request, superseding any earlier one.
    pub fn next(&mut self) -> RequestGeneration {
        self.0 = self.0.wrapping_add(1);
        *self
    }

    pub fn is_current(&self, tag: RequestGeneration) -> bool {
        self.0 == tag.0
    }
}

/// What a date change leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateOutcome {
    /// The input is not a date; nothing is shown.
    Invalid(AgendaError),
    /// A closed day: show the message, render no slots, fetch nothing.
    Closed(&'static str),
    /// An open day: fetch its occupied slots.
    Fetch(NaiveDate),
}

/// Decide what a new date input value should trigger.
pub fn date_outcome(week: &WorkWeek, input: &str) -> DateOutcome {
    match week.check_input(input) {
        Err(e) => {
            warn!(input, "date rejected");
            DateOutcome::Invalid(e)
        }
        Ok((_, DayStatus::Closed { message })) => DateOutcome::Closed(message),
        Ok((date, DayStatus::Open)) => DateOutcome::Fetch(date),
    }
}

/// How the slot area changes once a fetch completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotUpdate {
    Board(SlotBoard),
    Failed(&'static str),
}

/// Apply a finished fetch tagged `tag`.
///
/// Returns `None` when a newer request has started since, so the answer
/// belongs to a date that is no longer selected.
pub fn apply_response<S, E>(
    current: &RequestGeneration,
    tag: RequestGeneration,
    slots: &[S],
    result: std::result::Result<Vec<String>, E>,
) -> Option<SlotUpdate>
where
    S: AsRef<str>,
    E: Display,
{
    if !current.is_current(tag) {
        debug!(tag = tag.0, "stale slot list dropped");
        return None;
    }
    match result {
        Ok(occupied) => Some(SlotUpdate::Board(reconcile(slots, &occupied))),
        Err(e) => {
            warn!(error = %e, "slot list fetch failed");
            Some(SlotUpdate::Failed(FETCH_FAILED_MESSAGE))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CLOSED_DAY_MESSAGE;
    use crate::slots::{DEFAULT_SLOTS, SlotState};

    #[test]
    fn test_slots_path() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(slots_path("", date), "/api/horarios/2026-03-07");
        assert_eq!(
            slots_path("https://salao.example/", date),
            "https://salao.example/api/horarios/2026-03-07"
        );
    }

    #[test]
    fn test_parse_occupied() {
        let occupied = parse_occupied(r#"["07:10:00", "14:50:00"]"#).unwrap();
        assert_eq!(occupied, vec!["07:10:00", "14:50:00"]);
        assert!(parse_occupied("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_occupied_malformed() {
        assert!(matches!(
            parse_occupied("{\"erro\": 1}"),
            Err(AgendaError::MalformedResponse(_))
        ));
        assert!(parse_occupied("<html>").is_err());
        assert!(parse_occupied("[1, 2]").is_err());
    }

    #[test]
    fn test_stale_generation_is_dropped() {
        let mut current = RequestGeneration::default();
        let first = current.next();
        let second = current.next();
        assert!(!current.is_current(first));
        assert!(current.is_current(second));
    }

    #[test]
    fn test_closed_day_issues_no_fetch() {
        let week = WorkWeek::default();
        // 2026-10-25 is a Sunday
        assert_eq!(
            date_outcome(&week, "2026-10-25"),
            DateOutcome::Closed(CLOSED_DAY_MESSAGE)
        );
        assert_eq!(
            date_outcome(&week, "2026-10-26"),
            DateOutcome::Closed(CLOSED_DAY_MESSAGE)
        );
    }

    #[test]
    fn test_open_day_fetches() {
        let week = WorkWeek::default();
        let tuesday = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
        assert_eq!(date_outcome(&week, "2026-10-20"), DateOutcome::Fetch(tuesday));
    }

    #[test]
    fn test_invalid_date_input() {
        let week = WorkWeek::default();
        assert!(matches!(
            date_outcome(&week, ""),
            DateOutcome::Invalid(AgendaError::InvalidDate(_))
        ));
        assert!(matches!(
            date_outcome(&week, "20/10/2026"),
            DateOutcome::Invalid(_)
        ));
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let mut current = RequestGeneration::default();
        let first = current.next();
        let _second = current.next();
        let late: std::result::Result<Vec<String>, String> = Ok(vec!["07:10:00".to_string()]);
        assert_eq!(apply_response(&current, first, &DEFAULT_SLOTS, late), None);
    }

    #[test]
    fn test_current_response_builds_board() {
        let mut current = RequestGeneration::default();
        let tag = current.next();
        let result: std::result::Result<Vec<String>, String> =
            Ok(vec!["07:10:00".to_string(), "19:50:00".to_string()]);
        let Some(SlotUpdate::Board(board)) =
            apply_response(&current, tag, &DEFAULT_SLOTS, result)
        else {
            panic!("expected a slot board");
        };
        assert_eq!(board.free_count(), 12);
        assert_eq!(board.slots()[0].state, SlotState::Occupied);
        assert_eq!(board.slots()[13].state, SlotState::Occupied);
    }

    #[test]
    fn test_failed_fetch_shows_message() {
        let mut current = RequestGeneration::default();
        let tag = current.next();
        let result: std::result::Result<Vec<String>, String> = Err("HTTP 500".to_string());
        assert_eq!(
            apply_response(&current, tag, &DEFAULT_SLOTS, result),
            Some(SlotUpdate::Failed(FETCH_FAILED_MESSAGE))
        );
    }
}
