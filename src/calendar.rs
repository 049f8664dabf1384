//! Selected date and working days.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{AgendaError, Result};

/// Message shown when the chosen date falls on a closed day.
pub const CLOSED_DAY_MESSAGE: &str = "Trabalhamos apenas de terça a sábado.";

/// Parse a date input value (`YYYY-MM-DD`).
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| AgendaError::InvalidDate(text.to_string()))
}

/// Whether appointments can be made on a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayStatus {
    Open,
    Closed { message: &'static str },
}

impl DayStatus {
    pub fn is_open(&self) -> bool {
        matches!(self, DayStatus::Open)
    }
}

/// The weekdays the salon takes appointments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkWeek {
    open_days: Vec<Weekday>,
}

/// Tuesday through Saturday; Sunday and Monday are closed.
impl Default for WorkWeek {
    fn default() -> Self {
        Self {
            open_days: vec![
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
                Weekday::Sat,
            ],
        }
    }
}

impl WorkWeek {
    pub fn open_days(&self) -> &[Weekday] {
        &self.open_days
    }

    pub fn is_open_on(&self, day: Weekday) -> bool {
        self.open_days.contains(&day)
    }

    pub fn check(&self, date: NaiveDate) -> DayStatus {
        if self.is_open_on(date.weekday()) {
            DayStatus::Open
        } else {
            DayStatus::Closed {
                message: CLOSED_DAY_MESSAGE,
            }
        }
    }

    /// Parse and check a raw date input value in one step.
    pub fn check_input(&self, text: &str) -> Result<(NaiveDate, DayStatus)> {
        let date = parse_date(text)?;
        Ok((date, self.check(date)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        let d = parse_date("2026-10-20").unwrap();
        assert_eq!(d.weekday(), Weekday::Tue);
        assert!(parse_date("20/10/2026").is_err());
        assert!(parse_date("").is_err());
        assert!(parse_date("2026-02-30").is_err());
    }

    #[test]
    fn test_tuesday_through_saturday_open() {
        let week = WorkWeek::default();
        // 2026-10-20 is a Tuesday
        for day in 20..=24 {
            let date = NaiveDate::from_ymd_opt(2026, 10, day).unwrap();
            assert!(week.check(date).is_open(), "{date} should be open");
        }
    }

    #[test]
    fn test_sunday_and_monday_closed() {
        let week = WorkWeek::default();
        let (_, sunday) = week.check_input("2026-10-25").unwrap();
        let (_, monday) = week.check_input("2026-10-26").unwrap();
        assert_eq!(
            sunday,
            DayStatus::Closed {
                message: CLOSED_DAY_MESSAGE
            }
        );
        assert!(!monday.is_open());
    }

    #[test]
    fn test_custom_week() {
        let week: WorkWeek = serde_json::from_str(r#"["Mon", "Friday"]"#).unwrap();
        assert!(week.is_open_on(Weekday::Mon));
        assert!(!week.is_open_on(Weekday::Sat));
    }
}
