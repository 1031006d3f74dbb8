use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// One habit done (or explicitly not done) on one calendar day. The record
/// list holds at most one entry per (habit_id, date) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRecord {
    pub habit_id: String,
    pub date: String, // YYYY-MM-DD
    pub completed: bool,
}

pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Parse a stored `YYYY-MM-DD` day. Malformed input is the storage layer's
/// problem; callers skip records that fail to parse.
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DAY_FORMAT).ok()
}

pub fn format_day(day: NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}

/// The current calendar day in the local timezone. Resolved once at the
/// command layer and passed into the calculators so day boundaries are
/// consistent within a single operation.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_day_accepts_iso_dates_only() {
        assert_eq!(
            parse_day("2025-06-15"),
            NaiveDate::from_ymd_opt(2025, 6, 15)
        );
        assert_eq!(parse_day("06/15/2025"), None);
        assert_eq!(parse_day("not-a-date"), None);
    }

    #[test]
    fn format_day_round_trips() {
        let day = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
        assert_eq!(parse_day(&format_day(day)), Some(day));
    }
}
