use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};

use crate::models::record::{parse_day, CompletionRecord};
use crate::models::stats::HabitStats;

/// Fixed completion-rate window: today and the 29 days before it.
pub const RATE_WINDOW_DAYS: u32 = 30;

/// Compute streaks and the 30-day completion rate for one habit, or across
/// all habits when `habit_id` is `None` (a day counts once however many
/// habits were completed on it).
///
/// Pure function of its inputs; `today` is injected so day boundaries are the
/// caller's decision and tests never depend on the wall clock.
pub fn compute_stats(
    records: &[CompletionRecord],
    habit_id: Option<&str>,
    today: NaiveDate,
) -> HabitStats {
    let days = completed_days(records, habit_id);
    if days.is_empty() {
        return HabitStats::default();
    }

    let total_completed = days.iter().filter(|&&d| in_rate_window(d, today)).count() as u32;

    HabitStats {
        current_streak: current_streak(&days, today),
        longest_streak: longest_streak(&days),
        completion_rate: f64::from(total_completed) / f64::from(RATE_WINDOW_DAYS) * 100.0,
        total_completed,
        total_days: RATE_WINDOW_DAYS,
    }
}

/// Distinct calendar days carrying a completed record, optionally filtered to
/// one habit. Incomplete records and records with unparseable dates drop out
/// here.
fn completed_days(records: &[CompletionRecord], habit_id: Option<&str>) -> BTreeSet<NaiveDate> {
    records
        .iter()
        .filter(|r| r.completed)
        .filter(|r| habit_id.map_or(true, |id| r.habit_id == id))
        .filter_map(|r| parse_day(&r.date))
        .collect()
}

fn in_rate_window(day: NaiveDate, today: NaiveDate) -> bool {
    let age = today.signed_duration_since(day).num_days();
    age >= 0 && age < i64::from(RATE_WINDOW_DAYS)
}

/// Walk backward day-by-day from today; the streak ends at the first missing
/// day, so a day not completed today means the streak is already 0.
fn current_streak(days: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut day = today;
    while days.contains(&day) {
        streak += 1;
        day = day - Duration::days(1);
    }
    streak
}

/// Longest run of consecutive days; the set iterates in ascending order, so a
/// run extends only when a day is exactly one day after its predecessor.
fn longest_streak(days: &BTreeSet<NaiveDate>) -> u32 {
    let mut longest = 0;
    let mut run = 0;
    let mut prev: Option<NaiveDate> = None;

    for &day in days {
        run = match prev {
            Some(p) if day.signed_duration_since(p).num_days() == 1 => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(day);
    }

    longest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(habit_id: &str, date: NaiveDate) -> CompletionRecord {
        CompletionRecord {
            habit_id: habit_id.to_string(),
            date: date.format("%Y-%m-%d").to_string(),
            completed: true,
        }
    }

    fn run_ending(habit_id: &str, end: NaiveDate, len: i64) -> Vec<CompletionRecord> {
        (0..len)
            .map(|offset| record(habit_id, end - Duration::days(offset)))
            .collect()
    }

    fn today() -> NaiveDate {
        day(2025, 6, 15)
    }

    #[test]
    fn empty_record_set_yields_all_zero_stats() {
        assert_eq!(compute_stats(&[], None, today()), HabitStats::default());
        assert_eq!(
            compute_stats(&[], Some("water"), today()),
            HabitStats::default()
        );
    }

    #[test]
    fn seven_day_run_ending_today() {
        let records = run_ending("water", today(), 7);
        let stats = compute_stats(&records, Some("water"), today());

        assert_eq!(stats.current_streak, 7);
        assert_eq!(stats.longest_streak, 7);
        assert_eq!(stats.total_completed, 7);
        assert_eq!(stats.total_days, RATE_WINDOW_DAYS);
    }

    #[test]
    fn gap_resets_the_streak() {
        // Completed days 1-3, missed day 4, completed day 5.
        let records = vec![
            record("read", day(2025, 6, 1)),
            record("read", day(2025, 6, 2)),
            record("read", day(2025, 6, 3)),
            record("read", day(2025, 6, 5)),
        ];
        let stats = compute_stats(&records, Some("read"), today());

        assert_eq!(stats.longest_streak, 3);
        assert_eq!(stats.current_streak, 0);
    }

    #[test]
    fn today_not_completed_means_zero_current_streak() {
        let records = run_ending("read", today() - Duration::days(1), 10);
        let stats = compute_stats(&records, Some("read"), today());

        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.longest_streak, 10);
    }

    #[test]
    fn fifteen_completed_days_in_the_window_is_fifty_percent() {
        // Every second day of the window, ending today.
        let records: Vec<_> = (0..30)
            .step_by(2)
            .map(|offset| record("run", today() - Duration::days(offset)))
            .collect();
        let stats = compute_stats(&records, Some("run"), today());

        assert_eq!(stats.total_completed, 15);
        assert!((stats.completion_rate - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn old_records_count_toward_streaks_but_not_the_rate() {
        // A 40-day run ending today: streak spans it all, the rate caps at
        // the 30-day window.
        let records = run_ending("run", today(), 40);
        let stats = compute_stats(&records, Some("run"), today());

        assert_eq!(stats.current_streak, 40);
        assert_eq!(stats.longest_streak, 40);
        assert_eq!(stats.total_completed, 30);
        assert!((stats.completion_rate - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn incomplete_and_malformed_records_are_ignored() {
        let mut records = vec![record("read", today())];
        records.push(CompletionRecord {
            habit_id: "read".to_string(),
            date: (today() - Duration::days(1)).format("%Y-%m-%d").to_string(),
            completed: false,
        });
        records.push(CompletionRecord {
            habit_id: "read".to_string(),
            date: "yesterday".to_string(),
            completed: true,
        });

        let stats = compute_stats(&records, Some("read"), today());
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.total_completed, 1);
    }

    #[test]
    fn aggregate_counts_a_day_once_across_habits() {
        let mut records = run_ending("water", today(), 3);
        records.extend(run_ending("read", today(), 5));

        let stats = compute_stats(&records, None, today());
        assert_eq!(stats.current_streak, 5);
        assert_eq!(stats.total_completed, 5);
    }

    #[test]
    fn stats_are_scoped_to_the_requested_habit() {
        let mut records = run_ending("water", today(), 3);
        records.extend(run_ending("read", today() - Duration::days(10), 6));

        let water = compute_stats(&records, Some("water"), today());
        assert_eq!(water.current_streak, 3);
        assert_eq!(water.longest_streak, 3);

        let read = compute_stats(&records, Some("read"), today());
        assert_eq!(read.current_streak, 0);
        assert_eq!(read.longest_streak, 6);
    }
}
