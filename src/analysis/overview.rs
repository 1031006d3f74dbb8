use std::collections::HashMap;

use chrono::{Duration, NaiveDate};

use crate::models::habit::Habit;
use crate::models::record::{format_day, parse_day, CompletionRecord};
use crate::models::stats::{DailyCount, OverviewStats};

use super::streaks::{compute_stats, RATE_WINDOW_DAYS};

/// Dashboard summary across every habit: the average completion rate over the
/// per-habit windows, the best streak anywhere, and the total completed days.
pub fn compute_overview(
    habits: &[Habit],
    records: &[CompletionRecord],
    today: NaiveDate,
) -> OverviewStats {
    let per_habit: Vec<_> = habits
        .iter()
        .map(|habit| compute_stats(records, Some(&habit.id), today))
        .collect();

    let total_completions: u32 = per_habit.iter().map(|s| s.total_completed).sum();
    let total_days: u32 = per_habit.iter().map(|s| s.total_days).sum();
    let avg_completion_rate = if total_days > 0 {
        f64::from(total_completions) / f64::from(total_days) * 100.0
    } else {
        0.0
    };

    OverviewStats {
        total_habits: habits.len() as u32,
        avg_completion_rate,
        longest_streak: per_habit.iter().map(|s| s.longest_streak).max().unwrap_or(0),
        total_completions,
    }
}

/// Chart series for the last 30 days, oldest first. For the aggregate series
/// each point counts the habits completed that day against `habit_total`; for
/// a single habit the point is 0 or 1 against a total of 1.
pub fn daily_history(
    records: &[CompletionRecord],
    habit_id: Option<&str>,
    habit_total: usize,
    today: NaiveDate,
) -> Vec<DailyCount> {
    let mut by_day: HashMap<NaiveDate, u32> = HashMap::new();
    for record in records {
        if !record.completed {
            continue;
        }
        if habit_id.map_or(false, |id| record.habit_id != id) {
            continue;
        }
        if let Some(day) = parse_day(&record.date) {
            *by_day.entry(day).or_insert(0) += 1;
        }
    }

    let total = if habit_id.is_some() { 1 } else { habit_total as u32 };

    (0..i64::from(RATE_WINDOW_DAYS))
        .rev()
        .map(|offset| {
            let day = today - Duration::days(offset);
            DailyCount {
                date: format_day(day),
                completed: by_day.get(&day).copied().unwrap_or(0),
                total,
            }
        })
        .collect()
}
