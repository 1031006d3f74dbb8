use serde::{Deserialize, Serialize};

/// Derived statistics for one habit, or for all habits when computed without
/// a target id. Never stored; recomputed from the record list on demand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitStats {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub completion_rate: f64, // percent of the last 30 days
    pub total_completed: u32, // completed days inside the window
    pub total_days: u32,      // window size, 0 when there are no records
}

/// Dashboard summary across every habit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStats {
    pub total_habits: u32,
    pub avg_completion_rate: f64,
    pub longest_streak: u32,
    pub total_completions: u32,
}

/// One point of the 30-day completion chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCount {
    pub date: String, // YYYY-MM-DD
    pub completed: u32,
    pub total: u32,
}
