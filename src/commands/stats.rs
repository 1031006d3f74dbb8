use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::analysis::overview::{compute_overview, daily_history};
use crate::analysis::streaks::compute_stats;
use crate::models::record::local_today;
use crate::models::stats::{DailyCount, HabitStats, OverviewStats};
use crate::storage::{load_habits, load_records, BlobStore, FileStore};

#[tauri::command]
pub async fn get_habit_stats(
    habit_id: Option<String>,
    store: tauri::State<'_, Arc<Mutex<FileStore>>>,
) -> Result<HabitStats, String> {
    let guard = store.lock().map_err(|_| "Store lock error".to_string())?;
    habit_stats_internal(&*guard, habit_id.as_deref(), local_today())
}

#[tauri::command]
pub async fn get_overview_stats(
    store: tauri::State<'_, Arc<Mutex<FileStore>>>,
) -> Result<OverviewStats, String> {
    let guard = store.lock().map_err(|_| "Store lock error".to_string())?;
    overview_stats_internal(&*guard, local_today())
}

#[tauri::command]
pub async fn get_daily_history(
    habit_id: Option<String>,
    store: tauri::State<'_, Arc<Mutex<FileStore>>>,
) -> Result<Vec<DailyCount>, String> {
    let guard = store.lock().map_err(|_| "Store lock error".to_string())?;
    daily_history_internal(&*guard, habit_id.as_deref(), local_today())
}

pub fn habit_stats_internal<S: BlobStore>(
    store: &S,
    habit_id: Option<&str>,
    today: NaiveDate,
) -> Result<HabitStats, String> {
    let records = load_records(store)?;
    Ok(compute_stats(&records, habit_id, today))
}

pub fn overview_stats_internal<S: BlobStore>(
    store: &S,
    today: NaiveDate,
) -> Result<OverviewStats, String> {
    let habits = load_habits(store)?;
    let records = load_records(store)?;
    Ok(compute_overview(&habits, &records, today))
}

pub fn daily_history_internal<S: BlobStore>(
    store: &S,
    habit_id: Option<&str>,
    today: NaiveDate,
) -> Result<Vec<DailyCount>, String> {
    let habits = load_habits(store)?;
    let records = load_records(store)?;
    Ok(daily_history(&records, habit_id, habits.len(), today))
}
