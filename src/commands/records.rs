use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::models::record::{format_day, local_today, parse_day, CompletionRecord};
use crate::storage::{load_records, save_records, BlobStore, FileStore};

#[tauri::command]
pub async fn list_records(
    store: tauri::State<'_, Arc<Mutex<FileStore>>>,
) -> Result<Vec<CompletionRecord>, String> {
    let guard = store.lock().map_err(|_| "Store lock error".to_string())?;
    load_records(&*guard)
}

#[tauri::command]
pub async fn toggle_completion(
    habit_id: String,
    date: String,
    store: tauri::State<'_, Arc<Mutex<FileStore>>>,
) -> Result<Vec<CompletionRecord>, String> {
    let mut guard = store.lock().map_err(|_| "Store lock error".to_string())?;
    toggle_completion_internal(&mut *guard, &habit_id, &date)
}

#[tauri::command]
pub async fn get_today_records(
    store: tauri::State<'_, Arc<Mutex<FileStore>>>,
) -> Result<Vec<CompletionRecord>, String> {
    let guard = store.lock().map_err(|_| "Store lock error".to_string())?;
    today_records_internal(&*guard, local_today())
}

/// Flip the completion state for one (habit, day) pair: an existing record is
/// removed, a missing one is inserted as completed. Keeps the at-most-one
/// record per pair invariant. Returns the full record list the blob now holds.
pub fn toggle_completion_internal<S: BlobStore>(
    store: &mut S,
    habit_id: &str,
    date: &str,
) -> Result<Vec<CompletionRecord>, String> {
    if parse_day(date).is_none() {
        return Err(format!("Invalid date (expected YYYY-MM-DD): {date}"));
    }

    let mut records = load_records(store)?;
    let before = records.len();
    records.retain(|r| !(r.habit_id == habit_id && r.date == date));

    if records.len() == before {
        records.push(CompletionRecord {
            habit_id: habit_id.to_string(),
            date: date.to_string(),
            completed: true,
        });
    }

    save_records(store, &records)?;
    Ok(records)
}

pub fn today_records_internal<S: BlobStore>(
    store: &S,
    today: NaiveDate,
) -> Result<Vec<CompletionRecord>, String> {
    let today = format_day(today);
    let records = load_records(store)?;
    Ok(records.into_iter().filter(|r| r.date == today).collect())
}
