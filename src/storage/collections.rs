use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::habit::Habit;
use crate::models::record::CompletionRecord;

use super::blob::BlobStore;

pub const HABITS_KEY: &str = "habits";
pub const RECORDS_KEY: &str = "habit-records";

pub fn load_habits<S: BlobStore>(store: &S) -> Result<Vec<Habit>, String> {
    load_collection(store, HABITS_KEY)
}

pub fn save_habits<S: BlobStore>(store: &mut S, habits: &[Habit]) -> Result<(), String> {
    save_collection(store, HABITS_KEY, habits)
}

pub fn load_records<S: BlobStore>(store: &S) -> Result<Vec<CompletionRecord>, String> {
    load_collection(store, RECORDS_KEY)
}

pub fn save_records<S: BlobStore>(
    store: &mut S,
    records: &[CompletionRecord],
) -> Result<(), String> {
    save_collection(store, RECORDS_KEY, records)
}

/// Absent blobs and blobs that no longer parse both degrade to an empty
/// collection; the next save overwrites whatever was there.
fn load_collection<S, T>(store: &S, key: &str) -> Result<Vec<T>, String>
where
    S: BlobStore,
    T: DeserializeOwned,
{
    let Some(raw) = store.read(key)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str(&raw) {
        Ok(items) => Ok(items),
        Err(e) => {
            log::warn!("discarding malformed {key} blob: {e}");
            Ok(Vec::new())
        }
    }
}

fn save_collection<S, T>(store: &mut S, key: &str, items: &[T]) -> Result<(), String>
where
    S: BlobStore,
    T: Serialize,
{
    let raw = serde_json::to_string(items)
        .map_err(|e| format!("Failed to serialize {key}: {e}"))?;
    store.write(key, &raw)
}
