use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::models::habit::{Habit, HabitDraft, HabitUpdate};
use crate::storage::{load_habits, load_records, save_habits, save_records, BlobStore, FileStore};

#[tauri::command]
pub async fn list_habits(
    store: tauri::State<'_, Arc<Mutex<FileStore>>>,
) -> Result<Vec<Habit>, String> {
    let guard = store.lock().map_err(|_| "Store lock error".to_string())?;
    load_habits(&*guard)
}

#[tauri::command]
pub async fn create_habit(
    draft: HabitDraft,
    store: tauri::State<'_, Arc<Mutex<FileStore>>>,
) -> Result<Habit, String> {
    let mut guard = store.lock().map_err(|_| "Store lock error".to_string())?;
    create_habit_internal(&mut *guard, draft)
}

#[tauri::command]
pub async fn update_habit(
    id: String,
    update: HabitUpdate,
    store: tauri::State<'_, Arc<Mutex<FileStore>>>,
) -> Result<Habit, String> {
    let mut guard = store.lock().map_err(|_| "Store lock error".to_string())?;
    update_habit_internal(&mut *guard, &id, update)
}

#[tauri::command]
pub async fn delete_habit(
    id: String,
    store: tauri::State<'_, Arc<Mutex<FileStore>>>,
) -> Result<(), String> {
    let mut guard = store.lock().map_err(|_| "Store lock error".to_string())?;
    delete_habit_internal(&mut *guard, &id)
}

pub fn create_habit_internal<S: BlobStore>(
    store: &mut S,
    draft: HabitDraft,
) -> Result<Habit, String> {
    let habit = Habit {
        id: Uuid::new_v4().to_string(),
        name: draft.name,
        description: draft.description,
        created_at: chrono::Utc::now().to_rfc3339(),
        color: draft.color,
        icon: draft.icon,
    };

    let mut habits = load_habits(store)?;
    habits.push(habit.clone());
    save_habits(store, &habits)?;

    Ok(habit)
}

pub fn update_habit_internal<S: BlobStore>(
    store: &mut S,
    id: &str,
    update: HabitUpdate,
) -> Result<Habit, String> {
    let mut habits = load_habits(store)?;
    let habit = habits
        .iter_mut()
        .find(|h| h.id == id)
        .ok_or_else(|| format!("Unknown habit: {id}"))?;

    if let Some(name) = update.name {
        habit.name = name;
    }
    if let Some(description) = update.description {
        habit.description = Some(description);
    }
    if let Some(color) = update.color {
        habit.color = color;
    }
    if let Some(icon) = update.icon {
        habit.icon = icon;
    }

    let updated = habit.clone();
    save_habits(store, &habits)?;

    Ok(updated)
}

/// Removes the habit and every record that points at it; the record blob has
/// no database keeping referential integrity for us.
pub fn delete_habit_internal<S: BlobStore>(store: &mut S, id: &str) -> Result<(), String> {
    let mut habits = load_habits(store)?;
    habits.retain(|h| h.id != id);
    save_habits(store, &habits)?;

    let mut records = load_records(store)?;
    records.retain(|r| r.habit_id != id);
    save_records(store, &records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::CompletionRecord;
    use crate::storage::MemoryStore;

    fn draft(name: &str) -> HabitDraft {
        HabitDraft {
            name: name.to_string(),
            description: None,
            color: "bg-emerald-500".to_string(),
            icon: "🏃".to_string(),
        }
    }

    #[test]
    fn create_assigns_id_and_creation_time() {
        let mut store = MemoryStore::default();
        let habit = create_habit_internal(&mut store, draft("Run")).expect("create");

        assert!(!habit.id.is_empty());
        assert!(!habit.created_at.is_empty());
        assert_eq!(habit.name, "Run");

        let habits = load_habits(&store).expect("load");
        assert_eq!(habits.len(), 1);
        assert_eq!(habits[0].id, habit.id);
    }

    #[test]
    fn update_merges_only_the_given_fields() {
        let mut store = MemoryStore::default();
        let habit = create_habit_internal(&mut store, draft("Run")).expect("create");

        let updated = update_habit_internal(
            &mut store,
            &habit.id,
            HabitUpdate {
                name: Some("Morning run".to_string()),
                ..HabitUpdate::default()
            },
        )
        .expect("update");

        assert_eq!(updated.name, "Morning run");
        assert_eq!(updated.color, habit.color);
        assert_eq!(updated.created_at, habit.created_at);
    }

    #[test]
    fn update_of_unknown_habit_fails() {
        let mut store = MemoryStore::default();
        let err = update_habit_internal(&mut store, "missing", HabitUpdate::default())
            .expect_err("should fail");
        assert!(err.contains("missing"));
    }

    #[test]
    fn delete_cascades_to_records() {
        let mut store = MemoryStore::default();
        let kept = create_habit_internal(&mut store, draft("Run")).expect("create");
        let dropped = create_habit_internal(&mut store, draft("Read")).expect("create");

        let records = vec![
            CompletionRecord {
                habit_id: kept.id.clone(),
                date: "2025-06-15".to_string(),
                completed: true,
            },
            CompletionRecord {
                habit_id: dropped.id.clone(),
                date: "2025-06-15".to_string(),
                completed: true,
            },
        ];
        save_records(&mut store, &records).expect("seed records");

        delete_habit_internal(&mut store, &dropped.id).expect("delete");

        let habits = load_habits(&store).expect("load habits");
        assert_eq!(habits.len(), 1);
        assert_eq!(habits[0].id, kept.id);

        let remaining = load_records(&store).expect("load records");
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].habit_id, kept.id);
    }
}
