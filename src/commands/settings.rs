use std::sync::{Arc, Mutex};

use serde_json::{json, Map, Value};

use crate::storage::{BlobStore, FileStore};

const SETTINGS_SCHEMA_VERSION: i64 = 1;
pub const SETTINGS_KEY: &str = "settings";

#[tauri::command]
pub async fn get_settings(
    store: tauri::State<'_, Arc<Mutex<FileStore>>>,
) -> Result<Value, String> {
    let guard = store.lock().map_err(|_| "Store lock error".to_string())?;
    load_settings_internal(&*guard)
}

#[tauri::command]
pub async fn save_settings(
    settings: Value,
    store: tauri::State<'_, Arc<Mutex<FileStore>>>,
) -> Result<Value, String> {
    let mut guard = store.lock().map_err(|_| "Store lock error".to_string())?;
    save_settings_internal(&mut *guard, settings)
}

pub fn load_settings_internal<S: BlobStore>(store: &S) -> Result<Value, String> {
    let original = match store.read(SETTINGS_KEY)? {
        Some(raw) => serde_json::from_str::<Value>(&raw).unwrap_or_else(|_| json!({})),
        None => json!({}),
    };
    Ok(migrate_settings(original))
}

/// Partial updates deep-merge into the stored settings, then the result is
/// migrated and sanitized before being written back.
pub fn save_settings_internal<S: BlobStore>(
    store: &mut S,
    settings: Value,
) -> Result<Value, String> {
    let mut merged = load_settings_internal(store)?;
    merge_settings(&mut merged, &settings);

    let migrated = migrate_settings(merged);
    let raw = serde_json::to_string(&migrated)
        .map_err(|e| format!("Failed to serialize settings: {e}"))?;
    store.write(SETTINGS_KEY, &raw)?;

    Ok(migrated)
}

fn default_settings() -> Value {
    json!({
        "schema_version": SETTINGS_SCHEMA_VERSION,
        "theme": "system",
        "weekStartsOn": "monday",
        "remindersEnabled": false,
        "reminderHour": 20
    })
}

fn migrate_settings(input: Value) -> Value {
    let mut out = match input {
        Value::Object(map) => Value::Object(map),
        _ => Value::Object(Map::new()),
    };

    deep_merge_defaults(&mut out, &default_settings());
    sanitize_settings(&mut out);

    if let Some(obj) = out.as_object_mut() {
        obj.insert("schema_version".to_string(), json!(SETTINGS_SCHEMA_VERSION));
    }

    out
}

fn deep_merge_defaults(target: &mut Value, defaults: &Value) {
    let (Some(target_obj), Some(default_obj)) = (target.as_object_mut(), defaults.as_object())
    else {
        return;
    };

    for (key, default_value) in default_obj {
        match target_obj.get_mut(key) {
            Some(existing) => {
                if existing.is_object() && default_value.is_object() {
                    deep_merge_defaults(existing, default_value);
                }
            }
            None => {
                target_obj.insert(key.clone(), default_value.clone());
            }
        }
    }
}

fn merge_settings(target: &mut Value, incoming: &Value) {
    match (target, incoming) {
        (Value::Object(target_obj), Value::Object(incoming_obj)) => {
            for (key, value) in incoming_obj {
                if let Some(existing) = target_obj.get_mut(key) {
                    merge_settings(existing, value);
                } else {
                    target_obj.insert(key.clone(), value.clone());
                }
            }
        }
        (target_slot, incoming_value) => {
            *target_slot = incoming_value.clone();
        }
    }
}

fn sanitize_settings(settings: &mut Value) {
    let Some(obj) = settings.as_object_mut() else {
        return;
    };

    sanitize_enum(obj, "theme", &["system", "light", "dark"], "system");
    sanitize_enum(obj, "weekStartsOn", &["monday", "sunday"], "monday");
    ensure_bool(obj, "remindersEnabled", false);
    clamp_u64(obj, "reminderHour", 0, 23, 20);
}

fn clamp_u64(map: &mut Map<String, Value>, key: &str, min: u64, max: u64, default: u64) {
    let raw = map.get(key).and_then(Value::as_u64).unwrap_or(default);
    map.insert(key.to_string(), json!(raw.clamp(min, max)));
}

fn sanitize_enum(map: &mut Map<String, Value>, key: &str, allowed: &[&str], default: &str) {
    let valid = map
        .get(key)
        .and_then(Value::as_str)
        .filter(|value| allowed.contains(value))
        .unwrap_or(default);
    map.insert(key.to_string(), json!(valid));
}

fn ensure_bool(map: &mut Map<String, Value>, key: &str, default: bool) {
    let value = map.get(key).and_then(Value::as_bool).unwrap_or(default);
    map.insert(key.to_string(), json!(value));
}
