pub mod analysis;
pub mod commands;
pub mod models;
pub mod storage;

use std::sync::{Arc, Mutex};

use commands::{
    habits::{create_habit, delete_habit, list_habits, update_habit},
    records::{get_today_records, list_records, toggle_completion},
    settings::{get_settings, save_settings},
    stats::{get_daily_history, get_habit_stats, get_overview_stats},
};
use storage::FileStore;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let data_dir = app.path().app_data_dir()?;
            let store = FileStore::new(data_dir)?;
            app.manage(Arc::new(Mutex::new(store)));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            list_habits,
            create_habit,
            update_habit,
            delete_habit,
            list_records,
            toggle_completion,
            get_today_records,
            get_habit_stats,
            get_overview_stats,
            get_daily_history,
            get_settings,
            save_settings,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
