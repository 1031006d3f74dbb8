pub mod blob;
pub mod collections;

pub use blob::{BlobStore, FileStore, MemoryStore};
pub use collections::{
    load_habits, load_records, save_habits, save_records, HABITS_KEY, RECORDS_KEY,
};
