use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Whole-blob key-value storage. Blobs are always read and written wholesale;
/// there are no partial updates. This is the seam that keeps the habit
/// operations and calculators testable without a real data directory.
pub trait BlobStore: Send {
    fn read(&self, key: &str) -> Result<Option<String>, String>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), String>;
}

/// Blob store backed by one `<key>.json` file per blob under the app data
/// directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> std::io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        log::info!("blob store at {}", root.display());
        Ok(Self { root })
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl BlobStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, String> {
        let path = self.blob_path(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| format!("Failed to read blob {key}: {e}"))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), String> {
        fs::write(self.blob_path(key), value)
            .map_err(|e| format!("Failed to write blob {key}: {e}"))
    }
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
}

impl BlobStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.blobs.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), String> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
