use anyhow::Result;
use directories::ProjectDirs;
use fs2::FileExt;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::env;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

// External persistence keys. The key is the contract; filenames are an
// implementation detail of the disk store.
pub const SAVED_RECIPES_KEY: &str = "saved_recipes_snap";
pub const SHOPPING_LISTS_KEY: &str = "shopping_lists";
pub const SAVED_MEAL_PLANS_KEY: &str = "saved_meal_plans";

/// Key-value persistence boundary. The parsing/categorizing core never
/// touches this; only explicit save/load actions do.
pub trait KeyValue {
    fn get_raw(&self, key: &str) -> Result<Option<String>>;
    fn set_raw(&self, key: &str, value: &str) -> Result<()>;

    /// Typed read. A corrupt record logs and reads as absent rather than
    /// failing the caller (same stance as ignoring a corrupt local file).
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get_raw(key)? {
            Some(json) => match serde_json::from_str(&json) {
                Ok(value) => Ok(Some(value)),
                Err(e) => {
                    log::warn!("discarding corrupt record under key '{}': {}", key, e);
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        self.set_raw(key, &serde_json::to_string_pretty(value)?)
    }

    /// Load-modify-save convenience. There is exactly one logical writer
    /// (the invoking UI), so this does not need to be transactional across
    /// processes.
    fn modify<T, F>(&self, key: &str, f: F) -> Result<()>
    where
        T: Serialize + DeserializeOwned + Default,
        F: FnOnce(&mut T),
    {
        let mut value: T = self.get(key)?.unwrap_or_default();
        f(&mut value);
        self.set(key, &value)
    }
}

/// JSON-file store in the platform data dir, one file per key.
pub struct DiskStore;

impl DiskStore {
    fn data_dir() -> Option<PathBuf> {
        // ISOLATION: Check env var first
        if let Ok(test_dir) = env::var("STAGKITCHEN_TEST_DIR") {
            let path = PathBuf::from(test_dir);
            if !path.exists() {
                let _ = fs::create_dir_all(&path);
            }
            return Some(path);
        }

        if let Some(proj) = ProjectDirs::from("com", "stagkitchen", "stagkitchen") {
            let data_dir = proj.data_dir();
            if !data_dir.exists() {
                let _ = fs::create_dir_all(data_dir);
            }
            return Some(data_dir.to_path_buf());
        }
        None
    }

    fn key_path(key: &str) -> Option<PathBuf> {
        let dir = Self::data_dir()?;
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        Some(dir.join(format!("store_{:x}.json", hasher.finish())))
    }

    /// Atomic write: Write to .tmp file then rename
    pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }

    /// Runs `f` while holding an exclusive advisory lock next to `path`.
    fn with_lock<T, F>(path: &Path, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let lock_path = path.with_extension("lock");
        let lock_file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)?;
        lock_file.lock_exclusive()?;
        let result = f();
        let _ = fs2::FileExt::unlock(&lock_file);
        result
    }
}

impl KeyValue for DiskStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>> {
        if let Some(path) = Self::key_path(key)
            && path.exists()
        {
            return Self::with_lock(&path, || Ok(Some(fs::read_to_string(&path)?)));
        }
        Ok(None)
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<()> {
        if let Some(path) = Self::key_path(key) {
            Self::with_lock(&path, || Self::atomic_write(&path, value))?;
        }
        Ok(())
    }
}

/// In-memory store. Lets the library layer run without a filesystem.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValue for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().expect("store mutex poisoned");
        Ok(entries.get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().expect("store mutex poisoned");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
