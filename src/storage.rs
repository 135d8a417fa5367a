use crate::model::Event;
use anyhow::Result;
use directories::ProjectDirs;
use fs2::FileExt;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const STORE_FILE_NAME: &str = "events.json";

pub struct LocalStorage;

impl LocalStorage {
    pub fn get_path() -> Option<PathBuf> {
        // ISOLATION: Check env var first
        if let Ok(test_dir) = env::var("DESDE_TEST_DIR") {
            let path = PathBuf::from(test_dir);
            if !path.exists() {
                let _ = fs::create_dir_all(&path);
            }
            return Some(path.join(STORE_FILE_NAME));
        }

        if let Some(proj) = ProjectDirs::from("com", "desde", "desde") {
            let data_dir = proj.data_dir();
            if !data_dir.exists() {
                let _ = fs::create_dir_all(data_dir);
            }
            return Some(data_dir.join(STORE_FILE_NAME));
        }
        None
    }

    /// Atomic write: Write to .tmp file then rename
    pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }

    /// Run `f` while holding an exclusive advisory lock on a `.lock`
    /// sibling of `path`.
    pub fn with_lock<T, F>(path: &Path, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let lock_path = path.with_extension("lock");
        let lock_file = fs::File::create(&lock_path)?;
        lock_file.lock_exclusive()?;
        let result = f();
        let _ = FileExt::unlock(&lock_file);
        result
    }

    /// Overwrite the stored collection wholesale, taking the file lock.
    pub fn save(events: &[Event]) -> Result<()> {
        if let Some(path) = Self::get_path() {
            Self::with_lock(&path, || {
                let json = serde_json::to_string_pretty(events)?;
                Self::atomic_write(&path, json)
            })?;
        }
        Ok(())
    }

    /// Load the stored collection. An absent file is an empty collection;
    /// a file that does not parse is an error, not an empty result.
    pub fn load() -> Result<Vec<Event>> {
        if let Some(path) = Self::get_path()
            && path.exists()
        {
            let json = fs::read_to_string(path)?;
            return Ok(serde_json::from_str::<Vec<Event>>(&json)?);
        }
        Ok(vec![])
    }
}
