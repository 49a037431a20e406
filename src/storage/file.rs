use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::NamedTempFile;
use crate::errors::StorageResult;
use super::KeyValueStore;

/// A profile store kept as a single JSON object on disk.
///
/// Every mutation atomically replaces the whole file. A file that cannot be
/// parsed is read as an empty profile and overwritten by the next write.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> StorageResult<HashMap<String, String>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                tracing::warn!(
                    "Profile store {} is corrupted, treating as empty: {}",
                    self.path.display(),
                    e
                );
                Ok(HashMap::new())
            }
        }
    }

    // Write a sibling temp file and rename it over the profile, so a crash
    // mid-write leaves either the old or the new content on disk
    fn save(&self, entries: &HashMap<String, String>) -> StorageResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, entries)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("profile.json"));
        assert_eq!(store.get("currentUser").unwrap(), None);
        store.remove("currentUser").unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn test_persists_across_instances() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("profile.json");

        let store = FileStore::new(&path);
        store.set("users", r#"[{"email":"a@b.c"}]"#).unwrap();
        store.set("currentUser", r#"{"email":"a@b.c"}"#).unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(
            reopened.get("users").unwrap().as_deref(),
            Some(r#"[{"email":"a@b.c"}]"#)
        );

        reopened.remove("currentUser").unwrap();
        assert_eq!(store.get("currentUser").unwrap(), None);
        assert!(store.get("users").unwrap().is_some());
    }

    #[test]
    fn test_writes_replace_file_atomically() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("profile.json");
        let store = FileStore::new(&path);

        for i in 0..5 {
            store.set("users", &format!("[{}]", i)).unwrap();
        }
        store.set("currentUser", "{}").unwrap();
        store.remove("currentUser").unwrap();

        // Only the profile itself is left behind, and it is complete JSON
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("profile.json")]);

        let saved: HashMap<String, String> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved.get("users").map(String::as_str), Some("[4]"));
        assert!(!saved.contains_key("currentUser"));
    }

    #[test]
    fn test_corrupted_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("profile.json");
        fs::write(&path, "{not json").unwrap();

        let store = FileStore::new(&path);
        assert_eq!(store.get("users").unwrap(), None);

        // Next write replaces the corrupted content
        store.set("users", "[]").unwrap();
        assert_eq!(store.get("users").unwrap().as_deref(), Some("[]"));
    }
}
