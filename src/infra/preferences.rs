use std::{
    collections::BTreeMap,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::application::theme::{PreferenceError, PreferenceStore};

#[derive(Clone, Debug, Default)]
pub struct MemoryPreferenceStore {
    entries: BTreeMap<String, String>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences kept as a flat JSON object on disk.
///
/// Every write replaces the file through a temporary sibling and a rename, so
/// readers never observe a half-written object.
#[derive(Clone, Debug)]
pub struct JsonFilePreferenceStore {
    path: PathBuf,
}

impl JsonFilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(PreferenceError::from_persistence(err)),
        };

        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&raw).map_err(|err| PreferenceError::Corrupt {
            message: format!("{}: {err}", self.path.display()),
        })
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), PreferenceError> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(PreferenceError::from_persistence)?;

        let body =
            serde_json::to_string_pretty(entries).map_err(PreferenceError::from_persistence)?;
        let mut file = NamedTempFile::new_in(parent).map_err(PreferenceError::from_persistence)?;
        file.write_all(body.as_bytes())
            .map_err(PreferenceError::from_persistence)?;
        file.persist(&self.path)
            .map_err(|err| PreferenceError::from_persistence(err.error))?;
        Ok(())
    }
}

impl PreferenceStore for JsonFilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::theme::ThemeService;
    use crate::domain::theme::Theme;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFilePreferenceStore::new(dir.path().join("prefs.json"));

        assert_eq!(store.get("theme").expect("get"), None);
    }

    #[test]
    fn toggled_theme_survives_a_new_store() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("prefs.json");

        let mut service = ThemeService::new(JsonFilePreferenceStore::new(&path));
        assert_eq!(service.toggle().expect("toggle"), Theme::Dark);

        let reopened = ThemeService::new(JsonFilePreferenceStore::new(&path));
        assert_eq!(reopened.current().expect("theme"), Theme::Dark);

        let raw = fs::read_to_string(&path).expect("read prefs");
        assert!(raw.contains("\"theme\": \"dark\""));
    }

    #[test]
    fn set_keeps_unrelated_keys() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{"font": "serif"}"#).expect("seed prefs");

        let mut store = JsonFilePreferenceStore::new(&path);
        store.set("theme", "light").expect("set");

        assert_eq!(store.get("font").expect("get").as_deref(), Some("serif"));
        assert_eq!(store.get("theme").expect("get").as_deref(), Some("light"));
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json").expect("seed prefs");

        let store = JsonFilePreferenceStore::new(&path);
        assert!(matches!(
            store.get("theme"),
            Err(PreferenceError::Corrupt { .. })
        ));
    }
}
