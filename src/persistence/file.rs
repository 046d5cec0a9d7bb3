//! JSON file score store
//!
//! Layout on disk is a flat object of integers, e.g. `{"highestScore": 12}`.
//! Writes go to `<path>.tmp` first and are renamed over the save, so a crash
//! mid-write leaves the previous value intact.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::ScoreStore;

/// Score store persisted to a JSON file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, u32>,
}

impl FileStore {
    /// Open a store at `path`. A missing or corrupt file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match read_values(&path) {
            Ok(values) => values,
            Err(e) => {
                log::warn!("Score file unavailable, starting empty: {:#}", e);
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.values).context("encoding scores")?;
        let tmp = self.path.with_extension("tmp");
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
        }
        fs::write(&tmp, json).with_context(|| format!("writing {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("replacing {}", self.path.display()))?;
        Ok(())
    }
}

fn read_values(path: &Path) -> Result<BTreeMap<String, u32>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("parsing {}", path.display()))
}

impl ScoreStore for FileStore {
    fn get(&self, key: &str) -> Option<u32> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: u32) {
        self.values.insert(key.to_string(), value);
        if let Err(e) = self.flush() {
            log::warn!("Score not saved: {:#}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::HIGH_SCORE_KEY;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("brick-breaker-{}-{}", std::process::id(), name))
            .join("scores.json")
    }

    #[test]
    fn test_missing_file_is_empty() {
        let store = FileStore::open(scratch("missing"));
        assert_eq!(store.get(HIGH_SCORE_KEY), None);
    }

    #[test]
    fn test_value_survives_reopen() {
        let path = scratch("reopen");
        let mut store = FileStore::open(&path);
        store.set(HIGH_SCORE_KEY, 42);

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get(HIGH_SCORE_KEY), Some(42));
        assert!(!path.with_extension("tmp").exists());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_corrupt_file_degrades_to_empty() {
        let path = scratch("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();

        let store = FileStore::open(&path);
        assert_eq!(store.get(HIGH_SCORE_KEY), None);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
