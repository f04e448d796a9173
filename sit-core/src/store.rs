//! Whole-structure JSON persistence shared by every page module.
//!
//! A [`RecordStore`] owns one serde structure (a list of notes, a map of
//! date-keyed records) and two file locations: the durable store and a
//! session-scoped mirror. The entire structure is the unit of persistence;
//! there are no partial updates.

use anyhow::{Context, Result};
use log::warn;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A non-critical storage problem.
///
/// Both variants are warnings, never failures: a load problem leaves the
/// store empty but usable, a save problem leaves the in-memory structure
/// authoritative. Callers decide how loudly to report them.
#[derive(Debug)]
pub enum StoreError {
    Load { path: PathBuf, error: anyhow::Error },
    Save { path: PathBuf, error: anyhow::Error },
}

/// The outcome of a mutation: the closure's result plus at most one
/// persistence warning.
#[derive(Debug)]
pub struct Committed<T> {
    pub value: T,
    pub warning: Option<StoreError>,
}

/// A JSON-backed store for one whole structure.
#[derive(Debug)]
pub struct RecordStore<S> {
    data: S,
    durable_path: PathBuf,
    mirror_path: PathBuf,
}

impl<S> RecordStore<S>
where
    S: Serialize + DeserializeOwned + Default,
{
    /// Opens the store, reading the durable file if it exists.
    ///
    /// A missing file is the normal first run and yields an empty structure
    /// with no warning. An unreadable or undecodable file also yields an
    /// empty structure, plus a [`StoreError::Load`] so the caller can tell
    /// the user before they overwrite anything.
    pub fn open(durable_path: PathBuf, mirror_path: PathBuf) -> (Self, Option<StoreError>) {
        let (data, warning) = match Self::read_structure(&durable_path) {
            Ok(data) => (data, None),
            Err(error) => {
                warn!("loading {}: {error:#}", durable_path.display());
                (
                    S::default(),
                    Some(StoreError::Load {
                        path: durable_path.clone(),
                        error,
                    }),
                )
            }
        };
        (
            Self {
                data,
                durable_path,
                mirror_path,
            },
            warning,
        )
    }

    /// The current in-memory structure. Never touches the filesystem.
    pub fn data(&self) -> &S {
        &self.data
    }

    /// Applies `mutate` to the structure, then persists the whole structure
    /// to the durable file and to the session mirror, in that order.
    ///
    /// The first failed write short-circuits and becomes the single
    /// [`StoreError::Save`] in the returned [`Committed`]; the in-memory
    /// change is kept either way.
    pub fn commit<R>(&mut self, mutate: impl FnOnce(&mut S) -> R) -> Committed<R> {
        let value = mutate(&mut self.data);
        Committed {
            value,
            warning: self.persist(),
        }
    }

    fn read_structure(path: &Path) -> Result<S> {
        if !path.exists() {
            return Ok(S::default());
        }
        let s = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&s).with_context(|| format!("decoding {}", path.display()))
    }

    fn persist(&self) -> Option<StoreError> {
        for path in [&self.durable_path, &self.mirror_path] {
            if let Err(error) = Self::write_structure(path, &self.data) {
                warn!("saving {}: {error:#}", path.display());
                return Some(StoreError::Save {
                    path: path.clone(),
                    error,
                });
            }
        }
        None
    }

    fn write_structure(path: &Path, data: &S) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let s = serde_json::to_string(data).context("encoding store")?;
        fs::write(path, s).with_context(|| format!("writing {}", path.display()))
    }
}

/// Map-shaped stores: one record per `YYYY-MM-DD` day key.
impl<V> RecordStore<BTreeMap<String, V>>
where
    V: Serialize + DeserializeOwned,
{
    pub fn get(&self, key: &str) -> Option<&V> {
        self.data.get(key)
    }

    /// Inserts or replaces the record under `key` and persists.
    pub fn put(&mut self, key: String, value: V) -> Committed<()> {
        self.commit(|data| {
            data.insert(key, value);
        })
    }

    /// Removes the record under `key` and persists. Returns whether it existed.
    pub fn delete(&mut self, key: &str) -> Committed<bool> {
        self.commit(|data| data.remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::fs;
    use tempfile::tempdir;

    type MapStore = RecordStore<BTreeMap<String, String>>;

    fn mk_store(root: &Path) -> (MapStore, Option<StoreError>) {
        MapStore::open(
            root.join("data").join("test.json"),
            root.join("session").join("test_backup.json"),
        )
    }

    #[test]
    fn open_missing_file_starts_empty_without_warning() {
        let tmp = tempdir().unwrap();
        let (store, warning) = mk_store(tmp.path());
        assert!(warning.is_none());
        assert!(store.data().is_empty());
    }

    #[test]
    fn put_replaces_and_delete_removes() {
        let tmp = tempdir().unwrap();
        let (mut store, _) = mk_store(tmp.path());

        store.put("2025-08-19".into(), "first".into());
        store.put("2025-08-19".into(), "second".into());
        store.put("2025-08-20".into(), "other".into());
        assert_eq!(store.get("2025-08-19"), Some(&"second".to_string()));
        assert_eq!(store.data().len(), 2);

        assert!(store.delete("2025-08-19").value);
        assert!(!store.delete("2025-08-19").value);
        assert!(store.get("2025-08-19").is_none());
    }

    #[test]
    fn reopen_reads_back_what_was_committed() {
        let tmp = tempdir().unwrap();
        let (mut store, _) = mk_store(tmp.path());
        store.put("2025-08-19".into(), "persisted".into());
        drop(store);

        let (reopened, warning) = mk_store(tmp.path());
        assert!(warning.is_none());
        assert_eq!(reopened.get("2025-08-19"), Some(&"persisted".to_string()));
    }

    #[test]
    fn commit_mirrors_the_durable_file() {
        let tmp = tempdir().unwrap();
        let (mut store, _) = mk_store(tmp.path());
        let committed = store.put("2025-08-19".into(), "mirrored".into());
        assert!(committed.warning.is_none());

        let durable = fs::read_to_string(tmp.path().join("data").join("test.json")).unwrap();
        let mirror =
            fs::read_to_string(tmp.path().join("session").join("test_backup.json")).unwrap();
        assert_eq!(durable, mirror);
        assert!(durable.contains("mirrored"));
    }

    #[test]
    fn mirror_is_never_read_on_open() {
        let tmp = tempdir().unwrap();
        let mirror = tmp.path().join("session").join("test_backup.json");
        fs::create_dir_all(mirror.parent().unwrap()).unwrap();
        fs::write(&mirror, "{ not json").unwrap();

        let (store, warning) = mk_store(tmp.path());
        assert!(warning.is_none());
        assert!(store.data().is_empty());
    }

    #[test]
    fn malformed_file_loads_empty_with_warning() {
        let tmp = tempdir().unwrap();
        let durable = tmp.path().join("data").join("test.json");
        fs::create_dir_all(durable.parent().unwrap()).unwrap();
        fs::write(&durable, "{ definitely not json").unwrap();

        let (store, warning) = mk_store(tmp.path());
        assert!(store.data().is_empty());
        assert!(matches!(warning, Some(StoreError::Load { .. })));
    }

    #[test]
    fn wrong_shape_loads_empty_with_warning() {
        let tmp = tempdir().unwrap();
        let durable = tmp.path().join("data").join("test.json");
        fs::create_dir_all(durable.parent().unwrap()).unwrap();
        fs::write(&durable, "[1, 2, 3]").unwrap();

        let (store, warning) = mk_store(tmp.path());
        assert!(store.data().is_empty());
        assert!(matches!(warning, Some(StoreError::Load { .. })));
    }

    #[test]
    fn failed_write_keeps_the_memory_state() {
        let tmp = tempdir().unwrap();
        // A directory where the durable file should be makes every write fail.
        fs::create_dir_all(tmp.path().join("data").join("test.json")).unwrap();

        let (mut store, _) = mk_store(tmp.path());
        let committed = store.put("2025-08-19".into(), "kept".into());
        assert!(matches!(committed.warning, Some(StoreError::Save { .. })));
        assert_eq!(store.get("2025-08-19"), Some(&"kept".to_string()));
    }
}
