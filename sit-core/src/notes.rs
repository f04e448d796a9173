//! The free-form notes page: an ordered list, newest first.

use anyhow::{Result, bail};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::Config;
use crate::paths::{NOTES_KEY, durable_path, mirror_path};
use crate::store::{Committed, RecordStore, StoreError};

/// A single note. Field names follow the stored JSON (`createdAt`, `updatedAt`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The notes page controller, owning the `notes_data` store.
#[derive(Debug)]
pub struct Notes {
    store: RecordStore<Vec<Note>>,
}

impl Notes {
    /// Opens the notes store. A load problem is returned as a warning,
    /// never an error; the page starts empty in that case.
    pub fn open(config: &Config) -> (Self, Option<StoreError>) {
        let (store, warning) = RecordStore::open(
            durable_path(&config.data_dir, NOTES_KEY),
            mirror_path(&config.session_dir, NOTES_KEY),
        );
        (Self { store }, warning)
    }

    /// All notes in stored order, newest first.
    pub fn all(&self) -> &[Note] {
        self.store.data()
    }

    /// Creates a note at the top of the list and persists.
    pub fn add(&mut self, title: &str, content: &str) -> Committed<Note> {
        let now = Utc::now();
        let note = Note {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            content: content.to_string(),
            created_at: now,
            updated_at: now,
        };
        let stored = note.clone();
        let committed = self.store.commit(move |notes| notes.insert(0, stored));
        Committed {
            value: note,
            warning: committed.warning,
        }
    }

    /// Edits the note matching the id prefix. `None` fields keep their
    /// value. `updatedAt` is bumped; `createdAt` never changes.
    pub fn update(
        &mut self,
        id: &str,
        title: Option<&str>,
        content: Option<&str>,
    ) -> Result<Committed<Note>> {
        let index = self.position(id)?;
        let title = title.map(str::to_string);
        let content = content.map(str::to_string);
        Ok(self.store.commit(move |notes| {
            let note = &mut notes[index];
            if let Some(title) = title {
                note.title = title;
            }
            if let Some(content) = content {
                note.content = content;
            }
            note.updated_at = Utc::now();
            note.clone()
        }))
    }

    /// Removes the note matching the id prefix and persists.
    pub fn remove(&mut self, id: &str) -> Result<Committed<Note>> {
        let index = self.position(id)?;
        Ok(self.store.commit(move |notes| notes.remove(index)))
    }

    /// Finds the unique note whose id starts with `id`.
    pub fn find(&self, id: &str) -> Result<&Note> {
        let index = self.position(id)?;
        Ok(&self.store.data()[index])
    }

    fn position(&self, id: &str) -> Result<usize> {
        let matches: Vec<usize> = self
            .store
            .data()
            .iter()
            .enumerate()
            .filter(|(_, note)| note.id.starts_with(id))
            .map(|(index, _)| index)
            .collect();
        match matches.as_slice() {
            [] => bail!("no note matches id '{id}'"),
            [index] => Ok(*index),
            _ => bail!("note id '{id}' is ambiguous ({} matches)", matches.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::mk_config;
    use tempfile::tempdir;

    fn mk_notes() -> (Notes, tempfile::TempDir) {
        let tmp = tempdir().unwrap();
        let (notes, warning) = Notes::open(&mk_config(tmp.path().to_path_buf()));
        assert!(warning.is_none());
        (notes, tmp)
    }

    #[test]
    fn add_prepends_newest_first() {
        let (mut notes, _tmp) = mk_notes();
        notes.add("first", "body one");
        notes.add("second", "body two");

        let all = notes.all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].title, "second");
        assert_eq!(all[1].title, "first");
        assert_ne!(all[0].id, all[1].id);
        assert_eq!(all[0].created_at, all[0].updated_at);
    }

    #[test]
    fn update_bumps_updated_at_and_keeps_created_at() {
        let (mut notes, _tmp) = mk_notes();
        let added = notes.add("draft", "old body").value;

        let edited = notes.update(&added.id, None, Some("new body")).unwrap().value;
        assert_eq!(edited.title, "draft");
        assert_eq!(edited.content, "new body");
        assert_eq!(edited.created_at, added.created_at);
        assert!(edited.updated_at >= added.updated_at);
    }

    #[test]
    fn update_unknown_id_is_an_error() {
        let (mut notes, _tmp) = mk_notes();
        notes.add("only", "body");
        assert!(notes.update("zzzz-not-there", Some("x"), None).is_err());
    }

    #[test]
    fn remove_takes_a_unique_prefix() {
        let (mut notes, _tmp) = mk_notes();
        let keep = notes.add("keep", "").value;
        let gone = notes.add("gone", "").value;

        let removed = notes.remove(&gone.id[..8]).unwrap().value;
        assert_eq!(removed.id, gone.id);
        assert_eq!(notes.all().len(), 1);
        assert_eq!(notes.all()[0].id, keep.id);
    }

    #[test]
    fn ambiguous_prefix_is_an_error() {
        let (mut notes, _tmp) = mk_notes();
        notes.add("one", "");
        notes.add("two", "");
        assert!(notes.remove("").is_err());
        assert_eq!(notes.all().len(), 2);
    }

    #[test]
    fn find_returns_the_matching_note() {
        let (mut notes, _tmp) = mk_notes();
        let added = notes.add("findable", "body").value;
        assert_eq!(notes.find(&added.id[..8]).unwrap().title, "findable");
        assert!(notes.find("zzzz-not-there").is_err());
    }

    #[test]
    fn reload_preserves_order_and_fields() {
        let tmp = tempdir().unwrap();
        let config = mk_config(tmp.path().to_path_buf());

        let (mut notes, _) = Notes::open(&config);
        notes.add("older", "kept");
        notes.add("newer", "also kept");
        drop(notes);

        let (reopened, warning) = Notes::open(&config);
        assert!(warning.is_none());
        let all = reopened.all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].title, "newer");
        assert_eq!(all[1].title, "older");
        assert_eq!(all[1].content, "kept");
    }
}
