//! The entry store: in-memory diary entries mirrored to one durable slot

use crate::application::outcome::{Outcome, Rejection};
use crate::domain::{Conditions, Descriptor, DiaryEntry, EntryId};
use crate::error::{DiaryError, Result};
use crate::infrastructure::SlotStore;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Holds the diary entries and writes the whole collection back to its
/// slot after every applied mutation.
///
/// Built once per session and handed to the presentation layer. Rejected
/// mutations never write; a failed write leaves the previous collection
/// current.
pub struct EntryStore<S: SlotStore> {
    slots: S,
    key: String,
    entries: Vec<DiaryEntry>,
}

impl<S: SlotStore> EntryStore<S> {
    /// Open the store, loading the slot once.
    /// A missing, unreadable or malformed slot starts an empty diary.
    pub fn open(slots: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let entries = match slots.read(&key) {
            Ok(Some(contents)) => parse_entries(&key, &contents),
            Ok(None) => {
                debug!(slot = %key, "slot empty, starting new diary");
                Vec::new()
            }
            Err(e) => {
                warn!(slot = %key, error = %e, "cannot read slot, starting empty");
                Vec::new()
            }
        };

        debug!(slot = %key, count = entries.len(), "loaded entries");
        EntryStore {
            slots,
            key,
            entries,
        }
    }

    pub fn slot_key(&self) -> &str {
        &self.key
    }

    /// Entries in storage order
    pub fn entries(&self) -> &[DiaryEntry] {
        &self.entries
    }

    /// Entries newest first; equal dates keep storage order
    pub fn entries_by_date_desc(&self) -> Vec<&DiaryEntry> {
        let mut ordered: Vec<&DiaryEntry> = self.entries.iter().collect();
        ordered.sort_by(|a, b| b.date().cmp(&a.date()));
        ordered
    }

    pub fn get(&self, id: &EntryId) -> Option<&DiaryEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the one entry whose id is `prefix` or starts with it
    pub fn resolve(&self, prefix: &str) -> Result<&DiaryEntry> {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return Err(DiaryError::EntryNotFound(prefix.to_string()));
        }

        if let Some(entry) = self.entries.iter().find(|e| e.id().as_str() == prefix) {
            return Ok(entry);
        }

        let matches: Vec<&DiaryEntry> = self
            .entries
            .iter()
            .filter(|e| e.id().as_str().starts_with(prefix))
            .collect();

        match matches.as_slice() {
            [] => Err(DiaryError::EntryNotFound(prefix.to_string())),
            [entry] => Ok(entry),
            _ => Err(DiaryError::AmbiguousId {
                prefix: prefix.to_string(),
                count: matches.len(),
            }),
        }
    }

    /// Record a new entry. Requires non-blank food and a feeling.
    pub fn add_entry(
        &mut self,
        food: &str,
        feeling: Option<Descriptor>,
        conditions: impl Into<Conditions>,
    ) -> Result<Outcome<DiaryEntry>> {
        if food.trim().is_empty() {
            return Ok(Outcome::Rejected(Rejection::EmptyFood));
        }
        let Some(feeling) = feeling else {
            return Ok(Outcome::Rejected(Rejection::MissingFeeling));
        };

        let entry = DiaryEntry::create(
            self.fresh_id(),
            food.to_string(),
            feeling,
            conditions.into(),
        );

        let mut next = self.entries.clone();
        next.push(entry.clone());
        self.commit(next)?;

        debug!(id = %entry.id(), food = entry.food(), "added entry");
        Ok(Outcome::Applied(entry))
    }

    /// Replace food, feeling and conditions of an existing entry
    pub fn update_entry(
        &mut self,
        id: &EntryId,
        food: &str,
        feeling: Option<Descriptor>,
        conditions: impl Into<Conditions>,
    ) -> Result<Outcome<DiaryEntry>> {
        let Some(index) = self.position(id) else {
            return Ok(Outcome::Rejected(Rejection::UnknownId(id.clone())));
        };

        let mut next = self.entries.clone();
        next[index].revise(food.to_string(), feeling, conditions.into());
        let updated = next[index].clone();
        self.commit(next)?;

        debug!(id = %id, "updated entry");
        Ok(Outcome::Applied(updated))
    }

    /// Delete an entry, returning it
    pub fn remove_entry(&mut self, id: &EntryId) -> Result<Outcome<DiaryEntry>> {
        let Some(index) = self.position(id) else {
            return Ok(Outcome::Rejected(Rejection::UnknownId(id.clone())));
        };

        let mut next = self.entries.clone();
        let removed = next.remove(index);
        self.commit(next)?;

        debug!(id = %id, "removed entry");
        Ok(Outcome::Applied(removed))
    }

    fn position(&self, id: &EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id() == id)
    }

    fn fresh_id(&self) -> EntryId {
        loop {
            let id = EntryId::generate();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    /// Write `next` to the slot, then make it the current collection
    fn commit(&mut self, next: Vec<DiaryEntry>) -> Result<()> {
        let contents = serde_json::to_string_pretty(&next)?;
        self.slots.write(&self.key, &contents)?;
        debug!(slot = %self.key, count = next.len(), "persisted entries");
        self.entries = next;
        Ok(())
    }
}

fn parse_entries(key: &str, contents: &str) -> Vec<DiaryEntry> {
    let parsed: Vec<DiaryEntry> = match serde_json::from_str(contents) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(slot = %key, error = %e, "slot is not a valid entry list, starting empty");
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    parsed
        .into_iter()
        .filter(|entry| {
            let fresh = seen.insert(entry.id().clone());
            if !fresh {
                warn!(slot = %key, id = %entry.id(), "dropping entry with duplicate id");
            }
            fresh
        })
        .collect()
}
