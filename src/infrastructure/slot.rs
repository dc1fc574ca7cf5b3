//! Durable key-value slots

use crate::error::{DiaryError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Synchronous key-value storage of whole text values.
pub trait SlotStore {
    /// Read a slot. Returns Ok(None) if it has never been written.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the slot's contents entirely.
    /// MUST be atomic: readers see either the old or the new value.
    fn write(&self, key: &str, contents: &str) -> Result<()>;
}

/// Slot keys are non-empty and made of ASCII letters, digits, `-` or `_`
pub fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(DiaryError::InvalidSlotKey(key.to_string()))
    }
}

/// Slots stored as `<root>/<key>.json` files
#[derive(Debug, Clone)]
pub struct FileSlotStore {
    root: PathBuf,
}

impl FileSlotStore {
    pub fn new(root: PathBuf) -> Self {
        FileSlotStore { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing a slot
    pub fn slot_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl SlotStore for FileSlotStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DiaryError::Io(e)),
        }
    }

    fn write(&self, key: &str, contents: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }

        // Temp file in the same directory so the rename stays on one filesystem
        let tmp_path = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        let written = fs::write(&tmp_path, contents).and_then(|_| fs::rename(&tmp_path, &path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(DiaryError::Io(e));
        }

        Ok(())
    }
}

/// In-memory slots for tests and embedding.
///
/// Uses `RefCell` since the store is single-threaded, so the trait can take
/// `&self` for writes.
#[derive(Debug, Default)]
pub struct MemorySlotStore {
    slots: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one slot
    pub fn with_slot(key: &str, contents: &str) -> Self {
        let store = Self::new();
        store
            .slots
            .borrow_mut()
            .insert(key.to_string(), contents.to_string());
        store
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Number of slots written so far
    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }
}

impl SlotStore for MemorySlotStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, contents: &str) -> Result<()> {
        validate_key(key)?;
        if *self.simulate_write_error.borrow() {
            return Err(DiaryError::Io(std::io::Error::other(
                "simulated write error",
            )));
        }
        self.slots
            .borrow_mut()
            .insert(key.to_string(), contents.to_string());
        Ok(())
    }
}

impl<S: SlotStore + ?Sized> SlotStore for &S {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, contents: &str) -> Result<()> {
        (**self).write(key, contents)
    }
}
