//! Named storage slots holding one text blob each.

use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use parking_lot::Mutex;

/// Key-value slot backend. A slot either holds text or is absent.
pub trait SlotStorage: Send + Sync {
    /// Read the slot. Absent slots return `Ok(None)`.
    fn read(&self, slot: &str) -> io::Result<Option<String>>;

    /// Replace the slot content.
    fn write(&self, slot: &str, contents: &str) -> io::Result<()>;

    /// Delete the slot. Deleting an absent slot is not an error.
    fn remove(&self, slot: &str) -> io::Result<()>;
}

/// One `<slot>.json` file per slot inside a directory.
#[derive(Debug, Clone)]
pub struct FileSlotStorage {
    dir: PathBuf,
}

impl FileSlotStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Platform data directory, e.g. `~/.local/share/resume-bandit`.
    /// Falls back to the current directory if data_dir is unavailable.
    pub fn default_dir() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("resume-bandit")
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{}.json", slot))
    }
}

impl SlotStorage for FileSlotStorage {
    fn read(&self, slot: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.slot_path(slot)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn write(&self, slot: &str, contents: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(self.slot_path(slot))?;

        // Truncate only once the lock is held so a concurrent writer never
        // sees a half-cleared file.
        FileExt::lock_exclusive(&file)?;
        let result = file
            .set_len(0)
            .and_then(|_| file.write_all(contents.as_bytes()))
            .and_then(|_| file.flush());
        let _ = FileExt::unlock(&file);
        result
    }

    fn remove(&self, slot: &str) -> io::Result<()> {
        match fs::remove_file(self.slot_path(slot)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err),
        }
    }
}

/// Process-local slots, used when nothing should touch the disk.
#[derive(Debug, Default)]
pub struct MemorySlotStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemorySlotStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStorage for MemorySlotStorage {
    fn read(&self, slot: &str) -> io::Result<Option<String>> {
        Ok(self.slots.lock().get(slot).cloned())
    }

    fn write(&self, slot: &str, contents: &str) -> io::Result<()> {
        self.slots
            .lock()
            .insert(slot.to_string(), contents.to_string());
        Ok(())
    }

    fn remove(&self, slot: &str) -> io::Result<()> {
        self.slots.lock().remove(slot);
        Ok(())
    }
}
