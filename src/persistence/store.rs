//! Save/restore of unsaved form input.

use std::collections::HashMap;
use std::io;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use super::storage::SlotStorage;
use crate::profile::FormValues;

/// Errors from the snapshot slot.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to access snapshot slot '{slot}': {source}")]
    Io {
        slot: String,
        #[source]
        source: io::Error,
    },

    #[error("Malformed snapshot in slot '{slot}': {source}")]
    Parse {
        slot: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Last-entered raw value per field name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct FormSnapshot(pub HashMap<String, String>);

/// Scalars are restored as their text form; `null` becomes an empty field.
/// Arrays and objects are dropped, the rest of the snapshot is kept.
impl<'de> Deserialize<'de> for FormSnapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = HashMap::<String, serde_json::Value>::deserialize(deserializer)?;
        let values = raw
            .into_iter()
            .filter_map(|(key, value)| scalar_text(value).map(|text| (key, text)))
            .collect();
        Ok(Self(values))
    }
}

fn scalar_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(text) => Some(text),
        serde_json::Value::Number(number) => Some(number.to_string()),
        serde_json::Value::Bool(flag) => Some(flag.to_string()),
        serde_json::Value::Null => Some(String::new()),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
    }
}

impl FormSnapshot {
    pub fn from_values(values: &FormValues) -> Self {
        Self(values.to_raw_map())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Copy known keys onto `values`. Unknown keys are ignored, missing keys
    /// leave the field untouched.
    pub fn restore_into(&self, values: &mut FormValues) {
        values.apply_raw_map(&self.0);
    }
}

/// Snapshot persistence bound to a single named slot.
pub struct PersistenceStore<S: SlotStorage> {
    storage: S,
    slot: String,
}

impl<S: SlotStorage> PersistenceStore<S> {
    pub fn new(storage: S, slot: impl Into<String>) -> Self {
        Self {
            storage,
            slot: slot.into(),
        }
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Overwrite the slot with `snapshot`.
    pub fn save(&self, snapshot: &FormSnapshot) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(snapshot).map_err(|source| PersistenceError::Parse {
            slot: self.slot.clone(),
            source,
        })?;
        self.storage
            .write(&self.slot, &json)
            .map_err(|source| self.io_error(source))
    }

    /// Read and parse the slot, surfacing every failure.
    pub fn try_load(&self) -> Result<Option<FormSnapshot>, PersistenceError> {
        let Some(contents) = self
            .storage
            .read(&self.slot)
            .map_err(|source| self.io_error(source))?
        else {
            return Ok(None);
        };

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|source| PersistenceError::Parse {
                slot: self.slot.clone(),
                source,
            })
    }

    /// Read the slot for restore. Absent or unreadable slots yield an empty
    /// snapshot; failures are logged and go no further.
    pub fn load(&self) -> FormSnapshot {
        match self.try_load() {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => FormSnapshot::default(),
            Err(err) => {
                tracing::warn!(slot = %self.slot, error = %err, "Error loading saved form data");
                FormSnapshot::default()
            }
        }
    }

    /// Delete the slot.
    pub fn clear(&self) -> Result<(), PersistenceError> {
        self.storage
            .remove(&self.slot)
            .map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: io::Error) -> PersistenceError {
        PersistenceError::Io {
            slot: self.slot.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemorySlotStorage;
    use crate::profile::FormField;

    fn store() -> PersistenceStore<MemorySlotStorage> {
        PersistenceStore::new(MemorySlotStorage::new(), "resumeBanditForm")
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = store();
        let values = FormValues::new()
            .with(FormField::Name, "Alice")
            .with(FormField::Skills, "Go, SQL");
        let snapshot = FormSnapshot::from_values(&values);
        store.save(&snapshot).unwrap();
        assert_eq!(store.load(), snapshot);
    }

    #[test]
    fn load_after_clear_is_empty() {
        let store = store();
        store
            .save(&FormSnapshot::from_values(&FormValues::new()))
            .unwrap();
        store.clear().unwrap();
        assert!(store.load().is_empty());
        assert!(store.try_load().unwrap().is_none());
    }

    #[test]
    fn malformed_slot_loads_empty() {
        let store = store();
        store.storage().write("resumeBanditForm", "{not json").unwrap();
        assert!(store.load().is_empty());
        assert!(matches!(
            store.try_load(),
            Err(PersistenceError::Parse { .. })
        ));
    }

    #[test]
    fn scalar_values_restore_as_text() {
        let store = store();
        store
            .storage()
            .write(
                "resumeBanditForm",
                r#"{"name":"Bob","experience":3,"projectCount":null,"skills":["Go"]}"#,
            )
            .unwrap();

        let snapshot = store.try_load().unwrap().unwrap();
        assert_eq!(snapshot.get("name"), Some("Bob"));
        assert_eq!(snapshot.get("experience"), Some("3"));
        assert_eq!(snapshot.get("projectCount"), Some(""));
        assert_eq!(snapshot.get("skills"), None);
    }

    #[test]
    fn restore_ignores_unknown_keys() {
        let mut raw = HashMap::new();
        raw.insert("name".to_string(), "Bob".to_string());
        raw.insert("legacyField".to_string(), "x".to_string());
        let snapshot = FormSnapshot(raw);

        let mut values = FormValues::new().with(FormField::Domain, "Data");
        snapshot.restore_into(&mut values);
        assert_eq!(values.get(FormField::Name), "Bob");
        assert_eq!(values.get(FormField::Domain), "Data");
    }
}
