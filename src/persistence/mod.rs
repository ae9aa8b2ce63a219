//! Persistence of in-progress form input across restarts.
//!
//! A snapshot of raw field values is written to one named slot on every
//! change, read once at startup and deleted on reset. It never expires.

mod storage;
mod store;

pub use storage::{FileSlotStorage, MemorySlotStorage, SlotStorage};
pub use store::{FormSnapshot, PersistenceError, PersistenceStore};
