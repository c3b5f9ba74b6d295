// SPDX-FileCopyrightText: The decknav authors
// SPDX-License-Identifier: MPL-2.0

//! Durable key-value storage

use std::collections::BTreeMap;

/// Storage key of the persisted slide progress.
pub const PROGRESS_KEY: &str = "presentationProgress";

/// Key-value string storage.
///
/// The contract stores raw strings: any value previously written round-trips
/// unchanged. Encoding slide ordinals is the caller's responsibility, which
/// keeps the storage contract free of any serialization concern.
///
/// Implementations: browser `localStorage` (via the embedding shell),
/// [`MemoryStorage`] for tests and headless shells.
///
/// The backing store is shared per origin without locking: concurrent tabs
/// race on the same keys and the last writer wins.
pub trait Storage {
    /// Write a string value under `key`, overwriting any prior value.
    fn save(&mut self, key: &str, value: &str);

    /// Read the string value under `key`, or `None` if absent.
    fn load(&self, key: &str) -> Option<String>;

    /// Remove `key` from storage.
    fn remove(&mut self, key: &str);
}

/// In-memory [`Storage`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty storage.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl Storage for MemoryStorage {
    fn save(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }

    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
