// SPDX-FileCopyrightText: The decknav authors
// SPDX-License-Identifier: MPL-2.0

//! Furthest-slide progress tracking

use crate::{
    deck::SlideId,
    storage::{PROGRESS_KEY, Storage},
};

/// Furthest-slide progress persisted through a [`Storage`].
///
/// The stored value is the decimal encoding of a slide ordinal, written
/// opportunistically: every save overwrites the prior value, so progress is
/// not guaranteed to be monotonic.
#[derive(Debug, Clone, Default)]
pub struct Progress<S> {
    storage: S,
}

impl<S: Storage> Progress<S> {
    /// Track progress through the given storage.
    #[must_use]
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Record `slide` as the progress, overwriting any prior value.
    pub fn record(&mut self, slide: SlideId) {
        self.storage.save(PROGRESS_KEY, &slide.to_string());
    }

    /// Return the stored value unchanged, or `None` if absent.
    ///
    /// Values written through the [`Storage`] directly are preserved
    /// verbatim, whether or not they encode a slide ordinal.
    #[must_use]
    pub fn load_raw(&self) -> Option<String> {
        self.storage.load(PROGRESS_KEY)
    }

    /// Parse the stored value as a slide identifier.
    ///
    /// A value that does not encode a slide ordinal is treated as absent.
    #[must_use]
    pub fn saved_slide(&self) -> Option<SlideId> {
        self.load_raw()?.parse().ok()
    }

    /// The slide to offer for resumption: saved and beyond the first slide.
    #[must_use]
    pub fn resumable(&self) -> Option<SlideId> {
        self.saved_slide().filter(|slide| *slide != SlideId::FIRST)
    }

    /// Clear the stored progress.
    pub fn reset(&mut self) {
        self.storage.remove(PROGRESS_KEY);
    }

    /// Borrow the underlying storage.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume and return the underlying storage.
    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }
}
