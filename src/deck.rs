// SPDX-FileCopyrightText: The decknav authors
// SPDX-License-Identifier: MPL-2.0

//! Slide identity and deck shape

use std::{num::NonZeroU32, str::FromStr};

use derive_more::Display;
use thiserror::Error;

/// Identifier of a single slide: its 1-based ordinal within the deck.
#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("{_0}")]
pub struct SlideId(NonZeroU32);

impl SlideId {
    /// The first slide of any deck.
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Create a slide identifier from a 1-based ordinal.
    ///
    /// Returns `None` for ordinal 0.
    #[must_use]
    pub const fn new(ordinal: u32) -> Option<Self> {
        match NonZeroU32::new(ordinal) {
            Some(ordinal) => Some(Self(ordinal)),
            None => None,
        }
    }

    /// The 1-based ordinal.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

/// A slide identifier parsing error
#[derive(Debug, Error)]
pub enum ParseSlideIdError {
    /// Ordinals are 1-based.
    #[error("slide ordinals start at 1")]
    Zero,

    /// Not a decimal number.
    #[error(transparent)]
    Syntax(#[from] std::num::ParseIntError),
}

impl FromStr for SlideId {
    type Err = ParseSlideIdError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let ordinal: u32 = input.parse()?;
        Self::new(ordinal).ok_or(ParseSlideIdError::Zero)
    }
}

/// A fixed-size slide deck.
///
/// The deck only knows its shape; slide content and ordering are fixed
/// externally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck {
    slide_count: NonZeroU32,
}

impl Deck {
    /// Number of slides in the default deck.
    pub const DEFAULT_SLIDE_COUNT: u32 = 10;

    /// Create a deck with the given number of slides.
    ///
    /// Returns `None` for an empty deck.
    #[must_use]
    pub const fn new(slide_count: u32) -> Option<Self> {
        match NonZeroU32::new(slide_count) {
            Some(slide_count) => Some(Self { slide_count }),
            None => None,
        }
    }

    /// The number of slides.
    #[must_use]
    pub const fn slide_count(self) -> u32 {
        self.slide_count.get()
    }

    /// The first slide.
    #[must_use]
    pub const fn first(self) -> SlideId {
        SlideId::FIRST
    }

    /// The last slide.
    #[must_use]
    pub const fn last(self) -> SlideId {
        SlideId(self.slide_count)
    }

    /// Check if the slide belongs to the deck.
    #[must_use]
    pub const fn contains(self, slide: SlideId) -> bool {
        slide.get() <= self.slide_count.get()
    }

    /// The slide after `slide`, unless it is the last one.
    #[must_use]
    pub const fn next(self, slide: SlideId) -> Option<SlideId> {
        if slide.get() < self.slide_count.get() {
            SlideId::new(slide.get() + 1)
        } else {
            None
        }
    }

    /// The slide before `slide`, unless it is the first one.
    #[must_use]
    pub const fn previous(self, slide: SlideId) -> Option<SlideId> {
        SlideId::new(slide.get() - 1)
    }
}

impl Default for Deck {
    /// A deck with [`Self::DEFAULT_SLIDE_COUNT`] slides.
    fn default() -> Self {
        const DECK: Deck = match Deck::new(Deck::DEFAULT_SLIDE_COUNT) {
            Some(deck) => deck,
            None => unreachable!(),
        };
        DECK
    }
}
