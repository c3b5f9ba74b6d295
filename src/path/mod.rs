// SPDX-FileCopyrightText: The decknav authors
// SPDX-License-Identifier: MPL-2.0

//! Slide page addresses

use std::{str::FromStr, sync::LazyLock};

use derive_more::Display;
use percent_encoding::percent_decode;
use regex::Regex;
use thiserror::Error;
use url::Url;

use crate::deck::{ParseSlideIdError, SlideId};

/// The root path, serving the first slide.
pub const ROOT_PATH: &str = "/";

const SLIDE_PATH_REGEX_STR: &str = r"^/slide/([0-9]+)$";

static SLIDE_PATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| SLIDE_PATH_REGEX_STR.parse().unwrap());

// Workaround to prevent RelativeUrlWithoutBase errors when resolving
// link targets relative to the site root.
static DUMMY_BASE_URL: LazyLock<Url> = LazyLock::new(|| "http://deck.invalid/".parse().unwrap());

fn dummy_base_url() -> &'static Url {
    &DUMMY_BASE_URL
}

/// A slide address decoding error
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Well-formed, but not the address of a slide page.
    #[error("not a slide address")]
    Invalid,

    /// Syntax error.
    #[error(transparent)]
    Syntax(#[from] anyhow::Error),
}

impl From<std::str::Utf8Error> for DecodeError {
    fn from(from: std::str::Utf8Error) -> Self {
        anyhow::Error::from(from).into()
    }
}

impl From<url::ParseError> for DecodeError {
    fn from(from: url::ParseError) -> Self {
        anyhow::Error::from(from).into()
    }
}

/// The address of a slide page.
///
/// Slide pages are addressed by the path pattern `/slide/{n}` with a 1-based
/// ordinal; the first slide is also reachable at [`ROOT_PATH`].
#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("/slide/{_0}")]
pub struct SlidePath(SlideId);

impl SlidePath {
    /// The address of the given slide.
    #[must_use]
    pub const fn new(slide: SlideId) -> Self {
        Self(slide)
    }

    /// The addressed slide.
    #[must_use]
    pub const fn slide(self) -> SlideId {
        self.0
    }

    /// Check for the first slide's address.
    #[must_use]
    pub const fn is_first(self) -> bool {
        self.0.get() == SlideId::FIRST.get()
    }

    /// Encode the address as a path.
    #[must_use]
    pub fn encode(self) -> String {
        self.to_string()
    }

    /// Decode a slide address from a path.
    ///
    /// The root path addresses the first slide.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if `path` does not address a slide page.
    pub fn decode_str(path: &str) -> Result<Self, DecodeError> {
        if path == ROOT_PATH {
            return Ok(Self::new(SlideId::FIRST));
        }
        let Some(captures) = SLIDE_PATH_REGEX.captures(path) else {
            return Err(DecodeError::Invalid);
        };
        let ordinal = &captures[1];
        match ordinal.parse::<SlideId>() {
            Ok(slide) => Ok(Self::new(slide)),
            Err(ParseSlideIdError::Zero) => Err(DecodeError::Invalid),
            Err(err @ ParseSlideIdError::Syntax(_)) => Err(anyhow::Error::from(err).into()),
        }
    }

    /// Resolve and decode a link target.
    ///
    /// Accepts absolute URLs as well as targets relative to the site root,
    /// e.g. the `href` of a next/previous link. Query and fragment parts are
    /// ignored; percent-encoded paths are decoded first.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if `href` does not address a slide page.
    pub fn from_href(href: &str) -> Result<Self, DecodeError> {
        let parse_options = Url::options().base_url(Some(dummy_base_url()));
        let url = parse_options.parse(href)?;
        let path = percent_decode(url.path().as_bytes()).decode_utf8()?;
        Self::decode_str(&path)
    }
}

impl FromStr for SlidePath {
    type Err = DecodeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        // This implementation permits leading/trailing whitespace,
        // other than `SlidePath::decode_str()` which is more strict.
        Self::decode_str(input.trim())
    }
}

#[cfg(test)]
mod tests;
