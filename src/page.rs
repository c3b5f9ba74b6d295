// SPDX-FileCopyrightText: The decknav authors
// SPDX-License-Identifier: MPL-2.0

//! Rendered-page contract

use crate::deck::SlideId;

/// Element ids the navigator consumes from the rendered page.
pub mod element {
    /// Link to the next slide, absent on the last one.
    pub const NEXT_BTN: &str = "next-btn";

    /// Link to the previous slide, absent on the first one.
    pub const PREV_BTN: &str = "prev-btn";

    /// Resume modal backdrop.
    pub const RESUME_OVERLAY: &str = "resume-modal-overlay";

    /// Placeholder showing the offered slide ordinal.
    pub const RESUME_SLIDE_NUMBER: &str = "resume-slide-number";

    /// Modal button continuing at the stored slide.
    pub const RESUME_CONTINUE: &str = "resume-continue";

    /// Modal button clearing progress and restarting.
    pub const RESUME_RESET: &str = "resume-reset";
}

/// Read-only view of the rendered slide page.
///
/// Every query reads the live document: the answers may change between calls
/// as the shell mutates the page.
///
/// Implementations: DOM queries over the ids in [`element`] (via the
/// embedding shell), [`StaticPage`] for tests and headless shells.
pub trait PageView {
    /// Text content of the element exposing the current slide number.
    fn current_slide_text(&self) -> Option<String>;

    /// `href` of the next-slide link ([`element::NEXT_BTN`]), absent at the
    /// deck boundary.
    fn next_href(&self) -> Option<String>;

    /// `href` of the previous-slide link ([`element::PREV_BTN`]), absent at
    /// the deck boundary.
    fn prev_href(&self) -> Option<String>;

    /// Check for the resume-modal elements.
    ///
    /// Older page templates do not provide them; the resume flow then falls
    /// back to a blocking confirmation prompt.
    fn has_resume_modal(&self) -> bool;
}

/// An immutable page snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticPage {
    /// Current slide number as text, if the page exposes one.
    pub current_slide: Option<String>,

    /// Next-slide link target.
    pub next_href: Option<String>,

    /// Previous-slide link target.
    pub prev_href: Option<String>,

    /// Whether the resume-modal elements are present.
    pub resume_modal: bool,
}

impl PageView for StaticPage {
    fn current_slide_text(&self) -> Option<String> {
        self.current_slide.clone()
    }

    fn next_href(&self) -> Option<String> {
        self.next_href.clone()
    }

    fn prev_href(&self) -> Option<String> {
        self.prev_href.clone()
    }

    fn has_resume_modal(&self) -> bool {
        self.resume_modal
    }
}

/// Parse the current slide number from the page.
///
/// Returns `None` if the page exposes no usable slide number.
#[must_use]
pub fn current_slide(page: &impl PageView) -> Option<SlideId> {
    page.current_slide_text()?.trim().parse().ok()
}
