// SPDX-FileCopyrightText: The decknav authors
// SPDX-License-Identifier: MPL-2.0

//! Resume decision flow

use crate::deck::SlideId;

/// Phase of the resume decision flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResumePhase {
    /// No prompt is open.
    #[default]
    Idle,

    /// A prompt offering stored progress is open.
    PromptOpen,

    /// A choice was made and navigation is underway.
    Navigating,
}

/// How the resume prompt is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStyle {
    /// The page's resume-modal elements.
    Modal,

    /// A blocking yes/no confirmation dialog, for pages without the modal
    /// elements.
    Confirm,
}

/// The user's answer to the resume prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeChoice {
    /// Continue at the stored slide.
    Continue,

    /// Clear stored progress and restart at the first slide.
    Reset,

    /// Keep everything as is. Only the confirmation dialog offers this; the
    /// modal closes through continue/reset alone.
    Decline,
}

/// Resolution of an answered prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Navigate to the offered slide.
    Continue(SlideId),

    /// Clear stored progress and navigate to the first slide.
    Reset,

    /// Nothing to do; the flow is idle again.
    Dismissed,
}

/// The resume decision state machine.
///
/// Opening a prompt moves the flow from [`ResumePhase::Idle`] to
/// [`ResumePhase::PromptOpen`]; continue/reset answers move it to
/// [`ResumePhase::Navigating`], declining returns it to idle. The state is
/// transient and tied to the lifetime of the page.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResumeFlow {
    phase: ResumePhase,
    offer: Option<(SlideId, PromptStyle)>,
}

impl ResumeFlow {
    /// The current phase.
    #[must_use]
    pub const fn phase(&self) -> ResumePhase {
        self.phase
    }

    /// The slide offered by the open prompt.
    #[must_use]
    pub fn offered(&self) -> Option<SlideId> {
        self.offer.map(|(slide, _)| slide)
    }

    /// Presentation style of the open prompt.
    #[must_use]
    pub fn style(&self) -> Option<PromptStyle> {
        self.offer.map(|(_, style)| style)
    }

    /// Open a prompt offering `slide`.
    ///
    /// Returns `false` without a transition unless the flow is idle.
    pub fn offer(&mut self, slide: SlideId, style: PromptStyle) -> bool {
        if !matches!(self.phase, ResumePhase::Idle) {
            return false;
        }
        self.phase = ResumePhase::PromptOpen;
        self.offer = Some((slide, style));
        true
    }

    /// Resolve the open prompt with the user's choice.
    ///
    /// Returns `None` without a transition unless a prompt is open.
    pub fn choose(&mut self, choice: ResumeChoice) -> Option<Resolution> {
        if !matches!(self.phase, ResumePhase::PromptOpen) {
            return None;
        }
        debug_assert!(self.offer.is_some());
        let (offered, _) = self.offer?;
        match choice {
            ResumeChoice::Continue => {
                self.phase = ResumePhase::Navigating;
                Some(Resolution::Continue(offered))
            }
            ResumeChoice::Reset => {
                self.phase = ResumePhase::Navigating;
                Some(Resolution::Reset)
            }
            ResumeChoice::Decline => {
                self.phase = ResumePhase::Idle;
                self.offer = None;
                Some(Resolution::Dismissed)
            }
        }
    }
}
