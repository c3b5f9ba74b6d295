// SPDX-FileCopyrightText: The decknav authors
// SPDX-License-Identifier: MPL-2.0

//! The presentation navigator

use std::{fmt, time::Duration};

use log::{debug, warn};

use crate::{
    deck::{Deck, SlideId},
    input::{Key, NavCommand, SwipeTracker, TouchPoint},
    page::{self, PageView},
    path::SlidePath,
    progress::Progress,
    resume::{PromptStyle, Resolution, ResumeChoice, ResumeFlow},
    storage::Storage,
};

/// Interval between auto-save ticks.
pub const AUTOSAVE_INTERVAL: Duration = Duration::from_secs(5);

/// Navigator settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigatorConfig {
    /// The deck shape.
    pub deck: Deck,

    /// Interval at which the shell schedules [`Navigator::on_autosave_tick`].
    pub autosave_interval: Duration,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            deck: Deck::default(),
            autosave_interval: AUTOSAVE_INTERVAL,
        }
    }
}

/// An action for the shell to apply to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Perform a full page navigation to the address.
    Navigate(SlidePath),

    /// Show the resume modal, filled with the offered slide number.
    OpenPrompt(SlideId),

    /// Hide the resume modal.
    ClosePrompt,

    /// Ask a blocking yes/no confirmation to resume at the slide, then report
    /// the answer through [`Navigator::resume_choice`] as
    /// [`ResumeChoice::Continue`] or [`ResumeChoice::Decline`].
    AskConfirm(SlideId),

    /// Toggle fullscreen presentation.
    ToggleFullscreen,
}

/// Disposition of a clicked in-page link.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum LinkAction {
    /// Let the browser follow the link.
    Allow,

    /// Cancel the default navigation and apply the effects instead.
    Intercept(Vec<Effect>),
}

/// The presentation navigator.
///
/// One navigator is created per loaded slide page and owns the transient
/// state (resume flow, touch tracking) plus the persisted progress. The shell
/// wires it to the page: [`Self::on_load`] once the document is ready, then
/// [`Self::on_autosave_tick`] at [`Self::autosave_interval`], and the input
/// handlers as events arrive. Calling [`Self::on_load`] before scheduling the
/// timer keeps a freshly loaded page from having its progress overwritten by
/// a stale tick.
#[derive(Debug)]
pub struct Navigator<S> {
    deck: Deck,
    autosave_interval: Duration,
    progress: Progress<S>,
    resume: ResumeFlow,
    swipe: SwipeTracker,
}

impl<S: Storage> Navigator<S> {
    /// Create a navigator with the default configuration.
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self::with_config(NavigatorConfig::default(), storage)
    }

    /// Create a navigator with the given configuration.
    #[must_use]
    pub fn with_config(config: NavigatorConfig, storage: S) -> Self {
        let NavigatorConfig {
            deck,
            autosave_interval,
        } = config;
        Self {
            deck,
            autosave_interval,
            progress: Progress::new(storage),
            resume: ResumeFlow::default(),
            swipe: SwipeTracker::default(),
        }
    }

    /// The deck shape.
    #[must_use]
    pub const fn deck(&self) -> Deck {
        self.deck
    }

    /// Interval at which the shell schedules [`Self::on_autosave_tick`].
    #[must_use]
    pub const fn autosave_interval(&self) -> Duration {
        self.autosave_interval
    }

    /// The resume flow state.
    #[must_use]
    pub const fn resume(&self) -> &ResumeFlow {
        &self.resume
    }

    /// The persisted progress.
    #[must_use]
    pub const fn progress(&self) -> &Progress<S> {
        &self.progress
    }

    /// Mutable access to the persisted progress.
    pub fn progress_mut(&mut self) -> &mut Progress<S> {
        &mut self.progress
    }

    /// Handle the page having loaded.
    ///
    /// Records the current slide immediately, ahead of the first auto-save
    /// tick. On the landing page the resume gating runs first, and the
    /// load-time save is skipped while a prompt opens so that continue/reset
    /// act on the value the user was shown.
    #[must_use]
    pub fn on_load(&mut self, page: &impl PageView) -> Vec<Effect> {
        let Some(current) = page::current_slide(page) else {
            return Vec::new();
        };
        if current == self.deck.first() {
            if let Some(saved) = self.progress.resumable() {
                return self.open_prompt(saved, page);
            }
        }
        self.progress.record(current);
        Vec::new()
    }

    /// Handle an auto-save timer tick.
    ///
    /// Records the current slide, read live from the page, whether or not it
    /// changed. A page without a readable slide number is left alone.
    pub fn on_autosave_tick(&mut self, page: &impl PageView) {
        let Some(current) = page::current_slide(page) else {
            return;
        };
        debug!("auto-saving progress: slide {current}");
        self.progress.record(current);
    }

    /// Handle a mapped key press.
    ///
    /// The shell suppresses the browser's default handling for every mapped
    /// key, whether or not effects are returned.
    #[must_use]
    pub fn on_key(&mut self, key: Key, page: &impl PageView) -> Vec<Effect> {
        match key {
            Key::ArrowRight | Key::Space => self.navigate(NavCommand::Next, page),
            Key::ArrowLeft => self.navigate(NavCommand::Previous, page),
            Key::Home => self.navigate(NavCommand::First, page),
            Key::End => self.navigate(NavCommand::Last, page),
            Key::F11 => vec![Effect::ToggleFullscreen],
        }
    }

    /// Handle the first contact of a touch.
    pub fn on_touch_start(&mut self, at: TouchPoint) {
        self.swipe.touch_start(at);
    }

    /// Handle the final contact of a touch, navigating on a completed swipe.
    #[must_use]
    pub fn on_touch_end(&mut self, at: TouchPoint, page: &impl PageView) -> Vec<Effect> {
        match self.swipe.touch_end(at) {
            Some(command) => self.navigate(command, page),
            None => Vec::new(),
        }
    }

    /// Handle a click on an in-page link.
    ///
    /// Links targeting the first slide are re-routed through the resume
    /// decision when stored progress exists and the page is not already on
    /// the first slide; the prompt then offers the stored slide instead of
    /// the link's own target. All other links pass through.
    pub fn on_link_click(&mut self, href: &str, page: &impl PageView) -> LinkAction {
        let Ok(path) = SlidePath::from_href(href) else {
            return LinkAction::Allow;
        };
        if !path.is_first() {
            return LinkAction::Allow;
        }
        if let Some(saved) = self.progress.resumable() {
            if !self.on_first_slide(page) {
                debug!("intercepting first-slide link, offering slide {saved}");
                return LinkAction::Intercept(self.open_prompt(saved, page));
            }
        }
        LinkAction::Allow
    }

    /// Open the resume prompt if stored progress allows it.
    ///
    /// This is the trigger shells attach to the global scope so that
    /// server-rendered template code can start the same flow.
    #[must_use]
    pub fn request_resume(&mut self, page: &impl PageView) -> Vec<Effect> {
        match self.progress.resumable() {
            Some(saved) => self.open_prompt(saved, page),
            None => Vec::new(),
        }
    }

    /// Resolve the open resume prompt with the user's choice.
    ///
    /// Without an open prompt the choice is ignored.
    #[must_use]
    pub fn resume_choice(&mut self, choice: ResumeChoice) -> Vec<Effect> {
        let style = self.resume.style();
        let Some(resolution) = self.resume.choose(choice) else {
            return Vec::new();
        };
        let mut effects = Vec::new();
        if style == Some(PromptStyle::Modal) {
            effects.push(Effect::ClosePrompt);
        }
        match resolution {
            Resolution::Continue(slide) => {
                effects.push(Effect::Navigate(SlidePath::new(slide)));
            }
            Resolution::Reset => {
                self.progress.reset();
                effects.push(Effect::Navigate(SlidePath::new(self.deck.first())));
            }
            Resolution::Dismissed => {}
        }
        effects
    }

    /// Apply a navigation command against the current page.
    #[must_use]
    pub fn navigate(&mut self, command: NavCommand, page: &impl PageView) -> Vec<Effect> {
        match command {
            NavCommand::Next => Self::follow(page.next_href()),
            NavCommand::Previous => Self::follow(page.prev_href()),
            NavCommand::First => self.first_slide_request(page),
            NavCommand::Last => vec![Effect::Navigate(SlidePath::new(self.deck.last()))],
        }
    }

    fn follow(href: Option<String>) -> Vec<Effect> {
        // Absent link: deck boundary, nothing to do.
        let Some(href) = href else {
            return Vec::new();
        };
        match SlidePath::from_href(&href) {
            Ok(path) => vec![Effect::Navigate(path)],
            Err(err) => {
                debug!("ignoring unusable navigation link {href:?}: {err}");
                Vec::new()
            }
        }
    }

    /// Go to the first slide, re-routed through the resume decision when
    /// stored progress would be discarded.
    fn first_slide_request(&mut self, page: &impl PageView) -> Vec<Effect> {
        if let Some(saved) = self.progress.resumable() {
            if !self.on_first_slide(page) {
                debug!("re-routing first-slide request through the resume prompt");
                return self.open_prompt(saved, page);
            }
        }
        vec![Effect::Navigate(SlidePath::new(self.deck.first()))]
    }

    // An unreadable slide number counts as not being on the first slide.
    fn on_first_slide(&self, page: &impl PageView) -> bool {
        page::current_slide(page) == Some(self.deck.first())
    }

    fn open_prompt(&mut self, saved: SlideId, page: &impl PageView) -> Vec<Effect> {
        let style = if page.has_resume_modal() {
            PromptStyle::Modal
        } else {
            // Older templates lack the modal elements.
            PromptStyle::Confirm
        };
        if !self.resume.offer(saved, style) {
            return Vec::new();
        }
        match style {
            PromptStyle::Modal => vec![Effect::OpenPrompt(saved)],
            PromptStyle::Confirm => vec![Effect::AskConfirm(saved)],
        }
    }
}

/// Log a rejected fullscreen request.
///
/// The failure is logged only; there is no user-facing error surface.
pub fn fullscreen_failed(reason: impl fmt::Display) {
    warn!("error attempting to enable fullscreen: {reason}");
}
