// SPDX-FileCopyrightText: The decknav authors
// SPDX-License-Identifier: MPL-2.0

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(test), deny(clippy::panic_in_result_fn))]
#![cfg_attr(not(debug_assertions), deny(clippy::used_underscore_binding))]

//! Client-side navigation logic for browser-based slide presentations:
//! swipe/keyboard navigation between slide pages, progress persistence, a
//! resume-prompt flow, entrance animations, and text-to-speech pronunciation
//! helpers.
//!
//! The crate is platform-agnostic. The embedding shell owns the real DOM,
//! timers, storage, and speech synthesis behind the [`Storage`], [`PageView`],
//! and [`speech::Speech`] traits, drives the [`Navigator`] with input events,
//! and applies the returned [`Effect`]s.
//!
//! Refer to [`docs`] for an overview.

pub mod docs;

pub mod animate;
pub mod deck;
pub mod input;
pub mod navigator;
pub mod page;
pub mod path;
pub mod progress;
pub mod quiz;
pub mod resume;
pub mod speech;
pub mod storage;

pub use crate::{
    animate::EntranceAnimation,
    deck::{Deck, SlideId},
    input::{Key, NavCommand, SwipeTracker, TouchPoint},
    navigator::{Effect, LinkAction, Navigator, NavigatorConfig},
    page::{PageView, StaticPage},
    path::SlidePath,
    progress::Progress,
    quiz::QuizTracker,
    resume::{ResumeChoice, ResumeFlow, ResumePhase},
    speech::{NullSpeech, Speech, Utterance, Voice},
    storage::{MemoryStorage, Storage},
};
