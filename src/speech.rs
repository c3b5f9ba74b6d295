// SPDX-FileCopyrightText: The decknav authors
// SPDX-License-Identifier: MPL-2.0

//! Pronunciation helpers

/// Fixed reduced speaking rate for pronunciation.
pub const RATE: f32 = 0.7;

/// Speaking pitch.
pub const PITCH: f32 = 1.0;

/// Speaking volume.
pub const VOLUME: f32 = 1.0;

/// Utterance language tag.
pub const LANG: &str = "en-US";

/// A synthesis voice offered by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    /// Platform voice name.
    pub name: String,

    /// BCP 47 language tag.
    pub lang: String,
}

impl Voice {
    /// Check for an English-tagged voice.
    #[must_use]
    pub fn is_english(&self) -> bool {
        self.lang.starts_with("en-")
    }
}

/// A text-to-speech request.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    /// The text to speak.
    pub text: String,

    /// Language tag, [`LANG`].
    pub lang: String,

    /// Explicit voice, or `None` for the platform default.
    pub voice: Option<Voice>,

    /// Speaking rate.
    pub rate: f32,

    /// Speaking pitch.
    pub pitch: f32,

    /// Speaking volume.
    pub volume: f32,
}

impl Utterance {
    /// An utterance of `text` with the fixed pronunciation settings and the
    /// platform default voice.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lang: LANG.to_owned(),
            voice: None,
            rate: RATE,
            pitch: PITCH,
            volume: VOLUME,
        }
    }
}

/// Select the English-tagged voice at `index` from the platform list.
///
/// Returns `None` when the list has not been populated yet or holds fewer
/// English voices, leaving the choice to the platform default.
#[must_use]
pub fn select_voice(voices: &[Voice], index: usize) -> Option<&Voice> {
    voices.iter().filter(|voice| voice.is_english()).nth(index)
}

/// Speech synthesis platform.
///
/// Implementations: browser speech synthesis (via the embedding shell),
/// [`NullSpeech`] where the capability is absent.
pub trait Speech {
    /// The voices currently offered by the platform.
    ///
    /// May be empty until the platform has loaded its voice list.
    fn voices(&self) -> Vec<Voice>;

    /// Speak the utterance. Fire-and-forget: completion is not reported.
    fn speak(&mut self, utterance: Utterance);
}

/// The absent speech capability: no voices, speaking is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSpeech;

impl Speech for NullSpeech {
    fn voices(&self) -> Vec<Voice> {
        Vec::new()
    }

    fn speak(&mut self, _utterance: Utterance) {}
}

/// Pronounce `text`, preferring the English voice at `voice_index`.
///
/// Falls back to the platform default voice when the preference cannot be
/// met. Fire-and-forget.
pub fn pronounce(synth: &mut impl Speech, text: &str, voice_index: usize) {
    let mut utterance = Utterance::new(text);
    utterance.voice = select_voice(&synth.voices(), voice_index).cloned();
    synth.speak(utterance);
}
