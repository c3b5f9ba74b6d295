// SPDX-FileCopyrightText: The decknav authors
// SPDX-License-Identifier: MPL-2.0

//! Quiz answer tracking

use std::fmt;

use log::debug;

/// Running tally of quiz answers.
///
/// Purely client-side: the score lives with the page and is reported through
/// the logging facade, nothing is persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizTracker {
    correct: u32,
    total: u32,
}

impl QuizTracker {
    /// Start an empty tally.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            correct: 0,
            total: 0,
        }
    }

    /// Record an answer and report the running score.
    pub fn record_answer(&mut self, is_correct: bool) {
        self.total += 1;
        if is_correct {
            self.correct += 1;
        }
        debug!("quiz score: {self}");
    }

    /// Correctly answered questions.
    #[must_use]
    pub const fn correct(&self) -> u32 {
        self.correct
    }

    /// Total answered questions.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.total
    }

    /// Share of correct answers in percent, or `None` before the first
    /// answer.
    #[must_use]
    pub fn percentage(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(f64::from(self.correct) / f64::from(self.total) * 100.0)
    }
}

impl fmt::Display for QuizTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let percentage = self.percentage().unwrap_or(0.0);
        write!(f, "{}/{} ({percentage:.1}%)", self.correct, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_counts_correct_and_total() {
        let mut quiz = QuizTracker::new();
        quiz.record_answer(true);
        quiz.record_answer(false);
        quiz.record_answer(true);
        assert_eq!(2, quiz.correct());
        assert_eq!(3, quiz.total());
    }

    #[test]
    fn no_percentage_before_the_first_answer() {
        assert_eq!(None, QuizTracker::new().percentage());
    }

    #[test]
    fn formats_score_with_percentage() {
        let mut quiz = QuizTracker::new();
        quiz.record_answer(true);
        quiz.record_answer(true);
        quiz.record_answer(false);
        assert_eq!("2/3 (66.7%)", quiz.to_string());
    }
}
