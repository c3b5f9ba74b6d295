// SPDX-FileCopyrightText: The decknav authors
// SPDX-License-Identifier: MPL-2.0

//! Entrance animation scheduling

use std::time::Duration;

/// Visual state of an animated element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Opacity, 0.0 (invisible) to 1.0.
    pub opacity: f64,

    /// Downward offset from the resting position, in pixels.
    pub offset_y: f64,
}

/// One element's entrance transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    /// Delay before the transition starts.
    pub delay: Duration,

    /// Transition duration.
    pub duration: Duration,

    /// Starting state, applied immediately on load.
    pub from: Pose,

    /// Final state.
    pub to: Pose,
}

/// Staggered entrance of the slide-content children.
///
/// Each direct child of the slide-content container starts invisible and
/// offset, then transitions into place; the start delay grows linearly with
/// the child's position index. The schedule is pure data for the shell to
/// apply to the DOM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceAnimation {
    /// Transition duration per element.
    pub duration: Duration,

    /// Additional start delay per position index.
    pub stagger: Duration,

    /// Initial downward offset, in pixels.
    pub offset_y: f64,
}

impl Default for EntranceAnimation {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(500),
            stagger: Duration::from_millis(100),
            offset_y: 20.0,
        }
    }
}

impl EntranceAnimation {
    /// The settled state every child transitions into.
    pub const SETTLED: Pose = Pose {
        opacity: 1.0,
        offset_y: 0.0,
    };

    /// The hidden state applied to every child on load.
    #[must_use]
    pub const fn hidden(&self) -> Pose {
        Pose {
            opacity: 0.0,
            offset_y: self.offset_y,
        }
    }

    /// Build the per-child keyframes for `children` elements, in position
    /// order.
    #[must_use]
    pub fn schedule(&self, children: usize) -> Vec<Keyframe> {
        (0..children)
            .map(|index| Keyframe {
                delay: self.stagger * u32::try_from(index).unwrap_or(u32::MAX),
                duration: self.duration,
                from: self.hidden(),
                to: Self::SETTLED,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_grow_linearly_with_position() {
        let animation = EntranceAnimation::default();
        let schedule = animation.schedule(4);
        assert_eq!(4, schedule.len());
        assert_eq!(Duration::ZERO, schedule[0].delay);
        for (index, keyframe) in schedule.iter().enumerate() {
            assert_eq!(
                animation.stagger * u32::try_from(index).unwrap(),
                keyframe.delay
            );
            assert_eq!(animation.duration, keyframe.duration);
            assert_eq!(animation.hidden(), keyframe.from);
            assert_eq!(EntranceAnimation::SETTLED, keyframe.to);
        }
    }

    #[test]
    fn no_children_no_keyframes() {
        assert!(EntranceAnimation::default().schedule(0).is_empty());
    }
}
