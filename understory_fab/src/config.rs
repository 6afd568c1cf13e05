// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration values for a [`FloatingButton`](crate::FloatingButton).
//!
//! Everything here is a plain value. Changing a configuration never moves the
//! button by itself: call [`FloatingButton::refresh`](crate::FloatingButton::refresh)
//! afterwards to recompute the cached rectangles.

use core::time::Duration;

use kurbo::Size;

/// Where the button rests inside its container when fully visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IdlePosition {
    /// Top-left corner.
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Centered along the top edge.
    TopCenter,
    /// Center of the container.
    Center,
    /// Centered along the left edge.
    CenterLeft,
    /// Centered along the right edge.
    CenterRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom-right corner.
    #[default]
    BottomRight,
    /// Centered along the bottom edge.
    BottomCenter,
}

impl IdlePosition {
    /// All nine positions.
    pub const ALL: [Self; 9] = [
        Self::TopLeft,
        Self::TopRight,
        Self::TopCenter,
        Self::Center,
        Self::CenterLeft,
        Self::CenterRight,
        Self::BottomLeft,
        Self::BottomRight,
        Self::BottomCenter,
    ];
}

/// The side the button enters from or exits towards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Stay in place; the transition only fades.
    None,
    /// Beyond the top edge of the container.
    Top,
    /// Beyond the bottom edge of the container.
    Bottom,
    /// Beyond the left edge of the container.
    #[default]
    Left,
    /// Beyond the right edge of the container.
    Right,
    /// Collapse into (or explode out of) the button's own center while fading.
    Faraway,
}

impl Direction {
    /// All six directions.
    pub const ALL: [Self; 6] = [
        Self::None,
        Self::Top,
        Self::Bottom,
        Self::Left,
        Self::Right,
        Self::Faraway,
    ];

    /// Returns `true` if a transition in this direction fades the button
    /// rather than sliding it off-screen.
    #[must_use]
    pub fn fades(self) -> bool {
        matches!(self, Self::None | Self::Faraway)
    }
}

/// What a tap on the button does after notifying the tap handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TapAnimation {
    /// Nothing.
    None,
    /// Run the regular exit animation.
    #[default]
    Exit,
    /// Scale the button up while fading it out, as if it swallowed the screen.
    Magnify,
}

/// Progress curve applied while interpolating a motion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Fast start, gentle settle (cubic ease-out).
    #[default]
    EaseOut,
}

impl Easing {
    /// Maps linear progress in `[0, 1]` onto the curve.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
        }
    }
}

/// Delay and duration of one kind of transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationTiming {
    /// Time to wait after the motion starts before anything moves.
    pub delay: Duration,
    /// Time spent moving once the delay has elapsed.
    pub duration: Duration,
}

impl AnimationTiming {
    /// Zero delay, zero duration: the motion completes as soon as it starts.
    pub const INSTANT: Self = Self {
        delay: Duration::ZERO,
        duration: Duration::ZERO,
    };

    /// Creates a timing with the given delay and duration.
    #[must_use]
    pub const fn new(delay: Duration, duration: Duration) -> Self {
        Self { delay, duration }
    }

    /// Delay plus duration.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.delay.saturating_add(self.duration)
    }
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self::new(Duration::ZERO, Duration::from_secs(1))
    }
}

/// Parameters of the tap-triggered magnify motion.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MagnifyStyle {
    /// Uniform scale reached at the end of the motion.
    pub scale: f64,
    /// Delay and duration of the motion.
    pub timing: AnimationTiming,
}

impl Default for MagnifyStyle {
    fn default() -> Self {
        Self {
            scale: 20.0,
            timing: AnimationTiming::new(Duration::ZERO, Duration::from_millis(600)),
        }
    }
}

/// Appearance, placement and animation settings of a floating button.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FabConfig {
    /// Button size.
    pub size: Size,
    /// Absolute distance kept from the left/right container edge.
    pub horizontal_margin: f64,
    /// Absolute distance kept from the top/bottom container edge.
    pub vertical_margin: f64,
    /// Resting position inside the container.
    pub idle_position: IdlePosition,
    /// Where the button comes from when shown.
    pub entry_direction: Direction,
    /// Where the button goes when hidden.
    pub exit_direction: Direction,
    /// Timing of the show motion.
    pub entry_timing: AnimationTiming,
    /// Timing of the hide motion.
    pub exit_timing: AnimationTiming,
    /// What a tap does.
    pub tap_animation: TapAnimation,
    /// Parameters used when `tap_animation` is [`TapAnimation::Magnify`].
    pub magnify: MagnifyStyle,
    /// Show on upward scrolling, hide on downward scrolling.
    pub animate_with_scroll: bool,
    /// How far beyond the container edge the button travels when entering or exiting.
    pub entry_distance: f64,
    /// Request a circular shape. Only honored for square sizes.
    pub circle_shape: bool,
    /// Progress curve for all motions.
    pub easing: Easing,
    /// Maximum number of sequenced motions, the running one included.
    pub queue_capacity: usize,
}

impl Default for FabConfig {
    fn default() -> Self {
        Self {
            size: Size::new(40.0, 40.0),
            horizontal_margin: 16.0,
            vertical_margin: 16.0,
            idle_position: IdlePosition::default(),
            entry_direction: Direction::default(),
            exit_direction: Direction::default(),
            entry_timing: AnimationTiming::default(),
            exit_timing: AnimationTiming::default(),
            tap_animation: TapAnimation::default(),
            magnify: MagnifyStyle::default(),
            animate_with_scroll: true,
            entry_distance: 40.0,
            circle_shape: true,
            easing: Easing::default(),
            queue_capacity: understory_animation_queue::DEFAULT_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = FabConfig::default();
        assert_eq!(config.size, Size::new(40.0, 40.0));
        assert_eq!(config.horizontal_margin, 16.0);
        assert_eq!(config.vertical_margin, 16.0);
        assert_eq!(config.idle_position, IdlePosition::BottomRight);
        assert_eq!(config.entry_direction, Direction::Left);
        assert_eq!(config.exit_direction, Direction::Left);
        assert_eq!(config.entry_timing.duration, Duration::from_secs(1));
        assert_eq!(config.tap_animation, TapAnimation::Exit);
        assert!(config.animate_with_scroll);
        assert_eq!(config.entry_distance, 40.0);
        assert_eq!(config.queue_capacity, 2);
    }

    #[test]
    fn easing_endpoints_are_fixed() {
        for easing in [Easing::Linear, Easing::EaseOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(-3.0), 0.0);
            assert_eq!(easing.apply(7.0), 1.0);
        }
        assert_eq!(Easing::Linear.apply(0.5), 0.5);
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
    }

    #[test]
    fn only_none_and_faraway_fade() {
        let fading: usize = Direction::ALL.iter().filter(|d| d.fades()).count();
        assert_eq!(fading, 2);
        assert!(Direction::Faraway.fades());
        assert!(!Direction::Bottom.fades());
    }

    #[test]
    fn instant_timing_has_no_total() {
        assert_eq!(AnimationTiming::INSTANT.total(), Duration::ZERO);
        let timing = AnimationTiming::new(Duration::from_millis(200), Duration::from_millis(300));
        assert_eq!(timing.total(), Duration::from_millis(500));
    }
}
