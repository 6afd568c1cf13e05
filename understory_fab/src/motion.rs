// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual state and the motions that move between visual states.

use core::time::Duration;

use kurbo::Rect;
use understory_animation_queue::TaskId;

use crate::config::{AnimationTiming, Easing};

/// What the host renders: frame, opacity and uniform scale about the center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visual {
    /// Frame in container coordinates.
    pub rect: Rect,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
    /// Uniform scale applied about the frame center.
    pub scale: f64,
}

impl Visual {
    /// Fully opaque and unscaled at `rect`.
    #[must_use]
    pub fn opaque(rect: Rect) -> Self {
        Self {
            rect,
            alpha: 1.0,
            scale: 1.0,
        }
    }

    /// Fully transparent and unscaled at `rect`.
    #[must_use]
    pub fn transparent(rect: Rect) -> Self {
        Self {
            rect,
            alpha: 0.0,
            scale: 1.0,
        }
    }

    /// Linear blend towards `other`; `t = 0` is `self`, `t = 1` is `other`.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Self {
            rect: Rect::new(
                mix(self.rect.x0, other.rect.x0),
                mix(self.rect.y0, other.rect.y0),
                mix(self.rect.x1, other.rect.x1),
                mix(self.rect.y1, other.rect.y1),
            ),
            alpha: mix(self.alpha, other.alpha),
            scale: mix(self.scale, other.scale),
        }
    }
}

/// The purpose of a motion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MotionKind {
    /// Towards the idle rectangle.
    Show,
    /// Towards the exit rectangle.
    Hide,
    /// Scale up and fade out in place.
    Magnify,
}

impl MotionKind {
    /// Returns `true` if completing this motion leaves the button visible.
    #[must_use]
    pub fn appears(self) -> bool {
        matches!(self, Self::Show)
    }
}

/// A queued motion request; endpoints are resolved when it starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct MotionRequest {
    pub(crate) kind: MotionKind,
    pub(crate) timing: AnimationTiming,
}

/// A running motion with resolved endpoints.
///
/// Hosts with their own animation system can read the endpoints and timing
/// from here, animate natively and report completion through
/// [`FloatingButton::complete_motion`](crate::FloatingButton::complete_motion).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    /// Sequencing id, to be handed back on completion.
    pub id: TaskId,
    /// What this motion does.
    pub kind: MotionKind,
    /// Visual at the start of the motion.
    pub from: Visual,
    /// Visual at the end of the motion.
    pub to: Visual,
    /// Delay and duration.
    pub timing: AnimationTiming,
    /// Progress curve.
    pub easing: Easing,
    pub(crate) elapsed: Duration,
}

impl Motion {
    /// Time consumed so far by [`FloatingButton::advance`](crate::FloatingButton::advance).
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns `true` once delay and duration have fully elapsed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.timing.total()
    }

    /// Linear progress in `[0, 1]` after `elapsed`, ignoring the delay period.
    #[must_use]
    pub fn progress_at(&self, elapsed: Duration) -> f64 {
        let Some(moving) = elapsed.checked_sub(self.timing.delay) else {
            return 0.0;
        };
        if self.timing.duration.is_zero() {
            return 1.0;
        }
        (moving.as_secs_f64() / self.timing.duration.as_secs_f64()).min(1.0)
    }

    /// Eased visual after `elapsed`.
    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> Visual {
        let t = self.easing.apply(self.progress_at(elapsed));
        self.from.lerp(&self.to, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn motion(timing: AnimationTiming) -> Motion {
        Motion {
            id: first_id(),
            kind: MotionKind::Show,
            from: Visual::transparent(Rect::new(0.0, 0.0, 10.0, 10.0)),
            to: Visual::opaque(Rect::new(100.0, 0.0, 110.0, 10.0)),
            timing,
            easing: Easing::Linear,
            elapsed: Duration::ZERO,
        }
    }

    fn first_id() -> TaskId {
        let mut queue = understory_animation_queue::AnimationQueue::new();
        queue.enqueue(()).id().unwrap()
    }

    #[test]
    fn delay_holds_the_start_visual() {
        let m = motion(AnimationTiming::new(
            Duration::from_millis(100),
            Duration::from_millis(200),
        ));
        assert_eq!(m.sample(Duration::from_millis(50)), m.from);
        assert_eq!(m.progress_at(Duration::from_millis(100)), 0.0);
        assert_eq!(m.progress_at(Duration::from_millis(200)), 0.5);
        assert_eq!(m.sample(Duration::from_millis(900)), m.to);
    }

    #[test]
    fn halfway_blends_frame_and_alpha() {
        let m = motion(AnimationTiming::new(Duration::ZERO, Duration::from_secs(1)));
        let mid = m.sample(Duration::from_millis(500));
        assert_eq!(mid.rect, Rect::new(50.0, 0.0, 60.0, 10.0));
        assert_eq!(mid.alpha, 0.5);
        assert_eq!(mid.scale, 1.0);
    }

    #[test]
    fn instant_motion_is_complete_immediately() {
        let m = motion(AnimationTiming::INSTANT);
        assert!(m.is_complete());
        assert_eq!(m.sample(Duration::ZERO), m.to);
    }
}
