// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use kurbo::Rect;
use understory_animation_queue::{Admission, AnimationQueue, TaskId};

use crate::callbacks::{Callbacks, LifecycleEvent};
use crate::config::{AnimationTiming, FabConfig, TapAnimation};
use crate::icon::{ButtonState, ContentMode, Icon, IconSet};
use crate::motion::{Motion, MotionKind, MotionRequest, Visual};
use crate::placement;
use crate::scroll::{ScrollDirection, ScrollTracker, ScrollTrigger};

/// Where a floating button is in its show/hide cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FabState {
    /// Resting at the idle rectangle.
    Idle,
    /// Resting at the exit rectangle, fully transparent.
    Hidden,
    /// Resting after the magnify motion: scaled up and fully transparent.
    Magnified,
    /// A motion of the given kind is in flight.
    Transitioning(MotionKind),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rest {
    Idle,
    Hidden,
    Magnified,
}

/// Headless floating action button.
///
/// Owns the configuration, the cached idle/entry/exit rectangles, the current
/// [`Visual`], the motion queue, scroll tracking and lifecycle handlers. The
/// host renders [`visual`](Self::visual) and drives motions either by calling
/// [`advance`](Self::advance) every frame, or by animating
/// [`active_motion`](Self::active_motion) itself and reporting
/// [`complete_motion`](Self::complete_motion).
///
/// Configuration and container changes take effect only after
/// [`refresh`](Self::refresh).
#[derive(Debug)]
pub struct FloatingButton {
    config: FabConfig,
    container: Rect,
    idle: Rect,
    entry: Rect,
    exit: Rect,
    visual: Visual,
    rest: Rest,
    queue: AnimationQueue<MotionRequest>,
    active: Option<Motion>,
    scroll: ScrollTracker,
    callbacks: Callbacks,
    icons: IconSet,
}

impl FloatingButton {
    /// Creates a button resting visible at its idle position inside `container`.
    #[must_use]
    pub fn new(container: Rect, config: FabConfig) -> Self {
        let idle = placement::idle_rect(container, &config);
        let mut button = Self {
            queue: AnimationQueue::with_capacity(config.queue_capacity),
            config,
            container,
            idle,
            entry: idle,
            exit: idle,
            visual: Visual::opaque(idle),
            rest: Rest::Idle,
            active: None,
            scroll: ScrollTracker::new(),
            callbacks: Callbacks::new(),
            icons: IconSet::default(),
        };
        button.refresh();
        button
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &FabConfig {
        &self.config
    }

    /// Mutable access to the configuration. Call [`refresh`](Self::refresh) afterwards.
    pub fn config_mut(&mut self) -> &mut FabConfig {
        &mut self.config
    }

    /// Replaces the configuration. Call [`refresh`](Self::refresh) afterwards.
    pub fn configure(&mut self, config: FabConfig) {
        self.config = config;
    }

    /// Container rectangle used by the last [`refresh`](Self::refresh) or construction.
    #[must_use]
    pub fn container(&self) -> Rect {
        self.container
    }

    /// Replaces the container rectangle. Call [`refresh`](Self::refresh) afterwards.
    pub fn set_container(&mut self, container: Rect) {
        self.container = container;
    }

    /// Recomputes the idle, entry and exit rectangles and the queue capacity
    /// from the current configuration and container.
    ///
    /// Nothing moves: the new rectangles are used by the next motion that starts.
    pub fn refresh(&mut self) {
        self.idle = placement::idle_rect(self.container, &self.config);
        self.entry = placement::directional_rect(
            self.container,
            &self.config,
            self.idle,
            self.config.entry_direction,
        );
        self.exit = placement::directional_rect(
            self.container,
            &self.config,
            self.idle,
            self.config.exit_direction,
        );
        self.queue.set_capacity(self.config.queue_capacity);
    }

    /// Cached idle rectangle.
    #[must_use]
    pub fn idle_rect(&self) -> Rect {
        self.idle
    }

    /// Cached rectangle a show motion starts from.
    #[must_use]
    pub fn entry_rect(&self) -> Rect {
        self.entry
    }

    /// Cached rectangle a hide motion ends at.
    #[must_use]
    pub fn exit_rect(&self) -> Rect {
        self.exit
    }

    /// What the host should render right now.
    #[must_use]
    pub fn visual(&self) -> Visual {
        self.visual
    }

    /// Current state, derived from the resting state and the in-flight motion.
    #[must_use]
    pub fn state(&self) -> FabState {
        match (&self.active, self.rest) {
            (Some(motion), _) => FabState::Transitioning(motion.kind),
            (None, Rest::Idle) => FabState::Idle,
            (None, Rest::Hidden) => FabState::Hidden,
            (None, Rest::Magnified) => FabState::Magnified,
        }
    }

    /// Returns `true` when the button rests at its idle rectangle, fully
    /// opaque and unscaled.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.active.is_none()
            && self.rest == Rest::Idle
            && self.visual == Visual::opaque(self.idle)
    }

    /// The motion currently in flight, if any.
    #[must_use]
    pub fn active_motion(&self) -> Option<&Motion> {
        self.active.as_ref()
    }

    /// Number of motions admitted, the in-flight one included.
    #[must_use]
    pub fn queued_motions(&self) -> usize {
        self.queue.len()
    }

    /// Direction recorded by the scroll tracker.
    #[must_use]
    pub fn scroll_direction(&self) -> ScrollDirection {
        self.scroll.direction()
    }

    /// Corner radius for a circular shape, when configured and possible.
    #[must_use]
    pub fn corner_radius(&self) -> Option<f64> {
        placement::corner_radius(&self.config)
    }

    /// Installs a handler for `event`, returning `true` if it replaced one.
    pub fn on(
        &mut self,
        event: LifecycleEvent,
        handler: impl FnMut(LifecycleEvent) + 'static,
    ) -> bool {
        self.callbacks.set(event, handler)
    }

    /// Removes the handler for `event`, returning `true` if there was one.
    pub fn clear_handler(&mut self, event: LifecycleEvent) -> bool {
        self.callbacks.clear(event)
    }

    /// Records the icon `name` for `state` if `exists` reports the asset as
    /// available. A missing asset logs a warning and changes nothing.
    pub fn set_image(
        &mut self,
        name: &str,
        state: ButtonState,
        content_mode: ContentMode,
        exists: impl FnOnce(&str) -> bool,
    ) -> bool {
        self.icons.set(name, state, content_mode, exists)
    }

    /// Icon recorded for `state`.
    #[must_use]
    pub fn image(&self, state: ButtonState) -> Option<&Icon> {
        self.icons.get(state)
    }

    /// Requests a show motion towards the idle rectangle.
    ///
    /// [`LifecycleEvent::WillAppear`] is emitted first, even if the queue is
    /// full and the request ends up dropped. Without animation the motion has
    /// zero delay and duration and completes as soon as it starts.
    pub fn show(&mut self, animated: bool) -> Admission {
        self.callbacks.emit(LifecycleEvent::WillAppear);
        let timing = if animated {
            self.config.entry_timing
        } else {
            AnimationTiming::INSTANT
        };
        self.request(MotionKind::Show, timing)
    }

    /// Requests a hide motion towards the exit rectangle.
    ///
    /// Mirrors [`show`](Self::show) with [`LifecycleEvent::WillDisappear`].
    pub fn hide(&mut self, animated: bool) -> Admission {
        self.callbacks.emit(LifecycleEvent::WillDisappear);
        let timing = if animated {
            self.config.exit_timing
        } else {
            AnimationTiming::INSTANT
        };
        self.request(MotionKind::Hide, timing)
    }

    /// Handles a tap on the button.
    ///
    /// Emits [`LifecycleEvent::DidTap`], then runs the configured
    /// [`TapAnimation`]. Returns `None` when no motion was requested.
    pub fn on_tap(&mut self) -> Option<Admission> {
        self.callbacks.emit(LifecycleEvent::DidTap);
        let (kind, timing) = match self.config.tap_animation {
            TapAnimation::None => return None,
            TapAnimation::Exit => (MotionKind::Hide, self.config.exit_timing),
            TapAnimation::Magnify => (MotionKind::Magnify, self.config.magnify.timing),
        };
        self.callbacks.emit(LifecycleEvent::WillDisappear);
        self.scroll.reset_direction();
        Some(self.request(kind, timing))
    }

    /// Handles one vertical scroll offset sample.
    ///
    /// Only active when `animate_with_scroll` is set; negative offsets
    /// (overscroll past the top) are ignored. An animated show or hide is
    /// requested only when the scrolling direction changes.
    pub fn on_scroll(&mut self, offset: f64) -> Option<Admission> {
        if !self.config.animate_with_scroll || offset.is_nan() || offset < 0.0 {
            return None;
        }
        match self.scroll.sample(offset)? {
            ScrollTrigger::Show => Some(self.show(true)),
            ScrollTrigger::Hide => Some(self.hide(true)),
        }
    }

    /// Feeds a stream of scroll offset samples through
    /// [`on_scroll`](Self::on_scroll), returning how many show/hide requests
    /// were made.
    pub fn observe(&mut self, samples: impl IntoIterator<Item = f64>) -> usize {
        samples
            .into_iter()
            .filter_map(|offset| self.on_scroll(offset))
            .count()
    }

    /// Steps the in-flight motion by `dt`, completing it when its delay and
    /// duration have elapsed. Leftover time carries into the next motion.
    pub fn advance(&mut self, dt: Duration) {
        let mut remaining = dt;
        while let Some(motion) = self.active.as_mut() {
            let total = motion.timing.total();
            let left = total.saturating_sub(motion.elapsed);
            if remaining < left {
                motion.elapsed += remaining;
                self.visual = motion.sample(motion.elapsed);
                return;
            }
            remaining -= left;
            motion.elapsed = total;
            let id = motion.id;
            if let Some(next) = self.finish(id) {
                self.run_from(next);
            }
        }
    }

    /// Reports that the host finished animating motion `id`.
    ///
    /// The button jumps to the motion's end visual, emits the matching
    /// `Did*` event and starts the next queued motion. Returns `false` if
    /// `id` is not the in-flight motion.
    pub fn complete_motion(&mut self, id: TaskId) -> bool {
        if self.active.as_ref().map(|m| m.id) != Some(id) {
            log::warn!("completion reported for motion {} which is not in flight", id.get());
            return false;
        }
        if let Some(next) = self.finish(id) {
            self.run_from(next);
        }
        true
    }

    fn request(&mut self, kind: MotionKind, timing: AnimationTiming) -> Admission {
        let admission = self.queue.enqueue(MotionRequest { kind, timing });
        log::debug!("{kind:?} requested: {admission:?}");
        if let Admission::Started(id) = admission {
            self.run_from(id);
        }
        admission
    }

    /// Starts motion `id` and keeps completing instant motions until one
    /// needs time to run or the queue is empty.
    fn run_from(&mut self, id: TaskId) {
        let mut next = Some(id);
        while let Some(id) = next.take() {
            self.begin(id);
            if self.active.as_ref().is_some_and(Motion::is_complete) {
                next = self.finish(id);
            }
        }
    }

    fn begin(&mut self, id: TaskId) {
        let Some(request) = self.queue.current().map(|task| *task.payload()) else {
            return;
        };
        let from = self.start_visual(request.kind);
        let to = self.end_visual(request.kind, from);
        log::debug!("starting {:?} motion {}", request.kind, id.get());
        self.visual = from;
        self.active = Some(Motion {
            id,
            kind: request.kind,
            from,
            to,
            timing: request.timing,
            easing: self.config.easing,
            elapsed: Duration::ZERO,
        });
    }

    fn start_visual(&self, kind: MotionKind) -> Visual {
        match kind {
            MotionKind::Show if self.rest != Rest::Idle => {
                if self.config.entry_direction.fades() {
                    Visual::transparent(self.entry)
                } else {
                    Visual::opaque(self.entry)
                }
            }
            MotionKind::Show | MotionKind::Hide | MotionKind::Magnify => self.visual,
        }
    }

    /// A hide only moves the frame; opacity and scale carry over from `from`
    /// unless the exit direction fades.
    fn end_visual(&self, kind: MotionKind, from: Visual) -> Visual {
        match kind {
            MotionKind::Show => Visual::opaque(self.idle),
            MotionKind::Hide => Visual {
                rect: self.exit,
                alpha: if self.config.exit_direction.fades() {
                    0.0
                } else {
                    from.alpha
                },
                scale: from.scale,
            },
            MotionKind::Magnify => Visual {
                rect: from.rect,
                alpha: 0.0,
                scale: self.config.magnify.scale,
            },
        }
    }

    /// Completes the in-flight motion and returns the motion started in its place.
    fn finish(&mut self, id: TaskId) -> Option<TaskId> {
        let completion = self.queue.notify_finished(id)?;
        if let Some(motion) = self.active.take() {
            self.visual = motion.to;
        }
        let kind = completion.finished.payload().kind;
        self.rest = match kind {
            MotionKind::Show => Rest::Idle,
            MotionKind::Hide => {
                self.visual.alpha = 0.0;
                Rest::Hidden
            }
            MotionKind::Magnify => Rest::Magnified,
        };
        log::debug!("{kind:?} motion {} finished", id.get());
        let event = if kind.appears() {
            LifecycleEvent::DidAppear
        } else {
            LifecycleEvent::DidDisappear
        };
        self.callbacks.emit(event);
        completion.started
    }
}
