// Copyright 2026 the KoppeK Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the page behaviors.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! page script calls after each callback. All method bodies default to
//! no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use crate::countdown::CountdownUpdate;
use crate::media::{MediaEvent, MediaState, MediaTransition};
use crate::parallax::ParallaxPose;
use crate::time::{Remaining, WallTime};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// The independent behaviors installed on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Behavior {
    /// Countdown display.
    Countdown,
    /// Reveal-on-scroll.
    Reveal,
    /// Preview in-view marker.
    Preview,
    /// Preview parallax.
    Parallax,
    /// Logo video fallback.
    MediaFallback,
}

impl Behavior {
    /// Short lowercase name for log lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Countdown => "countdown",
            Self::Reveal => "reveal",
            Self::Preview => "preview",
            Self::Parallax => "parallax",
            Self::MediaFallback => "media",
        }
    }
}

/// Why a behavior was not installed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// An element it needs is not on the page (carries the element id).
    MissingElement(&'static str),
    /// The user asked for reduced motion.
    ReducedMotion,
}

/// Outcome of installing a behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstallStatus {
    /// Running; carries the number of elements it watches.
    Installed(u32),
    /// Not running.
    Skipped(SkipReason),
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted once per behavior at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BehaviorEvent {
    /// Which behavior.
    pub behavior: Behavior,
    /// Whether it was installed.
    pub status: InstallStatus,
}

/// Emitted on every countdown tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountdownTickEvent {
    /// Clock reading.
    pub now: WallTime,
    /// Time left, `None` after the launch instant.
    pub remaining: Option<Remaining>,
    /// Slots rewritten by this tick.
    pub changed_slots: u8,
}

impl From<&CountdownUpdate> for CountdownTickEvent {
    fn from(update: &CountdownUpdate) -> Self {
        Self {
            now: update.now,
            remaining: update.remaining,
            changed_slots: update.changed_slots,
        }
    }
}

/// Emitted when an element is revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealEvent {
    /// Index of the element in document order.
    pub index: u32,
    /// Elements revealed so far, including this one.
    pub revealed: u32,
    /// Revealable elements on the page.
    pub total: u32,
}

/// Emitted for every preview intersection entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreviewEvent {
    /// Visible ratio reported.
    pub ratio: f64,
    /// Whether the platform reported an intersection.
    pub is_intersecting: bool,
    /// Marker state after the entry was applied.
    pub in_view: bool,
    /// Whether the marker flipped.
    pub changed: bool,
}

/// Emitted for every parallax animation frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxFrameEvent {
    /// Travel through the viewport.
    pub progress: f64,
    /// Pose applied, `None` when the frame left the preview untouched.
    pub pose: Option<ParallaxPose>,
}

/// Emitted when the media switcher acts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MediaTransitionEvent {
    /// What caused it.
    pub cause: MediaEvent,
    /// State before.
    pub from: MediaState,
    /// State after.
    pub to: MediaState,
}

impl From<&MediaTransition> for MediaTransitionEvent {
    fn from(t: &MediaTransition) -> Self {
        Self {
            cause: t.cause,
            from: t.from,
            to: t.to,
        }
    }
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the page behaviors.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called once per behavior at startup.
    fn on_behavior(&mut self, e: &BehaviorEvent) {
        _ = e;
    }

    /// Called on every countdown tick.
    fn on_countdown_tick(&mut self, e: &CountdownTickEvent) {
        _ = e;
    }

    /// Called when an element is revealed.
    fn on_reveal(&mut self, e: &RevealEvent) {
        _ = e;
    }

    /// Called for every preview intersection entry.
    fn on_preview(&mut self, e: &PreviewEvent) {
        _ = e;
    }

    /// Called for every parallax frame.
    fn on_parallax_frame(&mut self, e: &ParallaxFrameEvent) {
        _ = e;
    }

    /// Called when the media switcher acts.
    fn on_media_transition(&mut self, e: &MediaTransitionEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`BehaviorEvent`].
    #[inline]
    pub fn behavior(&mut self, e: &BehaviorEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_behavior(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`CountdownTickEvent`].
    #[inline]
    pub fn countdown_tick(&mut self, e: &CountdownTickEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_countdown_tick(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`RevealEvent`].
    #[inline]
    pub fn reveal(&mut self, e: &RevealEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_reveal(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PreviewEvent`].
    #[inline]
    pub fn preview(&mut self, e: &PreviewEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_preview(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ParallaxFrameEvent`].
    #[inline]
    pub fn parallax_frame(&mut self, e: &ParallaxFrameEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_parallax_frame(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`MediaTransitionEvent`].
    #[inline]
    pub fn media_transition(&mut self, e: &MediaTransitionEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_media_transition(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LandingConfig;
    use crate::countdown::Countdown;
    use crate::media::{MediaFallback, ReadyState};

    #[test]
    fn countdown_tick_event_from_update() {
        let mut countdown = Countdown::new(WallTime(90_061_000), &LandingConfig::koppek().countdown);
        let update = countdown.tick(WallTime(0));
        let evt = CountdownTickEvent::from(&update);
        assert_eq!(evt.now, WallTime(0));
        assert_eq!(evt.remaining, Some(Remaining(90_061_000)));
        assert_eq!(evt.changed_slots, 4);
    }

    #[test]
    fn media_event_from_transition() {
        let mut media = MediaFallback::new();
        let t = media
            .handle(MediaEvent::Timeout(ReadyState::HaveNothing))
            .expect("nothing loaded");
        let evt = MediaTransitionEvent::from(&t);
        assert_eq!(evt.from, MediaState::Pending);
        assert_eq!(evt.to, MediaState::FallbackShown);
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_behavior(&BehaviorEvent {
            behavior: Behavior::Parallax,
            status: InstallStatus::Skipped(SkipReason::ReducedMotion),
        });
        sink.on_reveal(&RevealEvent {
            index: 0,
            revealed: 1,
            total: 3,
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.parallax_frame(&ParallaxFrameEvent {
            progress: 0.5,
            pose: None,
        });
        tracer.countdown_tick(&CountdownTickEvent {
            now: WallTime(0),
            remaining: None,
            changed_slots: 0,
        });
    }

    #[test]
    fn behavior_names() {
        assert_eq!(Behavior::MediaFallback.as_str(), "media");
        assert_eq!(Behavior::Countdown.as_str(), "countdown");
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            reveals: Vec<u32>,
        }
        impl TraceSink for RecordingSink {
            fn on_reveal(&mut self, e: &RevealEvent) {
                self.reveals.push(e.index);
            }
        }

        let mut sink = RecordingSink {
            reveals: Vec::new(),
        };
        let mut tracer = Tracer::new(&mut sink);
        tracer.reveal(&RevealEvent {
            index: 4,
            revealed: 1,
            total: 5,
        });
        // Access sink after tracer is dropped.
        drop(tracer);
        assert_eq!(sink.reveals, &[4]);
    }
}
