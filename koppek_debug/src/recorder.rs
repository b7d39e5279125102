// Copyright 2026 the KoppeK Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and keeps every event, in arrival
//! order, as a [`RecordedEvent`]. [`replay`] feeds a recording to another
//! sink.

use koppek_core::trace::{
    BehaviorEvent, CountdownTickEvent, MediaTransitionEvent, ParallaxFrameEvent, PreviewEvent,
    RevealEvent, TraceSink,
};

/// A recorded trace event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RecordedEvent {
    /// A behavior was installed or skipped.
    Behavior(BehaviorEvent),
    /// A countdown tick.
    CountdownTick(CountdownTickEvent),
    /// An element was revealed.
    Reveal(RevealEvent),
    /// A preview intersection entry.
    Preview(PreviewEvent),
    /// A parallax frame.
    ParallaxFrame(ParallaxFrameEvent),
    /// A media state change.
    MediaTransition(MediaTransitionEvent),
}

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that keeps every event.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Drops everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl TraceSink for RecorderSink {
    fn on_behavior(&mut self, e: &BehaviorEvent) {
        self.events.push(RecordedEvent::Behavior(*e));
    }

    fn on_countdown_tick(&mut self, e: &CountdownTickEvent) {
        self.events.push(RecordedEvent::CountdownTick(*e));
    }

    fn on_reveal(&mut self, e: &RevealEvent) {
        self.events.push(RecordedEvent::Reveal(*e));
    }

    fn on_preview(&mut self, e: &PreviewEvent) {
        self.events.push(RecordedEvent::Preview(*e));
    }

    fn on_parallax_frame(&mut self, e: &ParallaxFrameEvent) {
        self.events.push(RecordedEvent::ParallaxFrame(*e));
    }

    fn on_media_transition(&mut self, e: &MediaTransitionEvent) {
        self.events.push(RecordedEvent::MediaTransition(*e));
    }
}

/// Sends each recorded event to `sink`, in order.
pub fn replay(events: &[RecordedEvent], sink: &mut dyn TraceSink) {
    for event in events {
        match event {
            RecordedEvent::Behavior(e) => sink.on_behavior(e),
            RecordedEvent::CountdownTick(e) => sink.on_countdown_tick(e),
            RecordedEvent::Reveal(e) => sink.on_reveal(e),
            RecordedEvent::Preview(e) => sink.on_preview(e),
            RecordedEvent::ParallaxFrame(e) => sink.on_parallax_frame(e),
            RecordedEvent::MediaTransition(e) => sink.on_media_transition(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use koppek_core::media::{MediaEvent, MediaState};
    use koppek_core::time::{Remaining, WallTime};
    use koppek_core::trace::{Behavior, InstallStatus, SkipReason};

    #[test]
    fn records_in_arrival_order() {
        let mut rec = RecorderSink::new();
        rec.on_behavior(&BehaviorEvent {
            behavior: Behavior::Parallax,
            status: InstallStatus::Skipped(SkipReason::ReducedMotion),
        });
        rec.on_countdown_tick(&CountdownTickEvent {
            now: WallTime(0),
            remaining: Some(Remaining(5_000)),
            changed_slots: 4,
        });

        let events = rec.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], RecordedEvent::Behavior(_)));
        assert!(matches!(
            events[1],
            RecordedEvent::CountdownTick(CountdownTickEvent {
                changed_slots: 4,
                ..
            })
        ));
    }

    #[test]
    fn replay_reproduces_recording() {
        let mut rec = RecorderSink::new();
        rec.on_reveal(&RevealEvent {
            index: 2,
            revealed: 1,
            total: 3,
        });
        rec.on_media_transition(&MediaTransitionEvent {
            cause: MediaEvent::Error,
            from: MediaState::Pending,
            to: MediaState::FallbackShown,
        });

        let mut copy = RecorderSink::new();
        replay(rec.events(), &mut copy);
        assert_eq!(copy.events(), rec.events());
    }

    #[test]
    fn clear_empties() {
        let mut rec = RecorderSink::new();
        rec.on_preview(&PreviewEvent {
            ratio: 0.3,
            is_intersecting: true,
            in_view: true,
            changed: true,
        });
        rec.clear();
        assert!(rec.into_events().is_empty());
    }
}
