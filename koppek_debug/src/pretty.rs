// Copyright 2026 the KoppeK Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use koppek_core::countdown::CountdownParts;
use koppek_core::media::MediaEvent;
use koppek_core::trace::{
    BehaviorEvent, CountdownTickEvent, InstallStatus, MediaTransitionEvent, ParallaxFrameEvent,
    PreviewEvent, RevealEvent, SkipReason, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn cause_name(cause: MediaEvent) -> String {
    match cause {
        MediaEvent::Error => "error".into(),
        MediaEvent::LoadedData => "loadeddata".into(),
        MediaEvent::Timeout(ready) => format!("timeout({ready:?})"),
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_behavior(&mut self, e: &BehaviorEvent) {
        let name = e.behavior.as_str();
        let _ = match e.status {
            InstallStatus::Installed(n) => {
                writeln!(self.writer, "[install] {name} elements={n}")
            }
            InstallStatus::Skipped(SkipReason::MissingElement(id)) => {
                writeln!(self.writer, "[install] {name} SKIPPED missing=#{id}")
            }
            InstallStatus::Skipped(SkipReason::ReducedMotion) => {
                writeln!(self.writer, "[install] {name} SKIPPED reduced-motion")
            }
        };
    }

    fn on_countdown_tick(&mut self, e: &CountdownTickEvent) {
        let parts = CountdownParts::from_remaining(e.remaining);
        let _ = writeln!(
            self.writer,
            "[countdown] now={}ms left={}d {:02}h {:02}m {:02}s changed={}{}",
            e.now.millis(),
            parts.days,
            parts.hours,
            parts.minutes,
            parts.seconds,
            e.changed_slots,
            if e.remaining.is_none() { " EXPIRED" } else { "" },
        );
    }

    fn on_reveal(&mut self, e: &RevealEvent) {
        let _ = writeln!(
            self.writer,
            "[reveal] index={} revealed={}/{}",
            e.index, e.revealed, e.total,
        );
    }

    fn on_preview(&mut self, e: &PreviewEvent) {
        let _ = writeln!(
            self.writer,
            "[preview] ratio={:.3} intersecting={} in_view={}{}",
            e.ratio,
            e.is_intersecting,
            e.in_view,
            if e.changed { " FLIP" } else { "" },
        );
    }

    fn on_parallax_frame(&mut self, e: &ParallaxFrameEvent) {
        let _ = match e.pose {
            Some(pose) => writeln!(
                self.writer,
                "[parallax] progress={:.3} rotateX={:.2}deg translateY={:.1}px opacity={:.3}",
                e.progress, pose.rotate_x_deg, pose.translate_y_px, pose.opacity,
            ),
            None => writeln!(
                self.writer,
                "[parallax] progress={:.3} out of range",
                e.progress,
            ),
        };
    }

    fn on_media_transition(&mut self, e: &MediaTransitionEvent) {
        let _ = writeln!(
            self.writer,
            "[media] {} {} -> {}",
            cause_name(e.cause),
            e.from.as_str(),
            e.to.as_str(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use koppek_core::media::{MediaState, ReadyState};
    use koppek_core::time::{Remaining, WallTime};

    fn output(sink: PrettyPrintSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn pretty_print_tick() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_countdown_tick(&CountdownTickEvent {
            now: WallTime(1_000),
            remaining: Some(Remaining(90_061_000)),
            changed_slots: 4,
        });
        let output = output(sink);
        assert!(output.contains("[countdown]"), "got: {output}");
        assert!(output.contains("left=1d 01h 01m 01s"), "got: {output}");
        assert!(!output.contains("EXPIRED"), "got: {output}");
    }

    #[test]
    fn pretty_print_expired_tick() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_countdown_tick(&CountdownTickEvent {
            now: WallTime(1_000),
            remaining: None,
            changed_slots: 0,
        });
        let output = output(sink);
        assert!(output.contains("left=0d 00h 00m 00s"), "got: {output}");
        assert!(output.contains("EXPIRED"), "got: {output}");
    }

    #[test]
    fn pretty_print_media_timeout() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_media_transition(&MediaTransitionEvent {
            cause: MediaEvent::Timeout(ReadyState::HaveNothing),
            from: MediaState::Pending,
            to: MediaState::FallbackShown,
        });
        let output = output(sink);
        assert_eq!(output, "[media] timeout(HaveNothing) pending -> fallback\n");
    }
}
