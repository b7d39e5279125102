// Copyright 2026 the KoppeK Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser console trace output.
//!
//! [`ConsoleSink`] implements [`TraceSink`] and writes one line per event to
//! the devtools console. Skipped behaviors go to `console.warn`, everything
//! else to `console.log`. Countdown ticks that changed nothing are not
//! logged.

use alloc::format;
use alloc::string::String;

use koppek_core::trace::{
    BehaviorEvent, CountdownTickEvent, InstallStatus, MediaTransitionEvent, ParallaxFrameEvent,
    PreviewEvent, RevealEvent, SkipReason, TraceSink,
};
use web_sys::console;

/// Logs trace events to the browser console.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink {
    /// Also log parallax frames (one line per animation frame while
    /// scrolling).
    pub frames: bool,
}

impl TraceSink for ConsoleSink {
    fn on_behavior(&mut self, e: &BehaviorEvent) {
        let line = behavior_line(e);
        match e.status {
            InstallStatus::Installed(_) => console::log_1(&line.into()),
            InstallStatus::Skipped(_) => console::warn_1(&line.into()),
        }
    }

    fn on_countdown_tick(&mut self, e: &CountdownTickEvent) {
        if e.changed_slots == 0 {
            return;
        }
        let line = match e.remaining {
            Some(r) => format!(
                "[koppek:countdown] {}ms left, {} slot(s) redrawn",
                r.millis(),
                e.changed_slots
            ),
            None => String::from("[koppek:countdown] launched"),
        };
        console::log_1(&line.into());
    }

    fn on_reveal(&mut self, e: &RevealEvent) {
        console::log_1(
            &format!(
                "[koppek:reveal] #{} visible ({}/{})",
                e.index, e.revealed, e.total
            )
            .into(),
        );
    }

    fn on_preview(&mut self, e: &PreviewEvent) {
        if !e.changed {
            return;
        }
        console::log_1(
            &format!(
                "[koppek:preview] in-view={} at ratio {:.2}",
                e.in_view, e.ratio
            )
            .into(),
        );
    }

    fn on_parallax_frame(&mut self, e: &ParallaxFrameEvent) {
        if !self.frames {
            return;
        }
        console::log_1(&format!("[koppek:parallax] progress {:.3}", e.progress).into());
    }

    fn on_media_transition(&mut self, e: &MediaTransitionEvent) {
        console::log_1(
            &format!(
                "[koppek:media] {:?}: {} -> {}",
                e.cause,
                e.from.as_str(),
                e.to.as_str()
            )
            .into(),
        );
    }
}

fn behavior_line(e: &BehaviorEvent) -> String {
    let name = e.behavior.as_str();
    match e.status {
        InstallStatus::Installed(n) => format!("[koppek:{name}] installed ({n} element(s))"),
        InstallStatus::Skipped(SkipReason::MissingElement(id)) => {
            format!("[koppek:{name}] skipped: #{id} not found")
        }
        InstallStatus::Skipped(SkipReason::ReducedMotion) => {
            format!("[koppek:{name}] skipped: reduced motion requested")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use koppek_core::trace::Behavior;

    #[test]
    fn behavior_lines() {
        let installed = BehaviorEvent {
            behavior: Behavior::Reveal,
            status: InstallStatus::Installed(6),
        };
        assert_eq!(
            behavior_line(&installed),
            "[koppek:reveal] installed (6 element(s))"
        );

        let missing = BehaviorEvent {
            behavior: Behavior::MediaFallback,
            status: InstallStatus::Skipped(SkipReason::MissingElement("logoVideo")),
        };
        assert_eq!(
            behavior_line(&missing),
            "[koppek:media] skipped: #logoVideo not found"
        );
    }
}
