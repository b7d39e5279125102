// Copyright 2026 the KoppeK Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logo video with a static fallback.
//!
//! [`MediaFallback`] starts [`Pending`](MediaState::Pending) and reacts to
//! three inputs:
//!
//! - an error event hides the video and shows the fallback, at any time;
//! - a data-loaded event shows the video and hides the fallback, at any time,
//!   including after a fallback was shown;
//! - the one-shot readiness timeout shows the fallback if the video has not
//!   started loading at all ([`ReadyState::HaveNothing`]).
//!
//! Neither outcome is terminal: a late data-loaded event still brings the
//! video back after an error or timeout.

use crate::patch::{Display, DomPatch, PatchOp, Target};

/// `HTMLMediaElement.readyState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReadyState {
    /// No information about the media resource (0).
    HaveNothing,
    /// Metadata loaded (1).
    HaveMetadata,
    /// Data for the current position (2).
    HaveCurrentData,
    /// Data for the current position and a little beyond (3).
    HaveFutureData,
    /// Enough data to play through (4).
    HaveEnoughData,
}

impl ReadyState {
    /// Converts the raw DOM value. Values above 4 are treated as
    /// [`HaveEnoughData`](Self::HaveEnoughData).
    #[must_use]
    pub const fn from_raw(raw: u16) -> Self {
        match raw {
            0 => Self::HaveNothing,
            1 => Self::HaveMetadata,
            2 => Self::HaveCurrentData,
            3 => Self::HaveFutureData,
            _ => Self::HaveEnoughData,
        }
    }
}

/// Something that happened to the video.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaEvent {
    /// The `error` event fired.
    Error,
    /// The `loadeddata` event fired.
    LoadedData,
    /// The readiness timeout elapsed; carries the ready state at that moment.
    Timeout(ReadyState),
}

/// Which of the two elements is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaState {
    /// Nothing decided yet; the page's own styles apply.
    Pending,
    /// Video visible, fallback hidden.
    MediaShown,
    /// Video hidden, fallback visible.
    FallbackShown,
}

impl MediaState {
    /// Short lowercase name for log lines: `pending`, `video` or `fallback`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::MediaShown => "video",
            Self::FallbackShown => "fallback",
        }
    }
}

/// A state change and the DOM writes that realize it.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaTransition {
    /// What caused it.
    pub cause: MediaEvent,
    /// State before.
    pub from: MediaState,
    /// State after.
    pub to: MediaState,
    /// Display writes for the video and fallback.
    pub patch: DomPatch,
}

/// Video/fallback switcher.
#[derive(Clone, Copy, Debug)]
pub struct MediaFallback {
    state: MediaState,
}

impl Default for MediaFallback {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaFallback {
    /// A switcher in the [`Pending`](MediaState::Pending) state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: MediaState::Pending,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> MediaState {
        self.state
    }

    /// Reacts to `event`. Returns `None` when the event changes nothing (a
    /// timeout after the video began loading).
    pub fn handle(&mut self, event: MediaEvent) -> Option<MediaTransition> {
        let to = match event {
            MediaEvent::Error => MediaState::FallbackShown,
            MediaEvent::LoadedData => MediaState::MediaShown,
            MediaEvent::Timeout(ReadyState::HaveNothing) => MediaState::FallbackShown,
            MediaEvent::Timeout(_) => return None,
        };
        let from = self.state;
        self.state = to;
        Some(MediaTransition {
            cause: event,
            from,
            to,
            patch: show(to),
        })
    }
}

fn show(state: MediaState) -> DomPatch {
    let (video, fallback) = match state {
        MediaState::MediaShown => (Display::Block, Display::None),
        MediaState::FallbackShown => (Display::None, Display::Block),
        MediaState::Pending => return DomPatch::new(),
    };
    let mut patch = DomPatch::new();
    patch.push(PatchOp::SetDisplay {
        target: Target::Video,
        display: video,
    });
    patch.push(PatchOp::SetDisplay {
        target: Target::Fallback,
        display: fallback,
    });
    patch
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display_of(patch: &DomPatch, target: Target) -> Option<Display> {
        patch.iter().rev().find_map(|op| match op {
            PatchOp::SetDisplay { target: t, display } if *t == target => Some(*display),
            _ => None,
        })
    }

    #[test]
    fn state_names() {
        assert_eq!(MediaState::Pending.as_str(), "pending");
        assert_eq!(MediaState::MediaShown.as_str(), "video");
        assert_eq!(MediaState::FallbackShown.as_str(), "fallback");
    }

    #[test]
    fn error_shows_fallback() {
        let mut media = MediaFallback::new();
        let t = media.handle(MediaEvent::Error).expect("error always acts");
        assert_eq!((t.from, t.to), (MediaState::Pending, MediaState::FallbackShown));
        assert_eq!(display_of(&t.patch, Target::Video), Some(Display::None));
        assert_eq!(display_of(&t.patch, Target::Fallback), Some(Display::Block));
    }

    #[test]
    fn error_after_load_still_shows_fallback() {
        let mut media = MediaFallback::new();
        let _ = media.handle(MediaEvent::LoadedData);
        let t = media.handle(MediaEvent::Error).expect("error always acts");
        assert_eq!(t.from, MediaState::MediaShown);
        assert_eq!(media.state(), MediaState::FallbackShown);
    }

    #[test]
    fn timeout_without_data_forces_fallback() {
        let mut media = MediaFallback::new();
        let t = media
            .handle(MediaEvent::Timeout(ReadyState::from_raw(0)))
            .expect("nothing loaded");
        assert_eq!(t.to, MediaState::FallbackShown);
    }

    #[test]
    fn timeout_after_loading_started_is_a_no_op() {
        let mut media = MediaFallback::new();
        let _ = media.handle(MediaEvent::LoadedData);
        assert_eq!(
            media.handle(MediaEvent::Timeout(ReadyState::HaveEnoughData)),
            None
        );
        assert_eq!(media.state(), MediaState::MediaShown);

        let mut pending = MediaFallback::new();
        assert_eq!(
            pending.handle(MediaEvent::Timeout(ReadyState::HaveMetadata)),
            None,
            "metadata counts as started"
        );
        assert_eq!(pending.state(), MediaState::Pending);
    }

    #[test]
    fn load_after_timeout_fallback_shows_media_again() {
        let mut media = MediaFallback::new();
        let _ = media.handle(MediaEvent::Timeout(ReadyState::HaveNothing));
        let t = media.handle(MediaEvent::LoadedData).expect("no lockout");
        assert_eq!((t.from, t.to), (MediaState::FallbackShown, MediaState::MediaShown));
        assert_eq!(display_of(&t.patch, Target::Video), Some(Display::Block));
        assert_eq!(display_of(&t.patch, Target::Fallback), Some(Display::None));
    }

    #[test]
    fn ready_state_from_raw() {
        assert_eq!(ReadyState::from_raw(0), ReadyState::HaveNothing);
        assert_eq!(ReadyState::from_raw(3), ReadyState::HaveFutureData);
        assert_eq!(ReadyState::from_raw(9), ReadyState::HaveEnoughData);
    }
}
