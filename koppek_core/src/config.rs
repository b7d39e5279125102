// Copyright 2026 the KoppeK Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page configuration.
//!
//! [`LandingConfig`] collects every constant the behaviors depend on: the
//! launch date, element ids and class names, observer options, the preview
//! hysteresis band, parallax coefficients and the media timeout.
//! [`LandingConfig::koppek`] is the preset the landing page ships with.

use crate::intersection::{IntersectionConfig, MarginLength, RootMargin};
use crate::time::LaunchDate;

/// Ids of the elements the page script looks up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElementIds {
    /// Days slot. Required.
    pub days: &'static str,
    /// Hours slot. Required.
    pub hours: &'static str,
    /// Minutes slot. Required.
    pub minutes: &'static str,
    /// Seconds slot. Required.
    pub seconds: &'static str,
    /// App preview (in-view marker and parallax).
    pub preview: &'static str,
    /// Logo video.
    pub video: &'static str,
    /// Static logo fallback.
    pub fallback: &'static str,
}

/// Countdown settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountdownConfig {
    /// Instant the countdown runs to, in local time.
    pub launch: LaunchDate,
    /// Period of the display refresh, in milliseconds.
    pub tick_ms: u32,
    /// Peak scale of the change pulse.
    pub pulse_scale: f64,
    /// Delay before the pulse scales back down, in milliseconds.
    pub pulse_ms: u32,
    /// Class carried by every countdown number element.
    pub value_class: &'static str,
    /// Transition installed on those elements so the pulse animates.
    pub value_transition: &'static str,
}

/// Reveal-on-scroll settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    /// Class that marks an element as revealable.
    pub reveal_class: &'static str,
    /// Class added once the element has been seen.
    pub visible_class: &'static str,
    /// Observer options.
    pub observer: IntersectionConfig,
}

/// Preview in-view settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreviewConfig {
    /// Class toggled on the preview.
    pub in_view_class: &'static str,
    /// Visible ratio above which the class is added.
    pub show_above: f64,
    /// Visible ratio below which the class is removed.
    pub hide_below: f64,
    /// Observer options.
    pub observer: IntersectionConfig,
}

/// Parallax coefficients.
///
/// For progress `p`: `rotateX = max(0, rotate_start - p * rotate_span)`,
/// `translateY = max(0, translate_start - p * translate_span)`,
/// `opacity = min(1, opacity_start + p * opacity_span)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxConfig {
    /// Tilt at progress 0, in degrees.
    pub rotate_start_deg: f64,
    /// Tilt removed over the full travel, in degrees.
    pub rotate_span_deg: f64,
    /// Lift at progress 0, in pixels.
    pub translate_start_px: f64,
    /// Lift removed over the full travel, in pixels.
    pub translate_span_px: f64,
    /// Opacity at progress 0.
    pub opacity_start: f64,
    /// Opacity gained over the full travel.
    pub opacity_span: f64,
    /// Media query that disables the parallax when it matches.
    pub reduced_motion_query: &'static str,
}

/// Media fallback settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MediaConfig {
    /// How long the video gets to start loading, in milliseconds.
    pub readiness_timeout_ms: u32,
}

/// Everything the page behaviors need.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LandingConfig {
    /// Element ids.
    pub ids: ElementIds,
    /// Countdown settings.
    pub countdown: CountdownConfig,
    /// Reveal settings.
    pub reveal: RevealConfig,
    /// Preview in-view settings.
    pub preview: PreviewConfig,
    /// Parallax coefficients.
    pub parallax: ParallaxConfig,
    /// Media fallback settings.
    pub media: MediaConfig,
}

impl LandingConfig {
    /// The KoppeK launch page: counts down to December 24, 2025 at local
    /// midnight.
    #[must_use]
    pub const fn koppek() -> Self {
        Self {
            ids: ElementIds {
                days: "days",
                hours: "hours",
                minutes: "minutes",
                seconds: "seconds",
                preview: "appPreview",
                video: "logoVideo",
                fallback: "logoFallback",
            },
            countdown: CountdownConfig {
                launch: LaunchDate::new(2025, 12, 24, 0),
                tick_ms: 1_000,
                pulse_scale: 1.1,
                pulse_ms: 100,
                value_class: "countdown-value",
                value_transition: "transform 0.1s ease-out",
            },
            reveal: RevealConfig {
                reveal_class: "reveal",
                visible_class: "visible",
                observer: IntersectionConfig {
                    root_margin: RootMargin::ZERO,
                    thresholds: &[0.15],
                },
            },
            preview: PreviewConfig {
                in_view_class: "in-view",
                show_above: 0.25,
                hide_below: 0.10,
                observer: IntersectionConfig {
                    root_margin: RootMargin::symmetric(
                        MarginLength::Percent(-10.0),
                        MarginLength::ZERO,
                    ),
                    thresholds: &[0.0, 0.25, 0.5, 0.75, 1.0],
                },
            },
            parallax: ParallaxConfig {
                rotate_start_deg: 10.0,
                rotate_span_deg: 15.0,
                translate_start_px: 50.0,
                translate_span_px: 70.0,
                opacity_start: 0.5,
                opacity_span: 0.5,
                reduced_motion_query: "(prefers-reduced-motion: reduce)",
            },
            media: MediaConfig {
                readiness_timeout_ms: 3_000,
            },
        }
    }
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self::koppek()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_observer_options() {
        let cfg = LandingConfig::koppek();
        assert_eq!(cfg.reveal.observer.root_margin.to_css(), "0px");
        assert_eq!(cfg.reveal.observer.thresholds, &[0.15]);
        assert_eq!(
            cfg.preview.observer.root_margin.to_css(),
            "-10% 0px -10% 0px"
        );
        assert_eq!(cfg.preview.observer.thresholds.len(), 5);
    }

    #[test]
    fn preview_band_is_ordered() {
        let cfg = LandingConfig::default();
        assert!(
            cfg.preview.hide_below < cfg.preview.show_above,
            "hysteresis band must be non-empty"
        );
    }
}
