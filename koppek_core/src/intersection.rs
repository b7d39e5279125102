// Copyright 2026 the KoppeK Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport-intersection configuration and entries.
//!
//! These mirror the shape of the platform's intersection facility without
//! depending on it: backends translate an [`IntersectionConfig`] into their
//! native observer options and report each callback batch as a slice of
//! [`IntersectionEntry`] values.

use alloc::format;
use alloc::string::String;
use core::fmt;

/// One side of a root margin.
#[derive(Clone, Copy, PartialEq)]
pub enum MarginLength {
    /// Absolute pixels.
    Px(f64),
    /// Percentage of the root's size along that axis.
    Percent(f64),
}

impl MarginLength {
    /// Zero pixels.
    pub const ZERO: Self = Self::Px(0.0);

    /// Returns the CSS length, e.g. `-10%` or `0px`.
    #[must_use]
    pub fn to_css(self) -> String {
        match self {
            Self::Px(v) => format!("{v}px"),
            Self::Percent(v) => format!("{v}%"),
        }
    }
}

impl fmt::Debug for MarginLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Grows (positive) or shrinks (negative) the viewport box before
/// intersections are computed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootMargin {
    /// Top edge.
    pub top: MarginLength,
    /// Right edge.
    pub right: MarginLength,
    /// Bottom edge.
    pub bottom: MarginLength,
    /// Left edge.
    pub left: MarginLength,
}

impl RootMargin {
    /// No adjustment.
    pub const ZERO: Self = Self::uniform(MarginLength::ZERO);

    /// The same length on every side.
    #[must_use]
    pub const fn uniform(len: MarginLength) -> Self {
        Self {
            top: len,
            right: len,
            bottom: len,
            left: len,
        }
    }

    /// `vertical` on top and bottom, `horizontal` on left and right.
    #[must_use]
    pub const fn symmetric(vertical: MarginLength, horizontal: MarginLength) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Returns the CSS margin shorthand. Uniform margins collapse to a single
    /// value.
    #[must_use]
    pub fn to_css(&self) -> String {
        if self.top == self.right && self.top == self.bottom && self.top == self.left {
            return self.top.to_css();
        }
        format!(
            "{} {} {} {}",
            self.top.to_css(),
            self.right.to_css(),
            self.bottom.to_css(),
            self.left.to_css()
        )
    }
}

/// Observer options.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionConfig {
    /// Adjustment applied to the viewport box.
    pub root_margin: RootMargin,
    /// Visible-ratio thresholds at which the platform reports a change.
    pub thresholds: &'static [f64],
}

/// One element's intersection state, as reported in a callback batch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionEntry {
    /// Index of the element among those registered with the same observer.
    pub index: u32,
    /// Whether the element currently overlaps the (adjusted) viewport.
    pub is_intersecting: bool,
    /// Visible fraction of the element, `0.0..=1.0`.
    pub ratio: f64,
}

impl IntersectionEntry {
    /// An entry for element `index` with the given visible ratio. Any
    /// positive ratio counts as intersecting.
    #[must_use]
    pub fn at_ratio(index: u32, ratio: f64) -> Self {
        Self {
            index,
            is_intersecting: ratio > 0.0,
            ratio,
        }
    }
}
