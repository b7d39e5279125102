// Copyright 2026 the KoppeK Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure logic behind the KoppeK landing page effects.
//!
//! `koppek_core` decides *what* the page should look like; it never touches a
//! document. It is `no_std` compatible (with `alloc`), so the same logic runs
//! in the browser through `koppek_backend_web` and natively under test.
//!
//! # Architecture
//!
//! Every behavior follows the same callback shape:
//!
//! ```text
//!   Platform callback (timer, intersection batch, animation frame, media event)
//!       │
//!       ▼
//!   Countdown / RevealTracker / PreviewTracker / ParallaxPose / MediaFallback
//!       │
//!       ▼
//!   DomPatch ──► Presenter::apply()
//!       │
//!       ▼
//!   Tracer ──► TraceSink
//! ```
//!
//! **[`countdown`]**: Remaining-time decomposition and the four display
//! slots; only changed slots are rewritten and pulsed.
//!
//! **[`reveal`]**: One-way visibility marker for elements scrolled into
//! view.
//!
//! **[`preview`]**: In-view marker for the app preview with a hysteresis
//! band between the show and hide ratios.
//!
//! **[`parallax`]**: Scroll progress, the derived tilt/lift/fade pose, and
//! the [`FrameGate`](parallax::FrameGate) that keeps one frame request in
//! flight at most.
//!
//! **[`media`]**: Video/fallback switcher driven by error, data-loaded and
//! timeout events.
//!
//! **[`intersection`]**: Observer options and entries, independent of the
//! platform facility.
//!
//! **[`patch`]**: [`DomPatch`](patch::DomPatch) operations against named
//! targets.
//!
//! **[`backend`]**: The [`Presenter`](backend::Presenter) trait that
//! platform backends implement to apply patches.
//!
//! **[`config`]**: [`LandingConfig`](config::LandingConfig) and the preset
//! the page ships with.
//!
//! **[`time`]**: Wall-clock instants, the launch date, and remaining time.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types,
//! with zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod config;
pub mod countdown;
pub mod intersection;
pub mod media;
pub mod parallax;
pub mod patch;
pub mod preview;
pub mod reveal;
pub mod time;
pub mod trace;
