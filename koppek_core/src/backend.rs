// Copyright 2026 the KoppeK Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for platform integrations.
//!
//! The page behaviors in this crate never touch a document. A backend crate
//! supplies the platform pieces around them:
//!
//! - **Clock**: a `now() -> WallTime` free function reading wall-clock time.
//!
//! - **Tick sources**: a periodic timer for the countdown, a one-shot timer
//!   for the media readiness check, and an animation-frame request for the
//!   parallax. These are backend-specific and not abstracted by a trait.
//!
//! - **Intersection observation**: delivers batches of
//!   [`IntersectionEntry`] values for the elements registered with an
//!   [`IntersectionConfig`].
//!
//! - **Presenter**: implements the [`Presenter`] trait to apply a
//!   [`DomPatch`] to the live page.
//!
//! # Crate boundaries
//!
//! `koppek_core` owns the decision logic, the patch model, and this contract
//! module. Backend crates depend on `koppek_core` and provide platform glue.
//! The page crate depends on both and wires them together.
//!
//! [`IntersectionEntry`]: crate::intersection::IntersectionEntry
//! [`IntersectionConfig`]: crate::intersection::IntersectionConfig

use crate::patch::DomPatch;

/// Applies a [`DomPatch`] to a platform-native document.
///
/// The browser presenter implements this trait; tests use recording doubles.
///
/// # Callback pseudocode
///
/// A typical countdown tick wires the pieces together like this:
///
/// ```rust,ignore
/// fn on_tick() {
///     // Decide: pure logic turns the clock reading into a patch.
///     let update = countdown.tick(now());
///
///     // Present: apply the DOM writes.
///     presenter.apply(&update.patch);
///
///     // Trace: report what happened.
///     tracer.countdown_tick(&CountdownTickEvent::from(&update));
/// }
/// ```
pub trait Presenter {
    /// Applies every operation in `patch`, in order.
    fn apply(&mut self, patch: &DomPatch);
}
