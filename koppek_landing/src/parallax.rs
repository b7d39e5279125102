// Copyright 2026 the KoppeK Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Preview parallax.

use koppek_backend_web::{ThrottledFrame, page};
use koppek_core::config::{ElementIds, ParallaxConfig};
use koppek_core::parallax::{ParallaxPose, progress};
use koppek_core::trace::{Behavior, ParallaxFrameEvent, SkipReason};
use wasm_bindgen::prelude::*;

use crate::Shared;

/// Tilts and fades the preview in as it scrolls through the viewport, at
/// most once per animation frame.
pub(crate) fn install(
    shared: &Shared,
    ids: &'static ElementIds,
    config: &'static ParallaxConfig,
) -> Result<(), JsValue> {
    if koppek_backend_web::prefers_reduced_motion(config.reduced_motion_query) {
        shared.skipped(Behavior::Parallax, SkipReason::ReducedMotion);
        return Ok(());
    }
    let preview = shared.presenter.borrow().elements().preview.clone();
    let Some(preview) = preview else {
        shared.skipped(Behavior::Parallax, SkipReason::MissingElement(ids.preview));
        return Ok(());
    };

    let frame_shared = shared.clone();
    let frame = ThrottledFrame::new(move |_timestamp_ms| {
        let p = progress(
            koppek_backend_web::viewport_height(),
            koppek_backend_web::bounding_rect(&preview),
        );
        let pose = ParallaxPose::at(p, config);
        if let Some(pose) = pose {
            frame_shared.apply(&pose.patch());
        }
        frame_shared.trace(|t| t.parallax_frame(&ParallaxFrameEvent { progress: p, pose }));
    });

    let window = koppek_backend_web::window()?;
    page::listen_passive(&window, "scroll", move || {
        frame.request();
    })?;

    shared.installed(Behavior::Parallax, 1);
    Ok(())
}
