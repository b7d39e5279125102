// Copyright 2026 the KoppeK Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Preview in-view marker.

use alloc::vec;

use koppek_backend_web::IntersectionWatcher;
use koppek_core::config::{ElementIds, PreviewConfig};
use koppek_core::patch::DomPatch;
use koppek_core::preview::PreviewTracker;
use koppek_core::trace::{Behavior, PreviewEvent, SkipReason};
use wasm_bindgen::prelude::*;

use crate::Shared;

/// Toggles the in-view class on the app preview as it crosses the
/// visibility thresholds.
pub(crate) fn install(
    shared: &Shared,
    ids: &'static ElementIds,
    config: &'static PreviewConfig,
) -> Result<(), JsValue> {
    let preview = shared.presenter.borrow().elements().preview.clone();
    let Some(preview) = preview else {
        shared.skipped(Behavior::Preview, SkipReason::MissingElement(ids.preview));
        return Ok(());
    };

    let mut tracker = PreviewTracker::new(config);
    tracker.seed(preview.class_list().contains(config.in_view_class));
    let batch_shared = shared.clone();
    let watcher = IntersectionWatcher::new(&config.observer, vec![preview.into()], move |entries| {
        for entry in entries {
            let op = tracker.observe(entry);
            let event = PreviewEvent {
                ratio: entry.ratio,
                is_intersecting: entry.is_intersecting,
                in_view: tracker.in_view(),
                changed: op.is_some(),
            };
            batch_shared.trace(|t| t.preview(&event));
            if let Some(op) = op {
                batch_shared.apply(&DomPatch::from(op));
            }
        }
    })?;
    core::mem::forget(watcher);

    shared.installed(Behavior::Preview, 1);
    Ok(())
}
