// Copyright 2026 the KoppeK Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logo video fallback.

use alloc::rc::Rc;
use core::cell::RefCell;

use koppek_backend_web::{page, timer};
use koppek_core::config::{ElementIds, MediaConfig};
use koppek_core::media::{MediaEvent, MediaFallback, ReadyState};
use koppek_core::trace::{Behavior, MediaTransitionEvent, SkipReason};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::HtmlMediaElement;

use crate::Shared;

/// Switches between the logo video and its static fallback on `error`,
/// `loadeddata` and a one-shot readiness timeout.
pub(crate) fn install(
    shared: &Shared,
    ids: &'static ElementIds,
    config: &MediaConfig,
) -> Result<(), JsValue> {
    let (video, fallback_present) = {
        let presenter = shared.presenter.borrow();
        let elements = presenter.elements();
        (elements.video.clone(), elements.fallback.is_some())
    };
    let Some(video) = video.and_then(|v| v.dyn_into::<HtmlMediaElement>().ok()) else {
        shared.skipped(Behavior::MediaFallback, SkipReason::MissingElement(ids.video));
        return Ok(());
    };
    if !fallback_present {
        shared.skipped(
            Behavior::MediaFallback,
            SkipReason::MissingElement(ids.fallback),
        );
        return Ok(());
    }

    let state = Rc::new(RefCell::new(MediaFallback::new()));

    {
        let (shared, state) = (shared.clone(), Rc::clone(&state));
        page::listen(&video, "error", move || {
            react(&shared, &state, MediaEvent::Error);
        })?;
    }
    {
        let (shared, state) = (shared.clone(), Rc::clone(&state));
        page::listen(&video, "loadeddata", move || {
            react(&shared, &state, MediaEvent::LoadedData);
        })?;
    }
    {
        let shared = shared.clone();
        timer::fire_once(config.readiness_timeout_ms, move || {
            let ready = ReadyState::from_raw(video.ready_state());
            react(&shared, &state, MediaEvent::Timeout(ready));
        });
    }

    shared.installed(Behavior::MediaFallback, 2);
    Ok(())
}

fn react(shared: &Shared, state: &RefCell<MediaFallback>, event: MediaEvent) {
    let transition = state.borrow_mut().handle(event);
    if let Some(transition) = transition {
        shared.apply(&transition.patch);
        shared.trace(|t| t.media_transition(&MediaTransitionEvent::from(&transition)));
    }
}
