// Copyright 2026 the KoppeK Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for the KoppeK landing page.
//!
//! This crate connects the state machines in `koppek_core` to browser APIs:
//!
//! - [`DomPresenter`]: applies [`DomPatch`]es to page elements
//! - [`Interval`] and [`timer::fire_once`]: `setInterval` / `setTimeout`
//! - [`IntersectionWatcher`]: `IntersectionObserver` over a fixed element list
//! - [`ThrottledFrame`]: one `requestAnimationFrame` callback per burst
//! - [`ConsoleSink`]: trace events to the devtools console
//!
//! [`DomPatch`]: koppek_core::patch::DomPatch

#![no_std]

extern crate alloc;

mod console;
mod observer;
pub mod page;
mod presenter;
mod raf;
pub mod timer;

pub use console::ConsoleSink;
pub use koppek_core::backend::Presenter;
pub use observer::IntersectionWatcher;
pub use presenter::{DomPresenter, PageElements};
pub use raf::ThrottledFrame;
pub use timer::Interval;

use koppek_core::time::{LaunchDate, WallTime};
use kurbo::Rect;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

/// Returns the current wall-clock time from `Date.now()`.
#[must_use]
pub fn now() -> WallTime {
    WallTime::from_js_millis(js_sys::Date::now())
}

/// Resolves `date` to an instant in the browser's local time zone.
#[must_use]
pub fn resolve_launch(date: LaunchDate) -> WallTime {
    let resolved = js_sys::Date::new_with_year_month_day_hr_min_sec(
        date.year.unsigned_abs(),
        i32::from(date.month_index()),
        i32::from(date.day),
        i32::from(date.hour),
        0,
        0,
    );
    WallTime::from_js_millis(resolved.get_time())
}

/// The global `window`.
pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

/// The page's `document`.
pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))
}

/// Runs `f` once the document has been parsed.
///
/// If parsing is already done, `f` runs immediately; otherwise it runs on
/// `DOMContentLoaded`.
pub fn on_ready(f: impl FnOnce() + 'static) -> Result<(), JsValue> {
    let doc = document()?;
    if is_loading(&doc.ready_state()) {
        let js = wasm_bindgen::closure::Closure::once_into_js(f);
        doc.add_event_listener_with_callback("DOMContentLoaded", js.unchecked_ref())?;
    } else {
        f();
    }
    Ok(())
}

/// Returns `true` if the user asked for reduced motion via `query`.
///
/// Browsers without `matchMedia` report `false`.
#[must_use]
pub fn prefers_reduced_motion(query: &str) -> bool {
    window()
        .ok()
        .and_then(|w| w.match_media(query).ok().flatten())
        .is_some_and(|list| list.matches())
}

/// The viewport height in CSS pixels, or `0.0` if unavailable.
#[must_use]
pub fn viewport_height() -> f64 {
    window()
        .ok()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// The element's bounding box relative to the viewport.
#[must_use]
pub fn bounding_rect(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.right(), r.bottom())
}

fn is_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_loading_defers() {
        assert!(is_loading("loading"));
        assert!(!is_loading("interactive"));
        assert!(!is_loading("complete"));
    }
}
