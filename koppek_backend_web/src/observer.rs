// Copyright 2026 the KoppeK Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `IntersectionObserver` integration.
//!
//! [`IntersectionWatcher`] registers a fixed list of elements with one native
//! observer and reports each callback batch as [`IntersectionEntry`] values
//! whose `index` is the element's position in that list.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;

use js_sys::{Array, Object};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use koppek_core::intersection::{IntersectionConfig, IntersectionEntry};

type ObserverClosure = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// A native intersection observer over a fixed set of elements.
///
/// Dropping the watcher disconnects the observer; leak it with
/// [`core::mem::forget`] to keep it for the page lifetime.
pub struct IntersectionWatcher {
    observer: IntersectionObserver,
    targets: Rc<[Element]>,
    _closure: ObserverClosure,
}

impl IntersectionWatcher {
    /// Observes `targets` with `config`, calling `on_batch` with every
    /// callback's entries.
    ///
    /// Entries for elements that are not in `targets` are dropped.
    pub fn new(
        config: &IntersectionConfig,
        targets: Vec<Element>,
        mut on_batch: impl FnMut(&[IntersectionEntry]) + 'static,
    ) -> Result<Self, JsValue> {
        let targets: Rc<[Element]> = targets.into();

        let lookup = Rc::clone(&targets);
        let closure = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            let batch: Vec<IntersectionEntry> = entries
                .iter()
                .filter_map(|value| {
                    let entry: IntersectionObserverEntry = value.unchecked_into();
                    let target = entry.target();
                    let index = lookup
                        .iter()
                        .position(|el| Object::is(el.as_ref(), target.as_ref()))?;
                    Some(IntersectionEntry {
                        index: u32::try_from(index).ok()?,
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    })
                })
                .collect();
            if !batch.is_empty() {
                on_batch(&batch);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let observer =
            IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options(config))?;
        for el in targets.iter() {
            observer.observe(el);
        }

        Ok(Self {
            observer,
            targets,
            _closure: closure,
        })
    }

    /// Number of observed elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns `true` if nothing is observed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl Drop for IntersectionWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl core::fmt::Debug for IntersectionWatcher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IntersectionWatcher")
            .field("targets", &self.targets.len())
            .finish_non_exhaustive()
    }
}

/// Translates observer options to the native dictionary. The root is always
/// the viewport.
fn options(config: &IntersectionConfig) -> IntersectionObserverInit {
    let init = IntersectionObserverInit::new();
    init.set_root_margin(&config.root_margin.to_css());
    let thresholds: Array = config
        .thresholds
        .iter()
        .map(|&t| JsValue::from_f64(t))
        .collect();
    init.set_threshold(&thresholds);
    init
}
