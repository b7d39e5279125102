// Copyright 2026 the KoppeK Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element lookup and event listener helpers.

use alloc::boxed::Box;
use alloc::format;
use alloc::vec::Vec;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Element, EventTarget, HtmlElement};

/// Looks up `id`, failing if it is missing or not an HTML element.
pub fn required_element(doc: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    optional_element(doc, id)
        .ok_or_else(|| JsValue::from_str(&format!("required element #{id} not found")))
}

/// Looks up `id`, returning `None` if it is missing or not an HTML element.
#[must_use]
pub fn optional_element(doc: &Document, id: &str) -> Option<HtmlElement> {
    doc.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

/// All elements carrying `class`, in document order.
pub fn elements_with_class(doc: &Document, class: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = doc.query_selector_all(&class_selector(class))?;
    let mut out = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            out.push(el);
        }
    }
    Ok(out)
}

/// Sets one inline style property on every element carrying `class`.
///
/// Returns the number of elements styled.
pub fn style_class(
    doc: &Document,
    class: &str,
    property: &str,
    value: &str,
) -> Result<u32, JsValue> {
    let mut styled = 0;
    for el in elements_with_class(doc, class)? {
        if let Some(el) = el.dyn_ref::<HtmlElement>() {
            el.style().set_property(property, value)?;
            styled += 1;
        }
    }
    Ok(styled)
}

/// Attaches `callback` to `event` on `target` for the page lifetime.
pub fn listen(
    target: &EventTarget,
    event: &str,
    callback: impl FnMut() + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Like [`listen`], but registers a passive listener, so the browser never
/// waits on it before scrolling.
pub fn listen_passive(
    target: &EventTarget,
    event: &str,
    callback: impl FnMut() + 'static,
) -> Result<(), JsValue> {
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

fn class_selector(class: &str) -> alloc::string::String {
    format!(".{class}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_selector_prefixes_dot() {
        assert_eq!(class_selector("reveal"), ".reveal");
        assert_eq!(class_selector("countdown-value"), ".countdown-value");
    }
}
