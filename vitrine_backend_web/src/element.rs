// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`Element`] over live DOM nodes.

use alloc::string::String;

use vitrine_core::element::Element;
use wasm_bindgen::JsCast as _;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// A DOM element handle implementing the core [`Element`] contract.
///
/// Writes never fail from the caller's point of view: DOM exceptions are
/// discarded, and inline styles on elements that are not `HTMLElement`s
/// are skipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomElement(web_sys::Element);

impl DomElement {
    /// Wraps a DOM element.
    #[must_use]
    pub fn new(element: web_sys::Element) -> Self {
        Self(element)
    }

    /// Returns the wrapped element.
    #[must_use]
    pub fn as_element(&self) -> &web_sys::Element {
        &self.0
    }

    /// Downcasts to a more specific element interface.
    #[must_use]
    pub fn dyn_ref<T: wasm_bindgen::JsCast>(&self) -> Option<&T> {
        self.0.dyn_ref::<T>()
    }
}

impl From<web_sys::Element> for DomElement {
    fn from(element: web_sys::Element) -> Self {
        Self(element)
    }
}

impl Element for DomElement {
    fn id(&self) -> Option<String> {
        let id = self.0.id();
        (!id.is_empty()).then_some(id)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let _ = self.0.set_attribute(name, value);
    }

    fn remove_attribute(&self, name: &str) {
        let _ = self.0.remove_attribute(name);
    }

    fn toggle_class(&self, class: &str, on: bool) {
        let _ = self.0.class_list().toggle_with_force(class, on);
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Some(el) = self.0.dyn_ref::<HtmlElement>() {
            let _ = el.style().set_property(property, value);
        }
    }

    fn scroll_into_view(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Nearest);
        self.0.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
