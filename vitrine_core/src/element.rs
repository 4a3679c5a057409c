// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element contract for platform integrations.
//!
//! The core never queries a document. Backends look elements up once and
//! hand them over as values implementing [`Element`]; everything the state
//! machines need from the page (reading an id or `href`, flipping a class,
//! writing an ARIA attribute or an inline style, scrolling into view) is a
//! method here.
//!
//! Methods take `&self` because platform element handles are shared
//! references to mutable host objects. Write failures are the backend's
//! concern: the core treats every write as fire-and-forget.

use alloc::string::String;

/// A handle to one element of the page.
///
/// Both the DOM backend and the [`testing`](crate::testing) doubles
/// implement this trait, so controllers can be exercised without a browser.
pub trait Element: Clone {
    /// Returns the element's `id`, or `None` when it has none (or it is empty).
    fn id(&self) -> Option<String>;

    /// Returns the value of the named attribute, if present.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Sets the named attribute.
    fn set_attribute(&self, name: &str, value: &str);

    /// Removes the named attribute. Removing an absent attribute is a no-op.
    fn remove_attribute(&self, name: &str);

    /// Adds `class` when `on` is true, removes it otherwise.
    fn toggle_class(&self, class: &str, on: bool);

    /// Sets an inline style property.
    fn set_style(&self, property: &str, value: &str);

    /// Smoothly scrolls the element into view, moving as little as possible.
    fn scroll_into_view(&self);
}
