// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot DOM lookup.
//!
//! Every element the page behaviors touch is queried once, when the page
//! starts, and handed to the core as a typed [`PageBindings`]. Controllers
//! never query the document themselves.

use alloc::vec::Vec;
use core::fmt;

use vitrine_core::carousel::Bindings;
use wasm_bindgen::JsCast as _;
use web_sys::{Document, Window};

use crate::element::DomElement;

/// CSS selectors for every element the page behaviors use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selectors {
    /// Carousel track (translated element).
    pub track: &'static str,
    /// Carousel slides, in display order.
    pub slides: &'static str,
    /// Carousel indicators, in slide order.
    pub indicators: &'static str,
    /// Navigation-menu links.
    pub nav_links: &'static str,
    /// "Previous" button.
    pub prev_button: &'static str,
    /// "Next" button.
    pub next_button: &'static str,
    /// Region whose hover and focus pause autoplay.
    pub container: &'static str,
    /// Theme toggle control.
    pub theme_toggle: &'static str,
    /// Page header receiving the scroll shadow.
    pub header: &'static str,
    /// Videos with visibility-driven playback.
    pub videos: &'static str,
}

impl Selectors {
    /// Selectors used by the landing page markup.
    #[must_use]
    pub const fn landing() -> Self {
        Self {
            track: "#carouselTrack",
            slides: ".carousel-slide",
            indicators: ".indicator",
            nav_links: ".nav-link",
            prev_button: ".carousel-btn-prev",
            next_button: ".carousel-btn-next",
            container: ".carousel-container",
            theme_toggle: "#themeToggle",
            header: "#header",
            videos: "video",
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self::landing()
    }
}

/// The ways page setup can fail outright.
///
/// Everything else (missing buttons, no header, zero slides) only disables
/// the matching feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindError {
    /// No global `window` (not running in a browser main thread).
    NoWindow,
    /// The window has no document.
    NoDocument,
    /// The document has no root element.
    NoRootElement,
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => f.write_str("no global window"),
            Self::NoDocument => f.write_str("window has no document"),
            Self::NoRootElement => f.write_str("document has no root element"),
        }
    }
}

impl core::error::Error for BindError {}

impl From<BindError> for wasm_bindgen::JsValue {
    fn from(err: BindError) -> Self {
        js_sys::Error::new(&alloc::format!("{err}")).into()
    }
}

/// Every element of the page, looked up once.
#[derive(Clone, Debug)]
pub struct PageBindings {
    /// The window the page runs in.
    pub window: Window,
    /// The page document.
    pub document: Document,
    /// `<html>`, which carries the theme attribute.
    pub root: DomElement,
    /// Carousel elements.
    pub carousel: Bindings<DomElement>,
    /// Hover / focus region of the carousel.
    pub container: Option<DomElement>,
    /// Theme toggle control.
    pub theme_toggle: Option<DomElement>,
    /// Page header.
    pub header: Option<DomElement>,
    /// Videos, in document order.
    pub videos: Vec<DomElement>,
}

impl PageBindings {
    /// Queries the current window's document.
    pub fn query(selectors: &Selectors) -> Result<Self, BindError> {
        let window = web_sys::window().ok_or(BindError::NoWindow)?;
        let document = window.document().ok_or(BindError::NoDocument)?;
        Self::query_in(window, document, selectors)
    }

    /// Queries `document`. Invalid selectors match nothing.
    pub fn query_in(
        window: Window,
        document: Document,
        selectors: &Selectors,
    ) -> Result<Self, BindError> {
        let root = document
            .document_element()
            .map(DomElement::new)
            .ok_or(BindError::NoRootElement)?;
        let one = |selector: &str| {
            document
                .query_selector(selector)
                .ok()
                .flatten()
                .map(DomElement::new)
        };
        let all = |selector: &str| query_all(&document, selector);

        let carousel = Bindings {
            track: one(selectors.track),
            slides: all(selectors.slides),
            indicators: all(selectors.indicators),
            nav_links: all(selectors.nav_links),
            prev_button: one(selectors.prev_button),
            next_button: one(selectors.next_button),
        };
        let container = one(selectors.container);
        let theme_toggle = one(selectors.theme_toggle);
        let header = one(selectors.header);
        let videos = all(selectors.videos);

        Ok(Self {
            window,
            document,
            root,
            carousel,
            container,
            theme_toggle,
            header,
            videos,
        })
    }
}

fn query_all(document: &Document, selector: &str) -> Vec<DomElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .map(DomElement::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn landing_selectors_are_the_default() {
        let selectors = Selectors::default();
        assert_eq!(selectors, Selectors::landing());
        assert_eq!(selectors.track, "#carouselTrack");
        assert_eq!(selectors.theme_toggle, "#themeToggle");
        assert_eq!(selectors.videos, "video");
    }

    #[test]
    fn bind_errors_read_as_sentences() {
        assert_eq!(BindError::NoWindow.to_string(), "no global window");
        assert_eq!(
            BindError::NoRootElement.to_string(),
            "document has no root element"
        );
    }
}
