// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `matchMedia` and `IntersectionObserver` sources.

use alloc::boxed::Box;

use js_sys::Array;
use vitrine_core::subscription::{MediaPreference, Subscription, VisibilitySource};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    Event, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    MediaQueryList, MediaQueryListEvent, Window,
};

use crate::element::DomElement;
use crate::events::listen;

/// A live `window.matchMedia` query.
#[derive(Clone, Debug)]
pub struct MediaQuery(MediaQueryList);

impl MediaQuery {
    /// Evaluates `query` in `window`. Returns `None` if the browser rejects
    /// the query.
    #[must_use]
    pub fn new(window: &Window, query: &str) -> Option<Self> {
        window.match_media(query).ok().flatten().map(Self)
    }

    /// Returns whether `query` matches right now; `false` if it cannot be
    /// evaluated.
    #[must_use]
    pub fn snapshot(window: &Window, query: &str) -> bool {
        Self::new(window, query).is_some_and(|q| q.matches())
    }
}

impl MediaPreference for MediaQuery {
    fn matches(&self) -> bool {
        self.0.matches()
    }

    fn subscribe(&self, mut on_change: Box<dyn FnMut(bool)>) -> Subscription {
        listen(&self.0, "change", move |event: Event| {
            if let Some(event) = event.dyn_ref::<MediaQueryListEvent>() {
                on_change(event.matches());
            }
        })
    }
}

type ObserverClosure = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Viewport visibility through one `IntersectionObserver` per target.
///
/// Reports `true` when the target intersects the viewport at or above the
/// requested threshold and `false` when it leaves.
#[derive(Clone, Copy, Debug, Default)]
pub struct Intersections;

impl VisibilitySource<DomElement> for Intersections {
    fn observe(
        &self,
        target: &DomElement,
        threshold: f64,
        mut on_change: Box<dyn FnMut(bool)>,
    ) -> Subscription {
        let closure: ObserverClosure = Closure::wrap(Box::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    on_change(entry.is_intersecting());
                }
            },
        )
            as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let Ok(observer) =
            IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
        else {
            return Subscription::empty();
        };
        observer.observe(target.as_element());

        Subscription::new(move || {
            observer.disconnect();
            drop(closure);
        })
    }
}
