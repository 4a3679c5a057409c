// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM event listeners as [`Subscription`]s.

use alloc::boxed::Box;

use kurbo::Point;
use vitrine_core::subscription::Subscription;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget, TouchEvent};

/// Adds `handler` for `kind` events on `target`.
///
/// The listener stays registered until the returned subscription is
/// dropped or unsubscribed; call [`Subscription::detach`] for listeners
/// that live as long as the page. Registration failures yield an empty
/// subscription.
pub fn listen(
    target: &EventTarget,
    kind: &'static str,
    handler: impl FnMut(Event) + 'static,
) -> Subscription {
    add_listener(target, kind, Box::new(handler), false)
}

/// Like [`listen`], but registers a passive listener (the handler never
/// calls `preventDefault`), as scroll and touch handlers should.
pub fn listen_passive(
    target: &EventTarget,
    kind: &'static str,
    handler: impl FnMut(Event) + 'static,
) -> Subscription {
    add_listener(target, kind, Box::new(handler), true)
}

fn add_listener(
    target: &EventTarget,
    kind: &'static str,
    handler: Box<dyn FnMut(Event)>,
    passive: bool,
) -> Subscription {
    let closure = Closure::wrap(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    let added = target.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref(),
        &options,
    );
    if added.is_err() {
        return Subscription::empty();
    }
    let target = target.clone();
    Subscription::new(move || {
        let _ = target.remove_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    })
}

/// Returns the screen position of the first changed touch of `event`.
#[must_use]
pub fn touch_point(event: &Event) -> Option<Point> {
    let touch = event.dyn_ref::<TouchEvent>()?.changed_touches().get(0)?;
    Some(Point::new(
        f64::from(touch.screen_x()),
        f64::from(touch.screen_y()),
    ))
}
