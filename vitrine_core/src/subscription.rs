// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observer subscriptions with explicit teardown.
//!
//! Platform observers (media queries, intersection observers, event
//! listeners) are exposed as subscribe calls that return a
//! [`Subscription`]. Dropping the subscription, or calling
//! [`unsubscribe`](Subscription::unsubscribe), detaches the callback
//! exactly once. Page-lifetime listeners call
//! [`detach`](Subscription::detach) instead.

use alloc::boxed::Box;
use core::fmt;

/// Handle that tears an observer down when dropped.
#[must_use = "dropping a Subscription immediately unsubscribes"]
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Creates a subscription that runs `teardown` on unsubscribe.
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    /// Creates a subscription with nothing to tear down.
    pub fn empty() -> Self {
        Self { teardown: None }
    }

    /// Detaches the observer now.
    pub fn unsubscribe(mut self) {
        self.run();
    }

    /// Keeps the observer attached for the rest of the program.
    ///
    /// The teardown, and every callback it owns, is leaked rather than
    /// dropped so that platform callbacks stay callable.
    pub fn detach(mut self) {
        if let Some(teardown) = self.teardown.take() {
            core::mem::forget(teardown);
        }
    }

    /// Returns `true` while the teardown has not run.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.teardown.is_some()
    }

    fn run(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// A boolean media query, such as `(prefers-color-scheme: dark)`.
pub trait MediaPreference {
    /// Returns whether the query matches right now.
    fn matches(&self) -> bool;

    /// Calls `on_change` with the new value each time the match flips.
    fn subscribe(&self, on_change: Box<dyn FnMut(bool)>) -> Subscription;
}

/// Reports whether elements are visible in the viewport.
pub trait VisibilitySource<E> {
    /// Starts observing `target`. `on_change` receives `true` once at least
    /// `threshold` (0.0–1.0) of the element is visible and `false` once it
    /// drops below.
    fn observe(
        &self,
        target: &E,
        threshold: f64,
        on_change: Box<dyn FnMut(bool)>,
    ) -> Subscription;
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use core::cell::Cell;

    use super::*;

    fn counting() -> (Rc<Cell<u32>>, Subscription) {
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        let sub = Subscription::new(move || c.set(c.get() + 1));
        (count, sub)
    }

    #[test]
    fn drop_runs_teardown_once() {
        let (count, sub) = counting();
        assert!(sub.is_active());
        drop(sub);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn unsubscribe_runs_teardown_once() {
        let (count, sub) = counting();
        sub.unsubscribe();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn detach_skips_teardown() {
        let (count, sub) = counting();
        sub.detach();
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn detach_keeps_captures_alive() {
        let listener = Rc::new(());
        let held = Rc::clone(&listener);
        let sub = Subscription::new(move || drop(held));
        sub.detach();
        assert_eq!(Rc::strong_count(&listener), 2);
    }

    #[test]
    fn empty_is_inactive() {
        assert!(!Subscription::empty().is_active());
    }
}
