// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic doubles for the platform traits.
//!
//! Every double is a cheap handle around shared state: clone one, hand the
//! clone to the code under test, and inspect or drive the original.
//!
//! - [`FakeElement`] records attributes, classes, inline styles, and how
//!   many writes and scrolls it received.
//! - [`VirtualTimer`] fires intervals only when time is advanced by hand.
//! - [`ManualPreference`] and [`ManualVisibility`] deliver media-query and
//!   intersection changes on demand.
//! - [`EventLog`] is a [`TraceSink`] that keeps every event.

use alloc::boxed::Box;
use alloc::collections::{BTreeMap, BTreeSet};
use alloc::rc::{Rc, Weak};
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::time::Duration;

use crate::autoplay::{IntervalTimer, TimerHandle};
use crate::element::Element;
use crate::storage::StorageError;
use crate::subscription::{MediaPreference, Subscription, VisibilitySource};
use crate::trace::{
    AutoplayEvent, ElevationEvent, SlideChangedEvent, StorageErrorEvent, ThemeEvent, TraceSink,
};

type Listener = Rc<RefCell<Box<dyn FnMut(bool)>>>;

// ---------------------------------------------------------------------------
// FakeElement
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct ElementState {
    attributes: BTreeMap<String, String>,
    classes: BTreeSet<String>,
    styles: BTreeMap<String, String>,
    writes: usize,
    scrolls: usize,
}

/// An in-memory [`Element`].
#[derive(Clone, Debug, Default)]
pub struct FakeElement(Rc<RefCell<ElementState>>);

impl FakeElement {
    /// Creates an element with no attributes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an element with the given `id`.
    #[must_use]
    pub fn with_id(id: &str) -> Self {
        Self::new().attr("id", id)
    }

    /// Sets an attribute without counting it as a write.
    #[must_use]
    pub fn attr(self, name: &str, value: &str) -> Self {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
        self
    }

    /// Returns an inline style property.
    #[must_use]
    pub fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().styles.get(property).cloned()
    }

    /// Returns `true` if the element carries `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.contains(class)
    }

    /// Number of attribute, class, and style writes received.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.0.borrow().writes
    }

    /// Number of [`scroll_into_view`](Element::scroll_into_view) calls.
    #[must_use]
    pub fn scroll_count(&self) -> usize {
        self.0.borrow().scrolls
    }
}

impl Element for FakeElement {
    fn id(&self) -> Option<String> {
        self.attribute("id").filter(|id| !id.is_empty())
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let mut state = self.0.borrow_mut();
        state.writes += 1;
        state
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&self, name: &str) {
        let mut state = self.0.borrow_mut();
        state.writes += 1;
        state.attributes.remove(name);
    }

    fn toggle_class(&self, class: &str, on: bool) {
        let mut state = self.0.borrow_mut();
        state.writes += 1;
        if on {
            state.classes.insert(class.to_string());
        } else {
            state.classes.remove(class);
        }
    }

    fn set_style(&self, property: &str, value: &str) {
        let mut state = self.0.borrow_mut();
        state.writes += 1;
        state
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn scroll_into_view(&self) {
        self.0.borrow_mut().scrolls += 1;
    }
}

// ---------------------------------------------------------------------------
// VirtualTimer
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct Interval {
    period: Duration,
    due: Duration,
}

#[derive(Debug, Default)]
struct TimerState {
    now: Duration,
    next_id: u32,
    intervals: BTreeMap<u32, Interval>,
}

/// An [`IntervalTimer`] driven by [`advance`](Self::advance).
#[derive(Clone, Debug, Default)]
pub struct VirtualTimer(Rc<RefCell<TimerState>>);

impl VirtualTimer {
    /// Creates a timer at virtual time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves virtual time forward by `by` and returns the handle of every
    /// interval firing in that span, in firing order.
    ///
    /// Intervals due at the same instant fire in creation order.
    pub fn advance(&self, by: Duration) -> Vec<TimerHandle> {
        let mut state = self.0.borrow_mut();
        let end = state.now + by;
        let mut fired = Vec::new();
        loop {
            let next = state
                .intervals
                .iter()
                .filter(|(_, interval)| interval.due <= end)
                .min_by_key(|(id, interval)| (interval.due, **id))
                .map(|(id, interval)| (*id, interval.due));
            let Some((id, due)) = next else { break };
            state.now = due;
            if let Some(interval) = state.intervals.get_mut(&id) {
                interval.due += interval.period;
            }
            fired.push(TimerHandle(id));
        }
        state.now = end;
        fired
    }

    /// Number of live intervals.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.0.borrow().intervals.len()
    }
}

impl IntervalTimer for VirtualTimer {
    fn set_interval(&mut self, period: Duration) -> TimerHandle {
        let mut state = self.0.borrow_mut();
        let period = period.max(Duration::from_millis(1));
        state.next_id += 1;
        let id = state.next_id;
        let due = state.now + period;
        state.intervals.insert(id, Interval { period, due });
        TimerHandle(id)
    }

    fn clear_interval(&mut self, handle: TimerHandle) {
        self.0.borrow_mut().intervals.remove(&handle.0);
    }
}

// ---------------------------------------------------------------------------
// ManualPreference
// ---------------------------------------------------------------------------

#[derive(Default)]
struct PreferenceState {
    matches: bool,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// A [`MediaPreference`] flipped by hand.
#[derive(Clone, Default)]
pub struct ManualPreference(Rc<RefCell<PreferenceState>>);

impl core::fmt::Debug for ManualPreference {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let state = self.0.borrow();
        f.debug_struct("ManualPreference")
            .field("matches", &state.matches)
            .field("listeners", &state.listeners.len())
            .finish()
    }
}

impl ManualPreference {
    /// Creates a preference with the given initial match state.
    #[must_use]
    pub fn new(matches: bool) -> Self {
        let preference = Self::default();
        preference.0.borrow_mut().matches = matches;
        preference
    }

    /// Changes the match state and notifies every listener.
    ///
    /// Listeners are notified even if the value did not change, as a
    /// browser does for every `change` event.
    pub fn set(&self, matches: bool) {
        let listeners: Vec<Listener> = {
            let mut state = self.0.borrow_mut();
            state.matches = matches;
            state.listeners.iter().map(|(_, l)| Rc::clone(l)).collect()
        };
        for listener in listeners {
            (listener.borrow_mut())(matches);
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.0.borrow().listeners.len()
    }
}

impl MediaPreference for ManualPreference {
    fn matches(&self) -> bool {
        self.0.borrow().matches
    }

    fn subscribe(&self, on_change: Box<dyn FnMut(bool)>) -> Subscription {
        let id = {
            let mut state = self.0.borrow_mut();
            state.next_id += 1;
            let id = state.next_id;
            state.listeners.push((id, Rc::new(RefCell::new(on_change))));
            id
        };
        let weak: Weak<RefCell<PreferenceState>> = Rc::downgrade(&self.0);
        Subscription::new(move || {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().listeners.retain(|(l, _)| *l != id);
            }
        })
    }
}

// ---------------------------------------------------------------------------
// ManualVisibility
// ---------------------------------------------------------------------------

struct Observation {
    threshold: f64,
    listener: Option<Listener>,
}

#[derive(Default)]
struct VisibilityState {
    observations: Vec<Observation>,
}

/// A [`VisibilitySource`] whose intersection changes are emitted by hand.
///
/// Observations are addressed by registration order.
#[derive(Clone, Default)]
pub struct ManualVisibility(Rc<RefCell<VisibilityState>>);

impl core::fmt::Debug for ManualVisibility {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ManualVisibility")
            .field("observed", &self.observed_count())
            .finish_non_exhaustive()
    }
}

impl ManualVisibility {
    /// Creates a source with nothing observed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports observation `index` entering (`true`) or leaving the
    /// viewport. Ended observations ignore it.
    pub fn emit(&self, index: usize, visible: bool) {
        let listener = self
            .0
            .borrow()
            .observations
            .get(index)
            .and_then(|o| o.listener.clone());
        if let Some(listener) = listener {
            (listener.borrow_mut())(visible);
        }
    }

    /// Threshold requested by observation `index`.
    #[must_use]
    pub fn threshold_of(&self, index: usize) -> Option<f64> {
        self.0.borrow().observations.get(index).map(|o| o.threshold)
    }

    /// Number of observations still live.
    #[must_use]
    pub fn observed_count(&self) -> usize {
        self.0
            .borrow()
            .observations
            .iter()
            .filter(|o| o.listener.is_some())
            .count()
    }
}

impl<E> VisibilitySource<E> for ManualVisibility {
    fn observe(&self, target: &E, threshold: f64, on_change: Box<dyn FnMut(bool)>) -> Subscription {
        _ = target;
        let index = {
            let mut state = self.0.borrow_mut();
            state.observations.push(Observation {
                threshold,
                listener: Some(Rc::new(RefCell::new(on_change))),
            });
            state.observations.len() - 1
        };
        let weak = Rc::downgrade(&self.0);
        Subscription::new(move || {
            if let Some(state) = weak.upgrade()
                && let Some(observation) = state.borrow_mut().observations.get_mut(index)
            {
                observation.listener = None;
            }
        })
    }
}

// ---------------------------------------------------------------------------
// EventLog
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct Log {
    slides: Vec<SlideChangedEvent>,
    autoplay: Vec<AutoplayEvent>,
    themes: Vec<ThemeEvent>,
    elevations: Vec<ElevationEvent>,
    storage_errors: Vec<(String, StorageError)>,
}

/// A [`TraceSink`] that records every event for later inspection.
#[derive(Clone, Debug, Default)]
pub struct EventLog(Rc<RefCell<Log>>);

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Slide changes, oldest first.
    #[must_use]
    pub fn slides(&self) -> Vec<SlideChangedEvent> {
        self.0.borrow().slides.clone()
    }

    /// Autoplay transitions, oldest first.
    #[must_use]
    pub fn autoplay(&self) -> Vec<AutoplayEvent> {
        self.0.borrow().autoplay.clone()
    }

    /// Applied themes, oldest first.
    #[must_use]
    pub fn themes(&self) -> Vec<ThemeEvent> {
        self.0.borrow().themes.clone()
    }

    /// Elevation changes, oldest first.
    #[must_use]
    pub fn elevations(&self) -> Vec<ElevationEvent> {
        self.0.borrow().elevations.clone()
    }

    /// Failed storage writes as `(key, error)`, oldest first.
    #[must_use]
    pub fn storage_errors(&self) -> Vec<(String, StorageError)> {
        self.0.borrow().storage_errors.clone()
    }
}

impl TraceSink for EventLog {
    fn on_slide_changed(&mut self, e: &SlideChangedEvent) {
        self.0.borrow_mut().slides.push(*e);
    }

    fn on_autoplay(&mut self, e: &AutoplayEvent) {
        self.0.borrow_mut().autoplay.push(*e);
    }

    fn on_theme_applied(&mut self, e: &ThemeEvent) {
        self.0.borrow_mut().themes.push(*e);
    }

    fn on_elevation(&mut self, e: &ElevationEvent) {
        self.0.borrow_mut().elevations.push(*e);
    }

    fn on_storage_error(&mut self, e: &StorageErrorEvent<'_>) {
        self.0
            .borrow_mut()
            .storage_errors
            .push((e.key.to_string(), e.error.clone()));
    }
}

/// A store whose every operation fails, for exercising error paths.
#[derive(Clone, Copy, Debug, Default)]
pub struct FailingStore;

impl crate::storage::KeyValueStore for FailingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        _ = key;
        Err(StorageError::Rejected("access denied".to_string()))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        _ = (key, value);
        Err(StorageError::Rejected("quota exceeded".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn virtual_timer_fires_in_order() {
        let timer = VirtualTimer::new();
        let mut a = timer.clone();
        let fast = a.set_interval(Duration::from_millis(2));
        let slow = a.set_interval(Duration::from_millis(3));
        assert_eq!(
            timer.advance(Duration::from_millis(6)),
            [fast, slow, fast, fast, slow]
        );
        a.clear_interval(fast);
        assert_eq!(timer.advance(Duration::from_millis(3)), [slow]);
    }

    #[test]
    fn fake_element_counts_writes() {
        let e = FakeElement::with_id("x");
        assert_eq!(e.id().as_deref(), Some("x"));
        assert_eq!(e.write_count(), 0);
        e.toggle_class("active", true);
        e.set_style("transform", "none");
        assert!(e.has_class("active"));
        assert_eq!(e.write_count(), 2);
        assert_eq!(FakeElement::with_id("").id(), None);
    }

    #[test]
    fn manual_visibility_ends_on_drop() {
        let source = ManualVisibility::new();
        let hits = Rc::new(RefCell::new(0));
        let h = Rc::clone(&hits);
        let sub = VisibilitySource::<FakeElement>::observe(
            &source,
            &FakeElement::new(),
            0.5,
            Box::new(move |_| *h.borrow_mut() += 1),
        );
        source.emit(0, true);
        assert_eq!(source.observed_count(), 1);
        drop(sub);
        source.emit(0, true);
        assert_eq!(*hits.borrow(), 1);
        assert_eq!(source.observed_count(), 0);
    }
}
