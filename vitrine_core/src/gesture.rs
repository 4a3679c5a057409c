// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal swipe recognition.

use kurbo::Point;

/// Direction of a recognized swipe, expressed as the carousel step it maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Swipe {
    /// Finger moved left: show the next slide.
    Next,
    /// Finger moved right: show the previous slide.
    Prev,
}

/// Tracks one touch gesture from start to release.
///
/// Only horizontal travel matters. A drag whose horizontal distance is
/// strictly greater than the threshold is a swipe; anything shorter,
/// including a tap, is not.
#[derive(Clone, Copy, Debug)]
pub struct SwipeRecognizer {
    threshold: f64,
    start: Option<Point>,
}

impl SwipeRecognizer {
    /// Creates a recognizer with the given threshold in CSS pixels.
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self {
            threshold,
            start: None,
        }
    }

    /// Records where the gesture started.
    pub fn begin(&mut self, at: Point) {
        self.start = Some(at);
    }

    /// Finishes the gesture at `at`.
    ///
    /// Returns `None` for short drags and for releases without a matching
    /// [`begin`](Self::begin).
    pub fn end(&mut self, at: Point) -> Option<Swipe> {
        let start = self.start.take()?;
        let delta = start.x - at.x;
        if delta.abs() <= self.threshold {
            return None;
        }
        Some(if delta > 0.0 { Swipe::Next } else { Swipe::Prev })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(from_x: f64, to_x: f64) -> Option<Swipe> {
        let mut r = SwipeRecognizer::new(50.0);
        r.begin(Point::new(from_x, 300.0));
        r.end(Point::new(to_x, 310.0))
    }

    #[test]
    fn threshold_is_strict() {
        assert_eq!(drag(200.0, 149.0), Some(Swipe::Next));
        assert_eq!(drag(200.0, 150.0), None);
        assert_eq!(drag(200.0, 151.0), None);
        assert_eq!(drag(200.0, 200.0), None);
    }

    #[test]
    fn direction_follows_finger() {
        assert_eq!(drag(300.0, 100.0), Some(Swipe::Next));
        assert_eq!(drag(100.0, 300.0), Some(Swipe::Prev));
        assert_eq!(drag(100.0, 151.0), Some(Swipe::Prev));
        assert_eq!(drag(100.0, 149.0), None);
    }

    #[test]
    fn vertical_travel_is_ignored() {
        let mut r = SwipeRecognizer::new(50.0);
        r.begin(Point::new(100.0, 0.0));
        assert_eq!(r.end(Point::new(100.0, 500.0)), None);
    }

    #[test]
    fn end_without_begin_is_ignored() {
        let mut r = SwipeRecognizer::new(50.0);
        assert_eq!(r.end(Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn each_begin_is_consumed_once() {
        let mut r = SwipeRecognizer::new(50.0);
        r.begin(Point::new(300.0, 0.0));
        assert_eq!(r.end(Point::new(0.0, 0.0)), Some(Swipe::Next));
        assert_eq!(r.end(Point::new(0.0, 0.0)), None);
    }
}
