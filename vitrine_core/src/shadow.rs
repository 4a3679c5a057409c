// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Header elevation driven by scroll offset.

use crate::config::ShadowConfig;
use crate::element::Element;
use crate::trace::{ElevationEvent, TraceSink, Tracer};

/// Visual elevation of the page header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Elevation {
    /// At or near the top of the page.
    Resting,
    /// Scrolled past the threshold.
    Elevated,
}

impl Elevation {
    /// Elevation for a vertical scroll offset. The threshold itself rests.
    #[must_use]
    pub fn for_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            Self::Elevated
        } else {
            Self::Resting
        }
    }
}

/// Applies the header shadow on every scroll event.
///
/// The shadow is a pure function of the offset and is rewritten on each
/// call. Only the trace output is deduplicated.
#[derive(Debug)]
pub struct ScrollShadow<E> {
    header: Option<E>,
    config: ShadowConfig,
    last_traced: Option<Elevation>,
    tracer: Tracer,
}

impl<E: Element> ScrollShadow<E> {
    /// Creates a shadow controller. A missing header disables styling.
    pub fn new(header: Option<E>, config: ShadowConfig) -> Self {
        Self {
            header,
            config,
            last_traced: None,
            tracer: Tracer::none(),
        }
    }

    /// Routes elevation changes to `sink`.
    pub fn set_trace_sink(&mut self, sink: impl TraceSink + 'static) {
        self.tracer.set_sink(sink);
    }

    /// Re-evaluates the shadow for `offset` and returns the elevation.
    pub fn on_scroll(&mut self, offset: f64) -> Elevation {
        let elevation = Elevation::for_offset(offset, self.config.threshold);
        if let Some(header) = &self.header {
            let shadow = match elevation {
                Elevation::Resting => self.config.resting,
                Elevation::Elevated => self.config.elevated,
            };
            header.set_style("box-shadow", shadow);
        }
        if self.last_traced != Some(elevation) {
            self.last_traced = Some(elevation);
            self.tracer.elevation(&ElevationEvent { elevation, offset });
        }
        elevation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeElement;

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(Elevation::for_offset(0.0, 100.0), Elevation::Resting);
        assert_eq!(Elevation::for_offset(100.0, 100.0), Elevation::Resting);
        assert_eq!(Elevation::for_offset(100.5, 100.0), Elevation::Elevated);
    }

    #[test]
    fn header_shadow_tracks_offset() {
        let header = FakeElement::new();
        let mut shadow = ScrollShadow::new(Some(header.clone()), ShadowConfig::landing());

        shadow.on_scroll(0.0);
        assert_eq!(header.style("box-shadow").as_deref(), Some("var(--shadow-sm)"));
        shadow.on_scroll(250.0);
        assert_eq!(header.style("box-shadow").as_deref(), Some("var(--shadow-md)"));
        shadow.on_scroll(40.0);
        assert_eq!(header.style("box-shadow").as_deref(), Some("var(--shadow-sm)"));
    }

    #[test]
    fn missing_header_still_reports() {
        let mut shadow = ScrollShadow::<FakeElement>::new(None, ShadowConfig::landing());
        assert_eq!(shadow.on_scroll(500.0), Elevation::Elevated);
    }

    #[cfg(feature = "trace")]
    #[test]
    fn trace_fires_on_crossings_only() {
        use crate::testing::EventLog;

        let log = EventLog::new();
        let mut shadow = ScrollShadow::<FakeElement>::new(None, ShadowConfig::landing());
        shadow.set_trace_sink(log.clone());
        for offset in [0.0, 10.0, 150.0, 300.0, 20.0] {
            shadow.on_scroll(offset);
        }
        let seen: alloc::vec::Vec<_> = log.elevations().iter().map(|e| e.elevation).collect();
        assert_eq!(
            seen,
            [Elevation::Resting, Elevation::Elevated, Elevation::Resting]
        );
    }
}
