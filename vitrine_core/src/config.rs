// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunables for the page state machines.
//!
//! Each component takes a small `Copy` configuration with a `landing()`
//! preset matching the shipped page. [`Default`] returns the same preset.

use core::time::Duration;

/// Configuration for the [`Carousel`](crate::carousel::Carousel).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Time between autoplay advances.
    pub autoplay_period: Duration,
    /// Minimum horizontal travel, in CSS pixels, for a touch drag to count
    /// as a swipe. The comparison is strict: exactly this distance is a tap.
    pub swipe_threshold: f64,
    /// Fraction of a slide that must be visible before the viewport
    /// follower treats it as the current slide.
    pub slide_visibility_threshold: f64,
    /// CSS `transition` value used for smooth track movement.
    pub smooth_transition: &'static str,
}

impl CarouselConfig {
    /// The landing page preset: 5 s autoplay, 50 px swipes, 10% visibility.
    #[must_use]
    pub const fn landing() -> Self {
        Self {
            autoplay_period: Duration::from_millis(5000),
            swipe_threshold: 50.0,
            slide_visibility_threshold: 0.1,
            smooth_transition: "transform 0.5s cubic-bezier(0.4, 0, 0.2, 1)",
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::landing()
    }
}

/// Configuration for the [`ThemeStore`](crate::theme::ThemeStore).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeConfig {
    /// Storage key holding `"light"` or `"dark"`.
    pub storage_key: &'static str,
    /// Attribute set on the root element.
    pub root_attribute: &'static str,
}

impl ThemeConfig {
    /// The landing page preset.
    #[must_use]
    pub const fn landing() -> Self {
        Self {
            storage_key: "cenm-theme",
            root_attribute: "data-theme",
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::landing()
    }
}

/// Configuration for the [`ScrollShadow`](crate::shadow::ScrollShadow).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowConfig {
    /// Vertical offset, in CSS pixels, past which the header is elevated.
    pub threshold: f64,
    /// `box-shadow` value while resting.
    pub resting: &'static str,
    /// `box-shadow` value while elevated.
    pub elevated: &'static str,
}

impl ShadowConfig {
    /// The landing page preset, using the stylesheet's shadow tokens.
    #[must_use]
    pub const fn landing() -> Self {
        Self {
            threshold: 100.0,
            resting: "var(--shadow-sm)",
            elevated: "var(--shadow-md)",
        }
    }
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self::landing()
    }
}
