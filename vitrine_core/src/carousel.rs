// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slide carousel controller.
//!
//! A [`Carousel`] owns exactly one piece of state, the current slide
//! index, and three views that render it:
//!
//! - the **track**, translated by `-index × 100%`;
//! - the **indicators**, one per slide in slide order, exactly one active;
//! - the **navigation links**, active when their `#id` target resolves to
//!   the current slide through the [`SlideRegistry`]. Link order is
//!   unrelated to slide order.
//!
//! Every input ends in [`Carousel::go_to`], which wraps the request, stores
//! it, and rewrites all three views before returning. A request for the
//! slide already showing writes nothing, which is what keeps the viewport
//! follower from fighting a navigation-triggered scroll.
//!
//! # Inputs
//!
//! | Input                        | Method                         | Autoplay      |
//! |------------------------------|--------------------------------|---------------|
//! | prev / next button           | [`press_prev`] / [`press_next`]| stops         |
//! | indicator click              | [`select_indicator`]           | stops         |
//! | menu link click              | [`follow_link`]                | stops         |
//! | `ArrowLeft` / `ArrowRight`   | [`key`]                        | stops         |
//! | touch start / end            | [`touch_start`] / [`touch_end`]| stops on start|
//! | pointer enter / leave        | [`pointer_enter`] / [`pointer_leave`] | stops / starts |
//! | focus in / out               | [`focus_in`] / [`focus_out`]   | stops / starts|
//! | tab hidden / visible         | [`set_page_visible`]           | stops / starts|
//! | interval tick                | [`autoplay_tick`]              | —             |
//! | slide scrolled into view     | [`follow_visible_slide`]       | untouched     |
//!
//! [`press_prev`]: Carousel::press_prev
//! [`press_next`]: Carousel::press_next
//! [`select_indicator`]: Carousel::select_indicator
//! [`follow_link`]: Carousel::follow_link
//! [`key`]: Carousel::key
//! [`touch_start`]: Carousel::touch_start
//! [`touch_end`]: Carousel::touch_end
//! [`pointer_enter`]: Carousel::pointer_enter
//! [`pointer_leave`]: Carousel::pointer_leave
//! [`focus_in`]: Carousel::focus_in
//! [`focus_out`]: Carousel::focus_out
//! [`set_page_visible`]: Carousel::set_page_visible
//! [`autoplay_tick`]: Carousel::autoplay_tick
//! [`follow_visible_slide`]: Carousel::follow_visible_slide

use alloc::boxed::Box;
use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use kurbo::Point;

use crate::autoplay::{Autoplay, AutoplayReason, IntervalTimer, TimerHandle};
use crate::config::CarouselConfig;
use crate::element::Element;
use crate::gesture::{Swipe, SwipeRecognizer};
use crate::slide::{SlideRegistry, wrap_index};
use crate::subscription::{Subscription, VisibilitySource};
use crate::trace::{AutoplayEvent, SlideChangedEvent, TraceSink, Tracer};

/// The elements a carousel drives, looked up once at startup.
///
/// Every field except `slides` may be empty; the matching feature is then
/// simply absent.
#[derive(Clone, Debug)]
pub struct Bindings<E> {
    /// Element translated to reveal the current slide.
    pub track: Option<E>,
    /// Slide elements in display order.
    pub slides: Vec<E>,
    /// Indicator elements, one per slide, in slide order.
    pub indicators: Vec<E>,
    /// Navigation-menu links whose `href` is `#<slide id>`.
    pub nav_links: Vec<E>,
    /// "Previous" button.
    pub prev_button: Option<E>,
    /// "Next" button.
    pub next_button: Option<E>,
}

impl<E> Default for Bindings<E> {
    fn default() -> Self {
        Self {
            track: None,
            slides: Vec::new(),
            indicators: Vec::new(),
            nav_links: Vec::new(),
            prev_button: None,
            next_button: None,
        }
    }
}

/// How the track moves to a new offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Animated with the configured easing curve.
    Smooth,
    /// Jumps immediately; used when the page scroll already is the motion.
    Instant,
}

/// Which input moved the carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChangeCause {
    /// Initial render at mount.
    Initial,
    /// Prev / next button.
    Button,
    /// Indicator click.
    Indicator,
    /// Navigation-menu link.
    Link,
    /// Arrow key.
    Keyboard,
    /// Touch swipe.
    Swipe,
    /// Autoplay interval tick.
    Autoplay,
    /// A slide scrolled into view.
    Viewport,
    /// Direct call to [`Carousel::go_to`].
    Programmatic,
}

/// A keyboard key the carousel reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// `ArrowLeft`: previous slide.
    ArrowLeft,
    /// `ArrowRight`: next slide.
    ArrowRight,
    /// Any other key; ignored.
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            _ => Self::Other,
        }
    }
}

/// What the host should do with a link click.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LinkAction {
    /// The carousel navigated to this slide and scrolled it into view;
    /// suppress the browser's default navigation.
    Navigate(usize),
    /// Not a carousel link; let the browser handle it.
    Passthrough,
}

/// Returns the track's CSS translation for `index`, in percent.
#[must_use]
pub fn track_offset_percent(index: usize) -> i64 {
    i64::try_from(index).map_or(i64::MIN, |index| index.saturating_mul(-100))
}

/// Slide controller. See the [module docs](self).
#[derive(Debug)]
pub struct Carousel<E, T> {
    bindings: Bindings<E>,
    registry: SlideRegistry,
    /// Registry index of each nav link's target, by link position.
    link_targets: Vec<Option<usize>>,
    current: usize,
    autoplay: Autoplay<T>,
    swipe: SwipeRecognizer,
    config: CarouselConfig,
    tracer: Tracer,
}

impl<E: Element, T: IntervalTimer> Carousel<E, T> {
    /// Builds a carousel over `bindings`.
    ///
    /// Reads slide ids into the registry, resolves every nav link's target
    /// once, and writes the static ARIA wiring (`role="tab"` on indicators,
    /// `aria-controls` on the buttons). Nothing is rendered until
    /// [`mount`](Self::mount).
    ///
    /// `reduced_motion` is the reduced-motion preference at page load; when
    /// set, autoplay never runs.
    pub fn new(
        bindings: Bindings<E>,
        timer: T,
        config: CarouselConfig,
        reduced_motion: bool,
    ) -> Self {
        let registry = SlideRegistry::from_ids(bindings.slides.iter().map(Element::id));
        let link_targets = bindings
            .nav_links
            .iter()
            .map(|link| {
                link.attribute("href")
                    .and_then(|href| registry.resolve_href(&href))
            })
            .collect();

        for indicator in &bindings.indicators {
            indicator.set_attribute("role", "tab");
        }
        if let Some(track_id) = bindings.track.as_ref().and_then(Element::id) {
            for button in [&bindings.prev_button, &bindings.next_button]
                .into_iter()
                .flatten()
            {
                button.set_attribute("aria-controls", &track_id);
            }
        }

        Self {
            bindings,
            registry,
            link_targets,
            current: 0,
            autoplay: Autoplay::new(timer, config.autoplay_period, reduced_motion),
            swipe: SwipeRecognizer::new(config.swipe_threshold),
            config,
            tracer: Tracer::none(),
        }
    }

    /// Routes this carousel's events to `sink`.
    pub fn set_trace_sink(&mut self, sink: impl TraceSink + 'static) {
        self.tracer.set_sink(sink);
    }

    /// Renders slide 0 without animation and starts autoplay.
    pub fn mount(&mut self) {
        if self.is_enabled() {
            self.current = 0;
            self.sync_views(Transition::Instant);
            self.tracer.slide_changed(&SlideChangedEvent {
                from: None,
                to: 0,
                cause: ChangeCause::Initial,
                transition: Transition::Instant,
            });
        }
        self.start_autoplay(AutoplayReason::Startup);
    }

    /// Returns `false` when there is no track or no slide; every operation
    /// is then a no-op.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.bindings.track.is_some() && !self.bindings.slides.is_empty()
    }

    /// Returns the number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.slides.len()
    }

    /// Returns `true` when there are no slides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.slides.is_empty()
    }

    /// Returns the current slide index.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Returns the slide id → index map.
    #[must_use]
    pub fn registry(&self) -> &SlideRegistry {
        &self.registry
    }

    /// Returns the bound elements.
    #[must_use]
    pub fn bindings(&self) -> &Bindings<E> {
        &self.bindings
    }

    /// Returns `true` while autoplay has a live interval.
    #[must_use]
    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_running()
    }

    /// Moves to `index`, wrapped into `[0, len)`, and syncs every view.
    ///
    /// Returns `true` if the slide changed. Asking for the current slide
    /// changes nothing, so no animation is restarted.
    pub fn go_to(&mut self, index: isize, transition: Transition) -> bool {
        self.navigate(index, transition, ChangeCause::Programmatic)
    }

    /// Shows the next slide, wrapping to the first.
    pub fn next(&mut self) -> bool {
        self.step(1, ChangeCause::Programmatic)
    }

    /// Shows the previous slide, wrapping to the last.
    pub fn prev(&mut self) -> bool {
        self.step(-1, ChangeCause::Programmatic)
    }

    // -- user navigation ---------------------------------------------------

    /// Handles a click on the "previous" button.
    pub fn press_prev(&mut self) -> bool {
        self.stop_autoplay(AutoplayReason::Navigation);
        self.step(-1, ChangeCause::Button)
    }

    /// Handles a click on the "next" button.
    pub fn press_next(&mut self) -> bool {
        self.stop_autoplay(AutoplayReason::Navigation);
        self.step(1, ChangeCause::Button)
    }

    /// Handles a click on the indicator at `position`.
    pub fn select_indicator(&mut self, position: usize) -> bool {
        self.stop_autoplay(AutoplayReason::Navigation);
        self.navigate(as_signed(position), Transition::Smooth, ChangeCause::Indicator)
    }

    /// Handles a click on a navigation link with the given `href`.
    ///
    /// Fragment links naming a known slide navigate there, scroll the
    /// slide into view, and return [`LinkAction::Navigate`]. External links
    /// and fragments naming no slide are left to the browser.
    pub fn follow_link(&mut self, href: &str) -> LinkAction {
        let Some(index) = self.registry.resolve_href(href) else {
            return LinkAction::Passthrough;
        };
        if !self.is_enabled() {
            return LinkAction::Passthrough;
        }
        self.stop_autoplay(AutoplayReason::Navigation);
        self.navigate(as_signed(index), Transition::Smooth, ChangeCause::Link);
        if let Some(slide) = self.bindings.slides.get(index) {
            slide.scroll_into_view();
        }
        LinkAction::Navigate(index)
    }

    /// Handles a key press. Returns `true` if the key is a carousel key.
    pub fn key(&mut self, key: Key) -> bool {
        let delta = match key {
            Key::ArrowLeft => -1,
            Key::ArrowRight => 1,
            Key::Other => return false,
        };
        self.stop_autoplay(AutoplayReason::Navigation);
        self.step(delta, ChangeCause::Keyboard);
        true
    }

    /// Handles the start of a touch on the track.
    ///
    /// Stops autoplay even if the gesture turns out to be a tap.
    pub fn touch_start(&mut self, at: Point) {
        self.swipe.begin(at);
        self.stop_autoplay(AutoplayReason::Gesture);
    }

    /// Handles the end of a touch. Returns the recognized swipe, if any.
    pub fn touch_end(&mut self, at: Point) -> Option<Swipe> {
        let swipe = self.swipe.end(at)?;
        let delta = match swipe {
            Swipe::Next => 1,
            Swipe::Prev => -1,
        };
        self.step(delta, ChangeCause::Swipe);
        Some(swipe)
    }

    // -- passive inputs ----------------------------------------------------

    /// Pointer entered the carousel region.
    pub fn pointer_enter(&mut self) {
        self.stop_autoplay(AutoplayReason::PointerEnter);
    }

    /// Pointer left the carousel region.
    pub fn pointer_leave(&mut self) {
        self.start_autoplay(AutoplayReason::PointerLeave);
    }

    /// Keyboard focus entered the carousel region.
    pub fn focus_in(&mut self) {
        self.stop_autoplay(AutoplayReason::FocusIn);
    }

    /// Keyboard focus left the carousel region.
    pub fn focus_out(&mut self) {
        self.start_autoplay(AutoplayReason::FocusOut);
    }

    /// The tab was hidden or shown.
    pub fn set_page_visible(&mut self, visible: bool) {
        if visible {
            self.start_autoplay(AutoplayReason::PageVisible);
        } else {
            self.stop_autoplay(AutoplayReason::PageHidden);
        }
    }

    /// Delivers an interval tick. Ticks from anything but the live interval
    /// are dropped. Returns `true` if the slide changed.
    pub fn autoplay_tick(&mut self, handle: TimerHandle) -> bool {
        if !self.autoplay.accepts(handle) {
            return false;
        }
        self.step(1, ChangeCause::Autoplay)
    }

    /// A slide with the given id became sufficiently visible.
    ///
    /// Moves there without animation, since the page scroll is already the
    /// motion. Agrees-with-current and unknown ids are no-ops. Autoplay is
    /// left alone.
    pub fn follow_visible_slide(&mut self, id: &str) -> bool {
        match self.registry.index_of(id) {
            Some(index) if index != self.current => {
                self.navigate(as_signed(index), Transition::Instant, ChangeCause::Viewport)
            }
            _ => false,
        }
    }

    /// Starts autoplay, restarting any live interval. A disabled carousel
    /// never autoplays.
    pub fn start_autoplay(&mut self, reason: AutoplayReason) {
        if self.is_enabled() && self.autoplay.start() {
            self.tracer.autoplay(&AutoplayEvent {
                running: true,
                reason,
            });
        }
    }

    /// Stops autoplay if it is running.
    pub fn stop_autoplay(&mut self, reason: AutoplayReason) {
        if self.autoplay.stop() {
            self.tracer.autoplay(&AutoplayEvent {
                running: false,
                reason,
            });
        }
    }

    // -- internals ---------------------------------------------------------

    fn step(&mut self, delta: isize, cause: ChangeCause) -> bool {
        self.navigate(as_signed(self.current) + delta, Transition::Smooth, cause)
    }

    fn navigate(&mut self, index: isize, transition: Transition, cause: ChangeCause) -> bool {
        if !self.is_enabled() {
            return false;
        }
        let Some(target) = wrap_index(index, self.len()) else {
            return false;
        };
        if target == self.current {
            return false;
        }
        let from = self.current;
        self.current = target;
        self.sync_views(transition);
        self.tracer.slide_changed(&SlideChangedEvent {
            from: Some(from),
            to: target,
            cause,
            transition,
        });
        true
    }

    fn sync_views(&self, transition: Transition) {
        let current = self.current;

        if let Some(track) = &self.bindings.track {
            let timing = match transition {
                Transition::Smooth => self.config.smooth_transition,
                Transition::Instant => "none",
            };
            track.set_style("transition", timing);
            track.set_style(
                "transform",
                &format!("translateX({}%)", track_offset_percent(current)),
            );
        }

        for (position, indicator) in self.bindings.indicators.iter().enumerate() {
            let active = position == current;
            let flag = if active { "true" } else { "false" };
            indicator.toggle_class("active", active);
            indicator.set_attribute("aria-current", flag);
            indicator.set_attribute("aria-selected", flag);
        }

        for (link, target) in self.bindings.nav_links.iter().zip(&self.link_targets) {
            let active = *target == Some(current);
            link.toggle_class("active", active);
            if active {
                link.set_attribute("aria-current", "page");
            } else {
                link.remove_attribute("aria-current");
            }
        }
    }
}

fn as_signed(index: usize) -> isize {
    isize::try_from(index).unwrap_or(isize::MAX)
}

/// Subscribes the carousel to viewport visibility of every named slide.
///
/// When a slide reaches the configured visibility threshold,
/// [`Carousel::follow_visible_slide`] moves the carousel there without
/// animation. Slides without an id are not observed.
pub fn follow_viewport<E, T, V>(
    carousel: &Rc<RefCell<Carousel<E, T>>>,
    source: &V,
) -> Vec<Subscription>
where
    E: Element + 'static,
    T: IntervalTimer + 'static,
    V: VisibilitySource<E> + ?Sized,
{
    let (slides, threshold) = {
        let c = carousel.borrow();
        (c.bindings.slides.clone(), c.config.slide_visibility_threshold)
    };
    slides
        .iter()
        .filter_map(|slide| {
            let id: String = slide.id()?;
            let weak = Rc::downgrade(carousel);
            Some(source.observe(
                slide,
                threshold,
                Box::new(move |visible| {
                    if !visible {
                        return;
                    }
                    if let Some(carousel) = weak.upgrade() {
                        carousel.borrow_mut().follow_visible_slide(&id);
                    }
                }),
            ))
        })
        .collect()
}
