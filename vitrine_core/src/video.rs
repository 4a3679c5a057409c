// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility-driven video playback.
//!
//! Videos play while at least half of them is on screen and pause
//! otherwise. Backends observe each video with
//! [`VIDEO_VISIBILITY_THRESHOLD`] and issue the [`PlaybackCommand`]
//! returned for every visibility change.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::subscription::{Subscription, VisibilitySource};

/// Fraction of a video that must be visible for it to play.
pub const VIDEO_VISIBILITY_THRESHOLD: f64 = 0.5;

/// What to do with a video after a visibility change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlaybackCommand {
    /// Start or resume playback.
    Play,
    /// Pause playback.
    Pause,
}

impl PlaybackCommand {
    /// Maps an intersection state to a command.
    #[must_use]
    pub const fn for_visibility(intersecting: bool) -> Self {
        if intersecting { Self::Play } else { Self::Pause }
    }
}

/// Observes each of `videos` and hands `(video, command)` to `apply` on
/// every visibility change.
///
/// One subscription is returned per video.
pub fn follow_videos<E, V, F>(videos: &[E], source: &V, apply: F) -> Vec<Subscription>
where
    E: Clone + 'static,
    V: VisibilitySource<E> + ?Sized,
    F: Fn(&E, PlaybackCommand) + Clone + 'static,
{
    videos
        .iter()
        .map(|video| {
            let target = video.clone();
            let apply = apply.clone();
            source.observe(
                video,
                VIDEO_VISIBILITY_THRESHOLD,
                Box::new(move |visible| apply(&target, PlaybackCommand::for_visibility(visible))),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use core::cell::RefCell;

    use super::*;
    use crate::element::Element as _;
    use crate::testing::{FakeElement, ManualVisibility};

    #[test]
    fn commands_follow_visibility() {
        assert_eq!(PlaybackCommand::for_visibility(true), PlaybackCommand::Play);
        assert_eq!(PlaybackCommand::for_visibility(false), PlaybackCommand::Pause);
    }

    #[test]
    fn each_video_gets_its_own_commands() {
        let videos = [FakeElement::with_id("hero"), FakeElement::with_id("demo")];
        let source = ManualVisibility::new();
        let seen: Rc<RefCell<Vec<(Option<alloc::string::String>, PlaybackCommand)>>> =
            Rc::default();
        let log = Rc::clone(&seen);
        let subs = follow_videos(&videos, &source, move |video: &FakeElement, cmd| {
            log.borrow_mut().push((video.id(), cmd));
        });
        assert_eq!(subs.len(), 2);
        assert_eq!(source.threshold_of(0), Some(VIDEO_VISIBILITY_THRESHOLD));

        source.emit(1, true);
        source.emit(0, false);
        assert_eq!(
            *seen.borrow(),
            [
                (Some("demo".into()), PlaybackCommand::Play),
                (Some("hero".into()), PlaybackCommand::Pause),
            ]
        );

        drop(subs);
        source.emit(1, false);
        assert_eq!(seen.borrow().len(), 2, "dropped subscriptions stop delivery");
    }
}
