// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `<video>` playback driven by visibility.

use alloc::vec::Vec;

use vitrine_core::subscription::Subscription;
use vitrine_core::video::PlaybackCommand;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlMediaElement;

use crate::console::log_error;
use crate::element::DomElement;
use crate::observe::Intersections;

/// Plays or pauses `video`. Non-media elements are ignored.
///
/// `play()` is asynchronous and browsers reject it when autoplay policy
/// forbids playback; the rejection is logged and otherwise ignored.
pub fn apply_playback(video: &DomElement, command: PlaybackCommand) {
    let Some(media) = video.dyn_ref::<HtmlMediaElement>() else {
        return;
    };
    match command {
        PlaybackCommand::Play => match media.play() {
            Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    log_error("video autoplay prevented", &err);
                }
            }),
            Err(err) => log_error("video autoplay prevented", &err),
        },
        PlaybackCommand::Pause => {
            let _ = media.pause();
        }
    }
}

/// Plays each video while at least half of it is on screen.
pub fn follow_videos(videos: &[DomElement]) -> Vec<Subscription> {
    vitrine_core::video::follow_videos(videos, &Intersections, apply_playback)
}
