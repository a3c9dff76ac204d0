// Copyright 2026 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transient notices: the download toast and the timed celebratory message.
//!
//! Both are a line of text plus a [`FadeTimeline`]; only their stage
//! durations and presentation differ. The toast slides in from the right
//! edge and stays for roughly 3.3 seconds in total; the celebration fades in
//! centered and is removed about 4.5 seconds after it is shown (which the
//! demo schedules 2 seconds after load).

use alloc::format;
use alloc::string::String;

use super::timeline::{FadeParams, FadeTimeline};
use crate::time::{Duration, HostTime};

/// Stage durations for the download toast (~3.3 s total).
pub const TOAST_FADE: FadeParams = FadeParams {
    enter_delay: Duration::from_millis(100),
    enter: Duration::from_millis(300),
    hold: Duration::from_millis(2_600),
    exit: Duration::from_millis(300),
};

/// Stage durations for the celebratory message (~4.5 s total).
pub const CELEBRATION_FADE: FadeParams = FadeParams {
    enter_delay: Duration::from_millis(100),
    enter: Duration::from_millis(500),
    hold: Duration::from_millis(3_400),
    exit: Duration::from_millis(500),
};

/// How long after load the celebratory message appears.
pub const CELEBRATION_APPEAR_DELAY: Duration = Duration::from_millis(2_000);

/// Download confirmation toast.
#[derive(Clone, Debug)]
pub struct DownloadToast {
    text: String,
    timeline: FadeTimeline,
}

impl DownloadToast {
    /// Creates a toast confirming the download of `filename`, shown at `now`.
    #[must_use]
    pub fn new(filename: &str, now: HostTime) -> Self {
        Self {
            text: format!("Downloading {filename}..."),
            timeline: FadeTimeline::new(TOAST_FADE, now),
        }
    }

    /// Returns the toast text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the fade lifecycle.
    #[must_use]
    pub const fn timeline(&self) -> &FadeTimeline {
        &self.timeline
    }

    /// Returns the fade lifecycle for advancing.
    pub const fn timeline_mut(&mut self) -> &mut FadeTimeline {
        &mut self.timeline
    }
}

/// Centered timed celebratory message.
#[derive(Clone, Debug)]
pub struct CelebrationMessage {
    text: String,
    timeline: FadeTimeline,
}

impl CelebrationMessage {
    /// Creates a message with the given text, shown at `now`.
    #[must_use]
    pub fn new(text: impl Into<String>, now: HostTime) -> Self {
        Self {
            text: text.into(),
            timeline: FadeTimeline::new(CELEBRATION_FADE, now),
        }
    }

    /// Returns the message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the fade lifecycle.
    #[must_use]
    pub const fn timeline(&self) -> &FadeTimeline {
        &self.timeline
    }

    /// Returns the fade lifecycle for advancing.
    pub const fn timeline_mut(&mut self) -> &mut FadeTimeline {
        &mut self.timeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::timeline::FadePhase;

    #[test]
    fn toast_text_names_the_file() {
        let toast = DownloadToast::new("wallpaper.png", HostTime(0));
        assert_eq!(toast.text(), "Downloading wallpaper.png...");
    }

    #[test]
    fn toast_leaves_the_screen_on_schedule() {
        let shown = HostTime::from_millis(500);
        let mut toast = DownloadToast::new("wallpaper.png", shown);

        // Visible mid-lifecycle...
        let _ = toast
            .timeline_mut()
            .advance(shown + Duration::from_millis(1_000));
        assert_eq!(toast.timeline().phase(), FadePhase::Visible);

        // ...and gone by 3.3s after showing.
        let _ = toast.timeline_mut().advance(shown + TOAST_FADE.total());
        assert!(toast.timeline().is_removed());
        assert_eq!(TOAST_FADE.total(), Duration::from_millis(3_300));
    }

    #[test]
    fn celebration_phase_boundaries() {
        let shown = HostTime::from_millis(2_000);
        let mut msg = CelebrationMessage::new("Happy Birthday!", shown);
        assert_eq!(msg.text(), "Happy Birthday!");

        assert_eq!(
            msg.timeline_mut()
                .advance(shown + Duration::from_millis(100)),
            Some(FadePhase::FadingIn)
        );
        assert_eq!(
            msg.timeline_mut()
                .advance(shown + Duration::from_millis(600)),
            Some(FadePhase::Visible)
        );
        assert_eq!(
            msg.timeline_mut()
                .advance(shown + Duration::from_millis(4_000)),
            Some(FadePhase::FadingOut)
        );
        assert_eq!(
            msg.timeline_mut()
                .advance(shown + Duration::from_millis(4_500)),
            Some(FadePhase::Removed)
        );
    }
}
