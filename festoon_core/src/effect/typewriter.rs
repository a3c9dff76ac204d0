// Copyright 2026 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typewriter reveal for the hero name.
//!
//! The target's original text is captured up front and revealed one character
//! per tick; when the full text is out, the effect switches to a looping glow
//! presentation and stays there. There is no restart: the machine runs once
//! per page load.

use alloc::string::String;

use crate::time::Duration;

/// Interval between character reveals.
pub const TYPE_TICK: Duration = Duration::from_millis(150);

/// Presentation phase of the typewriter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypewriterPhase {
    /// Characters are still being revealed.
    Typing,
    /// All text is out; the glow presentation loops.
    Glowing,
}

/// Character-at-a-time text reveal.
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    /// Byte length of the revealed prefix; always on a char boundary.
    revealed: usize,
    phase: TypewriterPhase,
}

impl Typewriter {
    /// Captures `text` with nothing revealed yet.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            revealed: 0,
            phase: TypewriterPhase::Typing,
        }
    }

    /// Returns the currently revealed prefix.
    #[must_use]
    pub fn revealed(&self) -> &str {
        &self.text[..self.revealed]
    }

    /// Returns the presentation phase.
    #[must_use]
    pub const fn phase(&self) -> TypewriterPhase {
        self.phase
    }

    /// Reveals the next character.
    ///
    /// Returns the new prefix while typing. Once the text is exhausted the
    /// machine switches to [`TypewriterPhase::Glowing`] and every further
    /// tick returns `None` — the caller should stop its interval and apply
    /// the glow.
    pub fn tick(&mut self) -> Option<&str> {
        if self.phase == TypewriterPhase::Glowing {
            return None;
        }
        match self.text[self.revealed..].chars().next() {
            Some(c) => {
                self.revealed += c.len_utf8();
                Some(&self.text[..self.revealed])
            }
            None => {
                self.phase = TypewriterPhase::Glowing;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_one_character_per_tick() {
        let mut tw = Typewriter::new("Ansh");
        assert_eq!(tw.revealed(), "");
        assert_eq!(tw.tick(), Some("A"));
        assert_eq!(tw.tick(), Some("An"));
        assert_eq!(tw.tick(), Some("Ans"));
        assert_eq!(tw.tick(), Some("Ansh"));
        assert_eq!(tw.phase(), TypewriterPhase::Typing);
    }

    #[test]
    fn completion_switches_to_glow_and_stays() {
        let mut tw = Typewriter::new("Hi");
        let _ = tw.tick();
        let _ = tw.tick();
        assert_eq!(tw.tick(), None);
        assert_eq!(tw.phase(), TypewriterPhase::Glowing);

        // No restart semantics.
        assert_eq!(tw.tick(), None);
        assert_eq!(tw.revealed(), "Hi");
    }

    #[test]
    fn multibyte_text_never_splits_a_character() {
        let mut tw = Typewriter::new("🎉né");
        assert_eq!(tw.tick(), Some("🎉"));
        assert_eq!(tw.tick(), Some("🎉n"));
        assert_eq!(tw.tick(), Some("🎉né"));
        assert_eq!(tw.tick(), None);
    }

    #[test]
    fn empty_text_glows_immediately() {
        let mut tw = Typewriter::new("");
        assert_eq!(tw.tick(), None);
        assert_eq!(tw.phase(), TypewriterPhase::Glowing);
    }
}
