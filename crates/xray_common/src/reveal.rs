//! Typewriter reveal of a part's name, then its description.
//!
//! [`Reveal`] only tracks progress. The caller owns the clock: it asks
//! [`Reveal::next_delay`] how long to wait, then calls [`Reveal::advance`].

use std::time::Duration;

use crate::config::RevealTiming;

/// A string being revealed one character at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Typewriter {
    full: String,
    /// Revealed prefix length, in chars.
    shown: usize,
    /// Total length, in chars.
    len: usize,
}

impl Typewriter {
    pub fn new(full: impl Into<String>) -> Self {
        let full = full.into();
        let len = full.chars().count();
        Self { full, shown: 0, len }
    }

    pub fn full(&self) -> &str {
        &self.full
    }

    /// The revealed prefix. Never splits a character.
    pub fn visible(&self) -> &str {
        match self.full.char_indices().nth(self.shown) {
            Some((end, _)) => &self.full[..end],
            None => &self.full,
        }
    }

    pub fn shown_chars(&self) -> usize {
        self.shown
    }

    pub fn len_chars(&self) -> usize {
        self.len
    }

    pub fn is_complete(&self) -> bool {
        self.shown >= self.len
    }

    fn step(&mut self) {
        if !self.is_complete() {
            self.shown += 1;
        }
    }
}

/// Which string the next step will extend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    Name,
    Description,
    Done,
}

/// Reveal progress for the selected part.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reveal {
    name: Typewriter,
    description: Typewriter,
    revealing: bool,
}

impl Reveal {
    /// Start a reveal from empty prefixes.
    pub fn start(name: impl Into<String>, description: impl Into<String>) -> Self {
        let mut reveal = Self {
            name: Typewriter::new(name),
            description: Typewriter::new(description),
            revealing: true,
        };
        reveal.settle();
        reveal
    }

    pub fn name(&self) -> &Typewriter {
        &self.name
    }

    pub fn description(&self) -> &Typewriter {
        &self.description
    }

    pub fn is_revealing(&self) -> bool {
        self.revealing
    }

    pub fn phase(&self) -> RevealPhase {
        if !self.revealing {
            RevealPhase::Done
        } else if !self.name.is_complete() {
            RevealPhase::Name
        } else {
            RevealPhase::Description
        }
    }

    /// Delay before the next [`advance`](Self::advance), or `None` once done.
    pub fn next_delay(&self, timing: &RevealTiming) -> Option<Duration> {
        match self.phase() {
            RevealPhase::Name => Some(timing.name_interval()),
            RevealPhase::Description => Some(timing.description_interval()),
            RevealPhase::Done => None,
        }
    }

    /// Reveal one more character of the current phase.
    pub fn advance(&mut self) {
        match self.phase() {
            RevealPhase::Name => self.name.step(),
            RevealPhase::Description => self.description.step(),
            RevealPhase::Done => {}
        }
        self.settle();
    }

    /// Show the cursor after the name.
    pub fn name_cursor(&self) -> bool {
        self.phase() == RevealPhase::Name
    }

    /// Show the cursor after the description.
    pub fn description_cursor(&self) -> bool {
        self.phase() == RevealPhase::Description
    }

    fn settle(&mut self) {
        if self.name.is_complete() && self.description.is_complete() {
            self.revealing = false;
        }
    }
}
