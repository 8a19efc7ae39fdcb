// SPDX-License-Identifier: MPL-2.0
//! Key-sequence easter egg.
//!
//! Watches the keyboard for the classic ↑ ↑ ↓ ↓ ← → ← → B A sequence and
//! reports a match. Any key outside the expected next step resets the
//! progress to zero.

use iced::keyboard::key::Named;
use iced::keyboard::Key;

/// One expected step of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Named(Named),
    Char(char),
}

impl Step {
    fn matches(self, key: &Key) -> bool {
        match (self, key) {
            (Step::Named(named), Key::Named(pressed)) => named == *pressed,
            (Step::Char(c), Key::Character(pressed)) => {
                pressed.as_str().eq_ignore_ascii_case(c.encode_utf8(&mut [0; 4]))
            }
            _ => false,
        }
    }
}

const SEQUENCE: [Step; 10] = [
    Step::Named(Named::ArrowUp),
    Step::Named(Named::ArrowUp),
    Step::Named(Named::ArrowDown),
    Step::Named(Named::ArrowDown),
    Step::Named(Named::ArrowLeft),
    Step::Named(Named::ArrowRight),
    Step::Named(Named::ArrowLeft),
    Step::Named(Named::ArrowRight),
    Step::Char('b'),
    Step::Char('a'),
];

/// Tracks progress through the key sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct Detector {
    progress: usize,
}

impl Detector {
    /// Creates a detector with no progress.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one key press. Returns `true` when the press completes the
    /// sequence; progress then restarts from zero.
    pub fn observe(&mut self, key: &Key) -> bool {
        if SEQUENCE[self.progress].matches(key) {
            self.progress += 1;
            if self.progress == SEQUENCE.len() {
                self.progress = 0;
                return true;
            }
        } else {
            self.progress = 0;
        }
        false
    }

    /// Number of sequence steps matched so far.
    #[must_use]
    pub fn progress(&self) -> usize {
        self.progress
    }
}
