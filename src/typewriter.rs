//! Typed-text role cycler.
//!
//! The state machine is driven by the caller: schedule one timer for
//! [`Typewriter::next_delay`], call [`Typewriter::tick`] when it fires and
//! repeat. Holding that timer in a [`crate::timer::TimerSlot`] keeps at most
//! one of them alive.

use std::time::Duration;

use crate::site::TypingTimings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Pausing,
    Deleting,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    roles: Vec<String>,
    role_index: usize,
    // number of chars of the current role on screen
    shown: usize,
    phase: Phase,
    timings: TypingTimings,
}

impl Typewriter {
    pub fn new(roles: Vec<String>, timings: TypingTimings) -> Self {
        Self {
            roles,
            role_index: 0,
            shown: 0,
            phase: Phase::Typing,
            timings,
        }
    }

    fn role(&self) -> &str {
        self.roles
            .get(self.role_index)
            .map(String::as_str)
            .unwrap_or_default()
    }

    fn role_len(&self) -> usize {
        self.role().chars().count()
    }

    /// The text currently on screen.
    pub fn text(&self) -> &str {
        let role = self.role();
        match role.char_indices().nth(self.shown) {
            Some((end, _)) => &role[..end],
            None => role,
        }
    }

    pub fn role_index(&self) -> usize {
        self.role_index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// How long to wait before the next [`tick`](Self::tick).
    pub fn next_delay(&self) -> Duration {
        match self.phase {
            Phase::Typing => self.timings.type_delay(),
            Phase::Pausing => self.timings.pause(),
            Phase::Deleting => self.timings.delete_delay(),
        }
    }

    pub fn tick(&mut self) {
        if self.roles.is_empty() {
            return;
        }
        match self.phase {
            Phase::Typing => {
                let len = self.role_len();
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown >= len {
                    self.phase = Phase::Pausing;
                }
            }
            Phase::Pausing => self.phase = Phase::Deleting,
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.role_index = (self.role_index + 1) % self.roles.len();
                    self.phase = Phase::Typing;
                }
            }
        }
    }
}
