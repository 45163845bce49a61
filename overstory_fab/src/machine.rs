// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Open/closed interaction state of an expandable trigger.
//!
//! ## Usage
//!
//! 1) Call [`PhaseMachine::activate`] / [`PhaseMachine::deactivate`] in
//!    response to input; both return whether a transition happened.
//! 2) Once per frame call [`PhaseMachine::advance`] with the frame time and
//!    whether the opening animation has come to rest.
//! 3) Read [`PhaseMachine::phase`] to decide what to render.
//!
//! ```
//! use core::time::Duration;
//! use overstory_fab::{Phase, PhaseMachine};
//!
//! let mut machine = PhaseMachine::new(Duration::from_millis(250));
//! assert!(machine.activate());
//! assert_eq!(machine.phase(), Phase::Opening);
//!
//! machine.advance(Duration::from_millis(16), true);
//! assert_eq!(machine.phase(), Phase::Open);
//!
//! assert!(machine.deactivate());
//! machine.advance(Duration::from_millis(249), false);
//! assert_eq!(machine.phase(), Phase::Closing);
//! machine.advance(Duration::from_millis(1), false);
//! assert_eq!(machine.phase(), Phase::Closed);
//! ```

use core::time::Duration;

/// Interaction phase of a trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Collapsed; only the primary button is rendered.
    #[default]
    Closed,
    /// Expanding; logically open while the reveal plays.
    Opening,
    /// Expanded and at rest.
    Open,
    /// Collapsing; still rendered until the settle delay elapses.
    Closing,
}

impl Phase {
    /// Returns `true` for [`Phase::Opening`] and [`Phase::Open`].
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Self::Opening | Self::Open)
    }

    /// Returns `true` while the stack and backdrop are rendered.
    #[must_use]
    pub fn is_mounted(self) -> bool {
        self != Self::Closed
    }

    /// Returns `true` for the two animated phases.
    #[must_use]
    pub fn is_transitioning(self) -> bool {
        matches!(self, Self::Opening | Self::Closing)
    }
}

/// Explicit four-phase state machine with a timed `Closing → Closed` edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhaseMachine {
    phase: Phase,
    settle_delay: Duration,
    settle_remaining: Option<Duration>,
}

impl PhaseMachine {
    /// Creates a closed machine whose collapse takes `settle_delay`.
    #[must_use]
    pub fn new(settle_delay: Duration) -> Self {
        Self {
            phase: Phase::Closed,
            settle_delay,
            settle_remaining: None,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Time left before a pending collapse completes.
    #[must_use]
    pub fn settle_remaining(&self) -> Option<Duration> {
        self.settle_remaining
    }

    /// Opens from [`Phase::Closed`], or reopens from [`Phase::Closing`].
    ///
    /// Reopening discards the pending settle so it can never close the
    /// reopened trigger. Returns `false` when already open.
    pub fn activate(&mut self) -> bool {
        match self.phase {
            Phase::Closed | Phase::Closing => {
                self.phase = Phase::Opening;
                self.settle_remaining = None;
                true
            }
            Phase::Opening | Phase::Open => false,
        }
    }

    /// Starts collapsing from [`Phase::Opening`] or [`Phase::Open`].
    ///
    /// Returns `false` when already closing or closed; a pending settle keeps
    /// its original deadline.
    pub fn deactivate(&mut self) -> bool {
        match self.phase {
            Phase::Opening | Phase::Open => {
                self.phase = Phase::Closing;
                self.settle_remaining = Some(self.settle_delay);
                true
            }
            Phase::Closing | Phase::Closed => false,
        }
    }

    /// Advances timed transitions by `dt`.
    ///
    /// `open_at_rest` reports whether the opening animation has finished;
    /// it moves [`Phase::Opening`] to [`Phase::Open`]. Returns the new phase
    /// if it changed.
    pub fn advance(&mut self, dt: Duration, open_at_rest: bool) -> Option<Phase> {
        match self.phase {
            Phase::Opening if open_at_rest => {
                self.phase = Phase::Open;
                Some(self.phase)
            }
            Phase::Closing => {
                let remaining = self
                    .settle_remaining
                    .unwrap_or(Duration::ZERO)
                    .saturating_sub(dt);
                if remaining.is_zero() {
                    self.phase = Phase::Closed;
                    self.settle_remaining = None;
                    Some(self.phase)
                } else {
                    self.settle_remaining = Some(remaining);
                    None
                }
            }
            _ => None,
        }
    }
}
