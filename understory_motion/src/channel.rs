// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use crate::{Spring, Timing};

/// How a [`Channel`] travels toward its target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Curve {
    /// Physically simulated; keeps velocity across retargets.
    Spring(Spring),
    /// Fixed duration with easing; restarts from the current value on retarget.
    Timing(Timing),
}

impl Default for Curve {
    fn default() -> Self {
        Self::Spring(Spring::default())
    }
}

impl From<Spring> for Curve {
    fn from(spring: Spring) -> Self {
        Self::Spring(spring)
    }
}

impl From<Timing> for Curve {
    fn from(timing: Timing) -> Self {
        Self::Timing(timing)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Tween {
    from: f64,
    elapsed: Duration,
}

/// An animated scalar confined to `[0, 1]`.
///
/// The channel is driven toward its last requested target by the host calling
/// [`Channel::step`] once per frame. A new target can be requested at any time;
/// the value continues from where it is, so retargets never jump.
///
/// ```
/// use core::time::Duration;
/// use understory_motion::{Channel, Curve, Easing, Timing};
///
/// let mut fade = Channel::new(0.0);
/// fade.set_target(1.0, Curve::Timing(Timing::new(Duration::from_millis(100), Easing::Linear)));
/// fade.step(Duration::from_millis(50));
/// assert!((fade.value() - 0.5).abs() < 1e-9);
/// fade.step(Duration::from_millis(50));
/// assert!(fade.is_settled());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Channel {
    value: f64,
    velocity: f64,
    target: f64,
    curve: Curve,
    tween: Option<Tween>,
}

impl Channel {
    /// Creates a channel resting at `value` (clamped into `[0, 1]`).
    #[must_use]
    pub fn new(value: f64) -> Self {
        let value = clamp_unit(value);
        Self {
            value,
            velocity: 0.0,
            target: value,
            curve: Curve::default(),
            tween: None,
        }
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Current velocity in units per second.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Last requested target.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Curve used for the current motion.
    #[must_use]
    pub fn curve(&self) -> Curve {
        self.curve
    }

    /// Returns `true` once the value rests on the target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.tween.is_none() && self.velocity == 0.0 && self.value == self.target
    }

    /// Requests motion toward `target` (clamped into `[0, 1]`) using `curve`.
    ///
    /// Returns `false` when the channel is already heading to the same target
    /// with the same curve, in which case nothing is restarted.
    pub fn set_target(&mut self, target: f64, curve: Curve) -> bool {
        let target = clamp_unit(target);
        if target == self.target && curve == self.curve {
            return false;
        }
        self.target = target;
        self.curve = curve;
        match curve {
            Curve::Spring(_) => self.tween = None,
            Curve::Timing(_) => {
                self.tween = Some(Tween {
                    from: self.value,
                    elapsed: Duration::ZERO,
                });
            }
        }
        true
    }

    /// Jumps to `value` and stops all motion.
    pub fn jump_to(&mut self, value: f64) {
        let value = clamp_unit(value);
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
        self.tween = None;
    }

    /// Advances the motion by `dt`.
    ///
    /// Returns `true` if the value changed.
    pub fn step(&mut self, dt: Duration) -> bool {
        if self.is_settled() || dt.is_zero() {
            return false;
        }
        let before = self.value;
        let secs = dt.as_secs_f64();

        match (self.curve, self.tween.as_mut()) {
            (Curve::Timing(timing), Some(tween)) => {
                tween.elapsed = tween.elapsed.saturating_add(dt);
                let progress = timing.progress(tween.elapsed);
                if progress >= 1.0 {
                    self.value = self.target;
                    self.velocity = 0.0;
                    self.tween = None;
                } else {
                    self.value = tween.from + (self.target - tween.from) * progress;
                    self.velocity = (self.value - before) / secs;
                }
            }
            (Curve::Spring(spring), _) => {
                let start = self.value - self.target;
                let (mut displacement, mut velocity) = spring.step(start, self.velocity, secs);
                let crossed = start != 0.0 && displacement.signum() != start.signum();
                if spring.is_at_rest(displacement, velocity)
                    || (spring.overshoot_clamping && crossed)
                {
                    displacement = 0.0;
                    velocity = 0.0;
                }
                self.value = self.target + displacement;
                self.velocity = velocity;
            }
            (Curve::Timing(_), None) => {
                self.value = self.target;
                self.velocity = 0.0;
            }
        }

        let clamped = clamp_unit(self.value);
        if clamped != self.value {
            self.value = clamped;
            self.velocity = 0.0;
        }
        self.value != before
    }
}

impl Default for Channel {
    fn default() -> Self {
        Self::new(0.0)
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
