// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Damped harmonic oscillator used by [`Curve::Spring`](crate::Curve::Spring).
//!
//! The spring is stepped analytically rather than integrated, so a large `dt`
//! (for example after the host was suspended) lands on the same trajectory a
//! sequence of small frames would have produced.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sqrt`, `sin_cos` and `powf`

/// Parameters of a damped spring pulling a value toward its target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    /// Spring constant `k`.
    pub stiffness: f64,
    /// Damping coefficient `c`.
    pub damping: f64,
    /// Mass `m` of the simulated body.
    pub mass: f64,
    /// Absolute distance from the target under which the spring may rest.
    pub rest_displacement: f64,
    /// Absolute speed under which the spring may rest.
    pub rest_speed: f64,
    /// When `true`, crossing the target ends the motion instead of bouncing.
    pub overshoot_clamping: bool,
}

impl Spring {
    /// Builds a spring from the tension/friction pair used by Origami-style
    /// tooling.
    ///
    /// `Spring::from_tension_friction(40.0, 7.0)` is the [`Default`] spring.
    #[must_use]
    pub fn from_tension_friction(tension: f64, friction: f64) -> Self {
        Self {
            stiffness: (tension - 30.0) * 3.62 + 194.0,
            damping: (friction - 8.0) * 3.0 + 25.0,
            ..Self::default()
        }
    }

    /// Returns the damping ratio `ζ`; below `1.0` the spring oscillates.
    #[must_use]
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Returns `true` if a body at `displacement` moving at `velocity` counts
    /// as settled.
    #[must_use]
    pub fn is_at_rest(&self, displacement: f64, velocity: f64) -> bool {
        displacement.abs() <= self.rest_displacement && velocity.abs() <= self.rest_speed
    }

    /// Advances a body `dt` seconds along the spring.
    ///
    /// `displacement` is measured from the target, so the returned
    /// displacement converges to `0.0`. Returns `(displacement, velocity)`.
    ///
    /// Degenerate parameters (non-positive stiffness or mass, non-finite
    /// values) settle immediately.
    #[must_use]
    pub fn step(&self, displacement: f64, velocity: f64, dt: f64) -> (f64, f64) {
        if dt <= 0.0 {
            return (displacement, velocity);
        }
        if !(self.stiffness > 0.0 && self.mass > 0.0 && self.damping >= 0.0)
            || !self.stiffness.is_finite()
            || !self.mass.is_finite()
            || !self.damping.is_finite()
        {
            return (0.0, 0.0);
        }

        let x0 = displacement;
        let v0 = velocity;
        let omega0 = (self.stiffness / self.mass).sqrt();
        let zeta = self.damping_ratio();

        if zeta < 1.0 {
            let omega1 = omega0 * (1.0 - zeta * zeta).sqrt();
            let envelope = exp(-zeta * omega0 * dt);
            let b = (v0 + zeta * omega0 * x0) / omega1;
            let (sin, cos) = (omega1 * dt).sin_cos();
            let x = envelope * (x0 * cos + b * sin);
            let v = -zeta * omega0 * x + envelope * (-x0 * omega1 * sin + b * omega1 * cos);
            (x, v)
        } else if zeta == 1.0 {
            let envelope = exp(-omega0 * dt);
            let b = v0 + omega0 * x0;
            let x = envelope * (x0 + b * dt);
            let v = envelope * (v0 - omega0 * b * dt);
            (x, v)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega0 * (zeta - root);
            let r2 = -omega0 * (zeta + root);
            let c1 = (v0 - r2 * x0) / (r1 - r2);
            let c2 = x0 - c1;
            let e1 = exp(r1 * dt);
            let e2 = exp(r2 * dt);
            (c1 * e1 + c2 * e2, c1 * r1 * e1 + c2 * r2 * e2)
        }
    }
}

#[cfg(feature = "std")]
fn exp(x: f64) -> f64 {
    x.exp()
}

#[cfg(not(feature = "std"))]
fn exp(x: f64) -> f64 {
    core::f64::consts::E.powf(x)
}

impl Default for Spring {
    /// Tension 40, friction 7: slightly under-damped, settles in roughly half
    /// a second for a unit move.
    fn default() -> Self {
        Self {
            stiffness: 230.2,
            damping: 22.0,
            mass: 1.0,
            rest_displacement: 0.001,
            rest_speed: 0.001,
            overshoot_clamping: true,
        }
    }
}
