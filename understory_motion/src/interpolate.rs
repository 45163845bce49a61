// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// What an [`Interpolation`] does with inputs outside its input range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Extrapolate {
    /// Continue the linear mapping past the range ends.
    #[default]
    Extend,
    /// Hold the output at the nearest range end.
    Clamp,
}

/// Linear mapping from a channel value to a presentation value.
///
/// Several presentation properties usually read the same channel through
/// different interpolations, for example a rotation in degrees and an opacity.
///
/// ```
/// use understory_motion::Interpolation;
///
/// let rotation = Interpolation::new([0.0, 1.0], [0.0, 45.0]);
/// assert_eq!(rotation.sample(0.5), 22.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interpolation {
    /// Input range `[start, end]`.
    pub input: [f64; 2],
    /// Output range `[start, end]`.
    pub output: [f64; 2],
    /// Behavior outside the input range.
    pub extrapolate: Extrapolate,
}

impl Interpolation {
    /// Creates an interpolation that extends linearly outside its input range.
    #[must_use]
    pub const fn new(input: [f64; 2], output: [f64; 2]) -> Self {
        Self {
            input,
            output,
            extrapolate: Extrapolate::Extend,
        }
    }

    /// Returns the unit mapping onto `output`, i.e. input range `[0, 1]`.
    #[must_use]
    pub const fn unit(output: [f64; 2]) -> Self {
        Self::new([0.0, 1.0], output)
    }

    /// Returns this interpolation with [`Extrapolate::Clamp`].
    #[must_use]
    pub const fn clamped(mut self) -> Self {
        self.extrapolate = Extrapolate::Clamp;
        self
    }

    /// Maps `value` through the interpolation.
    ///
    /// A degenerate input range (`start == end`) behaves like a step at
    /// `start`.
    #[must_use]
    pub fn sample(&self, value: f64) -> f64 {
        let [in_start, in_end] = self.input;
        let [out_start, out_end] = self.output;
        let span = in_end - in_start;
        if span == 0.0 || !span.is_finite() {
            return if value < in_start { out_start } else { out_end };
        }
        let mut t = (value - in_start) / span;
        if self.extrapolate == Extrapolate::Clamp {
            t = t.clamp(0.0, 1.0);
        }
        out_start + (out_end - out_start) * t
    }
}

#[cfg(test)]
mod tests {
    use super::{Extrapolate, Interpolation};

    #[test]
    fn maps_unit_range() {
        let i = Interpolation::unit([1.0, 1.5]);
        assert_eq!(i.sample(0.0), 1.0);
        assert_eq!(i.sample(1.0), 1.5);
        assert_eq!(i.sample(0.5), 1.25);
    }

    #[test]
    fn extends_by_default() {
        let i = Interpolation::unit([0.0, 10.0]);
        assert_eq!(i.extrapolate, Extrapolate::Extend);
        assert!((i.sample(1.2) - 12.0).abs() < 1e-12);
        assert!((i.sample(-0.5) + 5.0).abs() < 1e-12);
    }

    #[test]
    fn clamps_when_requested() {
        let i = Interpolation::unit([0.0, 10.0]).clamped();
        assert_eq!(i.sample(1.2), 10.0);
        assert_eq!(i.sample(-0.5), 0.0);
    }

    #[test]
    fn wide_input_range_scales_progress_down() {
        // A channel that only travels 0..1 reaches a fifteenth of the output
        // when the input range is 0..15.
        let i = Interpolation::new([0.0, 15.0], [0.0, -150.0]);
        assert!((i.sample(1.0) + 10.0).abs() < 1e-12);
    }

    #[test]
    fn reversed_output_range() {
        let i = Interpolation::unit([1.0, 0.0]);
        assert_eq!(i.sample(0.25), 0.75);
    }

    #[test]
    fn degenerate_input_range_steps() {
        let i = Interpolation::new([0.5, 0.5], [0.0, 1.0]);
        assert_eq!(i.sample(0.2), 0.0);
        assert_eq!(i.sample(0.5), 1.0);
        assert_eq!(i.sample(0.9), 1.0);
    }
}
