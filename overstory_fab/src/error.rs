// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Problems found while validating or converting configuration.
///
/// Interaction never produces errors; only [`TriggerConfig::validate`] and
/// the `serde` settings conversions do.
///
/// [`TriggerConfig::validate`]: crate::TriggerConfig::validate
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A color string could not be parsed as a CSS color.
    #[error("invalid color for `{field}`: {value:?}")]
    InvalidColor {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected input.
        value: String,
    },
    /// A numeric field is NaN or infinite.
    #[error("`{field}` must be finite, got {value}")]
    NotFinite {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected input.
        value: f64,
    },
    /// A size or scale is negative.
    #[error("`{field}` must not be negative, got {value}")]
    Negative {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected input.
        value: f64,
    },
    /// An opacity lies outside `0.0..=1.0`.
    #[error("`{field}` must be within 0..=1, got {value}")]
    OpacityOutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected input.
        value: f64,
    },
}

pub(crate) fn check_finite(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

pub(crate) fn check_non_negative(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    let value = check_finite(field, value)?;
    if value < 0.0 {
        Err(ConfigError::Negative { field, value })
    } else {
        Ok(value)
    }
}

pub(crate) fn check_opacity(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    let value = check_finite(field, value)?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::OpacityOutOfRange { field, value })
    }
}
