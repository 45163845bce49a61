// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_motion --heading-base-level=0

//! Understory Motion: host-driven animated scalars.
//!
//! This crate provides the small amount of animation machinery that headless
//! widgets need to describe motion without owning a frame clock:
//!
//! - [`Channel`]: a scalar in `[0, 1]` driven toward a target. Retargeting is
//!   allowed at any time and never makes the value jump.
//! - [`Curve`]: how a channel travels, either a [`Spring`] or a [`Timing`]
//!   (fixed duration plus [`Easing`]).
//! - [`Interpolation`]: maps a channel value onto a presentation value such as
//!   an angle, a scale, an opacity or a pixel offset.
//!
//! The crate does **not** schedule anything. Hosts are expected to:
//!
//! - Call [`Channel::step`] with the elapsed frame time from their own clock.
//! - Keep requesting frames while any channel reports it is not settled.
//! - Sample [`Channel::value`] when building the next frame.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use understory_motion::{Channel, Curve, Interpolation, Spring};
//!
//! let mut expansion = Channel::new(0.0);
//! expansion.set_target(1.0, Curve::Spring(Spring::default()));
//!
//! let rotation = Interpolation::unit([0.0, 45.0]);
//! while !expansion.is_settled() {
//!     expansion.step(Duration::from_millis(16));
//!     let degrees = rotation.sample(expansion.value());
//!     assert!((0.0..=45.0).contains(&degrees));
//! }
//! assert_eq!(expansion.value(), 1.0);
//! ```
//!
//! Springs are stepped analytically, so irregular frame times do not change
//! the trajectory.
//!
//! This crate is `no_std`. Enable either the default `std` feature or `libm`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod channel;
mod interpolate;
mod spring;
mod timing;

pub use channel::{Channel, Curve};
pub use interpolate::{Extrapolate, Interpolation};
pub use spring::Spring;
pub use timing::{Easing, Timing};
