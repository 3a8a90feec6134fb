// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_fling --heading-base-level=0

//! Understory Fling: measure how hard a pointer was flung.
//!
//! This crate observes a press-drag-release sequence on a surface and reports
//! a normalized "fling power" for it: how fast and how far the pointer moved,
//! as two independent percentages, one per axis. It is meant for interactions
//! that should respond in proportion to gesture intensity, such as swiping a
//! card away or dismissing a sheet.
//!
//! - [`FlingState`]: the idle/dragging state machine for one surface
//! - [`measure`] and [`compute_power`]: the pure power computation
//! - [`FlingConfig`]: threshold and per-axis minimum travel
//! - [`FlingSurface`] and [`FlingRegistry`]: attach recognition to one or many
//!   surfaces, with a [`Clock`] and [`SurfaceGeometry`] supplied by the host
//!
//! ## Power
//!
//! On release, each axis computes `|end - start|`, clamps it to the surface's
//! current width or height, and converts it to a percentage of the configured
//! threshold speed:
//!
//! ```text
//! power = clamped_distance * threshold / elapsed_ms * 100
//! ```
//!
//! `threshold` is the speed, in pixels per millisecond, that maps to exactly
//! 100%. It defaults to [`DEFAULT_THRESHOLD`]. Power is rounded half-up and is
//! not capped: a faster drag reports more than 100.
//!
//! If [`MinTravel`] sets a minimum for an axis and the gesture moved less than
//! that on it, the whole gesture is suppressed and no power is reported.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_fling::{FlingConfig, FlingPower, FlingSurface, ManualClock, MinTravel};
//!
//! let clock = ManualClock::new(0);
//! let mut flings = Vec::new();
//! let mut card = FlingSurface::attach(
//!     Size::new(300.0, 200.0),
//!     FlingConfig::default()
//!         .with_threshold(0.5)
//!         .with_min_travel(MinTravel::x(20.0)),
//!     clock.clone(),
//!     |power: FlingPower| flings.push(power),
//! )
//! .unwrap();
//!
//! card.press(Point::new(10.0, 10.0));
//! clock.advance(200);
//! card.release(Point::new(110.0, 60.0));
//!
//! // A short horizontal flick is below the 20px minimum and is dropped.
//! card.press(Point::new(10.0, 10.0));
//! clock.advance(50);
//! card.release(Point::new(15.0, 90.0));
//!
//! drop(card);
//! assert_eq!(flings, vec![FlingPower { x: 25, y: 13 }]);
//! ```
//!
//! ## Timing
//!
//! Timestamps are milliseconds from a host [`Clock`]. A press and release in
//! the same millisecond count as [`MIN_ELAPSED_MS`], so power stays finite.
//!
//! ## Scope
//!
//! One pointer per surface. There is no velocity smoothing across move
//! events; only the press and release samples matter.
//!
//! ## Features
//!
//! - `std` (default): use the standard library and enable [`InstantClock`]
//! - `libm`: float support for `no_std` builds
//! - `serde`: (de)serialize [`FlingConfig`]
//!
//! Diagnostics are emitted through `tracing`.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod attach;
mod config;
mod power;
mod state;
mod surface;

pub use attach::{FlingRegistry, FlingSurface};
pub use config::{Axis, ConfigError, DEFAULT_THRESHOLD, FlingConfig, MinTravel};
pub use power::{
    FlingMeasurement, FlingPower, FlingResult, FlingSample, MIN_ELAPSED_MS, compute_power, measure,
};
pub use state::FlingState;
#[cfg(feature = "std")]
pub use surface::InstantClock;
pub use surface::{Clock, ManualClock, SurfaceGeometry};
