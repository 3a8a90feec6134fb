// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fling power: convert a press/release pair into a per-axis percentage.
//!
//! ## Algorithm
//!
//! For each axis independently:
//!
//! 1. `dist = |end - start|`.
//! 2. If [`MinTravel`](crate::MinTravel) sets a minimum for this axis and
//!    `dist` is below it, the whole gesture is suppressed. Both axes are
//!    gated on the raw distance, before clamping.
//! 3. `dist` is clamped to the surface width (X) or height (Y).
//! 4. `power = dist * threshold / elapsed_ms * 100`, rounded half-up.
//!
//! Elapsed time is floored to [`MIN_ELAPSED_MS`], so a press and release
//! stamped in the same millisecond count as a one millisecond gesture rather
//! than dividing by zero. A sample with a NaN or infinite coordinate cannot be
//! measured, so the gesture is suppressed as if it had failed minimum travel.
//! Power has no upper bound: a drag faster than the
//! threshold reports more than 100.
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_fling::{FlingConfig, FlingPower, FlingResult, FlingSample, compute_power};
//!
//! let config = FlingConfig::default().with_threshold(0.5);
//! let start = FlingSample::new(Point::new(10.0, 10.0), 1000);
//! let end = FlingSample::new(Point::new(110.0, 60.0), 1200);
//!
//! let result = compute_power(start, end, &config, Size::new(300.0, 200.0));
//! assert_eq!(result, FlingResult::Fling(FlingPower { x: 25, y: 13 }));
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`
use kurbo::{Point, Size, Vec2};

use crate::config::{Axis, FlingConfig};

/// Shortest duration a gesture is considered to take, in milliseconds.
pub const MIN_ELAPSED_MS: u64 = 1;

/// A timestamped pointer position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlingSample {
    /// Pointer position, in the same coordinate space for press and release.
    pub position: Point,
    /// Wall-clock time in milliseconds.
    pub time: u64,
}

impl FlingSample {
    /// Creates a sample at `position` taken at `time` milliseconds.
    #[must_use]
    pub fn new(position: Point, time: u64) -> Self {
        Self { position, time }
    }
}

/// Rounded fling power per axis, as a percentage of the configured threshold.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FlingPower {
    /// Horizontal power.
    pub x: i64,
    /// Vertical power.
    pub y: i64,
}

impl FlingPower {
    /// Returns the power along `axis`.
    #[must_use]
    pub fn get(&self, axis: Axis) -> i64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Returns the axis carrying more power, preferring X on ties.
    #[must_use]
    pub fn dominant_axis(&self) -> Axis {
        if self.y > self.x { Axis::Y } else { Axis::X }
    }
}

/// Outcome of a pointer release.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlingResult {
    /// A completed gesture with its power.
    Fling(FlingPower),
    /// The gesture travelled less than the configured minimum on some axis.
    Suppressed,
    /// There was no drag in progress, so the release was not considered.
    Ignored,
}

impl FlingResult {
    /// Returns the power if this is a completed fling.
    #[must_use]
    pub fn power(self) -> Option<FlingPower> {
        match self {
            Self::Fling(power) => Some(power),
            Self::Suppressed | Self::Ignored => None,
        }
    }
}

/// The intermediate values of one press/release pair.
///
/// Recomputed in full on every release; nothing carries over between gestures.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlingMeasurement {
    /// Press sample.
    pub start: FlingSample,
    /// Release sample.
    pub end: FlingSample,
    /// Absolute displacement before clamping, as checked against minimum travel.
    pub travel: Vec2,
    /// Absolute displacement, clamped to the surface size.
    pub distance: Vec2,
    /// Gesture duration, floored to [`MIN_ELAPSED_MS`].
    pub elapsed_ms: u64,
    /// Unrounded power per axis.
    pub raw: Vec2,
    /// Whether minimum travel gating, or a non-finite sample, rejected the gesture.
    pub suppressed: bool,
}

impl FlingMeasurement {
    /// Returns the rounded power, or `None` when the gesture was suppressed.
    #[must_use]
    pub fn power(&self) -> Option<FlingPower> {
        (!self.suppressed).then(|| FlingPower {
            x: round_half_up(self.raw.x),
            y: round_half_up(self.raw.y),
        })
    }

    /// Returns the release outcome for this measurement.
    #[must_use]
    pub fn result(&self) -> FlingResult {
        self.power().map_or(FlingResult::Suppressed, FlingResult::Fling)
    }
}

/// Measures a press/release pair against `config` and the surface `bounds`.
///
/// `bounds` should be the surface size at release time. Negative dimensions
/// clamp displacement to zero. If either sample has a non-finite coordinate
/// the measurement is suppressed with zero displacement.
#[must_use]
pub fn measure(
    start: FlingSample,
    end: FlingSample,
    config: &FlingConfig,
    bounds: Size,
) -> FlingMeasurement {
    let travel = end.position - start.position;
    let travel = Vec2::new(travel.x.abs(), travel.y.abs());

    // `f64::min` discards NaN, so a garbage sample must not reach the clamp.
    let finite = travel.is_finite();
    let min_travel = config.min_travel();
    let gated = |axis: Axis, dist: f64| min_travel.get(axis).is_some_and(|min| dist < min);
    let suppressed = !finite || gated(Axis::X, travel.x) || gated(Axis::Y, travel.y);

    let distance = if finite {
        Vec2::new(
            travel.x.min(bounds.width.max(0.0)),
            travel.y.min(bounds.height.max(0.0)),
        )
    } else {
        Vec2::ZERO
    };
    let elapsed_ms = end.time.saturating_sub(start.time).max(MIN_ELAPSED_MS);

    let elapsed = elapsed_ms as f64;
    let threshold = config.threshold();
    let raw = Vec2::new(
        distance.x * threshold / elapsed * 100.0,
        distance.y * threshold / elapsed * 100.0,
    );

    FlingMeasurement {
        start,
        end,
        travel,
        distance,
        elapsed_ms,
        raw,
        suppressed,
    }
}

/// Computes the fling result for a press/release pair.
///
/// This is [`measure`] followed by [`FlingMeasurement::result`].
#[must_use]
pub fn compute_power(
    start: FlingSample,
    end: FlingSample,
    config: &FlingConfig,
    bounds: Size,
) -> FlingResult {
    measure(start, end, config, bounds).result()
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "power of a finite gesture fits in i64; NaN maps to 0"
)]
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MinTravel;

    fn sample(x: f64, y: f64, time: u64) -> FlingSample {
        FlingSample::new(Point::new(x, y), time)
    }

    const LARGE: Size = Size::new(10_000.0, 10_000.0);

    #[test]
    fn hand_computed_power() {
        // dist=100, threshold=0.4, elapsed=200 -> 20
        let result = compute_power(
            sample(0.0, 0.0, 0),
            sample(100.0, 0.0, 200),
            &FlingConfig::default(),
            LARGE,
        );
        assert_eq!(result, FlingResult::Fling(FlingPower { x: 20, y: 0 }));
    }

    #[test]
    fn half_rounds_up() {
        let m = measure(
            sample(10.0, 10.0, 1000),
            sample(110.0, 60.0, 1200),
            &FlingConfig::default().with_threshold(0.5),
            Size::new(300.0, 200.0),
        );
        assert_eq!(m.distance, Vec2::new(100.0, 50.0));
        assert_eq!(m.elapsed_ms, 200);
        assert_eq!(m.raw, Vec2::new(25.0, 12.5));
        assert_eq!(m.power(), Some(FlingPower { x: 25, y: 13 }));
    }

    #[test]
    fn direction_does_not_matter() {
        let config = FlingConfig::default();
        let forward = compute_power(
            sample(0.0, 0.0, 0),
            sample(40.0, 30.0, 100),
            &config,
            LARGE,
        );
        let backward = compute_power(
            sample(40.0, 30.0, 0),
            sample(0.0, 0.0, 100),
            &config,
            LARGE,
        );
        assert_eq!(forward, backward);
        assert_eq!(forward, FlingResult::Fling(FlingPower { x: 16, y: 12 }));
    }

    #[test]
    fn displacement_is_clamped_to_surface() {
        let m = measure(
            sample(0.0, 0.0, 0),
            sample(500.0, 0.0, 100),
            &FlingConfig::default().with_threshold(1.0),
            Size::new(50.0, 50.0),
        );
        assert_eq!(m.distance.x, 50.0);
        assert_eq!(m.power(), Some(FlingPower { x: 50, y: 0 }));
    }

    #[test]
    fn negative_surface_dimension_clamps_to_zero() {
        let m = measure(
            sample(0.0, 0.0, 0),
            sample(30.0, 30.0, 100),
            &FlingConfig::default(),
            Size::new(-10.0, 100.0),
        );
        assert_eq!(m.distance, Vec2::new(0.0, 30.0));
    }

    #[test]
    fn gating_on_one_axis_suppresses_both() {
        let config = FlingConfig::default().with_min_travel(MinTravel::x(150.0));
        let result = compute_power(
            sample(0.0, 0.0, 0),
            sample(100.0, 900.0, 100),
            &config,
            LARGE,
        );
        assert_eq!(result, FlingResult::Suppressed);
    }

    #[test]
    fn gating_uses_unclamped_distance() {
        // Raw travel of 200 passes a 150 minimum even though the surface is 100 wide.
        let config = FlingConfig::default().with_min_travel(MinTravel::x(150.0));
        let result = compute_power(
            sample(0.0, 0.0, 0),
            sample(200.0, 0.0, 100),
            &config,
            Size::new(100.0, 100.0),
        );
        assert_eq!(result, FlingResult::Fling(FlingPower { x: 40, y: 0 }));
    }

    #[test]
    fn zero_min_travel_never_gates() {
        let config = FlingConfig::default().with_min_travel(MinTravel::both(0.0, 0.0));
        let result = compute_power(sample(5.0, 5.0, 0), sample(5.0, 5.0, 100), &config, LARGE);
        assert_eq!(result, FlingResult::Fling(FlingPower { x: 0, y: 0 }));
    }

    #[test]
    fn non_finite_samples_are_suppressed() {
        let config = FlingConfig::default().with_min_travel(MinTravel::x(150.0));
        let bounds = Size::new(300.0, 300.0);

        let nan_press = measure(sample(f64::NAN, 0.0, 0), sample(5.0, 0.0, 100), &config, bounds);
        assert!(nan_press.suppressed);
        assert_eq!(nan_press.distance, Vec2::ZERO);
        assert_eq!(nan_press.result(), FlingResult::Suppressed);

        // Without any gating configured, a NaN release still never fires.
        let nan_release = measure(
            sample(0.0, 0.0, 0),
            sample(0.0, f64::NAN, 100),
            &FlingConfig::default(),
            bounds,
        );
        assert!(nan_release.suppressed);
        assert_eq!(nan_release.power(), None);

        let infinite = compute_power(
            sample(0.0, 0.0, 0),
            sample(f64::INFINITY, 0.0, 100),
            &FlingConfig::default(),
            bounds,
        );
        assert_eq!(infinite, FlingResult::Suppressed);
    }

    #[test]
    fn travel_keeps_unclamped_displacement() {
        let m = measure(
            sample(0.0, 0.0, 0),
            sample(-500.0, 20.0, 100),
            &FlingConfig::default(),
            Size::new(50.0, 50.0),
        );
        assert_eq!(m.travel, Vec2::new(500.0, 20.0));
        assert_eq!(m.distance, Vec2::new(50.0, 20.0));
    }

    #[test]
    fn ungated_axis_is_unconstrained() {
        let config = FlingConfig::default().with_min_travel(MinTravel::y(10.0));
        let result = compute_power(
            sample(0.0, 0.0, 0),
            sample(0.0, 10.0, 100),
            &config,
            LARGE,
        );
        assert_eq!(result, FlingResult::Fling(FlingPower { x: 0, y: 4 }));
    }

    #[test]
    fn zero_threshold_yields_zero_power() {
        let result = compute_power(
            sample(0.0, 0.0, 0),
            sample(300.0, 300.0, 10),
            &FlingConfig::default().with_threshold(0.0),
            LARGE,
        );
        assert_eq!(result, FlingResult::Fling(FlingPower { x: 0, y: 0 }));
    }

    #[test]
    fn power_is_not_capped_at_one_hundred() {
        let result = compute_power(
            sample(0.0, 0.0, 0),
            sample(400.0, 0.0, 100),
            &FlingConfig::default(),
            LARGE,
        );
        assert_eq!(result.power(), Some(FlingPower { x: 160, y: 0 }));
    }

    #[test]
    fn zero_elapsed_counts_as_one_millisecond() {
        let m = measure(
            sample(0.0, 0.0, 500),
            sample(10.0, 0.0, 500),
            &FlingConfig::default(),
            LARGE,
        );
        assert_eq!(m.elapsed_ms, MIN_ELAPSED_MS);
        assert_eq!(m.power(), Some(FlingPower { x: 400, y: 0 }));
    }

    #[test]
    fn clock_regression_counts_as_one_millisecond() {
        let m = measure(
            sample(0.0, 0.0, 900),
            sample(10.0, 0.0, 100),
            &FlingConfig::default(),
            LARGE,
        );
        assert_eq!(m.elapsed_ms, MIN_ELAPSED_MS);
    }

    #[test]
    fn dominant_axis_prefers_x_on_ties() {
        assert_eq!(FlingPower { x: 3, y: 3 }.dominant_axis(), Axis::X);
        assert_eq!(FlingPower { x: 3, y: 4 }.dominant_axis(), Axis::Y);
        assert_eq!(FlingPower { x: 7, y: 4 }.get(Axis::Y), 4);
    }
}
