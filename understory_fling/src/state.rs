// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fling state machine: track one press/release pair per surface.
//!
//! ## Usage
//!
//! 1) Call [`FlingState::on_down`] with the pointer position and timestamp when
//!    the surface is pressed.
//! 2) Call [`FlingState::on_up`] with the release position, timestamp, the
//!    surface config, and the surface size at release time.
//! 3) Act on the returned [`FlingResult`].
//!
//! The machine has two states, idle and dragging, and cycles between them for
//! as long as the surface is attached. A release while idle is ignored.
//!
//! A press while already dragging keeps the original start sample, so the
//! distance and time are still measured from the first press. This can be
//! surprising: a host that wants a second press to restart the gesture must
//! deliver a release first. Only one pointer per surface is tracked.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_fling::{FlingConfig, FlingPower, FlingResult, FlingState};
//!
//! let config = FlingConfig::default();
//! let mut state = FlingState::new();
//!
//! state.on_down(Point::new(0.0, 0.0), 0);
//! assert!(state.is_dragging());
//!
//! let result = state.on_up(Point::new(100.0, 0.0), 200, &config, Size::new(500.0, 500.0));
//! assert_eq!(result, FlingResult::Fling(FlingPower { x: 20, y: 0 }));
//! assert!(!state.is_dragging());
//! ```

use kurbo::{Point, Size};

use crate::config::FlingConfig;
use crate::power::{FlingMeasurement, FlingResult, FlingSample, measure};

/// Idle/dragging state for one attached surface.
#[derive(Clone, Debug, Default)]
pub struct FlingState {
    /// Press sample of the drag in progress.
    press: Option<FlingSample>,
    /// Most recent completed measurement, kept until the next release.
    last: Option<FlingMeasurement>,
}

impl FlingState {
    /// Creates an idle state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a pointer press at `position`, timestamped `time` milliseconds.
    ///
    /// Returns `true` if this started a drag. A press during an active drag
    /// returns `false` and leaves the original start sample untouched.
    pub fn on_down(&mut self, position: Point, time: u64) -> bool {
        if let Some(press) = self.press {
            tracing::trace!(
                x = press.position.x,
                y = press.position.y,
                "press during drag keeps original start"
            );
            return false;
        }
        tracing::trace!(x = position.x, y = position.y, time, "fling drag started");
        self.press = Some(FlingSample::new(position, time));
        true
    }

    /// Records a pointer release and computes the gesture's power.
    ///
    /// `bounds` is the surface size at release time and is only used to clamp
    /// displacement. Returns [`FlingResult::Ignored`] without touching any
    /// state if no drag is in progress.
    pub fn on_up(
        &mut self,
        position: Point,
        time: u64,
        config: &FlingConfig,
        bounds: Size,
    ) -> FlingResult {
        let Some(start) = self.press.take() else {
            tracing::trace!("release without drag ignored");
            return FlingResult::Ignored;
        };

        let measurement = measure(start, FlingSample::new(position, time), config, bounds);
        self.last = Some(measurement);

        let result = measurement.result();
        match result {
            FlingResult::Fling(power) => tracing::debug!(
                power_x = power.x,
                power_y = power.y,
                elapsed_ms = measurement.elapsed_ms,
                "fling"
            ),
            FlingResult::Suppressed => tracing::debug!(
                travel_x = measurement.travel.x,
                travel_y = measurement.travel.y,
                "fling suppressed"
            ),
            FlingResult::Ignored => {}
        }
        result
    }

    /// Returns `true` between a press and its matching release.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.press.is_some()
    }

    /// Returns the press sample of the drag in progress, if any.
    #[must_use]
    pub fn press(&self) -> Option<FlingSample> {
        self.press
    }

    /// Returns the measurement taken at the most recent release, if any.
    ///
    /// This is left in place after the gesture ends and is overwritten by the
    /// next release.
    #[must_use]
    pub fn last_measurement(&self) -> Option<&FlingMeasurement> {
        self.last.as_ref()
    }
}
