// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborators a fling surface consults at event time.
//!
//! - [`SurfaceGeometry`] reports the current size of the attached surface. It
//!   is asked at every release, never cached, so the clamp reflects the layout
//!   at the moment the gesture ends.
//! - [`Clock`] stamps press and release notifications in milliseconds. It must
//!   never go backwards.

use alloc::rc::Rc;
use core::cell::Cell;

use kurbo::{Rect, Size};

/// Source of the attached surface's current size.
pub trait SurfaceGeometry {
    /// Returns the surface size right now.
    fn size(&self) -> Size;
}

impl SurfaceGeometry for Size {
    fn size(&self) -> Size {
        *self
    }
}

impl SurfaceGeometry for Rect {
    fn size(&self) -> Size {
        Self::size(self)
    }
}

impl<T: SurfaceGeometry + ?Sized> SurfaceGeometry for &T {
    fn size(&self) -> Size {
        (**self).size()
    }
}

impl<T: SurfaceGeometry + ?Sized> SurfaceGeometry for Rc<T> {
    fn size(&self) -> Size {
        (**self).size()
    }
}

impl<T: Copy + SurfaceGeometry> SurfaceGeometry for Cell<T> {
    fn size(&self) -> Size {
        self.get().size()
    }
}

/// Millisecond timestamp source.
pub trait Clock {
    /// Returns the current time in milliseconds.
    fn now_ms(&mut self) -> u64;
}

impl<F: FnMut() -> u64> Clock for F {
    fn now_ms(&mut self) -> u64 {
        self()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so a host can keep one handle while a surface
/// owns another. Useful for replaying recorded input and for tests.
///
/// ```
/// use understory_fling::{Clock, ManualClock};
///
/// let handle = ManualClock::new(1_000);
/// let mut owned = handle.clone();
///
/// handle.advance(250);
/// assert_eq!(owned.now_ms(), 1_250);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    /// Creates a clock reading `start` milliseconds.
    #[must_use]
    pub fn new(start: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    /// Returns the current reading without advancing.
    #[must_use]
    pub fn get(&self) -> u64 {
        self.now.get()
    }

    /// Sets the reading. Values earlier than the current reading are ignored.
    pub fn set(&self, now: u64) {
        self.now.set(self.now.get().max(now));
    }

    /// Moves the reading forward by `ms` milliseconds.
    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&mut self) -> u64 {
        self.now.get()
    }
}

/// Monotonic clock counting milliseconds since it was created.
#[cfg(feature = "std")]
#[derive(Copy, Clone, Debug)]
pub struct InstantClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl InstantClock {
    /// Creates a clock reading zero now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for InstantClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for InstantClock {
    fn now_ms(&mut self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}
