// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attaching fling recognition to surfaces.
//!
//! [`FlingSurface`] bundles everything one attached surface needs: its
//! [`FlingState`], its validated [`FlingConfig`], a [`SurfaceGeometry`], a
//! [`Clock`], and the callback that receives each completed fling.
//!
//! [`FlingRegistry`] keeps many surfaces keyed by an application-chosen
//! identity. Presses are routed to one surface, while a single release is
//! offered to every attached surface, the same way a document-wide pointer-up
//! listener would see it. Only surfaces with a drag in progress react.
//!
//! Everything runs synchronously: callbacks fire before `release` returns.

use core::fmt;
use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::{Point, Size};

use crate::config::{ConfigError, FlingConfig};
use crate::power::{FlingPower, FlingResult};
use crate::state::FlingState;
use crate::surface::{Clock, SurfaceGeometry};

/// One surface with fling recognition attached.
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// use kurbo::{Point, Size};
/// use understory_fling::{FlingConfig, FlingPower, FlingSurface, ManualClock};
///
/// let clock = ManualClock::new(0);
/// let seen = Rc::new(Cell::new(None));
/// let sink = Rc::clone(&seen);
///
/// let mut surface = FlingSurface::attach(
///     Size::new(50.0, 50.0),
///     FlingConfig::default().with_threshold(1.0),
///     clock.clone(),
///     move |power| sink.set(Some(power)),
/// )
/// .unwrap();
///
/// surface.press(Point::new(0.0, 0.0));
/// clock.advance(100);
/// surface.release(Point::new(500.0, 0.0));
///
/// // Travel is clamped to the 50px surface width.
/// assert_eq!(seen.get(), Some(FlingPower { x: 50, y: 0 }));
/// ```
pub struct FlingSurface<G, C, F> {
    state: FlingState,
    config: FlingConfig,
    geometry: G,
    clock: C,
    on_fling: F,
}

impl<G, C, F> FlingSurface<G, C, F>
where
    G: SurfaceGeometry,
    C: Clock,
    F: FnMut(FlingPower),
{
    /// Attaches fling recognition to a surface.
    ///
    /// Fails if `config` does not validate.
    pub fn attach(
        geometry: G,
        config: FlingConfig,
        clock: C,
        on_fling: F,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: FlingState::new(),
            config,
            geometry,
            clock,
            on_fling,
        })
    }

    /// Handles a press on the surface.
    ///
    /// Returns `true` if this started a drag.
    pub fn press(&mut self, position: Point) -> bool {
        let now = self.clock.now_ms();
        self.state.on_down(position, now)
    }

    /// Handles a pointer release anywhere.
    ///
    /// If a drag is in progress, the gesture is measured against the surface's
    /// current size and, unless gated, the callback is invoked once before
    /// this returns.
    pub fn release(&mut self, position: Point) -> FlingResult {
        // Skip the clock and geometry when idle; `on_up` ignores the release.
        if !self.state.is_dragging() {
            return self.state.on_up(position, 0, &self.config, Size::ZERO);
        }
        let now = self.clock.now_ms();
        let bounds = self.geometry.size();
        let result = self.state.on_up(position, now, &self.config, bounds);
        if let FlingResult::Fling(power) = result {
            (self.on_fling)(power);
        }
        result
    }

    /// Returns the gesture state.
    #[must_use]
    pub fn state(&self) -> &FlingState {
        &self.state
    }

    /// Returns the configuration this surface was attached with.
    #[must_use]
    pub fn config(&self) -> &FlingConfig {
        &self.config
    }

    /// Returns the surface geometry.
    #[must_use]
    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Returns the surface geometry for in-place layout updates.
    pub fn geometry_mut(&mut self) -> &mut G {
        &mut self.geometry
    }

    /// Detaches recognition, handing back the geometry and clock.
    pub fn detach(self) -> (G, C) {
        (self.geometry, self.clock)
    }
}

impl<G: fmt::Debug, C: fmt::Debug, F> fmt::Debug for FlingSurface<G, C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlingSurface")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("geometry", &self.geometry)
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
struct Session {
    config: FlingConfig,
    state: FlingState,
}

/// Fling sessions for many surfaces, keyed by surface identity.
///
/// Each surface has its own config and state; nothing is shared between
/// sessions except the clock.
///
/// ```
/// use kurbo::{Point, Size};
/// use understory_fling::{FlingConfig, FlingPower, FlingRegistry, ManualClock};
///
/// let clock = ManualClock::new(0);
/// let mut registry = FlingRegistry::new(clock.clone());
/// registry.attach("card", FlingConfig::default()).unwrap();
/// registry.attach("list", FlingConfig::default()).unwrap();
///
/// registry.press(&"card", Point::new(0.0, 0.0));
/// clock.advance(200);
///
/// let mut flings = Vec::new();
/// registry.release(
///     Point::new(100.0, 0.0),
///     |_| Size::new(400.0, 400.0),
///     |key, power| flings.push((*key, power)),
/// );
/// assert_eq!(flings, vec![("card", FlingPower { x: 20, y: 0 })]);
/// ```
#[derive(Clone, Debug)]
pub struct FlingRegistry<K, C> {
    sessions: HashMap<K, Session>,
    clock: C,
}

impl<K, C> FlingRegistry<K, C>
where
    K: Eq + Hash,
    C: Clock,
{
    /// Creates an empty registry stamping events with `clock`.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self {
            sessions: HashMap::new(),
            clock,
        }
    }

    /// Attaches a surface, replacing any existing session for `key`.
    pub fn attach(&mut self, key: K, config: FlingConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.sessions.insert(
            key,
            Session {
                config,
                state: FlingState::new(),
            },
        );
        Ok(())
    }

    /// Detaches a surface, dropping any drag in progress.
    ///
    /// Returns `false` if `key` was not attached.
    pub fn detach(&mut self, key: &K) -> bool {
        self.sessions.remove(key).is_some()
    }

    /// Returns `true` if `key` is attached.
    #[must_use]
    pub fn is_attached(&self, key: &K) -> bool {
        self.sessions.contains_key(key)
    }

    /// Returns the number of attached surfaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns `true` if no surfaces are attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Returns the gesture state for `key`.
    #[must_use]
    pub fn state(&self, key: &K) -> Option<&FlingState> {
        self.sessions.get(key).map(|session| &session.state)
    }

    /// Returns the configuration `key` was attached with.
    #[must_use]
    pub fn config(&self, key: &K) -> Option<&FlingConfig> {
        self.sessions.get(key).map(|session| &session.config)
    }

    /// Handles a press on surface `key`.
    ///
    /// Returns `true` if this started a drag. Presses on unattached surfaces
    /// are ignored.
    pub fn press(&mut self, key: &K, position: Point) -> bool {
        let Some(session) = self.sessions.get_mut(key) else {
            return false;
        };
        let now = self.clock.now_ms();
        session.state.on_down(position, now)
    }

    /// Offers a release to every attached surface.
    ///
    /// Each surface with a drag in progress is measured against the size
    /// returned by `geometry` for its key, and `on_fling` is called for every
    /// gesture that is not gated. The order in which surfaces are visited is
    /// unspecified. Returns the number of flings delivered.
    pub fn release<G, F>(&mut self, position: Point, mut geometry: G, mut on_fling: F) -> usize
    where
        G: FnMut(&K) -> Size,
        F: FnMut(&K, FlingPower),
    {
        let now = self.clock.now_ms();
        let mut delivered = 0;
        for (key, session) in &mut self.sessions {
            if !session.state.is_dragging() {
                continue;
            }
            let bounds = geometry(key);
            if let FlingResult::Fling(power) =
                session.state.on_up(position, now, &session.config, bounds)
            {
                on_fling(key, power);
                delivered += 1;
            }
        }
        delivered
    }
}
