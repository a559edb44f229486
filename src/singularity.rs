//! When omega and Omega stop meaning anything.
//!
//! A circular orbit has no perigee, so the argument of perigee is undefined;
//! an equatorial orbit has no node line, so the RAAN is undefined. Both are
//! advertised as flags rather than errors.

use crate::elements::OrbitalElements;

pub const CIRCULAR_EPSILON: f64 = 0.01;
/// 0.01 degrees.
pub const EQUATORIAL_EPSILON: f64 = 0.01 * (std::f64::consts::PI / 180.0);

bitflags! {
    pub struct Singularities: u8 {
        /// Argument of perigee is undefined.
        const CIRCULAR = 0b01;
        /// Right ascension of the ascending node is undefined.
        const EQUATORIAL = 0b10;
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    /// Eccentricity below which the orbit counts as circular.
    pub circular: f64,
    /// Inclination (radians) below which the orbit counts as equatorial.
    pub equatorial: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            circular: CIRCULAR_EPSILON,
            equatorial: EQUATORIAL_EPSILON,
        }
    }
}

impl Thresholds {
    pub fn is_circular(&self, elements: &OrbitalElements) -> bool {
        elements.e() < self.circular
    }

    pub fn is_equatorial(&self, elements: &OrbitalElements) -> bool {
        elements.i() < self.equatorial
    }
}

pub fn is_circular(elements: &OrbitalElements) -> bool {
    Thresholds::default().is_circular(elements)
}

pub fn is_equatorial(elements: &OrbitalElements) -> bool {
    Thresholds::default().is_equatorial(elements)
}

impl Singularities {
    pub fn of(elements: &OrbitalElements) -> Singularities {
        Singularities::with_thresholds(elements, &Thresholds::default())
    }

    pub fn with_thresholds(elements: &OrbitalElements, t: &Thresholds) -> Singularities {
        let mut s = Singularities::empty();
        s.set(Singularities::CIRCULAR, t.is_circular(elements));
        s.set(Singularities::EQUATORIAL, t.is_equatorial(elements));
        s
    }

    /// Whether omega should be plotted or offered as an editable control.
    pub fn perigee_defined(&self) -> bool {
        !self.contains(Singularities::CIRCULAR)
    }

    /// Whether Omega should be plotted or offered as an editable control.
    pub fn node_defined(&self) -> bool {
        !self.contains(Singularities::EQUATORIAL)
    }
}

/// Flags with a hysteresis band, for UI controls.
///
/// A flag is raised as soon as the value drops below its threshold but only
/// cleared once the value climbs past `threshold * release_factor`. With a
/// factor of 1 this reproduces the plain predicates.
#[derive(Clone, Copy, Debug)]
pub struct SingularityLatch {
    thresholds: Thresholds,
    release_factor: f64,
    state: Singularities,
}

impl SingularityLatch {
    pub fn new(thresholds: Thresholds, release_factor: f64, elements: &OrbitalElements) -> Self {
        SingularityLatch {
            thresholds,
            release_factor: release_factor.max(1.0),
            state: Singularities::with_thresholds(elements, &thresholds),
        }
    }

    pub fn update(&mut self, elements: &OrbitalElements) -> Singularities {
        let t = &self.thresholds;
        let latched = |flag, value: f64, threshold: f64| {
            if value < threshold {
                true
            } else {
                self.state.contains(flag) && value < threshold * self.release_factor
            }
        };
        let circular = latched(Singularities::CIRCULAR, elements.e(), t.circular);
        let equatorial = latched(Singularities::EQUATORIAL, elements.i(), t.equatorial);
        self.state.set(Singularities::CIRCULAR, circular);
        self.state.set(Singularities::EQUATORIAL, equatorial);
        self.state
    }

    pub fn state(&self) -> Singularities {
        self.state
    }

    /// Drops latched history, as on a reset.
    pub fn reset(&mut self, elements: &OrbitalElements) {
        self.state = Singularities::with_thresholds(elements, &self.thresholds);
    }
}
