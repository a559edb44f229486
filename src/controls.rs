//! The six element controls and the session that owns the current snapshot.
//!
//! Controls speak display units (degrees for angles); everything past
//! [`Session::set`] is radians.

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{Config, ControlRanges, ControlSpec};
use crate::elements::OrbitalElements;
use crate::error::{ConfigError, ElementsError, ElementsResult};
use crate::explain::ExplanationRequest;
use crate::math::{to_degrees, to_radians};
use crate::render::Scene;
use crate::singularity::{Singularities, SingularityLatch};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Parameter {
    SemiMajorAxis,
    Eccentricity,
    Inclination,
    ArgumentOfPerigee,
    Raan,
    TrueAnomaly,
}

impl Parameter {
    pub const ALL: [Parameter; 6] = [
        Parameter::SemiMajorAxis,
        Parameter::Eccentricity,
        Parameter::Inclination,
        Parameter::ArgumentOfPerigee,
        Parameter::Raan,
        Parameter::TrueAnomaly,
    ];

    #[rustfmt::skip]
    pub fn label(self) -> &'static str {
        match self {
            Parameter::SemiMajorAxis     => "Semi-major axis",
            Parameter::Eccentricity      => "Eccentricity",
            Parameter::Inclination       => "Inclination",
            Parameter::ArgumentOfPerigee => "Argument of perigee",
            Parameter::Raan              => "Right ascension of ascending node",
            Parameter::TrueAnomaly       => "True anomaly",
        }
    }

    #[rustfmt::skip]
    pub fn symbol(self) -> &'static str {
        match self {
            Parameter::SemiMajorAxis     => "a",
            Parameter::Eccentricity      => "e",
            Parameter::Inclination       => "i",
            Parameter::ArgumentOfPerigee => "ω",
            Parameter::Raan              => "Ω",
            Parameter::TrueAnomaly       => "ν",
        }
    }

    fn field(self) -> &'static str {
        match self {
            Parameter::SemiMajorAxis => "a",
            Parameter::Eccentricity => "e",
            Parameter::Inclination => "i",
            Parameter::ArgumentOfPerigee => "omega",
            Parameter::Raan => "raan",
            Parameter::TrueAnomaly => "nu",
        }
    }

    /// Angles that wrap around rather than stop at the ends of their range.
    pub fn is_circular(self) -> bool {
        matches!(
            self,
            Parameter::ArgumentOfPerigee | Parameter::Raan | Parameter::TrueAnomaly
        )
    }

    pub fn is_angle(self) -> bool {
        !matches!(self, Parameter::SemiMajorAxis | Parameter::Eccentricity)
    }

    pub fn unit(self) -> &'static str {
        match self {
            Parameter::SemiMajorAxis => "units",
            Parameter::Eccentricity => "",
            _ => "°",
        }
    }

    /// Raw value, radians for angles.
    pub fn value(self, el: &OrbitalElements) -> f64 {
        match self {
            Parameter::SemiMajorAxis => el.a(),
            Parameter::Eccentricity => el.e(),
            Parameter::Inclination => el.i(),
            Parameter::ArgumentOfPerigee => el.omega(),
            Parameter::Raan => el.raan(),
            Parameter::TrueAnomaly => el.nu(),
        }
    }

    pub fn to_display(self, raw: f64) -> f64 {
        if self.is_angle() {
            to_degrees(raw)
        } else {
            raw
        }
    }

    pub fn from_display(self, shown: f64) -> f64 {
        if self.is_angle() {
            to_radians(shown)
        } else {
            shown
        }
    }

    pub fn display_value(self, el: &OrbitalElements) -> f64 {
        self.to_display(self.value(el))
    }

    /// Replaces this one field, leaving the rest of the record alone.
    pub fn apply(self, el: OrbitalElements, raw: f64) -> ElementsResult<OrbitalElements> {
        match self {
            Parameter::SemiMajorAxis => el.with_a(raw),
            Parameter::Eccentricity => el.with_e(raw),
            Parameter::Inclination => el.with_i(raw),
            Parameter::ArgumentOfPerigee => el.with_omega(raw),
            Parameter::Raan => el.with_raan(raw),
            Parameter::TrueAnomaly => el.with_nu(raw),
        }
    }

    pub fn spec(self, ranges: &ControlRanges) -> ControlSpec {
        match self {
            Parameter::SemiMajorAxis => ranges.a,
            Parameter::Eccentricity => ranges.e,
            Parameter::Inclination => ranges.i,
            Parameter::ArgumentOfPerigee => ranges.omega,
            Parameter::Raan => ranges.raan,
            Parameter::TrueAnomaly => ranges.nu,
        }
    }

    /// Whether the value means anything geometrically under `flags`.
    pub fn is_defined(self, flags: Singularities) -> bool {
        match self {
            Parameter::ArgumentOfPerigee => flags.perigee_defined(),
            Parameter::Raan => flags.node_defined(),
            _ => true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ControlState {
    pub parameter: Parameter,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub enabled: bool,
}

/// Owns the snapshot the UI edits. Each change swaps in a whole new record.
#[derive(Debug)]
pub struct Session {
    config: Config,
    initial: OrbitalElements,
    elements: OrbitalElements,
    latch: SingularityLatch,
}

impl Session {
    pub fn new(config: Config) -> Result<Session, ConfigError> {
        config.validate()?;
        let initial = config.initial.to_elements()?;
        let latch = SingularityLatch::new(
            config.singularity.thresholds(),
            config.singularity.release_factor,
            &initial,
        );
        Ok(Session {
            config,
            initial,
            elements: initial,
            latch,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn elements(&self) -> &OrbitalElements {
        &self.elements
    }

    pub fn singularities(&self) -> Singularities {
        self.latch.state()
    }

    /// Sets one control from a display-unit value. Bounded fields are clamped
    /// to their range; circular angles wrap.
    pub fn set(&mut self, parameter: Parameter, shown: f64) -> ElementsResult<&OrbitalElements> {
        if !shown.is_finite() {
            return Err(ElementsError::NotFinite {
                field: parameter.field(),
                value: shown,
            });
        }
        let clamped = if parameter.is_circular() {
            shown
        } else {
            parameter.spec(&self.config.controls).clamp(shown)
        };
        if clamped != shown {
            warn!(
                parameter = parameter.symbol(),
                requested = shown,
                clamped,
                "control value out of range"
            );
        }
        self.elements = parameter.apply(self.elements, parameter.from_display(clamped))?;
        let flags = self.latch.update(&self.elements);
        debug!(
            parameter = parameter.symbol(),
            value = clamped,
            flags = ?flags,
            "elements updated"
        );
        Ok(&self.elements)
    }

    pub fn reset(&mut self) {
        self.elements = self.initial;
        self.latch.reset(&self.elements);
        debug!("elements reset");
    }

    pub fn controls(&self) -> Vec<ControlState> {
        let flags = self.singularities();
        Parameter::ALL
            .iter()
            .map(|&p| {
                let spec = p.spec(&self.config.controls);
                ControlState {
                    parameter: p,
                    value: p.display_value(&self.elements),
                    min: spec.min,
                    max: spec.max,
                    step: spec.step,
                    enabled: p.is_defined(flags),
                }
            })
            .collect()
    }

    /// Explanation request that agrees with the flags the controls show.
    pub fn explain(&self, parameter: Parameter) -> ExplanationRequest {
        ExplanationRequest::with_singularities(parameter, &self.elements, self.singularities())
    }

    /// Recomputes all geometry for the current snapshot.
    pub fn scene(&self) -> Scene {
        Scene::with_singularities(&self.elements, &self.config, self.singularities())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(Config::default()).unwrap()
    }

    fn control(s: &Session, p: Parameter) -> ControlState {
        s.controls().into_iter().find(|c| c.parameter == p).unwrap()
    }

    #[test]
    fn starts_at_default_orbit() {
        let s = session();
        assert_eq!(*s.elements(), OrbitalElements::default());
        let i = control(&s, Parameter::Inclination);
        assert!((i.value - 45.0).abs() < 1e-9);
        assert!(s.controls().iter().all(|c| c.enabled));
    }

    #[test]
    fn angles_enter_in_degrees() {
        let mut s = session();
        s.set(Parameter::Raan, 90.0).unwrap();
        assert!((s.elements().raan() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert_eq!(s.elements().a(), 8.0);
    }

    #[test]
    fn values_are_clamped_to_range() {
        let mut s = session();
        s.set(Parameter::Eccentricity, 1.5).unwrap();
        assert_eq!(s.elements().e(), 0.99);
        s.set(Parameter::SemiMajorAxis, -2.0).unwrap();
        assert_eq!(s.elements().a(), 4.0);
        assert!(s.set(Parameter::Inclination, f64::NAN).is_err());
    }

    #[test]
    fn singular_controls_are_disabled() {
        let mut s = session();
        s.set(Parameter::Eccentricity, 0.0).unwrap();
        assert!(!control(&s, Parameter::ArgumentOfPerigee).enabled);
        assert!(control(&s, Parameter::Raan).enabled);
        s.set(Parameter::Inclination, 0.0).unwrap();
        assert!(!control(&s, Parameter::Raan).enabled);
        assert!(control(&s, Parameter::TrueAnomaly).enabled);
        s.set(Parameter::Eccentricity, 0.2).unwrap();
        assert!(control(&s, Parameter::ArgumentOfPerigee).enabled);
    }

    #[test]
    fn reset_restores_initial() {
        let mut s = session();
        s.set(Parameter::Eccentricity, 0.0).unwrap();
        s.set(Parameter::TrueAnomaly, 200.0).unwrap();
        s.reset();
        assert_eq!(*s.elements(), OrbitalElements::default());
        assert!(s.singularities().is_empty());
    }

    #[test]
    fn hysteresis_from_config() {
        let mut config = Config::default();
        config.singularity.release_factor = 3.0;
        let mut s = Session::new(config).unwrap();
        s.set(Parameter::Eccentricity, 0.0).unwrap();
        s.set(Parameter::Eccentricity, 0.02).unwrap();
        assert!(!control(&s, Parameter::ArgumentOfPerigee).enabled);
        s.set(Parameter::Eccentricity, 0.04).unwrap();
        assert!(control(&s, Parameter::ArgumentOfPerigee).enabled);
    }

    #[test]
    fn explanation_follows_latched_flags() {
        let mut config = Config::default();
        config.singularity.release_factor = 3.0;
        let mut s = Session::new(config).unwrap();
        s.set(Parameter::Eccentricity, 0.0).unwrap();
        s.set(Parameter::Eccentricity, 0.02).unwrap();
        let req = s.explain(Parameter::ArgumentOfPerigee);
        assert!(!req.defined);
        assert!(req.prompt.contains("circular"));
        assert_eq!(req.defined, control(&s, Parameter::ArgumentOfPerigee).enabled);
        s.set(Parameter::Eccentricity, 0.04).unwrap();
        assert!(s.explain(Parameter::ArgumentOfPerigee).defined);
    }

    #[test]
    fn circular_angles_wrap_instead_of_clamping() {
        let mut s = session();
        s.set(Parameter::ArgumentOfPerigee, -10.0).unwrap();
        assert!((control(&s, Parameter::ArgumentOfPerigee).value - 350.0).abs() < 1e-9);
        s.set(Parameter::TrueAnomaly, 370.0).unwrap();
        assert!((control(&s, Parameter::TrueAnomaly).value - 10.0).abs() < 1e-9);
        s.set(Parameter::Raan, 725.0).unwrap();
        assert!((control(&s, Parameter::Raan).value - 5.0).abs() < 1e-9);
        // bounded fields still clamp
        s.set(Parameter::Inclination, -10.0).unwrap();
        assert_eq!(s.elements().i(), 0.0);
    }
}
