//! Session configuration, read from JSON. Every field is optional.
//!
//! Angles are in degrees here, since this is what the controls show.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::elements::OrbitalElements;
use crate::error::ConfigError;
use crate::math::to_radians;
use crate::path::DEFAULT_SEGMENTS;
use crate::singularity::{Thresholds, CIRCULAR_EPSILON};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub initial: InitialElements,
    pub controls: ControlRanges,
    pub singularity: SingularityConfig,
    pub render: RenderConfig,
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct InitialElements {
    pub a: f64,
    pub e: f64,
    pub i: f64,
    pub omega: f64,
    pub raan: f64,
    pub nu: f64,
}

impl Default for InitialElements {
    fn default() -> Self {
        InitialElements {
            a: 8.0,
            e: 0.4,
            i: 45.0,
            omega: 45.0,
            raan: 30.0,
            nu: 0.0,
        }
    }
}

impl InitialElements {
    pub fn to_elements(&self) -> Result<OrbitalElements, ConfigError> {
        Ok(OrbitalElements::from_degrees(
            self.a, self.e, self.i, self.omega, self.raan, self.nu,
        )?)
    }
}

/// Slider range and step, in display units.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct ControlSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ControlSpec {
    pub const fn new(min: f64, max: f64, step: f64) -> ControlSpec {
        ControlSpec { min, max, step }
    }

    pub fn clamp(&self, x: f64) -> f64 {
        x.max(self.min).min(self.max)
    }

    fn validate(&self, parameter: &'static str) -> Result<(), ConfigError> {
        let ok = self.min.is_finite()
            && self.max.is_finite()
            && self.min < self.max
            && self.step > 0.0
            && self.step.is_finite();
        if ok {
            Ok(())
        } else {
            Err(ConfigError::Range {
                parameter,
                min: self.min,
                max: self.max,
            })
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct ControlRanges {
    pub a: ControlSpec,
    pub e: ControlSpec,
    pub i: ControlSpec,
    pub omega: ControlSpec,
    pub raan: ControlSpec,
    pub nu: ControlSpec,
}

impl Default for ControlRanges {
    fn default() -> Self {
        ControlRanges {
            a: ControlSpec::new(4.0, 15.0, 0.1),
            e: ControlSpec::new(0.0, 0.99, 0.01),
            i: ControlSpec::new(0.0, 180.0, 1.0),
            omega: ControlSpec::new(0.0, 360.0, 1.0),
            raan: ControlSpec::new(0.0, 360.0, 1.0),
            nu: ControlSpec::new(0.0, 360.0, 1.0),
        }
    }
}

impl ControlRanges {
    fn validate(&self) -> Result<(), ConfigError> {
        self.a.validate("a")?;
        self.e.validate("e")?;
        self.i.validate("i")?;
        self.omega.validate("omega")?;
        self.raan.validate("raan")?;
        self.nu.validate("nu")?;
        // every value a slider can reach must be a valid element
        if self.a.min <= 0.0 {
            return Err(ConfigError::Range {
                parameter: "a",
                min: self.a.min,
                max: self.a.max,
            });
        }
        if self.e.min < 0.0 || self.e.max >= 1.0 {
            return Err(ConfigError::Range {
                parameter: "e",
                min: self.e.min,
                max: self.e.max,
            });
        }
        if self.i.min < 0.0 || self.i.max > 180.0 {
            return Err(ConfigError::Range {
                parameter: "i",
                min: self.i.min,
                max: self.i.max,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct SingularityConfig {
    /// Eccentricity threshold.
    pub circular: f64,
    /// Inclination threshold, degrees.
    pub equatorial: f64,
    /// Hysteresis for the controls; 1.0 disables it.
    pub release_factor: f64,
}

impl Default for SingularityConfig {
    fn default() -> Self {
        SingularityConfig {
            circular: CIRCULAR_EPSILON,
            equatorial: 0.01,
            release_factor: 1.0,
        }
    }
}

impl SingularityConfig {
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            circular: self.circular,
            equatorial: to_radians(self.equatorial),
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub segments: usize,
    pub body_radius: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            segments: DEFAULT_SEGMENTS,
            body_radius: 2.0,
        }
    }
}

impl Config {
    pub fn from_json(s: &str) -> Result<Config, ConfigError> {
        let config: Config = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config");
        Config::from_json(&fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.controls.validate()?;
        self.initial.to_elements()?;
        let s = &self.singularity;
        if !(s.circular >= 0.0 && s.equatorial >= 0.0 && s.release_factor >= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "singularity thresholds must be non-negative with release_factor >= 1, got {:?}",
                s
            )));
        }
        if self.render.segments == 0 || !(self.render.body_radius > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "render needs segments > 0 and a positive body radius, got {:?}",
                self.render
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let c = Config::from_json("{}").unwrap();
        assert_eq!(c.initial.to_elements().unwrap(), OrbitalElements::default());
        assert_eq!(c.render.segments, DEFAULT_SEGMENTS);
        assert_eq!(c.controls.a, ControlSpec::new(4.0, 15.0, 0.1));
        assert_eq!(c.singularity.thresholds(), Thresholds::default());
    }

    #[test]
    fn partial_override() {
        let c = Config::from_json(
            r#"{ "initial": { "e": 0.0, "i": 0.0 },
                 "render": { "segments": 64 },
                 "singularity": { "release_factor": 1.5 } }"#,
        )
        .unwrap();
        let el = c.initial.to_elements().unwrap();
        assert_eq!(el.e(), 0.0);
        assert_eq!(el.a(), 8.0);
        assert_eq!(c.render.segments, 64);
        assert_eq!(c.render.body_radius, 2.0);
        assert_eq!(c.singularity.release_factor, 1.5);
    }

    #[test]
    fn rejects_bad_config() {
        assert!(matches!(
            Config::from_json(r#"{ "controls": { "e": { "min": 0.0, "max": 1.0, "step": 0.01 } } }"#),
            Err(ConfigError::Range { parameter: "e", .. })
        ));
        assert!(matches!(
            Config::from_json(r#"{ "controls": { "a": { "min": 5.0, "max": 5.0, "step": 0.1 } } }"#),
            Err(ConfigError::Range { parameter: "a", .. })
        ));
        assert!(matches!(
            Config::from_json(r#"{ "initial": { "a": -1.0 } }"#),
            Err(ConfigError::Elements(_))
        ));
        assert!(matches!(
            Config::from_json(r#"{ "render": { "segments": 0 } }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(Config::from_json("not json"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            Config::load("/nonexistent/orbit-viz.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
