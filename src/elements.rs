use serde::Serialize;
use tau::TAU;

use crate::conics::Ellipse;
use crate::error::{ElementsError, ElementsResult};
use crate::math::{to_radians, wrap_angle};
use crate::orbits::Plane;

/// The six classical orbital elements, angles in radians.
///
/// Only constructible through validating constructors, so `a > 0`,
/// `0 <= e < 1`, `0 <= i <= pi` always hold and the three circular angles are
/// wrapped into `[0, TAU)`. Updating a field produces a new record.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct OrbitalElements {
    a: f64,
    e: f64,
    i: f64,
    omega: f64,
    raan: f64,
    nu: f64,
}

impl Default for OrbitalElements {
    fn default() -> Self {
        OrbitalElements {
            a: 8.0,
            e: 0.4,
            i: to_radians(45.0),
            omega: to_radians(45.0),
            raan: to_radians(30.0),
            nu: 0.0,
        }
    }
}

fn finite(field: &'static str, value: f64) -> ElementsResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ElementsError::NotFinite { field, value })
    }
}

fn check_a(a: f64) -> ElementsResult<f64> {
    let a = finite("a", a)?;
    if a > 0.0 {
        Ok(a)
    } else {
        Err(ElementsError::SemiMajorAxis(a))
    }
}

fn check_e(e: f64) -> ElementsResult<f64> {
    let e = finite("e", e)?;
    if (0.0..1.0).contains(&e) {
        Ok(e)
    } else {
        Err(ElementsError::Eccentricity(e))
    }
}

fn check_i(i: f64) -> ElementsResult<f64> {
    let i = finite("i", i)?;
    if (0.0..=TAU / 2.0).contains(&i) {
        Ok(i)
    } else {
        Err(ElementsError::Inclination(i))
    }
}

fn check_angle(field: &'static str, x: f64) -> ElementsResult<f64> {
    finite(field, x).map(wrap_angle)
}

impl OrbitalElements {
    pub fn new(a: f64, e: f64, i: f64, omega: f64, raan: f64, nu: f64) -> ElementsResult<Self> {
        Ok(OrbitalElements {
            a: check_a(a)?,
            e: check_e(e)?,
            i: check_i(i)?,
            omega: check_angle("omega", omega)?,
            raan: check_angle("raan", raan)?,
            nu: check_angle("nu", nu)?,
        })
    }

    /// Same as [`OrbitalElements::new`] with the four angles given in degrees.
    pub fn from_degrees(
        a: f64,
        e: f64,
        i_deg: f64,
        omega_deg: f64,
        raan_deg: f64,
        nu_deg: f64,
    ) -> ElementsResult<Self> {
        OrbitalElements::new(
            a,
            e,
            to_radians(i_deg),
            to_radians(omega_deg),
            to_radians(raan_deg),
            to_radians(nu_deg),
        )
    }

    pub fn a(&self) -> f64 {
        self.a
    }
    pub fn e(&self) -> f64 {
        self.e
    }
    pub fn i(&self) -> f64 {
        self.i
    }
    pub fn omega(&self) -> f64 {
        self.omega
    }
    pub fn raan(&self) -> f64 {
        self.raan
    }
    pub fn nu(&self) -> f64 {
        self.nu
    }

    pub fn with_a(self, a: f64) -> ElementsResult<Self> {
        Ok(OrbitalElements { a: check_a(a)?, ..self })
    }
    pub fn with_e(self, e: f64) -> ElementsResult<Self> {
        Ok(OrbitalElements { e: check_e(e)?, ..self })
    }
    pub fn with_i(self, i: f64) -> ElementsResult<Self> {
        Ok(OrbitalElements { i: check_i(i)?, ..self })
    }
    pub fn with_omega(self, omega: f64) -> ElementsResult<Self> {
        Ok(OrbitalElements {
            omega: check_angle("omega", omega)?,
            ..self
        })
    }
    pub fn with_raan(self, raan: f64) -> ElementsResult<Self> {
        Ok(OrbitalElements {
            raan: check_angle("raan", raan)?,
            ..self
        })
    }
    pub fn with_nu(self, nu: f64) -> ElementsResult<Self> {
        Ok(OrbitalElements {
            nu: check_angle("nu", nu)?,
            ..self
        })
    }

    /// In-plane shape.
    pub fn ellipse(&self) -> Ellipse {
        Ellipse::new(self.a, self.e)
    }

    /// Orientation of the orbit plane.
    pub fn plane(&self) -> Plane {
        Plane {
            lon_asc_node: self.raan,
            inclination: self.i,
            arg_peri: self.omega,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_startup_orbit() {
        let el = OrbitalElements::default();
        let expected = OrbitalElements::from_degrees(8.0, 0.4, 45.0, 45.0, 30.0, 0.0).unwrap();
        assert_eq!(el.a(), expected.a());
        assert_eq!(el.e(), expected.e());
        assert!((el.i() - TAU / 8.0).abs() < 1e-12);
        assert!((el.omega() - TAU / 8.0).abs() < 1e-12);
        assert!((el.raan() - TAU / 12.0).abs() < 1e-12);
        assert_eq!(el.nu(), 0.0);
    }

    #[test]
    fn rejects_out_of_domain() {
        assert_eq!(
            OrbitalElements::new(0.0, 0.1, 0.0, 0.0, 0.0, 0.0),
            Err(ElementsError::SemiMajorAxis(0.0))
        );
        assert_eq!(
            OrbitalElements::new(-3.0, 0.1, 0.0, 0.0, 0.0, 0.0),
            Err(ElementsError::SemiMajorAxis(-3.0))
        );
        assert_eq!(
            OrbitalElements::new(5.0, 1.0, 0.0, 0.0, 0.0, 0.0),
            Err(ElementsError::Eccentricity(1.0))
        );
        assert_eq!(
            OrbitalElements::new(5.0, -0.1, 0.0, 0.0, 0.0, 0.0),
            Err(ElementsError::Eccentricity(-0.1))
        );
        assert_eq!(
            OrbitalElements::new(5.0, 0.1, 4.0, 0.0, 0.0, 0.0),
            Err(ElementsError::Inclination(4.0))
        );
        assert!(matches!(
            OrbitalElements::new(5.0, 0.1, 0.0, f64::NAN, 0.0, 0.0),
            Err(ElementsError::NotFinite { field: "omega", .. })
        ));
        assert!(OrbitalElements::new(5.0, 0.1, TAU / 2.0, 0.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn circular_fields_are_wrapped() {
        let el = OrbitalElements::new(5.0, 0.1, 0.2, -1.0, TAU + 0.5, 2.0 * TAU).unwrap();
        assert!((el.omega() - (TAU - 1.0)).abs() < 1e-12);
        assert!((el.raan() - 0.5).abs() < 1e-12);
        assert!(el.nu().abs() < 1e-12);
    }

    #[test]
    fn updates_touch_one_field() {
        let el = OrbitalElements::default();
        let moved = el.with_e(0.1).unwrap();
        assert_eq!(moved.e(), 0.1);
        assert_eq!(moved.a(), el.a());
        assert_eq!(moved.i(), el.i());
        assert_eq!(moved.omega(), el.omega());
        assert_eq!(moved.raan(), el.raan());
        assert_eq!(moved.nu(), el.nu());

        // a rejected update leaves the original untouched
        assert!(el.with_e(1.5).is_err());
        assert_eq!(el.e(), 0.4);
    }
}
