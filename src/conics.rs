use na::{Point2, Vector2};

/// The in-plane shape of an elliptic orbit, focus at the origin and
/// periapsis on the +x axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipse {
    pub semi_major: f64,
    pub eccentricity: f64,
}

impl Ellipse {
    /// Callers guarantee `semi_major > 0` and `0 <= eccentricity < 1`;
    /// [`crate::OrbitalElements`] enforces both.
    pub fn new(semi_major: f64, eccentricity: f64) -> Ellipse {
        debug_assert!(semi_major > 0.0);
        debug_assert!((0.0..1.0).contains(&eccentricity));
        Ellipse {
            semi_major,
            eccentricity,
        }
    }

    pub fn semi_latus_rectum(&self) -> f64 {
        self.semi_major * (1.0 - self.eccentricity.powi(2))
    }

    pub fn semi_minor(&self) -> f64 {
        self.semi_major * (1.0 - self.eccentricity.powi(2)).sqrt()
    }

    pub fn periapsis_distance(&self) -> f64 {
        self.semi_major * (1.0 - self.eccentricity)
    }

    pub fn apoapsis_distance(&self) -> f64 {
        self.semi_major * (1.0 + self.eccentricity)
    }

    /// Distance from the focus at true anomaly `true_anom`.
    /// `1 + e cos(v) >= 1 - e > 0`, so this never divides by zero.
    pub fn radius(&self, true_anom: f64) -> f64 {
        self.semi_latus_rectum() / (1.0 + self.eccentricity * true_anom.cos())
    }

    /// Perifocal position at true anomaly `true_anom`.
    pub fn point(&self, true_anom: f64) -> Vector2<f64> {
        let r = self.radius(true_anom);
        let (sin, cos) = true_anom.sin_cos();
        Vector2::new(r * cos, r * sin)
    }

    /// Geometric center; sits `a*e` behind the focus, away from periapsis.
    pub fn center(&self) -> Point2<f64> {
        Point2::new(-self.semi_major * self.eccentricity, 0.0)
    }
}
