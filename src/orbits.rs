use na::{Rotation3, Vector3};
use tau::TAU;

use crate::elements::OrbitalElements;
use crate::math::RENDER_FROM_PHYSICS;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Plane {
    pub lon_asc_node: f64,
    pub inclination: f64,
    pub arg_peri: f64,
}

impl Plane {
    /// Computes a transformation matrix.
    /// It transforms the x-y plane to the orbital plane
    /// where the x-axis points towards the periapsis.
    pub fn to_matrix(&self) -> Rotation3<f64> {
        Rotation3::from_axis_angle(&Vector3::z_axis(), self.lon_asc_node)
            * Rotation3::from_axis_angle(&Vector3::x_axis(), self.inclination)
            * Rotation3::from_axis_angle(&Vector3::z_axis(), self.arg_peri)
    }

    /// Perifocal frame straight to render axes.
    pub fn to_render_matrix(&self) -> Rotation3<f64> {
        *RENDER_FROM_PHYSICS * self.to_matrix()
    }
}

/// Maps a perifocal point (x towards perigee, z along the angular momentum)
/// into the render frame.
pub fn to_render_frame(point: Vector3<f64>, elements: &OrbitalElements) -> Vector3<f64> {
    elements.plane().to_render_matrix() * point
}

/// Satellite position at `anomaly`, or at the elements' own true anomaly.
pub fn position(elements: &OrbitalElements, anomaly: Option<f64>) -> Vector3<f64> {
    let nu = anomaly.unwrap_or_else(|| elements.nu());
    let p = elements.ellipse().point(nu);
    to_render_frame(Vector3::new(p.x, p.y, 0.0), elements)
}

pub fn periapsis_position(elements: &OrbitalElements) -> Vector3<f64> {
    position(elements, Some(0.0))
}

pub fn apoapsis_position(elements: &OrbitalElements) -> Vector3<f64> {
    position(elements, Some(TAU / 2.0))
}

/// Where the orbit crosses the reference plane heading north.
pub fn ascending_node_position(elements: &OrbitalElements) -> Vector3<f64> {
    position(elements, Some(-elements.omega()))
}

pub fn descending_node_position(elements: &OrbitalElements) -> Vector3<f64> {
    position(elements, Some(TAU / 2.0 - elements.omega()))
}

/// Unit direction of motion at `anomaly`.
///
/// Perifocal velocity is proportional to `(-sin v, e + cos v)`, which never
/// vanishes for `e < 1`.
pub fn velocity_direction(elements: &OrbitalElements, anomaly: Option<f64>) -> Vector3<f64> {
    let nu = anomaly.unwrap_or_else(|| elements.nu());
    let (sin, cos) = nu.sin_cos();
    let v = Vector3::new(-sin, elements.e() + cos, 0.0);
    to_render_frame(v.normalize(), elements)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn el(a: f64, e: f64, i: f64, omega: f64, raan: f64, nu: f64) -> OrbitalElements {
        OrbitalElements::new(a, e, i, omega, raan, nu).unwrap()
    }

    #[test]
    fn identity_orientation_only_relabels_axes() {
        let e = el(5.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        let p = to_render_frame(Vector3::new(1.0, 2.0, 3.0), &e);
        assert!((p - Vector3::new(1.0, 3.0, -2.0)).norm() < 1e-12);
    }

    #[test]
    fn polar_orbit_rises_along_render_up() {
        // i = 90 deg, omega = 90 deg: perigee sits over the north pole
        let e = el(5.0, 0.0, TAU / 4.0, TAU / 4.0, 0.0, 0.0);
        let p = position(&e, None);
        assert!((p - Vector3::new(0.0, 5.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn raan_rotates_about_render_up() {
        // Omega = 90 deg with no tilt: perigee moves from +x to physics +y,
        // which the render frame labels -z
        let e = el(5.0, 0.0, 0.0, 0.0, TAU / 4.0, 0.0);
        let p = position(&e, None);
        assert!((p - Vector3::new(0.0, 0.0, -5.0)).norm() < 1e-12);
    }

    #[test]
    fn anomaly_override_beats_stored_nu() {
        let e = el(8.0, 0.4, 0.3, 0.2, 0.1, 2.0);
        assert_eq!(position(&e, Some(0.0)), periapsis_position(&e));
        assert!((position(&e, None) - position(&e, Some(2.0))).norm() < 1e-12);
    }

    #[test]
    fn nodes_lie_in_reference_plane() {
        let e = el(8.0, 0.4, 0.8, 1.1, 0.5, 0.0);
        let up = Vector3::y();
        let asc = ascending_node_position(&e);
        let desc = descending_node_position(&e);
        assert!(asc.dot(&up).abs() < 1e-9);
        assert!(desc.dot(&up).abs() < 1e-9);
        // heading north at the ascending node
        let v = velocity_direction(&e, Some(-e.omega()));
        assert!(v.dot(&up) > 0.0);
        // and opposite one another through the focus
        assert!(asc.normalize().dot(&desc.normalize()) < -1.0 + 1e-9);
    }

    #[test]
    fn velocity_at_perigee_is_tangent() {
        let e = el(8.0, 0.6, 0.4, 2.0, 1.0, 0.0);
        let v = velocity_direction(&e, Some(0.0));
        assert!((v.norm() - 1.0).abs() < 1e-12);
        assert!(v.dot(&periapsis_position(&e)).abs() < 1e-9);
    }
}
