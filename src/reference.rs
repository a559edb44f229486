//! Unit direction overlays: node line, apse line and orbit normal.
//!
//! None of these divide, so they stay finite for circular and equatorial
//! orbits even though omega or Omega are meaningless there.

use na::{Unit, Vector3};

use crate::elements::OrbitalElements;
use crate::math::to_render_axes;
use crate::orbits::{position, to_render_frame};
use crate::singularity::Singularities;

/// Direction of the ascending node, from Omega alone.
///
/// For equatorial orbits the node is undefined and this falls back to the
/// reference X axis.
pub fn ascending_node_direction(elements: &OrbitalElements) -> Unit<Vector3<f64>> {
    ascending_node_direction_with(elements, Singularities::of(elements))
}

/// Same as [`ascending_node_direction`], falling back only when `flags` say
/// the node is undefined.
pub fn ascending_node_direction_with(
    elements: &OrbitalElements,
    flags: Singularities,
) -> Unit<Vector3<f64>> {
    if !flags.node_defined() {
        return Vector3::x_axis();
    }
    let (sin, cos) = elements.raan().sin_cos();
    Unit::new_normalize(to_render_axes(Vector3::new(cos, sin, 0.0)))
}

pub fn perigee_direction(elements: &OrbitalElements) -> Unit<Vector3<f64>> {
    Unit::new_normalize(position(elements, Some(0.0)))
}

/// Direction of the orbital angular momentum.
pub fn orbit_normal(elements: &OrbitalElements) -> Unit<Vector3<f64>> {
    Unit::new_normalize(to_render_frame(Vector3::z(), elements))
}
