use na::Vector3;
use serde::Serialize;
use tau::TAU;
use tracing::debug;

use crate::config::Config;
use crate::elements::OrbitalElements;
use crate::math::to_render_axes;
use crate::orbits::{
    apoapsis_position, ascending_node_position, descending_node_position, periapsis_position,
    position,
};
use crate::path::{orbit_path, plane_fan};
use crate::reference::{ascending_node_direction_with, orbit_normal, perigee_direction};
use crate::singularity::Singularities;

// reference ring and polar axis sizes, relative to the orbit / body
const EQUATOR_MARGIN: f64 = 1.2;
const AXIS_LENGTH: f64 = 1.5;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct NodeLine {
    pub direction: Vector3<f64>,
    pub ascending: Vector3<f64>,
    pub descending: Vector3<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ApseLine {
    pub direction: Vector3<f64>,
    pub periapsis: Vector3<f64>,
    pub apoapsis: Vector3<f64>,
}

/// Everything a renderer needs for one frame, in render coordinates.
///
/// Overlays tied to an undefined angle are left out: no apse line for a
/// circular orbit, no node line for an equatorial one.
#[derive(Clone, Debug, Serialize)]
pub struct Scene {
    pub elements: OrbitalElements,
    pub circular: bool,
    pub equatorial: bool,
    pub body_radius: f64,
    pub satellite: Vector3<f64>,
    pub orbit: Vec<Vector3<f64>>,
    pub plane: Vec<[Vector3<f64>; 3]>,
    pub normal: Vector3<f64>,
    pub apse_line: Option<ApseLine>,
    pub node_line: Option<NodeLine>,
    pub equator: Vec<Vector3<f64>>,
    pub polar_axis: [Vector3<f64>; 2],
}

impl Scene {
    pub fn build(elements: &OrbitalElements, config: &Config) -> Scene {
        let flags = Singularities::with_thresholds(elements, &config.singularity.thresholds());
        Scene::with_singularities(elements, config, flags)
    }

    pub fn with_singularities(
        elements: &OrbitalElements,
        config: &Config,
        flags: Singularities,
    ) -> Scene {
        let segments = config.render.segments;
        let body_radius = config.render.body_radius;
        debug!(segments, flags = ?flags, "building scene");

        let apse_line = if flags.perigee_defined() {
            Some(ApseLine {
                direction: perigee_direction(elements).into_inner(),
                periapsis: periapsis_position(elements),
                apoapsis: apoapsis_position(elements),
            })
        } else {
            None
        };
        let node_line = if flags.node_defined() {
            Some(NodeLine {
                direction: ascending_node_direction_with(elements, flags).into_inner(),
                ascending: ascending_node_position(elements),
                descending: descending_node_position(elements),
            })
        } else {
            None
        };

        let ring = EQUATOR_MARGIN * elements.ellipse().apoapsis_distance();
        let up = to_render_axes(Vector3::z()) * body_radius * AXIS_LENGTH;

        Scene {
            elements: *elements,
            circular: !flags.perigee_defined(),
            equatorial: !flags.node_defined(),
            body_radius,
            satellite: position(elements, None),
            orbit: orbit_path(elements, segments).collect(),
            plane: plane_fan(elements, segments),
            normal: orbit_normal(elements).into_inner(),
            apse_line,
            node_line,
            equator: equator_ring(ring, segments),
            polar_axis: [-up, up],
        }
    }
}

/// Great circle of the reference plane at `radius`.
fn equator_ring(radius: f64, segments: usize) -> Vec<Vector3<f64>> {
    (0..=segments)
        .map(|j| {
            let (sin, cos) = (TAU * (j % segments.max(1)) as f64 / segments.max(1) as f64).sin_cos();
            to_render_axes(Vector3::new(radius * cos, radius * sin, 0.0))
        })
        .collect()
}
