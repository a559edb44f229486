use na::Vector3;
use tau::TAU;

use crate::elements::OrbitalElements;
use crate::orbits::{position, to_render_frame};

pub const DEFAULT_SEGMENTS: usize = 200;
/// Upper bound on `segments`; larger requests are capped.
pub const MAX_SEGMENTS: usize = 1 << 24;

/// One closed revolution sampled at evenly spaced true anomalies.
///
/// Yields `segments + 1` points; the last one is the first repeated so the
/// loop closes exactly. The points are a pure function of the elements, so
/// calling [`orbit_path`] again starts over; a clone keeps its own cursor.
#[derive(Clone, Debug)]
pub struct OrbitPath {
    elements: OrbitalElements,
    segments: usize,
    next: usize,
}

pub fn orbit_path(elements: &OrbitalElements, segments: usize) -> OrbitPath {
    OrbitPath {
        elements: *elements,
        segments: segments.min(MAX_SEGMENTS),
        next: 0,
    }
}

impl OrbitPath {
    fn anomaly(&self, j: usize) -> f64 {
        if j == 0 || j == self.segments {
            0.0
        } else {
            TAU * j as f64 / self.segments as f64
        }
    }
}

impl Iterator for OrbitPath {
    type Item = Vector3<f64>;

    fn next(&mut self) -> Option<Vector3<f64>> {
        if self.next > self.segments {
            return None;
        }
        let p = position(&self.elements, Some(self.anomaly(self.next)));
        self.next += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.segments.saturating_add(1).saturating_sub(self.next);
        (n, Some(n))
    }
}

impl ExactSizeIterator for OrbitPath {}

/// Triangulates the filled orbit plane as a fan from the ellipse center.
pub fn plane_fan(elements: &OrbitalElements, segments: usize) -> Vec<[Vector3<f64>; 3]> {
    let c = elements.ellipse().center();
    let center = to_render_frame(Vector3::new(c.x, c.y, 0.0), elements);
    let points: Vec<_> = orbit_path(elements, segments).collect();
    points.windows(2).map(|w| [center, w[0], w[1]]).collect()
}
