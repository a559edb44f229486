pub use num_traits::{Float, Zero};
use na::{Matrix3, Rotation3, Vector3};
use tau::TAU;

lazy_static! {
    /// Relabels the physics frame (Z is the reference pole) into the render
    /// frame (Y is up): physics X -> render X, physics Z -> render Y,
    /// physics Y -> render -Z. A proper rotation, so handedness survives.
    #[rustfmt::skip]
    pub static ref RENDER_FROM_PHYSICS: Rotation3<f64> =
        Rotation3::from_matrix_unchecked(Matrix3::new(1.0, 0.0,  0.0,
                                                      0.0, 0.0,  1.0,
                                                      0.0, -1.0, 0.0));
}

pub fn to_radians<N: Float>(deg: N) -> N {
    deg.to_radians()
}

pub fn to_degrees<N: Float>(rad: N) -> N {
    rad.to_degrees()
}

/// Wraps an angle into `[0, TAU)`.
pub fn wrap_angle(x: f64) -> f64 {
    let w = x.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if w >= TAU {
        Zero::zero()
    } else {
        w
    }
}

pub fn to_render_axes(v: Vector3<f64>) -> Vector3<f64> {
    *RENDER_FROM_PHYSICS * v
}
