//! Geometry core for an interactive Keplerian-elements visualizer.
//!
//! Every function here is a pure mapping from an [`OrbitalElements`] snapshot
//! (plus an optional true anomaly) to vectors in the render frame. The render
//! frame is Y-up; see [`math::RENDER_FROM_PHYSICS`].

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate bitflags;
extern crate nalgebra as na;
extern crate tau;

pub mod config;
pub mod conics;
pub mod controls;
pub mod elements;
pub mod error;
pub mod explain;
pub mod math;
pub mod orbits;
pub mod path;
pub mod reference;
pub mod render;
pub mod singularity;

pub use config::Config;
pub use controls::{Parameter, Session};
pub use elements::OrbitalElements;
pub use error::{ConfigError, ElementsError};
pub use orbits::{position, to_render_frame};
pub use path::{orbit_path, plane_fan, DEFAULT_SEGMENTS};
pub use reference::{ascending_node_direction, orbit_normal, perigee_direction};
pub use render::Scene;
pub use singularity::{is_circular, is_equatorial, Singularities};
