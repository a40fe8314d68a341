//! Ember math - vector algebra and ray geometry for the path tracer.
//!
//! `Vec3` is glam's value type. Everything the tracer needs beyond glam
//! (in-place normalisation, reflection, the orthonormal basis used to build
//! shading frames, the self-intersection epsilon) lives here.

// Re-export glam for convenience
pub use glam::*;

mod basis;
mod interval;
mod ray;
mod vector;

pub use basis::build_orthonormal_basis;
pub use interval::Interval;
pub use ray::Ray;
pub use vector::{clamp, cross, dot, normalize_in_place, reflect, squared_length};

/// Self-intersection guard used for hit distances and ray offsets.
pub const EPSILON: f32 = 0.0001;

/// pi / 2
pub const FRAC_PI_2: f32 = std::f32::consts::FRAC_PI_2;

/// pi / 4
pub const FRAC_PI_4: f32 = std::f32::consts::FRAC_PI_4;

/// sqrt(2)
pub const SQRT_2: f32 = std::f32::consts::SQRT_2;
