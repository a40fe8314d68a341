//! Sampling utilities.
//!
//! The random source is always passed in explicitly as a `RngCore`, so
//! renders are reproducible from a seed and tests can script exact draws.

use ember_math::{Vec3, FRAC_PI_2, FRAC_PI_4};
use ember_scene::SamplingMode;
use rand::RngCore;

pub use ember_math::build_orthonormal_basis;

/// Draw a uniform float in [0, 1).
///
/// Uses the top 24 bits of a fresh `u32`, so every call consumes exactly one
/// draw from the source and 1.0 is never returned.
#[inline]
pub fn uniform01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() >> 8) as f32 * (1.0 / (1u32 << 24) as f32)
}

/// Shirley's concentric map from the unit square to the unit disk.
///
/// Returns the point in the xy plane (z = 0).
pub fn square_to_uniform_disk_concentric(x: f32, y: f32) -> Vec3 {
    let r1 = 2.0 * x - 1.0;
    let r2 = 2.0 * y - 1.0;

    let (r, phi) = if r1 == 0.0 && r2 == 0.0 {
        (0.0, 0.0)
    } else if r1 * r1 > r2 * r2 {
        (r1, FRAC_PI_4 * (r2 / r1))
    } else {
        (r2, FRAC_PI_2 - FRAC_PI_4 * (r1 / r2))
    };

    let (sin_phi, cos_phi) = phi.sin_cos();
    Vec3::new(r * cos_phi, r * sin_phi, 0.0)
}

/// Lift a disk point onto the unit hemisphere around +z.
///
/// `z = 1 - x^2 - y^2` and the xy part is scaled by `sqrt(z + 1)`, which keeps
/// the result on the unit sphere.
#[inline]
pub fn disk_to_hemisphere(p: Vec3) -> Vec3 {
    let z = 1.0 - p.x * p.x - p.y * p.y;
    let s = (z + 1.0).sqrt();
    Vec3::new(s * p.x, s * p.y, z)
}

/// Sample a direction on the unit hemisphere around +z from two fresh draws.
pub fn square_to_uniform_hemisphere(rng: &mut dyn RngCore) -> Vec3 {
    let x = uniform01(rng);
    let y = uniform01(rng);
    disk_to_hemisphere(square_to_uniform_disk_concentric(x, y))
}

/// Cosine-weighted hemisphere sample around +z (Malley's method).
pub fn square_to_cosine_hemisphere(rng: &mut dyn RngCore) -> Vec3 {
    let x = uniform01(rng);
    let y = uniform01(rng);
    let d = square_to_uniform_disk_concentric(x, y);
    let z = (1.0 - d.x * d.x - d.y * d.y).max(0.0).sqrt();
    Vec3::new(d.x, d.y, z)
}

/// Draw a local bounce direction with the configured distribution.
#[inline]
pub fn sample_hemisphere(mode: SamplingMode, rng: &mut dyn RngCore) -> Vec3 {
    match mode {
        SamplingMode::Uniform => square_to_uniform_hemisphere(rng),
        SamplingMode::Cosine => square_to_cosine_hemisphere(rng),
    }
}

/// Rotate a local direction (z = pole) into the frame `(tangent, bitangent, normal)`.
#[inline]
pub fn to_world(local: Vec3, tangent: Vec3, bitangent: Vec3, normal: Vec3) -> Vec3 {
    local.x * tangent + local.y * bitangent + local.z * normal
}
