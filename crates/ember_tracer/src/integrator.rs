//! Path integrator.
//!
//! Estimates the radiance arriving along a ray with a single diffuse path.
//! The bounce loop carries its own depth counter and throughput, so stack
//! use is constant no matter how deep the path goes.

use ember_math::Ray;
use ember_scene::Scene;
use rand::RngCore;

use crate::intersect::intersect_scene;
use crate::sampling::{sample_hemisphere, to_world};
use crate::RenderConfig;

/// Compute the radiance seen along `ray`.
///
/// A path ends when it escapes (background), hits an emitter (its emission),
/// or has already bounced `max_depth` times (zero). Otherwise a new direction
/// is drawn in the hit's local frame, the path restarts just above the
/// surface, and the throughput is attenuated by the surface albedo.
pub fn radiance(ray: &Ray, scene: &Scene, config: &RenderConfig, rng: &mut dyn RngCore) -> f32 {
    let mut ray = *ray;
    let mut throughput = 1.0;
    let mut depth = 0;

    loop {
        let Some(hit) = intersect_scene(&ray, scene, config.epsilon) else {
            return throughput * config.background;
        };

        if hit.emission > 0.0 {
            return throughput * hit.emission;
        }

        if depth >= config.max_depth {
            return 0.0;
        }

        throughput *= hit.color;
        if throughput == 0.0 {
            return 0.0;
        }

        let local = sample_hemisphere(config.sampling, rng);
        let direction = to_world(local, hit.tangent, hit.bitangent, hit.normal);
        let origin = ray.at(hit.t) + hit.normal * config.epsilon;

        ray = Ray::new(origin, direction);
        depth += 1;
    }
}
