//! Ember tracer - Monte Carlo path tracing for sphere/plane scenes.
//!
//! Single-threaded and allocation-free per sample: rays, hit records and
//! samples are plain `Copy` values, and the bounce loop has a fixed depth
//! cap. The random source is always passed in by the caller.

mod camera;
mod config;
pub mod integrator;
pub mod intersect;
mod renderer;
pub mod sampling;

pub use camera::Camera;
pub use config::{ConfigError, ConfigResult, RenderConfig, MAX_DEPTH_LIMIT};
pub use integrator::radiance;
pub use intersect::{intersect_plane, intersect_scene, intersect_sphere, Intersection};
pub use renderer::{
    clamp_01, linear_to_gamma, pixel_count, radiance_to_luma8, render, render_pixel, ImageBuffer,
};

/// Re-export math and scene types
pub use ember_math::{Ray, Vec3};
pub use ember_scene::{Plane, SamplingMode, Scene, Sphere};
