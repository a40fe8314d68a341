//! Ember Scene - spheres, planes and scene description files.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Sphere`, `Plane`
//! - **Scene files**: JSON scene descriptions with validation
//! - **Demo scene**: a small closed room lit by an emissive sphere
//!
//! # Example
//!
//! ```ignore
//! use ember_scene::load_scene;
//!
//! let description = load_scene("room.json")?;
//! println!("Loaded {} spheres, {} planes",
//!     description.scene.sphere_count(),
//!     description.scene.plane_count());
//! ```

pub mod demo;
pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use demo::demo_scene;
pub use loader::{
    load_scene, load_scene_from_str, CameraSettings, RenderOverrides, SamplingMode,
    SceneDescription, SceneError, SceneResult, MAX_IMAGE_PIXELS,
};
pub use scene::{Plane, Scene, Sphere};
