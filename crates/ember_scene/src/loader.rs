//! Scene description files.
//!
//! A scene file is a JSON document:
//!
//! ```json
//! {
//!   "camera": { "look_from": [0, 2, 3.5], "look_at": [0, 1.6, -2], "vfov": 50 },
//!   "render": { "samples_per_pixel": 64, "max_depth": 4 },
//!   "spheres": [ { "center": [0, 1, -2], "radius": 0.7, "color": 0.75 } ],
//!   "planes":  [ { "point": [0, 0, 0], "normal": [0, 1, 0], "color": 0.8 } ]
//! }
//! ```
//!
//! Everything the tracer treats as a precondition (positive radii, unit
//! normals, non-negative emission) is checked here, since file input is the
//! one place where those values are not under the programmer's control.

use std::path::Path;

use ember_math::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scene::{Plane, Scene, Sphere};

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid sphere {index}: {reason}")]
    InvalidSphere { index: usize, reason: String },

    #[error("Invalid plane {index}: {reason}")]
    InvalidPlane { index: usize, reason: String },

    #[error("Invalid camera: {0}")]
    InvalidCamera(String),
}

/// Result type for scene loading operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// How diffuse bounce directions are drawn around the surface normal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SamplingMode {
    /// Area-preserving lift of the concentric disk onto the hemisphere.
    #[default]
    Uniform,
    /// Malley's method: disk sample projected up, density proportional to cos.
    Cosine,
}

/// Largest image, in pixels, a scene file or the CLI may request.
pub const MAX_IMAGE_PIXELS: u64 = 1 << 26;

/// Pinhole camera placement and image size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub look_from: Vec3,
    pub look_at: Vec3,
    pub vup: Vec3,
    /// Vertical field of view in degrees
    pub vfov: f32,
    pub width: u32,
    pub height: u32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            look_from: Vec3::new(0.0, 0.0, 0.0),
            look_at: Vec3::new(0.0, 0.0, -1.0),
            vup: Vec3::Y,
            vfov: 60.0,
            width: 160,
            height: 120,
        }
    }
}

impl CameraSettings {
    fn validate(&self) -> SceneResult<()> {
        let invalid =
            |msg: &str| -> SceneResult<()> { Err(SceneError::InvalidCamera(msg.to_string())) };

        if !(self.look_from.is_finite() && self.look_at.is_finite() && self.vup.is_finite()) {
            return invalid("non-finite position");
        }
        if (self.look_from - self.look_at).length_squared() == 0.0 {
            return invalid("look_from and look_at coincide");
        }
        if self
            .vup
            .cross(self.look_from - self.look_at)
            .length_squared()
            == 0.0
        {
            return invalid("vup is parallel to the view direction");
        }
        if !(self.vfov > 0.0 && self.vfov < 180.0) {
            return invalid("vfov must be in (0, 180) degrees");
        }
        if self.width == 0 || self.height == 0 {
            return invalid("image size must be non-zero");
        }
        if self.width as u64 * self.height as u64 > MAX_IMAGE_PIXELS {
            return invalid("image size exceeds the pixel limit");
        }
        Ok(())
    }
}

/// Render options a scene file may override.
///
/// Unset fields keep whatever the renderer's defaults are.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOverrides {
    pub samples_per_pixel: Option<u32>,
    pub max_depth: Option<u32>,
    pub epsilon: Option<f32>,
    pub background: Option<f32>,
    pub sampling: Option<SamplingMode>,
}

/// A loaded scene plus the optional camera and render blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneDescription {
    pub scene: Scene,
    pub camera: Option<CameraSettings>,
    pub render: RenderOverrides,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SceneFile {
    #[serde(default)]
    camera: Option<CameraSettings>,
    #[serde(default)]
    render: RenderOverrides,
    #[serde(default)]
    spheres: Vec<Sphere>,
    #[serde(default)]
    planes: Vec<Plane>,
}

/// Load and validate a scene description from a JSON file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<SceneDescription> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    log::debug!("Read scene file {}", path.display());
    load_scene_from_str(&text)
}

/// Load and validate a scene description from JSON text.
pub fn load_scene_from_str(text: &str) -> SceneResult<SceneDescription> {
    let file: SceneFile = serde_json::from_str(text)?;

    for (index, sphere) in file.spheres.iter().enumerate() {
        validate_sphere(sphere).map_err(|reason| SceneError::InvalidSphere { index, reason })?;
    }

    let mut planes = Vec::with_capacity(file.planes.len());
    for (index, plane) in file.planes.iter().enumerate() {
        let plane =
            normalize_plane(plane).map_err(|reason| SceneError::InvalidPlane { index, reason })?;
        planes.push(plane);
    }

    if let Some(camera) = &file.camera {
        camera.validate()?;
    }

    let scene = Scene::from_parts(file.spheres, planes);

    if scene.is_empty() {
        log::warn!("Scene has no primitives; every ray will miss");
    } else if scene.light_count() == 0 {
        log::warn!("Scene has no emissive spheres; the image will be background only");
    }
    log::debug!(
        "Loaded scene: {} spheres ({} lights), {} planes",
        scene.sphere_count(),
        scene.light_count(),
        scene.plane_count()
    );

    Ok(SceneDescription {
        scene,
        camera: file.camera,
        render: file.render,
    })
}

fn validate_color(color: f32) -> Result<(), String> {
    if !(0.0..=1.0).contains(&color) {
        return Err(format!("color {color} outside [0, 1]"));
    }
    Ok(())
}

fn validate_sphere(sphere: &Sphere) -> Result<(), String> {
    if !sphere.center.is_finite() {
        return Err("non-finite center".to_string());
    }
    if !(sphere.radius.is_finite() && sphere.radius > 0.0) {
        return Err(format!("radius {} must be positive", sphere.radius));
    }
    validate_color(sphere.color)?;
    if !(sphere.emission.is_finite() && sphere.emission >= 0.0) {
        return Err(format!("emission {} must be non-negative", sphere.emission));
    }
    Ok(())
}

fn normalize_plane(plane: &Plane) -> Result<Plane, String> {
    if !(plane.point.is_finite() && plane.normal.is_finite()) {
        return Err("non-finite point or normal".to_string());
    }
    if plane.normal.length_squared() == 0.0 {
        return Err("zero-length normal".to_string());
    }
    // Huge components overflow the length to inf
    let normal = plane
        .normal
        .try_normalize()
        .ok_or_else(|| "degenerate normal".to_string())?;
    validate_color(plane.color)?;
    Ok(Plane::new(plane.point, normal, plane.color))
}
