//! Scene representation for Ember.
//!
//! A scene is a flat list of spheres and a flat list of planes. It is
//! populated once before rendering and only ever borrowed immutably by the
//! tracer; there is no acceleration structure.

use ember_math::Vec3;
use serde::{Deserialize, Serialize};

/// A sphere primitive.
///
/// `color` is the scalar albedo in [0, 1]. `emission` is the radiance the
/// sphere emits when hit directly; zero for ordinary surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub color: f32,
    #[serde(default)]
    pub emission: f32,
}

impl Sphere {
    /// Create a new sphere. `radius` must be positive.
    pub fn new(center: Vec3, radius: f32, color: f32, emission: f32) -> Self {
        debug_assert!(radius > 0.0, "sphere radius must be positive");
        debug_assert!(emission >= 0.0, "sphere emission must be non-negative");
        Self {
            center,
            radius,
            color,
            emission,
        }
    }

    /// Create a non-emissive sphere.
    pub fn diffuse(center: Vec3, radius: f32, color: f32) -> Self {
        Self::new(center, radius, color, 0.0)
    }

    /// Check if this sphere is a light source.
    pub fn is_emissive(&self) -> bool {
        self.emission > 0.0
    }
}

/// An infinite plane through `point` with unit normal `normal`.
///
/// Planes never emit light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub point: Vec3,
    pub normal: Vec3,
    pub color: f32,
}

impl Plane {
    /// Create a new plane. `normal` must be unit length.
    pub fn new(point: Vec3, normal: Vec3, color: f32) -> Self {
        debug_assert!(
            (normal.length_squared() - 1.0).abs() < 1e-3,
            "plane normal must be unit length"
        );
        Self {
            point,
            normal,
            color,
        }
    }
}

/// The full set of primitives the tracer intersects against.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    spheres: Vec<Sphere>,
    planes: Vec<Plane>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scene from existing primitive lists.
    pub fn from_parts(spheres: Vec<Sphere>, planes: Vec<Plane>) -> Self {
        Self { spheres, planes }
    }

    /// Add a sphere, returning its index.
    pub fn add_sphere(&mut self, sphere: Sphere) -> usize {
        self.spheres.push(sphere);
        self.spheres.len() - 1
    }

    /// Add a plane, returning its index.
    pub fn add_plane(&mut self, plane: Plane) -> usize {
        self.planes.push(plane);
        self.planes.len() - 1
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    pub fn plane_count(&self) -> usize {
        self.planes.len()
    }

    /// Check if the scene has no primitives at all.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty() && self.planes.is_empty()
    }

    /// Number of emissive spheres.
    pub fn light_count(&self) -> usize {
        self.spheres.iter().filter(|s| s.is_emissive()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_counts() {
        let mut scene = Scene::new();
        assert!(scene.is_empty());

        let a = scene.add_sphere(Sphere::diffuse(Vec3::ZERO, 1.0, 0.5));
        let b = scene.add_sphere(Sphere::new(Vec3::Y * 3.0, 0.5, 0.0, 4.0));
        let p = scene.add_plane(Plane::new(Vec3::ZERO, Vec3::Y, 0.8));

        assert_eq!((a, b, p), (0, 1, 0));
        assert_eq!(scene.sphere_count(), 2);
        assert_eq!(scene.plane_count(), 1);
        assert_eq!(scene.light_count(), 1);
        assert!(!scene.is_empty());
    }

    #[test]
    fn test_from_parts() {
        let scene = Scene::from_parts(
            vec![Sphere::diffuse(Vec3::ZERO, 1.0, 0.5)],
            vec![Plane::new(Vec3::ZERO, Vec3::Z, 0.1)],
        );
        assert_eq!(scene.spheres()[0].radius, 1.0);
        assert_eq!(scene.planes()[0].normal, Vec3::Z);
    }

    #[test]
    fn test_sphere_emission_default() {
        let sphere: Sphere =
            serde_json::from_str(r#"{ "center": [0, 1, 2], "radius": 0.5, "color": 0.3 }"#)
                .unwrap();
        assert_eq!(sphere.center, Vec3::new(0.0, 1.0, 2.0));
        assert_eq!(sphere.emission, 0.0);
        assert!(!sphere.is_emissive());
    }
}
