//! Built-in demo scene.

use ember_math::Vec3;

use crate::loader::{CameraSettings, RenderOverrides, SceneDescription};
use crate::scene::{Plane, Scene, Sphere};

/// A five-walled room with one diffuse sphere, lit by a sphere set into the
/// ceiling.
pub fn demo_scene() -> SceneDescription {
    let mut scene = Scene::new();

    // Floor, ceiling, back wall, left wall, right wall
    scene.add_plane(Plane::new(Vec3::new(0.0, 0.0, 0.0), Vec3::Y, 0.75));
    scene.add_plane(Plane::new(Vec3::new(0.0, 4.0, 0.0), -Vec3::Y, 0.75));
    scene.add_plane(Plane::new(Vec3::new(0.0, 0.0, -4.0), Vec3::Z, 0.75));
    scene.add_plane(Plane::new(Vec3::new(-2.0, 0.0, 0.0), Vec3::X, 0.45));
    scene.add_plane(Plane::new(Vec3::new(2.0, 0.0, 0.0), -Vec3::X, 0.6));

    scene.add_sphere(Sphere::diffuse(Vec3::new(0.6, 0.7, -2.5), 0.7, 0.8));
    scene.add_sphere(Sphere::diffuse(Vec3::new(-0.9, 0.45, -1.6), 0.45, 0.5));

    // Light: the lower cap pokes through the ceiling
    scene.add_sphere(Sphere::new(Vec3::new(0.0, 4.3, -2.2), 0.6, 0.0, 8.0));

    let camera = CameraSettings {
        look_from: Vec3::new(0.0, 2.0, 3.5),
        look_at: Vec3::new(0.0, 1.6, -2.0),
        vup: Vec3::Y,
        vfov: 50.0,
        width: 160,
        height: 120,
    };

    SceneDescription {
        scene,
        camera: Some(camera),
        render: RenderOverrides::default(),
    }
}
