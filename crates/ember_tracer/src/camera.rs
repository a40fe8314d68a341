//! Camera for ray generation.

use ember_math::{Ray, Vec3};
use ember_scene::CameraSettings;
use rand::RngCore;

use crate::sampling::uniform01;

/// Pinhole camera for generating primary rays.
#[derive(Clone)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    // Camera positioning
    look_from: Vec3,
    look_at: Vec3,
    vup: Vec3,

    // Vertical field of view in degrees
    vfov: f32,

    // Cached computed values (set by initialize())
    center: Vec3,
    pixel00_loc: Vec3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self::from_settings(&CameraSettings::default())
    }

    /// Create a camera from scene-file settings.
    ///
    /// The camera still has to be initialized before generating rays.
    pub fn from_settings(settings: &CameraSettings) -> Self {
        Self {
            image_width: settings.width,
            image_height: settings.height,
            look_from: settings.look_from,
            look_at: settings.look_at,
            vup: settings.vup,
            vfov: settings.vfov,
            center: Vec3::ZERO,
            pixel00_loc: Vec3::ZERO,
            pixel_delta_u: Vec3::ZERO,
            pixel_delta_v: Vec3::ZERO,
            u: Vec3::X,
            v: Vec3::Y,
            w: Vec3::Z,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set vertical field of view in degrees.
    pub fn with_fov(mut self, vfov: f32) -> Self {
        self.vfov = vfov;
        self
    }

    /// Initialize the camera (must be called before generating rays).
    pub fn initialize(&mut self) {
        self.center = self.look_from;

        // Viewport sits one unit in front of the eye
        let theta = self.vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = viewport_height * (self.image_width as f32 / self.image_height as f32);

        // Calculate camera basis vectors
        self.w = (self.look_from - self.look_at).normalize();
        self.u = self.vup.cross(self.w).normalize();
        self.v = self.w.cross(self.u);

        // Calculate viewport vectors
        let viewport_u = viewport_width * self.u;
        let viewport_v = -viewport_height * self.v;

        // Calculate pixel delta vectors
        self.pixel_delta_u = viewport_u / self.image_width as f32;
        self.pixel_delta_v = viewport_v / self.image_height as f32;

        // Calculate upper left pixel location
        let viewport_upper_left = self.center - self.w - viewport_u / 2.0 - viewport_v / 2.0;

        self.pixel00_loc = viewport_upper_left + 0.5 * (self.pixel_delta_u + self.pixel_delta_v);
    }

    /// Generate a ray for pixel (i, j) with a random sub-pixel offset.
    pub fn get_ray(&self, i: u32, j: u32, rng: &mut dyn RngCore) -> Ray {
        let dx = uniform01(rng) - 0.5;
        let dy = uniform01(rng) - 0.5;
        self.get_ray_offset(i, j, dx, dy)
    }

    /// Generate a ray through pixel (i, j) shifted by `(dx, dy)` pixels from its center.
    ///
    /// The direction is unit length.
    pub fn get_ray_offset(&self, i: u32, j: u32, dx: f32, dy: f32) -> Ray {
        let pixel_sample = self.pixel00_loc
            + ((i as f32) + dx) * self.pixel_delta_u
            + ((j as f32) + dy) * self.pixel_delta_v;

        Ray::new(self.center, (pixel_sample - self.center).normalize())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
