//! Per-pixel driver.
//!
//! Averages several path samples per pixel and fills a single-channel
//! image buffer. Runs on the calling thread only.

use std::time::Instant;

use ember_scene::Scene;
use rand::RngCore;

use crate::integrator::radiance;
use crate::{Camera, RenderConfig};

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Clamp a value to [0, 1] range.
#[inline]
pub fn clamp_01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Convert linear radiance to an 8-bit grey level.
pub fn radiance_to_luma8(radiance: f32) -> u8 {
    (255.0 * clamp_01(linear_to_gamma(radiance))) as u8
}

/// Render a single pixel with multi-sampling.
///
/// `config.samples_per_pixel` must be at least 1 (see `RenderConfig::validate`).
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> f32 {
    debug_assert!(config.samples_per_pixel > 0, "samples_per_pixel must be positive");
    let mut sum = 0.0;

    for _ in 0..config.samples_per_pixel {
        let ray = camera.get_ray(x, y, rng);
        sum += radiance(&ray, scene, config, rng);
    }

    // Average the samples
    sum / config.samples_per_pixel as f32
}

/// Number of pixels in a `width` x `height` image, computed without `u32` overflow.
#[inline]
pub fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

/// Simple image buffer of linear radiance values.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<f32>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0.0; pixel_count(width, height)],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, value: f32) {
        let i = self.index(x, y);
        self.pixels[i] = value;
    }

    /// Mean radiance over the whole image.
    pub fn mean(&self) -> f32 {
        if self.pixels.is_empty() {
            return 0.0;
        }
        self.pixels.iter().sum::<f32>() / self.pixels.len() as f32
    }

    /// Convert to gamma-corrected 8-bit grey levels in row-major order.
    pub fn to_luma8(&self) -> Vec<u8> {
        self.pixels.iter().map(|&p| radiance_to_luma8(p)).collect()
    }

    /// Convert to an `image` greyscale buffer for saving.
    pub fn to_gray_image(&self) -> image::GrayImage {
        image::GrayImage::from_fn(self.width, self.height, |x, y| {
            image::Luma([radiance_to_luma8(self.get(x, y))])
        })
    }
}

/// Render the entire scene to an image buffer, one pixel at a time.
pub fn render(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> ImageBuffer {
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);

    log::info!(
        "Rendering {}x{} @ {} spp, max depth {}",
        camera.image_width,
        camera.image_height,
        config.samples_per_pixel,
        config.max_depth
    );
    let start = Instant::now();

    for y in 0..camera.image_height {
        for x in 0..camera.image_width {
            let value = render_pixel(camera, scene, x, y, config, rng);
            image.set(x, y, value);
        }
        log::debug!("Row {}/{} done", y + 1, camera.image_height);
    }

    log::info!("Rendered in {:?}", start.elapsed());
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_math::Vec3;
    use ember_scene::{Plane, Sphere};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_linear_to_gamma() {
        assert_eq!(linear_to_gamma(0.0), 0.0);
        assert_eq!(linear_to_gamma(-1.0), 0.0);
        assert!((linear_to_gamma(1.0) - 1.0).abs() < 0.0001);
        assert!((linear_to_gamma(0.25) - 0.5).abs() < 0.0001);
    }

    #[test]
    fn test_radiance_to_luma8() {
        assert_eq!(radiance_to_luma8(0.0), 0);
        assert_eq!(radiance_to_luma8(0.25), 127);
        assert_eq!(radiance_to_luma8(1.0), 255);
        // Over-bright values clamp
        assert_eq!(radiance_to_luma8(8.0), 255);
    }

    #[test]
    fn test_image_buffer() {
        let mut image = ImageBuffer::new(4, 2);
        image.set(3, 1, 1.0);
        image.set(0, 0, 0.25);

        assert_eq!(image.get(3, 1), 1.0);
        assert_eq!(image.pixels[7], 1.0);
        assert_eq!(image.to_luma8()[0], 127);
        assert!((image.mean() - 1.25 / 8.0).abs() < 1e-6);

        let gray = image.to_gray_image();
        assert_eq!(gray.dimensions(), (4, 2));
        assert_eq!(gray.get_pixel(3, 1).0, [255]);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_pixel_count_wide_image() {
        // 70000 * 70000 does not fit in a u32
        assert_eq!(pixel_count(70_000, 70_000), 4_900_000_000);
    }

    #[test]
    fn test_image_buffer_indexing_tall() {
        let mut image = ImageBuffer::new(1, 70_000);
        image.set(0, 69_999, 0.5);
        assert_eq!(image.get(0, 69_999), 0.5);
        assert_eq!(image.pixels.len(), 70_000);
    }

    #[test]
    #[should_panic(expected = "samples_per_pixel must be positive")]
    #[cfg(debug_assertions)]
    fn test_render_pixel_requires_samples() {
        let mut camera = Camera::new().with_resolution(2, 2);
        camera.initialize();
        let config = RenderConfig {
            samples_per_pixel: 0,
            ..RenderConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        render_pixel(&camera, &Scene::new(), 0, 0, &config, &mut rng);
    }

    #[test]
    fn test_render_pixel_averages_samples() {
        // Camera inside an emissive shell: every sample returns the emission
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(Vec3::ZERO, 50.0, 0.0, 0.75));

        let mut camera = Camera::new().with_resolution(8, 8);
        camera.initialize();

        let config = RenderConfig {
            samples_per_pixel: 7,
            ..RenderConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(42);

        let value = render_pixel(&camera, &scene, 3, 4, &config, &mut rng);
        assert!((value - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_render_small_scene() {
        let mut scene = Scene::new();
        scene.add_plane(Plane::new(Vec3::new(0.0, -1.0, 0.0), Vec3::Y, 0.5));
        scene.add_sphere(Sphere::diffuse(Vec3::new(0.0, 0.0, -3.0), 1.0, 0.8));

        let mut camera = Camera::new()
            .with_resolution(12, 8)
            .with_position(Vec3::ZERO, -Vec3::Z, Vec3::Y);
        camera.initialize();

        let config = RenderConfig {
            samples_per_pixel: 4,
            max_depth: 3,
            background: 1.0,
            ..RenderConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(7);

        let image = render(&camera, &scene, &config, &mut rng);
        assert_eq!(image.pixels.len(), 96);

        // Top row sees open sky
        assert!((image.get(6, 0) - 1.0).abs() < 1e-6);
        // Everything is lit but never brighter than the sky
        assert!(image.pixels.iter().all(|&p| (0.0..=1.0).contains(&p)));
        assert!(image.mean() > 0.0);
    }
}
