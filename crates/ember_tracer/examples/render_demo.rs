//! Simple path tracer example.
//!
//! Renders the built-in demo room and saves it in PGM format.

use ember_scene::demo_scene;
use ember_tracer::{radiance_to_luma8, render, Camera, ImageBuffer, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::{BufWriter, Write};

fn main() {
    println!("Ember Path Tracer - Demo Room");
    println!("=============================");

    let desc = demo_scene();
    let settings = desc.camera.unwrap_or_default();

    let mut camera = Camera::from_settings(&settings);
    camera.initialize();

    let config = RenderConfig {
        samples_per_pixel: 32,
        max_depth: 4,
        ..RenderConfig::default()
    };

    println!(
        "Rendering {}x{} @ {} spp...",
        camera.image_width, camera.image_height, config.samples_per_pixel
    );

    let start = std::time::Instant::now();
    let mut rng = StdRng::seed_from_u64(0);
    let image = render(&camera, &desc.scene, &config, &mut rng);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.pgm";
    save_pgm(&image, filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn save_pgm(image: &ImageBuffer, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P2")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for y in 0..image.height {
        for x in 0..image.width {
            writeln!(writer, "{}", radiance_to_luma8(image.get(x, y)))?;
        }
    }

    Ok(())
}
