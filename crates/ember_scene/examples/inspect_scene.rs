//! Example: Load and inspect a scene description.
//!
//! Run with: cargo run --example inspect_scene -- scenes/room.json

use std::env;

use ember_scene::{demo_scene, load_scene};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let desc = if args.len() < 2 {
        println!("No scene given, inspecting the built-in demo scene");
        println!("Usage: inspect_scene <path-to-scene.json>");
        demo_scene()
    } else {
        let path = &args[1];
        println!("Loading scene file: {}", path);
        match load_scene(path) {
            Ok(desc) => desc,
            Err(e) => {
                eprintln!("Failed to load scene: {}", e);
                std::process::exit(1);
            }
        }
    };

    let scene = &desc.scene;
    println!("\n=== Scene ===");
    println!("Spheres: {} ({} lights)", scene.sphere_count(), scene.light_count());
    println!("Planes: {}", scene.plane_count());

    println!("\n--- Spheres ---");
    for (i, s) in scene.spheres().iter().enumerate() {
        println!(
            "  [{}] center={:?} r={} color={} emission={}",
            i, s.center, s.radius, s.color, s.emission
        );
    }

    println!("\n--- Planes ---");
    for (i, p) in scene.planes().iter().enumerate() {
        println!("  [{}] point={:?} normal={:?} color={}", i, p.point, p.normal, p.color);
    }

    if let Some(camera) = desc.camera {
        println!("\n--- Camera ---");
        println!(
            "  from={:?} at={:?} vfov={} size={}x{}",
            camera.look_from, camera.look_at, camera.vfov, camera.width, camera.height
        );
    }
}
