// Host-side driver: render a scene file (or the demo room) to a PNG.
// Run with: cargo run --release --bin ember -- [scene.json] [-o out.png]

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use ember_scene::{demo_scene, load_scene, SamplingMode, MAX_IMAGE_PIXELS};
use ember_tracer::{render, Camera, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

const USAGE: &str = "\
Usage: ember [scene.json] [options]

Options:
  -o, --output <file>   Output PNG path (default: render.png)
  --spp <n>             Samples per pixel
  --depth <n>           Maximum bounce depth
  --size <WxH>          Image resolution
  --seed <n>            Random seed (default: 0)
  --background <v>      Radiance for rays that escape
  --cosine              Cosine-weighted bounce sampling
  -h, --help            Show this message";

/// Command line options. Unset fields fall back to the scene file, then to
/// the renderer defaults.
#[derive(Debug, Default, PartialEq)]
struct Args {
    scene: Option<PathBuf>,
    output: Option<PathBuf>,
    samples_per_pixel: Option<u32>,
    max_depth: Option<u32>,
    size: Option<(u32, u32)>,
    seed: u64,
    background: Option<f32>,
    cosine: bool,
    help: bool,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args> {
    let mut parsed = Args::default();
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        let mut value = |name: &str| {
            iter.next()
                .with_context(|| format!("missing value for {name}"))
        };

        match arg.as_str() {
            "-o" | "--output" => parsed.output = Some(PathBuf::from(value(&arg)?)),
            "--spp" => {
                parsed.samples_per_pixel =
                    Some(value(&arg)?.parse().context("--spp expects an integer")?)
            }
            "--depth" => {
                parsed.max_depth = Some(value(&arg)?.parse().context("--depth expects an integer")?)
            }
            "--size" => parsed.size = Some(parse_size(&value(&arg)?)?),
            "--seed" => parsed.seed = value(&arg)?.parse().context("--seed expects an integer")?,
            "--background" => {
                parsed.background =
                    Some(value(&arg)?.parse().context("--background expects a number")?)
            }
            "--cosine" => parsed.cosine = true,
            "-h" | "--help" => parsed.help = true,
            flag if flag.starts_with('-') => bail!("unknown option {flag}"),
            path => {
                if parsed.scene.is_some() {
                    bail!("more than one scene file given");
                }
                parsed.scene = Some(PathBuf::from(path));
            }
        }
    }

    Ok(parsed)
}

fn parse_size(text: &str) -> Result<(u32, u32)> {
    let (w, h) = text
        .split_once(&['x', 'X'][..])
        .with_context(|| format!("--size expects WxH, got {text}"))?;
    let width: u32 = w.parse().with_context(|| format!("bad width in {text}"))?;
    let height: u32 = h.parse().with_context(|| format!("bad height in {text}"))?;
    if width == 0 || height == 0 {
        bail!("--size must be non-zero, got {text}");
    }
    if width as u64 * height as u64 > MAX_IMAGE_PIXELS {
        bail!("--size {text} exceeds the limit of {MAX_IMAGE_PIXELS} pixels");
    }
    Ok((width, height))
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let desc = match &args.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => {
            log::info!("No scene file given, rendering the demo room");
            demo_scene()
        }
    };

    // Defaults <- scene file <- command line
    let mut config = RenderConfig::default();
    config.apply(&desc.render);
    if let Some(spp) = args.samples_per_pixel {
        config.samples_per_pixel = spp;
    }
    if let Some(depth) = args.max_depth {
        config.max_depth = depth;
    }
    if let Some(background) = args.background {
        config.background = background;
    }
    if args.cosine {
        config.sampling = SamplingMode::Cosine;
    }
    config.validate().context("Invalid render settings")?;

    let mut settings = desc.camera.unwrap_or_default();
    if let Some((width, height)) = args.size {
        settings.width = width;
        settings.height = height;
    }

    let mut camera = Camera::from_settings(&settings);
    camera.initialize();

    log::info!(
        "Scene: {} spheres ({} lights), {} planes",
        desc.scene.sphere_count(),
        desc.scene.light_count(),
        desc.scene.plane_count()
    );

    let mut rng = StdRng::seed_from_u64(args.seed);
    let image = render(&camera, &desc.scene, &config, &mut rng);
    log::info!("Mean radiance: {:.4}", image.mean());

    let output = args.output.unwrap_or_else(|| PathBuf::from("render.png"));
    image
        .to_gray_image()
        .save(&output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    log::info!("Saved to {}", output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_no_args() {
        assert_eq!(args(&[]).unwrap(), Args::default());
    }

    #[test]
    fn test_full_command_line() {
        let parsed = args(&[
            "room.json", "-o", "out.png", "--spp", "64", "--depth", "5", "--size", "320x240",
            "--seed", "9", "--background", "0.5", "--cosine",
        ])
        .unwrap();

        assert_eq!(parsed.scene, Some(PathBuf::from("room.json")));
        assert_eq!(parsed.output, Some(PathBuf::from("out.png")));
        assert_eq!(parsed.samples_per_pixel, Some(64));
        assert_eq!(parsed.max_depth, Some(5));
        assert_eq!(parsed.size, Some((320, 240)));
        assert_eq!(parsed.seed, 9);
        assert_eq!(parsed.background, Some(0.5));
        assert!(parsed.cosine);
    }

    #[test]
    fn test_bad_args() {
        assert!(args(&["--spp"]).is_err());
        assert!(args(&["--spp", "many"]).is_err());
        assert!(args(&["--frobnicate"]).is_err());
        assert!(args(&["a.json", "b.json"]).is_err());
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("64x48").unwrap(), (64, 48));
        assert_eq!(parse_size("64X48").unwrap(), (64, 48));
        assert!(parse_size("64").is_err());
        assert!(parse_size("0x48").is_err());
        assert!(parse_size("axb").is_err());
        assert!(parse_size("70000x70000").is_err());
        assert!(parse_size("8192x8192").is_ok());
    }
}
