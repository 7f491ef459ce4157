use std::cmp::min;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::bail;
use clap::{Parser, ValueEnum};
use image::{ImageBuffer, Rgb};

mod raytracing;
use raytracing::math::ColorRgb;
use raytracing::renderer::{render, LightingMode, RenderConfig};
use raytracing::scenes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ScenePreset {
    /// Two solid-color spheres boxed in by planes.
    SphereWall,
    /// Cook-Torrance spheres, cull-mode triangles, three point lights.
    Reference,
    /// A loaded OBJ mesh in the Lambert room (needs --obj).
    Mesh,
}

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// the scene preset to render
    #[arg(value_enum, default_value = "reference")]
    scene: ScenePreset,
    /// path of an OBJ file, used by the mesh scene
    #[arg(long)]
    obj: Option<PathBuf>,
    /// the path where the rendered image is saved
    #[arg(short, long, default_value = "render.png")]
    output: String,
    #[arg(long, default_value_t = 640)]
    width: u32,
    #[arg(long, default_value_t = 480)]
    height: u32,
    /// vertical field of view in degrees, overrides the preset's own
    #[arg(long)]
    fov: Option<f64>,
    /// how many mirror bounces to follow after the primary hit
    #[arg(long, default_value_t = 3)]
    max_bounces: u32,
    /// skip shadow rays
    #[arg(long, default_value_t = false)]
    no_shadows: bool,
    /// skip mirror reflection bounces
    #[arg(long, default_value_t = false)]
    no_reflections: bool,
    /// which term of the lighting equation to show
    #[arg(long, value_enum, default_value = "combined")]
    lighting_mode: LightingMode,
}

impl From<ColorRgb> for Rgb<u8> {
    fn from(value: ColorRgb) -> Self {
        let r = min((value.r * 255.0) as u8, 255);
        let g = min((value.g * 255.0) as u8, 255);
        let b = min((value.b * 255.0) as u8, 255);
        Rgb([r, g, b])
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut scene = match args.scene {
        ScenePreset::SphereWall => scenes::sphere_wall(),
        ScenePreset::Reference => scenes::reference()?,
        ScenePreset::Mesh => match &args.obj {
            Some(path) => scenes::mesh(path)?,
            None => bail!("the mesh scene needs --obj <path>"),
        },
    };
    if let Some(fov) = args.fov {
        scene.camera.set_fov(fov);
    }

    let mut config = RenderConfig::new(args.width, args.height);
    config.max_bounces = args.max_bounces;
    config.shadows_enabled = !args.no_shadows;
    config.reflections_enabled = !args.no_reflections;
    config.lighting_mode = args.lighting_mode;

    let start = Instant::now();
    let pixels = render(&scene, &config);
    log::info!(
        "rendered {}x{} at {} degrees fov ({:?}) in {:?}",
        config.width,
        config.height,
        scene.camera.fov_degrees(),
        config.lighting_mode,
        start.elapsed()
    );

    let mut buffer: ImageBuffer<Rgb<u8>, Vec<_>> = ImageBuffer::new(config.width, config.height);
    for (x, y, pixel) in buffer.enumerate_pixels_mut() {
        *pixel = pixels[(x + config.width * y) as usize].into();
    }
    buffer.save(&args.output)?;
    println!("saved {}", args.output);

    Ok(())
}
