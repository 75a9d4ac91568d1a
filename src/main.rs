use std::path::PathBuf;
use std::process::ExitCode;

use softrender::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: softrender <mesh.obj> <texture> [output.png]";

struct Args {
    mesh: PathBuf,
    texture: PathBuf,
    output: PathBuf,
}

fn parse_args() -> Option<Args> {
    let mut args = std::env::args_os().skip(1).map(PathBuf::from);
    let mesh = args.next()?;
    let texture = args.next()?;
    let output = args.next().unwrap_or_else(|| PathBuf::from("render.png"));
    Some(Args {
        mesh,
        texture,
        output,
    })
}

fn run(args: &Args) -> softrender::Result<()> {
    let config = RenderConfig::default().with_env_overrides()?;
    let mesh = Mesh::from_obj_file(&args.mesh)?;
    let texture = Texture::from_file(&args.texture)?;

    let renderer = Renderer::new(config)?;
    let mut framebuffer = renderer.framebuffer()?;
    let stats = renderer.render(&mesh, &texture, &mut framebuffer)?;
    info!(
        faces = stats.faces,
        pixels = stats.pixels_written,
        "Rendered frame"
    );

    framebuffer.save(&args.output)?;

    #[cfg(feature = "window")]
    {
        let mut window = softrender::window::Window::new(
            "softrender",
            framebuffer.width(),
            framebuffer.height(),
        )?;
        window.show(&framebuffer)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let Some(args) = parse_args() else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Render failed");
            ExitCode::FAILURE
        }
    }
}
