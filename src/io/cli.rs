use crate::io::config::{Config, RenderMode};
use crate::error::RenderError;
use clap::Parser;
use log::info;

/// Renders a TOML-described scene to PNG frames.
#[derive(Parser, Debug)]
#[command(name = "pinhole-rasterizer")]
#[command(about = "Pinhole-camera software rasterizer")]
pub struct Cli {
    /// Scene file (TOML). The built-in two-cube scene is used when omitted.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Output path; `{frame}` expands to the frame index.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Number of frames to render.
    #[arg(short, long)]
    pub frames: Option<usize>,

    /// Reject malformed meshes instead of rendering them as-is.
    #[arg(long)]
    pub strict: bool,

    /// Draw vertices as points instead of filled triangles.
    #[arg(long)]
    pub snap: bool,
}

impl Cli {
    /// Loads the scene (or the default) and applies command-line overrides.
    pub fn into_config(self) -> Result<Config, RenderError> {
        let mut config = if let Some(path) = &self.config {
            info!("Loading config: {}", path);
            Config::load(path)?
        } else {
            info!("Using default scene");
            Config::default()
        };

        if let Some(output) = self.output {
            config.render.output = output;
        }
        if let Some(frames) = self.frames {
            config.render.frames = frames;
        }
        if self.strict {
            config.render.strict = true;
        }
        if self.snap {
            config.render.mode = RenderMode::Snap;
        }

        Ok(config)
    }
}
