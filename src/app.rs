use crate::error::RenderError;
use crate::io::config::{Config, RenderMode};
use crate::io::image::{frame_path, save_frame};
use crate::scene::context::RenderContext;
use crate::scene::loader::build_scene;
use image::RgbImage;
use log::{debug, info};
use std::time::Instant;

/// Renders one frame of the scene in the configured mode.
pub fn render_frame(context: &RenderContext, config: &Config) -> RgbImage {
    match config.render.mode {
        RenderMode::Raster => context
            .camera
            .raster(&context.shapes, config.render.background),
        RenderMode::Snap => {
            let points: Vec<_> = context.shapes.iter().flat_map(|s| s.vertices()).collect();
            context.camera.snap(&points)
        }
    }
}

/// Renders `config.render.frames` frames to disk, advancing the scene's
/// motions between frames. Returns the written paths.
pub fn run(config: &Config) -> Result<Vec<String>, RenderError> {
    let mut context = build_scene(config)?;
    let start_time = Instant::now();
    let mut written = Vec::with_capacity(config.render.frames);

    for frame in 0..config.render.frames {
        let frame_start = Instant::now();
        let image = render_frame(&context, config);
        debug!("Frame {} rendered in {:.2?}", frame, frame_start.elapsed());

        let path = frame_path(&config.render.output, frame);
        save_frame(&image, &path, config.render.upscale)?;
        written.push(path);

        context.advance();
    }

    info!(
        "Rendered {} frame(s) in {:.2?}",
        written.len(),
        start_time.elapsed()
    );
    Ok(written)
}
