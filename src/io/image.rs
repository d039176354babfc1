use crate::error::RenderError;
use image::{ImageError, RgbImage};
use log::debug;
use std::fs;
use std::path::Path;

/// Nearest-neighbour magnification by an integer factor (each pixel becomes
/// a `factor x factor` block). Factors 0 and 1 return a copy.
pub fn upscale(frame: &RgbImage, factor: u32) -> RgbImage {
    if factor <= 1 {
        return frame.clone();
    }
    let (width, height) = frame.dimensions();
    RgbImage::from_fn(width * factor, height * factor, |x, y| {
        *frame.get_pixel(x / factor, y / factor)
    })
}

/// Expands `{frame}` in an output pattern to a zero-padded index.
pub fn frame_path(pattern: &str, frame: usize) -> String {
    pattern.replace("{frame}", &format!("{:04}", frame))
}

/// Upscales and writes a frame, creating the parent directory if needed.
pub fn save_frame(frame: &RgbImage, path: &str, upscale_factor: u32) -> Result<(), RenderError> {
    let to_error = |source: ImageError| RenderError::ImageSave {
        path: path.to_string(),
        source,
    };

    if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| to_error(ImageError::IoError(e)))?;
    }

    let output = upscale(frame, upscale_factor);
    output.save(Path::new(path)).map_err(to_error)?;
    debug!(
        "Saved {}x{} frame to '{}'",
        output.width(),
        output.height(),
        path
    );
    Ok(())
}
