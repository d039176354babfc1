use crate::core::framebuffer::FrameBuffer;
use crate::core::rasterizer::Rasterizer;
use crate::scene::camera::Camera;
use crate::scene::shape::Shape;
use log::debug;
use nalgebra::{Vector3, Vector4};

/// Drives projection and rasterization into one frame.
pub struct Renderer {
    pub rasterizer: Rasterizer,
    pub framebuffer: FrameBuffer,
}

impl Renderer {
    /// Creates a renderer whose frame starts as `background` with depth `+inf`.
    pub fn new(width: usize, height: usize, background: [u8; 3]) -> Self {
        Self {
            rasterizer: Rasterizer::new(),
            framebuffer: FrameBuffer::new(width, height, background),
        }
    }

    /// Projects a shape through `camera` and fills its triangles.
    ///
    /// Triangles whose indices have no vertex or no color are skipped.
    pub fn draw_shape(&self, camera: &Camera, shape: &Shape) {
        let screen_coords = camera.project_to_screen(&shape.vertices());
        let colors = shape.colors();

        let mut skipped = 0;
        for triangle in shape.triangles() {
            let points = triangle.map(|i| screen_coords.get(i).copied());
            let tri_colors = triangle.map(|i| colors.get(i).copied());

            match (points, tri_colors) {
                ([Some(p0), Some(p1), Some(p2)], [Some(c0), Some(c1), Some(c2)]) => {
                    self.rasterizer.rasterize_triangle(
                        &self.framebuffer,
                        &[p0, p1, p2],
                        &[to_vector(c0), to_vector(c1), to_vector(c2)],
                    );
                }
                _ => skipped += 1,
            }
        }

        debug!(
            "Drew '{}' ({} triangles, {} skipped)",
            shape.name,
            shape.triangles().len() - skipped,
            skipped
        );
    }

    /// Splats world points as single white pixels. No depth test.
    pub fn draw_points(&self, camera: &Camera, points: &[Vector4<f32>]) {
        let screen_coords = camera.project_to_screen(points);
        self.rasterizer.splat_points(&self.framebuffer, &screen_coords);
    }
}

fn to_vector(color: [u8; 3]) -> Vector3<f32> {
    Vector3::new(color[0] as f32, color[1] as f32, color[2] as f32)
}
