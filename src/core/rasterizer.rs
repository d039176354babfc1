use crate::core::framebuffer::FrameBuffer;
use crate::core::math::interpolation::{
    barycentric_weights, edge_function, edge_values, interpolate, is_covered,
};
use nalgebra::{Point2, Point3, Vector3};
use rayon::prelude::*;

/// Color written by [`Rasterizer::splat_points`].
pub const SPLAT_COLOR: [u8; 3] = [255, 255, 255];

/// Draws screen-space primitives onto a [`FrameBuffer`].
///
/// Screen coordinates are pixels with `z` kept as an unnormalized depth proxy.
#[derive(Debug, Default, Clone, Copy)]
pub struct Rasterizer;

impl Rasterizer {
    pub fn new() -> Self {
        Self
    }

    /// Fills one triangle with barycentric color interpolation and a z-buffer
    /// test.
    ///
    /// Either winding is accepted. Nothing is clipped except the bounding box
    /// against the frame, so vertices behind the camera still rasterize
    /// (incorrectly) instead of being rejected.
    pub fn rasterize_triangle(
        &self,
        framebuffer: &FrameBuffer,
        screen_coords: &[Point3<f32>; 3],
        colors: &[Vector3<f32>; 3],
    ) {
        if framebuffer.width == 0 || framebuffer.height == 0 {
            return;
        }

        let points = screen_coords.map(|p| Point2::new(p.x, p.y));
        let depths = screen_coords.map(|p| p.z);

        // 1. Compute Bounding Box
        let (start_x, start_y, end_x, end_y) = self.compute_bounding_box(
            &points,
            framebuffer.width - 1,
            framebuffer.height - 1,
        );

        // 2. Signed double area
        let area = edge_function(points[0], points[1], points[2]);

        // 3. Pixel Loop
        // Rows of one triangle never share a pixel, so they can be shaded in parallel.
        (start_y..=end_y).into_par_iter().for_each(|y| {
            for x in start_x..=end_x {
                let p = Point2::new(x as f32, y as f32);

                let edges = edge_values(p, &points);
                if !is_covered(&edges) {
                    continue;
                }

                let weights = barycentric_weights(edges, area);
                let z = interpolate(&weights, &depths);

                // Depth Test (non-finite z never passes)
                if framebuffer.depth_test_and_update(x, y, z) {
                    let color = interpolate(&weights, colors);
                    framebuffer.set_pixel(x, y, color);
                }
            }
        });
    }

    /// Writes [`SPLAT_COLOR`] at every point inside `[0, width) x [0, height)`.
    ///
    /// No depth test and no coverage: this is the lightweight point view.
    pub fn splat_points(&self, framebuffer: &FrameBuffer, screen_coords: &[Point3<f32>]) {
        let width = framebuffer.width as f32;
        let height = framebuffer.height as f32;
        let white = Vector3::new(
            SPLAT_COLOR[0] as f32,
            SPLAT_COLOR[1] as f32,
            SPLAT_COLOR[2] as f32,
        );

        screen_coords
            .iter()
            .filter(|p| p.x >= 0.0 && p.x < width && p.y >= 0.0 && p.y < height)
            .for_each(|p| framebuffer.set_pixel(p.x as usize, p.y as usize, white));
    }

    /// Floor/ceil bounds of the three points, clipped to `[0, max_x] x [0, max_y]`.
    ///
    /// Returned as inclusive pixel ranges. Non-finite coordinates collapse to
    /// the frame edges instead of panicking.
    fn compute_bounding_box(
        &self,
        points: &[Point2<f32>; 3],
        max_x: usize,
        max_y: usize,
    ) -> (usize, usize, usize, usize) {
        let min_x = points[0].x.min(points[1].x).min(points[2].x).floor();
        let min_y = points[0].y.min(points[1].y).min(points[2].y).floor();
        let max_xf = points[0].x.max(points[1].x).max(points[2].x).ceil();
        let max_yf = points[0].y.max(points[1].y).max(points[2].y).ceil();

        let clip = |v: f32, hi: usize| v.clamp(0.0, hi as f32) as usize;
        (
            clip(min_x, max_x),
            clip(min_y, max_y),
            clip(max_xf, max_x),
            clip(max_yf, max_y),
        )
    }
}
