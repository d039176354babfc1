use crate::core::math::pose::{Pose, Transformable};
use crate::pipeline::renderer::Renderer;
use crate::scene::shape::Shape;
use image::RgbImage;
use nalgebra::{Matrix3x4, Point3, Vector3, Vector4};

/// Output image size. `channels` is carried for completeness; frames are RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub height: usize,
    pub width: usize,
    pub channels: usize,
}

impl ImageDimensions {
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            channels: 3,
        }
    }
}

/// Pinhole camera with its own world pose.
///
/// The camera looks down its local +Z axis; +X maps to image columns and +Y
/// to image rows (downwards). Every matrix below is rebuilt from the current
/// pose on each call, so pose changes take effect immediately.
#[derive(Debug, Clone)]
pub struct Camera {
    pub name: String,
    pub dim: ImageDimensions,
    /// Focal length as a multiple of the image height.
    pub focal: f32,
    /// Skew between the image axes.
    pub skew: f32,
    aspect_ratio: f32,
    pose: Pose,
}

impl Camera {
    /// `rotation` holds (roll, pitch, yaw) in radians.
    pub fn new(
        name: impl Into<String>,
        position: Vector3<f32>,
        rotation: Vector3<f32>,
        dim: ImageDimensions,
        focal: f32,
        skew: f32,
    ) -> Self {
        Self {
            name: name.into(),
            aspect_ratio: dim.width as f32 / dim.height as f32,
            dim,
            focal,
            skew,
            pose: Pose::new(position, rotation),
        }
    }

    /// Width over height, fixed at construction.
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// World-to-camera matrix `[R^T | -R^T t]`.
    ///
    /// Inverts the rigid pose analytically; assumes the pose holds only
    /// rotations and translations.
    pub fn external(&self) -> Matrix3x4<f32> {
        let r_t = self.pose.rotation().transpose();
        let t = -(r_t * self.pose.translation());

        let mut m = Matrix3x4::zeros();
        m.fixed_view_mut::<3, 3>(0, 0).copy_from(&r_t);
        m.set_column(3, &t);
        m
    }

    /// Camera-to-screen matrix with the principal point at the image center.
    ///
    /// Both focal terms are scaled by the image height, i.e. square pixels.
    #[rustfmt::skip]
    pub fn internal(&self) -> Matrix3x4<f32> {
        let h = self.dim.height as f32;
        let w = self.dim.width as f32;
        let fh = self.focal * h;

        Matrix3x4::new(
            fh,  self.skew, w / 2.0, 0.0,
            0.0, fh,        h / 2.0, 0.0,
            0.0, 0.0,       1.0,     0.0,
        )
    }

    /// `internal[:, :3] * external`.
    pub fn projection_matrix(&self) -> Matrix3x4<f32> {
        self.internal().fixed_view::<3, 3>(0, 0) * self.external()
    }

    /// Maps homogeneous world points to `(pixel x, pixel y, depth)`.
    ///
    /// x and y are divided by the projected z; z itself is left as is and
    /// serves as the depth proxy. A point with z = 0 yields inf/NaN.
    pub fn project_to_screen(&self, points: &[Vector4<f32>]) -> Vec<Point3<f32>> {
        let projection = self.projection_matrix();
        points
            .iter()
            .map(|p| {
                let s = projection * p;
                Point3::new(s.x / s.z, s.y / s.z, s.z)
            })
            .collect()
    }

    /// Maps homogeneous world points into the camera frame (no projection).
    pub fn project_to_camera_space(&self, points: &[Vector4<f32>]) -> Vec<Vector3<f32>> {
        let external = self.external();
        points.iter().map(|p| external * p).collect()
    }

    /// Point-splat view: each visible point becomes one white pixel on black.
    pub fn snap(&self, points: &[Vector4<f32>]) -> RgbImage {
        let mut renderer = Renderer::new(self.dim.width, self.dim.height, [0, 0, 0]);
        renderer.draw_points(self, points);
        renderer.framebuffer.to_image()
    }

    /// Renders `shapes` over `background` with depth testing.
    ///
    /// Buffers live only for this call, so identical inputs give identical
    /// frames.
    pub fn raster<'a, I>(&self, shapes: I, background: [u8; 3]) -> RgbImage
    where
        I: IntoIterator<Item = &'a Shape>,
    {
        let mut renderer = Renderer::new(self.dim.width, self.dim.height, background);
        for shape in shapes {
            renderer.draw_shape(self, shape);
        }
        renderer.framebuffer.to_image()
    }
}

impl Transformable for Camera {
    fn pose(&self) -> &Pose {
        &self.pose
    }

    fn pose_mut(&mut self) -> &mut Pose {
        &mut self.pose
    }
}
