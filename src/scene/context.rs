use crate::core::math::pose::Transformable;
use crate::scene::camera::Camera;
use crate::scene::shape::Shape;
use nalgebra::Matrix4;

/// Everything needed to render and animate a scene.
pub struct RenderContext {
    pub camera: Camera,
    pub shapes: Vec<Shape>,
    /// Per-frame delta for the camera.
    pub camera_motion: Option<Matrix4<f32>>,
    /// Per-frame delta for each shape, parallel to `shapes`.
    pub shape_motions: Vec<Option<Matrix4<f32>>>,
}

impl RenderContext {
    /// Applies one frame's worth of motion to the camera and every shape.
    pub fn advance(&mut self) {
        if let Some(delta) = &self.camera_motion {
            self.camera.compose_transform(delta);
        }
        for (shape, motion) in self.shapes.iter_mut().zip(&self.shape_motions) {
            if let Some(delta) = motion {
                shape.compose_transform(delta);
            }
        }
    }
}
