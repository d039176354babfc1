use crate::core::math::transform::TransformFactory;
use nalgebra::{Matrix3, Matrix4, Vector3};

/// World placement of a camera or a shape.
///
/// Holds a single world transform. There is no history: every
/// [`Pose::compose_transform`] overwrites the stored matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Pose {
    transform: Matrix4<f32>,
}

impl Pose {
    /// `translation(position) * rotation(rotation)`, angles in radians.
    pub fn new(position: Vector3<f32>, rotation: Vector3<f32>) -> Self {
        Self {
            transform: TransformFactory::translation_from(&position)
                * TransformFactory::rotation_from(&rotation),
        }
    }

    pub fn matrix(&self) -> &Matrix4<f32> {
        &self.transform
    }

    /// Upper-left 3x3 block.
    pub fn rotation(&self) -> Matrix3<f32> {
        self.transform.fixed_view::<3, 3>(0, 0).into_owned()
    }

    /// Last column without the homogeneous row.
    pub fn translation(&self) -> Vector3<f32> {
        self.transform.fixed_view::<3, 1>(0, 3).into_owned()
    }

    /// Left-multiplies the stored transform: `transform = delta * transform`.
    ///
    /// `delta` is therefore expressed in world space. A pure rotation delta
    /// rotates the entity around the world origin, not around itself.
    pub fn compose_transform(&mut self, delta: &Matrix4<f32>) {
        self.transform = delta * self.transform;
    }
}

/// Anything that owns a [`Pose`] and can be moved between frames.
pub trait Transformable {
    fn pose(&self) -> &Pose;

    fn pose_mut(&mut self) -> &mut Pose;

    fn transform(&self) -> &Matrix4<f32> {
        self.pose().matrix()
    }

    fn compose_transform(&mut self, delta: &Matrix4<f32>) {
        self.pose_mut().compose_transform(delta);
    }
}
