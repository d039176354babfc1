use nalgebra::{Matrix4, Vector3};

//=================================
// Transform Matrix Factory
//=================================

/// Factory for the homogeneous transforms used to pose cameras and shapes.
/// Written out by hand so the axis conventions are explicit.
pub struct TransformFactory;

#[rustfmt::skip]
impl TransformFactory {
    /// Rotation of `theta` radians around the X-axis.
    pub fn roll(theta: f32) -> Matrix4<f32> {
        let c = theta.cos();
        let s = theta.sin();
        Matrix4::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, c,  -s,   0.0,
            0.0, s,   c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Rotation of `theta` radians around the Y-axis.
    pub fn pitch(theta: f32) -> Matrix4<f32> {
        let c = theta.cos();
        let s = theta.sin();
        Matrix4::new(
            c,   0.0, s,   0.0,
            0.0, 1.0, 0.0, 0.0,
           -s,   0.0, c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Rotation of `theta` radians around the Z-axis.
    pub fn yaw(theta: f32) -> Matrix4<f32> {
        let c = theta.cos();
        let s = theta.sin();
        Matrix4::new(
            c,  -s,   0.0, 0.0,
            s,   c,   0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Rotates `alpha` around X, then `beta` around Y, then `gamma` around Z.
    ///
    /// The product is `yaw(gamma) * pitch(beta) * roll(alpha)`, so roll is the
    /// first rotation a column vector sees. Angles are not range-checked.
    pub fn rotation(alpha: f32, beta: f32, gamma: f32) -> Matrix4<f32> {
        Self::yaw(gamma) * Self::pitch(beta) * Self::roll(alpha)
    }

    /// Same as [`TransformFactory::rotation`] with the angles packed in a vector.
    pub fn rotation_from(angles: &Vector3<f32>) -> Matrix4<f32> {
        Self::rotation(angles.x, angles.y, angles.z)
    }

    /// Creates a translation matrix.
    pub fn translation(x: f32, y: f32, z: f32) -> Matrix4<f32> {
        Matrix4::new(
            1.0, 0.0, 0.0, x,
            0.0, 1.0, 0.0, y,
            0.0, 0.0, 1.0, z,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    pub fn translation_from(offset: &Vector3<f32>) -> Matrix4<f32> {
        Self::translation(offset.x, offset.y, offset.z)
    }
}
