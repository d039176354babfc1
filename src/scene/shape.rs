use crate::core::math::pose::{Pose, Transformable};
use crate::scene::mesh::Mesh;
use nalgebra::{Vector3, Vector4};

/// A mesh placed in the world with its own pose.
#[derive(Debug, Clone)]
pub struct Shape {
    pub name: String,
    pub mesh: Mesh,
    pose: Pose,
}

impl Shape {
    /// `rotation` holds (roll, pitch, yaw) in radians.
    pub fn new(
        name: impl Into<String>,
        mesh: Mesh,
        position: Vector3<f32>,
        rotation: Vector3<f32>,
    ) -> Self {
        Self {
            name: name.into(),
            mesh,
            pose: Pose::new(position, rotation),
        }
    }

    /// World-space vertices: the current transform applied to every local vertex.
    pub fn vertices(&self) -> Vec<Vector4<f32>> {
        let transform = self.pose.matrix();
        self.mesh.vertices().iter().map(|v| transform * v).collect()
    }

    pub fn triangles(&self) -> &[[usize; 3]] {
        self.mesh.triangles()
    }

    pub fn colors(&self) -> &[[u8; 3]] {
        self.mesh.colors()
    }
}

impl Transformable for Shape {
    fn pose(&self) -> &Pose {
        &self.pose
    }

    fn pose_mut(&mut self) -> &mut Pose {
        &mut self.pose
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::transform::TransformFactory;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_vertices_follow_pose() {
        let cube = Mesh::cube(2.0, vec![[0, 0, 0]; 8]);
        let shape = Shape::new("cube", cube, Vector3::new(1.5, 0.0, 0.0), Vector3::zeros());

        let world = shape.vertices();
        assert_eq!(world.len(), 8);
        assert_eq!(world[0], Vector4::new(2.5, 1.0, 1.0, 1.0));
        assert_eq!(world[7], Vector4::new(0.5, -1.0, -1.0, 1.0));
        assert!(world.iter().all(|v| v.w == 1.0));
    }

    #[test]
    fn test_compose_transform_moves_world_vertices_only() {
        let cube = Mesh::cube(2.0, vec![[0, 0, 0]; 8]);
        let mut shape = Shape::new("cube", cube, Vector3::zeros(), Vector3::zeros());
        let triangles_before = shape.triangles().to_vec();

        shape.compose_transform(&TransformFactory::translation(0.1, 0.0, 0.0));
        shape.compose_transform(&TransformFactory::yaw(FRAC_PI_2));

        // (1.1, 1, 1) yawed 90deg -> (-1, 1.1, 1).
        let v = shape.vertices()[0];
        assert!((v - Vector4::new(-1.0, 1.1, 1.0, 1.0)).norm() < 1e-5);
        assert_eq!(shape.mesh.vertices()[0], Vector4::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(shape.triangles(), triangles_before.as_slice());
    }
}
