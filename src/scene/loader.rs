use crate::core::math::transform::TransformFactory;
use crate::error::RenderError;
use crate::io::config::{CameraConfig, Config, MotionConfig, ObjectConfig};
use crate::scene::camera::{Camera, ImageDimensions};
use crate::scene::context::RenderContext;
use crate::scene::mesh::{Mesh, cube_geometry};
use crate::scene::shape::Shape;
use crate::scene::utils::{degrees_to_radians, random_colors};
use log::{info, warn};
use nalgebra::{Matrix4, Vector3, Vector4};

/// `translation * rotation` for one frame of motion.
pub fn motion_matrix(motion: &MotionConfig) -> Matrix4<f32> {
    TransformFactory::translation_from(&Vector3::from(motion.translation))
        * TransformFactory::rotation_from(&degrees_to_radians(motion.rotation))
}

pub fn build_camera(config: &CameraConfig) -> Camera {
    Camera::new(
        config.name.clone(),
        Vector3::from(config.position),
        degrees_to_radians(config.rotation),
        ImageDimensions::new(config.height, config.width),
        config.focal,
        config.skew,
    )
}

/// Builds one shape. With `strict`, the mesh is validated.
pub fn build_shape(config: &ObjectConfig, strict: bool) -> Result<Shape, RenderError> {
    let (vertices, edges) = match config.kind.as_str() {
        "cube" => cube_geometry(config.length),
        "mesh" => (
            config
                .vertices
                .iter()
                .map(|v| Vector4::new(v[0], v[1], v[2], 1.0))
                .collect(),
            config.edges.clone(),
        ),
        other => return Err(RenderError::UnknownObjectKind(other.to_string())),
    };

    let colors = if config.colors.is_empty() {
        random_colors(vertices.len(), config.seed)
    } else {
        config.colors.clone()
    };

    let mesh = if strict {
        Mesh::try_new(vertices, edges, colors)?
    } else {
        Mesh::new(vertices, edges, colors)
    };

    if mesh.triangles().is_empty() {
        warn!("Object '{}' has no triangles and will not be drawn", config.name);
    }

    Ok(Shape::new(
        config.name.clone(),
        mesh,
        Vector3::from(config.position),
        degrees_to_radians(config.rotation),
    ))
}

/// Builds the camera, shapes and per-frame motions described by `config`.
pub fn build_scene(config: &Config) -> Result<RenderContext, RenderError> {
    let camera = build_camera(&config.camera);

    let shapes = config
        .objects
        .iter()
        .map(|o| build_shape(o, config.render.strict))
        .collect::<Result<Vec<_>, _>>()?;

    let shape_motions = config
        .objects
        .iter()
        .map(|o| o.motion.as_ref().map(motion_matrix))
        .collect();

    info!(
        "Scene initialized: camera '{}' ({}x{}), {} shapes.",
        camera.name,
        camera.dim.width,
        camera.dim.height,
        shapes.len()
    );

    Ok(RenderContext {
        camera_motion: config.camera.motion.as_ref().map(motion_matrix),
        camera,
        shapes,
        shape_motions,
    })
}
