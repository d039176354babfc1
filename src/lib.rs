//! Software rendering through a pinhole camera: rigid poses, perspective
//! projection and z-buffered triangle rasterization with per-vertex colors.

pub mod app;
pub mod core;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod scene;

pub use crate::core::math::pose::{Pose, Transformable};
pub use crate::core::math::transform::TransformFactory;
pub use crate::error::RenderError;
pub use crate::scene::camera::{Camera, ImageDimensions};
pub use crate::scene::mesh::Mesh;
pub use crate::scene::shape::Shape;
