use crate::error::RenderError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub objects: Vec<ObjectConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            camera: CameraConfig {
                motion: Some(MotionConfig {
                    translation: [0.0; 3],
                    // pi/(16*60) and pi/(4*60) rad per frame.
                    rotation: [0.0, 0.1875, 0.75],
                }),
                ..CameraConfig::default()
            },
            objects: vec![
                ObjectConfig {
                    name: "cube".to_string(),
                    length: 2.0,
                    ..ObjectConfig::default()
                },
                ObjectConfig {
                    name: "cube2".to_string(),
                    position: [1.5, 0.0, 0.0],
                    ..ObjectConfig::default()
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Filled, depth-tested triangles.
    Raster,
    /// One white pixel per vertex.
    Snap,
}

#[derive(Debug, Deserialize)]
pub struct RenderConfig {
    /// Output path. `{frame}` is replaced by the zero-padded frame index.
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_frames")]
    pub frames: usize,
    /// Nearest-neighbour magnification applied before saving.
    #[serde(default = "default_upscale")]
    pub upscale: u32,
    #[serde(default = "default_background")]
    pub background: [u8; 3],
    #[serde(default = "default_mode")]
    pub mode: RenderMode,
    /// Validate meshes while building the scene.
    #[serde(default = "default_false")]
    pub strict: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            frames: default_frames(),
            upscale: default_upscale(),
            background: default_background(),
            mode: default_mode(),
            strict: false,
        }
    }
}

fn default_output() -> String {
    "frame_{frame}.png".to_string()
}
fn default_frames() -> usize {
    1
}
fn default_upscale() -> u32 {
    6
}
fn default_background() -> [u8; 3] {
    [225, 210, 230]
}
fn default_mode() -> RenderMode {
    RenderMode::Raster
}
fn default_false() -> bool {
    false
}

/// Per-frame pose delta, applied after each rendered frame.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MotionConfig {
    #[serde(default)]
    pub translation: [f32; 3],
    /// Degrees: (roll, pitch, yaw).
    #[serde(default)]
    pub rotation: [f32; 3],
}

#[derive(Debug, Deserialize)]
pub struct CameraConfig {
    #[serde(default = "default_camera_name")]
    pub name: String,
    #[serde(default = "default_camera_position")]
    pub position: [f32; 3],
    /// Degrees: (roll, pitch, yaw).
    #[serde(default = "default_camera_rotation")]
    pub rotation: [f32; 3],
    #[serde(default = "default_height")]
    pub height: usize,
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_focal")]
    pub focal: f32,
    #[serde(default)]
    pub skew: f32,
    /// Still camera unless given.
    pub motion: Option<MotionConfig>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            name: default_camera_name(),
            position: default_camera_position(),
            rotation: default_camera_rotation(),
            height: default_height(),
            width: default_width(),
            focal: default_focal(),
            skew: 0.0,
            motion: None,
        }
    }
}

fn default_camera_name() -> String {
    "main".to_string()
}
fn default_camera_position() -> [f32; 3] {
    [0.0, 5.0, -5.0]
}
fn default_camera_rotation() -> [f32; 3] {
    [45.0, 0.0, 0.0]
}
fn default_height() -> usize {
    72
}
fn default_width() -> usize {
    128
}
fn default_focal() -> f32 {
    1.0
}

#[derive(Debug, Deserialize)]
pub struct ObjectConfig {
    #[serde(default = "default_object_name")]
    pub name: String,
    /// "cube" or "mesh".
    #[serde(default = "default_kind")]
    pub kind: String,

    // --- Transform ---
    #[serde(default)]
    pub position: [f32; 3],
    /// Degrees: (roll, pitch, yaw).
    #[serde(default)]
    pub rotation: [f32; 3],

    // --- Cube ---
    #[serde(default = "default_length")]
    pub length: f32,

    // --- Explicit mesh ---
    #[serde(default)]
    pub vertices: Vec<[f32; 3]>,
    #[serde(default)]
    pub edges: Vec<[usize; 2]>,

    // --- Colors ---
    /// Per-vertex colors; random when empty.
    #[serde(default)]
    pub colors: Vec<[u8; 3]>,
    pub seed: Option<u64>,

    pub motion: Option<MotionConfig>,
}

impl Default for ObjectConfig {
    fn default() -> Self {
        Self {
            name: default_object_name(),
            kind: default_kind(),
            position: [0.0; 3],
            rotation: [0.0; 3],
            length: default_length(),
            vertices: Vec::new(),
            edges: Vec::new(),
            colors: Vec::new(),
            seed: None,
            motion: None,
        }
    }
}

fn default_object_name() -> String {
    "object".to_string()
}
fn default_kind() -> String {
    "cube".to_string()
}
fn default_length() -> f32 {
    1.0
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RenderError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| RenderError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, RenderError> {
        Ok(toml::from_str(content)?)
    }
}
