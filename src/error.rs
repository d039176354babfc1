use thiserror::Error;

/// Errors raised outside the numeric core: configuration, output and the
/// opt-in strict mesh validation. Rendering itself never fails.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to read config file '{path}': {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to save image to '{path}': {source}")]
    ImageSave {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Edge {edge} references vertex {vertex}, but the mesh has {vertex_count} vertices")]
    EdgeOutOfRange {
        edge: usize,
        vertex: usize,
        vertex_count: usize,
    },

    #[error("Edge {edge} connects vertex {vertex} to itself")]
    SelfLoop { edge: usize, vertex: usize },

    #[error("Mesh has {vertices} vertices but {colors} colors")]
    ColorCountMismatch { vertices: usize, colors: usize },

    #[error("Unknown object kind '{0}' (expected \"cube\" or \"mesh\")")]
    UnknownObjectKind(String),
}
