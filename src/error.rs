//! Error types for the rendering pipeline.
//!
//! Every failure is an input or programming error: nothing here is retried,
//! and any error aborts the current load or render call.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading assets or rendering a mesh.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A mesh record could not be parsed or a required record type is missing.
    #[error("Malformed mesh: {0}")]
    MalformedMesh(String),

    /// A face references an element past the end of its array.
    #[error("Face references {kind} index {index}, but only {len} are defined")]
    IndexOutOfRange {
        /// Which array the index points into.
        kind: &'static str,
        /// The offending 0-based index.
        index: usize,
        /// Length of the referenced array.
        len: usize,
    },

    /// Normals are looked up by vertex index, so both arrays must line up.
    #[error("Mesh has {vertices} vertices but {normals} normals")]
    NormalCountMismatch {
        /// Number of vertex positions.
        vertices: usize,
        /// Number of normals.
        normals: usize,
    },

    /// Matrix determinant is zero.
    #[error("Singular matrix")]
    SingularMatrix,

    /// Determinant and inverse are only defined for square matrices.
    #[error("Matrix is not square ({rows}x{cols})")]
    NotSquare {
        /// Row count.
        rows: usize,
        /// Column count.
        cols: usize,
    },

    /// Operand sizes do not agree (vector lengths or inner matrix dimensions).
    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Required length.
        expected: usize,
        /// Actual length.
        found: usize,
    },

    /// A zero-length vector was normalized.
    #[error("Cannot normalize zero-length vector: {0}")]
    DegenerateVector(&'static str),

    /// Texture dimensions or pixel data are inconsistent.
    #[error("Invalid texture: {0}")]
    InvalidTexture(String),

    /// Viewport must cover at least one pixel.
    #[error("Invalid viewport {width}x{height}")]
    InvalidViewport {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// A configuration value could not be parsed or is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The display window could not be created or updated.
    #[error("Window error: {0}")]
    Window(String),

    /// Reading an asset from disk failed.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// The path that failed.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Image decoding or encoding failed.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// The OBJ loader rejected the file.
    #[error("OBJ load error: {0}")]
    ObjLoad(#[from] tobj::LoadError),
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, RenderError>;
