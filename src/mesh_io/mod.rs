//! Mesh loading collaborator.
//!
//! The reader never decodes surface geometry itself: it asks a [`MeshLoader`]
//! for vertex counts, standalone surfaces, or a merged multi-surface set,
//! and only merges standalone surfaces into the shared pool through
//! [`merge_and_dedup`].

mod memory;
mod merge;
mod tri;

use std::path::Path;

use smol_str::SmolStr;
use thiserror::Error;

use crate::model::{Triangle, Vertex};

pub use memory::MemoryMeshLoader;
pub use merge::merge_and_dedup;
pub use tri::TriMeshLoader;

/// Errors raised by a [`MeshLoader`].
#[derive(Debug, Error)]
pub enum MeshLoadError {
    /// IO error while opening or reading a mesh file.
    #[error("cannot read mesh file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The mesh file content does not follow its format.
    #[error("invalid mesh file {path}: {message}")]
    Format { path: String, message: String },

    /// The loader cannot handle this file or operation.
    #[error("unsupported mesh file {path}: {message}")]
    Unsupported { path: String, message: String },
}

impl MeshLoadError {
    pub fn format(path: &Path, message: impl Into<String>) -> Self {
        Self::Format {
            path: path.display().to_string(),
            message: message.into(),
        }
    }

    pub fn unsupported(path: &Path, message: impl Into<String>) -> Self {
        Self::Unsupported {
            path: path.display().to_string(),
            message: message.into(),
        }
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// A surface loaded on its own, with a private vertex list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SurfaceMesh {
    pub vertices: Vec<Vertex>,
    /// Indices into `vertices`.
    pub triangles: Vec<Triangle>,
}

impl SurfaceMesh {
    pub fn new(vertices: Vec<Vertex>, triangles: Vec<Triangle>) -> Self {
        Self {
            vertices,
            triangles,
        }
    }
}

/// Named surfaces sharing one deduplicated vertex pool.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshSet {
    pub vertices: Vec<Vertex>,
    /// Surfaces in file order; triangle indices point into `vertices`.
    pub surfaces: Vec<(SmolStr, Vec<Triangle>)>,
}

/// Source of surface geometry for the reader.
pub trait MeshLoader {
    /// Number of vertices in a single-surface file, without building the surface.
    fn measure(&self, path: &Path) -> Result<usize, MeshLoadError>;

    /// Load one surface with its own vertex list.
    fn load_single(&self, path: &Path) -> Result<SurfaceMesh, MeshLoadError>;

    /// Load a multi-surface file whose surfaces already share one pool.
    fn load_merged(&self, path: &Path) -> Result<MeshSet, MeshLoadError>;
}

impl<L: MeshLoader + ?Sized> MeshLoader for &L {
    fn measure(&self, path: &Path) -> Result<usize, MeshLoadError> {
        (**self).measure(path)
    }

    fn load_single(&self, path: &Path) -> Result<SurfaceMesh, MeshLoadError> {
        (**self).load_single(path)
    }

    fn load_merged(&self, path: &Path) -> Result<MeshSet, MeshLoadError> {
        (**self).load_merged(path)
    }
}
