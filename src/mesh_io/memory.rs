use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::{MeshLoadError, MeshLoader, MeshSet, SurfaceMesh, merge_and_dedup};

/// Serves surfaces registered in memory under the paths a geometry file uses.
///
/// Useful when geometry is produced by another stage of a pipeline rather
/// than read from disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryMeshLoader {
    singles: FxHashMap<PathBuf, SurfaceMesh>,
    merged: FxHashMap<PathBuf, Vec<(SmolStr, SurfaceMesh)>>,
}

impl MemoryMeshLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a single surface under `path`.
    pub fn insert(&mut self, path: impl Into<PathBuf>, surface: SurfaceMesh) -> &mut Self {
        self.singles.insert(path.into(), surface);
        self
    }

    /// Register a multi-surface file under `path`.
    pub fn insert_merged(
        &mut self,
        path: impl Into<PathBuf>,
        surfaces: Vec<(SmolStr, SurfaceMesh)>,
    ) -> &mut Self {
        self.merged.insert(path.into(), surfaces);
        self
    }

    fn single(&self, path: &Path) -> Result<&SurfaceMesh, MeshLoadError> {
        self.singles.get(path).ok_or_else(|| {
            MeshLoadError::io(path, std::io::Error::from(std::io::ErrorKind::NotFound))
        })
    }
}

impl MeshLoader for MemoryMeshLoader {
    fn measure(&self, path: &Path) -> Result<usize, MeshLoadError> {
        Ok(self.single(path)?.vertices.len())
    }

    fn load_single(&self, path: &Path) -> Result<SurfaceMesh, MeshLoadError> {
        self.single(path).cloned()
    }

    fn load_merged(&self, path: &Path) -> Result<MeshSet, MeshLoadError> {
        let surfaces = self.merged.get(path).ok_or_else(|| {
            MeshLoadError::io(path, std::io::Error::from(std::io::ErrorKind::NotFound))
        })?;
        Ok(merge_and_dedup(surfaces.clone()))
    }
}
