//! Reader for the ASCII `.tri` triangulation format.
//!
//! ```text
//! - 4
//! x y z nx ny nz      (one line per vertex, normals ignored)
//! - 4 4 4
//! i j k               (one line per triangle, 0-based)
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use super::{MeshLoadError, MeshLoader, MeshSet, SurfaceMesh};
use crate::base::constants::{PREALLOCATION_LIMIT, TRI_EXTENSION};
use crate::model::{Triangle, Vertex};

/// Loads single surfaces from `.tri` files on disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct TriMeshLoader;

impl TriMeshLoader {
    pub fn new() -> Self {
        Self
    }

    fn open(path: &Path) -> Result<BufReader<File>, MeshLoadError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !ext.eq_ignore_ascii_case(TRI_EXTENSION) {
            return Err(MeshLoadError::unsupported(
                path,
                format!("expected a .{TRI_EXTENSION} file"),
            ));
        }
        File::open(path)
            .map(BufReader::new)
            .map_err(|e| MeshLoadError::io(path, e))
    }
}

impl MeshLoader for TriMeshLoader {
    fn measure(&self, path: &Path) -> Result<usize, MeshLoadError> {
        let mut reader = Self::open(path)?;
        let mut line = String::new();
        loop {
            line.clear();
            let read = reader
                .read_line(&mut line)
                .map_err(|e| MeshLoadError::io(path, e))?;
            if read == 0 {
                return Err(MeshLoadError::format(path, "missing vertex count"));
            }
            if !line.trim().is_empty() {
                break;
            }
        }
        let mut tokens = line.split_whitespace();
        parse_section_header(path, &mut tokens, "vertex")
    }

    fn load_single(&self, path: &Path) -> Result<SurfaceMesh, MeshLoadError> {
        let mut content = String::new();
        Self::open(path)?
            .read_to_string(&mut content)
            .map_err(|e| MeshLoadError::io(path, e))?;
        parse_tri(path, &content)
    }

    fn load_merged(&self, path: &Path) -> Result<MeshSet, MeshLoadError> {
        Err(MeshLoadError::unsupported(
            path,
            "the .tri format holds a single surface",
        ))
    }
}

fn parse_section_header<'a>(
    path: &Path,
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> Result<usize, MeshLoadError> {
    if tokens.next() != Some("-") {
        return Err(MeshLoadError::format(
            path,
            format!("expected '-' before the {what} count"),
        ));
    }
    parse_number(path, tokens.next(), &format!("{what} count"))
}

fn parse_number<T: std::str::FromStr>(
    path: &Path,
    token: Option<&str>,
    what: &str,
) -> Result<T, MeshLoadError> {
    let token = token.ok_or_else(|| MeshLoadError::format(path, format!("missing {what}")))?;
    token
        .parse()
        .map_err(|_| MeshLoadError::format(path, format!("invalid {what} '{token}'")))
}

/// Parse the content of a `.tri` file.
pub(crate) fn parse_tri(path: &Path, content: &str) -> Result<SurfaceMesh, MeshLoadError> {
    let mut tokens = content.split_whitespace();

    let nb_vertices = parse_section_header(path, &mut tokens, "vertex")?;
    let mut vertices = Vec::with_capacity(nb_vertices.min(PREALLOCATION_LIMIT));
    for _ in 0..nb_vertices {
        let x = parse_number(path, tokens.next(), "coordinate")?;
        let y = parse_number(path, tokens.next(), "coordinate")?;
        let z = parse_number(path, tokens.next(), "coordinate")?;
        for _ in 0..3 {
            parse_number::<f64>(path, tokens.next(), "normal component")?;
        }
        vertices.push(Vertex::new(x, y, z));
    }

    let nb_triangles = parse_section_header(path, &mut tokens, "triangle")?;
    // The count is repeated three times.
    for _ in 0..2 {
        let again: usize = parse_number(path, tokens.next(), "triangle count")?;
        if again != nb_triangles {
            return Err(MeshLoadError::format(path, "inconsistent triangle counts"));
        }
    }

    let mut triangles = Vec::with_capacity(nb_triangles.min(PREALLOCATION_LIMIT));
    for _ in 0..nb_triangles {
        let mut corner = || -> Result<usize, MeshLoadError> {
            let index: usize = parse_number(path, tokens.next(), "vertex index")?;
            if index >= nb_vertices {
                return Err(MeshLoadError::format(
                    path,
                    format!("vertex index {index} out of range"),
                ));
            }
            Ok(index)
        };
        let a = corner()?;
        let b = corner()?;
        let c = corner()?;
        triangles.push(Triangle::new(a, b, c));
    }

    Ok(SurfaceMesh::new(vertices, triangles))
}
