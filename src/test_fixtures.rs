//! Surfaces shared by the unit tests.

use smol_str::SmolStr;

use crate::mesh_io::{MemoryMeshLoader, SurfaceMesh};
use crate::model::{Triangle, Vertex};

const UNIT_TETRAHEDRON: [[f64; 3]; 4] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
];

/// Outward faces of the unit tetrahedron.
const TETRAHEDRON_FACES: [[usize; 3]; 4] = [[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]];

fn tetrahedron_vertices(scale: f64) -> Vec<Vertex> {
    UNIT_TETRAHEDRON
        .iter()
        .map(|[x, y, z]| Vertex::new((x - 0.25) * scale, (y - 0.25) * scale, (z - 0.25) * scale))
        .collect()
}

fn faces(list: &[[usize; 3]]) -> Vec<Triangle> {
    list.iter().map(|&[a, b, c]| Triangle::new(a, b, c)).collect()
}

/// Closed tetrahedron; different scales never share a vertex.
pub(crate) fn tetrahedron(scale: f64) -> SurfaceMesh {
    SurfaceMesh::new(tetrahedron_vertices(scale), faces(&TETRAHEDRON_FACES))
}

/// The tetrahedron cut in two open patches that close each other.
pub(crate) fn tetrahedron_halves(scale: f64) -> (SurfaceMesh, SurfaceMesh) {
    let first = SurfaceMesh::new(tetrahedron_vertices(scale), faces(&TETRAHEDRON_FACES[..2]));
    let second = SurfaceMesh::new(tetrahedron_vertices(scale), faces(&TETRAHEDRON_FACES[2..]));
    (first, second)
}

/// Loader serving `skull.tri` (scale 2) and `brain.tri` (scale 1) under `dir`.
pub(crate) fn nested_loader(dir: &str) -> MemoryMeshLoader {
    let mut loader = MemoryMeshLoader::new();
    loader
        .insert(format!("{dir}skull.tri"), tetrahedron(2.0))
        .insert(format!("{dir}brain.tri"), tetrahedron(1.0));
    loader
}

/// Loader serving the two halves of one tetrahedron as `top.tri` / `bottom.tri`.
pub(crate) fn halves_loader(dir: &str) -> MemoryMeshLoader {
    let (top, bottom) = tetrahedron_halves(1.0);
    let mut loader = MemoryMeshLoader::new();
    loader
        .insert(format!("{dir}top.tri"), top.clone())
        .insert(format!("{dir}bottom.tri"), bottom.clone())
        .insert_merged(
            format!("{dir}halves.vtp"),
            vec![(SmolStr::new("top"), top), (SmolStr::new("bottom"), bottom)],
        );
    loader
}
