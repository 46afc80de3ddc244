use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::{MeshSet, SurfaceMesh};
use crate::model::Triangle;

/// Merge standalone surfaces into one pool, collapsing coincident vertices.
///
/// Surfaces keep their order. A vertex takes the pool index of its first
/// occurrence across all surfaces, and triangle indices are remapped to it.
pub fn merge_and_dedup(surfaces: Vec<(SmolStr, SurfaceMesh)>) -> MeshSet {
    let total: usize = surfaces.iter().map(|(_, s)| s.vertices.len()).sum();
    let mut set = MeshSet {
        vertices: Vec::with_capacity(total),
        surfaces: Vec::with_capacity(surfaces.len()),
    };
    let mut seen: FxHashMap<[u64; 3], usize> = FxHashMap::default();
    seen.reserve(total);

    for (name, surface) in surfaces {
        let remap: Vec<usize> = surface
            .vertices
            .iter()
            .map(|vertex| {
                *seen.entry(vertex.key()).or_insert_with(|| {
                    set.vertices.push(*vertex);
                    set.vertices.len() - 1
                })
            })
            .collect();

        let triangles = surface
            .triangles
            .iter()
            .map(|Triangle([a, b, c])| Triangle::new(remap[*a], remap[*b], remap[*c]))
            .collect();
        set.surfaces.push((name, triangles));
    }

    tracing::debug!(
        "merged {} vertices into a pool of {}",
        total,
        set.vertices.len()
    );
    set
}
