//! The geometry model produced by the reader.
//!
//! Meshes, interfaces and domains live in arenas addressed by the handles in
//! [`crate::base`]. Oriented meshes and half-spaces store handles, never
//! references, so the arenas can grow while a file is being read.

mod domain;
mod geometry;
mod interface;
mod mesh;
mod notice;

pub use domain::{Domain, HalfSpace};
pub use geometry::{FormatVersion, GeometryModel};
pub(crate) use geometry::GeometryBuilder;
pub use interface::{Interface, OrientedMesh};
pub use mesh::{Mesh, Triangle, Vertex};
pub use notice::{Notice, Severity};

/// Insertion-ordered name index with a fast hasher.
pub(crate) type NameIndex<V> = indexmap::IndexMap<smol_str::SmolStr, V, rustc_hash::FxBuildHasher>;
