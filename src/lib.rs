//! # geomdesc
//!
//! Reader for domain description (`.geom`) files: named surfaces (meshes),
//! closed shells built from signed meshes (interfaces), and regions bounded
//! by signed interfaces (domains), with the topology inference that comes
//! with them.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! parser    → Scanner, section parsers, GeometryReader
//!   ↓
//! topology  → Closure check/repair, outermost domain, nesting
//!   ↓
//! model     → GeometryModel and its arenas
//!   ↓
//! mesh_io   → MeshLoader collaborator, vertex merging
//!   ↓
//! base      → Primitives (arena handles, positions, paths, constants)
//! ```
//!
//! ## Example
//!
//! ```no_run
//! let model = geomdesc::read_geometry("head.geom")?;
//! for domain in model.domains() {
//!     println!("{}: {} half-spaces", domain.name, domain.half_spaces.len());
//! }
//! # Ok::<(), geomdesc::GeometryError>(())
//! ```

// ============================================================================
// MODULES (dependency order: base → mesh_io → model → topology → parser)
// ============================================================================

/// Foundation types: arena handles, positions, path resolution
pub mod base;

/// Error types
pub mod error;

/// Mesh loading collaborator and vertex merging
pub mod mesh_io;

/// The geometry model value
pub mod model;

/// Topology analysis: closure, outermost domain, nesting
pub mod topology;

/// Domain description parser
pub mod parser;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use base::{DomainId, InterfaceId, MeshId};
pub use error::{GeometryError, Result};
pub use mesh_io::{MeshLoader, MemoryMeshLoader, TriMeshLoader};
pub use model::{Domain, FormatVersion, GeometryModel, HalfSpace, Interface, Mesh, OrientedMesh};
pub use parser::{GeometryReader, ReaderOptions, read_geometry};
