//! Error types for geometry reading.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::base::Position;
use crate::mesh_io::MeshLoadError;

/// Section of the domain description being read when an error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Header,
    Meshes,
    Interfaces,
    Domains,
}

impl Section {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Meshes => "meshes",
            Self::Interfaces => "interfaces",
            Self::Domains => "domains",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of named entity, used by [`GeometryError::DuplicateName`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameKind {
    Mesh,
    Interface,
    Domain,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Mesh => "mesh",
            Self::Interface => "interface",
            Self::Domain => "domain",
        })
    }
}

/// Errors that can occur while reading a geometry description.
///
/// Every variant names the geometry file it was raised for. None of them is
/// recovered locally: the reader stops at the first one and no model escapes.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// The geometry file could not be opened or read.
    #[error("cannot open geometry file {}: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Missing header or unsupported `major.minor` version.
    #[error("{}: wrong file format: {message}", .path.display())]
    FormatVersion { path: PathBuf, message: String },

    /// A token or keyword mismatch in one of the sections.
    #[error("{}:{position}: malformed {section} section: {message}", .path.display())]
    MalformedSection {
        path: PathBuf,
        section: Section,
        position: Position,
        message: String,
    },

    /// A domain names an interface that was never declared.
    #[error("{}: domain \"{domain}\" references unknown interface \"{interface}\"", .path.display())]
    UnknownInterfaceReference {
        path: PathBuf,
        domain: String,
        interface: String,
    },

    /// An interface names a mesh that was never loaded.
    #[error("{}: interface \"{interface}\" references unknown mesh \"{mesh}\"", .path.display())]
    UnknownMeshReference {
        path: PathBuf,
        interface: String,
        mesh: String,
    },

    /// The interface is not a closed surface, even after orientation repair.
    #[error(
        "{}: interface \"{interface}\" is not closed; correct a mesh orientation when defining the interface",
        .path.display()
    )]
    NonClosedInterface { path: PathBuf, interface: String },

    /// A second mesh, interface or domain reuses an existing name.
    #[error("{}: duplicate {kind} name \"{name}\"", .path.display())]
    DuplicateName {
        path: PathBuf,
        kind: NameKind,
        name: String,
    },

    /// The mesh loader failed on a file referenced by the geometry.
    #[error("{}: {source}", .path.display())]
    MeshLoad {
        path: PathBuf,
        #[source]
        source: MeshLoadError,
    },

    /// Conductivity assignment found no match between a domain and the table.
    #[error("{}: no conductivity match for domain \"{domain}\"", .path.display())]
    UnknownDomainConductivity { path: PathBuf, domain: String },
}

impl GeometryError {
    /// Path of the geometry file the error was raised for.
    pub fn path(&self) -> &Path {
        match self {
            Self::FileOpen { path, .. }
            | Self::FormatVersion { path, .. }
            | Self::MalformedSection { path, .. }
            | Self::UnknownInterfaceReference { path, .. }
            | Self::UnknownMeshReference { path, .. }
            | Self::NonClosedInterface { path, .. }
            | Self::DuplicateName { path, .. }
            | Self::MeshLoad { path, .. }
            | Self::UnknownDomainConductivity { path, .. } => path,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = GeometryError> = std::result::Result<T, E>;
