use smol_str::SmolStr;

use crate::base::MeshId;

/// A mesh used with its stored orientation (`true`) or flipped (`false`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OrientedMesh {
    pub mesh: MeshId,
    pub orientation: bool,
}

impl OrientedMesh {
    pub fn new(mesh: MeshId, orientation: bool) -> Self {
        Self { mesh, orientation }
    }

    /// `+1` for the stored orientation, `-1` when flipped.
    pub fn sign(&self) -> i32 {
        if self.orientation { 1 } else { -1 }
    }
}

/// A closed shell made of oriented meshes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Interface {
    pub name: SmolStr,
    pub members: Vec<OrientedMesh>,
    /// Set when the outermost domain is bounded by this interface.
    pub outermost: bool,
}

impl Interface {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
            outermost: false,
        }
    }

    pub fn push(&mut self, member: OrientedMesh) {
        self.members.push(member);
    }

    /// Whether `mesh` is one of the members.
    pub fn contains_mesh(&self, mesh: MeshId) -> bool {
        self.members.iter().any(|m| m.mesh == mesh)
    }
}
