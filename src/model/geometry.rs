use std::fmt;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::{Domain, Interface, Mesh, NameIndex, Notice, Triangle, Vertex};
use crate::base::{DomainId, InterfaceId, MeshId};
use crate::error::{GeometryError, NameKind, Result};
use crate::mesh_io::MeshSet;

/// Grammar variant selected by the header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FormatVersion {
    /// `1.0`: no mesh section, unnamed interfaces, bare domain names
    Legacy,
    /// `1.1`
    Current,
}

impl FormatVersion {
    pub fn is_legacy(self) -> bool {
        matches!(self, Self::Legacy)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Legacy => "1.0",
            Self::Current => "1.1",
        }
    }
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully read and analysed domain description.
///
/// Only produced once every section parsed and every interface passed the
/// closure check; the version and nesting flags never change afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GeometryModel {
    source: PathBuf,
    version: FormatVersion,
    vertices: Vec<Vertex>,
    meshes: Vec<Mesh>,
    interfaces: Vec<Interface>,
    domains: Vec<Domain>,
    outermost: Option<DomainId>,
    nested: bool,
    notices: Vec<Notice>,
    #[cfg_attr(feature = "serde", serde(skip))]
    mesh_index: NameIndex<MeshId>,
    #[cfg_attr(feature = "serde", serde(skip))]
    interface_index: NameIndex<InterfaceId>,
    #[cfg_attr(feature = "serde", serde(skip))]
    domain_index: NameIndex<DomainId>,
}

impl GeometryModel {
    /// Path of the geometry file this model was read from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn version(&self) -> FormatVersion {
        self.version
    }

    /// True for a strict shell-within-shell topology.
    pub fn is_nested(&self) -> bool {
        self.nested
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    pub fn mesh(&self, id: MeshId) -> &Mesh {
        &self.meshes[id.index()]
    }

    pub fn mesh_by_name(&self, name: &str) -> Option<MeshId> {
        self.mesh_index.get(name).copied()
    }

    pub fn interfaces(&self) -> &[Interface] {
        &self.interfaces
    }

    pub fn interface(&self, id: InterfaceId) -> &Interface {
        &self.interfaces[id.index()]
    }

    pub fn interface_by_name(&self, name: &str) -> Option<InterfaceId> {
        self.interface_index.get(name).copied()
    }

    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    pub fn domain(&self, id: DomainId) -> &Domain {
        &self.domains[id.index()]
    }

    pub fn domain_by_name(&self, name: &str) -> Option<DomainId> {
        self.domain_index.get(name).copied()
    }

    /// The unbounded domain, if one was found.
    pub fn outermost_domain(&self) -> Option<DomainId> {
        self.outermost
    }

    /// Deprecation and repair notices recorded while reading.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Attach one conductivity per domain from a name/value table.
    ///
    /// Every domain needs an entry and every entry must name a domain;
    /// otherwise nothing is assigned and the first mismatch is returned.
    pub fn assign_conductivities<'a, I>(&mut self, table: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut values: FxHashMap<&str, f64> = FxHashMap::default();
        for (name, sigma) in table {
            if !self.domain_index.contains_key(name) {
                return Err(GeometryError::UnknownDomainConductivity {
                    path: self.source.clone(),
                    domain: name.to_string(),
                });
            }
            values.insert(name, sigma);
        }

        let mut assigned = Vec::with_capacity(self.domains.len());
        for domain in &self.domains {
            match values.get(domain.name.as_str()) {
                Some(&sigma) => assigned.push(sigma),
                None => {
                    return Err(GeometryError::UnknownDomainConductivity {
                        path: self.source.clone(),
                        domain: domain.name.to_string(),
                    });
                }
            }
        }

        for (domain, sigma) in self.domains.iter_mut().zip(assigned) {
            domain.conductivity = Some(sigma);
        }
        Ok(())
    }
}

/// Mutable state owned by the reader while a file is parsed.
///
/// Never handed out: [`GeometryBuilder::finish`] is the only way to get a
/// [`GeometryModel`] out of it.
#[derive(Debug)]
pub(crate) struct GeometryBuilder {
    pub(crate) source: PathBuf,
    pub(crate) version: FormatVersion,
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) meshes: Vec<Mesh>,
    pub(crate) interfaces: Vec<Interface>,
    pub(crate) domains: Vec<Domain>,
    pub(crate) notices: Vec<Notice>,
    mesh_index: NameIndex<MeshId>,
    interface_index: NameIndex<InterfaceId>,
    domain_index: NameIndex<DomainId>,
}

impl GeometryBuilder {
    pub(crate) fn new(source: PathBuf, version: FormatVersion) -> Self {
        Self {
            source,
            version,
            vertices: Vec::new(),
            meshes: Vec::new(),
            interfaces: Vec::new(),
            domains: Vec::new(),
            notices: Vec::new(),
            mesh_index: NameIndex::default(),
            interface_index: NameIndex::default(),
            domain_index: NameIndex::default(),
        }
    }

    fn duplicate(&self, kind: NameKind, name: &str) -> GeometryError {
        GeometryError::DuplicateName {
            path: self.source.clone(),
            kind,
            name: name.to_string(),
        }
    }

    pub(crate) fn has_meshes(&self) -> bool {
        !self.meshes.is_empty()
    }

    /// Capacity hint for the vertex pool; a hint the allocator refuses is dropped.
    pub(crate) fn reserve_vertices(&mut self, additional: usize) {
        if self.vertices.try_reserve(additional).is_err() {
            tracing::debug!("vertex pool hint of {} vertices ignored", additional);
        }
    }

    /// Append vertices to the pool, returning the index of the first one.
    pub(crate) fn extend_vertices(&mut self, vertices: impl IntoIterator<Item = Vertex>) -> usize {
        let offset = self.vertices.len();
        self.vertices.extend(vertices);
        offset
    }

    pub(crate) fn add_mesh(&mut self, name: SmolStr, triangles: Vec<Triangle>) -> Result<MeshId> {
        if self.mesh_index.contains_key(&name) {
            return Err(self.duplicate(NameKind::Mesh, &name));
        }
        let id = MeshId::new(self.meshes.len());
        self.mesh_index.insert(name.clone(), id);
        self.meshes.push(Mesh::new(name, triangles));
        Ok(id)
    }

    /// Import a set of surfaces that already share one vertex pool.
    pub(crate) fn import_mesh_set(&mut self, set: MeshSet) -> Result<Vec<MeshId>> {
        let offset = self.extend_vertices(set.vertices);
        let mut ids = Vec::with_capacity(set.surfaces.len());
        for (name, triangles) in set.surfaces {
            let shifted = triangles
                .into_iter()
                .map(|Triangle([a, b, c])| Triangle::new(a + offset, b + offset, c + offset))
                .collect();
            ids.push(self.add_mesh(name, shifted)?);
        }
        Ok(ids)
    }

    pub(crate) fn find_mesh(&self, name: &str) -> Option<MeshId> {
        self.mesh_index.get(name).copied()
    }

    pub(crate) fn add_interface(&mut self, interface: Interface) -> Result<InterfaceId> {
        if self.interface_index.contains_key(&interface.name) {
            return Err(self.duplicate(NameKind::Interface, &interface.name));
        }
        let id = InterfaceId::new(self.interfaces.len());
        self.interface_index.insert(interface.name.clone(), id);
        self.interfaces.push(interface);
        Ok(id)
    }

    pub(crate) fn find_interface(&self, name: &str) -> Option<InterfaceId> {
        self.interface_index.get(name).copied()
    }

    pub(crate) fn add_domain(&mut self, domain: Domain) -> Result<DomainId> {
        if self.domain_index.contains_key(&domain.name) {
            return Err(self.duplicate(NameKind::Domain, &domain.name));
        }
        let id = DomainId::new(self.domains.len());
        self.domain_index.insert(domain.name.clone(), id);
        self.domains.push(domain);
        Ok(id)
    }

    pub(crate) fn notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    pub(crate) fn finish(self, outermost: Option<DomainId>, nested: bool) -> GeometryModel {
        GeometryModel {
            source: self.source,
            version: self.version,
            vertices: self.vertices,
            meshes: self.meshes,
            interfaces: self.interfaces,
            domains: self.domains,
            outermost,
            nested,
            notices: self.notices,
            mesh_index: self.mesh_index,
            interface_index: self.interface_index,
            domain_index: self.domain_index,
        }
    }
}
