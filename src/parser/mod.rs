//! Domain description reader.
//!
//! Sections are read strictly forward:
//!
//! ```text
//! header → [meshes] → interfaces → domains → topology analysis → GeometryModel
//! ```
//!
//! The model is built in a private [`GeometryBuilder`] and only handed out
//! once every section parsed and every check passed, so a failed read never
//! exposes a partial model.

mod domains;
mod header;
mod interfaces;
mod meshes;
mod options;
pub mod scanner;

use std::path::{Path, PathBuf};

pub use options::ReaderOptions;

use self::scanner::{ScanError, Scanner};
use crate::base::{LineIndex, Position, paths};
use crate::error::{GeometryError, Result, Section};
use crate::mesh_io::{MeshLoadError, MeshLoader, TriMeshLoader};
use crate::model::{FormatVersion, GeometryBuilder, GeometryModel, Notice};
use crate::topology::{self, ClosureTracker};

/// Sign prefix of an id in an interface or domain list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sign {
    Plus,
    Minus,
    /// No prefix; read as `+`.
    Implicit,
}

/// Split an optional leading `+`/`-` from `id`.
pub(crate) fn split_sign(id: &str) -> (Sign, &str) {
    if let Some(rest) = id.strip_prefix('+') {
        (Sign::Plus, rest)
    } else if let Some(rest) = id.strip_prefix('-') {
        (Sign::Minus, rest)
    } else {
        (Sign::Implicit, id)
    }
}

/// What every section parser needs besides the scanner and the builder.
pub(crate) struct ReadContext<'a> {
    pub(crate) path: &'a Path,
    /// Directory prefix of `path`, used to resolve relative mesh paths.
    directory: String,
    pub(crate) loader: &'a dyn MeshLoader,
    text: &'a str,
    lines: LineIndex,
}

impl<'a> ReadContext<'a> {
    fn new(path: &'a Path, loader: &'a dyn MeshLoader, text: &'a str) -> Self {
        let directory = paths::directory_of(&path.to_string_lossy()).to_string();
        Self {
            path,
            directory,
            loader,
            text,
            lines: LineIndex::new(text),
        }
    }

    pub(crate) fn position(&self, offset: usize) -> Position {
        self.lines.position(self.text, offset)
    }

    pub(crate) fn resolve(&self, filename: &str) -> PathBuf {
        paths::resolve(filename, &self.directory)
    }

    pub(crate) fn malformed(&self, section: Section, error: ScanError) -> GeometryError {
        GeometryError::MalformedSection {
            path: self.path.to_path_buf(),
            section,
            position: self.position(error.offset),
            message: error.message(),
        }
    }

    pub(crate) fn mesh_load(&self, source: MeshLoadError) -> GeometryError {
        GeometryError::MeshLoad {
            path: self.path.to_path_buf(),
            source,
        }
    }
}

/// Reads domain description files, loading surfaces through `L`.
#[derive(Debug, Clone, Default)]
pub struct GeometryReader<L> {
    loader: L,
    options: ReaderOptions,
}

impl<L: MeshLoader> GeometryReader<L> {
    pub fn new(loader: L) -> Self {
        Self::with_options(loader, ReaderOptions::default())
    }

    pub fn with_options(loader: L, options: ReaderOptions) -> Self {
        Self { loader, options }
    }

    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Read and analyse the geometry file at `path`.
    ///
    /// # Errors
    ///
    /// Returns the first [`GeometryError`] met; no model is produced then.
    pub fn read(&self, path: impl AsRef<Path>) -> Result<GeometryModel> {
        let path = path.as_ref();
        // The file is closed as soon as its content is in memory.
        let content = std::fs::read_to_string(path).map_err(|source| GeometryError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        self.read_str(&content, path)
    }

    /// Read geometry text as if it were the content of `path`.
    ///
    /// `path` names the file in errors and anchors relative mesh paths.
    pub fn read_str(&self, content: &str, path: impl AsRef<Path>) -> Result<GeometryModel> {
        let path = path.as_ref();
        let ctx = ReadContext::new(path, &self.loader, content);
        let mut scanner = Scanner::new(content, self.options.comment_marker);

        let version = header::parse_header(&mut scanner, &ctx)?;
        let mut builder = GeometryBuilder::new(path.to_path_buf(), version);
        if version == FormatVersion::Legacy {
            let message = format!(
                "deprecated geometry file format 1.0: {}; please consider updating it to format 1.1",
                path.display()
            );
            tracing::warn!("{}", message);
            builder.notice(Notice::warning(message));
        }

        if version == FormatVersion::Current {
            meshes::parse_meshes(&mut scanner, &ctx, &mut builder)?;
        }
        interfaces::parse_interfaces(&mut scanner, &ctx, &mut builder)?;

        let mut closure =
            ClosureTracker::new(builder.interfaces.len(), self.options.repair_orientation);
        domains::parse_domains(&mut scanner, &ctx, &mut builder, &mut closure)?;
        if self.options.check_unreferenced_interfaces {
            closure.ensure_all_closed(&mut builder)?;
        }

        let (outermost, nested) = topology::analyze(&mut builder);
        if outermost.is_none() && self.options.require_outermost {
            return Err(GeometryError::MalformedSection {
                path: path.to_path_buf(),
                section: Section::Domains,
                position: ctx.position(scanner.offset()),
                message: "no domain lies outside all of its interfaces".to_string(),
            });
        }

        let model = builder.finish(outermost, nested);
        tracing::info!(
            "read {}: {} meshes, {} interfaces, {} domains, {}",
            path.display(),
            model.meshes().len(),
            model.interfaces().len(),
            model.domains().len(),
            if model.is_nested() { "nested" } else { "non-nested" }
        );
        Ok(model)
    }
}

/// Read a geometry file whose surfaces are `.tri` files.
pub fn read_geometry(path: impl AsRef<Path>) -> Result<GeometryModel> {
    GeometryReader::new(TriMeshLoader::new()).read(path)
}
