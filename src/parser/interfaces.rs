//! Interface section.
//!
//! ```text
//! Interfaces <N> [Mesh]
//! Interface [<name>:] "<path>"           (no mesh section: one file per interface)
//! Interface [<name>:] [+-]<mesh> ...     (after a mesh section)
//! ```

use std::path::PathBuf;

use smol_str::SmolStr;

use super::scanner::Scanner;
use super::{ReadContext, Sign, split_sign};
use crate::base::constants::{
    KW_INTERFACE, KW_INTERFACE_UNNAMED, KW_INTERFACES, KW_MESH, NAME_DELIMITER, QUOTE,
};
use crate::error::{GeometryError, Result, Section};
use crate::model::{GeometryBuilder, Interface, OrientedMesh, Triangle};

fn default_name(index: u32) -> SmolStr {
    SmolStr::new((index + 1).to_string())
}

/// `Interface:` gives the default name, `Interface <name>:` an explicit one.
fn interface_name(
    scanner: &mut Scanner<'_>,
    ctx: &ReadContext<'_>,
    index: u32,
    legacy: bool,
) -> Result<SmolStr> {
    let unnamed = scanner.eat(KW_INTERFACE_UNNAMED);
    if unnamed || legacy {
        return Ok(default_name(index));
    }
    scanner
        .expect(KW_INTERFACE)
        .map_err(|e| ctx.malformed(Section::Interfaces, e))?;
    let token = scanner
        .token(NAME_DELIMITER)
        .map_err(|e| ctx.malformed(Section::Interfaces, e))?;
    Ok(if token.is_empty() {
        default_name(index)
    } else {
        SmolStr::new(token)
    })
}

/// Read the interface section into `builder`.
pub(super) fn parse_interfaces(
    scanner: &mut Scanner<'_>,
    ctx: &ReadContext<'_>,
    builder: &mut GeometryBuilder,
) -> Result<()> {
    scanner.skip_comments();
    scanner
        .expect(KW_INTERFACES)
        .map_err(|e| ctx.malformed(Section::Interfaces, e))?;
    let count = scanner
        .unsigned()
        .map_err(|e| ctx.malformed(Section::Interfaces, e))?;
    // Accepted for backward compatibility only.
    scanner.eat_on_line(KW_MESH);

    if builder.has_meshes() {
        parse_mesh_references(scanner, ctx, builder, count)?;
    } else {
        parse_interface_files(scanner, ctx, builder, count)?;
    }
    tracing::debug!("read {} interfaces", count);
    Ok(())
}

/// One mesh file per interface, loaded into the shared pool.
fn parse_interface_files(
    scanner: &mut Scanner<'_>,
    ctx: &ReadContext<'_>,
    builder: &mut GeometryBuilder,
    count: u32,
) -> Result<()> {
    let legacy = builder.version.is_legacy();

    let mut entries: Vec<(SmolStr, PathBuf)> = Vec::new();
    let mut nb_vertices: usize = 0;
    for i in 0..count {
        scanner.skip_comments();
        let name = interface_name(scanner, ctx, i, legacy)?;
        let filename = scanner
            .filename(QUOTE, false)
            .map_err(|e| ctx.malformed(Section::Interfaces, e))?;
        let path = ctx.resolve(filename);
        let measured = ctx.loader.measure(&path).map_err(|e| ctx.mesh_load(e))?;
        nb_vertices = nb_vertices.saturating_add(measured);
        entries.push((name, path));
    }
    builder.reserve_vertices(nb_vertices);

    for (name, path) in entries {
        let surface = ctx
            .loader
            .load_single(&path)
            .map_err(|e| ctx.mesh_load(e))?;
        let offset = builder.extend_vertices(surface.vertices);
        let triangles = surface
            .triangles
            .into_iter()
            .map(|Triangle([a, b, c])| Triangle::new(a + offset, b + offset, c + offset))
            .collect();
        let mesh = builder.add_mesh(name.clone(), triangles)?;

        let mut interface = Interface::new(name);
        interface.push(OrientedMesh::new(mesh, true));
        tracing::trace!("interface \"{}\" from {}", interface.name, path.display());
        builder.add_interface(interface)?;
    }
    Ok(())
}

/// One line per interface listing signed names of already loaded meshes.
fn parse_mesh_references(
    scanner: &mut Scanner<'_>,
    ctx: &ReadContext<'_>,
    builder: &mut GeometryBuilder,
    count: u32,
) -> Result<()> {
    for i in 0..count {
        scanner.skip_comments();
        let mut line = scanner.line();
        let name = interface_name(&mut line, ctx, i, false)?;

        let mut interface = Interface::new(name);
        for id in line.rest_of_line().split_whitespace() {
            let (sign, mesh_name) = split_sign(id);
            let mesh = builder.find_mesh(mesh_name).ok_or_else(|| {
                GeometryError::UnknownMeshReference {
                    path: ctx.path.to_path_buf(),
                    interface: interface.name.to_string(),
                    mesh: mesh_name.to_string(),
                }
            })?;
            // '-' flips the mesh.
            interface.push(OrientedMesh::new(mesh, sign != Sign::Minus));
        }
        tracing::trace!(
            "interface \"{}\" with {} meshes",
            interface.name,
            interface.members.len()
        );
        builder.add_interface(interface)?;
    }
    Ok(())
}
