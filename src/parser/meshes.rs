//! Optional mesh section (current format only).
//!
//! ```text
//! MeshFile "<path>"
//! Meshes <N>
//! Mesh [<name>]: "<path>"      (N times)
//! ```

use smol_str::SmolStr;

use super::ReadContext;
use super::scanner::Scanner;
use crate::base::constants::{KW_MESH, KW_MESH_FILE, KW_MESHES, NAME_DELIMITER, QUOTE};
use crate::error::{Result, Section};
use crate::mesh_io::merge_and_dedup;
use crate::model::GeometryBuilder;

/// Load the meshes of the section, if present. Returns whether it was.
pub(super) fn parse_meshes(
    scanner: &mut Scanner<'_>,
    ctx: &ReadContext<'_>,
    builder: &mut GeometryBuilder,
) -> Result<bool> {
    scanner.skip_comments();
    match scanner.eat_any(&[KW_MESH_FILE, KW_MESHES]) {
        Some(0) => {
            scanner.skip_comments();
            let filename = scanner
                .filename(QUOTE, false)
                .map_err(|e| ctx.malformed(Section::Meshes, e))?;
            let path = ctx.resolve(filename);
            tracing::debug!("loading merged mesh file {}", path.display());

            let set = ctx
                .loader
                .load_merged(&path)
                .map_err(|e| ctx.mesh_load(e))?;
            let ids = builder.import_mesh_set(set)?;
            tracing::debug!("loaded {} meshes from {}", ids.len(), path.display());
            Ok(true)
        }
        Some(_) => {
            let count = scanner
                .unsigned()
                .map_err(|e| ctx.malformed(Section::Meshes, e))?;

            let mut surfaces = Vec::new();
            for i in 0..count {
                scanner.skip_comments();
                scanner
                    .expect(KW_MESH)
                    .map_err(|e| ctx.malformed(Section::Meshes, e))?;
                scanner.skip_inline_whitespace();
                let name = if scanner.peek_char() == Some(NAME_DELIMITER) {
                    scanner.eat(":");
                    SmolStr::new((i + 1).to_string())
                } else {
                    let token = scanner
                        .token(NAME_DELIMITER)
                        .map_err(|e| ctx.malformed(Section::Meshes, e))?;
                    SmolStr::new(token)
                };
                let filename = scanner
                    .filename(QUOTE, false)
                    .map_err(|e| ctx.malformed(Section::Meshes, e))?;
                let path = ctx.resolve(filename);
                tracing::trace!("mesh \"{}\" from {}", name, path.display());

                let surface = ctx
                    .loader
                    .load_single(&path)
                    .map_err(|e| ctx.mesh_load(e))?;
                surfaces.push((name, surface));
            }

            // Coincident vertices are shared across the listed surfaces.
            let set = merge_and_dedup(surfaces);
            builder.import_mesh_set(set)?;
            tracing::debug!("loaded {} meshes", count);
            Ok(true)
        }
        None => Ok(false),
    }
}
