//! File access: geometry file, relative and absolute mesh paths, mesh load failures.

#![allow(clippy::unwrap_used)]

use geomdesc::mesh_io::MeshLoadError;
use geomdesc::{GeometryError, read_geometry};

use crate::helpers::geometry_fixtures::GeometryDir;

const SINGLE_SHELL: &str = "\
# Domain Description 1.1
Interfaces 1
Interface Shell: shell.tri
Domains 2
Domain Inside: -Shell
Domain Outside: +Shell
";

#[test]
fn test_missing_geometry_file() {
    let dir = GeometryDir::new();
    let geom = dir.path("absent.geom");

    let err = read_geometry(&geom).unwrap_err();

    assert!(matches!(err, GeometryError::FileOpen { .. }));
    assert_eq!(err.path(), geom.as_path());
    assert!(err.to_string().contains("absent.geom"));
}

#[test]
fn test_mesh_paths_resolve_against_geometry_directory() {
    let dir = GeometryDir::new();
    dir.tetrahedron("models/shell.tri", 1.0);
    let geom = dir.write("models/head.geom", SINGLE_SHELL);

    let model = read_geometry(&geom).unwrap();

    assert_eq!(model.source(), geom.as_path());
    assert_eq!(model.vertices().len(), 4);
}

#[test]
fn test_absolute_mesh_path() {
    let meshes = GeometryDir::new();
    let shell = meshes.tetrahedron("shell.tri", 1.0);
    let dir = GeometryDir::new();
    let geom = dir.write(
        "head.geom",
        &SINGLE_SHELL.replace("shell.tri", &format!("\"{}\"", shell.display())),
    );

    let model = read_geometry(&geom).unwrap();

    assert_eq!(model.meshes().len(), 1);
}

#[test]
fn test_missing_mesh_file() {
    let dir = GeometryDir::new();
    let geom = dir.write("head.geom", SINGLE_SHELL);

    match read_geometry(&geom).unwrap_err() {
        GeometryError::MeshLoad { path, source } => {
            assert_eq!(path, geom);
            assert!(matches!(source, MeshLoadError::Io { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_malformed_mesh_file() {
    let dir = GeometryDir::new();
    dir.write("shell.tri", "- 4\n0 0 0 0 0 1\n");
    let geom = dir.write("head.geom", SINGLE_SHELL);

    let err = read_geometry(&geom).unwrap_err();

    assert!(matches!(
        err,
        GeometryError::MeshLoad {
            source: MeshLoadError::Format { .. },
            ..
        }
    ));
}

#[test]
fn test_merged_mesh_file_needs_capable_loader() {
    let dir = GeometryDir::new();
    let geom = dir.write(
        "head.geom",
        "\
# Domain Description 1.1
MeshFile \"head.vtp\"
Interfaces 1
Interface Shell: shell
Domains 1
Domain Air: Shell
",
    );

    let err = read_geometry(&geom).unwrap_err();

    assert!(matches!(
        err,
        GeometryError::MeshLoad {
            source: MeshLoadError::Unsupported { .. },
            ..
        }
    ));
}

#[test]
fn test_oversized_mesh_header_is_format_error() {
    let dir = GeometryDir::new();
    dir.write("shell.tri", "- 18446744073709551615\n0 0 0 0 0 1\n");
    let geom = dir.write("head.geom", SINGLE_SHELL);

    match read_geometry(&geom).unwrap_err() {
        GeometryError::MeshLoad {
            source: MeshLoadError::Format { message, .. },
            ..
        } => assert!(message.contains("missing coordinate"), "{message}"),
        other => panic!("unexpected error: {other}"),
    }
}
