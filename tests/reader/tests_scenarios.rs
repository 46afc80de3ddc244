//! End-to-end reads of typical head geometries.

#![allow(clippy::unwrap_used)]

use geomdesc::model::Severity;
use geomdesc::{FormatVersion, GeometryError, GeometryReader, ReaderOptions, TriMeshLoader, read_geometry};

use crate::helpers::geometry_fixtures::GeometryDir;
use crate::helpers::model_assertions::{domain_names, outermost_name};

#[test]
fn test_two_shells_one_region_each_side() {
    let dir = GeometryDir::new();
    dir.head();
    let geom = dir.write(
        "head.geom",
        "\
# Domain Description 1.1
Interfaces 2
Interface Skull: \"skull.tri\"
Interface Brain: \"brain.tri\"
Domains 2
Domain Brain: -Skull
Domain Air: +Skull
",
    );

    let model = read_geometry(&geom).unwrap();

    assert_eq!(model.version(), FormatVersion::Current);
    assert_eq!(domain_names(&model), ["Brain", "Air"]);
    assert!(model.is_nested());
    assert_eq!(outermost_name(&model), Some("Air"));
    assert_eq!(model.vertices().len(), 8);
    assert!(model.notices().is_empty());

    let skull = model.interface(model.interface_by_name("Skull").unwrap());
    let brain = model.interface(model.interface_by_name("Brain").unwrap());
    assert!(skull.outermost);
    assert!(!brain.outermost);
}

#[test]
fn test_unsupported_version_produces_no_model() {
    let dir = GeometryDir::new();
    dir.head();
    let geom = dir.write(
        "head.geom",
        "\
# Domain Description 2.0
Interfaces 1
Interface Skull: skull.tri
Domains 1
Domain Air: Skull
",
    );

    let err = read_geometry(&geom).unwrap_err();
    assert!(matches!(err, GeometryError::FormatVersion { .. }));
    assert_eq!(err.path(), geom.as_path());
}

#[test]
fn test_unknown_interface_names_domain_and_interface() {
    let dir = GeometryDir::new();
    dir.head();
    let geom = dir.write(
        "head.geom",
        "\
# Domain Description 1.1
Interfaces 2
Interface Skull: skull.tri
Interface Brain: brain.tri
Domains 3
Domain Brain: -Brain
Domain CSF: +Brain -Ventricle
Domain Air: +Skull
",
    );

    match read_geometry(&geom).unwrap_err() {
        GeometryError::UnknownInterfaceReference {
            domain, interface, ..
        } => {
            assert_eq!(domain, "CSF");
            assert_eq!(interface, "Ventricle");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_three_layer_head() {
    let dir = GeometryDir::new();
    dir.head();
    dir.tetrahedron("scalp.tri", 3.0);
    let geom = dir.write(
        "head.geom",
        "\
# Domain Description 1.1
# three layer model
Interfaces 3

Interface Brain: brain.tri
Interface Skull: skull.tri
Interface Scalp: scalp.tri

Domains 4
Domain Scalp: +Skull -Scalp
Domain Brain: -Brain
Domain Air: +Scalp
Domain Skull: +Brain -Skull
",
    );

    let model = read_geometry(&geom).unwrap();

    assert_eq!(domain_names(&model), ["Scalp", "Brain", "Air", "Skull"]);
    assert_eq!(outermost_name(&model), Some("Air"));
    assert!(model.is_nested());
    assert_eq!(model.vertices().len(), 12);
    assert_eq!(model.meshes().len(), 3);
}

#[test]
fn test_region_outside_two_shells_is_not_nested() {
    let dir = GeometryDir::new();
    dir.tetrahedron("left.tri", 1.0);
    dir.tetrahedron("right.tri", 1.5);
    dir.tetrahedron("box.tri", 4.0);
    let geom = dir.write(
        "split.geom",
        "\
# Domain Description 1.1
Interfaces 3
Interface Left: left.tri
Interface Right: right.tri
Interface Box: box.tri
Domains 4
Domain Left: -Left
Domain Right: -Right
Domain Between: +Left +Right -Box
Domain Air: +Box
",
    );

    let model = read_geometry(&geom).unwrap();

    assert!(!model.is_nested());
    assert_eq!(outermost_name(&model), Some("Air"));
}

#[test]
fn test_shared_meshes_from_separate_files() {
    let dir = GeometryDir::new();
    dir.halves("top.tri", "bottom.tri");
    let geom = dir.write(
        "shell.geom",
        "\
# Domain Description 1.1
Meshes 2
Mesh top: top.tri
Mesh bottom: bottom.tri
Interfaces 1 Mesh
Interface Shell: top +bottom
Domains 2
Domain Inside: -Shell
Domain Outside: Shell
",
    );

    let model = read_geometry(&geom).unwrap();

    // Coincident vertices of the two halves are merged.
    assert_eq!(model.vertices().len(), 4);
    assert_eq!(model.meshes().len(), 2);
    let shell = model.interface(model.interface_by_name("Shell").unwrap());
    assert_eq!(shell.members.len(), 2);
    assert!(shell.members.iter().all(|m| m.orientation));
    assert_eq!(outermost_name(&model), Some("Outside"));
}

#[test]
fn test_inconsistent_orientation_is_repaired() {
    let dir = GeometryDir::new();
    dir.halves("top.tri", "bottom.tri");
    let geom = dir.write(
        "shell.geom",
        "\
# Domain Description 1.1
Meshes 2
Mesh top: top.tri
Mesh bottom: bottom.tri
Interfaces 1
Interface Shell: top -bottom
Domains 2
Domain Inside: -Shell
Domain Outside: +Shell
",
    );

    let model = read_geometry(&geom).unwrap();

    let shell = model.interface(model.interface_by_name("Shell").unwrap());
    assert!(shell.members.iter().all(|m| m.orientation));
    assert_eq!(model.notices().len(), 1);
    assert_eq!(model.notices()[0].severity, Severity::Warning);

    let strict = GeometryReader::with_options(
        TriMeshLoader::new(),
        ReaderOptions::new().with_repair_orientation(false),
    );
    assert!(matches!(
        strict.read(&geom).unwrap_err(),
        GeometryError::NonClosedInterface { .. }
    ));
}

#[test]
fn test_legacy_file() {
    let dir = GeometryDir::new();
    dir.head();
    let geom = dir.write(
        "head.geom",
        "\
# Domain Description 1.0
Interfaces 2 Mesh
\"skull.tri\"
\"brain.tri\"
Domains 3
Domain Brain -2
Domain Skull 2 -1
Domain Air 1 shared
",
    );

    let model = read_geometry(&geom).unwrap();

    assert_eq!(model.version(), FormatVersion::Legacy);
    assert!(model.interface_by_name("1").is_some());
    assert!(model.interface_by_name("2").is_some());
    assert_eq!(outermost_name(&model), Some("Air"));
    assert!(model.is_nested());
    // Deprecated format, then deprecated keyword.
    assert_eq!(model.notices().len(), 2);
    assert!(model.notices().iter().all(|n| n.severity == Severity::Warning));
}

#[test]
fn test_conductivities_after_read() {
    let dir = GeometryDir::new();
    dir.head();
    let geom = dir.write(
        "head.geom",
        "\
# Domain Description 1.1
Interfaces 2
Interface Skull: skull.tri
Interface Brain: brain.tri
Domains 3
Domain Brain: -Brain
Domain Skull: +Brain -Skull
Domain Air: +Skull
",
    );
    let mut model = read_geometry(&geom).unwrap();

    model
        .assign_conductivities([("Brain", 0.33), ("Skull", 0.0042), ("Air", 0.0)])
        .unwrap();

    let skull = model.domain(model.domain_by_name("Skull").unwrap());
    assert_eq!(skull.conductivity, Some(0.0042));
}
