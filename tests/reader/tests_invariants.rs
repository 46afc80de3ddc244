//! Properties every successfully read model has.

#![allow(clippy::unwrap_used)]

use rstest::rstest;

use geomdesc::{GeometryReader, ReaderOptions, TriMeshLoader, read_geometry};

use crate::helpers::geometry_fixtures::GeometryDir;
use crate::helpers::model_assertions::{
    assert_all_closed, assert_indices_in_pool, assert_outermost_flags,
};

const NESTED: &str = "\
# Domain Description 1.1
Interfaces 2
Interface Skull: skull.tri
Interface Brain: brain.tri
Domains 3
Domain Brain: -Brain
Domain Skull: +Brain -Skull
Domain Air: +Skull
";

const REPAIRED: &str = "\
# Domain Description 1.1
Meshes 4
Mesh top: top.tri
Mesh bottom: bottom.tri
Mesh skull: skull.tri
Mesh brain: brain.tri
Interfaces 2
Interface Shell: -top bottom
Interface Skull: skull
Domains 2
Domain Inside: -Shell
Domain Outside: +Shell
";

const NO_OUTERMOST: &str = "\
# Domain Description 1.1
Interfaces 2
Interface Skull: skull.tri
Interface Brain: brain.tri
Domains 2
Domain Brain: -Brain
Domain Skull: +Brain -Skull
";

fn prepared() -> GeometryDir {
    let dir = GeometryDir::new();
    dir.head();
    dir.halves("top.tri", "bottom.tri");
    dir
}

#[rstest]
#[case::nested(NESTED)]
#[case::repaired(REPAIRED)]
#[case::no_outermost(NO_OUTERMOST)]
fn test_model_invariants(#[case] content: &str) {
    let dir = prepared();
    let geom = dir.write("head.geom", content);

    let model = read_geometry(&geom).unwrap();

    assert_all_closed(&model);
    assert_outermost_flags(&model);
    assert_indices_in_pool(&model);
}

#[test]
fn test_reading_twice_gives_equal_models() {
    let dir = prepared();
    let geom = dir.write("head.geom", REPAIRED);

    let first = read_geometry(&geom).unwrap();
    let second = read_geometry(&geom).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_no_outermost_is_optional_unless_required() {
    let dir = prepared();
    let geom = dir.write("head.geom", NO_OUTERMOST);

    let model = read_geometry(&geom).unwrap();
    assert_eq!(model.outermost_domain(), None);
    assert!(model.notices().iter().any(|n| n.message.contains("outermost")));

    let strict = GeometryReader::with_options(
        TriMeshLoader::new(),
        ReaderOptions::new().with_require_outermost(true),
    );
    assert!(strict.read(&geom).is_err());
}

#[test]
fn test_custom_comment_marker() {
    let dir = prepared();
    let geom = dir.write("head.geom", &NESTED.replace("Domains 3", "% regions\nDomains 3"));
    let reader = GeometryReader::with_options(
        TriMeshLoader::new(),
        ReaderOptions::new().with_comment_marker('%'),
    );

    let model = reader.read(&geom).unwrap();

    assert_eq!(model.domains().len(), 3);
}
