//! Structural assertions over a read model.

use geomdesc::GeometryModel;
use geomdesc::topology::is_closed;

/// Names of the domains in model order.
pub fn domain_names(model: &GeometryModel) -> Vec<&str> {
    model.domains().iter().map(|d| d.name.as_str()).collect()
}

/// Name of the outermost domain, if any.
pub fn outermost_name(model: &GeometryModel) -> Option<&str> {
    model
        .outermost_domain()
        .map(|id| model.domain(id).name.as_str())
}

/// Every interface of the model is closed.
pub fn assert_all_closed(model: &GeometryModel) {
    for interface in model.interfaces() {
        assert!(
            is_closed(&interface.members, model.meshes()),
            "interface \"{}\" is not closed",
            interface.name
        );
    }
}

/// Outermost flags agree with `outermost_domain()`.
pub fn assert_outermost_flags(model: &GeometryModel) {
    let flagged: Vec<_> = model.domains().iter().filter(|d| d.outermost).collect();
    match model.outermost_domain() {
        Some(id) => {
            assert_eq!(flagged.len(), 1, "exactly one outermost domain");
            let outermost = model.domain(id);
            assert!(outermost.outermost);
            assert!(outermost.half_spaces.iter().all(|h| !h.inside));
            for interface in model.interfaces() {
                let bounds = outermost
                    .half_spaces
                    .iter()
                    .any(|h| model.interface(h.interface).name == interface.name);
                assert_eq!(interface.outermost, bounds, "interface \"{}\"", interface.name);
            }
        }
        None => {
            assert!(flagged.is_empty());
            assert!(model.interfaces().iter().all(|i| !i.outermost));
        }
    }
}

/// Every triangle index points into the vertex pool.
pub fn assert_indices_in_pool(model: &GeometryModel) {
    let len = model.vertices().len();
    for mesh in model.meshes() {
        for triangle in &mesh.triangles {
            assert!(triangle.0.iter().all(|&i| i < len), "mesh \"{}\"", mesh.name);
        }
    }
}
