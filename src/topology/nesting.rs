//! Nested / non-nested classification.
//!
//! A geometry is non-nested when a domain other than the outermost lies
//! outside two or more interfaces, or when a mesh is used once with its
//! stored orientation and once flipped across the domains referencing it.

use crate::base::DomainId;
use crate::model::{Domain, Interface};

fn has_multi_outside_domain(domains: &[Domain], outermost: Option<DomainId>) -> bool {
    domains
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(DomainId::new(*i)) != outermost)
        .any(|(_, d)| d.outside_count() >= 2)
}

/// Net orientation of every mesh over all (domain, half-space, member)
/// triples, or `None` for meshes no domain reaches.
pub fn mesh_orientation_balance(
    domains: &[Domain],
    interfaces: &[Interface],
    mesh_count: usize,
) -> Vec<Option<i32>> {
    let mut balance = vec![None; mesh_count];
    for domain in domains {
        for half_space in &domain.half_spaces {
            for member in &interfaces[half_space.interface.index()].members {
                let slot: &mut Option<i32> = &mut balance[member.mesh.index()];
                *slot = Some(slot.unwrap_or(0) + member.sign());
            }
        }
    }
    balance
}

/// Classify the geometry as nested (`true`) or not.
pub fn classify_nested(
    domains: &[Domain],
    interfaces: &[Interface],
    mesh_count: usize,
    outermost: Option<DomainId>,
) -> bool {
    if has_multi_outside_domain(domains, outermost) {
        return false;
    }
    !mesh_orientation_balance(domains, interfaces, mesh_count)
        .into_iter()
        .any(|b| b == Some(0))
}
