use crate::base::DomainId;
use crate::model::{Domain, Interface};

/// First domain, in parse order, with no inside half-space.
pub fn find_outermost(domains: &[Domain]) -> Option<DomainId> {
    domains
        .iter()
        .position(Domain::is_outside_only)
        .map(DomainId::new)
}

/// Flag the outermost domain and every interface it references.
pub fn mark_outermost(domains: &mut [Domain], interfaces: &mut [Interface]) -> Option<DomainId> {
    let id = find_outermost(domains)?;
    let domain = &mut domains[id.index()];
    domain.outermost = true;
    for half_space in &domain.half_spaces {
        interfaces[half_space.interface.index()].outermost = true;
    }
    Some(id)
}
