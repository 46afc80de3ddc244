use smol_str::SmolStr;

use crate::base::InterfaceId;

/// One side of an interface contributing to a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HalfSpace {
    pub interface: InterfaceId,
    /// `true` for the inside of the interface, `false` for the outside.
    pub inside: bool,
}

impl HalfSpace {
    pub fn new(interface: InterfaceId, inside: bool) -> Self {
        Self { interface, inside }
    }
}

/// A named region bounded by half-spaces.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Domain {
    pub name: SmolStr,
    pub half_spaces: Vec<HalfSpace>,
    pub outermost: bool,
    /// Attached after parsing by [`GeometryModel::assign_conductivities`](super::GeometryModel::assign_conductivities).
    pub conductivity: Option<f64>,
}

impl Domain {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            half_spaces: Vec::new(),
            outermost: false,
            conductivity: None,
        }
    }

    /// True when no half-space is an inside one.
    pub fn is_outside_only(&self) -> bool {
        self.half_spaces.iter().all(|h| !h.inside)
    }

    /// Number of half-spaces taken on the outside of their interface.
    pub fn outside_count(&self) -> usize {
        self.half_spaces.iter().filter(|h| !h.inside).count()
    }
}
