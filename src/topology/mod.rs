//! Topology analysis of a parsed geometry.
//!
//! Runs over the builder before the model is released:
//! - closure check and orientation repair of interfaces (memoized)
//! - outermost domain detection
//! - nested / non-nested classification

pub mod closure;
pub mod nesting;
pub mod outermost;

pub use closure::{ClosureOutcome, check_and_repair, is_closed};
pub use nesting::{classify_nested, mesh_orientation_balance};
pub use outermost::{find_outermost, mark_outermost};

use crate::base::{DomainId, InterfaceId};
use crate::error::{GeometryError, Result};
use crate::model::{GeometryBuilder, Notice};

/// Runs the closure check at most once per interface.
#[derive(Debug)]
pub(crate) struct ClosureTracker {
    checked: Vec<bool>,
    repair: bool,
}

impl ClosureTracker {
    pub(crate) fn new(interface_count: usize, repair: bool) -> Self {
        Self {
            checked: vec![false; interface_count],
            repair,
        }
    }

    /// Check (and possibly repair) interface `id` unless already done.
    pub(crate) fn ensure_closed(
        &mut self,
        builder: &mut GeometryBuilder,
        id: InterfaceId,
    ) -> Result<()> {
        if self.checked[id.index()] {
            return Ok(());
        }

        let interface = &mut builder.interfaces[id.index()];
        match check_and_repair(interface, &builder.meshes, self.repair) {
            ClosureOutcome::Closed => {
                tracing::trace!("interface \"{}\" is closed", interface.name);
            }
            ClosureOutcome::Repaired { flipped } => {
                let names: Vec<&str> = flipped
                    .iter()
                    .map(|m| builder.meshes[m.index()].name.as_str())
                    .collect();
                let message = format!(
                    "interface \"{}\" was not closed; flipped mesh(es) {}",
                    interface.name,
                    names.join(", ")
                );
                tracing::warn!("{}", message);
                builder.notice(Notice::warning(message));
            }
            ClosureOutcome::Open => {
                return Err(GeometryError::NonClosedInterface {
                    path: builder.source.clone(),
                    interface: interface.name.to_string(),
                });
            }
        }

        self.checked[id.index()] = true;
        Ok(())
    }

    /// Check every interface no domain referenced.
    pub(crate) fn ensure_all_closed(&mut self, builder: &mut GeometryBuilder) -> Result<()> {
        for index in 0..builder.interfaces.len() {
            self.ensure_closed(builder, InterfaceId::new(index))?;
        }
        Ok(())
    }
}

/// Mark the outermost domain and classify nesting.
pub(crate) fn analyze(builder: &mut GeometryBuilder) -> (Option<DomainId>, bool) {
    let outermost = mark_outermost(&mut builder.domains, &mut builder.interfaces);
    match outermost {
        Some(id) => tracing::debug!(
            "outermost domain is \"{}\"",
            builder.domains[id.index()].name
        ),
        None => {
            let message = "no domain lies outside all of its interfaces; outermost domain is unset";
            tracing::warn!("{}", message);
            builder.notice(Notice::warning(message));
        }
    }

    let nested = classify_nested(
        &builder.domains,
        &builder.interfaces,
        builder.meshes.len(),
        outermost,
    );
    tracing::debug!("geometry is {}", if nested { "nested" } else { "non-nested" });
    (outermost, nested)
}
