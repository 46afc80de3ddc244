//! Closure check and orientation repair of interfaces.
//!
//! An interface is closed when every directed edge of its oriented triangles
//! appears exactly once and its reverse appears exactly once, i.e. every edge
//! is shared by exactly two triangles traversing it in opposite directions.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use crate::base::MeshId;
use crate::model::{Interface, Mesh, OrientedMesh};

/// Result of [`check_and_repair`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClosureOutcome {
    /// Closed as written.
    Closed,
    /// Closed after flipping the listed member meshes.
    Repaired { flipped: Vec<MeshId> },
    /// Not closed; member orientations are left as written.
    Open,
}

impl ClosureOutcome {
    pub fn is_closed(&self) -> bool {
        !matches!(self, Self::Open)
    }
}

type Edge = (usize, usize);

fn directed_edges(members: &[OrientedMesh], meshes: &[Mesh]) -> FxHashMap<Edge, u32> {
    let mut edges: FxHashMap<Edge, u32> = FxHashMap::default();
    for member in members {
        for triangle in &meshes[member.mesh.index()].triangles {
            for edge in triangle.edges(member.orientation) {
                *edges.entry(edge).or_insert(0) += 1;
            }
        }
    }
    edges
}

/// Whether the oriented members form a closed, consistently oriented surface.
pub fn is_closed(members: &[OrientedMesh], meshes: &[Mesh]) -> bool {
    let edges = directed_edges(members, meshes);
    if edges.is_empty() {
        return false;
    }
    edges.iter().all(|(&(a, b), &count)| {
        a != b && count == 1 && edges.get(&(b, a)).copied() == Some(1)
    })
}

/// Orientations making neighbouring members agree along their shared edges.
///
/// Each connected group of members keeps the orientation of its first
/// member; the others are set relative to the neighbour they are reached
/// from, visiting members and neighbours in index order.
fn propagate_orientations(members: &[OrientedMesh], meshes: &[Mesh]) -> Vec<bool> {
    // Stored (unflipped) directed edge -> members owning it.
    let mut owners: FxHashMap<Edge, Vec<usize>> = FxHashMap::default();
    for (i, member) in members.iter().enumerate() {
        for triangle in &meshes[member.mesh.index()].triangles {
            for edge in triangle.edges(true) {
                owners.entry(edge).or_default().push(i);
            }
        }
    }

    // (i, j) with i < j -> (votes for same orientation, votes for opposite)
    let mut votes: FxHashMap<(usize, usize), (u32, u32)> = FxHashMap::default();
    for (&(a, b), here) in &owners {
        for &i in here {
            for &j in here.iter().filter(|&&j| j > i) {
                votes.entry((i, j)).or_default().1 += 1;
            }
        }
        if a < b {
            if let Some(reverse) = owners.get(&(b, a)) {
                for &i in here {
                    for &j in reverse.iter().filter(|&&j| j != i) {
                        votes.entry((i.min(j), i.max(j))).or_default().0 += 1;
                    }
                }
            }
        }
    }

    let mut neighbours: Vec<Vec<(usize, bool)>> = vec![Vec::new(); members.len()];
    for (&(i, j), &(same, opposite)) in &votes {
        let flip = opposite > same;
        neighbours[i].push((j, flip));
        neighbours[j].push((i, flip));
    }
    for list in &mut neighbours {
        list.sort_unstable();
    }

    let mut orientation: Vec<Option<bool>> = vec![None; members.len()];
    let mut queue = VecDeque::new();
    for root in 0..members.len() {
        if orientation[root].is_some() {
            continue;
        }
        orientation[root] = Some(members[root].orientation);
        queue.push_back(root);
        while let Some(i) = queue.pop_front() {
            let current = orientation[i].unwrap_or(members[i].orientation);
            for &(j, flip) in &neighbours[i] {
                if orientation[j].is_none() {
                    orientation[j] = Some(current != flip);
                    queue.push_back(j);
                }
            }
        }
    }

    orientation
        .into_iter()
        .zip(members)
        .map(|(o, m)| o.unwrap_or(m.orientation))
        .collect()
}

/// Check `interface` and, if allowed, try one orientation repair pass.
///
/// On [`ClosureOutcome::Open`] the member orientations are unchanged.
pub fn check_and_repair(interface: &mut Interface, meshes: &[Mesh], repair: bool) -> ClosureOutcome {
    if is_closed(&interface.members, meshes) {
        return ClosureOutcome::Closed;
    }
    if !repair {
        return ClosureOutcome::Open;
    }

    let orientations = propagate_orientations(&interface.members, meshes);
    let candidate: Vec<OrientedMesh> = interface
        .members
        .iter()
        .zip(&orientations)
        .map(|(m, &o)| OrientedMesh::new(m.mesh, o))
        .collect();

    if !is_closed(&candidate, meshes) {
        return ClosureOutcome::Open;
    }

    let flipped = interface
        .members
        .iter()
        .zip(&candidate)
        .filter(|(before, after)| before.orientation != after.orientation)
        .map(|(before, _)| before.mesh)
        .collect();
    interface.members = candidate;
    ClosureOutcome::Repaired { flipped }
}
