use std::collections::{HashMap, HashSet};

use crate::builder::adjacency::normalize_edge;
use crate::types::TriangleMesh;

/// Counters from one merge-by-distance pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WeldOutcome {
    /// Vertices coalesced into a surviving vertex.
    pub vertices_merged: usize,
    /// Triangles removed for having fewer than 3 distinct indices.
    pub degenerate_removed: usize,
    /// Removed triangles that left an explicit edge behind.
    pub collapsed_edges: usize,
}

/// Coalesce vertices no farther apart than `threshold`.
///
/// The lowest-index vertex of each cluster survives with its original
/// position; merged-away slots are compacted out, preserving first-seen
/// order. Triangles are rewritten to the surviving indices; a triangle left
/// with two distinct indices collapses into the explicit edge set, one left
/// with a single index vanishes. Running the pass a second time on its own
/// output changes nothing.
pub fn merge_by_distance(mesh: &mut TriangleMesh, threshold: f64) -> WeldOutcome {
    let vertex_count = mesh.vertex_count();
    if vertex_count == 0 || threshold < 0.0 {
        return WeldOutcome::default();
    }

    // Cell size 2x the threshold keeps every candidate pair within the
    // 3x3x3 neighborhood. Floor guards a zero threshold (exact-duplicate
    // merging only).
    let cell_size = (threshold * 2.0).max(1e-12);

    let mut spatial_hash: HashMap<(i64, i64, i64), Vec<u32>> = HashMap::new();
    for i in 0..vertex_count {
        let cell = pos_to_cell(mesh, i, cell_size);
        spatial_hash.entry(cell).or_default().push(i as u32);
    }

    // Union-find toward the lowest index, over every pair within threshold.
    let mut parent: Vec<u32> = (0..vertex_count as u32).collect();
    let mut merged = 0usize;

    for i in 0..vertex_count {
        let p = mesh.position(i);
        let cell = pos_to_cell(mesh, i, cell_size);

        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let neighbor = (cell.0 + dx, cell.1 + dy, cell.2 + dz);
                    let Some(candidates) = spatial_hash.get(&neighbor) else {
                        continue;
                    };
                    for &j in candidates {
                        if j as usize <= i {
                            continue;
                        }
                        if p.distance(mesh.position(j as usize)) <= threshold {
                            let ri = find(&mut parent, i as u32);
                            let rj = find(&mut parent, j);
                            if ri != rj {
                                parent[ri.max(rj) as usize] = ri.min(rj);
                                merged += 1;
                            }
                        }
                    }
                }
            }
        }
    }

    if merged == 0 {
        return WeldOutcome::default();
    }

    // Compact: survivors are cluster roots, kept in first-seen order.
    let mut new_index = vec![u32::MAX; vertex_count];
    let mut new_positions = Vec::with_capacity((vertex_count - merged) * 3);
    for i in 0..vertex_count {
        if find(&mut parent, i as u32) == i as u32 {
            new_index[i] = (new_positions.len() / 3) as u32;
            new_positions.extend_from_slice(&mesh.positions[i * 3..i * 3 + 3]);
        }
    }
    let remap = |parent: &mut Vec<u32>, v: u32| new_index[find(parent, v) as usize];

    // Rewrite triangles, collapsing degenerates.
    let mut outcome = WeldOutcome {
        vertices_merged: merged,
        ..Default::default()
    };
    let mut edge_set: HashSet<(u32, u32)> = HashSet::new();

    for &[a, b] in &mesh.edges {
        let (a, b) = (remap(&mut parent, a), remap(&mut parent, b));
        if a != b {
            edge_set.insert(normalize_edge(a, b));
        }
    }

    let mut kept = Vec::with_capacity(mesh.triangles.len());
    for &[a, b, c] in &mesh.triangles {
        let t = [
            remap(&mut parent, a),
            remap(&mut parent, b),
            remap(&mut parent, c),
        ];
        if t[0] != t[1] && t[1] != t[2] && t[0] != t[2] {
            kept.push(t);
        } else {
            outcome.degenerate_removed += 1;
            if let Some(edge) = surviving_edge(t) {
                outcome.collapsed_edges += 1;
                edge_set.insert(edge);
            }
        }
    }

    mesh.positions = new_positions;
    mesh.triangles = kept;
    mesh.edges = edge_set.into_iter().map(|(a, b)| [a, b]).collect();
    mesh.edges.sort_unstable();

    outcome
}

/// Find with path compression.
fn find(parent: &mut Vec<u32>, v: u32) -> u32 {
    let mut root = v;
    while parent[root as usize] != root {
        root = parent[root as usize];
    }
    let mut cur = v;
    while parent[cur as usize] != root {
        let next = parent[cur as usize];
        parent[cur as usize] = root;
        cur = next;
    }
    root
}

/// The edge left behind when a triangle has exactly two distinct indices.
fn surviving_edge(t: [u32; 3]) -> Option<(u32, u32)> {
    if t[0] == t[1] && t[1] == t[2] {
        None
    } else if t[0] == t[1] {
        Some(normalize_edge(t[0], t[2]))
    } else if t[1] == t[2] {
        Some(normalize_edge(t[0], t[1]))
    } else {
        // t[0] == t[2]
        Some(normalize_edge(t[0], t[1]))
    }
}

fn pos_to_cell(mesh: &TriangleMesh, i: usize, cell_size: f64) -> (i64, i64, i64) {
    let p = mesh.position(i);
    (
        (p.x / cell_size).floor() as i64,
        (p.y / cell_size).floor() as i64,
        (p.z / cell_size).floor() as i64,
    )
}
