pub mod adjacency;
pub mod loose;
pub mod normals;
pub mod weld;

use glam::DVec3;
use tracing::debug;

use crate::config::CleanupConfig;
use crate::types::TriangleMesh;

/// Counters from one build run.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuildStats {
    pub points_in: usize,
    /// Trailing points that did not complete a triple.
    pub points_dropped: usize,
    pub triangles_formed: usize,
    pub vertices_welded: usize,
    pub degenerate_triangles_removed: usize,
    pub collapsed_edges: usize,
    pub loose_edges_removed: usize,
    pub triangles_flipped: usize,
}

impl BuildStats {
    /// One-line human summary.
    pub fn summary(&self) -> String {
        format!(
            "Build: {} points ({} dropped), {} triangles ({} degenerate), {} welded, {} loose edges removed, {} flipped",
            self.points_in,
            self.points_dropped,
            self.triangles_formed,
            self.degenerate_triangles_removed,
            self.vertices_welded,
            self.loose_edges_removed,
            self.triangles_flipped,
        )
    }
}

/// Build a mesh from the decoded point stream and run the cleanup passes.
///
/// Stage order is fixed: vertex insertion, triangle formation, weld, loose
/// edge removal, winding orientation. Construction never fails; malformed
/// geometry is dropped or coalesced, not reported.
pub fn build(points: &[DVec3], config: &CleanupConfig) -> (TriangleMesh, BuildStats) {
    let mut stats = BuildStats {
        points_in: points.len(),
        ..Default::default()
    };
    let mut mesh = TriangleMesh::default();

    // 1:1 insertion in input order; dedup is the weld pass's job.
    mesh.positions.reserve(points.len() * 3);
    for p in points {
        mesh.positions
            .extend_from_slice(&[p.x as f32, p.y as f32, p.z as f32]);
    }

    // Non-overlapping triples; a partial tail is dropped.
    let complete = points.len() - points.len() % 3;
    stats.points_dropped = points.len() - complete;
    mesh.triangles.reserve(complete / 3);
    for i in (0..complete).step_by(3) {
        mesh.triangles
            .push([i as u32, i as u32 + 1, i as u32 + 2]);
    }
    stats.triangles_formed = mesh.triangle_count();
    debug!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        dropped = stats.points_dropped,
        "Formed triangles"
    );

    let outcome = weld::merge_by_distance(&mut mesh, config.merge_threshold);
    stats.vertices_welded = outcome.vertices_merged;
    stats.degenerate_triangles_removed = outcome.degenerate_removed;
    stats.collapsed_edges = outcome.collapsed_edges;
    debug!(
        welded = outcome.vertices_merged,
        degenerate = outcome.degenerate_removed,
        "Merged by distance"
    );

    if config.remove_loose {
        stats.loose_edges_removed = loose::remove_loose_edges(&mut mesh);
        debug!(removed = stats.loose_edges_removed, "Removed loose edges");
    }

    if config.orient_normals {
        stats.triangles_flipped = normals::orient_consistent(&mut mesh);
        debug!(flipped = stats.triangles_flipped, "Oriented windings");
    }

    (mesh, stats)
}
