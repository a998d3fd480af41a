use glam::DVec3;

/// The fundamental geometry container.
///
/// Positions are a contiguous `Vec<f32>` for zero-copy handoff to scene
/// hosts; topology is index-based. `edges` holds only explicit standalone
/// edges (faces that collapsed to two distinct vertices during welding) --
/// edges implied by triangles are not stored.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Interleaved positions: [x, y, z, x, y, z, ...]
    pub positions: Vec<f32>,
    /// Triangle faces as vertex index triples
    pub triangles: Vec<[u32; 3]>,
    /// Explicit standalone edges, v0 < v1
    pub edges: Vec<[u32; 2]>,
}

impl TriangleMesh {
    /// Number of vertices (positions / 3).
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of triangle faces.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Number of explicit standalone edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the mesh contains no geometry.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position of vertex `i`, promoted to f64 for math.
    pub fn position(&self, i: usize) -> DVec3 {
        DVec3::new(
            self.positions[i * 3] as f64,
            self.positions[i * 3 + 1] as f64,
            self.positions[i * 3 + 2] as f64,
        )
    }
}
